// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token-operation normalisers.
//!
//! Supply and amount arithmetic lives here: display-unit inputs are
//! scaled by the token's decimal count (declared at creation, or fetched
//! from the mirror for existing tokens) into integer base units.

use serde_json::Value;
use std::collections::BTreeMap;

use hak_core::{
    AccountId, AgentKitError, Context, HederaClient, NftTransfer, PublicKey, TokenAllowance,
    TokenId, TokenKeys, TokenParams, TokenSupplyType, TokenType, TransferLedger,
};
use hak_core::NftAllowance;
use hak_mirror::MirrornodeService;

use crate::resolver::AccountResolver;
use crate::schemas::{
    ApproveNftAllowanceNormalised, ApproveNftAllowanceParams, ApproveTokenAllowanceNormalised,
    ApproveTokenAllowanceParams, AssociateTokenNormalised, AssociateTokenParams,
    CreateFungibleTokenParams, CreateNonFungibleTokenParams, CreateTokenNormalised,
    DeleteTokenNormalised, DeleteTokenParams, DissociateTokenNormalised, DissociateTokenParams,
    GetTokenInfoParams, MintFungibleTokenNormalised, MintFungibleTokenParams,
    MintNonFungibleTokenNormalised, MintNonFungibleTokenParams, TokenTransferInput,
    TransferFungibleTokenNormalised, TransferFungibleTokenParams,
    TransferFungibleTokenWithAllowanceNormalised, TransferFungibleTokenWithAllowanceParams,
    TransferNftWithAllowanceNormalised, TransferNftWithAllowanceParams, UpdateTokenNormalised,
    UpdateTokenParams, parse_params,
};

use super::{maybe_schedule, truncate_memo};

/// Default max supply (display units) for finite tokens.
const DEFAULT_FINITE_MAX_SUPPLY: u64 = 1_000_000;

/// Default max serial count for NFT classes.
const DEFAULT_NFT_MAX_SUPPLY: u64 = 100;

fn scale_error() -> AgentKitError {
    AgentKitError::SupplyConstraint("supply exceeds the representable range".into())
}

/// Fetch a token's decimals from the mirror, or fail with the
/// decimals-unavailable kind.
async fn fetch_decimals(
    token_id: &str,
    mirror: &dyn MirrornodeService,
) -> Result<u32, AgentKitError> {
    let info = mirror.get_token_info(token_id).await.map_err(|e| {
        AgentKitError::DecimalsUnavailable {
            token_id: token_id.to_string(),
            cause: e.to_string(),
        }
    })?;
    info.decimals_u32()
        .ok_or_else(|| AgentKitError::DecimalsUnavailable {
            token_id: token_id.to_string(),
            cause: "decimals missing from mirror response".into(),
        })
}

/// Scale a display amount by `10^decimals`, rounding to nearest.
fn to_base_units(amount: f64, decimals: u32) -> i64 {
    (amount * 10f64.powi(decimals as i32)).round() as i64
}

/// The supply key for a new token: the treasury account's key from the
/// mirror, falling back to the operator key.
async fn resolve_supply_key(
    treasury: &str,
    client: &HederaClient,
    mirror: &dyn MirrornodeService,
) -> Option<PublicKey> {
    let mirror_key = match mirror.get_account(treasury).await {
        Ok(account) => account
            .account_public_key()
            .and_then(|k| PublicKey::parse(k).ok()),
        Err(e) => {
            tracing::debug!(target: "hak_kit", treasury, error = %e, "mirror key lookup failed");
            None
        }
    };
    mirror_key.or_else(|| client.operator_public_key().cloned())
}

/// Normalise `create_fungible_token` parameters.
///
/// Supply semantics: supplies are display-unit inputs scaled by
/// `10^decimals`; an explicit supply type wins, otherwise the presence
/// of `max_supply` implies FINITE; finite tokens get a default max of
/// 1,000,000 and a nonzero initial supply.
pub async fn create_fungible_token(
    params: &Value,
    context: &Context,
    client: &HederaClient,
    mirror: &dyn MirrornodeService,
) -> Result<CreateTokenNormalised, AgentKitError> {
    let parsed: CreateFungibleTokenParams = parse_params(params)?;

    let decimals_raw = parsed.decimals.unwrap_or(0);
    if decimals_raw < 0 {
        return Err(AgentKitError::SupplyConstraint(format!(
            "Invalid decimals ({decimals_raw}): must be non-negative"
        )));
    }
    let decimals = decimals_raw as u32;
    let factor = 10u64.checked_pow(decimals).ok_or_else(scale_error)?;
    let scale = |display: u64| display.checked_mul(factor).ok_or_else(scale_error);

    let supply_type = match parsed.supply_type {
        Some(1) => TokenSupplyType::Finite,
        Some(_) => TokenSupplyType::Infinite,
        None if parsed.max_supply.is_some() => TokenSupplyType::Finite,
        None => TokenSupplyType::Infinite,
    };
    if supply_type == TokenSupplyType::Infinite && parsed.max_supply.is_some() {
        return Err(AgentKitError::SupplyConstraint(
            "max_supply cannot be set when supply_type is INFINITE".into(),
        ));
    }

    let mut initial_supply = scale(parsed.initial_supply.unwrap_or(0))?;
    let max_supply = match supply_type {
        TokenSupplyType::Finite => {
            Some(scale(parsed.max_supply.unwrap_or(DEFAULT_FINITE_MAX_SUPPLY))?)
        }
        TokenSupplyType::Infinite => None,
    };
    if supply_type == TokenSupplyType::Finite && initial_supply == 0 {
        // The ledger rejects finite-supply tokens with zero initial supply.
        initial_supply = factor;
    }
    if let Some(max) = max_supply {
        if initial_supply > max {
            return Err(AgentKitError::SupplyConstraint(format!(
                "Initial supply ({initial_supply}) cannot exceed max supply ({max})"
            )));
        }
    }

    let treasury = AccountResolver::resolve_account(
        parsed.treasury_account_id.as_deref(),
        context,
        client,
    )?;
    let treasury_account_id: AccountId = treasury.parse()?;
    let auto_renew_account_id = AccountResolver::get_default_account(context, client)
        .and_then(|s| s.parse().ok());

    let needs_supply_key =
        parsed.is_supply_key.unwrap_or(false) || supply_type == TokenSupplyType::Finite;
    let keys = if needs_supply_key {
        resolve_supply_key(&treasury, client, mirror)
            .await
            .map(|key| TokenKeys {
                supply_key: Some(key),
                ..TokenKeys::default()
            })
    } else {
        None
    };

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(CreateTokenNormalised {
        token_params: TokenParams {
            token_name: parsed.token_name,
            token_symbol: parsed.token_symbol,
            decimals,
            initial_supply,
            max_supply,
            supply_type,
            token_type: TokenType::FungibleCommon,
            treasury_account_id,
            auto_renew_account_id,
        },
        keys,
        scheduling_params,
    })
}

/// Normalise `create_non_fungible_token` parameters.
///
/// NFT classes are always finite with zero decimals, and minting
/// requires a supply key.
pub async fn create_non_fungible_token(
    params: &Value,
    context: &Context,
    client: &HederaClient,
    mirror: &dyn MirrornodeService,
) -> Result<CreateTokenNormalised, AgentKitError> {
    let parsed: CreateNonFungibleTokenParams = parse_params(params)?;

    let treasury = AccountResolver::resolve_account(
        parsed.treasury_account_id.as_deref(),
        context,
        client,
    )?;
    let treasury_account_id: AccountId = treasury.parse()?;
    let auto_renew_account_id = AccountResolver::get_default_account(context, client)
        .and_then(|s| s.parse().ok());

    let keys = resolve_supply_key(&treasury, client, mirror)
        .await
        .map(|key| TokenKeys {
            supply_key: Some(key),
            ..TokenKeys::default()
        });

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(CreateTokenNormalised {
        token_params: TokenParams {
            token_name: parsed.token_name,
            token_symbol: parsed.token_symbol,
            decimals: 0,
            initial_supply: 0,
            max_supply: Some(parsed.max_supply.unwrap_or(DEFAULT_NFT_MAX_SUPPLY)),
            supply_type: TokenSupplyType::Finite,
            token_type: TokenType::NonFungibleUnique,
            treasury_account_id,
            auto_renew_account_id,
        },
        keys,
        scheduling_params,
    })
}

/// Normalise `mint_fungible_token` parameters.
///
/// The display amount is scaled by the token's on-chain decimals,
/// fetched from the mirror.
pub async fn mint_fungible_token(
    params: &Value,
    context: &Context,
    client: &HederaClient,
    mirror: &dyn MirrornodeService,
) -> Result<MintFungibleTokenNormalised, AgentKitError> {
    let parsed: MintFungibleTokenParams = parse_params(params)?;

    let token_id: TokenId = parsed.token_id.parse()?;
    let decimals = fetch_decimals(&parsed.token_id, mirror).await?;

    let base_units = to_base_units(parsed.amount.value(), decimals);
    if base_units <= 0 {
        return Err(AgentKitError::InvalidAmount(parsed.amount.value().to_string()));
    }

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(MintFungibleTokenNormalised {
        token_id,
        amount: base_units as u64,
        scheduling_params,
    })
}

/// Normalise `mint_non_fungible_token` parameters.
pub async fn mint_non_fungible_token(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<MintNonFungibleTokenNormalised, AgentKitError> {
    let parsed: MintNonFungibleTokenParams = parse_params(params)?;

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(MintNonFungibleTokenNormalised {
        token_id: parsed.token_id.parse()?,
        metadata: parsed.uris.into_iter().map(String::into_bytes).collect(),
        scheduling_params,
    })
}

/// Normalise `associate_token` parameters.
pub async fn associate_token(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<AssociateTokenNormalised, AgentKitError> {
    let parsed: AssociateTokenParams = parse_params(params)?;

    let account =
        AccountResolver::resolve_account(parsed.account_id.as_deref(), context, client)?;
    let token_ids = parse_token_ids(&parsed.token_ids)?;

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(AssociateTokenNormalised {
        account_id: account.parse()?,
        token_ids,
        scheduling_params,
    })
}

/// Normalise `dissociate_token` parameters.
pub async fn dissociate_token(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<DissociateTokenNormalised, AgentKitError> {
    let parsed: DissociateTokenParams = parse_params(params)?;

    let account =
        AccountResolver::resolve_account(parsed.account_id.as_deref(), context, client)?;
    let token_ids = parse_token_ids(&parsed.token_ids)?;

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(DissociateTokenNormalised {
        token_ids,
        account_id: account.parse()?,
        transaction_memo: truncate_memo(parsed.transaction_memo),
        scheduling_params,
    })
}

fn parse_token_ids(raw: &[String]) -> Result<Vec<TokenId>, AgentKitError> {
    raw.iter()
        .map(|id| id.parse().map_err(AgentKitError::from))
        .collect()
}

/// Normalise `update_token` parameters.
pub fn update_token(
    params: &Value,
    _context: &Context,
    client: &HederaClient,
) -> Result<UpdateTokenNormalised, AgentKitError> {
    let parsed: UpdateTokenParams = parse_params(params)?;

    let default_key = client.operator_public_key();
    let keys = TokenKeys {
        admin_key: AccountResolver::resolve_key(parsed.admin_key.as_ref(), default_key)?,
        supply_key: AccountResolver::resolve_key(parsed.supply_key.as_ref(), default_key)?,
        wipe_key: AccountResolver::resolve_key(parsed.wipe_key.as_ref(), default_key)?,
        freeze_key: AccountResolver::resolve_key(parsed.freeze_key.as_ref(), default_key)?,
        kyc_key: AccountResolver::resolve_key(parsed.kyc_key.as_ref(), default_key)?,
        fee_schedule_key: AccountResolver::resolve_key(
            parsed.fee_schedule_key.as_ref(),
            default_key,
        )?,
        pause_key: AccountResolver::resolve_key(parsed.pause_key.as_ref(), default_key)?,
        metadata_key: AccountResolver::resolve_key(parsed.metadata_key.as_ref(), default_key)?,
    };
    let token_keys = if keys == TokenKeys::default() {
        None
    } else {
        Some(keys)
    };

    Ok(UpdateTokenNormalised {
        token_id: parsed.token_id.parse()?,
        token_name: parsed.token_name,
        token_symbol: parsed.token_symbol,
        token_memo: truncate_memo(parsed.token_memo),
        metadata: parsed.metadata.map(String::into_bytes),
        treasury_account_id: parsed
            .treasury_account_id
            .as_deref()
            .map(str::parse)
            .transpose()?,
        auto_renew_account_id: parsed
            .auto_renew_account_id
            .as_deref()
            .map(str::parse)
            .transpose()?,
        token_keys,
    })
}

/// Normalise `delete_token` parameters.
pub fn delete_token(params: &Value) -> Result<DeleteTokenNormalised, AgentKitError> {
    let parsed: DeleteTokenParams = parse_params(params)?;
    Ok(DeleteTokenNormalised {
        token_id: parsed.token_id.parse()?,
    })
}

/// Net-sum fungible-token recipient lines and debit the source.
fn aggregate_token_transfers(
    transfers: &[TokenTransferInput],
    source: AccountId,
    decimals: u32,
) -> Result<TransferLedger, AgentKitError> {
    let mut ledger = TransferLedger::new();
    let mut total: i64 = 0;

    for transfer in transfers {
        let base_units = to_base_units(transfer.amount.value(), decimals);
        if base_units <= 0 {
            return Err(AgentKitError::InvalidAmount(
                transfer.amount.value().to_string(),
            ));
        }
        let recipient: AccountId = transfer.account_id.parse()?;
        *ledger.entry(recipient).or_default() += base_units;
        total += base_units;
    }

    *ledger.entry(source).or_default() -= total;
    Ok(ledger)
}

/// Normalise `transfer_fungible_token` parameters.
pub async fn transfer_fungible_token(
    params: &Value,
    context: &Context,
    client: &HederaClient,
    mirror: &dyn MirrornodeService,
) -> Result<TransferFungibleTokenNormalised, AgentKitError> {
    let parsed: TransferFungibleTokenParams = parse_params(params)?;

    let token_id: TokenId = parsed.token_id.parse()?;
    let decimals = fetch_decimals(&parsed.token_id, mirror).await?;
    let source = AccountResolver::resolve_account(
        parsed.source_account_id.as_deref(),
        context,
        client,
    )?;
    let ledger = aggregate_token_transfers(&parsed.transfers, source.parse()?, decimals)?;

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(TransferFungibleTokenNormalised {
        ft_transfers: BTreeMap::from([(token_id, ledger)]),
        transaction_memo: truncate_memo(parsed.transaction_memo),
        scheduling_params,
    })
}

/// Normalise `transfer_fungible_token_with_allowance` parameters.
pub async fn transfer_fungible_token_with_allowance(
    params: &Value,
    context: &Context,
    client: &HederaClient,
    mirror: &dyn MirrornodeService,
) -> Result<TransferFungibleTokenWithAllowanceNormalised, AgentKitError> {
    let parsed: TransferFungibleTokenWithAllowanceParams = parse_params(params)?;

    let owner = parsed
        .source_account_id
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(AgentKitError::MissingOwner("source_account_id"))?;
    let token_id: TokenId = parsed.token_id.parse()?;
    let decimals = fetch_decimals(&parsed.token_id, mirror).await?;
    let ledger = aggregate_token_transfers(&parsed.transfers, owner.parse()?, decimals)?;

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(TransferFungibleTokenWithAllowanceNormalised {
        ft_approved_transfers: BTreeMap::from([(token_id, ledger)]),
        transaction_memo: truncate_memo(parsed.transaction_memo),
        scheduling_params,
    })
}

/// Normalise `transfer_non_fungible_token_with_allowance` parameters.
pub async fn transfer_nft_with_allowance(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<TransferNftWithAllowanceNormalised, AgentKitError> {
    let parsed: TransferNftWithAllowanceParams = parse_params(params)?;

    let owner: AccountId = parsed
        .source_account_id
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(AgentKitError::MissingOwner("source_account_id"))?
        .parse()?;
    let token_id: TokenId = parsed.token_id.parse()?;

    let mut movements = Vec::with_capacity(parsed.recipients.len());
    for recipient in &parsed.recipients {
        movements.push(NftTransfer {
            sender_account_id: owner,
            receiver_account_id: recipient.account_id.parse()?,
            serial_number: recipient.serial_number,
            is_approved: true,
        });
    }

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(TransferNftWithAllowanceNormalised {
        nft_approved_transfers: BTreeMap::from([(token_id, movements)]),
        transaction_memo: truncate_memo(parsed.transaction_memo),
        scheduling_params,
    })
}

/// Normalise `approve_token_allowance` parameters.
pub async fn approve_token_allowance(
    params: &Value,
    context: &Context,
    client: &HederaClient,
    mirror: &dyn MirrornodeService,
) -> Result<ApproveTokenAllowanceNormalised, AgentKitError> {
    let parsed: ApproveTokenAllowanceParams = parse_params(params)?;

    let owner = AccountResolver::resolve_account(
        parsed.owner_account_id.as_deref(),
        context,
        client,
    )?;
    let decimals = fetch_decimals(&parsed.token_id, mirror).await?;
    let base_units = to_base_units(parsed.amount.value(), decimals);
    if base_units <= 0 {
        return Err(AgentKitError::InvalidAmount(parsed.amount.value().to_string()));
    }

    Ok(ApproveTokenAllowanceNormalised {
        token_allowances: vec![TokenAllowance {
            token_id: parsed.token_id.parse()?,
            owner_account_id: owner.parse()?,
            spender_account_id: parsed.spender_account_id.parse()?,
            amount: base_units,
        }],
        transaction_memo: truncate_memo(parsed.transaction_memo),
    })
}

/// Normalise `approve_nft_allowance` parameters.
pub fn approve_nft_allowance(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<ApproveNftAllowanceNormalised, AgentKitError> {
    let parsed: ApproveNftAllowanceParams = parse_params(params)?;

    let all_serials = parsed.all_serials.unwrap_or(false);
    let serial_numbers = parsed.serial_numbers.unwrap_or_default();
    if !all_serials && serial_numbers.is_empty() {
        return Err(AgentKitError::Validation(
            "Field \"serial_numbers\" - required when all_serials is false".into(),
        ));
    }

    let owner = AccountResolver::resolve_account(
        parsed.owner_account_id.as_deref(),
        context,
        client,
    )?;

    Ok(ApproveNftAllowanceNormalised {
        nft_allowances: vec![NftAllowance {
            token_id: parsed.token_id.parse()?,
            owner_account_id: owner.parse()?,
            spender_account_id: parsed.spender_account_id.parse()?,
            serial_numbers: if all_serials { Vec::new() } else { serial_numbers },
            approved_for_all: all_serials,
        }],
        transaction_memo: truncate_memo(parsed.transaction_memo),
    })
}

/// Normalise `get_token_info` parameters, yielding the token id.
pub fn get_token_info(params: &Value) -> Result<String, AgentKitError> {
    let parsed: GetTokenInfoParams = parse_params(params)?;
    match parsed.token_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(AgentKitError::Validation(
            "Token ID is required to fetch token info.".into(),
        )),
    }
}
