// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account-operation normalisers.

use serde_json::Value;

use hak_core::{
    AccountId, AgentKitError, Context, Hbar, HbarAllowance, HederaClient, PublicKey,
    TransferLedger, to_tinybars,
};
use hak_mirror::MirrornodeService;

use crate::resolver::AccountResolver;
use crate::schemas::{
    AccountBalanceQueryNormalised, AccountBalanceQueryParams, AccountQueryNormalised,
    AccountQueryParams, ApproveHbarAllowanceNormalised, ApproveHbarAllowanceParams,
    CreateAccountNormalised, CreateAccountParams, DeleteAccountNormalised, DeleteAccountParams,
    HbarTransferInput, TransferHbarNormalised, TransferHbarParams,
    TransferHbarWithAllowanceNormalised, TransferHbarWithAllowanceParams,
    UpdateAccountNormalised, UpdateAccountParams, parse_params,
};

use super::{maybe_schedule, truncate_memo};

/// Net-sum the recipient lines of an HBAR transfer and debit the source.
///
/// The resulting ledger always sums to zero; any line that converts to a
/// non-positive tinybar amount fails.
fn aggregate_hbar_transfers(
    transfers: &[HbarTransferInput],
    source: AccountId,
) -> Result<TransferLedger, AgentKitError> {
    let mut ledger = TransferLedger::new();
    let mut total: i64 = 0;

    for transfer in transfers {
        let tinybars = to_tinybars(transfer.amount.value());
        if tinybars <= 0 {
            return Err(AgentKitError::InvalidAmount(
                transfer.amount.value().to_string(),
            ));
        }
        let recipient: AccountId = transfer.account_id.parse()?;
        *ledger.entry(recipient).or_default() += tinybars;
        total += tinybars;
    }

    *ledger.entry(source).or_default() -= total;
    Ok(ledger)
}

/// Normalise `transfer_hbar` parameters.
pub async fn transfer_hbar(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<TransferHbarNormalised, AgentKitError> {
    let parsed: TransferHbarParams = parse_params(params)?;

    let source = AccountResolver::resolve_account(
        parsed.source_account_id.as_deref(),
        context,
        client,
    )?;
    let hbar_transfers = aggregate_hbar_transfers(&parsed.transfers, source.parse()?)?;

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(TransferHbarNormalised {
        hbar_transfers,
        transaction_memo: truncate_memo(parsed.transaction_memo),
        scheduling_params,
    })
}

/// Normalise `transfer_hbar_with_allowance` parameters.
///
/// The owner account is required: an allowance spend has no sensible
/// default source.
pub async fn transfer_hbar_with_allowance(
    params: &Value,
    _context: &Context,
    _client: &HederaClient,
) -> Result<TransferHbarWithAllowanceNormalised, AgentKitError> {
    let parsed: TransferHbarWithAllowanceParams = parse_params(params)?;

    let owner = parsed
        .source_account_id
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or(AgentKitError::MissingOwner("source_account_id"))?;
    let hbar_approved_transfers = aggregate_hbar_transfers(&parsed.transfers, owner.parse()?)?;

    Ok(TransferHbarWithAllowanceNormalised {
        hbar_approved_transfers,
        transaction_memo: truncate_memo(parsed.transaction_memo),
    })
}

/// Normalise `create_account` parameters.
///
/// The account key resolves in priority order: explicit parameter, the
/// operator credential, then the default account's key from the mirror.
pub async fn create_account(
    params: &Value,
    context: &Context,
    client: &HederaClient,
    mirror: &dyn MirrornodeService,
) -> Result<CreateAccountNormalised, AgentKitError> {
    let parsed: CreateAccountParams = parse_params(params)?;

    let initial_balance = Hbar::from_tinybars(to_tinybars(
        parsed.initial_balance.map(|a| a.value()).unwrap_or(0.0),
    ));
    let memo = truncate_memo(parsed.account_memo);

    let mut key_string = parsed
        .public_key
        .clone()
        .or_else(|| client.operator_public_key().map(PublicKey::to_string_der));
    if key_string.is_none() {
        if let Some(default_account) = AccountResolver::get_default_account(context, client) {
            let account = mirror
                .get_account(&default_account)
                .await
                .map_err(AgentKitError::from)?;
            key_string = account.account_public_key().map(str::to_string);
        }
    }
    let key_string = key_string.ok_or_else(|| {
        AgentKitError::IdentityResolution(
            "Unable to resolve public key: no param, mirror node, or client operator key available."
                .into(),
        )
    })?;
    let key = PublicKey::parse(&key_string)?;

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(CreateAccountNormalised {
        key,
        initial_balance,
        memo,
        max_automatic_token_associations: parsed.max_automatic_token_associations,
        scheduling_params,
    })
}

/// Normalise `update_account` parameters.
pub async fn update_account(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<UpdateAccountNormalised, AgentKitError> {
    let parsed: UpdateAccountParams = parse_params(params)?;

    let account_id: AccountId =
        AccountResolver::resolve_account(parsed.account_id.as_deref(), context, client)?
            .parse()?;

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(UpdateAccountNormalised {
        account_id,
        account_memo: truncate_memo(parsed.account_memo),
        scheduling_params,
    })
}

/// Normalise `delete_account` parameters.
pub fn delete_account(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<DeleteAccountNormalised, AgentKitError> {
    let parsed: DeleteAccountParams = parse_params(params)?;

    if !AccountResolver::is_hedera_address(&parsed.account_id) {
        return Err(AgentKitError::Validation(
            "Account ID must be a Hedera address".into(),
        ));
    }

    let transfer_account = AccountResolver::resolve_account(
        parsed.transfer_account_id.as_deref(),
        context,
        client,
    )?;

    Ok(DeleteAccountNormalised {
        account_id: parsed.account_id.parse()?,
        transfer_account_id: transfer_account.parse()?,
    })
}

/// Normalise `approve_hbar_allowance` parameters.
pub fn approve_hbar_allowance(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<ApproveHbarAllowanceNormalised, AgentKitError> {
    let parsed: ApproveHbarAllowanceParams = parse_params(params)?;

    let owner = AccountResolver::resolve_account(
        parsed.owner_account_id.as_deref(),
        context,
        client,
    )?;
    let tinybars = to_tinybars(parsed.amount.value());
    if tinybars <= 0 {
        return Err(AgentKitError::InvalidAmount(parsed.amount.value().to_string()));
    }

    Ok(ApproveHbarAllowanceNormalised {
        hbar_allowances: vec![HbarAllowance {
            owner_account_id: owner.parse()?,
            spender_account_id: parsed.spender_account_id.parse()?,
            amount: Hbar::from_tinybars(tinybars),
        }],
        transaction_memo: truncate_memo(parsed.transaction_memo),
    })
}

/// Normalise `get_hbar_balance` parameters.
pub fn get_hbar_balance(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<AccountBalanceQueryNormalised, AgentKitError> {
    let parsed: AccountBalanceQueryParams = parse_params(params)?;
    let account_id =
        AccountResolver::resolve_account(parsed.account_id.as_deref(), context, client)?;
    Ok(AccountBalanceQueryNormalised { account_id })
}

/// Normalise `get_account_query` parameters.
pub fn get_account_query(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<AccountQueryNormalised, AgentKitError> {
    let parsed: AccountQueryParams = parse_params(params)?;
    let account_id =
        AccountResolver::resolve_account(parsed.account_id.as_deref(), context, client)?;
    Ok(AccountQueryNormalised { account_id })
}
