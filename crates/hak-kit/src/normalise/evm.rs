// SPDX-License-Identifier: MIT OR Apache-2.0

//! EVM-operation normalisers.

use serde_json::Value;

use hak_core::{AgentKitError, Context, HederaClient};

use crate::erc20;
use crate::schemas::{ContractExecuteNormalised, CreateErc20Params, parse_params};

use super::maybe_schedule;

/// Normalise `create_erc20` parameters into a factory contract call.
pub async fn create_erc20(
    params: &Value,
    context: &Context,
    client: &HederaClient,
) -> Result<ContractExecuteNormalised, AgentKitError> {
    let parsed: CreateErc20Params = parse_params(params)?;

    let decimals = u8::try_from(parsed.decimals.unwrap_or(0))
        .map_err(|_| AgentKitError::Validation("decimals must be at most 255".into()))?;
    let function_parameters = erc20::encode_deploy_token(
        &parsed.token_name,
        &parsed.token_symbol,
        decimals,
        parsed.initial_supply.unwrap_or(0),
    );

    let scheduling_params =
        maybe_schedule(parsed.scheduling_params.as_ref(), context, client).await?;

    Ok(ContractExecuteNormalised {
        contract_id: erc20::factory_contract_id(client.network),
        gas: erc20::FACTORY_DEPLOY_GAS,
        function_parameters,
        scheduling_params,
    })
}
