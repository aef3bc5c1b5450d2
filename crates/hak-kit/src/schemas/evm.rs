// SPDX-License-Identifier: MIT OR Apache-2.0

//! EVM-operation parameter schemas, raw and normalised.

use schemars::JsonSchema;
use serde::Deserialize;

use hak_core::{ContractId, ScheduleCreateSpec};

use super::SchedulingParams;

/// Raw parameters for `create_erc20`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateErc20Params {
    /// ERC-20 token name.
    pub token_name: String,
    /// ERC-20 token symbol.
    pub token_symbol: String,
    /// Number of decimals.
    #[serde(default)]
    #[schemars(range(max = 255))]
    pub decimals: Option<u32>,
    /// Initial supply in base units.
    #[serde(default)]
    pub initial_supply: Option<u64>,
    /// Optional scheduling block.
    #[serde(default)]
    pub scheduling_params: Option<SchedulingParams>,
}

/// Normalised contract-execution parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractExecuteNormalised {
    /// Contract being called.
    pub contract_id: ContractId,
    /// Gas limit for the call.
    pub gas: u64,
    /// ABI-encoded calldata.
    pub function_parameters: Vec<u8>,
    /// Resolved schedule spec, when requested.
    pub scheduling_params: Option<ScheduleCreateSpec>,
}
