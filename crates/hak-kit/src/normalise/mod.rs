// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter normalisation.
//!
//! One pure async operation per ledger action: validate the raw bag
//! against its schema, resolve identities and units, and produce the
//! normalised structure the builder consumes. The only I/O is the odd
//! mirror-node read (token decimals, account keys).

mod account;
mod evm;
mod query;
mod schedule;
mod token;
mod topic;

pub use account::*;
pub use evm::*;
pub use query::*;
pub use schedule::*;
pub use token::*;
pub use topic::*;

use hak_core::{AgentKitError, Context, HederaClient, ScheduleCreateSpec};

use crate::schemas::SchedulingParams;

/// Longest memo the ledger accepts.
const MEMO_MAX_CHARS: usize = 100;

/// Truncate a free-text memo to the ledger limit. Never errors.
pub(crate) fn truncate_memo(memo: Option<String>) -> Option<String> {
    memo.map(|m| {
        if m.chars().count() > MEMO_MAX_CHARS {
            m.chars().take(MEMO_MAX_CHARS).collect()
        } else {
            m
        }
    })
}

/// Resolve the scheduling block when (and only when) `is_scheduled` is
/// set; anything else in the block is otherwise ignored.
pub(crate) async fn maybe_schedule(
    block: Option<&SchedulingParams>,
    context: &Context,
    client: &HederaClient,
) -> Result<Option<ScheduleCreateSpec>, AgentKitError> {
    match block {
        Some(block) if block.wants_schedule() => {
            Ok(Some(scheduled_transaction_params(block, context, client).await?))
        }
        _ => Ok(None),
    }
}
