// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schedule-operation parameter schemas, raw and normalised.

use schemars::JsonSchema;
use serde::Deserialize;

use hak_core::ScheduleId;

/// Raw parameters for `sign_schedule`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SignScheduleParams {
    /// Schedule to sign.
    pub schedule_id: String,
}

/// Normalised `sign_schedule` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SignScheduleNormalised {
    /// Schedule being signed.
    pub schedule_id: ScheduleId,
}

/// Raw parameters for `delete_schedule`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteScheduleParams {
    /// Schedule to delete.
    pub schedule_id: String,
}

/// Normalised `delete_schedule` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteScheduleNormalised {
    /// Schedule being deleted.
    pub schedule_id: ScheduleId,
}
