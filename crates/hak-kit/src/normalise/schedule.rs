// SPDX-License-Identifier: MIT OR Apache-2.0

//! The shared schedule sub-normaliser.

use hak_core::{AgentKitError, Context, HederaClient, ScheduleCreateSpec, Timestamp};

use crate::resolver::AccountResolver;
use crate::schemas::{
    DeleteScheduleNormalised, DeleteScheduleParams, SchedulingParams, SignScheduleNormalised,
    SignScheduleParams, parse_params,
};

/// Resolve a raw scheduling block into a [`ScheduleCreateSpec`].
///
/// The admin key defaults to the signer's own key when `admin_key` is
/// `true`; the payer account is never defaulted.
pub async fn scheduled_transaction_params(
    scheduling: &SchedulingParams,
    context: &Context,
    client: &HederaClient,
) -> Result<ScheduleCreateSpec, AgentKitError> {
    let user_public_key = AccountResolver::get_default_public_key(context, client)?;

    let admin_key =
        AccountResolver::resolve_key(scheduling.admin_key.as_ref(), Some(&user_public_key))?;

    let payer_account_id = scheduling
        .payer_account_id
        .as_deref()
        .map(str::parse)
        .transpose()?;

    let expiration_time: Option<Timestamp> = scheduling
        .expiration_time
        .as_deref()
        .map(str::parse)
        .transpose()?;

    Ok(ScheduleCreateSpec {
        admin_key,
        payer_account_id,
        expiration_time,
        wait_for_expiry: scheduling.wait_for_expiry.unwrap_or(false),
    })
}

/// Normalise `sign_schedule` parameters.
pub fn sign_schedule(params: &serde_json::Value) -> Result<SignScheduleNormalised, AgentKitError> {
    let parsed: SignScheduleParams = parse_params(params)?;
    Ok(SignScheduleNormalised {
        schedule_id: parsed.schedule_id.parse()?,
    })
}

/// Normalise `delete_schedule` parameters.
pub fn delete_schedule(
    params: &serde_json::Value,
) -> Result<DeleteScheduleNormalised, AgentKitError> {
    let parsed: DeleteScheduleParams = parse_params(params)?;
    Ok(DeleteScheduleNormalised {
        schedule_id: parsed.schedule_id.parse()?,
    })
}
