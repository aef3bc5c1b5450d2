// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query-operation normalisers.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use hak_core::AgentKitError;

use crate::schemas::{
    ExchangeRateQueryParams, TransactionRecordQueryNormalised, TransactionRecordQueryParams,
    parse_params,
};

static MIRROR_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+-\d+-\d+$").expect("static pattern"));
static LEDGER_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.\d+\.\d+)@(\d+)\.(\d+)$").expect("static pattern"));

/// Normalise `get_exchange_rate` parameters.
pub fn get_exchange_rate(params: &Value) -> Result<ExchangeRateQueryParams, AgentKitError> {
    parse_params(params)
}

/// Normalise `get_transaction_record` parameters.
///
/// Transaction ids arrive in ledger-native form
/// (`0.0.4177806@1755169980.051721264`) or mirror form
/// (`0.0.4177806-1755169980-051721264`); the mirror form is what the
/// record endpoint accepts, so the ledger form is converted.
pub fn get_transaction_record(
    params: &Value,
) -> Result<TransactionRecordQueryNormalised, AgentKitError> {
    let parsed: TransactionRecordQueryParams = parse_params(params)?;
    let raw_id = parsed.transaction_id.trim();

    let transaction_id = if MIRROR_STYLE.is_match(raw_id) {
        raw_id.to_string()
    } else if let Some(captures) = LEDGER_STYLE.captures(raw_id) {
        format!("{}-{}-{}", &captures[1], &captures[2], &captures[3])
    } else {
        return Err(AgentKitError::InvalidTransactionId(raw_id.to_string()));
    };

    Ok(TransactionRecordQueryNormalised {
        transaction_id,
        nonce: parsed.nonce,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ledger_native_form_converts() {
        let result = get_transaction_record(&json!({
            "transaction_id": "0.0.4177806@1755169980.051721264"
        }))
        .unwrap();
        assert_eq!(result.transaction_id, "0.0.4177806-1755169980-051721264");
    }

    #[test]
    fn mirror_form_passes_through() {
        let result = get_transaction_record(&json!({
            "transaction_id": "0.0.4177806-1755169980-051721264",
            "nonce": 1
        }))
        .unwrap();
        assert_eq!(result.transaction_id, "0.0.4177806-1755169980-051721264");
        assert_eq!(result.nonce, Some(1));
    }

    #[test]
    fn unrecognised_form_fails() {
        let err = get_transaction_record(&json!({ "transaction_id": "not-an-id" })).unwrap_err();
        assert!(matches!(err, AgentKitError::InvalidTransactionId(_)));
        assert!(err.to_string().contains("not-an-id"));
    }
}
