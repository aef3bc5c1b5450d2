// SPDX-License-Identifier: MIT OR Apache-2.0

//! ERC-20 factory calldata.
//!
//! `create_erc20` deploys through a pre-deployed factory contract whose
//! `deployToken(string,string,uint8,uint256)` function mints the new
//! token. The call is ABI-encoded here: keccak-256 selector plus the
//! standard head/tail layout for the two dynamic string arguments.

use alloy_primitives::keccak256;

use hak_core::{ContractId, LedgerNetwork};

/// Factory function invoked to deploy a new ERC-20.
pub const FACTORY_FUNCTION_SIGNATURE: &str = "deployToken(string,string,uint8,uint256)";

/// Gas limit for factory deployments.
pub const FACTORY_DEPLOY_GAS: u64 = 3_000_000;

/// The BaseERC20Factory contract for a network.
pub fn factory_contract_id(network: LedgerNetwork) -> ContractId {
    match network {
        LedgerNetwork::Mainnet => ContractId::new(0, 0, 7340124),
        LedgerNetwork::Testnet => ContractId::new(0, 0, 5615372),
        LedgerNetwork::Previewnet => ContractId::new(0, 0, 5615372),
    }
}

/// First four bytes of the keccak-256 hash of a function signature.
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn encode_u256(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

fn encode_dynamic_string(s: &str) -> Vec<u8> {
    let bytes = s.as_bytes();
    let padded_len = bytes.len().div_ceil(32) * 32;
    let mut out = Vec::with_capacity(32 + padded_len);
    out.extend_from_slice(&encode_u256(bytes.len() as u128));
    out.extend_from_slice(bytes);
    out.resize(32 + padded_len, 0);
    out
}

/// ABI-encode a `deployToken` call.
pub fn encode_deploy_token(
    token_name: &str,
    token_symbol: &str,
    decimals: u8,
    initial_supply: u64,
) -> Vec<u8> {
    let name_tail = encode_dynamic_string(token_name);
    let symbol_tail = encode_dynamic_string(token_symbol);

    // Head: two dynamic offsets, then the two static words.
    let head_len = 4 * 32;
    let name_offset = head_len;
    let symbol_offset = head_len + name_tail.len();

    let mut data = Vec::with_capacity(4 + head_len + name_tail.len() + symbol_tail.len());
    data.extend_from_slice(&function_selector(FACTORY_FUNCTION_SIGNATURE));
    data.extend_from_slice(&encode_u256(name_offset as u128));
    data.extend_from_slice(&encode_u256(symbol_offset as u128));
    data.extend_from_slice(&encode_u256(decimals as u128));
    data.extend_from_slice(&encode_u256(initial_supply as u128));
    data.extend_from_slice(&name_tail);
    data.extend_from_slice(&symbol_tail);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_is_four_bytes_of_keccak() {
        let selector = function_selector("transfer(address,uint256)");
        // Well-known ERC-20 transfer selector.
        assert_eq!(selector, [0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn deploy_token_layout() {
        let data = encode_deploy_token("MyToken", "MTK", 2, 1000);
        assert_eq!(&data[..4], &function_selector(FACTORY_FUNCTION_SIGNATURE));

        let args = &data[4..];
        // Offsets point past the four head words.
        assert_eq!(args[31], 128);
        // decimals word.
        assert_eq!(args[64 + 31], 2);
        // initial supply word.
        assert_eq!(u128::from_be_bytes(args[96 + 16..128].try_into().unwrap()), 1000);
        // name tail: length then content.
        assert_eq!(args[128 + 31], 7);
        assert_eq!(&args[160..167], b"MyToken");
        // symbol offset: 128 + (32 + 32) = 192.
        assert_eq!(args[32 + 31], 192);
        assert_eq!(args[192 + 31], 3);
        assert_eq!(&args[224..227], b"MTK");
        // Whole payload is word-aligned after the selector.
        assert_eq!(args.len() % 32, 0);
    }

    #[test]
    fn empty_string_encodes_single_length_word() {
        let tail = encode_dynamic_string("");
        assert_eq!(tail.len(), 32);
        assert!(tail.iter().all(|&b| b == 0));
    }
}
