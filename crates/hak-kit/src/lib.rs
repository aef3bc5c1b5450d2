// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]

//! hak-kit
//!
//! The normalisation and transaction-building pipeline: raw LLM-supplied
//! parameter bags are validated against declarative schemas, resolved
//! against the runtime context and mirror node, and turned into the
//! ledger-ready transactions of `hak-core`.

pub mod builder;
pub mod erc20;
pub mod normalise;
pub mod resolver;
pub mod schemas;

pub use resolver::AccountResolver;
pub use schemas::parse_params;
