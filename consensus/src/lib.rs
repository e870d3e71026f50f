//! CryptoNote currency policy and consensus rules
//!
//! This library turns a validated parameter set into the rules a node applies to blocks and
//! transactions: emission and coinbase construction, deposit interest and fees, difficulty
//! retargeting, proof-of-work validation and fusion classification. Key derivation, hashing and
//! serialization are supplied by the caller through [`CurrencyBackend`].

pub mod currency;
pub mod process;

// Re-export key types for easier access
pub use consensus_core::errors::{AmountFormatError, ConfigError, ConsensusError};
pub use consensus_core::Hash;
pub use currency::{Currency, CurrencyBackend, CurrencyBuilder};
pub use process::{BlockReward, format_amount, format_signed_amount, parse_amount};
