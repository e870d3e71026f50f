//! Core data types and capability traits shared by the consensus crates.
//!
//! Everything in here is plain data: blocks, transactions, keys, the currency parameter set and
//! the collaborator traits through which the rule engine reaches key derivation, hashing and
//! serialization.

pub mod amounts;
pub mod block;
pub mod codec;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod errors;
pub mod keys;
pub mod tx;

pub use cn_hashes::Hash;

/// Cumulative and per-block difficulty values.
pub type Difficulty = u64;

/// The all-zero hash.
pub const ZERO_HASH: Hash = Hash::zeroed();
