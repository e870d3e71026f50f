//! Cryptographic capabilities the rule engine consumes but does not implement.

use crate::block::Block;
use crate::keys::{KeyDerivation, KeyPair, PublicKey, SecretKey};
use crate::Hash;

/// Key generation and one-time key derivation.
pub trait KeyOps: Send + Sync {
    /// Fresh random key pair
    fn generate_keys(&self) -> KeyPair;

    /// Shared secret of `public_key` and `secret_key`; `None` if the point is invalid
    fn generate_key_derivation(&self, public_key: &PublicKey, secret_key: &SecretKey) -> Option<KeyDerivation>;

    /// One-time output key for output `output_index` of the transaction behind `derivation`
    fn derive_public_key(
        &self,
        derivation: &KeyDerivation,
        output_index: usize,
        spend_public_key: &PublicKey,
    ) -> Option<PublicKey>;
}

/// Block identity and proof-of-work hashing.
pub trait BlockHashing: Send + Sync {
    /// Identifier of the block
    fn block_hash(&self, block: &Block) -> Option<Hash>;

    /// Slow hash checked against the difficulty
    fn block_pow_hash(&self, block: &Block) -> Option<Hash>;

    /// Hash of the header committed to in a parent chain's merge mining tree
    fn aux_block_header_hash(&self, block: &Block) -> Option<Hash>;
}
