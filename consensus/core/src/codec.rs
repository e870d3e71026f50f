//! Serialization capabilities the rule engine consumes but does not implement.

use crate::errors::ConsensusError;
use crate::keys::AccountPublicAddress;
use crate::tx::Transaction;

/// Binary encoding of consensus objects.
pub trait ObjectCodec: Send + Sync {
    /// Size in bytes of the binary encoding of `tx`
    fn transaction_binary_size(&self, tx: &Transaction) -> usize;

    fn transaction_from_binary(&self, blob: &[u8]) -> Result<Transaction, ConsensusError>;
}

/// Text encoding of account addresses.
pub trait AddressCodec: Send + Sync {
    fn encode_address(&self, prefix: u64, address: &AccountPublicAddress) -> String;

    /// Decodes `text` into its network prefix and address
    fn decode_address(&self, text: &str) -> Option<(u64, AccountPublicAddress)>;
}
