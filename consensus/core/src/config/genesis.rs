use crate::block::{Block, BlockHeader};
use crate::constants::{BLOCK_MINOR_VERSION_0, CURRENT_BLOCK_MAJOR};
use crate::tx::Transaction;
use crate::ZERO_HASH;

/// Serialized coinbase of the genesis block. Hard coded because a freshly built miner
/// transaction embeds a random transaction key.
pub const GENESIS_COINBASE_TX_HEX: &str = "010a01ff000188f3b501029b2e4c0281c0b02e7c53291a94d1d0cbff8883f8024f5142ee494ffbbd088071210142694232c5b04151d9e4c27d31ec7a68ea568b19488cfcb422659a07a0e44dd5";

pub const GENESIS_TIMESTAMP: u64 = 1_527_078_920;

pub const GENESIS_NONCE: u32 = 70;

/// The constants uniquely representing the genesis block
#[derive(Clone, Debug)]
pub struct GenesisBlock {
    pub coinbase_tx_hex: &'static str,
    pub major_version: u8,
    pub minor_version: u8,
    pub timestamp: u64,
    pub nonce: u32,
}

impl GenesisBlock {
    pub fn coinbase_blob(&self) -> Result<Vec<u8>, hex::FromHexError> {
        hex::decode(self.coinbase_tx_hex)
    }

    /// Testnet genesis differs from mainnet by its nonce only
    pub fn nonce_for(&self, testnet: bool) -> u32 {
        if testnet {
            self.nonce.wrapping_add(1)
        } else {
            self.nonce
        }
    }

    /// Assembles the genesis block around its decoded coinbase
    pub fn to_block(&self, base_transaction: Transaction, testnet: bool) -> Block {
        let header = BlockHeader {
            major_version: self.major_version,
            minor_version: self.minor_version,
            nonce: self.nonce_for(testnet),
            timestamp: self.timestamp,
            previous_block_hash: ZERO_HASH,
        };
        Block::new(header, base_transaction)
    }
}

pub fn default_genesis() -> GenesisBlock {
    GenesisBlock {
        coinbase_tx_hex: GENESIS_COINBASE_TX_HEX,
        major_version: CURRENT_BLOCK_MAJOR,
        minor_version: BLOCK_MINOR_VERSION_0,
        timestamp: GENESIS_TIMESTAMP,
        nonce: GENESIS_NONCE,
    }
}
