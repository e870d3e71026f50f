use serde::{Deserialize, Serialize};

use crate::constants::{BLOCK_MINOR_VERSION_0, CURRENT_BLOCK_MAJOR};
use crate::tx::Transaction;
use crate::Hash;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    pub major_version: u8,
    pub minor_version: u8,
    pub nonce: u32,
    pub timestamp: u64,
    pub previous_block_hash: Hash,
}

/// Header of the parent chain block whose proof of work a merge-mined block reuses
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentBlock {
    pub major_version: u8,
    pub minor_version: u8,
    pub previous_block_hash: Hash,
    pub transaction_count: u16,
    /// Merkle branch of the parent coinbase within the parent block's transactions
    pub base_transaction_branch: Vec<Hash>,
    pub base_transaction: Transaction,
    /// Merkle branch of this chain's header within the merge mining tree
    pub blockchain_branch: Vec<Hash>,
}

/// Complete block structure. `parent_block` is only meaningful for merge-mined versions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub header: BlockHeader,
    pub parent_block: ParentBlock,
    pub base_transaction: Transaction,
    pub transaction_hashes: Vec<Hash>,
}

impl Default for Block {
    fn default() -> Self {
        Self {
            header: BlockHeader {
                major_version: CURRENT_BLOCK_MAJOR,
                minor_version: BLOCK_MINOR_VERSION_0,
                ..Default::default()
            },
            parent_block: ParentBlock::default(),
            base_transaction: Transaction::default(),
            transaction_hashes: Vec::new(),
        }
    }
}

impl Block {
    /// Creates a block with the given header and coinbase
    pub fn new(header: BlockHeader, base_transaction: Transaction) -> Self {
        Self { header, parent_block: ParentBlock::default(), base_transaction, transaction_hashes: Vec::new() }
    }

    pub fn major_version(&self) -> u8 {
        self.header.major_version
    }

    pub fn minor_version(&self) -> u8 {
        self.header.minor_version
    }
}
