use cn_hashes::tree_hash_from_branch;
use consensus_core::block::Block;
use consensus_core::constants::{
    BLOCK_MAJOR_VERSION_2, BLOCK_MAJOR_VERSION_3, BLOCK_MAJOR_VERSION_4, CURRENT_BLOCK_MAJOR, MAX_MERKLE_BRANCH_LENGTH,
    NEXT_BLOCK_MAJOR_LIMIT,
};
use consensus_core::crypto::BlockHashing;
use consensus_core::errors::ConsensusError;
use consensus_core::tx::extra::merge_mining_tag;
use consensus_core::{Difficulty, Hash};

use crate::check_hash;

/// Proof-of-work validation, dispatched on the block major version.
///
/// Blocks of [`CURRENT_BLOCK_MAJOR`] carry their own proof of work. Later versions are merge
/// mined: the proof of work belongs to a parent chain block whose coinbase commits to this
/// block through a merge mining tag.
pub struct PowValidator<'a, H: BlockHashing + ?Sized> {
    hashing: &'a H,
    genesis_block_hash: Hash,
}

impl<'a, H: BlockHashing + ?Sized> PowValidator<'a, H> {
    pub fn new(hashing: &'a H, genesis_block_hash: Hash) -> Self {
        Self { hashing, genesis_block_hash }
    }

    /// Validates the proof of work of `block`, returning the proof-of-work hash.
    pub fn check_proof_of_work(&self, block: &Block, difficulty: Difficulty) -> Result<Hash, ConsensusError> {
        match block.major_version() {
            CURRENT_BLOCK_MAJOR => self.check_proof_of_work_v1(block, difficulty),
            BLOCK_MAJOR_VERSION_2 | BLOCK_MAJOR_VERSION_3 | BLOCK_MAJOR_VERSION_4 | NEXT_BLOCK_MAJOR_LIMIT => {
                self.check_proof_of_work_v2(block, difficulty)
            }
            major => {
                log::error!("Unknown block major version: {}.{}", major, block.minor_version());
                Err(ConsensusError::UnknownBlockVersion { major, minor: block.minor_version() })
            }
        }
    }

    /// Plain check: the block's own hash must meet the difficulty.
    pub fn check_proof_of_work_v1(&self, block: &Block, difficulty: Difficulty) -> Result<Hash, ConsensusError> {
        if block.major_version() != CURRENT_BLOCK_MAJOR {
            return Err(ConsensusError::UnexpectedBlockVersion { found: block.major_version() });
        }
        self.hash_meeting_difficulty(block, difficulty)
    }

    /// Merge mining check: the hash must meet the difficulty and the parent coinbase must commit
    /// to this block's auxiliary header hash.
    pub fn check_proof_of_work_v2(&self, block: &Block, difficulty: Difficulty) -> Result<Hash, ConsensusError> {
        if block.major_version() < BLOCK_MAJOR_VERSION_2 {
            return Err(ConsensusError::UnexpectedBlockVersion { found: block.major_version() });
        }
        let proof_of_work = self.hash_meeting_difficulty(block, difficulty)?;

        let parent = &block.parent_block;
        let Some(tag) = merge_mining_tag(&parent.base_transaction.extra) else {
            log::error!("merge mining tag wasn't found in extra of the parent block miner transaction");
            return Err(ConsensusError::MissingMergeMiningTag);
        };

        if parent.blockchain_branch.len() > MAX_MERKLE_BRANCH_LENGTH {
            return Err(ConsensusError::MerkleBranchTooLong(parent.blockchain_branch.len()));
        }

        let aux_header_hash = self.hashing.aux_block_header_hash(block).ok_or(ConsensusError::AuxHeaderHashFailed)?;
        let root = tree_hash_from_branch(&parent.blockchain_branch, aux_header_hash, Some(&self.genesis_block_hash));
        if root != tag.merkle_root {
            log::warn!("Aux block hash wasn't found in merkle tree");
            return Err(ConsensusError::MerkleMismatch);
        }

        Ok(proof_of_work)
    }

    fn hash_meeting_difficulty(&self, block: &Block, difficulty: Difficulty) -> Result<Hash, ConsensusError> {
        let hash = self.hashing.block_pow_hash(block).ok_or(ConsensusError::PowHashFailed)?;
        if !check_hash(&hash, difficulty) {
            return Err(ConsensusError::InvalidProofOfWork);
        }
        Ok(hash)
    }
}
