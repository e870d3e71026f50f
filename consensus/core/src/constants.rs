use cn_hashes::HASH_BITS;

/// Major version of blocks validated with the plain proof-of-work check
pub const CURRENT_BLOCK_MAJOR: u8 = 1;

/// First merge-mined block major version
pub const BLOCK_MAJOR_VERSION_2: u8 = CURRENT_BLOCK_MAJOR + 1;

/// Major version from which the configured full reward zone applies
pub const BLOCK_MAJOR_VERSION_3: u8 = CURRENT_BLOCK_MAJOR + 2;

pub const BLOCK_MAJOR_VERSION_4: u8 = CURRENT_BLOCK_MAJOR + 3;

/// Highest major version a node of this release accepts
pub const NEXT_BLOCK_MAJOR_LIMIT: u8 = CURRENT_BLOCK_MAJOR + 4;

pub const BLOCK_MINOR_VERSION_0: u8 = 0;
pub const BLOCK_MINOR_VERSION_1: u8 = 1;

/// Version stamped on every transaction built by this node
pub const CURRENT_TRANSACTION_VERSION: u8 = 1;

/// Largest extra nonce that fits in the one-byte size prefix of the nonce field
pub const MAX_EXTRA_NONCE_SIZE: usize = u8::MAX as usize;

/// Longest blockchain Merkle branch a merge-mined block may carry; one level per bit of the
/// genesis hash used as the path
pub const MAX_MERKLE_BRANCH_LENGTH: usize = HASH_BITS;

/// Height up to which the tail emission floor is enforced
pub const TAIL_EMISSION_FLOOR_END_HEIGHT: u32 = 300_000;

/// Multiple of `coin` paid as the tail emission floor
pub const TAIL_EMISSION_FLOOR_COINS: u64 = 5;
