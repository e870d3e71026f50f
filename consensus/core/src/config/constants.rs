//! Mainnet defaults for every currency parameter.

/// Total atomic units that will ever be emitted
pub const MONEY_SUPPLY: u64 = 200_000_000_000_000;
/// Right shift applied to the remaining supply to obtain the base reward
pub const EMISSION_SPEED_FACTOR: u32 = 18;
/// Coin version 1 pays fees to the miner without the size penalty
pub const COIN_VERSION: u8 = 1;
/// Reward of the block at height 1
pub const GENESIS_BLOCK_REWARD: u64 = 10_000_000_000_000;
pub const TAIL_EMISSION_REWARD: u64 = 0;

/// Number of digits after the decimal point when amounts are displayed
pub const DISPLAY_DECIMAL_POINT: usize = 6;
pub const MINIMUM_FEE: u64 = 1_000;
pub const DEFAULT_DUST_THRESHOLD: u64 = 100;

pub const MAX_BLOCK_NUMBER: u32 = 500_000_000;
pub const MAX_BLOCK_BLOB_SIZE: usize = 500_000_000;
pub const MAX_TX_SIZE: usize = 1_000_000_000;
pub const PUBLIC_ADDRESS_BASE58_PREFIX: u64 = 0x7ad4;
pub const MINED_MONEY_UNLOCK_WINDOW: u32 = 10;
pub const TIMESTAMP_CHECK_WINDOW: usize = 60;
pub const BLOCK_FUTURE_TIME_LIMIT: u64 = 360;

pub const REWARD_BLOCKS_WINDOW: usize = 100;
pub const MIN_MIXIN: u64 = 0;
pub const BLOCK_GRANTED_FULL_REWARD_ZONE: usize = 100_000;
/// Full reward zone of block versions before the third major version
pub const BLOCK_GRANTED_FULL_REWARD_ZONE_V0: usize = 20_000;
pub const BLOCK_GRANTED_FULL_REWARD_ZONE_V1: usize = 100_000;
pub const COINBASE_BLOB_RESERVED_SIZE: usize = 600;

/// Target solve time in seconds
pub const DIFFICULTY_TARGET: u64 = 120;
pub const DIFFICULTY_WINDOW: usize = 720;
pub const DIFFICULTY_WINDOW_V0: usize = 720;
/// LWMA window; the algorithm looks at `DIFFICULTY_WINDOW_V1 - 1` solve times
pub const DIFFICULTY_WINDOW_V1: usize = 61;
pub const DIFFICULTY_CUT: usize = 60;

pub const DEPOSIT_MIN_AMOUNT: u64 = 1_000_000;
pub const DEPOSIT_MIN_TERM: u32 = 5_040;
pub const DEPOSIT_MAX_TERM: u32 = 262_800;
pub const DEPOSIT_MIN_TOTAL_RATE_FACTOR: u64 = 0;
pub const DEPOSIT_MAX_TOTAL_RATE: u64 = 4;
/// Interest multiplier granted to early depositors
pub const MULTIPLIER_FACTOR: u64 = 100;
/// Height at which the early depositor multiplier activates
pub const END_MULTIPLIER_BLOCK: u32 = 12_750;

pub const MAX_BLOCK_SIZE_INITIAL: usize = 100 * 1024;
pub const MAX_BLOCK_SIZE_GROWTH_SPEED_NUMERATOR: u64 = 100 * 1024;
pub const MAX_BLOCK_SIZE_GROWTH_SPEED_DENOMINATOR: u64 = 365 * 24 * 60 * 60 / DIFFICULTY_TARGET;

pub const LOCKED_TX_ALLOWED_DELTA_SECONDS: u64 = DIFFICULTY_TARGET;
pub const LOCKED_TX_ALLOWED_DELTA_BLOCKS: u64 = 1;

pub const MEMPOOL_TX_LIVETIME: u64 = 60 * 60 * 24;
pub const MEMPOOL_TX_FROM_ALT_BLOCK_LIVETIME: u64 = 60 * 60 * 24 * 7;
pub const NUMBER_OF_PERIODS_TO_FORGET_TX_DELETED_FROM_POOL: u64 = 7;

pub const MAX_TX_SIZE_LIMIT: usize = BLOCK_GRANTED_FULL_REWARD_ZONE_V0 * 110 / 100 - COINBASE_BLOB_RESERVED_SIZE;
pub const FUSION_TX_MAX_SIZE: usize = BLOCK_GRANTED_FULL_REWARD_ZONE_V0 * 30 / 100;
pub const FUSION_TX_MIN_INPUT_COUNT: usize = 12;
pub const FUSION_TX_MIN_IN_OUT_COUNT_RATIO: usize = 4;

pub const UPGRADE_HEIGHT_V0: u32 = 1;
pub const UPGRADE_HEIGHT_V1: u32 = 100;
pub const UPGRADE_HEIGHT_V2: u32 = 200;
pub const UPGRADE_HEIGHT_V3: u32 = 300;
/// Percent of votes needed to trigger an upgrade
pub const UPGRADE_VOTING_THRESHOLD: u32 = 90;
pub const UPGRADE_VOTING_WINDOW: u32 = 720;
pub const UPGRADE_WINDOW: u32 = 720 * 7;

pub const BLOCKS_FILENAME: &str = "blocks.dat";
pub const BLOCKSCACHE_FILENAME: &str = "blockscache.dat";
pub const BLOCKINDEXES_FILENAME: &str = "blockindexes.dat";
pub const POOLDATA_FILENAME: &str = "poolstate.bin";
pub const BLOCKCHAIN_INDICES_FILENAME: &str = "blockchainindices.dat";

/// Prefix added to every persisted file name on testnet
pub const TESTNET_FILENAME_PREFIX: &str = "testnet_";
