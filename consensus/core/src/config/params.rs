use serde::{Deserialize, Serialize};

use super::constants::*;

/// The full set of currency parameters.
///
/// This is the raw, unvalidated form: it is what a configuration file deserializes into and
/// what the currency builder starts from. Missing fields take their mainnet default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyParams {
    pub max_block_number: u32,
    pub max_block_blob_size: usize,
    pub max_tx_size: usize,
    /// Varint prefix of textual addresses
    pub public_address_base58_prefix: u64,
    /// Blocks a coinbase output stays locked
    pub mined_money_unlock_window: u32,
    pub timestamp_check_window: usize,
    /// Seconds a block timestamp may run ahead of the node clock
    pub block_future_time_limit: u64,

    pub money_supply: u64,
    pub emission_speed_factor: u32,
    pub coin_version: u8,
    pub genesis_block_reward: u64,
    pub tail_emission_reward: u64,

    pub reward_blocks_window: usize,
    pub min_mixin: u64,
    pub block_granted_full_reward_zone: usize,
    pub block_granted_full_reward_zone_v0: usize,
    pub block_granted_full_reward_zone_v1: usize,
    pub miner_tx_blob_reserved_size: usize,

    pub number_of_decimal_places: usize,
    pub minimum_fee: u64,
    pub default_dust_threshold: u64,

    pub difficulty_target: u64,
    /// Window of the legacy windowed-average retarget
    pub difficulty_window: usize,
    pub difficulty_window_v0: usize,
    /// Window of the LWMA retarget
    pub difficulty_window_v1: usize,
    pub difficulty_cut: usize,

    pub deposit_min_amount: u64,
    pub deposit_min_term: u32,
    pub deposit_max_term: u32,
    pub deposit_min_total_rate_factor: u64,
    pub deposit_max_total_rate: u64,
    /// Interest multiplier applied from `early_depositor_multiplier_height` on
    pub multiplier_factor: u64,
    pub early_depositor_multiplier_height: u32,

    pub max_block_size_initial: usize,
    pub max_block_size_growth_speed_numerator: u64,
    pub max_block_size_growth_speed_denominator: u64,

    pub locked_tx_allowed_delta_seconds: u64,
    pub locked_tx_allowed_delta_blocks: u64,

    pub mempool_tx_live_time: u64,
    pub mempool_tx_from_alt_block_live_time: u64,
    pub number_of_periods_to_forget_tx_deleted_from_pool: u64,

    pub transaction_max_size: usize,
    pub fusion_tx_max_size: usize,
    pub fusion_tx_min_input_count: usize,
    pub fusion_tx_min_in_out_count_ratio: usize,

    pub upgrade_height_v0: u32,
    pub upgrade_height_v1: u32,
    pub upgrade_height_v2: u32,
    pub upgrade_height_v3: u32,
    pub upgrade_voting_threshold: u32,
    pub upgrade_voting_window: u32,
    pub upgrade_window: u32,

    pub blocks_file_name: String,
    pub blocks_cache_file_name: String,
    pub block_indexes_file_name: String,
    pub tx_pool_file_name: String,
    pub blockchain_indices_file_name: String,

    pub testnet: bool,
}

impl Default for CurrencyParams {
    fn default() -> Self {
        Self {
            max_block_number: MAX_BLOCK_NUMBER,
            max_block_blob_size: MAX_BLOCK_BLOB_SIZE,
            max_tx_size: MAX_TX_SIZE,
            public_address_base58_prefix: PUBLIC_ADDRESS_BASE58_PREFIX,
            mined_money_unlock_window: MINED_MONEY_UNLOCK_WINDOW,
            timestamp_check_window: TIMESTAMP_CHECK_WINDOW,
            block_future_time_limit: BLOCK_FUTURE_TIME_LIMIT,

            money_supply: MONEY_SUPPLY,
            emission_speed_factor: EMISSION_SPEED_FACTOR,
            coin_version: COIN_VERSION,
            genesis_block_reward: GENESIS_BLOCK_REWARD,
            tail_emission_reward: TAIL_EMISSION_REWARD,

            reward_blocks_window: REWARD_BLOCKS_WINDOW,
            min_mixin: MIN_MIXIN,
            block_granted_full_reward_zone: BLOCK_GRANTED_FULL_REWARD_ZONE,
            block_granted_full_reward_zone_v0: BLOCK_GRANTED_FULL_REWARD_ZONE_V0,
            block_granted_full_reward_zone_v1: BLOCK_GRANTED_FULL_REWARD_ZONE_V1,
            miner_tx_blob_reserved_size: COINBASE_BLOB_RESERVED_SIZE,

            number_of_decimal_places: DISPLAY_DECIMAL_POINT,
            minimum_fee: MINIMUM_FEE,
            default_dust_threshold: DEFAULT_DUST_THRESHOLD,

            difficulty_target: DIFFICULTY_TARGET,
            difficulty_window: DIFFICULTY_WINDOW,
            difficulty_window_v0: DIFFICULTY_WINDOW_V0,
            difficulty_window_v1: DIFFICULTY_WINDOW_V1,
            difficulty_cut: DIFFICULTY_CUT,

            deposit_min_amount: DEPOSIT_MIN_AMOUNT,
            deposit_min_term: DEPOSIT_MIN_TERM,
            deposit_max_term: DEPOSIT_MAX_TERM,
            deposit_min_total_rate_factor: DEPOSIT_MIN_TOTAL_RATE_FACTOR,
            deposit_max_total_rate: DEPOSIT_MAX_TOTAL_RATE,
            multiplier_factor: MULTIPLIER_FACTOR,
            early_depositor_multiplier_height: END_MULTIPLIER_BLOCK,

            max_block_size_initial: MAX_BLOCK_SIZE_INITIAL,
            max_block_size_growth_speed_numerator: MAX_BLOCK_SIZE_GROWTH_SPEED_NUMERATOR,
            max_block_size_growth_speed_denominator: MAX_BLOCK_SIZE_GROWTH_SPEED_DENOMINATOR,

            locked_tx_allowed_delta_seconds: LOCKED_TX_ALLOWED_DELTA_SECONDS,
            locked_tx_allowed_delta_blocks: LOCKED_TX_ALLOWED_DELTA_BLOCKS,

            mempool_tx_live_time: MEMPOOL_TX_LIVETIME,
            mempool_tx_from_alt_block_live_time: MEMPOOL_TX_FROM_ALT_BLOCK_LIVETIME,
            number_of_periods_to_forget_tx_deleted_from_pool: NUMBER_OF_PERIODS_TO_FORGET_TX_DELETED_FROM_POOL,

            transaction_max_size: MAX_TX_SIZE_LIMIT,
            fusion_tx_max_size: FUSION_TX_MAX_SIZE,
            fusion_tx_min_input_count: FUSION_TX_MIN_INPUT_COUNT,
            fusion_tx_min_in_out_count_ratio: FUSION_TX_MIN_IN_OUT_COUNT_RATIO,

            upgrade_height_v0: UPGRADE_HEIGHT_V0,
            upgrade_height_v1: UPGRADE_HEIGHT_V1,
            upgrade_height_v2: UPGRADE_HEIGHT_V2,
            upgrade_height_v3: UPGRADE_HEIGHT_V3,
            upgrade_voting_threshold: UPGRADE_VOTING_THRESHOLD,
            upgrade_voting_window: UPGRADE_VOTING_WINDOW,
            upgrade_window: UPGRADE_WINDOW,

            blocks_file_name: BLOCKS_FILENAME.to_string(),
            blocks_cache_file_name: BLOCKSCACHE_FILENAME.to_string(),
            block_indexes_file_name: BLOCKINDEXES_FILENAME.to_string(),
            tx_pool_file_name: POOLDATA_FILENAME.to_string(),
            blockchain_indices_file_name: BLOCKCHAIN_INDICES_FILENAME.to_string(),

            testnet: false,
        }
    }
}
