//! The currency: an immutable, validated parameter set plus the collaborators the rules call out to.
//!
//! A [`Currency`] is only ever produced by [`CurrencyBuilder::build`]. Once built it is shared
//! freely between threads; every rule in [`crate::process`] is a method taking `&Currency`.

pub mod builder;

use std::sync::Arc;

use consensus_core::block::Block;
use consensus_core::codec::{AddressCodec, ObjectCodec};
use consensus_core::config::CurrencyParams;
use consensus_core::constants::{BLOCK_MAJOR_VERSION_2, BLOCK_MAJOR_VERSION_3, BLOCK_MAJOR_VERSION_4, NEXT_BLOCK_MAJOR_LIMIT};
use consensus_core::crypto::{BlockHashing, KeyOps};
use consensus_core::errors::ConsensusError;
use consensus_core::keys::AccountPublicAddress;
use consensus_core::{Difficulty, Hash};
use consensus_pow::{DifficultyCalculator, DifficultyConfig, PowValidator};

pub use builder::{CurrencyBuilder, MAX_DIFFICULTY_TARGET};

/// Every capability a currency needs from the outside world.
///
/// Implemented automatically for any type providing the four collaborator traits.
pub trait CurrencyBackend: KeyOps + BlockHashing + ObjectCodec + AddressCodec {}

impl<T: KeyOps + BlockHashing + ObjectCodec + AddressCodec> CurrencyBackend for T {}

/// Validated currency policy
#[derive(Clone)]
pub struct Currency {
    params: CurrencyParams,
    coin: u64,
    backend: Arc<dyn CurrencyBackend>,
    difficulty: DifficultyCalculator,
    genesis_block: Block,
    genesis_block_hash: Hash,
}

macro_rules! param_accessors {
    ($($name:ident: $ty:ty),* $(,)?) => {
        impl Currency {
            $(
                #[inline]
                pub fn $name(&self) -> $ty {
                    self.params.$name
                }
            )*
        }
    };
}

macro_rules! file_name_accessors {
    ($($name:ident),* $(,)?) => {
        impl Currency {
            $(
                #[inline]
                pub fn $name(&self) -> &str {
                    &self.params.$name
                }
            )*
        }
    };
}

param_accessors! {
    max_block_number: u32,
    max_block_blob_size: usize,
    max_tx_size: usize,
    public_address_base58_prefix: u64,
    mined_money_unlock_window: u32,
    timestamp_check_window: usize,
    block_future_time_limit: u64,
    money_supply: u64,
    emission_speed_factor: u32,
    coin_version: u8,
    genesis_block_reward: u64,
    tail_emission_reward: u64,
    reward_blocks_window: usize,
    min_mixin: u64,
    block_granted_full_reward_zone: usize,
    block_granted_full_reward_zone_v0: usize,
    block_granted_full_reward_zone_v1: usize,
    miner_tx_blob_reserved_size: usize,
    number_of_decimal_places: usize,
    minimum_fee: u64,
    default_dust_threshold: u64,
    difficulty_target: u64,
    difficulty_window: usize,
    difficulty_window_v0: usize,
    difficulty_window_v1: usize,
    difficulty_cut: usize,
    deposit_min_amount: u64,
    deposit_min_term: u32,
    deposit_max_term: u32,
    deposit_min_total_rate_factor: u64,
    deposit_max_total_rate: u64,
    multiplier_factor: u64,
    early_depositor_multiplier_height: u32,
    max_block_size_initial: usize,
    max_block_size_growth_speed_numerator: u64,
    max_block_size_growth_speed_denominator: u64,
    locked_tx_allowed_delta_seconds: u64,
    locked_tx_allowed_delta_blocks: u64,
    mempool_tx_live_time: u64,
    mempool_tx_from_alt_block_live_time: u64,
    number_of_periods_to_forget_tx_deleted_from_pool: u64,
    transaction_max_size: usize,
    fusion_tx_max_size: usize,
    fusion_tx_min_input_count: usize,
    fusion_tx_min_in_out_count_ratio: usize,
    upgrade_height_v0: u32,
    upgrade_height_v1: u32,
    upgrade_height_v2: u32,
    upgrade_height_v3: u32,
    upgrade_voting_threshold: u32,
    upgrade_voting_window: u32,
    upgrade_window: u32,
}

file_name_accessors! {
    blocks_file_name,
    blocks_cache_file_name,
    block_indexes_file_name,
    tx_pool_file_name,
    blockchain_indices_file_name,
}

impl Currency {
    pub(crate) fn new(
        params: CurrencyParams,
        backend: Arc<dyn CurrencyBackend>,
        genesis_block: Block,
        genesis_block_hash: Hash,
    ) -> Self {
        let coin = 10u64.pow(params.number_of_decimal_places as u32);
        let difficulty = DifficultyCalculator::new(DifficultyConfig {
            target: params.difficulty_target,
            window: params.difficulty_window,
            cut: params.difficulty_cut,
            lwma_window: params.difficulty_window_v1,
            future_time_limit: params.block_future_time_limit,
        });
        Self { params, coin, backend, difficulty, genesis_block, genesis_block_hash }
    }

    pub fn params(&self) -> &CurrencyParams {
        &self.params
    }

    /// Atomic units per whole coin, `10^number_of_decimal_places`
    pub fn coin(&self) -> u64 {
        self.coin
    }

    pub fn is_testnet(&self) -> bool {
        self.params.testnet
    }

    pub fn backend(&self) -> &dyn CurrencyBackend {
        &*self.backend
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis_block
    }

    pub fn genesis_block_hash(&self) -> Hash {
        self.genesis_block_hash
    }

    /// Height at which blocks of `major_version` become valid. Versions without a scheduled
    /// upgrade never activate.
    pub fn upgrade_height(&self, major_version: u8) -> u32 {
        match major_version {
            BLOCK_MAJOR_VERSION_2 => self.params.upgrade_height_v0,
            BLOCK_MAJOR_VERSION_3 => self.params.upgrade_height_v1,
            BLOCK_MAJOR_VERSION_4 => self.params.upgrade_height_v2,
            NEXT_BLOCK_MAJOR_LIMIT => self.params.upgrade_height_v3,
            _ => u32::MAX,
        }
    }

    /// Largest cumulative block size allowed at `height`; grows linearly from the initial size.
    pub fn max_block_cumulative_size(&self, height: u64) -> usize {
        let growth = height as u128 * self.params.max_block_size_growth_speed_numerator as u128
            / self.params.max_block_size_growth_speed_denominator as u128;
        let size = self.params.max_block_size_initial as u128 + growth;
        usize::try_from(size).unwrap_or(usize::MAX)
    }

    pub fn difficulty_calculator(&self) -> &DifficultyCalculator {
        &self.difficulty
    }

    /// Legacy windowed-average retarget
    pub fn next_difficulty_v1(&self, timestamps: &[u64], cumulative_difficulties: &[Difficulty]) -> Difficulty {
        self.difficulty.next_difficulty_v1(timestamps, cumulative_difficulties)
    }

    /// LWMA-2 retarget
    pub fn next_difficulty(&self, timestamps: &[u64], cumulative_difficulties: &[Difficulty], height: u64) -> Difficulty {
        self.difficulty.next_difficulty(timestamps, cumulative_difficulties, height)
    }

    /// Retarget for the block at `height`: LWMA from the v1 upgrade height on, the windowed
    /// average before it.
    pub fn next_difficulty_for_height(
        &self,
        height: u32,
        timestamps: &[u64],
        cumulative_difficulties: &[Difficulty],
    ) -> Difficulty {
        if height >= self.params.upgrade_height_v1 {
            self.next_difficulty(timestamps, cumulative_difficulties, height as u64)
        } else {
            self.next_difficulty_v1(timestamps, cumulative_difficulties)
        }
    }

    /// Validates the proof of work of `block`, returning its proof-of-work hash.
    pub fn check_proof_of_work(&self, block: &Block, difficulty: Difficulty) -> Result<Hash, ConsensusError> {
        PowValidator::new(&*self.backend, self.genesis_block_hash).check_proof_of_work(block, difficulty)
    }

    pub fn account_address_as_string(&self, address: &AccountPublicAddress) -> String {
        self.backend.encode_address(self.params.public_address_base58_prefix, address)
    }

    /// Decodes a textual address, rejecting addresses of other networks.
    pub fn parse_account_address_string(&self, text: &str) -> Result<AccountPublicAddress, ConsensusError> {
        let (prefix, address) = self.backend.decode_address(text).ok_or(ConsensusError::InvalidAddress)?;
        let expected = self.params.public_address_base58_prefix;
        if prefix != expected {
            log::debug!("Wrong address prefix: {prefix}, expected {expected}");
            return Err(ConsensusError::WrongAddressPrefix { found: prefix, expected });
        }
        Ok(address)
    }
}
