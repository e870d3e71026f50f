//! Chained, validating construction of a [`Currency`].
//!
//! The builder starts from the mainnet defaults. Setters whose value can make a rule ill-defined
//! validate it and return `Result<Self, ConfigError>`; the rest return `Self`. Relations between
//! parameters are checked once, in [`CurrencyBuilder::build`].

use std::path::Path;
use std::sync::Arc;

use consensus_core::config::constants::TESTNET_FILENAME_PREFIX;
use consensus_core::config::genesis::default_genesis;
use consensus_core::config::CurrencyParams;
use consensus_core::constants::CURRENT_BLOCK_MAJOR;
use consensus_core::errors::{ConfigError, ConsensusError};
use consensus_core::keys::AccountPublicAddress;
use consensus_core::tx::Transaction;

use super::{Currency, CurrencyBackend};

/// Largest number of decimal places for which a whole coin still fits in 64 bits
pub const MAX_DECIMAL_PLACES: usize = 19;

/// Largest block target, in seconds, the retarget arithmetic accepts without overflow
pub const MAX_DIFFICULTY_TARGET: u64 = i64::MAX as u64 / 8;

macro_rules! plain_setters {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(mut self, value: $ty) -> Self {
                self.params.$name = value;
                self
            }
        )*
    };
}

#[derive(Clone)]
pub struct CurrencyBuilder {
    params: CurrencyParams,
    backend: Arc<dyn CurrencyBackend>,
}

impl CurrencyBuilder {
    /// Builder preloaded with the mainnet parameters
    pub fn new(backend: Arc<dyn CurrencyBackend>) -> Self {
        Self { params: CurrencyParams::default(), backend }
    }

    /// Builder preloaded with `params`, each constrained value going through its setter.
    pub fn from_params(backend: Arc<dyn CurrencyBackend>, params: CurrencyParams) -> Result<Self, ConfigError> {
        let builder = Self { params: params.clone(), backend };
        builder
            .emission_speed_factor(params.emission_speed_factor)?
            .number_of_decimal_places(params.number_of_decimal_places)?
            .difficulty_window(params.difficulty_window)?
            .deposit_max_term(params.deposit_max_term)?
            .max_block_size_growth_speed_denominator(params.max_block_size_growth_speed_denominator)?
            .upgrade_voting_threshold(params.upgrade_voting_threshold)?
            .upgrade_window(params.upgrade_window)
    }

    pub fn from_toml_str(backend: Arc<dyn CurrencyBackend>, text: &str) -> Result<Self, ConfigError> {
        let params: CurrencyParams = toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Self::from_params(backend, params)
    }

    /// Loads parameters from a TOML file, falling back to the mainnet defaults when the file
    /// does not exist.
    pub fn load(backend: Arc<dyn CurrencyBackend>, path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(backend, &content)
        } else {
            log::debug!("Currency config {} not found, using defaults", path.display());
            Ok(Self::new(backend))
        }
    }

    pub fn for_network(backend: Arc<dyn CurrencyBackend>, network: &str) -> Result<Self, ConfigError> {
        match network {
            "mainnet" => Ok(Self::new(backend)),
            "testnet" => Ok(Self::new(backend).testnet(true)),
            _ => Err(ConfigError::UnknownNetwork(network.to_string())),
        }
    }

    pub fn params(&self) -> &CurrencyParams {
        &self.params
    }

    /// Validates cross-parameter constraints, applies the testnet adjustments and assembles the
    /// genesis block.
    pub fn build(self) -> Result<Currency, ConfigError> {
        let mut params = self.params;
        if params.difficulty_target == 0 || params.difficulty_target > MAX_DIFFICULTY_TARGET {
            return Err(ConfigError::invalid("difficulty_target", params.difficulty_target));
        }
        let trimmed = params.difficulty_cut.checked_mul(2);
        if trimmed.map_or(true, |trimmed| trimmed > params.difficulty_window - 2) {
            return Err(ConfigError::Inconsistent(format!(
                "difficulty cut {} leaves fewer than two of {} samples",
                params.difficulty_cut, params.difficulty_window
            )));
        }
        if params.deposit_min_term > params.deposit_max_term {
            return Err(ConfigError::Inconsistent(format!(
                "deposit min term {} exceeds max term {}",
                params.deposit_min_term, params.deposit_max_term
            )));
        }

        if params.testnet {
            params.upgrade_height_v0 = u32::MAX;
            params.upgrade_height_v1 = u32::MAX;
            params.upgrade_height_v2 = u32::MAX;
            params.upgrade_height_v3 = u32::MAX;
            for name in [
                &mut params.blocks_file_name,
                &mut params.blocks_cache_file_name,
                &mut params.block_indexes_file_name,
                &mut params.tx_pool_file_name,
                &mut params.blockchain_indices_file_name,
            ] {
                name.insert_str(0, TESTNET_FILENAME_PREFIX);
            }
        }

        let genesis = default_genesis();
        let blob = genesis.coinbase_blob().map_err(|e| ConsensusError::SerializationError(e.to_string()))?;
        let base_transaction = self.backend.transaction_from_binary(&blob)?;
        let genesis_block = genesis.to_block(base_transaction, params.testnet);
        let genesis_block_hash = self.backend.block_hash(&genesis_block).ok_or(ConfigError::GenesisHashFailed)?;

        log::debug!("Currency initialized, testnet: {}, genesis block hash: {}", params.testnet, genesis_block_hash);
        Ok(Currency::new(params, self.backend, genesis_block, genesis_block_hash))
    }

    /// Builds a fresh genesis coinbase paying the whole first emission step to an empty
    /// address. Each call embeds a new random transaction key.
    pub fn generate_genesis_transaction(&self) -> Result<Transaction, ConfigError> {
        let currency = self.clone().build()?;
        let transaction = currency.construct_miner_tx(
            CURRENT_BLOCK_MAJOR,
            0,
            0,
            0,
            0,
            0,
            &AccountPublicAddress::default(),
            &[],
            1,
        )?;
        Ok(transaction)
    }

    pub fn emission_speed_factor(mut self, value: u32) -> Result<Self, ConfigError> {
        if value == 0 || value > u64::BITS {
            return Err(ConfigError::invalid("emission_speed_factor", value));
        }
        self.params.emission_speed_factor = value;
        Ok(self)
    }

    pub fn number_of_decimal_places(mut self, value: usize) -> Result<Self, ConfigError> {
        if value > MAX_DECIMAL_PLACES {
            return Err(ConfigError::invalid("number_of_decimal_places", value));
        }
        self.params.number_of_decimal_places = value;
        Ok(self)
    }

    pub fn difficulty_window(mut self, value: usize) -> Result<Self, ConfigError> {
        if value < 2 {
            return Err(ConfigError::invalid("difficulty_window", value));
        }
        self.params.difficulty_window = value;
        Ok(self)
    }

    /// The interest divisor `100 * max_term` must fit in 32 bits.
    pub fn deposit_max_term(mut self, value: u32) -> Result<Self, ConfigError> {
        if value >= u32::MAX / 100 {
            return Err(ConfigError::invalid("deposit_max_term", value));
        }
        self.params.deposit_max_term = value;
        Ok(self)
    }

    pub fn max_block_size_growth_speed_denominator(mut self, value: u64) -> Result<Self, ConfigError> {
        if value == 0 {
            return Err(ConfigError::invalid("max_block_size_growth_speed_denominator", value));
        }
        self.params.max_block_size_growth_speed_denominator = value;
        Ok(self)
    }

    /// Percentage of votes needed to schedule an upgrade
    pub fn upgrade_voting_threshold(mut self, value: u32) -> Result<Self, ConfigError> {
        if value == 0 || value > 100 {
            return Err(ConfigError::invalid("upgrade_voting_threshold", value));
        }
        self.params.upgrade_voting_threshold = value;
        Ok(self)
    }

    pub fn upgrade_window(mut self, value: u32) -> Result<Self, ConfigError> {
        if value == 0 {
            return Err(ConfigError::invalid("upgrade_window", value));
        }
        self.params.upgrade_window = value;
        Ok(self)
    }

    plain_setters! {
        max_block_number: u32,
        max_block_blob_size: usize,
        max_tx_size: usize,
        public_address_base58_prefix: u64,
        mined_money_unlock_window: u32,
        timestamp_check_window: usize,
        block_future_time_limit: u64,
        money_supply: u64,
        coin_version: u8,
        genesis_block_reward: u64,
        tail_emission_reward: u64,
        reward_blocks_window: usize,
        min_mixin: u64,
        block_granted_full_reward_zone: usize,
        block_granted_full_reward_zone_v0: usize,
        block_granted_full_reward_zone_v1: usize,
        miner_tx_blob_reserved_size: usize,
        minimum_fee: u64,
        default_dust_threshold: u64,
        difficulty_target: u64,
        difficulty_window_v0: usize,
        difficulty_window_v1: usize,
        difficulty_cut: usize,
        deposit_min_amount: u64,
        deposit_min_term: u32,
        deposit_min_total_rate_factor: u64,
        deposit_max_total_rate: u64,
        multiplier_factor: u64,
        early_depositor_multiplier_height: u32,
        max_block_size_initial: usize,
        max_block_size_growth_speed_numerator: u64,
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
        upgrade_voting_window: u32,
        blocks_file_name: String,
        blocks_cache_file_name: String,
        block_indexes_file_name: String,
        tx_pool_file_name: String,
        blockchain_indices_file_name: String,
        testnet: bool,
    }
}
