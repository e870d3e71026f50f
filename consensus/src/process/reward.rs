//! Emission schedule and block size penalty.

use cn_math::{div128_32, mul128};
use consensus_core::constants::{BLOCK_MAJOR_VERSION_3, TAIL_EMISSION_FLOOR_COINS, TAIL_EMISSION_FLOOR_END_HEIGHT};
use consensus_core::errors::ConsensusError;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// Coinbase payout of a block and how much of it is newly minted.
///
/// `emission_change` goes negative when the size penalty burns more of the fee than the
/// block emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockReward {
    pub reward: u64,
    pub emission_change: i64,
}

/// Shrinks `amount` for a block larger than the median:
/// `amount * size * (2 * median - size) / median^2`.
///
/// The caller guarantees `current_block_size <= 2 * median_size`.
pub fn get_penalized_amount(amount: u64, median_size: usize, current_block_size: usize) -> Result<u64, ConsensusError> {
    if amount == 0 || current_block_size <= median_size {
        return Ok(amount);
    }
    let median = u32::try_from(median_size).map_err(|_| ConsensusError::ArithmeticOverflow)?;
    let size = current_block_size as u64;
    let headroom = (2 * median as u64).checked_sub(size).ok_or(ConsensusError::BlockTooBig {
        size: current_block_size,
        limit: 2 * median as u64,
    })?;
    let (product_lo, product_hi) = mul128(amount, size * headroom);
    let (hi, lo, _) = div128_32(product_hi, product_lo, median);
    let (hi, lo, _) = div128_32(hi, lo, median);
    if hi != 0 || lo >= amount {
        return Err(ConsensusError::InvariantViolation(format!(
            "penalized amount {lo} of {amount} for block size {current_block_size} over median {median_size}"
        )));
    }
    Ok(lo)
}

impl Currency {
    /// Size below which a block of `major_version` is never penalized
    pub fn block_granted_full_reward_zone_by_block_version(&self, major_version: u8) -> usize {
        if major_version >= BLOCK_MAJOR_VERSION_3 {
            self.block_granted_full_reward_zone()
        } else {
            self.block_granted_full_reward_zone_v0()
        }
    }

    /// Reward for the block at `height` of `current_block_size` bytes, given the median size of
    /// the preceding blocks, the coins emitted so far and the fees the block collects.
    pub fn get_block_reward(
        &self,
        major_version: u8,
        median_size: usize,
        current_block_size: usize,
        already_generated_coins: u64,
        fee: u64,
        height: u32,
    ) -> Result<BlockReward, ConsensusError> {
        let money_supply = self.money_supply();
        let remaining = money_supply.checked_sub(already_generated_coins).ok_or(ConsensusError::ArithmeticOverflow)?;
        let mut base_reward = remaining.checked_shr(self.emission_speed_factor()).unwrap_or(0);

        if height == 1 {
            base_reward = self.genesis_block_reward();
        }

        if (2..=TAIL_EMISSION_FLOOR_END_HEIGHT).contains(&height) {
            let floor = TAIL_EMISSION_FLOOR_COINS.saturating_mul(self.coin());
            let floor_fits = already_generated_coins.checked_add(floor).is_some_and(|total| total <= money_supply);
            if floor_fits || base_reward < floor {
                base_reward = floor;
            }
        }

        let median_size = median_size.max(self.block_granted_full_reward_zone_by_block_version(major_version));
        if current_block_size as u128 > 2 * median_size as u128 {
            log::trace!("Block cumulative size is too big: {current_block_size}, expected less than {}", 2 * median_size as u64);
            return Err(ConsensusError::BlockTooBig { size: current_block_size, limit: 2 * median_size as u64 });
        }

        let penalized_base_reward = get_penalized_amount(base_reward, median_size, current_block_size)?;
        if self.coin_version() == 1 {
            let reward = penalized_base_reward.checked_add(fee).ok_or(ConsensusError::ArithmeticOverflow)?;
            return Ok(BlockReward { reward, emission_change: penalized_base_reward as i64 });
        }

        let penalized_fee = get_penalized_amount(fee, median_size, current_block_size)?;
        let emission_change = (penalized_base_reward as i64).wrapping_sub((fee - penalized_fee) as i64);
        let reward = penalized_base_reward.checked_add(penalized_fee).ok_or(ConsensusError::ArithmeticOverflow)?;
        Ok(BlockReward { reward, emission_change })
    }
}
