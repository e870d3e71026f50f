//! Difficulty retargeting.
//!
//! Two algorithms share the same inputs: the timestamps and cumulative difficulties of the
//! trailing blocks, oldest first. [`DifficultyCalculator::next_difficulty_v1`] is the original
//! windowed average with outlier trimming; [`DifficultyCalculator::next_difficulty`] is LWMA-2.
//! Both return 0 when the retarget is indeterminate; callers must reject such a value.

use cn_math::mul_div_ceil;
use consensus_core::config::constants::{
    BLOCK_FUTURE_TIME_LIMIT, DIFFICULTY_CUT, DIFFICULTY_TARGET, DIFFICULTY_WINDOW, DIFFICULTY_WINDOW_V1,
};
use consensus_core::Difficulty;
use serde::{Deserialize, Serialize};

/// Difficulty returned by LWMA until the chain has a full window
pub const INITIAL_DIFFICULTY_GUESS: Difficulty = 1;

/// Configuration for difficulty adjustment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Target solve time in seconds
    pub target: u64,
    /// Samples considered by the windowed average
    pub window: usize,
    /// Outliers trimmed from each end of the windowed average
    pub cut: usize,
    /// LWMA window; `lwma_window - 1` solve times are weighed
    pub lwma_window: usize,
    /// Largest negative solve time LWMA accepts, in seconds
    pub future_time_limit: u64,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            target: DIFFICULTY_TARGET,
            window: DIFFICULTY_WINDOW,
            cut: DIFFICULTY_CUT,
            lwma_window: DIFFICULTY_WINDOW_V1,
            future_time_limit: BLOCK_FUTURE_TIME_LIMIT,
        }
    }
}

/// Stateless retarget calculator
#[derive(Clone, Debug, Default)]
pub struct DifficultyCalculator {
    config: DifficultyConfig,
}

impl DifficultyCalculator {
    pub fn new(config: DifficultyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    /// Windowed average retarget.
    ///
    /// Only the first `window` samples are used. Timestamps are sorted before trimming while
    /// cumulative difficulties keep their original order; chain history depends on this.
    pub fn next_difficulty_v1(&self, timestamps: &[u64], cumulative_difficulties: &[Difficulty]) -> Difficulty {
        let window = self.config.window;
        let length = timestamps.len().min(cumulative_difficulties.len()).min(window);
        if length <= 1 {
            return 1;
        }

        let mut timestamps = timestamps[..length].to_vec();
        timestamps.sort_unstable();
        let cumulative_difficulties = &cumulative_difficulties[..length];

        let kept = window.saturating_sub(self.config.cut.saturating_mul(2)).max(2);
        let (cut_begin, cut_end) = if length <= kept {
            (0, length)
        } else {
            let cut_begin = (length - kept + 1) / 2;
            (cut_begin, cut_begin + kept)
        };
        debug_assert!(cut_begin + 2 <= cut_end && cut_end <= length);

        let time_span = timestamps[cut_end - 1].wrapping_sub(timestamps[cut_begin]).max(1);
        let total_work = cumulative_difficulties[cut_end - 1].wrapping_sub(cumulative_difficulties[cut_begin]);

        log::trace!("Windowed retarget over [{cut_begin}, {cut_end}): work {total_work}, span {time_span}");
        mul_div_ceil(total_work, self.config.target, time_span).unwrap_or(0)
    }

    /// LWMA-2 retarget.
    ///
    /// Weighs the last `N = lwma_window - 1` solve times linearly, recent blocks heaviest. When
    /// the last three solve times add up to less than 80% of the target the result is replaced by
    /// the previous block's difficulty plus 10%. The integer conversions of the reference
    /// algorithm are kept: the window length is signed, the difficulty delta product is unsigned
    /// and wraps, the result is signed until returned.
    pub fn next_difficulty(&self, timestamps: &[u64], cumulative_difficulties: &[Difficulty], _height: u64) -> Difficulty {
        let t = i64::try_from(self.config.target).unwrap_or(i64::MAX);
        let n = (self.config.lwma_window as u64).wrapping_sub(1) as i64;
        let ftl = self.config.future_time_limit as i64;

        // A negative window compares as huge here, so it never leaves bootstrap.
        if timestamps.len() as u64 <= n as u64 || cumulative_difficulties.len() as u64 <= n as u64 {
            return INITIAL_DIFFICULTY_GUESS;
        }

        let mut weighted_solve_time: i64 = 0;
        let mut last_three_solve_time: i64 = 0;
        for i in 1..=n {
            let idx = i as usize;
            let solve_time = (timestamps[idx] as i64)
                .wrapping_sub(timestamps[idx - 1] as i64)
                .min(t.saturating_mul(6))
                .max(-ftl);
            weighted_solve_time = weighted_solve_time.wrapping_add(solve_time.wrapping_mul(i));
            if i > n - 3 {
                last_three_solve_time = last_three_solve_time.wrapping_add(solve_time);
            }
        }

        let n_idx = n as usize;
        let work = cumulative_difficulties[n_idx]
            .wrapping_sub(cumulative_difficulties[0])
            .wrapping_mul(t as u64)
            .wrapping_mul((n + 1) as u64)
            .wrapping_mul(99);
        let divisor = weighted_solve_time.wrapping_mul(200) as u64;
        let mut next = if divisor == 0 { 0 } else { (work / divisor) as i64 };

        if n_idx >= 1 && last_three_solve_time < t.saturating_mul(8) / 10 {
            let previous = cumulative_difficulties[n_idx].wrapping_sub(cumulative_difficulties[n_idx - 1]) as i64;
            next = previous.wrapping_mul(110) / 100;
        }

        next as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator(target: u64, window: usize, cut: usize) -> DifficultyCalculator {
        DifficultyCalculator::new(DifficultyConfig { target, window, cut, ..Default::default() })
    }

    fn steady_chain(count: u64, spacing: u64, per_block: u64) -> (Vec<u64>, Vec<u64>) {
        let timestamps = (0..count).map(|i| i * spacing).collect();
        let cumulative = (0..count).map(|i| i * per_block).collect();
        (timestamps, cumulative)
    }

    #[test]
    fn test_v1_needs_two_samples() {
        let calc = DifficultyCalculator::default();
        assert_eq!(calc.next_difficulty_v1(&[], &[]), 1);
        assert_eq!(calc.next_difficulty_v1(&[100], &[5000]), 1);
    }

    #[test]
    fn test_v1_scales_with_target() {
        let (timestamps, cumulative) = steady_chain(10, 120, 100);
        assert_eq!(calculator(120, 720, 60).next_difficulty_v1(&timestamps, &cumulative), 100);
        assert_eq!(calculator(240, 720, 60).next_difficulty_v1(&timestamps, &cumulative), 200);
    }

    #[test]
    fn test_v1_trims_outliers() {
        // window 10, cut 2: samples [2, 8) are used
        let (timestamps, cumulative) = steady_chain(10, 10, 5);
        assert_eq!(calculator(10, 10, 2).next_difficulty_v1(&timestamps, &cumulative), 5);
    }

    #[test]
    fn test_v1_sorts_timestamps_only() {
        let timestamps = [20, 0, 10];
        let cumulative = [0, 10, 30];
        // span 20 after sorting, work taken from the unsorted difficulties: 30 - 0
        assert_eq!(calculator(10, 720, 60).next_difficulty_v1(&timestamps, &cumulative), 15);
    }

    #[test]
    fn test_v1_zero_span_counts_as_one_second() {
        assert_eq!(calculator(3, 720, 60).next_difficulty_v1(&[5, 5], &[0, 7]), 21);
    }

    #[test]
    fn test_v1_truncates_to_leading_window() {
        let (mut timestamps, mut cumulative) = steady_chain(10, 120, 100);
        timestamps.extend([1_000_000, 2_000_000]);
        cumulative.extend([u64::MAX - 1, u64::MAX]);
        assert_eq!(calculator(120, 10, 2).next_difficulty_v1(&timestamps, &cumulative), 100);
    }

    #[test]
    fn test_v1_overflow_returns_zero() {
        assert_eq!(calculator(120, 720, 60).next_difficulty_v1(&[0, 1], &[0, u64::MAX]), 0);
    }

    #[test]
    fn test_extreme_config_does_not_overflow() {
        let calc = calculator(u64::MAX, 10, usize::MAX);
        let (timestamps, cumulative) = steady_chain(61, 120, 100);
        // Two samples are kept; the work times the target no longer fits
        assert_eq!(calc.next_difficulty_v1(&timestamps, &cumulative), 0);
        calc.next_difficulty(&timestamps, &cumulative, 100);
    }

    #[test]
    fn test_lwma_bootstrap() {
        let calc = DifficultyCalculator::default();
        let (timestamps, cumulative) = steady_chain(60, 1, 1_000_000);
        assert_eq!(calc.next_difficulty(&timestamps, &cumulative, 60), INITIAL_DIFFICULTY_GUESS);
        assert_eq!(calc.next_difficulty(&[], &[], 0), INITIAL_DIFFICULTY_GUESS);
    }

    #[test]
    fn test_lwma_zero_window_never_leaves_bootstrap() {
        let calc = DifficultyCalculator::new(DifficultyConfig { lwma_window: 0, ..Default::default() });
        let (timestamps, cumulative) = steady_chain(500, 120, 1000);
        assert_eq!(calc.next_difficulty(&timestamps, &cumulative, 500), INITIAL_DIFFICULTY_GUESS);
    }

    #[test]
    fn test_lwma_steady_state() {
        // On-target blocks: next = D * 99 / 100
        let calc = DifficultyCalculator::default();
        let (timestamps, cumulative) = steady_chain(61, 120, 1000);
        assert_eq!(calc.next_difficulty(&timestamps, &cumulative, 61), 990);
    }

    #[test]
    fn test_lwma_fast_tail_raises_previous_difficulty() {
        let calc = DifficultyCalculator::default();
        let (mut timestamps, cumulative) = steady_chain(61, 120, 1000);
        for (offset, ts) in timestamps.iter_mut().skip(58).enumerate() {
            *ts = 57 * 120 + 10 * (offset as u64 + 1);
        }
        assert_eq!(calc.next_difficulty(&timestamps, &cumulative, 61), 1100);
    }

    #[test]
    fn test_lwma_identical_timestamps() {
        let calc = DifficultyCalculator::default();
        let timestamps = vec![1_000; 61];
        let cumulative: Vec<u64> = (0..61).map(|i| i * 1000).collect();
        assert_eq!(calc.next_difficulty(&timestamps, &cumulative, 61), 1100);
    }
}
