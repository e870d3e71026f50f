pub mod difficulty;
pub mod validator;

use consensus_core::{Difficulty, Hash};
use primitive_types::U256;

pub use difficulty::{DifficultyCalculator, DifficultyConfig, INITIAL_DIFFICULTY_GUESS};
pub use validator::PowValidator;

/// Checks a proof-of-work hash against `difficulty`.
///
/// The hash is read as a little-endian 256-bit number; it passes when
/// `hash * difficulty` still fits in 256 bits, i.e. `hash < 2^256 / difficulty`.
#[inline]
#[must_use]
pub fn check_hash(hash: &Hash, difficulty: Difficulty) -> bool {
    let value = U256::from_little_endian(hash.as_bytes());
    let (_, overflow) = value.overflowing_mul(U256::from(difficulty));
    !overflow
}
