//! Wallet-side estimate of how many key inputs fit in a transaction of a given size.

use cn_hashes::HASH_SIZE;
use consensus_core::keys::KEY_SIZE;

use crate::currency::Currency;

const KEY_IMAGE_SIZE: usize = KEY_SIZE;
const OUTPUT_KEY_SIZE: usize = KEY_SIZE;
/// Varint upper bound
const AMOUNT_SIZE: usize = 8 + 2;
const GLOBAL_INDEXES_VECTOR_SIZE_SIZE: usize = 1;
const GLOBAL_INDEXES_INITIAL_VALUE_SIZE: usize = 4;
const GLOBAL_INDEXES_DIFFERENCE_SIZE: usize = 4;
const SIGNATURE_SIZE: usize = 2 * HASH_SIZE;
const EXTRA_TAG_SIZE: usize = 1;
const INPUT_TAG_SIZE: usize = 1;
const OUTPUT_TAG_SIZE: usize = 1;
const PUBLIC_KEY_SIZE: usize = KEY_SIZE;
const TRANSACTION_VERSION_SIZE: usize = 1;
const TRANSACTION_UNLOCK_TIME_SIZE: usize = 8;

/// Upper estimate of the key inputs, each with `mixin_count` decoys, that fit in
/// `transaction_size` bytes next to `output_count` key outputs. Zero when even the header and
/// outputs do not fit.
pub fn approximate_maximum_input_count(transaction_size: usize, output_count: usize, mixin_count: usize) -> usize {
    let outputs_size = output_count.saturating_mul(OUTPUT_TAG_SIZE + OUTPUT_KEY_SIZE + AMOUNT_SIZE);
    let header_size = TRANSACTION_VERSION_SIZE + TRANSACTION_UNLOCK_TIME_SIZE + EXTRA_TAG_SIZE + PUBLIC_KEY_SIZE;
    let input_size = (INPUT_TAG_SIZE
        + AMOUNT_SIZE
        + KEY_IMAGE_SIZE
        + SIGNATURE_SIZE
        + GLOBAL_INDEXES_VECTOR_SIZE_SIZE
        + GLOBAL_INDEXES_INITIAL_VALUE_SIZE)
        .saturating_add(mixin_count.saturating_mul(GLOBAL_INDEXES_DIFFERENCE_SIZE + SIGNATURE_SIZE));

    transaction_size.saturating_sub(header_size).saturating_sub(outputs_size) / input_size
}

impl Currency {
    pub fn get_approximate_maximum_input_count(&self, transaction_size: usize, output_count: usize, mixin_count: usize) -> usize {
        approximate_maximum_input_count(transaction_size, output_count, mixin_count)
    }
}
