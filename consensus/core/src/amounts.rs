//! Canonical "pretty" denominations and the digit decomposition that produces them.

/// `1..=9 × 10^0..=18`, then `10^19`
pub const PRETTY_AMOUNTS_COUNT: usize = 9 * 19 + 1;

/// Every round denomination representable in 64 bits, ascending.
pub static PRETTY_AMOUNTS: [u64; PRETTY_AMOUNTS_COUNT] = build_pretty_amounts();

const fn build_pretty_amounts() -> [u64; PRETTY_AMOUNTS_COUNT] {
    let mut table = [0u64; PRETTY_AMOUNTS_COUNT];
    let mut order = 1u64;
    let mut i = 0;
    while i < PRETTY_AMOUNTS_COUNT - 1 {
        table[i] = (i as u64 % 9 + 1) * order;
        if i % 9 == 8 {
            order *= 10;
        }
        i += 1;
    }
    table[PRETTY_AMOUNTS_COUNT - 1] = order;
    table
}

/// Decimal order of magnitude of `amount` if it is a pretty amount.
pub fn pretty_amount_power_of_ten(amount: u64) -> Option<u8> {
    PRETTY_AMOUNTS.binary_search(&amount).ok().map(|index| (index / 9) as u8)
}

/// Splits `amount` into one chunk per nonzero decimal digit.
///
/// Low-order digits are pooled while their running sum stays within `dust_threshold`; that pool
/// is reported once through `dust_handler`, before the first chunk that does not fit in it.
pub fn decompose_amount_into_digits<C, D>(mut amount: u64, dust_threshold: u64, mut chunk_handler: C, mut dust_handler: D)
where
    C: FnMut(u64),
    D: FnMut(u64),
{
    let mut dust_handled = false;
    let mut dust = 0u64;
    let mut order = 1u64;
    while amount != 0 {
        let chunk = (amount % 10) * order;
        amount /= 10;
        order = order.saturating_mul(10);

        if dust.saturating_add(chunk) <= dust_threshold {
            dust += chunk;
        } else {
            if !dust_handled && dust != 0 {
                dust_handler(dust);
                dust_handled = true;
            }
            if chunk != 0 {
                chunk_handler(chunk);
            }
        }
    }

    if !dust_handled && dust != 0 {
        dust_handler(dust);
    }
}

/// Decomposition of `amount` in the order the pieces are produced. The dust pool, if any, always
/// precedes the chunks.
pub fn decompose_amount(amount: u64, dust_threshold: u64) -> Vec<u64> {
    let mut chunks = Vec::new();
    let mut dust = None;
    decompose_amount_into_digits(amount, dust_threshold, |chunk| chunks.push(chunk), |d| dust = Some(d));
    if let Some(d) = dust {
        chunks.insert(0, d);
    }
    chunks
}
