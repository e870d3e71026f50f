//! Fixed-point text form of atomic amounts.

use consensus_core::errors::AmountFormatError;

use crate::currency::Currency;

/// Renders `amount` atomic units with exactly `decimal_places` fractional digits.
pub fn format_amount(amount: u64, decimal_places: usize) -> String {
    let digits = amount.to_string();
    let mut text = format!("{digits:0>width$}", width = decimal_places + 1);
    text.insert(text.len() - decimal_places, '.');
    text
}

pub fn format_signed_amount(amount: i64, decimal_places: usize) -> String {
    let text = format_amount(amount.unsigned_abs(), decimal_places);
    if amount < 0 {
        format!("-{text}")
    } else {
        text
    }
}

/// Parses a decimal amount into atomic units.
///
/// Surrounding whitespace is ignored. Fractional digits past `decimal_places` are accepted only
/// when they are zeros.
pub fn parse_amount(text: &str, decimal_places: usize) -> Result<u64, AmountFormatError> {
    let mut amount = text.trim().to_string();

    let fraction_size = match amount.find('.') {
        Some(point) => {
            let mut fraction_size = amount.len() - point - 1;
            while decimal_places < fraction_size && amount.ends_with('0') {
                amount.pop();
                fraction_size -= 1;
            }
            if decimal_places < fraction_size {
                return Err(AmountFormatError::TooManyDecimalPlaces(decimal_places));
            }
            amount.remove(point);
            fraction_size
        }
        None => 0,
    };

    if amount.is_empty() {
        return Err(AmountFormatError::Empty);
    }
    if let Some(invalid) = amount.chars().find(|c| !c.is_ascii_digit()) {
        return Err(AmountFormatError::InvalidCharacter(invalid));
    }

    amount.extend(std::iter::repeat('0').take(decimal_places - fraction_size));
    amount.parse::<u64>().map_err(|_| AmountFormatError::Overflow)
}

impl Currency {
    pub fn format_amount(&self, amount: u64) -> String {
        format_amount(amount, self.number_of_decimal_places())
    }

    pub fn format_signed_amount(&self, amount: i64) -> String {
        format_signed_amount(amount, self.number_of_decimal_places())
    }

    pub fn parse_amount(&self, text: &str) -> Result<u64, AmountFormatError> {
        parse_amount(text, self.number_of_decimal_places())
    }
}
