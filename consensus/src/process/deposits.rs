//! Deposit interest and transaction fees.
//!
//! A multisignature input with a nonzero term unlocks a deposit; it is worth its face amount
//! plus the interest earned over the term. Fees are whatever the inputs, interest included,
//! leave over after the outputs.

use cn_math::{div128_32, mul128};
use consensus_core::errors::ConsensusError;
use consensus_core::tx::{Transaction, TransactionInput};

use crate::currency::Currency;

impl Currency {
    /// Interest earned by depositing `amount` for `term` blocks, for a withdrawal at `height`.
    pub fn calculate_interest(&self, amount: u64, term: u32, height: u32) -> Result<u64, ConsensusError> {
        if term < self.deposit_min_term() || term > self.deposit_max_term() {
            return Err(ConsensusError::InvalidDepositTerm(term));
        }
        let rate = (term as u64)
            .checked_mul(self.deposit_max_total_rate())
            .and_then(|total| total.checked_sub(self.deposit_min_total_rate_factor()))
            .filter(|rate| *rate > 0)
            .ok_or(ConsensusError::InvalidDepositTerm(term))?;

        let divisor = self.deposit_max_term().checked_mul(100).ok_or(ConsensusError::ArithmeticOverflow)?;
        let (product_lo, product_hi) = mul128(amount, rate);
        let (quotient_hi, interest, _) = div128_32(product_hi, product_lo, divisor);
        if quotient_hi != 0 {
            return Err(ConsensusError::ArithmeticOverflow);
        }

        if height >= self.early_depositor_multiplier_height() {
            let (multiplied, overflow) = mul128(interest, self.multiplier_factor());
            if overflow != 0 {
                return Err(ConsensusError::ArithmeticOverflow);
            }
            return Ok(multiplied);
        }
        Ok(interest)
    }

    /// Interest of every deposit the transaction withdraws
    pub fn calculate_total_transaction_interest(&self, tx: &Transaction, height: u32) -> Result<u64, ConsensusError> {
        tx.inputs.iter().try_fold(0u64, |total, input| {
            let interest = match input {
                TransactionInput::Multisignature(multisig) if multisig.term != 0 => {
                    self.calculate_interest(multisig.amount, multisig.term, height)?
                }
                _ => 0,
            };
            total.checked_add(interest).ok_or(ConsensusError::ArithmeticOverflow)
        })
    }

    /// Value an input contributes: nothing for coinbase, the face amount for key inputs, and face
    /// amount plus interest for deposit withdrawals.
    pub fn get_transaction_input_amount(&self, input: &TransactionInput, height: u32) -> Result<u64, ConsensusError> {
        match input {
            TransactionInput::Base(_) => Ok(0),
            TransactionInput::Key(key) => Ok(key.amount),
            TransactionInput::Multisignature(multisig) if multisig.term == 0 => Ok(multisig.amount),
            TransactionInput::Multisignature(multisig) => {
                let interest = self.calculate_interest(multisig.amount, multisig.term, height)?;
                multisig.amount.checked_add(interest).ok_or(ConsensusError::ArithmeticOverflow)
            }
        }
    }

    pub fn get_transaction_all_inputs_amount(&self, tx: &Transaction, height: u32) -> Result<u64, ConsensusError> {
        tx.inputs.iter().try_fold(0u64, |total, input| {
            total.checked_add(self.get_transaction_input_amount(input, height)?).ok_or(ConsensusError::ArithmeticOverflow)
        })
    }

    /// Fee paid by `tx`.
    ///
    /// Withdrawals may create more output value than their inputs carry, interest being paid
    /// out on top of the deposit; such transactions always pay the minimum fee.
    pub fn get_transaction_fee(&self, tx: &Transaction, height: u32) -> Result<u64, ConsensusError> {
        let amount_in = self.get_transaction_all_inputs_amount(tx, height)?;
        let amount_out = tx
            .outputs
            .iter()
            .try_fold(0u64, |total, output| total.checked_add(output.amount))
            .ok_or(ConsensusError::ArithmeticOverflow)?;

        if amount_out <= amount_in {
            return Ok(amount_in - amount_out);
        }

        let minimum_fee = self.minimum_fee();
        let exceeds_minimum = amount_in.checked_add(minimum_fee).is_some_and(|floor| amount_out > floor);
        if !tx.inputs.is_empty() && !tx.outputs.is_empty() && exceeds_minimum {
            Ok(minimum_fee)
        } else {
            Err(ConsensusError::FeeInconsistency { inputs: amount_in, outputs: amount_out })
        }
    }

    /// [`Currency::get_transaction_fee`], with any failure reported as a zero fee
    pub fn get_transaction_fee_or_zero(&self, tx: &Transaction, height: u32) -> u64 {
        self.get_transaction_fee(tx, height).unwrap_or(0)
    }
}
