//! Fusion transactions: fee-free consolidation of many small outputs into their canonical
//! decomposition.

use consensus_core::amounts::{decompose_amount, pretty_amount_power_of_ten};
use consensus_core::tx::Transaction;

use crate::currency::Currency;

impl Currency {
    /// Whether a transaction of `size` bytes with these input and output amounts qualifies as a
    /// fusion transaction. `outputs_amounts` must list the decomposition of the input total in
    /// ascending order.
    pub fn is_fusion_transaction_amounts(&self, inputs_amounts: &[u64], outputs_amounts: &[u64], size: usize) -> bool {
        if size > self.fusion_tx_max_size() {
            return false;
        }
        if inputs_amounts.len() < self.fusion_tx_min_input_count() {
            return false;
        }
        if inputs_amounts.len() < outputs_amounts.len().saturating_mul(self.fusion_tx_min_in_out_count_ratio()) {
            return false;
        }

        let dust_threshold = self.default_dust_threshold();
        let mut input_amount: u64 = 0;
        for &amount in inputs_amounts {
            if amount < dust_threshold {
                return false;
            }
            match input_amount.checked_add(amount) {
                Some(total) => input_amount = total,
                None => return false,
            }
        }

        let mut expected_outputs = decompose_amount(input_amount, dust_threshold);
        expected_outputs.sort_unstable();
        expected_outputs == outputs_amounts
    }

    /// `size` must be the binary size of `tx`.
    pub fn is_fusion_transaction_with_size(&self, tx: &Transaction, size: usize) -> bool {
        self.is_fusion_transaction_amounts(&tx.inputs_amounts(), &tx.outputs_amounts(), size)
    }

    pub fn is_fusion_transaction(&self, tx: &Transaction) -> bool {
        self.is_fusion_transaction_with_size(tx, self.backend().transaction_binary_size(tx))
    }

    /// Whether `amount` may be an input of a fusion transaction built by a wallet consolidating
    /// outputs below `threshold`. Returns the power of ten of the amount's leading digit.
    pub fn is_amount_applicable_in_fusion_transaction_input(&self, amount: u64, threshold: u64) -> Option<u8> {
        if amount >= threshold || amount < self.default_dust_threshold() {
            return None;
        }
        pretty_amount_power_of_ten(amount)
    }
}
