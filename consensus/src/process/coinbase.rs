//! Coinbase transaction construction
//!
//! The block reward is split into one output per decimal digit, each paid to a one-time key
//! derived from the miner's address.

use consensus_core::amounts::decompose_amount;
use consensus_core::constants::CURRENT_TRANSACTION_VERSION;
use consensus_core::errors::ConsensusError;
use consensus_core::keys::AccountPublicAddress;
use consensus_core::tx::extra::{add_extra_nonce, add_transaction_public_key};
use consensus_core::tx::{BaseInput, Transaction, TransactionOutput};

use crate::currency::Currency;

/// Folds trailing outputs into the one before them until at most `max_outs` remain.
fn merge_excess_outputs(amounts: &mut Vec<u64>, max_outs: usize) {
    while amounts.len() > max_outs {
        if let Some(last) = amounts.pop() {
            if let Some(previous) = amounts.last_mut() {
                *previous += last;
            }
        }
    }
}

impl Currency {
    /// Builds the coinbase transaction of the block at `height`.
    ///
    /// The reward comes from [`Currency::get_block_reward`]; `extra_nonce` is written to the
    /// extra field after the transaction public key when non-empty. At most `max_outs` outputs
    /// are created.
    #[allow(clippy::too_many_arguments)]
    pub fn construct_miner_tx(
        &self,
        major_version: u8,
        height: u32,
        median_size: usize,
        already_generated_coins: u64,
        current_block_size: usize,
        fee: u64,
        miner_address: &AccountPublicAddress,
        extra_nonce: &[u8],
        max_outs: usize,
    ) -> Result<Transaction, ConsensusError> {
        let backend = self.backend();
        let tx_key = backend.generate_keys();

        let mut extra = Vec::new();
        add_transaction_public_key(&mut extra, &tx_key.public_key);
        if !extra_nonce.is_empty() {
            add_extra_nonce(&mut extra, extra_nonce)?;
        }

        let block_reward = self
            .get_block_reward(major_version, median_size, current_block_size, already_generated_coins, fee, height)
            .inspect_err(|_| log::info!("Block is too big"))?
            .reward;

        let mut amounts = decompose_amount(block_reward, self.default_dust_threshold());

        if max_outs < 1 {
            log::error!("max_out must be non-zero");
            return Err(ConsensusError::InvalidOutputBudget);
        }
        merge_excess_outputs(&mut amounts, max_outs);

        let mut outputs = Vec::with_capacity(amounts.len());
        let mut summary_amounts: u64 = 0;
        if !amounts.is_empty() {
            let derivation = backend
                .generate_key_derivation(&miner_address.view_public_key, &tx_key.secret_key)
                .ok_or_else(|| {
                    log::error!(
                        "while creating outs: failed to generate_key_derivation({}, {:?})",
                        miner_address.view_public_key,
                        tx_key.secret_key
                    );
                    ConsensusError::KeyDerivationFailed
                })?;

            for (index, amount) in amounts.into_iter().enumerate() {
                let key = backend
                    .derive_public_key(&derivation, index, &miner_address.spend_public_key)
                    .ok_or_else(|| {
                        log::error!(
                            "while creating outs: failed to derive_public_key({}, {}, {})",
                            derivation,
                            index,
                            miner_address.spend_public_key
                        );
                        ConsensusError::KeyDerivationFailed
                    })?;
                summary_amounts = summary_amounts.checked_add(amount).ok_or(ConsensusError::ArithmeticOverflow)?;
                outputs.push(TransactionOutput::to_key(amount, key));
            }
        }

        if summary_amounts != block_reward {
            log::error!(
                "Failed to construct miner tx, summaryAmounts = {summary_amounts} not equal blockReward = {block_reward}"
            );
            return Err(ConsensusError::InvariantViolation(format!(
                "coinbase outputs sum to {summary_amounts}, reward is {block_reward}"
            )));
        }

        let unlock_time = height as u64 + self.mined_money_unlock_window() as u64;
        Ok(Transaction::new(
            CURRENT_TRANSACTION_VERSION,
            unlock_time,
            vec![BaseInput { block_index: height }.into()],
            outputs,
            extra,
        ))
    }
}
