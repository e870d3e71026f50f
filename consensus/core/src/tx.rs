//!
//! # Transaction
//!
//! This module implements the consensus [`Transaction`] structure and related types.
//!

pub mod extra;

use serde::{Deserialize, Serialize};

use crate::constants::CURRENT_TRANSACTION_VERSION;
use crate::keys::{KeyImage, PublicKey};

/// Coinbase input; carries the height of the block it pays for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseInput {
    pub block_index: u32,
}

/// Spends a key output; `output_indexes` are relative global indexes of the ring members
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInput {
    pub amount: u64,
    pub output_indexes: Vec<u32>,
    pub key_image: KeyImage,
}

/// Spends a multisignature output. A nonzero `term` marks a deposit that earns interest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisignatureInput {
    pub amount: u64,
    pub signature_count: u8,
    pub output_index: u32,
    pub term: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionInput {
    Base(BaseInput),
    Key(KeyInput),
    Multisignature(MultisignatureInput),
}

impl TransactionInput {
    /// Face amount of the input, without interest. Coinbase inputs carry none.
    pub fn amount(&self) -> Option<u64> {
        match self {
            TransactionInput::Base(_) => None,
            TransactionInput::Key(input) => Some(input.amount),
            TransactionInput::Multisignature(input) => Some(input.amount),
        }
    }
}

impl From<BaseInput> for TransactionInput {
    fn from(input: BaseInput) -> Self {
        TransactionInput::Base(input)
    }
}

impl From<KeyInput> for TransactionInput {
    fn from(input: KeyInput) -> Self {
        TransactionInput::Key(input)
    }
}

impl From<MultisignatureInput> for TransactionInput {
    fn from(input: MultisignatureInput) -> Self {
        TransactionInput::Multisignature(input)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyOutput {
    pub key: PublicKey,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisignatureOutput {
    pub keys: Vec<PublicKey>,
    pub required_signature_count: u8,
    pub term: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionOutputTarget {
    Key(KeyOutput),
    Multisignature(MultisignatureOutput),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub amount: u64,
    pub target: TransactionOutputTarget,
}

impl TransactionOutput {
    pub fn new(amount: u64, target: TransactionOutputTarget) -> Self {
        Self { amount, target }
    }

    /// Output paying `amount` to the one-time key `key`
    pub fn to_key(amount: u64, key: PublicKey) -> Self {
        Self::new(amount, TransactionOutputTarget::Key(KeyOutput { key }))
    }
}

/// A transaction without its signatures; this is everything the currency rules look at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub version: u8,
    pub unlock_time: u64,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    /// Tagged auxiliary fields, see [`extra`]
    pub extra: Vec<u8>,
}

impl Default for Transaction {
    fn default() -> Self {
        Self { version: CURRENT_TRANSACTION_VERSION, unlock_time: 0, inputs: Vec::new(), outputs: Vec::new(), extra: Vec::new() }
    }
}

impl Transaction {
    pub fn new(
        version: u8,
        unlock_time: u64,
        inputs: Vec<TransactionInput>,
        outputs: Vec<TransactionOutput>,
        extra: Vec<u8>,
    ) -> Self {
        Self { version, unlock_time, inputs, outputs, extra }
    }

    /// Face amounts of all key and multisignature inputs, in input order
    pub fn inputs_amounts(&self) -> Vec<u64> {
        self.inputs.iter().filter_map(TransactionInput::amount).collect()
    }

    /// Output amounts, in output order
    pub fn outputs_amounts(&self) -> Vec<u64> {
        self.outputs.iter().map(|output| output.amount).collect()
    }

    /// Whether this is a coinbase transaction (a single base input)
    pub fn is_coinbase(&self) -> bool {
        matches!(self.inputs.as_slice(), [TransactionInput::Base(_)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_amounts_skip_coinbase() {
        let tx = Transaction::new(
            CURRENT_TRANSACTION_VERSION,
            0,
            vec![
                BaseInput { block_index: 7 }.into(),
                KeyInput { amount: 300, ..Default::default() }.into(),
                MultisignatureInput { amount: 50, term: 5040, ..Default::default() }.into(),
            ],
            vec![TransactionOutput::to_key(200, PublicKey::default())],
            Vec::new(),
        );
        assert_eq!(tx.inputs_amounts(), vec![300, 50]);
        assert_eq!(tx.outputs_amounts(), vec![200]);
        assert!(!tx.is_coinbase());
    }

    #[test]
    fn test_coinbase_detection() {
        let mut tx = Transaction::default();
        tx.inputs.push(BaseInput { block_index: 1 }.into());
        assert!(tx.is_coinbase());
    }
}
