//! Deterministic collaborator backend shared by the integration tests.
//!
//! Keys and hashes are Keccak digests of their inputs, transactions use the CryptoNote binary
//! layout of the prefix, and addresses are `prefix:spend_hex view_hex`.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use cn_hashes::{cn_fast_hash, HashWriter};
use consensus::{Currency, CurrencyBuilder, Hash};
use consensus_core::block::{Block, BlockHeader};
use consensus_core::codec::{AddressCodec, ObjectCodec};
use consensus_core::crypto::{BlockHashing, KeyOps};
use consensus_core::errors::ConsensusError;
use consensus_core::keys::{AccountPublicAddress, KeyDerivation, KeyImage, KeyPair, PublicKey, SecretKey, KEY_SIZE};
use consensus_core::tx::extra::{read_varint, write_varint};
use consensus_core::tx::{
    BaseInput, KeyInput, KeyOutput, MultisignatureInput, MultisignatureOutput, Transaction, TransactionInput,
    TransactionOutput, TransactionOutputTarget,
};

const TAG_BASE_INPUT: u8 = 0xff;
const TAG_KEY: u8 = 0x02;
const TAG_MULTISIGNATURE: u8 = 0x03;

pub struct MockBackend {
    key_counter: AtomicU64,
    fail_derivation: bool,
    pow_hash: Option<Hash>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self { key_counter: AtomicU64::new(0), fail_derivation: false, pow_hash: Some(Hash::zeroed()) }
    }

    pub fn failing_derivation() -> Self {
        Self { fail_derivation: true, ..Self::new() }
    }

    pub fn with_pow_hash(pow_hash: Option<Hash>) -> Self {
        Self { pow_hash, ..Self::new() }
    }
}

fn key_from_hash(hash: Hash) -> [u8; KEY_SIZE] {
    *hash.as_bytes()
}

fn header_bytes(header: &BlockHeader) -> Vec<u8> {
    let mut bytes = vec![header.major_version, header.minor_version];
    write_varint(&mut bytes, header.timestamp);
    bytes.extend_from_slice(header.previous_block_hash.as_bytes());
    bytes.extend_from_slice(&header.nonce.to_le_bytes());
    bytes
}

impl KeyOps for MockBackend {
    fn generate_keys(&self) -> KeyPair {
        let n = self.key_counter.fetch_add(1, Ordering::Relaxed);
        let mut writer = HashWriter::new();
        writer.update(b"secret").update(&n.to_le_bytes());
        let secret = writer.finalize();
        let public = cn_fast_hash(secret.as_bytes());
        KeyPair::new(PublicKey::from_bytes(key_from_hash(public)), SecretKey::from_bytes(key_from_hash(secret)))
    }

    fn generate_key_derivation(&self, public_key: &PublicKey, secret_key: &SecretKey) -> Option<KeyDerivation> {
        if self.fail_derivation {
            return None;
        }
        let mut writer = HashWriter::new();
        writer.update(public_key.as_bytes()).update(secret_key.as_bytes());
        Some(KeyDerivation::from_bytes(key_from_hash(writer.finalize())))
    }

    fn derive_public_key(
        &self,
        derivation: &KeyDerivation,
        output_index: usize,
        spend_public_key: &PublicKey,
    ) -> Option<PublicKey> {
        let mut writer = HashWriter::new();
        writer.update(derivation.as_bytes()).update(&(output_index as u64).to_le_bytes()).update(spend_public_key.as_bytes());
        Some(PublicKey::from_bytes(key_from_hash(writer.finalize())))
    }
}

impl BlockHashing for MockBackend {
    fn block_hash(&self, block: &Block) -> Option<Hash> {
        let mut writer = HashWriter::new();
        writer.update(&header_bytes(&block.header)).update(&encode_transaction(&block.base_transaction));
        Some(writer.finalize())
    }

    fn block_pow_hash(&self, _block: &Block) -> Option<Hash> {
        self.pow_hash
    }

    fn aux_block_header_hash(&self, block: &Block) -> Option<Hash> {
        let mut writer = HashWriter::new();
        writer.update(b"aux").update(&header_bytes(&block.header));
        Some(writer.finalize())
    }
}

impl ObjectCodec for MockBackend {
    fn transaction_binary_size(&self, tx: &Transaction) -> usize {
        encode_transaction(tx).len()
    }

    fn transaction_from_binary(&self, blob: &[u8]) -> Result<Transaction, ConsensusError> {
        decode_transaction(blob)
    }
}

impl AddressCodec for MockBackend {
    fn encode_address(&self, prefix: u64, address: &AccountPublicAddress) -> String {
        format!("{prefix}:{}{}", address.spend_public_key, address.view_public_key)
    }

    fn decode_address(&self, text: &str) -> Option<(u64, AccountPublicAddress)> {
        let (prefix, keys) = text.split_once(':')?;
        let bytes = hex::decode(keys).ok()?;
        if bytes.len() != 2 * KEY_SIZE {
            return None;
        }
        let spend: [u8; KEY_SIZE] = bytes[..KEY_SIZE].try_into().ok()?;
        let view: [u8; KEY_SIZE] = bytes[KEY_SIZE..].try_into().ok()?;
        Some((prefix.parse().ok()?, AccountPublicAddress::new(PublicKey::from_bytes(spend), PublicKey::from_bytes(view))))
    }
}

pub fn encode_transaction(tx: &Transaction) -> Vec<u8> {
    let mut out = Vec::new();
    write_varint(&mut out, tx.version as u64);
    write_varint(&mut out, tx.unlock_time);

    write_varint(&mut out, tx.inputs.len() as u64);
    for input in &tx.inputs {
        match input {
            TransactionInput::Base(base) => {
                out.push(TAG_BASE_INPUT);
                write_varint(&mut out, base.block_index as u64);
            }
            TransactionInput::Key(key) => {
                out.push(TAG_KEY);
                write_varint(&mut out, key.amount);
                write_varint(&mut out, key.output_indexes.len() as u64);
                for index in &key.output_indexes {
                    write_varint(&mut out, *index as u64);
                }
                out.extend_from_slice(key.key_image.as_bytes());
            }
            TransactionInput::Multisignature(multisig) => {
                out.push(TAG_MULTISIGNATURE);
                write_varint(&mut out, multisig.amount);
                write_varint(&mut out, multisig.signature_count as u64);
                write_varint(&mut out, multisig.output_index as u64);
                write_varint(&mut out, multisig.term as u64);
            }
        }
    }

    write_varint(&mut out, tx.outputs.len() as u64);
    for output in &tx.outputs {
        write_varint(&mut out, output.amount);
        match &output.target {
            TransactionOutputTarget::Key(key) => {
                out.push(TAG_KEY);
                out.extend_from_slice(key.key.as_bytes());
            }
            TransactionOutputTarget::Multisignature(multisig) => {
                out.push(TAG_MULTISIGNATURE);
                write_varint(&mut out, multisig.keys.len() as u64);
                for key in &multisig.keys {
                    out.extend_from_slice(key.as_bytes());
                }
                write_varint(&mut out, multisig.required_signature_count as u64);
                write_varint(&mut out, multisig.term as u64);
            }
        }
    }

    write_varint(&mut out, tx.extra.len() as u64);
    out.extend_from_slice(&tx.extra);
    out
}

struct Reader<'a> {
    data: &'a [u8],
}

impl<'a> Reader<'a> {
    fn varint(&mut self) -> Result<u64, ConsensusError> {
        let (value, used) = read_varint(self.data)?;
        self.data = &self.data[used..];
        Ok(value)
    }

    fn small<T: TryFrom<u64>>(&mut self) -> Result<T, ConsensusError> {
        T::try_from(self.varint()?).map_err(|_| ConsensusError::SerializationError("value out of range".into()))
    }

    fn bytes(&mut self, len: usize) -> Result<&'a [u8], ConsensusError> {
        if self.data.len() < len {
            return Err(ConsensusError::SerializationError("unexpected end of transaction".into()));
        }
        let (head, tail) = self.data.split_at(len);
        self.data = tail;
        Ok(head)
    }

    fn byte(&mut self) -> Result<u8, ConsensusError> {
        Ok(self.bytes(1)?[0])
    }

    fn key(&mut self) -> Result<[u8; KEY_SIZE], ConsensusError> {
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(self.bytes(KEY_SIZE)?);
        Ok(key)
    }
}

pub fn decode_transaction(blob: &[u8]) -> Result<Transaction, ConsensusError> {
    let mut reader = Reader { data: blob };
    let version = reader.small()?;
    let unlock_time = reader.varint()?;

    let input_count: usize = reader.small()?;
    let mut inputs = Vec::with_capacity(input_count);
    for _ in 0..input_count {
        let input = match reader.byte()? {
            TAG_BASE_INPUT => BaseInput { block_index: reader.small()? }.into(),
            TAG_KEY => {
                let amount = reader.varint()?;
                let index_count: usize = reader.small()?;
                let output_indexes = (0..index_count).map(|_| reader.small()).collect::<Result<_, _>>()?;
                KeyInput { amount, output_indexes, key_image: KeyImage::from_bytes(reader.key()?) }.into()
            }
            TAG_MULTISIGNATURE => MultisignatureInput {
                amount: reader.varint()?,
                signature_count: reader.small()?,
                output_index: reader.small()?,
                term: reader.small()?,
            }
            .into(),
            tag => return Err(ConsensusError::SerializationError(format!("unknown input tag {tag}"))),
        };
        inputs.push(input);
    }

    let output_count: usize = reader.small()?;
    let mut outputs = Vec::with_capacity(output_count);
    for _ in 0..output_count {
        let amount = reader.varint()?;
        let target = match reader.byte()? {
            TAG_KEY => TransactionOutputTarget::Key(KeyOutput { key: PublicKey::from_bytes(reader.key()?) }),
            TAG_MULTISIGNATURE => {
                let key_count: usize = reader.small()?;
                let keys = (0..key_count).map(|_| reader.key().map(PublicKey::from_bytes)).collect::<Result<_, _>>()?;
                TransactionOutputTarget::Multisignature(MultisignatureOutput {
                    keys,
                    required_signature_count: reader.small()?,
                    term: reader.small()?,
                })
            }
            tag => return Err(ConsensusError::SerializationError(format!("unknown output tag {tag}"))),
        };
        outputs.push(TransactionOutput::new(amount, target));
    }

    let extra_size: usize = reader.small()?;
    let extra = reader.bytes(extra_size)?.to_vec();
    if !reader.data.is_empty() {
        return Err(ConsensusError::SerializationError("trailing bytes after transaction".into()));
    }
    Ok(Transaction::new(version, unlock_time, inputs, outputs, extra))
}

pub fn backend() -> Arc<MockBackend> {
    Arc::new(MockBackend::new())
}

pub fn builder() -> CurrencyBuilder {
    CurrencyBuilder::new(backend())
}

pub fn mainnet() -> Currency {
    builder().build().unwrap()
}

pub fn miner_address() -> AccountPublicAddress {
    AccountPublicAddress::new(
        PublicKey::from_bytes(key_from_hash(cn_fast_hash(b"spend"))),
        PublicKey::from_bytes(key_from_hash(cn_fast_hash(b"view"))),
    )
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
