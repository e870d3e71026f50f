//! Codec for the tagged fields carried in a transaction's `extra` bytes.
//!
//! Layout per field:
//! - `0x00` padding: zero bytes up to the end of extra, at most 255 including the tag
//! - `0x01` transaction public key: 32 bytes
//! - `0x02` nonce: one length byte, then that many bytes
//! - `0x03` merge mining tag: varint blob length, then varint depth and the 32-byte Merkle root
//!
//! Parsing stops at the first malformed field. Lookups such as [`merge_mining_tag`] only see
//! the fields that precede it.

use crate::constants::MAX_EXTRA_NONCE_SIZE;
use crate::errors::ExtraError;
use crate::keys::{PublicKey, KEY_SIZE};
use crate::Hash;
use cn_hashes::HASH_SIZE;

pub const TX_EXTRA_TAG_PADDING: u8 = 0x00;
pub const TX_EXTRA_TAG_PUBKEY: u8 = 0x01;
pub const TX_EXTRA_NONCE: u8 = 0x02;
pub const TX_EXTRA_MERGE_MINING_TAG: u8 = 0x03;

pub const TX_EXTRA_PADDING_MAX_COUNT: usize = 255;

/// Commitment of an auxiliary chain block, embedded in the parent chain coinbase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeMiningTag {
    pub depth: u64,
    pub merkle_root: Hash,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtraField {
    /// Padding length, including the tag byte
    Padding(usize),
    PublicKey(PublicKey),
    Nonce(Vec<u8>),
    MergeMiningTag(MergeMiningTag),
}

/// Appends `value` as an unsigned LEB128 varint.
pub fn write_varint(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Reads an unsigned LEB128 varint, returning the value and the number of bytes consumed.
pub fn read_varint(data: &[u8]) -> Result<(u64, usize), ExtraError> {
    let mut value = 0u64;
    for (i, &byte) in data.iter().enumerate() {
        let shift = 7 * i as u32;
        let bits = (byte & 0x7f) as u64;
        if shift >= 64 || (shift > 0 && bits >> (64 - shift) != 0) {
            return Err(ExtraError::VarintOverflow);
        }
        value |= bits << shift;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(ExtraError::UnexpectedEnd)
}

/// Iterator over the fields of an extra blob. Yields at most one error, then stops.
pub struct ExtraFields<'a> {
    data: &'a [u8],
    failed: bool,
}

impl<'a> ExtraFields<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, failed: false }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ExtraError> {
        if self.data.len() < len {
            return Err(ExtraError::UnexpectedEnd);
        }
        let (head, tail) = self.data.split_at(len);
        self.data = tail;
        Ok(head)
    }

    fn read_field(&mut self) -> Result<ExtraField, ExtraError> {
        let tag = self.take(1)?[0];
        match tag {
            TX_EXTRA_TAG_PADDING => {
                let size = self.data.len() + 1;
                if size > TX_EXTRA_PADDING_MAX_COUNT {
                    return Err(ExtraError::PaddingTooLong(TX_EXTRA_PADDING_MAX_COUNT));
                }
                if self.data.iter().any(|&b| b != 0) {
                    return Err(ExtraError::NonZeroPadding);
                }
                self.data = &[];
                Ok(ExtraField::Padding(size))
            }
            TX_EXTRA_TAG_PUBKEY => {
                let mut key = [0u8; KEY_SIZE];
                key.copy_from_slice(self.take(KEY_SIZE)?);
                Ok(ExtraField::PublicKey(PublicKey::from_bytes(key)))
            }
            TX_EXTRA_NONCE => {
                let size = self.take(1)?[0] as usize;
                Ok(ExtraField::Nonce(self.take(size)?.to_vec()))
            }
            TX_EXTRA_MERGE_MINING_TAG => {
                let (blob_size, consumed) = read_varint(self.data)?;
                self.take(consumed)?;
                let blob_size = usize::try_from(blob_size).map_err(|_| ExtraError::UnexpectedEnd)?;
                let blob = self.take(blob_size)?;
                let (depth, consumed) = read_varint(blob)?;
                let root = blob.get(consumed..consumed + HASH_SIZE).ok_or(ExtraError::UnexpectedEnd)?;
                let merkle_root = Hash::try_from_slice(root).map_err(|_| ExtraError::UnexpectedEnd)?;
                Ok(ExtraField::MergeMiningTag(MergeMiningTag { depth, merkle_root }))
            }
            other => Err(ExtraError::UnknownTag(other)),
        }
    }
}

impl Iterator for ExtraFields<'_> {
    type Item = Result<ExtraField, ExtraError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.data.is_empty() {
            return None;
        }
        let field = self.read_field();
        self.failed = field.is_err();
        Some(field)
    }
}

/// Parses every field of `extra`, failing on the first malformed one.
pub fn parse_extra(extra: &[u8]) -> Result<Vec<ExtraField>, ExtraError> {
    ExtraFields::new(extra).collect()
}

/// First merge mining tag among the well-formed leading fields of `extra`
pub fn merge_mining_tag(extra: &[u8]) -> Option<MergeMiningTag> {
    ExtraFields::new(extra).map_while(Result::ok).find_map(|field| match field {
        ExtraField::MergeMiningTag(tag) => Some(tag),
        _ => None,
    })
}

/// First transaction public key among the well-formed leading fields of `extra`
pub fn transaction_public_key(extra: &[u8]) -> Option<PublicKey> {
    ExtraFields::new(extra).map_while(Result::ok).find_map(|field| match field {
        ExtraField::PublicKey(key) => Some(key),
        _ => None,
    })
}

/// First nonce among the well-formed leading fields of `extra`
pub fn extra_nonce(extra: &[u8]) -> Option<Vec<u8>> {
    ExtraFields::new(extra).map_while(Result::ok).find_map(|field| match field {
        ExtraField::Nonce(nonce) => Some(nonce),
        _ => None,
    })
}

pub fn add_transaction_public_key(extra: &mut Vec<u8>, key: &PublicKey) {
    extra.reserve(1 + KEY_SIZE);
    extra.push(TX_EXTRA_TAG_PUBKEY);
    extra.extend_from_slice(key.as_bytes());
}

pub fn add_extra_nonce(extra: &mut Vec<u8>, nonce: &[u8]) -> Result<(), ExtraError> {
    if nonce.len() > MAX_EXTRA_NONCE_SIZE {
        return Err(ExtraError::NonceTooLarge(nonce.len()));
    }
    extra.reserve(2 + nonce.len());
    extra.push(TX_EXTRA_NONCE);
    extra.push(nonce.len() as u8);
    extra.extend_from_slice(nonce);
    Ok(())
}

pub fn append_merge_mining_tag(extra: &mut Vec<u8>, tag: &MergeMiningTag) {
    let mut blob = Vec::with_capacity(10 + HASH_SIZE);
    write_varint(&mut blob, tag.depth);
    blob.extend_from_slice(tag.merkle_root.as_bytes());

    extra.push(TX_EXTRA_MERGE_MINING_TAG);
    write_varint(extra, blob.len() as u64);
    extra.extend_from_slice(&blob);
}
