use std::io::Write;

use tiny_keccak::{Hasher, Keccak};

use crate::Hash;

/// Keccak-256 with the original (pre-SHA3) padding, the "fast hash" of CryptoNote chains.
pub fn cn_fast_hash(data: &[u8]) -> Hash {
    let mut writer = HashWriter::new();
    writer.update(data);
    writer.finalize()
}

/// HashWriter wraps a Keccak-256 state to implement the Write trait
#[derive(Clone)]
pub struct HashWriter(Keccak);

impl HashWriter {
    pub fn new() -> Self {
        Self(Keccak::v256())
    }

    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.0.update(data);
        self
    }

    pub fn finalize(self) -> Hash {
        let mut out = [0u8; 32];
        self.0.finalize(&mut out);
        Hash::from_bytes(out)
    }
}

impl Write for HashWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Default for HashWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_empty_input() {
        assert_eq!(
            cn_fast_hash(b"").as_bytes(),
            &hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn test_hash_writer_matches_one_shot() {
        let mut writer = HashWriter::new();
        writer.write_all(b"hel").unwrap();
        writer.write_all(b"lo").unwrap();
        assert_eq!(writer.finalize(), cn_fast_hash(b"hello"));
        assert_eq!(
            cn_fast_hash(b"hello").as_bytes(),
            &hex!("1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8")
        );
    }
}
