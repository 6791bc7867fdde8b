//! src/ciphers/block64.rs
//! 8-byte block framing for the 64-bit lightweight ciphers
//!
//! The message is cut into 8-byte blocks, the last one right-padded with
//! zeros. Each block is read as a big-endian `u64`, enciphered independently,
//! and the ciphertext blocks are concatenated. Decryption reverses this and
//! truncates back to the original length.

use crate::ciphers::CipherAdapter;
use crate::consts::BLOCK64_BYTES;
use crate::error::BenchError;
use std::marker::PhantomData;

/// A keyed 64-bit block cipher; the rounds come from `simon-speck`.
pub trait Block64Cipher: Sized {
    /// Report name of the cipher family.
    const NAME: &'static str;

    /// Run the key schedule.
    fn with_key(key: &[u8; 16]) -> Self;

    fn encrypt_block(&self, block: u64) -> u64;

    fn decrypt_block(&self, block: u64) -> u64;
}

/// Split `message` into zero-padded big-endian 64-bit blocks.
#[must_use]
pub fn to_blocks(message: &[u8]) -> Vec<u64> {
    message
        .chunks(BLOCK64_BYTES)
        .map(|chunk| {
            let mut buf = [0u8; BLOCK64_BYTES];
            buf[..chunk.len()].copy_from_slice(chunk);
            u64::from_be_bytes(buf)
        })
        .collect()
}

/// Reassemble blocks into bytes and drop everything past `len`.
#[must_use]
pub fn from_blocks(blocks: &[u64], len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(blocks.len() * BLOCK64_BYTES);
    for block in blocks {
        out.extend_from_slice(&block.to_be_bytes());
    }
    out.truncate(len);
    out
}

/// Round-trip adapter over any [`Block64Cipher`].
#[derive(Debug, Clone)]
pub struct Block64Adapter<C> {
    key: [u8; 16],
    _cipher: PhantomData<C>,
}

impl<C: Block64Cipher> Block64Adapter<C> {
    #[must_use]
    pub const fn new(key: [u8; 16]) -> Self {
        Self {
            key,
            _cipher: PhantomData,
        }
    }

    /// Encrypt `message` into concatenated ciphertext blocks.
    #[must_use]
    pub fn encrypt(&self, message: &[u8]) -> Vec<u8> {
        let cipher = C::with_key(&self.key);
        let blocks: Vec<u64> = to_blocks(message)
            .into_iter()
            .map(|b| cipher.encrypt_block(b))
            .collect();
        from_blocks(&blocks, blocks.len() * BLOCK64_BYTES)
    }

    /// Decrypt block-aligned `ciphertext` and truncate to `len` bytes.
    pub fn decrypt(&self, ciphertext: &[u8], len: usize) -> Result<Vec<u8>, BenchError> {
        if ciphertext.len() % BLOCK64_BYTES != 0 {
            return Err(BenchError::library(
                C::NAME,
                len,
                format!("ciphertext length {} is not a multiple of {BLOCK64_BYTES}", ciphertext.len()),
            ));
        }
        let cipher = C::with_key(&self.key);
        let blocks: Vec<u64> = to_blocks(ciphertext)
            .into_iter()
            .map(|b| cipher.decrypt_block(b))
            .collect();
        Ok(from_blocks(&blocks, len))
    }
}

impl<C: Block64Cipher> CipherAdapter for Block64Adapter<C> {
    fn name(&self) -> &'static str {
        C::NAME
    }

    fn roundtrip(&self, message: &[u8]) -> Result<Vec<u8>, BenchError> {
        let ciphertext = self.encrypt(message);
        self.decrypt(&ciphertext, message.len())
    }
}

/// Split a 16-byte key into the four key-schedule words, least significant first.
#[inline]
pub(crate) fn key_words(key: &[u8; 16]) -> [u32; 4] {
    let word = |i: usize| u32::from_be_bytes([key[i], key[i + 1], key[i + 2], key[i + 3]]);
    [word(12), word(8), word(4), word(0)]
}
