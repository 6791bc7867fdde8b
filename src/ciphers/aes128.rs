//! src/ciphers/aes128.rs
//! AES-128 adapter — ECB over zero-padded 16-byte blocks

use crate::ciphers::CipherAdapter;
use crate::consts::AES_BLOCK_BYTES;
use crate::error::BenchError;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Block as AesBlock};

/// AES-128 with a fixed 16-byte key.
///
/// The message is zero-padded to `(len / 16 + 1) * 16` bytes, so an aligned
/// message still gains one full pad block. Recovered plaintext is truncated to
/// the original length, which keeps trailing `0x00` bytes in the message intact.
#[derive(Debug, Clone)]
pub struct Aes128Adapter {
    key: [u8; 16],
}

impl Aes128Adapter {
    #[must_use]
    pub const fn new(key: [u8; 16]) -> Self {
        Self { key }
    }

    /// Padded length for a message of `len` bytes.
    #[inline]
    #[must_use]
    pub const fn padded_len(len: usize) -> usize {
        (len / AES_BLOCK_BYTES + 1) * AES_BLOCK_BYTES
    }
}

impl CipherAdapter for Aes128Adapter {
    fn name(&self) -> &'static str {
        "AES-128"
    }

    fn roundtrip(&self, message: &[u8]) -> Result<Vec<u8>, BenchError> {
        let cipher = Aes128::new(&self.key.into());

        let mut padded = message.to_vec();
        padded.resize(Self::padded_len(message.len()), 0);

        let mut blocks: Vec<AesBlock> = padded
            .chunks_exact(AES_BLOCK_BYTES)
            .map(AesBlock::clone_from_slice)
            .collect();

        cipher.encrypt_blocks(&mut blocks);
        cipher.decrypt_blocks(&mut blocks);

        let mut plaintext: Vec<u8> = blocks.iter().flat_map(|b| b.iter().copied()).collect();
        plaintext.truncate(message.len());
        Ok(plaintext)
    }
}
