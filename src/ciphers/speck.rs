//! src/ciphers/speck.rs
//! Speck 64/128 from `simon-speck`, behind the 8-byte block framing

use crate::ciphers::block64::{key_words, Block64Adapter, Block64Cipher};
use simon_speck::speck::{
    speck_b64_k128_decrypt, speck_b64_k128_encrypt, speck_b64_k128_key_schedule, SpeckRkB64K128,
};

/// Speck 64/128 round keys.
#[derive(Debug, Clone)]
pub struct SpeckCipher {
    round_keys: SpeckRkB64K128,
}

/// Speck behind the 8-byte block framing.
pub type SpeckAdapter = Block64Adapter<SpeckCipher>;

impl Block64Cipher for SpeckCipher {
    const NAME: &'static str = "Speck";

    fn with_key(key: &[u8; 16]) -> Self {
        let [k1, k2, k3, k4] = key_words(key);
        Self {
            round_keys: speck_b64_k128_key_schedule(k1, k2, k3, k4),
        }
    }

    #[inline]
    fn encrypt_block(&self, block: u64) -> u64 {
        speck_b64_k128_encrypt(&self.round_keys, block)
    }

    #[inline]
    fn decrypt_block(&self, block: u64) -> u64 {
        speck_b64_k128_decrypt(&self.round_keys, block)
    }
}
