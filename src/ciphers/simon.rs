//! src/ciphers/simon.rs
//! Simon 64/128 from `simon-speck`, behind the 8-byte block framing

use crate::ciphers::block64::{key_words, Block64Adapter, Block64Cipher};
use simon_speck::simon::{
    simon_b64_k128_decrypt, simon_b64_k128_encrypt, simon_b64_k128_key_schedule, SimonRkB64K128,
};

/// Simon 64/128 round keys.
#[derive(Debug, Clone)]
pub struct SimonCipher {
    round_keys: SimonRkB64K128,
}

/// Simon behind the 8-byte block framing.
pub type SimonAdapter = Block64Adapter<SimonCipher>;

impl Block64Cipher for SimonCipher {
    const NAME: &'static str = "Simon";

    fn with_key(key: &[u8; 16]) -> Self {
        let [k1, k2, k3, k4] = key_words(key);
        Self {
            round_keys: simon_b64_k128_key_schedule(k1, k2, k3, k4),
        }
    }

    #[inline]
    fn encrypt_block(&self, block: u64) -> u64 {
        simon_b64_k128_encrypt(&self.round_keys, block)
    }

    #[inline]
    fn decrypt_block(&self, block: u64) -> u64 {
        simon_b64_k128_decrypt(&self.round_keys, block)
    }
}
