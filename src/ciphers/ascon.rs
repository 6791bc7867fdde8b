//! src/ciphers/ascon.rs
//! Ascon-128 AEAD adapter (empty associated data)

use crate::ciphers::CipherAdapter;
use crate::error::BenchError;
use ascon_aead::aead::{Aead, KeyInit};
use ascon_aead::{Ascon128, Key, Nonce};

/// Ascon-128 with a fixed key and nonce.
///
/// Nonce reuse across trials is deliberate: the harness measures cost, not
/// security.
#[derive(Debug, Clone)]
pub struct AsconAdapter {
    key: [u8; 16],
    nonce: [u8; 16],
}

impl AsconAdapter {
    #[must_use]
    pub const fn new(key: [u8; 16], nonce: [u8; 16]) -> Self {
        Self { key, nonce }
    }
}

impl CipherAdapter for AsconAdapter {
    fn name(&self) -> &'static str {
        "Ascon"
    }

    fn roundtrip(&self, message: &[u8]) -> Result<Vec<u8>, BenchError> {
        let cipher = Ascon128::new(Key::<Ascon128>::from_slice(&self.key));
        let nonce = Nonce::<Ascon128>::from_slice(&self.nonce);

        let ciphertext = cipher
            .encrypt(nonce, message)
            .map_err(|_| BenchError::library(self.name(), message.len(), "encryption failed"))?;

        cipher
            .decrypt(nonce, ciphertext.as_slice())
            .map_err(|_| BenchError::library(self.name(), message.len(), "tag verification failed"))
    }
}
