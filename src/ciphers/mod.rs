//! # Cipher Adapters
//!
//! Each supported algorithm sits behind [`CipherAdapter`], so the runner only
//! ever sees `name()` and `roundtrip()`.
//!
//! ## Modules
//!
//! - [`aes128`] - AES-128 over zero-padded 16-byte blocks
//! - [`ascon`] - Ascon-128 AEAD
//! - [`simon`] - Simon 64/128 (`simon-speck`)
//! - [`speck`] - Speck 64/128 (`simon-speck`)
//! - [`block64`] - 8-byte block framing shared by Simon and Speck

pub mod aes128;
pub mod ascon;
pub mod block64;
pub mod simon;
pub mod speck;

pub use aes128::Aes128Adapter;
pub use ascon::AsconAdapter;
pub use block64::{Block64Adapter, Block64Cipher};
pub use simon::{SimonAdapter, SimonCipher};
pub use speck::{SpeckAdapter, SpeckCipher};

use crate::error::BenchError;
use crate::keys::KeyMaterial;

/// Uniform round-trip contract over one cipher.
///
/// `roundtrip` encrypts then decrypts `message` and returns the recovered
/// plaintext with any adapter-introduced padding already removed. It does
/// **not** compare against the input; [`CipherAdapter::verify`] does.
pub trait CipherAdapter {
    /// Display name used in reports ("AES-128", "Ascon", ...).
    fn name(&self) -> &'static str;

    /// `decrypt(encrypt(message))`.
    ///
    /// # Errors
    ///
    /// [`BenchError::Library`] if the underlying cipher call fails.
    fn roundtrip(&self, message: &[u8]) -> Result<Vec<u8>, BenchError>;

    /// Whether the round-trip reproduces `message` byte-for-byte.
    fn verify(&self, message: &[u8]) -> Result<bool, BenchError> {
        Ok(self.roundtrip(message)? == message)
    }
}

impl<T: CipherAdapter + ?Sized> CipherAdapter for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn roundtrip(&self, message: &[u8]) -> Result<Vec<u8>, BenchError> {
        (**self).roundtrip(message)
    }
}

/// The built-in cipher set, in definition (and tie-break) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Aes128,
    Ascon,
    Simon,
    Speck,
}

impl CipherKind {
    /// All built-in ciphers in definition order.
    pub const ALL: [CipherKind; 4] = [
        CipherKind::Aes128,
        CipherKind::Ascon,
        CipherKind::Simon,
        CipherKind::Speck,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CipherKind::Aes128 => "AES-128",
            CipherKind::Ascon => "Ascon",
            CipherKind::Simon => "Simon",
            CipherKind::Speck => "Speck",
        }
    }

    /// Build the adapter for this cipher, keyed from `keys`.
    #[must_use]
    pub fn adapter(self, keys: &KeyMaterial) -> Box<dyn CipherAdapter> {
        match self {
            CipherKind::Aes128 => Box::new(Aes128Adapter::new(keys.aes_key)),
            CipherKind::Ascon => Box::new(AsconAdapter::new(keys.ascon_key, keys.ascon_nonce)),
            CipherKind::Simon => Box::new(SimonAdapter::new(keys.simon_key)),
            CipherKind::Speck => Box::new(SpeckAdapter::new(keys.speck_key)),
        }
    }
}

impl std::fmt::Display for CipherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
