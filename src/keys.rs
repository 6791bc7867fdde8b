//! src/keys.rs
//! Per-run key material — fixed by default, optionally drawn once from the OS RNG

use crate::consts::{AES_KEY, ASCON_KEY, ASCON_NONCE, SIMON_KEY, SPECK_KEY};
use rand::{rngs::OsRng, TryRngCore};

/// Where a run's keys come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeySource {
    /// The hard-coded constants in [`crate::consts`].
    #[default]
    Fixed,
    /// Fresh bytes from the OS RNG, drawn once when the run starts.
    Random,
}

/// Keys and nonce for every cipher family. Immutable for the run's duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    pub aes_key: [u8; 16],
    pub ascon_key: [u8; 16],
    pub ascon_nonce: [u8; 16],
    pub simon_key: [u8; 16],
    pub speck_key: [u8; 16],
}

impl KeyMaterial {
    /// The fixed keys every default run uses.
    #[must_use]
    pub const fn fixed() -> Self {
        Self {
            aes_key: *AES_KEY,
            ascon_key: *ASCON_KEY,
            ascon_nonce: *ASCON_NONCE,
            simon_key: *SIMON_KEY,
            speck_key: *SPECK_KEY,
        }
    }

    /// Independent random keys and nonce.
    ///
    /// Falls back to the fixed material if the OS RNG is unavailable; a
    /// benchmark has no reason to abort over key freshness.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; 80];
        if let Err(err) = OsRng.try_fill_bytes(&mut bytes) {
            tracing::warn!(%err, "OS RNG unavailable, using fixed key material");
            return Self::fixed();
        }

        let mut chunks = bytes.chunks_exact(16).map(|chunk| {
            let mut out = [0u8; 16];
            out.copy_from_slice(chunk);
            out
        });
        let mut next = || chunks.next().unwrap_or_default();

        Self {
            aes_key: next(),
            ascon_key: next(),
            ascon_nonce: next(),
            simon_key: next(),
            speck_key: next(),
        }
    }

    /// Resolve a [`KeySource`] into concrete material.
    #[must_use]
    pub fn from_source(source: KeySource) -> Self {
        match source {
            KeySource::Fixed => Self::fixed(),
            KeySource::Random => Self::random(),
        }
    }
}

impl Default for KeyMaterial {
    fn default() -> Self {
        Self::fixed()
    }
}
