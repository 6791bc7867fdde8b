//! src/config.rs
//! Benchmark configuration — compile-time defaults with fluent overrides

use crate::ciphers::CipherKind;
use crate::consts::{DEFAULT_MESSAGE_SIZES, DEFAULT_REPETITIONS, MIN_REPETITIONS};
use crate::error::BenchError;
use crate::keys::KeySource;

/// What to benchmark and how many times.
///
/// Defaults: sizes {64, 256, 1024, 4096}, 6 repetitions, all four ciphers,
/// fixed keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    sizes: Vec<usize>,
    repetitions: usize,
    ciphers: Vec<CipherKind>,
    key_source: KeySource,
}

impl BenchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sizes: DEFAULT_MESSAGE_SIZES.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            ciphers: CipherKind::ALL.to_vec(),
            key_source: KeySource::Fixed,
        }
    }

    #[must_use]
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Set the trial count per (cipher, size), warm-up included.
    #[must_use]
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    #[must_use]
    pub fn with_ciphers(mut self, ciphers: impl Into<Vec<CipherKind>>) -> Self {
        self.ciphers = ciphers.into();
        self
    }

    #[must_use]
    pub fn with_key_source(mut self, key_source: KeySource) -> Self {
        self.key_source = key_source;
        self
    }

    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    #[must_use]
    pub const fn repetitions(&self) -> usize {
        self.repetitions
    }

    #[must_use]
    pub fn ciphers(&self) -> &[CipherKind] {
        &self.ciphers
    }

    #[must_use]
    pub const fn key_source(&self) -> KeySource {
        self.key_source
    }

    /// Reject configurations that cannot produce a meaningful average.
    ///
    /// # Errors
    ///
    /// [`BenchError::Config`] for repetitions below 2, an empty size set, a
    /// zero-byte size, or an empty cipher set.
    pub fn validate(&self) -> Result<(), BenchError> {
        self.validate_schedule()?;
        if self.ciphers.is_empty() {
            return Err(BenchError::Config("cipher set is empty".into()));
        }
        Ok(())
    }

    /// Sizes and repetitions only; the cipher set is not consulted.
    pub(crate) fn validate_schedule(&self) -> Result<(), BenchError> {
        validate_repetitions(self.repetitions)?;
        if self.sizes.is_empty() {
            return Err(BenchError::Config("message size set is empty".into()));
        }
        if self.sizes.contains(&0) {
            return Err(BenchError::Config("message size must be at least 1 byte".into()));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Repetitions must leave at least one sample after the warm-up is dropped.
pub(crate) fn validate_repetitions(repetitions: usize) -> Result<(), BenchError> {
    if repetitions < MIN_REPETITIONS {
        return Err(BenchError::Config(format!(
            "repetitions must be at least {MIN_REPETITIONS}, got {repetitions}"
        )));
    }
    Ok(())
}
