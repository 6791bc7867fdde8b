//! # Error Types
//!
//! Every fallible operation in the harness returns
//! [`Result<T, BenchError>`](BenchError). None of these are recovered mid-run:
//! a failure invalidates the comparison, so the run stops and the error carries
//! enough context to reproduce it.

use thiserror::Error;

/// The error type for all benchmark operations.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Decrypted output did not reproduce the original message.
    ///
    /// `iteration` is 1-based and counts the warm-up trial.
    #[error("integrity failure: {cipher} round-trip mismatch at {size} bytes (iteration {iteration})")]
    Integrity {
        cipher: &'static str,
        size: usize,
        iteration: usize,
    },

    /// Configuration rejected before any measurement began.
    ///
    /// Raised for a repetition count below 2, an empty or zero-byte size set,
    /// an empty cipher set, or a nested allocation-trace scope.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An underlying cipher call failed (bad key length, tag mismatch, ...).
    ///
    /// `iteration` is filled in by the runner; a direct adapter call leaves it
    /// `None`.
    #[error("{cipher} library error at {size} bytes{}: {message}", iteration_suffix(.iteration))]
    Library {
        cipher: &'static str,
        size: usize,
        iteration: Option<usize>,
        message: String,
    },

    /// Writing report or chart output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    /// Library failure for a `size`-byte message, outside any trial.
    pub fn library(cipher: &'static str, size: usize, message: impl Into<String>) -> Self {
        BenchError::Library {
            cipher,
            size,
            iteration: None,
            message: message.into(),
        }
    }

    /// Attach the 1-based trial number to a library failure that lacks one.
    #[must_use]
    pub(crate) fn at_iteration(self, trial: usize) -> Self {
        match self {
            BenchError::Library {
                cipher,
                size,
                iteration: None,
                message,
            } => BenchError::Library {
                cipher,
                size,
                iteration: Some(trial),
                message,
            },
            other => other,
        }
    }
}

fn iteration_suffix(iteration: &Option<usize>) -> String {
    iteration.map_or_else(String::new, |i| format!(" (iteration {i})"))
}
