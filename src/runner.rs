//! src/runner.rs
//! Benchmark runner — N probed round-trips of one cipher at one size
//!
//! The first trial is a warm-up and is discarded; the remaining
//! `repetitions - 1` samples are printed as they complete and returned.

use crate::ciphers::CipherAdapter;
use crate::config::validate_repetitions;
use crate::consts::FILLER_PATTERN;
use crate::error::BenchError;
use crate::probe::{Probe, Sample};
use crate::report;
use crate::stats::SizeCipherSummary;
use std::hint::black_box;
use std::io::Write;

/// Samples retained for one (cipher, size) pair, warm-up excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub cipher: &'static str,
    pub size: usize,
    pub samples: Vec<Sample>,
}

impl RunResult {
    /// Elapsed seconds per retained sample, in trial order.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(Sample::secs).collect()
    }

    /// Peak megabytes per retained sample, in trial order.
    #[must_use]
    pub fn mems(&self) -> Vec<f64> {
        self.samples.iter().map(Sample::peak_mb).collect()
    }

    /// Sum of retained elapsed times.
    #[must_use]
    pub fn total_time(&self) -> f64 {
        self.samples.iter().map(Sample::secs).sum()
    }

    /// Largest single-sample peak, in megabytes.
    #[must_use]
    pub fn max_mem(&self) -> f64 {
        self.samples.iter().map(Sample::peak_mb).fold(0.0, f64::max)
    }

    /// Reduce to arithmetic means.
    #[must_use]
    pub fn summary(&self) -> SizeCipherSummary {
        SizeCipherSummary::from_samples(self.cipher, self.size, &self.samples)
    }
}

/// The filler pattern repeated and truncated to exactly `size` bytes.
#[must_use]
pub fn filler_message(size: usize) -> Vec<u8> {
    FILLER_PATTERN.iter().copied().cycle().take(size).collect()
}

/// Benchmark `adapter` at `size` bytes for `repetitions` trials.
///
/// Per-run lines go to `out` as each retained sample completes.
///
/// # Errors
///
/// - [`BenchError::Config`] if `repetitions < 2`
/// - [`BenchError::Integrity`] if any trial's round-trip differs from its input
/// - [`BenchError::Library`] / [`BenchError::Io`] from the cipher or `out`
pub fn run<A, P, W>(
    adapter: &A,
    size: usize,
    repetitions: usize,
    probe: &mut P,
    out: &mut W,
) -> Result<RunResult, BenchError>
where
    A: CipherAdapter + ?Sized,
    P: Probe,
    W: Write,
{
    validate_repetitions(repetitions)?;

    let cipher = adapter.name();
    let mut samples = Vec::with_capacity(repetitions - 1);

    for iteration in 1..=repetitions {
        let message = filler_message(size);

        let sample = probe.measure(|| {
            if adapter.verify(black_box(&message))? {
                Ok(())
            } else {
                Err(BenchError::Integrity {
                    cipher,
                    size,
                    iteration,
                })
            }
        });

        let sample = match sample {
            Ok(sample) => sample,
            Err(err) => {
                let err = err.at_iteration(iteration);
                tracing::error!(cipher, size, iteration, %err, "trial failed");
                return Err(err);
            }
        };

        if iteration == 1 {
            tracing::debug!(cipher, size, secs = sample.secs(), "warm-up discarded");
            continue;
        }

        tracing::debug!(cipher, size, iteration, secs = sample.secs(), mb = sample.peak_mb(), "sample");
        report::write_run_line(out, iteration - 1, &sample)?;
        samples.push(sample);
    }

    Ok(RunResult {
        cipher,
        size,
        samples,
    })
}
