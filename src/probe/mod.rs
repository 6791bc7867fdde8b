//! # Measurement Probe
//!
//! A [`Probe`] runs one task exactly once on the calling thread and reports
//! its wall-clock time and peak traced memory as a [`Sample`].
//!
//! - [`AllocProbe`] - real measurements from [`Instant`] and [`TraceScope`]
//! - [`FixedProbe`] - runs the task but reports a preset sample (tests, dry runs)

pub mod tracer;

pub use tracer::{is_installed, PeakAlloc, TraceScope};

use crate::consts::BYTES_PER_MB;
use crate::error::BenchError;
use std::time::{Duration, Instant};

/// One measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub elapsed: Duration,
    pub peak_bytes: u64,
}

impl Sample {
    #[must_use]
    pub const fn new(elapsed: Duration, peak_bytes: u64) -> Self {
        Self {
            elapsed,
            peak_bytes,
        }
    }

    /// Elapsed time in fractional seconds.
    #[inline]
    #[must_use]
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Peak memory in (decimal) megabytes.
    #[inline]
    #[must_use]
    pub fn peak_mb(&self) -> f64 {
        self.peak_bytes as f64 / BYTES_PER_MB
    }
}

/// Measures a task.
pub trait Probe {
    /// Run `task` once and measure it.
    ///
    /// # Errors
    ///
    /// Whatever `task` returns, or a probe-specific acquisition failure. No
    /// sample is produced for a failed task.
    fn measure<F>(&mut self, task: F) -> Result<Sample, BenchError>
    where
        F: FnOnce() -> Result<(), BenchError>;
}

/// Wall-clock + allocation-tracer probe.
#[derive(Debug, Default)]
pub struct AllocProbe {
    warned_uninstalled: bool,
}

impl AllocProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the missing-allocator warning has been logged.
    #[must_use]
    pub const fn warned_uninstalled(&self) -> bool {
        self.warned_uninstalled
    }
}

impl Probe for AllocProbe {
    fn measure<F>(&mut self, task: F) -> Result<Sample, BenchError>
    where
        F: FnOnce() -> Result<(), BenchError>,
    {
        let scope = TraceScope::start()?;
        let start = Instant::now();
        let outcome = task();
        let elapsed = start.elapsed();
        let peak_bytes = scope.peak_bytes();
        drop(scope);

        outcome?;

        if !self.warned_uninstalled && !is_installed() {
            tracing::warn!("PeakAlloc is not the global allocator; peak memory will read 0");
            self.warned_uninstalled = true;
        }

        Ok(Sample::new(elapsed, peak_bytes))
    }
}

/// Runs the task for real but reports `sample` every time.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe {
    sample: Sample,
}

impl FixedProbe {
    #[must_use]
    pub const fn new(elapsed: Duration, peak_bytes: u64) -> Self {
        Self {
            sample: Sample::new(elapsed, peak_bytes),
        }
    }
}

impl Probe for FixedProbe {
    fn measure<F>(&mut self, task: F) -> Result<Sample, BenchError>
    where
        F: FnOnce() -> Result<(), BenchError>,
    {
        task()?;
        Ok(self.sample)
    }
}
