//! src/probe/tracer.rs
//! Scoped peak-memory windows over the `peak_alloc` global allocator
//!
//! The binary installs [`PeakAlloc`] with `#[global_allocator]`. Its counters
//! are process-wide; a [`TraceScope`] re-bases the peak to the live byte count
//! when it starts and reports the high-water mark above that baseline.

use crate::error::BenchError;
pub use peak_alloc::PeakAlloc;
use std::sync::atomic::{AtomicBool, Ordering};

static SCOPE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Handle to the `peak_alloc` counters. Every `PeakAlloc` value reads the
/// same process-wide statics, whether or not it is the global allocator.
const COUNTERS: PeakAlloc = PeakAlloc;

/// Whether [`PeakAlloc`] is the global allocator.
///
/// The counters only move when allocations go through `PeakAlloc`, so a zero
/// live count means nothing has been traced.
#[must_use]
pub fn is_installed() -> bool {
    COUNTERS.current_usage() > 0
}

/// One active allocation-trace window. Stops tracing on drop.
///
/// Only one scope may be open at a time.
#[derive(Debug)]
pub struct TraceScope {
    baseline: usize,
}

impl TraceScope {
    /// Start a trace window.
    ///
    /// # Errors
    ///
    /// [`BenchError::Config`] if another scope is still open.
    pub fn start() -> Result<Self, BenchError> {
        if SCOPE_ACTIVE.swap(true, Ordering::AcqRel) {
            return Err(BenchError::Config(
                "allocation trace scope already active".into(),
            ));
        }
        COUNTERS.reset_peak_usage();
        Ok(Self {
            baseline: COUNTERS.current_usage(),
        })
    }

    /// Highest byte count allocated above the baseline since [`TraceScope::start`].
    #[must_use]
    pub fn peak_bytes(&self) -> u64 {
        COUNTERS.peak_usage().saturating_sub(self.baseline) as u64
    }
}

impl Drop for TraceScope {
    fn drop(&mut self) {
        SCOPE_ACTIVE.store(false, Ordering::Release);
    }
}
