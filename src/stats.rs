//! # Aggregation
//!
//! Reductions from samples to averages, running per-cipher totals, and the
//! efficiency ranking.
//!
//! The efficiency ratio is `memory (MB) / time (s)`; lower ranks first. Ties
//! keep the order entries were supplied in, which is cipher-definition order.

use crate::probe::Sample;
use crate::runner::RunResult;

/// `mem_mb / time_secs`, or `+inf` when `time_secs` is not positive.
#[inline]
#[must_use]
pub fn efficiency_ratio(mem_mb: f64, time_secs: f64) -> f64 {
    if time_secs > 0.0 {
        mem_mb / time_secs
    } else {
        f64::INFINITY
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

/// Mean time and memory for one (cipher, size) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeCipherSummary {
    pub cipher: &'static str,
    pub size: usize,
    pub avg_time: f64,
    pub avg_mem: f64,
}

impl SizeCipherSummary {
    #[must_use]
    pub fn from_samples(cipher: &'static str, size: usize, samples: &[Sample]) -> Self {
        Self {
            cipher,
            size,
            avg_time: mean(samples.iter().map(Sample::secs)),
            avg_mem: mean(samples.iter().map(Sample::peak_mb)),
        }
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        efficiency_ratio(self.avg_mem, self.avg_time)
    }

    #[must_use]
    pub fn efficiency(&self) -> EfficiencyEntry {
        EfficiencyEntry {
            cipher: self.cipher,
            ratio: self.ratio(),
            time: self.avg_time,
            mem: self.avg_mem,
        }
    }
}

/// One row of a ranking table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyEntry {
    pub cipher: &'static str,
    pub ratio: f64,
    pub time: f64,
    pub mem: f64,
}

/// An [`EfficiencyEntry`] with its 1-based rank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked {
    pub rank: usize,
    pub entry: EfficiencyEntry,
}

/// Stable ascending sort by ratio; rank 1 is the smallest ratio.
#[must_use]
pub fn rank(mut entries: Vec<EfficiencyEntry>) -> Vec<Ranked> {
    entries.sort_by(|a, b| a.ratio.total_cmp(&b.ratio));
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| Ranked { rank: i + 1, entry })
        .collect()
}

/// Running totals for one cipher across all sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CipherTotals {
    pub cipher: &'static str,
    /// Sum of every retained sample's elapsed time.
    pub total_time: f64,
    /// Largest single-sample peak seen at any size (not summed).
    pub peak_mem_mb: f64,
}

impl CipherTotals {
    #[must_use]
    pub fn ratio(&self) -> f64 {
        efficiency_ratio(self.peak_mem_mb, self.total_time)
    }

    #[must_use]
    pub fn efficiency(&self) -> EfficiencyEntry {
        EfficiencyEntry {
            cipher: self.cipher,
            ratio: self.ratio(),
            time: self.total_time,
            mem: self.peak_mem_mb,
        }
    }
}

/// Per-cipher accumulator, threaded through a run by value.
///
/// Entries stay in first-recorded order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    entries: Vec<CipherTotals>,
}

impl Totals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished (cipher, size) run into the totals.
    #[must_use]
    pub fn record(mut self, run: &RunResult) -> Self {
        let total_time = run.total_time();
        let max_mem = run.max_mem();

        match self.entries.iter_mut().find(|t| t.cipher == run.cipher) {
            Some(totals) => {
                totals.total_time += total_time;
                totals.peak_mem_mb = totals.peak_mem_mb.max(max_mem);
            }
            None => self.entries.push(CipherTotals {
                cipher: run.cipher,
                total_time,
                peak_mem_mb: max_mem,
            }),
        }
        self
    }

    #[must_use]
    pub fn get(&self, cipher: &str) -> Option<&CipherTotals> {
        self.entries.iter().find(|t| t.cipher == cipher)
    }

    #[must_use]
    pub fn entries(&self) -> &[CipherTotals] {
        &self.entries
    }

    /// Ranked efficiency over the totals.
    #[must_use]
    pub fn ranking(&self) -> Vec<Ranked> {
        rank(self.entries.iter().map(CipherTotals::efficiency).collect())
    }
}
