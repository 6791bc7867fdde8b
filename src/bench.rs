//! src/bench.rs
//! Aggregator — drives the runner over every (size × cipher) pair, prints the
//! per-size and final tables, and returns everything as a [`BenchReport`]

use crate::ciphers::CipherAdapter;
use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::keys::KeyMaterial;
use crate::plot;
use crate::probe::Probe;
use crate::report;
use crate::runner;
use crate::stats::{rank, Ranked, SizeCipherSummary, Totals};
use std::collections::HashSet;
use std::io::Write;

/// Which per-size average a chart or series plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Time,
    Memory,
    Ratio,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Time, Metric::Memory, Metric::Ratio];

    #[must_use]
    pub fn of(self, summary: &SizeCipherSummary) -> f64 {
        match self {
            Metric::Time => summary.avg_time,
            Metric::Memory => summary.avg_mem,
            Metric::Ratio => summary.ratio(),
        }
    }
}

/// Results for one message size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeResults {
    pub size: usize,
    /// One per cipher, in cipher-definition order.
    pub summaries: Vec<SizeCipherSummary>,
    pub ranking: Vec<Ranked>,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub ciphers: Vec<&'static str>,
    pub per_size: Vec<SizeResults>,
    pub totals: Totals,
    pub final_ranking: Vec<Ranked>,
}

impl BenchReport {
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.per_size.iter().map(|r| r.size).collect()
    }

    #[must_use]
    pub fn summary(&self, size: usize, cipher: &str) -> Option<&SizeCipherSummary> {
        self.per_size
            .iter()
            .find(|r| r.size == size)?
            .summaries
            .iter()
            .find(|s| s.cipher == cipher)
    }

    /// `(size, value)` points for one cipher, in size order.
    #[must_use]
    pub fn series(&self, cipher: &str, metric: Metric) -> Vec<(f64, f64)> {
        self.per_size
            .iter()
            .filter_map(|r| {
                r.summaries
                    .iter()
                    .find(|s| s.cipher == cipher)
                    .map(|s| (r.size as f64, metric.of(s)))
            })
            .collect()
    }
}

/// A configured benchmark, ready to run.
///
/// Holds no state between runs; calling [`Benchmark::run`] twice measures twice.
pub struct Benchmark<P> {
    sizes: Vec<usize>,
    repetitions: usize,
    adapters: Vec<Box<dyn CipherAdapter>>,
    probe: P,
}

impl<P: Probe> Benchmark<P> {
    /// Build the adapters named by `config`, keyed per its key source.
    ///
    /// # Errors
    ///
    /// [`BenchError::Config`] if `config` fails validation.
    pub fn new(config: &BenchConfig, probe: P) -> Result<Self, BenchError> {
        config.validate()?;
        let keys = KeyMaterial::from_source(config.key_source());
        let adapters = config.ciphers().iter().map(|kind| kind.adapter(&keys)).collect();
        Self::with_adapters(config, adapters, probe)
    }

    /// Benchmark caller-supplied adapters with `config`'s sizes and repetitions.
    ///
    /// # Errors
    ///
    /// [`BenchError::Config`] if the sizes or repetitions are invalid, `adapters`
    /// is empty, or two adapters share a name (their totals would merge).
    /// `config`'s cipher set is ignored.
    pub fn with_adapters(
        config: &BenchConfig,
        adapters: Vec<Box<dyn CipherAdapter>>,
        probe: P,
    ) -> Result<Self, BenchError> {
        config.validate_schedule()?;
        if adapters.is_empty() {
            return Err(BenchError::Config("cipher set is empty".into()));
        }
        let mut seen = HashSet::with_capacity(adapters.len());
        if let Some(dup) = adapters.iter().map(|a| a.name()).find(|name| !seen.insert(*name)) {
            return Err(BenchError::Config(format!("duplicate cipher name {dup:?}")));
        }
        Ok(Self {
            sizes: config.sizes().to_vec(),
            repetitions: config.repetitions(),
            adapters,
            probe,
        })
    }

    /// Run every (size × cipher) pair, writing the console report to `out`.
    ///
    /// # Errors
    ///
    /// The first error any trial or write produces; nothing is averaged over a
    /// partial sample set.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<BenchReport, BenchError> {
        let mut totals = Totals::new();
        let mut per_size = Vec::with_capacity(self.sizes.len());

        for &size in &self.sizes {
            report::write_size_header(out, size)?;
            let mut summaries = Vec::with_capacity(self.adapters.len());

            for adapter in &self.adapters {
                let cipher = adapter.name();
                tracing::info!(cipher, size, repetitions = self.repetitions, "benchmarking");
                report::write_cipher_header(out, cipher, size)?;

                let run = runner::run(&**adapter, size, self.repetitions, &mut self.probe, out)?;
                totals = totals.record(&run);

                let summary = run.summary();
                report::write_average(out, &summary)?;
                summaries.push(summary);
            }

            let ranking = rank(summaries.iter().map(SizeCipherSummary::efficiency).collect());
            report::write_size_ranking(out, size, &ranking)?;
            tracing::info!(size, "size complete");

            per_size.push(SizeResults {
                size,
                summaries,
                ranking,
            });
        }

        report::write_totals(out, totals.entries())?;
        let final_ranking = totals.ranking();
        report::write_final_ranking(out, &final_ranking)?;

        Ok(BenchReport {
            ciphers: self.adapters.iter().map(|a| a.name()).collect(),
            per_size,
            totals,
            final_ranking,
        })
    }
}

/// Run `config` with `probe`, write the tables and charts to `out`, and flush
/// it. This is everything the binary does between logging setup and exit.
///
/// # Errors
///
/// Validation, trial, and write failures, including a failed final flush.
pub fn run_and_chart<P: Probe, W: Write>(
    config: &BenchConfig,
    probe: P,
    out: &mut W,
) -> Result<BenchReport, BenchError> {
    let mut bench = Benchmark::new(config, probe)?;
    let report = bench.run(out)?;
    plot::render_charts(&report, out)?;
    out.flush()?;
    Ok(report)
}
