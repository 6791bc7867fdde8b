// src/lib.rs

//! Time and peak-memory benchmark harness for symmetric-cipher round-trips.
//!
//! ```no_run
//! use cipherbench_rs::{AllocProbe, BenchConfig, Benchmark};
//!
//! let mut bench = Benchmark::new(&BenchConfig::default(), AllocProbe::new())?;
//! let report = bench.run(&mut std::io::stdout())?;
//! assert_eq!(report.per_size.len(), 4);
//! # Ok::<(), cipherbench_rs::BenchError>(())
//! ```

pub mod bench;
pub mod ciphers;
pub mod config;
pub mod consts;
pub mod error;
pub mod keys;
pub mod logging;
pub mod plot;
pub mod probe;
pub mod report;
pub mod runner;
pub mod stats;

pub use bench::{run_and_chart, BenchReport, Benchmark, Metric, SizeResults};
pub use ciphers::{CipherAdapter, CipherKind};
pub use config::BenchConfig;
pub use error::BenchError;
pub use keys::{KeyMaterial, KeySource};
pub use probe::{AllocProbe, FixedProbe, PeakAlloc, Probe, Sample};
pub use runner::{filler_message, run, RunResult};
pub use stats::{efficiency_ratio, rank, EfficiencyEntry, Ranked, SizeCipherSummary, Totals};
