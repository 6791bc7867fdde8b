// src/main.rs

use cipherbench_rs::logging::init_tracing;
use cipherbench_rs::{run_and_chart, AllocProbe, BenchConfig, PeakAlloc};
use std::io;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: PeakAlloc = PeakAlloc;

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("failed to initialize logging: {err}");
    }

    let config = BenchConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_and_chart(&config, AllocProbe::new(), &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "benchmark aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
