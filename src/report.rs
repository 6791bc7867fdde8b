//! # Report Formatting
//!
//! Fixed-width console tables. Times and memory print with 6 decimals; column
//! widths are stable so output can be diffed.

use crate::error::BenchError;
use crate::probe::Sample;
use crate::stats::{CipherTotals, Ranked, SizeCipherSummary};
use std::io::Write;

const WIDE_RULE: usize = 82;
const TOTALS_RULE: usize = 72;
const RANK_RULE: usize = 45;

fn rule<W: Write>(out: &mut W, ch: char, width: usize) -> Result<(), BenchError> {
    writeln!(out, "{}", ch.to_string().repeat(width))?;
    Ok(())
}

/// `"\n{size} Byte Tests"`
pub fn write_size_header<W: Write>(out: &mut W, size: usize) -> Result<(), BenchError> {
    writeln!(out, "\n{size} Byte Tests")?;
    Ok(())
}

/// `"\n{cipher}: {size} bytes"`
pub fn write_cipher_header<W: Write>(
    out: &mut W,
    cipher: &str,
    size: usize,
) -> Result<(), BenchError> {
    writeln!(out, "\n{cipher}: {size} bytes")?;
    Ok(())
}

/// One retained sample; `run` is 1-based and excludes the warm-up.
pub fn write_run_line<W: Write>(out: &mut W, run: usize, sample: &Sample) -> Result<(), BenchError> {
    writeln!(out, "Run {run}")?;
    writeln!(
        out,
        "  Time {:.6} sec | Mem {:.6} MB",
        sample.secs(),
        sample.peak_mb()
    )?;
    Ok(())
}

/// Rule plus the per-size average line for one cipher.
pub fn write_average<W: Write>(out: &mut W, summary: &SizeCipherSummary) -> Result<(), BenchError> {
    rule(out, '-', WIDE_RULE)?;
    writeln!(
        out,
        "{} {} byte | Average Time: {:.6} sec | Average Memory Used: {:.6} MB",
        summary.cipher, summary.size, summary.avg_time, summary.avg_mem
    )?;
    Ok(())
}

/// Ranked efficiency table for one message size.
pub fn write_size_ranking<W: Write>(
    out: &mut W,
    size: usize,
    ranking: &[Ranked],
) -> Result<(), BenchError> {
    writeln!(out)?;
    rule(out, '-', WIDE_RULE)?;
    writeln!(out, "{size} byte Winners sorted by Efficiency Ratio")?;
    rule(out, '-', WIDE_RULE)?;
    writeln!(
        out,
        "{:<6} {:<10} {:>14} {:>13} {:>21}",
        "Rank", "Cipher", "Time Used", "Memory Used", "Efficiency Ratio"
    )?;
    rule(out, '-', WIDE_RULE)?;
    for Ranked { rank, entry } in ranking {
        writeln!(
            out,
            "{:<6} {:<10} {:10.6} sec {:10.6} MB {:14.6} MB/sec",
            rank, entry.cipher, entry.time, entry.mem, entry.ratio
        )?;
    }
    Ok(())
}

/// Unranked totals, in cipher-definition order.
pub fn write_totals<W: Write>(out: &mut W, totals: &[CipherTotals]) -> Result<(), BenchError> {
    writeln!(out)?;
    rule(out, '*', WIDE_RULE)?;
    writeln!(
        out,
        "Cipher Totals & Efficiency Ratios (across all sizes, combined runs)"
    )?;
    rule(out, '*', WIDE_RULE)?;
    writeln!(
        out,
        "{:<10} {:>16} {:>18} {:>25}",
        "Cipher", "Time Used", "Memory Used", "Efficiency Ratio"
    )?;
    rule(out, '-', TOTALS_RULE)?;
    for t in totals {
        writeln!(
            out,
            "{:<10} {:12.6} sec {:15.6} MB {:18.6} MB/sec",
            t.cipher,
            t.total_time,
            t.peak_mem_mb,
            t.ratio()
        )?;
    }
    Ok(())
}

/// Final ranking over the totals.
pub fn write_final_ranking<W: Write>(out: &mut W, ranking: &[Ranked]) -> Result<(), BenchError> {
    writeln!(out)?;
    rule(out, '=', WIDE_RULE)?;
    writeln!(out, "Efficiency Rankings")?;
    rule(out, '=', WIDE_RULE)?;
    writeln!(out, "\n{:<6} {:<10} {:>27}", "Rank", "Cipher", "Efficiency Ratio")?;
    rule(out, '-', RANK_RULE)?;
    for Ranked { rank, entry } in ranking {
        writeln!(out, "{:<6} {:<10} {:20.6} MB/sec", rank, entry.cipher, entry.ratio)?;
    }
    Ok(())
}
