//! tests/runner_tests.rs
//! Benchmark runner: warm-up discard, sample counts, failure propagation

mod common;

use cipherbench_rs::{run, BenchError, CipherKind, FixedProbe, KeyMaterial};
use common::{CorruptingAdapter, EchoAdapter, FailingAdapter};
use std::time::Duration;

fn fixed_probe() -> FixedProbe {
    FixedProbe::new(Duration::from_millis(1), 1_000_000)
}

#[test]
fn six_repetitions_keep_five_samples() {
    let mut out = Vec::new();
    let result = run(&EchoAdapter, 64, 6, &mut fixed_probe(), &mut out).unwrap();

    assert_eq!(result.cipher, "Stub");
    assert_eq!(result.size, 64);
    assert_eq!(result.samples.len(), 5);
    assert_eq!(result.times().len(), 5);
    assert_eq!(result.mems().len(), 5);
}

#[test]
fn sample_count_is_repetitions_minus_one() {
    for repetitions in 2..=8 {
        let result = run(&EchoAdapter, 16, repetitions, &mut fixed_probe(), &mut Vec::new()).unwrap();
        assert_eq!(result.samples.len(), repetitions - 1);
    }
}

#[test]
fn run_lines_are_numbered_after_warm_up() {
    let mut out = Vec::new();
    run(&EchoAdapter, 64, 3, &mut fixed_probe(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "Run 1\n  Time 0.001000 sec | Mem 1.000000 MB\n\
         Run 2\n  Time 0.001000 sec | Mem 1.000000 MB\n"
    );
}

#[test]
fn too_few_repetitions_rejected_before_measuring() {
    for repetitions in [0, 1] {
        let adapter = CorruptingAdapter::new(usize::MAX);
        let mut out = Vec::new();
        let err = run(&adapter, 64, repetitions, &mut fixed_probe(), &mut out).unwrap_err();

        assert!(matches!(err, BenchError::Config(_)), "{err}");
        assert_eq!(adapter.calls.get(), 0);
        assert!(out.is_empty());
    }
}

#[test]
fn integrity_failure_carries_context() {
    let adapter = CorruptingAdapter::new(3);
    let err = run(&adapter, 256, 6, &mut fixed_probe(), &mut Vec::new()).unwrap_err();

    match err {
        BenchError::Integrity {
            cipher,
            size,
            iteration,
        } => {
            assert_eq!(cipher, "Broken");
            assert_eq!(size, 256);
            assert_eq!(iteration, 3);
        }
        e => panic!("Unexpected error type: {e:?}"),
    }
    // Stops at the failing trial.
    assert_eq!(adapter.calls.get(), 3);
}

#[test]
fn warm_up_failure_is_not_swallowed() {
    let adapter = CorruptingAdapter::new(1);
    let err = run(&adapter, 64, 6, &mut fixed_probe(), &mut Vec::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "integrity failure: Broken round-trip mismatch at 64 bytes (iteration 1)"
    );
}

#[test]
fn library_error_propagates() {
    let err = run(&FailingAdapter, 64, 2, &mut fixed_probe(), &mut Vec::new()).unwrap_err();
    match err {
        BenchError::Library {
            cipher,
            size,
            iteration,
            ..
        } => {
            assert_eq!(cipher, "Failing");
            assert_eq!(size, 64);
            assert_eq!(iteration, Some(1));
        }
        e => panic!("Unexpected error type: {e:?}"),
    }
}

#[test]
fn library_error_message_names_size_and_iteration() {
    let err = run(&FailingAdapter, 256, 3, &mut fixed_probe(), &mut Vec::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failing library error at 256 bytes (iteration 1): invalid key length"
    );
}

#[test]
fn real_ciphers_produce_non_negative_samples() {
    let keys = KeyMaterial::fixed();
    let mut probe = cipherbench_rs::AllocProbe::new();

    for kind in CipherKind::ALL {
        let adapter = kind.adapter(&keys);
        let result = run(&adapter, 1024, 3, &mut probe, &mut Vec::new()).unwrap();
        assert_eq!(result.samples.len(), 2);
        assert!(result.times().iter().all(|&t| t >= 0.0));
        assert!(result.mems().iter().all(|&m| m >= 0.0));
    }
}

#[test]
fn summary_averages_retained_samples() {
    let result = run(&EchoAdapter, 64, 4, &mut fixed_probe(), &mut Vec::new()).unwrap();
    let summary = result.summary();

    assert!((summary.avg_time - 0.001).abs() < 1e-12);
    assert!((summary.avg_mem - 1.0).abs() < 1e-12);
    assert!((result.total_time() - 0.003).abs() < 1e-12);
    assert_eq!(result.max_mem(), 1.0);
}
