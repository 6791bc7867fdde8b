//! tests/common.rs
//! Shared stubs and constants for the integration tests

use cipherbench_rs::{BenchError, CipherAdapter};
use std::cell::Cell;

/// Every default message size plus a length that is not a multiple of 8 or 16.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SIZES: &[usize] = &[64, 256, 1024, 4096, 65];

/// Adapter that returns its input unchanged.
#[allow(dead_code)]
pub struct EchoAdapter;

impl CipherAdapter for EchoAdapter {
    fn name(&self) -> &'static str {
        "Stub"
    }

    fn roundtrip(&self, message: &[u8]) -> Result<Vec<u8>, BenchError> {
        Ok(message.to_vec())
    }
}

/// Adapter that corrupts the last byte starting at trial `fail_on` (1-based).
#[allow(dead_code)]
pub struct CorruptingAdapter {
    pub fail_on: usize,
    pub calls: Cell<usize>,
}

#[allow(dead_code)]
impl CorruptingAdapter {
    pub fn new(fail_on: usize) -> Self {
        Self {
            fail_on,
            calls: Cell::new(0),
        }
    }
}

impl CipherAdapter for CorruptingAdapter {
    fn name(&self) -> &'static str {
        "Broken"
    }

    fn roundtrip(&self, message: &[u8]) -> Result<Vec<u8>, BenchError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);

        let mut out = message.to_vec();
        if call >= self.fail_on {
            if let Some(last) = out.last_mut() {
                *last ^= 0xff;
            }
        }
        Ok(out)
    }
}

/// Adapter whose underlying "library" always fails.
#[allow(dead_code)]
pub struct FailingAdapter;

impl CipherAdapter for FailingAdapter {
    fn name(&self) -> &'static str {
        "Failing"
    }

    fn roundtrip(&self, message: &[u8]) -> Result<Vec<u8>, BenchError> {
        Err(BenchError::library("Failing", message.len(), "invalid key length"))
    }
}

/// Writer that accepts every byte but fails to flush.
#[allow(dead_code)]
#[derive(Default)]
pub struct FlushFailingWriter {
    pub written: Vec<u8>,
}

impl std::io::Write for FlushFailingWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::other("device full"))
    }
}
