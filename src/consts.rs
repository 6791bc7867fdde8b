//! # Constants
//!
//! Compile-time defaults for a benchmark run: the message-size set, the
//! repetition count, the filler pattern messages are built from, and the fixed
//! key material every cipher is keyed with.

/// Message sizes (in bytes) benchmarked by default, in reporting order.
pub const DEFAULT_MESSAGE_SIZES: [usize; 4] = [64, 256, 1024, 4096];

/// Trials per (cipher, size) pair, including the discarded warm-up trial.
///
/// Must be at least [`MIN_REPETITIONS`]; `6` leaves five retained samples.
pub const DEFAULT_REPETITIONS: usize = 6;

/// Smallest repetition count that still retains one sample after warm-up.
pub const MIN_REPETITIONS: usize = 2;

/// Pattern repeated and truncated to build every test message.
pub const FILLER_PATTERN: &[u8; 16] = b"jumpedoverazebra";

/// Fixed AES-128 key.
pub const AES_KEY: &[u8; 16] = b"thequickbrownfox";

/// Fixed Ascon-128 key.
pub const ASCON_KEY: &[u8; 16] = b"thequickbrownfox";

/// Fixed Ascon-128 nonce.
pub const ASCON_NONCE: &[u8; 16] = b"andthreelazydogs";

/// Fixed Simon 64/128 key.
pub const SIMON_KEY: &[u8; 16] = b"thequickbrownfox";

/// Fixed Speck 64/128 key.
pub const SPECK_KEY: &[u8; 16] = b"thequickbrownfox";

/// AES block length in bytes.
pub const AES_BLOCK_BYTES: usize = 16;

/// Block length of the 64-bit lightweight ciphers (Simon, Speck).
pub const BLOCK64_BYTES: usize = 8;

/// Bytes per reported megabyte (decimal, not MiB).
pub const BYTES_PER_MB: f64 = 1_000_000.0;
