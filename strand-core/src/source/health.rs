//! Entropy health tests.
//!
//! Statistical checks applied to CSPRNG output before it is certified as
//! strong, drawn from:
//! - **NIST SP 800-90B**: repetition test (4.4.1), adaptive proportion test (4.4.2)
//! - **NIST SP 800-22**: monobit (2.1), runs (2.3), longest run (2.4), frequency
//!
//! The full suite runs against a dedicated certification sample of at
//! least [`MIN_SAMPLE_BYTES`]; requested output buffers are usually far
//! too small for the distributional tests to mean anything. The
//! repetition test alone doubles as a continuous per-call check, since a
//! stuck generator is visible even in an 8-byte buffer.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::error::{GenerationError, Result};

/// Maximum number of consecutive identical bytes allowed before failing
/// the repetition test. Per SP 800-90B guidelines for detecting stuck-at
/// faults.
pub const MAX_CONSECUTIVE_IDENTICAL_BYTES: usize = 5;

/// Minimum sample size for reliable entropy testing.
pub const MIN_SAMPLE_BYTES: usize = 32;

/// Default certification sample size.
pub const DEFAULT_SAMPLE_BYTES: usize = 256;

/// Maximum allowed deviation from expected byte frequency (as a ratio)
/// for large samples. A value of 0.5 means no byte value may appear more
/// than 1.5x the expected count.
const MAX_FREQUENCY_DEVIATION_RATIO: f64 = 0.5;

/// Window size for the adaptive proportion test.
const APT_WINDOW_BYTES: usize = 512;

/// Cutoff ratio for the adaptive proportion test.
const APT_CUTOFF_RATIO: f64 = 0.4;

fn weak(details: String) -> GenerationError {
    GenerationError::WeakRandomness { details }
}

fn sample_too_small(test: &str, needed: usize, got: usize) -> GenerationError {
    GenerationError::InvalidConfiguration(format!(
        "{test} requires a sample of at least {needed} bytes, got {got}"
    ))
}

/// Counts of maximal bit runs in a byte slice, plus the longest one seen.
///
/// Shared between the runs test and the longest run test so the bit
/// stream is only scanned once per test instead of with two copies of
/// the same loop.
struct BitRuns {
    count: u64,
    longest: usize,
}

fn bit_run_stats(bytes: &[u8]) -> BitRuns {
    let mut bits = bytes
        .iter()
        .copied()
        .flat_map(|byte| (0..8u32).rev().map(move |pos| (byte >> pos) & 1));

    let Some(first) = bits.next() else {
        return BitRuns { count: 0, longest: 0 };
    };

    let mut stats = BitRuns { count: 1, longest: 1 };
    let mut prev = first;
    let mut current = 1usize;

    for bit in bits {
        if bit == prev {
            current = current.saturating_add(1);
        } else {
            stats.count = stats.count.saturating_add(1);
            prev = bit;
            current = 1;
        }
        if current > stats.longest {
            stats.longest = current;
        }
    }

    stats
}

/// Repetition test for detecting stuck-at faults (SP 800-90B 4.4.1).
///
/// Fails if more than [`MAX_CONSECUTIVE_IDENTICAL_BYTES`] consecutive
/// identical bytes appear anywhere in the input. Meaningful even on the
/// smallest request sizes, so this is also run against every returned
/// output buffer.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidConfiguration`] on empty input, and
/// [`GenerationError::WeakRandomness`] if the run limit is exceeded.
pub fn repetition_test(bytes: &[u8]) -> Result<()> {
    let Some(&first) = bytes.first() else {
        return Err(sample_too_small("repetition test", 1, 0));
    };

    let mut prev = first;
    let mut run = 1usize;
    let mut longest = 1usize;

    for &byte in bytes.iter().skip(1) {
        if byte == prev {
            run = run.saturating_add(1);
            if run > longest {
                longest = run;
            }
        } else {
            prev = byte;
            run = 1;
        }
    }

    if longest > MAX_CONSECUTIVE_IDENTICAL_BYTES {
        return Err(weak(format!(
            "repetition test: found {longest} consecutive identical bytes \
             (max allowed {MAX_CONSECUTIVE_IDENTICAL_BYTES})"
        )));
    }

    Ok(())
}

/// Frequency test for detecting biased byte distributions.
///
/// For a healthy source, byte values are roughly uniform. The allowed
/// deviation is tiered by sample size: a 256-byte sample expects each
/// value about once, so wide variation is normal there, while multi-
/// kilobyte samples are held close to the expected count.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidConfiguration`] if the sample is
/// smaller than [`MIN_SAMPLE_BYTES`], and
/// [`GenerationError::WeakRandomness`] on a skewed distribution.
#[allow(clippy::cast_precision_loss)]
pub fn frequency_test(bytes: &[u8]) -> Result<()> {
    if bytes.len() < MIN_SAMPLE_BYTES {
        return Err(sample_too_small("frequency test", MIN_SAMPLE_BYTES, bytes.len()));
    }

    let mut counts = [0u32; 256];
    for &byte in bytes {
        counts[usize::from(byte)] = counts[usize::from(byte)].saturating_add(1);
    }

    let total = bytes.len();
    let expected = total as f64 / 256.0;

    // Tiered by sample size: at 256 bytes each value is expected once,
    // so counts of 4-5 are unremarkable.
    let max_allowed = if total < 512 {
        (expected * 6.0).max(8.0)
    } else if total < 1024 {
        (expected * 4.0).max(6.0)
    } else if total < 4096 {
        expected * 3.0
    } else {
        expected * (1.0 + MAX_FREQUENCY_DEVIATION_RATIO)
    };

    let (max_byte, max_count) = counts
        .iter()
        .enumerate()
        .max_by_key(|&(_, count)| *count)
        .map_or((0, 0), |(value, count)| (value, *count));

    if f64::from(max_count) > max_allowed {
        return Err(weak(format!(
            "frequency test: byte {max_byte:#04x} appears {max_count} times \
             (expected ~{expected:.1}, max allowed {max_allowed:.1})"
        )));
    }

    // Under-representation: in larger samples most byte values should
    // show up at least once.
    if total >= 512 {
        let missing = counts.iter().filter(|&&count| count == 0).count();
        let max_missing = if total >= 2048 { 64 } else { 128 };
        if missing > max_missing {
            return Err(weak(format!(
                "frequency test: {missing} of 256 byte values never appeared \
                 (max allowed {max_missing} for a {total} byte sample)"
            )));
        }
    }

    Ok(())
}

/// Monobit test for bit-level balance (SP 800-22 2.1).
///
/// A healthy source produces roughly equal numbers of zero and one bits.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidConfiguration`] on empty input, and
/// [`GenerationError::WeakRandomness`] if the one-bit proportion falls
/// outside the accepted band.
#[allow(clippy::cast_precision_loss)]
pub fn monobit_test(bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        return Err(sample_too_small("monobit test", 1, 0));
    }

    let ones: u64 = bytes.iter().map(|byte| u64::from(byte.count_ones())).sum();
    let total_bits = (bytes.len() as u64).saturating_mul(8);
    let proportion = ones as f64 / total_bits as f64;

    // Wider band for short samples where variance is naturally higher.
    let (min, max) = if total_bits < 1000 { (0.35, 0.65) } else { (0.40, 0.60) };

    if proportion < min || proportion > max {
        return Err(weak(format!(
            "monobit test: {:.1}% one bits over {total_bits} bits \
             (expected {:.0}-{:.0}%)",
            proportion * 100.0,
            min * 100.0,
            max * 100.0
        )));
    }

    Ok(())
}

/// Runs test for consecutive bit sequences (SP 800-22 2.3).
///
/// Balanced random data has close to one run per two bits. Too few runs
/// means long stretches of identical bits; too many means an oscillating
/// pattern.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidConfiguration`] for samples under 8
/// bytes, and [`GenerationError::WeakRandomness`] if the run count falls
/// outside the expected band.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn runs_test(bytes: &[u8]) -> Result<()> {
    if bytes.len() < 8 {
        return Err(sample_too_small("runs test", 8, bytes.len()));
    }

    let total_bits = bytes.len().saturating_mul(8);
    let stats = bit_run_stats(bytes);

    // E(runs) = 2*n0*n1/n + 1, which is n/2 for balanced data.
    let expected = total_bits as f64 / 2.0;
    let deviation = if total_bits < 1000 { 0.35 } else { 0.30 };
    let min_runs = (expected * (1.0 - deviation)) as u64;
    let max_runs = (expected * (1.0 + deviation)) as u64;

    if stats.count < min_runs || stats.count > max_runs {
        return Err(weak(format!(
            "runs test: {} runs found (expected {min_runs}-{max_runs} for {total_bits} bits)",
            stats.count
        )));
    }

    Ok(())
}

/// Longest run test (SP 800-22 2.4).
///
/// The expected longest run of identical bits in n random bits is about
/// log2(n); the thresholds here sit near twice that, so a healthy source
/// essentially never trips them while a biased one does quickly.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidConfiguration`] on empty input, and
/// [`GenerationError::WeakRandomness`] if a run exceeds the threshold.
pub fn longest_run_test(bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        return Err(sample_too_small("longest run test", 1, 0));
    }

    let total_bits = bytes.len().saturating_mul(8);
    let max_allowed = if total_bits < 1000 {
        20
    } else if total_bits < 10000 {
        24
    } else {
        28
    };

    let stats = bit_run_stats(bytes);

    if stats.longest > max_allowed {
        return Err(weak(format!(
            "longest run test: found run of {} bits \
             (max allowed {max_allowed} for {total_bits} total bits)",
            stats.longest
        )));
    }

    Ok(())
}

/// Adaptive proportion test (SP 800-90B 4.4.2).
///
/// Checks disjoint 512-byte windows for a single byte value dominating
/// the window. Samples shorter than one window are skipped; the other
/// tests cover them.
///
/// # Errors
///
/// Returns [`GenerationError::WeakRandomness`] if any window exceeds the
/// cutoff.
pub fn adaptive_proportion_test(bytes: &[u8]) -> Result<()> {
    adaptive_proportion_test_with_params(bytes, APT_WINDOW_BYTES, APT_CUTOFF_RATIO)
}

/// Adaptive proportion test with custom window and cutoff.
///
/// # Errors
///
/// Returns [`GenerationError::WeakRandomness`] if any window exceeds the
/// cutoff.
#[allow(clippy::cast_precision_loss)]
pub fn adaptive_proportion_test_with_params(
    bytes: &[u8],
    window_size: usize,
    cutoff_ratio: f64,
) -> Result<()> {
    if window_size == 0 || bytes.len() < window_size {
        // Not enough data for this test, skip silently
        return Ok(());
    }

    for (index, window) in bytes.chunks_exact(window_size).enumerate() {
        let mut counts = [0u32; 256];
        for &byte in window {
            counts[usize::from(byte)] = counts[usize::from(byte)].saturating_add(1);
        }

        let max_count = counts.iter().max().copied().unwrap_or(0);
        let ratio = f64::from(max_count) / window_size as f64;

        if ratio > cutoff_ratio {
            return Err(weak(format!(
                "adaptive proportion test: most common byte fills {:.1}% of \
                 window {index} (cutoff {:.1}%)",
                ratio * 100.0,
                cutoff_ratio * 100.0
            )));
        }
    }

    Ok(())
}

/// Run the full health suite on the provided bytes.
///
/// Intended for certification samples of at least [`MIN_SAMPLE_BYTES`];
/// also usable against externally sourced entropy.
///
/// # Errors
///
/// Returns the first failing test's error:
/// [`GenerationError::WeakRandomness`] for a statistical failure, or
/// [`GenerationError::InvalidConfiguration`] if the sample is too small
/// for the suite to run.
pub fn run_health_checks(bytes: &[u8]) -> Result<()> {
    // SP 800-90B basic tests
    repetition_test(bytes)?;
    frequency_test(bytes)?;

    // SP 800-22 tests
    monobit_test(bytes)?;
    runs_test(bytes)?;
    longest_run_test(bytes)?;

    // SP 800-90B adaptive proportion test
    adaptive_proportion_test(bytes)?;

    Ok(())
}
