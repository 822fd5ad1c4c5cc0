#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Operating-system CSPRNG provider with strength verification.
//!
//! Bytes come from [`OsRng`]. When verification is enabled, the
//! generator is certified once per process by running the full health
//! suite against a dedicated sample, and every returned buffer is then
//! screened by the repetition test for stuck-output faults.

use rand::{RngCore, rngs::OsRng};
use std::sync::atomic::{AtomicBool, Ordering};

use super::{EntropySource, health};
use crate::config::GeneratorConfig;
use crate::error::{GenerationError, Result};

/// Set once the generator has passed full health certification.
///
/// Only success latches. A failed certification is returned to the
/// caller and retried on the next request, so a transient glitch does
/// not poison the whole process.
static CSPRNG_CERTIFIED: AtomicBool = AtomicBool::new(false);

pub(crate) fn fetch(length: usize, config: &GeneratorConfig) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    draw(&mut bytes)?;

    if config.verify_entropy {
        certify_generator(config.health_sample_size)?;
        screen_output(&bytes)?;
    }

    Ok(bytes)
}

/// Fill a buffer from the OS CSPRNG, classifying failure instead of
/// panicking the way `fill_bytes` would.
fn draw(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf).map_err(|e| GenerationError::Unavailable {
        source: EntropySource::SecurePrng.as_str(),
        reason: e.to_string(),
    })
}

fn certify_generator(sample_size: usize) -> Result<()> {
    if CSPRNG_CERTIFIED.load(Ordering::SeqCst) {
        return Ok(());
    }

    let mut sample = vec![0u8; sample_size];
    draw(&mut sample)?;

    health::run_health_checks(&sample).map_err(|e| match e {
        GenerationError::WeakRandomness { details } => GenerationError::WeakRandomness {
            details: format!("certification sample: {details}"),
        },
        other => other,
    })?;

    CSPRNG_CERTIFIED.store(true, Ordering::SeqCst);
    Ok(())
}

fn screen_output(bytes: &[u8]) -> Result<()> {
    health::repetition_test(bytes).map_err(|e| match e {
        GenerationError::WeakRandomness { details } => GenerationError::WeakRandomness {
            details: format!("output buffer: {details}"),
        },
        other => other,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_returns_requested_length() {
        let config = GeneratorConfig::for_development();
        let bytes = fetch(32, &config).unwrap();
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_fetch_with_verification_passes_on_live_generator() {
        let config = GeneratorConfig::default();
        let bytes = fetch(16, &config).unwrap();
        assert_eq!(bytes.len(), 16);
    }

    #[test]
    fn test_consecutive_fetches_differ() {
        let config = GeneratorConfig::for_development();
        let a = fetch(32, &config).unwrap();
        let b = fetch(32, &config).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_screen_output_rejects_stuck_buffer() {
        let result = screen_output(&[0xaa; 16]);
        assert!(matches!(result, Err(GenerationError::WeakRandomness { .. })));
    }
}
