//! Random byte generation facade
//!
//! This module ties the entropy sources and the derivation layer together:
//! one call fetches raw bytes from the selected source and returns them
//! alongside every derived representation as a [`DerivedBundle`].
//!
//! ## Behavior
//!
//! Each call is independent. A failing source is reported as an error and
//! is never silently substituted with another source, so callers always
//! know exactly where their bytes came from.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::derive::DerivedBundle;
use crate::error::{GenerationError, Result};
use crate::source::{self, EntropySource};

/// Minimum number of random bytes that may be requested per call.
///
/// Requests below this floor are rejected rather than rounded up, so the
/// caller is forced to acknowledge the minimum instead of silently
/// receiving more bytes than asked for.
pub const MIN_REQUEST_BYTES: usize = 8;

// ============================================================================
// Internal Implementation
// ============================================================================

/// Internal implementation of bundle generation.
fn generate_internal(
    length: usize,
    source: EntropySource,
    config: &GeneratorConfig,
) -> Result<DerivedBundle> {
    crate::log_generation_start!("generate", source = %source, length = length);

    if length < MIN_REQUEST_BYTES {
        let err = GenerationError::InvalidLength {
            minimum: MIN_REQUEST_BYTES,
            actual: length.to_string(),
        };
        crate::log_generation_error!("generate", err);
        return Err(err);
    }

    let raw = match source::fetch(source, length, config) {
        Ok(bytes) => bytes,
        Err(e) => {
            crate::log_generation_error!("generate", e);
            return Err(e);
        }
    };

    let bundle = DerivedBundle::from_raw(raw);

    crate::log_generation_complete!("generate", source = %source, length = length);
    debug!(source = %source, length = length, "Random byte generation completed");

    Ok(bundle)
}

// ============================================================================
// Public API
// ============================================================================

/// Generate random bytes from a named entropy source.
///
/// Fetches `length` bytes from the source identified by `source` and
/// returns them together with all derived representations. Uses the
/// default [`GeneratorConfig`], which verifies entropy quality. Typical
/// requests run 16 to 64 bytes; any length from [`MIN_REQUEST_BYTES`]
/// upward is accepted.
///
/// # Example
///
/// ```rust,ignore
/// use strand_core::generate;
///
/// let bundle = generate(32, "secure_prng")?;
/// println!("hex: {}", bundle.hex);
/// println!("sha: {}", bundle.sha);
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The source name is not recognized (`GenerationError::UnknownSource`)
/// - Fewer than [`MIN_REQUEST_BYTES`] bytes are requested
///   (`GenerationError::InvalidLength`)
/// - The power-up self-tests fail (`GenerationError::SelfTestFailed`)
/// - The selected source cannot deliver the bytes (source-specific variant)
pub fn generate(length: usize, source: &str) -> Result<DerivedBundle> {
    let parsed = source.parse::<EntropySource>().map_err(|e| {
        crate::log_generation_error!("generate", e);
        e
    })?;
    generate_with_config(length, parsed, &GeneratorConfig::default())
}

/// Generate random bytes with a custom configuration.
///
/// Like [`generate`], but takes an already-parsed [`EntropySource`] and an
/// explicit [`GeneratorConfig`] controlling entropy verification.
///
/// # Errors
///
/// Returns an error if:
/// - The power-up self-tests fail (`GenerationError::SelfTestFailed`)
/// - The configuration validation fails (`GenerationError::InvalidConfiguration`)
/// - Fewer than [`MIN_REQUEST_BYTES`] bytes are requested
///   (`GenerationError::InvalidLength`)
/// - The selected source cannot deliver the bytes (source-specific variant)
pub fn generate_with_config(
    length: usize,
    source: EntropySource,
    config: &GeneratorConfig,
) -> Result<DerivedBundle> {
    crate::ensure_ready()?;
    config.validate()?;
    generate_internal(length, source, config)
}

/// Parse a byte-count string from untrusted input.
///
/// Command-line arguments and form fields arrive as text. This helper
/// converts such a string to a count, rejecting anything that is not a
/// plain non-negative integer. It does not enforce the request floor;
/// [`generate`] does that, so a parsed-but-too-small value still produces
/// a precise `InvalidLength` error naming the minimum.
///
/// # Errors
///
/// Returns `GenerationError::InvalidLength` if the input is empty, signed,
/// fractional, or contains non-digit characters.
pub fn parse_length(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    // std's integer parser accepts a leading '+', which is not a plain count.
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GenerationError::InvalidLength {
            minimum: MIN_REQUEST_BYTES,
            actual: trimmed.to_string(),
        });
    }
    trimmed.parse::<usize>().map_err(|_| GenerationError::InvalidLength {
        minimum: MIN_REQUEST_BYTES,
        actual: trimmed.to_string(),
    })
}
