//! # Strand Logging Utilities
//!
//! Security-conscious logging utilities for Strand. Provides structured
//! logging with tracing while ensuring generated byte material is never
//! written to a log.
//!
//! ## Security Features
//!
//! - **No Sensitive Data**: Generated bytes are logged as length plus fingerprint only
//! - **Structured Logging**: Consistent log format across all components
//! - **Configurable**: Environment-based log levels via `RUST_LOG`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use strand_core::logging::{init_tracing, sanitize_data};
//!
//! // Initialize logging (sets the global tracing subscriber, once per process)
//! init_tracing().expect("Failed to init tracing");
//!
//! // Log with automatic sanitization
//! let output = b"freshly generated bytes";
//! tracing::info!("Generation completed: {}", sanitize_data(output));
//! ```

use std::fmt;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with security-conscious defaults.
///
/// Sets up structured logging with:
/// - Environment-based filtering (RUST_LOG)
/// - Compact single-line output
/// - Sensitive data sanitization via the logging macros
///
/// # Errors
///
/// Returns an error if the tracing subscriber cannot be initialized,
/// typically due to a subscriber already being set.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("strand_core=info"));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .compact(),
    );

    subscriber.init();

    info!("Strand logging initialized");
    Ok(())
}

/// Compute the first 16 hex characters of a SHA-256 hash.
///
/// This provides a fingerprint for correlating log lines without
/// revealing the bytes themselves.
fn sha256_first_16_hex(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    // SHA-256 always produces 32 bytes, so .get(..8) will always succeed.
    result.get(..8).map_or_else(|| hex::encode(result), hex::encode)
}

/// Sanitize byte data for logging.
///
/// Generated bytes are cryptographic material and must never appear in a
/// log. This function produces a safe representation showing:
/// - For data <= 32 bytes: just the length
/// - For data > 32 bytes: length plus a fingerprint hash for correlation
///
/// # Example
///
/// ```rust
/// use strand_core::logging::sanitize_bytes;
///
/// // Small data shows only length
/// assert_eq!(sanitize_bytes(&[1, 2, 3]), "[3 bytes]");
///
/// // Larger data shows length and fingerprint
/// let large = vec![0u8; 100];
/// let result = sanitize_bytes(&large);
/// assert!(result.contains("100 bytes"));
/// assert!(result.contains("fingerprint:"));
/// ```
#[must_use]
pub fn sanitize_bytes(data: &[u8]) -> String {
    if data.len() <= 32 {
        format!("[{} bytes]", data.len())
    } else {
        // Show length and truncated hash for correlation
        let fingerprint = sha256_first_16_hex(data);
        format!("[{} bytes, fingerprint: {}]", data.len(), fingerprint)
    }
}

/// Sanitize data to prevent logging of sensitive information.
///
/// Returns a lazy display wrapper so the sanitized form is only rendered
/// when the log line is actually emitted. Used automatically in the
/// logging macros.
#[must_use]
pub fn sanitize_data(data: &[u8]) -> SanitizedBytes<'_> {
    SanitizedBytes(data)
}

/// Wrapper type for sanitized byte display.
pub struct SanitizedBytes<'a>(&'a [u8]);

impl fmt::Display for SanitizedBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() <= 32 {
            write!(f, "[{} bytes]", self.0.len())
        } else {
            write!(f, "[{} bytes, fingerprint: {}]", self.0.len(), sha256_first_16_hex(self.0))
        }
    }
}

/// Log a generation operation start.
///
/// Logs at TRACE level under the `entropy::operation` target with a
/// `phase = "start"` field, so a single filter can follow an operation
/// end to end.
#[macro_export]
macro_rules! log_generation_start {
    ($op:expr, $($field:tt)*) => {
        tracing::trace!(
            target: "entropy::operation",
            operation = $op,
            phase = "start",
            $($field)*
        );
    };
    ($op:expr) => {
        tracing::trace!(
            target: "entropy::operation",
            operation = $op,
            phase = "start",
        );
    };
}

/// Log a generation operation completion.
///
/// Logs at TRACE level under the `entropy::operation` target with a
/// `phase = "complete"` field.
#[macro_export]
macro_rules! log_generation_complete {
    ($op:expr, $($field:tt)*) => {
        tracing::trace!(
            target: "entropy::operation",
            operation = $op,
            phase = "complete",
            $($field)*
        );
    };
    ($op:expr) => {
        tracing::trace!(
            target: "entropy::operation",
            operation = $op,
            phase = "complete",
        );
    };
}

/// Log a generation operation error.
///
/// Logs at ERROR level under the `entropy::operation` target; the error's
/// display form and classification tag are both recorded.
#[macro_export]
macro_rules! log_generation_error {
    ($op:expr, $error:expr, $($field:tt)*) => {
        tracing::error!(
            target: "entropy::operation",
            operation = $op,
            error = %$error,
            kind = $error.kind(),
            phase = "error",
            $($field)*
        );
    };
    ($op:expr, $error:expr) => {
        tracing::error!(
            target: "entropy::operation",
            operation = $op,
            error = %$error,
            kind = $error.kind(),
            phase = "error",
        );
    };
}
