//! # Strand Core
//!
//! Random byte generation from selectable entropy sources, with derived
//! digest representations of every output.
//!
//! ## Key Features
//!
//! - **Selectable Sources**: OS CSPRNG, direct `/dev/urandom` reads, or the
//!   platform syscall layer, chosen by name per call
//! - **Derived Representations**: every output ships as raw bytes plus
//!   uppercase hex, SHA-256, decimal digest bytes, and Whirlpool forms
//! - **Entropy Health Checks**: statistical screening in the style of
//!   NIST SP 800-90B gates the OS CSPRNG before bytes are released
//! - **Power-Up Self-Tests**: digest known-answer tests and a generator
//!   smoke test run before the first request is served
//! - **No Silent Fallback**: a failing source reports its own error rather
//!   than substituting bytes from another source
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strand_core::{LineBreak, generate, render_report};
//!
//! match generate(32, "secure_prng") {
//!     Ok(bundle) => {
//!         println!("hex:       {}", bundle.hex);
//!         println!("sha:       {}", bundle.sha);
//!         println!("whirlpool: {}", bundle.whirlpool);
//!     }
//!     Err(e) => eprint!("{}", render_report(&e, LineBreak::LineFeed)),
//! }
//! ```
//!
//! ## Entropy Sources
//!
//! | Identifier     | Backend                                      |
//! |----------------|----------------------------------------------|
//! | `secure_prng`  | The operating system CSPRNG via [`rand`]     |
//! | `raw_device`   | Direct reads from `/dev/urandom` (Unix only) |
//! | `library_prng` | The [`getrandom`] syscall layer              |
//!
//! Sources never fall back to one another. A request names one source and
//! either receives bytes from it or an error explaining why it could not
//! deliver them.
//!
//! ## Verification Layers
//!
//! Three layers stand between an entropy source and the caller:
//!
//! 1. Power-up self-tests (digest KATs plus a generator smoke test), run
//!    once per process before the first request is served
//! 2. Generator certification: a sacrificial sample drawn from the OS
//!    CSPRNG must pass the statistical health suite
//! 3. A per-request repetition screen on every output buffer
//!
//! The second and third layers apply to the `secure_prng` source and can
//! be tuned or disabled through [`GeneratorConfig`].

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Configuration types for generation behavior.
pub mod config;
/// Derived representations of generated bytes.
pub mod derive;
/// Error types and result aliases.
pub mod error;
/// The generation facade tying sources and derivations together.
pub mod generate;
/// Security-conscious logging utilities.
pub mod logging;
/// Entropy source selection and provider implementations.
pub mod source;

use lazy_static::lazy_static;
use rand::RngCore;
use rand::rngs::OsRng;
use std::sync::atomic::{AtomicBool, Ordering};

pub use config::GeneratorConfig;
pub use derive::DerivedBundle;
pub use error::{GenerationError, LineBreak, Result, render_report};
pub use source::EntropySource;

// ============================================================================
// Generation API
// ============================================================================

pub use generate::{MIN_REQUEST_BYTES, generate, generate_with_config, parse_length};

/// Library version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Power-up self-test status - must pass before any bytes are handed out
lazy_static! {
    static ref SELF_TESTS_PASSED: AtomicBool = AtomicBool::new(false);
}

/// Initializes the strand-core library with default configuration.
///
/// This function validates the default configuration and runs the power-up
/// self-tests to ensure the digest and generator primitives are working
/// correctly.
///
/// # Errors
///
/// Returns an error if:
/// - The default configuration fails validation (should not happen with defaults)
/// - Any power-up self-test fails (SHA-256 KAT, Whirlpool KAT, or the
///   generator smoke test)
pub fn init() -> Result<()> {
    let config = GeneratorConfig::default();
    config.validate()?;

    run_power_up_self_tests()?;

    Ok(())
}

/// Initializes the strand-core library with a custom configuration.
///
/// This function validates the provided configuration and runs the power-up
/// self-tests to ensure the digest and generator primitives are working
/// correctly.
///
/// # Errors
///
/// Returns an error if:
/// - The provided configuration fails validation (e.g., a health sample
///   size below the statistical minimum)
/// - Any power-up self-test fails (SHA-256 KAT, Whirlpool KAT, or the
///   generator smoke test)
pub fn init_with_config(config: &GeneratorConfig) -> Result<()> {
    config.validate()?;

    run_power_up_self_tests()?;

    Ok(())
}

/// Check if the power-up self-tests have passed
#[must_use]
pub fn self_tests_passed() -> bool {
    SELF_TESTS_PASSED.load(Ordering::SeqCst)
}

/// Lazily run the power-up self-tests before serving a request.
///
/// Callers that never invoke [`init`] still get the self-test gate on
/// their first generation call; once the tests have passed, the latch
/// short-circuits every later call.
pub(crate) fn ensure_ready() -> Result<()> {
    if self_tests_passed() {
        return Ok(());
    }
    run_power_up_self_tests()
}

/// Run power-up self-tests over the digest and generator primitives
fn run_power_up_self_tests() -> Result<()> {
    use sha2::{Digest, Sha256};

    // Test 1: SHA-256 KAT
    let mut hasher = Sha256::new();
    hasher.update(b"abc");
    let hash = hasher.finalize();
    let expected_sha256 = [
        0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22,
        0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00,
        0x15, 0xad,
    ];
    if hash.as_slice() != expected_sha256 {
        return Err(GenerationError::SelfTestFailed {
            component: "SHA-256".to_string(),
            status: "KAT failed".to_string(),
        });
    }

    // Test 2: Whirlpool KAT
    let mut hasher = whirlpool::Whirlpool::new();
    hasher.update(b"abc");
    let hash = hasher.finalize();
    let expected_whirlpool = "4e2448a4c6f486bb16b6562c73b4020bf3043e3a731bce721ae1b303d97e6d4c\
                              7181eebdb6c57e277d0e34957114cbd6c797fc9d95d8b582d225292076d4eef5";
    if hex::encode(hash) != expected_whirlpool {
        return Err(GenerationError::SelfTestFailed {
            component: "Whirlpool".to_string(),
            status: "KAT failed".to_string(),
        });
    }

    // Test 3: Generator smoke test - two draws from a working CSPRNG
    // cannot produce the same 32 bytes
    let smoke_failure = |e: rand::Error| GenerationError::SelfTestFailed {
        component: "CSPRNG".to_string(),
        status: format!("draw failed: {e}"),
    };
    let mut first = [0u8; 32];
    let mut second = [0u8; 32];
    OsRng.try_fill_bytes(&mut first).map_err(smoke_failure)?;
    OsRng.try_fill_bytes(&mut second).map_err(smoke_failure)?;
    if first == second {
        return Err(GenerationError::SelfTestFailed {
            component: "CSPRNG".to_string(),
            status: "repeated output across draws".to_string(),
        });
    }

    // All tests passed - set self-test status
    SELF_TESTS_PASSED.store(true, Ordering::SeqCst);
    Ok(())
}

#[cfg(test)]
mod tests;
