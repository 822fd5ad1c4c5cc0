//! # strand-tests
//!
//! Comprehensive test suite for Strand providing:
//!
//! - **Regression Tests**: Prevent reintroduction of fixed bugs
//! - **API Stability Tests**: Ensure backward compatibility across versions
//! - **Concurrency Tests**: Verify thread-safe operation
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test -p strand-tests
//!
//! # Run specific category
//! cargo test -p strand-tests regression
//! cargo test -p strand-tests api_stability
//! cargo test -p strand-tests concurrency
//! ```
//!
//! ## Adding Regression Tests
//!
//! Each regression test should:
//! 1. Be in its own file: `src/regression/issue_NNN_description.rs`
//! 2. Include a doc comment describing the original bug
//! 3. Reproduce the exact bug condition
//! 4. Verify the fix works
//!
//! ## Test Naming Convention
//!
//! - Regression: `regression_issue_NNN_description`
//! - API Stability: `api_stability_<aspect>_<test>`
//! - Concurrency: `concurrent_<operation>_<scenario>`

#![allow(clippy::expect_used)] // Tests use expect for clarity

pub mod api_stability;
pub mod concurrency;
pub mod regression;

/// Shared test utilities
pub mod utils {
    use strand_core::DerivedBundle;

    /// Assert two byte slices are equal with descriptive message
    ///
    /// # Panics
    ///
    /// Panics if `left` and `right` are not equal, displaying the provided `context`.
    pub fn assert_bytes_eq(left: &[u8], right: &[u8], context: &str) {
        assert_eq!(left, right, "{}: byte slices differ at first mismatch", context);
    }

    /// Assert two byte slices are NOT equal
    ///
    /// # Panics
    ///
    /// Panics if `left` and `right` are equal, displaying the provided `context`.
    pub fn assert_bytes_ne(left: &[u8], right: &[u8], context: &str) {
        assert_ne!(left, right, "{}: byte slices should differ", context);
    }

    /// Assert a bundle carries every derived form at its documented width
    ///
    /// # Panics
    ///
    /// Panics if any derived field deviates from the wire contract for a
    /// raw payload of `expected_len` bytes.
    pub fn assert_wire_shapes(bundle: &DerivedBundle, expected_len: usize, context: &str) {
        assert_eq!(bundle.raw.len(), expected_len, "{context}: raw length");
        assert_eq!(bundle.hex.len(), expected_len * 2, "{context}: hex width");
        assert_eq!(bundle.sha.len(), 64, "{context}: sha width");
        assert_eq!(bundle.shabytes.split(',').count(), 32, "{context}: shabytes tokens");
        assert_eq!(bundle.whirlpool.len(), 128, "{context}: whirlpool width");
    }
}
