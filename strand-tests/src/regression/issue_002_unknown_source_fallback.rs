//! Regression test for issue #002
//!
//! **Issue**: Unknown source names fell back to the OS CSPRNG
//! **Link**: https://github.com/strand-rs/strand/issues/2
//!
//! ## Bug Description
//!
//! A request naming an unrecognized entropy source was silently served
//! from the OS CSPRNG. Operators auditing where their randomness came
//! from saw the name they requested in their own logs while the bytes
//! actually came from a different backend, and typos in deployment
//! configuration went unnoticed for months.
//!
//! ## Fix Description
//!
//! Source identifiers are parsed strictly and case-sensitively. Any name
//! outside the supported set fails with `UnknownSource` carrying the
//! offending name; no request is ever served by a source other than the
//! one named.
//!
//! ## Test Strategy
//!
//! Verify that unknown, near-miss, and legacy names are all rejected and
//! that the error echoes the exact name, so a typo is visible in the
//! report.
