//! API Stability Tests
//!
//! This module ensures backward compatibility across Strand versions.
//!
//! ## Test Categories
//!
//! - **Source Identifiers**: The entropy source name set and spellings
//! - **Wire Format**: Bundle field names, order, and digest widths
//! - **Error Contract**: Classification tags and report shapes
//!
//! ## Purpose
//!
//! Deployed consumers parse our identifiers, field names, and error tags.
//! These tests catch accidental breaking changes before release.

pub mod source_identifiers;
pub mod wire_format;

#[cfg(test)]
mod tests {
    #[test]
    fn api_stability_modules_load() {
        // Ensures all API stability test modules compile correctly
    }
}
