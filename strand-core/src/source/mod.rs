//! Entropy source providers.
//!
//! Three interchangeable byte sources sit behind one contract: given a
//! requested length, return exactly that many raw bytes or a classified
//! error. Sources never fall back to one another; the caller picked a
//! source and gets that source's answer.
//!
//! | Identifier      | Backend                                  |
//! |-----------------|------------------------------------------|
//! | `secure_prng`   | OS CSPRNG with entropy health verification |
//! | `raw_device`    | Direct `/dev/urandom` read (unix only)   |
//! | `library_prng`  | Platform randomness via `getrandom`      |

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

pub mod health;

mod library_prng;
mod raw_device;
mod secure_prng;

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::config::GeneratorConfig;
use crate::error::{GenerationError, Result};

/// An entropy source a generation request can name.
///
/// The string identifiers are a stable part of the public contract and
/// are matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntropySource {
    /// OS CSPRNG with strength verification (`"secure_prng"`).
    SecurePrng,
    /// Direct entropy device read, unix-family systems only (`"raw_device"`).
    RawDevice,
    /// Platform randomness call via the `getrandom` crate (`"library_prng"`).
    LibraryPrng,
}

impl EntropySource {
    /// Every supported source, in documentation order.
    pub const ALL: [EntropySource; 3] =
        [Self::SecurePrng, Self::RawDevice, Self::LibraryPrng];

    /// The stable string identifier for this source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SecurePrng => "secure_prng",
            Self::RawDevice => "raw_device",
            Self::LibraryPrng => "library_prng",
        }
    }
}

impl fmt::Display for EntropySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntropySource {
    type Err = GenerationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "secure_prng" => Ok(Self::SecurePrng),
            "raw_device" => Ok(Self::RawDevice),
            "library_prng" => Ok(Self::LibraryPrng),
            other => Err(GenerationError::UnknownSource(other.to_string())),
        }
    }
}

/// Fetch raw bytes from the chosen provider.
///
/// This is the provider layer only: no request floor, no derivation.
/// Most callers want [`crate::generate`] instead.
///
/// # Errors
///
/// Propagates the provider's classified error:
/// [`GenerationError::WeakRandomness`] from `secure_prng` verification,
/// [`GenerationError::PlatformUnsupported`] or
/// [`GenerationError::ReadFailure`] from `raw_device`, and
/// [`GenerationError::Unavailable`] from `library_prng`.
pub fn fetch(source: EntropySource, length: usize, config: &GeneratorConfig) -> Result<Vec<u8>> {
    trace!(source = %source, length = length, "Fetching raw bytes");

    match source {
        EntropySource::SecurePrng => secure_prng::fetch(length, config),
        EntropySource::RawDevice => raw_device::fetch(length),
        EntropySource::LibraryPrng => library_prng::fetch(length),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_parse_to_their_source() {
        assert_eq!("secure_prng".parse::<EntropySource>().unwrap(), EntropySource::SecurePrng);
        assert_eq!("raw_device".parse::<EntropySource>().unwrap(), EntropySource::RawDevice);
        assert_eq!("library_prng".parse::<EntropySource>().unwrap(), EntropySource::LibraryPrng);
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        let result = "mcrypt".parse::<EntropySource>();
        assert!(matches!(result, Err(GenerationError::UnknownSource(ref s)) if s == "mcrypt"));
    }

    #[test]
    fn test_identifiers_are_case_sensitive() {
        assert!("Secure_PRNG".parse::<EntropySource>().is_err());
        assert!("RAW_DEVICE".parse::<EntropySource>().is_err());
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        assert!("".parse::<EntropySource>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for source in EntropySource::ALL {
            let parsed = source.to_string().parse::<EntropySource>().unwrap();
            assert_eq!(parsed, source);
        }
    }

    #[test]
    fn test_fetch_dispatches_to_library_prng() {
        let config = GeneratorConfig::for_development();
        let bytes = fetch(EntropySource::LibraryPrng, 16, &config).unwrap();
        assert_eq!(bytes.len(), 16);
    }

    #[test]
    fn test_fetch_dispatches_to_secure_prng() {
        let config = GeneratorConfig::for_development();
        let bytes = fetch(EntropySource::SecurePrng, 16, &config).unwrap();
        assert_eq!(bytes.len(), 16);
    }
}
