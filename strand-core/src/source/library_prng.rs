#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Platform RNG provider via the `getrandom` crate.
//!
//! Delegates to the operating system's native randomness call
//! (`getrandom(2)`, `getentropy`, `BCryptGenRandom`, and so on). Any
//! failure the library reports is surfaced as
//! [`GenerationError::Unavailable`].

use super::EntropySource;
use crate::error::{GenerationError, Result};

pub(crate) fn fetch(length: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; length];

    getrandom::fill(&mut bytes).map_err(|e| GenerationError::Unavailable {
        source: EntropySource::LibraryPrng.as_str(),
        reason: e.to_string(),
    })?;

    Ok(bytes)
}
