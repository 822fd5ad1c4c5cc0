#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Raw entropy device provider.
//!
//! Reads directly from `/dev/urandom`. The device is the whole point of
//! this source, so there is no fallback: on platforms without it
//! (Windows among them) the request is rejected with
//! [`GenerationError::PlatformUnsupported`].

use super::EntropySource;
use crate::error::{GenerationError, Result};

#[cfg(unix)]
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

/// Entropy device consulted on unix-family systems.
#[cfg(unix)]
const ENTROPY_DEVICE: &str = "/dev/urandom";

#[cfg(any(unix, test))]
fn read_failure(requested: usize, obtained: usize, reason: String) -> GenerationError {
    GenerationError::ReadFailure { requested, obtained, reason }
}

#[cfg(unix)]
pub(crate) fn fetch(length: usize) -> Result<Vec<u8>> {
    if !Path::new(ENTROPY_DEVICE).exists() {
        return Err(GenerationError::PlatformUnsupported {
            source: EntropySource::RawDevice.as_str(),
            platform: std::env::consts::OS,
        });
    }

    let mut file =
        File::open(ENTROPY_DEVICE).map_err(|e| read_failure(length, 0, e.to_string()))?;

    let mut bytes = vec![0u8; length];
    let mut filled = 0usize;

    // read() may return short on device files; keep going until the
    // buffer is full or the device gives up.
    while filled < length {
        match file.read(&mut bytes[filled..]) {
            Ok(0) => break,
            Ok(n) => filled = filled.saturating_add(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(read_failure(length, filled, e.to_string())),
        }
    }

    if filled < length {
        return Err(read_failure(
            length,
            filled,
            "entropy device returned a short read".to_string(),
        ));
    }

    Ok(bytes)
}

#[cfg(not(unix))]
pub(crate) fn fetch(_length: usize) -> Result<Vec<u8>> {
    Err(GenerationError::PlatformUnsupported {
        source: EntropySource::RawDevice.as_str(),
        platform: std::env::consts::OS,
    })
}
