//! Derived representations of generated bytes.
//!
//! Every generation request returns a [`DerivedBundle`]: the raw bytes
//! plus four textual forms derived from them. Derivation is a pure
//! function of the raw bytes; two bundles built from the same input are
//! identical.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use whirlpool::Whirlpool;

/// A generation result: raw bytes and their derived representations.
///
/// The serialized field names (`raw`, `hex`, `sha`, `shabytes`,
/// `whirlpool`) are a stable wire contract consumed by downstream
/// tooling; do not rename them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedBundle {
    /// The raw generated bytes.
    pub raw: Vec<u8>,
    /// Uppercase hex encoding of `raw`, two characters per byte.
    pub hex: String,
    /// Lowercase hex SHA-256 digest of `raw` (64 characters).
    pub sha: String,
    /// The 32 SHA-256 digest bytes as comma-joined decimal values.
    pub shabytes: String,
    /// Lowercase hex Whirlpool digest of `raw` (128 characters).
    pub whirlpool: String,
}

impl DerivedBundle {
    /// Derives the full bundle from raw bytes.
    #[must_use]
    pub fn from_raw(raw: Vec<u8>) -> Self {
        let digest = sha256_digest(&raw);

        Self {
            hex: hex::encode_upper(&raw),
            sha: hex::encode(digest),
            shabytes: decimal_bytes(&digest),
            whirlpool: whirlpool_hex(&raw),
            raw,
        }
    }

    /// Number of raw bytes in the bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the bundle carries no raw bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

fn sha256_digest(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

fn whirlpool_hex(data: &[u8]) -> String {
    let mut hasher = Whirlpool::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

fn decimal_bytes(digest: &[u8; 32]) -> String {
    digest.iter().map(|byte| byte.to_string()).collect::<Vec<_>>().join(",")
}
