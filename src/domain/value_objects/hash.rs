//! Content Hash Value Object
//!
//! A SHA-256 digest of an asset's bytes, truncated for use in filenames.
//! The truncated form is what makes an asset URL cache-busting: it only
//! changes when the bytes change.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::{WidgetpackError, WidgetpackResult};

/// Number of hex characters kept from the digest
///
/// `4` keeps URLs short for low-fanout deployments, `8` is the
/// collision-safe default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashLength(usize);

impl HashLength {
    /// Full SHA-256 hex length
    pub const MAX: usize = 64;
    /// Short URLs, simple deployments
    pub const SHORT: HashLength = HashLength(4);
    /// Default policy
    pub const DEFAULT: HashLength = HashLength(8);

    /// Create a validated hash length
    pub fn new(len: usize) -> WidgetpackResult<Self> {
        if len == 0 || len > Self::MAX {
            return Err(WidgetpackError::InvalidHashLength(len));
        }
        Ok(Self(len))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for HashLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for HashLength {
    type Error = WidgetpackError;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        Self::new(len)
    }
}

/// Truncated content hash (lowercase hex)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    /// Hash `bytes` and keep the first `length` hex characters
    pub fn of(bytes: &[u8], length: HashLength) -> Self {
        let digest = Sha256::digest(bytes);
        let mut hex = format!("{:x}", digest);
        hex.truncate(length.get());
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Hash `bytes` to a `length`-character hex string
pub fn hash(bytes: &[u8], length: HashLength) -> String {
    ContentHash::of(bytes, length).0
}
