#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Hash algorithm selection and digest-length measurement.
//!
//! Algorithms are selected by registry name at the API boundary and resolved
//! to an enumerated capability before any hashing is attempted, so an unknown
//! name fails with a controlled [`Error::InvalidAlgorithm`] instead of a
//! provider-specific error deeper in the call.

use std::fmt;
use std::str::FromStr;

use digest::Digest;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_384, Sha3_512};

use crate::error::{Error, Result};

/// A hash algorithm supported by the registry.
///
/// Each variant resolves to a concrete digest implementation from the
/// RustCrypto provider crates. The registry names (`"sha256"`, `"sha3-256"`,
/// ...) are the wire and API form; [`HashAlgorithm::resolve`] maps a name to
/// its capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-1 (FIPS 180-4). Kept for interoperability with existing PBKDF2
    /// deployments and the RFC 6070 test vectors; prefer SHA-2 for new keys.
    #[serde(rename = "sha1")]
    Sha1,
    /// SHA-256 (FIPS 180-4). The registry default.
    #[serde(rename = "sha256")]
    Sha256,
    /// SHA-384 (FIPS 180-4).
    #[serde(rename = "sha384")]
    Sha384,
    /// SHA-512 (FIPS 180-4).
    #[serde(rename = "sha512")]
    Sha512,
    /// SHA3-256 (FIPS 202).
    #[serde(rename = "sha3-256")]
    Sha3_256,
    /// SHA3-384 (FIPS 202).
    #[serde(rename = "sha3-384")]
    Sha3_384,
    /// SHA3-512 (FIPS 202).
    #[serde(rename = "sha3-512")]
    Sha3_512,
}

impl HashAlgorithm {
    /// Every algorithm the registry supports, in registry-name order.
    pub const ALL: [HashAlgorithm; 7] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
    ];

    /// Resolve a registry name to its algorithm.
    ///
    /// Names are matched exactly (lowercase, as listed by
    /// [`HashAlgorithm::ALL`]).
    ///
    /// # Errors
    /// Returns [`Error::InvalidAlgorithm`] for any name outside the
    /// supported set.
    pub fn resolve(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| Error::InvalidAlgorithm(name.to_string()))
    }

    /// The registry name of this algorithm.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
        }
    }

    /// One-shot digest of `data`.
    #[must_use]
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1 => digest_with::<Sha1>(data),
            Self::Sha256 => digest_with::<Sha256>(data),
            Self::Sha384 => digest_with::<Sha384>(data),
            Self::Sha512 => digest_with::<Sha512>(data),
            Self::Sha3_256 => digest_with::<Sha3_256>(data),
            Self::Sha3_384 => digest_with::<Sha3_384>(data),
            Self::Sha3_512 => digest_with::<Sha3_512>(data),
        }
    }

    /// Digest length in octets.
    ///
    /// Measured by digesting the empty input rather than read from a table,
    /// so it stays correct for anything the providers supply.
    #[must_use]
    pub fn output_len(self) -> usize {
        self.digest(&[]).len()
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::Sha256
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::resolve(name)
    }
}

/// Check that `name` is a supported hash algorithm.
///
/// # Errors
/// Returns [`Error::InvalidAlgorithm`] for any name outside the supported
/// set.
pub fn assert_valid_algorithm(name: &str) -> Result<()> {
    HashAlgorithm::resolve(name).map(|_| ())
}

/// Digest length in octets of the named algorithm.
///
/// # Errors
/// Returns [`Error::InvalidAlgorithm`] for any name outside the supported
/// set.
pub fn hash_length(name: &str) -> Result<usize> {
    Ok(HashAlgorithm::resolve(name)?.output_len())
}

fn digest_with<D: Digest>(data: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests use unwrap for simplicity
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_resolve_every_registry_name() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(HashAlgorithm::resolve(algorithm.name()).unwrap(), algorithm);
        }
    }

    #[test]
    fn test_resolve_unknown_name() {
        let result = HashAlgorithm::resolve("md5");
        assert_eq!(result, Err(Error::InvalidAlgorithm("md5".to_string())));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(HashAlgorithm::resolve("SHA256").is_err());
        assert!(HashAlgorithm::resolve("Sha3-256").is_err());
    }

    #[test]
    fn test_resolve_empty_name() {
        assert!(HashAlgorithm::resolve("").is_err());
    }

    #[test]
    fn test_output_lengths() {
        assert_eq!(HashAlgorithm::Sha1.output_len(), 20);
        assert_eq!(HashAlgorithm::Sha256.output_len(), 32);
        assert_eq!(HashAlgorithm::Sha384.output_len(), 48);
        assert_eq!(HashAlgorithm::Sha512.output_len(), 64);
        assert_eq!(HashAlgorithm::Sha3_256.output_len(), 32);
        assert_eq!(HashAlgorithm::Sha3_384.output_len(), 48);
        assert_eq!(HashAlgorithm::Sha3_512.output_len(), 64);
    }

    #[test]
    fn test_hash_length_matches_empty_digest() {
        for algorithm in HashAlgorithm::ALL {
            let measured = hash_length(algorithm.name()).unwrap();
            assert_eq!(measured, algorithm.digest(b"").len());
        }
    }

    #[test]
    fn test_hash_length_unknown_name() {
        assert!(hash_length("whirlpool").is_err());
    }

    #[test]
    fn test_assert_valid_algorithm() {
        assert!(assert_valid_algorithm("sha512").is_ok());
        assert_eq!(
            assert_valid_algorithm("crc32"),
            Err(Error::InvalidAlgorithm("crc32".to_string()))
        );
    }

    #[test]
    fn test_sha256_empty_input() {
        // NIST test vector for empty input
        let expected = hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
        assert_eq!(HashAlgorithm::Sha256.digest(b""), expected);
    }

    #[test]
    fn test_sha1_abc() {
        let expected = hex!("a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(HashAlgorithm::Sha1.digest(b"abc"), expected);
    }

    #[test]
    fn test_sha3_256_empty_input() {
        let expected = hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a");
        assert_eq!(HashAlgorithm::Sha3_256.digest(b""), expected);
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for algorithm in HashAlgorithm::ALL {
            let name = algorithm.to_string();
            assert_eq!(name.parse::<HashAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_default_is_sha256() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
    }

    #[test]
    fn test_serde_uses_registry_names() {
        let json = serde_json::to_string(&HashAlgorithm::Sha3_256).unwrap();
        assert_eq!(json, "\"sha3-256\"");
        let back: HashAlgorithm = serde_json::from_str("\"sha1\"").unwrap();
        assert_eq!(back, HashAlgorithm::Sha1);
    }
}
