//! Error types for the passkdf crate.

/// Errors that can occur during key derivation.
///
/// Both reachable variants are caller-input errors, detected before any
/// cryptographic work begins and propagated immediately. Nothing is retried
/// or logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested algorithm name is not in the registry's supported set.
    #[error("\"{0}\" is not a supported hashing algorithm")]
    InvalidAlgorithm(String),

    /// The salt is shorter than the 8-octet (64-bit) minimum.
    #[error("salt is {actual} octets long, need at least 8 octets (64 bits)")]
    InvalidSalt {
        /// Actual salt length in octets.
        actual: usize,
    },

    /// The requested key length exceeds the RFC 2898 §5.2 maximum of
    /// `hLen × (2^32 − 1)` octets ("derived key too long").
    #[error("derived key of {requested} octets is too long for a 32-bit block counter")]
    KeyTooLong {
        /// Requested key length in octets.
        requested: usize,
    },
}

/// Result type alias for passkdf operations.
pub type Result<T> = std::result::Result<T, Error>;
