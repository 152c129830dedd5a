#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # passkdf
//!
//! Password-based key derivation (PBKDF2, RFC 2898) over a runtime-selectable
//! keyed-hash primitive.
//!
//! Given a low-entropy secret, a caller-supplied salt, an iteration count and
//! a desired output length, [`derive`] produces a key that is computationally
//! expensive to brute-force. The pseudorandom function is HMAC over any hash
//! algorithm from the registry; digests are supplied by the audited
//! RustCrypto crates (`sha1`, `sha2`, `sha3`, `hmac`).
//!
//! ## Modules
//!
//! - **hash**: the algorithm registry — name validation and digest-length
//!   measurement ([`HashAlgorithm`], [`hash_length`])
//! - **mac**: HMAC dispatch over the registry ([`hmac()`])
//! - **kdf**: the RFC 2898 §5.2 derivation loop ([`derive`], [`pbkdf2()`])
//!
//! ## Example
//!
//! ```
//! use passkdf::derive;
//!
//! let key = derive(b"correct horse", b"0123456789abcdef", 10_000, 32, "sha256")?;
//! assert_eq!(key.len(), 32);
//! # Ok::<(), passkdf::Error>(())
//! ```
//!
//! ## Standards
//!
//! - PBKDF2: RFC 2898 §5.2 / NIST SP 800-132
//! - HMAC: FIPS 198-1
//! - Test vectors: RFC 6070, RFC 7914 §11
//!
//! Salt generation, secure comparison and derived-key storage formats are out
//! of scope; the salt is caller-supplied and only its length is checked.

pub mod error;
pub mod hash;
pub mod kdf;
pub mod mac;

pub use error::{Error, Result};
pub use hash::*;
pub use kdf::*;
pub use mac::*;
