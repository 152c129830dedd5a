#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Key Derivation Functions
//!
//! PBKDF2 (RFC 2898 §5.2 / NIST SP 800-132) with HMAC as the pseudorandom
//! function.

pub mod pbkdf2;

pub use pbkdf2::*;
