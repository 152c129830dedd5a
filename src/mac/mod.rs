#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Message Authentication Codes
//!
//! HMAC (FIPS 198-1) dispatched over the hash registry.

pub mod hmac;

pub use hmac::*;
