#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Hash Algorithm Registry
//!
//! Gates access to the supported hash algorithms (SHA-1, SHA-2, SHA-3) and
//! exposes their digest sizes.

pub mod algorithm;

pub use algorithm::*;
