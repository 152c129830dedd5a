#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! HMAC (Hash-based Message Authentication Code)
//!
//! Keyed hashing over the algorithm registry, using the audited `hmac` crate
//! from RustCrypto. The HMAC construction is
//! `H((K ⊕ opad) || H((K ⊕ ipad) || text))` per FIPS 198-1; key padding and
//! the hash-keys-longer-than-block-size rule are handled by the provider, so
//! keys of any length (including empty) are accepted.
//!
//! The PRF type aliases below are the concrete capabilities the key
//! derivation loop in [`crate::kdf`] dispatches to.

use digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_384, Sha3_512};

use crate::hash::HashAlgorithm;

/// HMAC-SHA1.
pub type HmacSha1 = Hmac<Sha1>;
/// HMAC-SHA256.
pub type HmacSha256 = Hmac<Sha256>;
/// HMAC-SHA384.
pub type HmacSha384 = Hmac<Sha384>;
/// HMAC-SHA512.
pub type HmacSha512 = Hmac<Sha512>;
/// HMAC-SHA3-256.
pub type HmacSha3_256 = Hmac<Sha3_256>;
/// HMAC-SHA3-384.
pub type HmacSha3_384 = Hmac<Sha3_384>;
/// HMAC-SHA3-512.
pub type HmacSha3_512 = Hmac<Sha3_512>;

/// Compute the raw HMAC tag of `message` under `key`.
///
/// The tag is `algorithm.output_len()` octets. Any key length is valid.
///
/// # Example
/// ```
/// use passkdf::{hmac, HashAlgorithm};
///
/// let tag = hmac(HashAlgorithm::Sha256, b"my secret key", b"message");
/// assert_eq!(tag.len(), 32);
/// ```
#[must_use]
pub fn hmac(algorithm: HashAlgorithm, key: &[u8], message: &[u8]) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Sha1 => keyed_digest::<HmacSha1>(key, message),
        HashAlgorithm::Sha256 => keyed_digest::<HmacSha256>(key, message),
        HashAlgorithm::Sha384 => keyed_digest::<HmacSha384>(key, message),
        HashAlgorithm::Sha512 => keyed_digest::<HmacSha512>(key, message),
        HashAlgorithm::Sha3_256 => keyed_digest::<HmacSha3_256>(key, message),
        HashAlgorithm::Sha3_384 => keyed_digest::<HmacSha3_384>(key, message),
        HashAlgorithm::Sha3_512 => keyed_digest::<HmacSha3_512>(key, message),
    }
}

fn keyed_digest<M>(key: &[u8], message: &[u8]) -> Vec<u8>
where
    M: Mac + KeyInit,
{
    let mut mac = <M as KeyInit>::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}
