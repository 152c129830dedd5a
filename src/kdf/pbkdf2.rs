#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! RFC 2898: Password-Based Key Derivation Function 2 (PBKDF2)
//!
//! PBKDF2 stretches a low-entropy secret into a derived key of arbitrary
//! length by salting it and re-applying a pseudorandom function (HMAC) once
//! per iteration, making brute-force attacks proportionally more expensive.
//!
//! Two layers:
//!
//! - [`pbkdf2`] is the raw RFC 2898 §5.2 engine, generic over the PRF. It is
//!   total: any password, salt and iteration count produce output.
//! - [`derive`] / [`derive_with`] are the registry-gated surface: the
//!   algorithm name is validated first, then the salt floor (8 octets) and
//!   the RFC length cap, then the engine runs. These are what callers
//!   deriving keys from passwords should use.
//!
//! Iteration counts should be at least 1000; values in the 10^4 to 10^6
//! region are common. The cost of a call is
//! `ceil(key_length / hLen) × iteration_count` HMAC applications.

use std::fmt;

use digest::{FixedOutput, KeyInit, Update};
use tracing::instrument;
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;
use crate::mac::{
    HmacSha1, HmacSha256, HmacSha384, HmacSha512, HmacSha3_256, HmacSha3_384, HmacSha3_512,
};

/// Minimum salt length in octets (64 bits), as recommended by RFC 2898 §4.1.
pub const MIN_SALT_LEN: usize = 8;

/// A derived key.
///
/// Holds exactly the requested number of octets and wipes them when dropped.
/// `Debug` is redacted so key material cannot reach logs. There is no
/// equality impl: comparing derived keys safely is the caller's concern.
#[derive(Clone)]
pub struct DerivedKey {
    bytes: Vec<u8>,
}

impl DerivedKey {
    /// The derived key material.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in octets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the key is empty (a zero-length derivation).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the key, handing ownership of the bytes to the caller.
    ///
    /// The caller becomes responsible for wiping them.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Zeroize for DerivedKey {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey").field("octets", &self.bytes.len()).finish_non_exhaustive()
    }
}

/// Derive a key from a password, PBKDF2 with HMAC over the named algorithm.
///
/// The algorithm name is resolved against the registry before anything else,
/// then the salt is checked against [`MIN_SALT_LEN`]. The derivation itself
/// is a pure function of its inputs: no randomness, no retained state, and
/// calls may run concurrently without coordination.
///
/// # Arguments
/// * `password` - Secret material, any length (empty is accepted)
/// * `salt` - At least 8 octets of caller-supplied random data
/// * `iteration_count` - HMAC applications per block; `1` means a single
///   application, `0` is accepted and behaves like `1`
/// * `key_length` - Desired output length in octets; `0` yields an empty key
/// * `algorithm` - Registry name of the hash, e.g. `"sha256"`
///
/// # Example
/// ```
/// use passkdf::derive;
///
/// let key = derive(b"hunter2", b"f61049d1d8f9a76e", 10_000, 32, "sha256")?;
/// assert_eq!(key.len(), 32);
/// # Ok::<(), passkdf::Error>(())
/// ```
///
/// # Errors
/// [`Error::InvalidAlgorithm`] for an unknown name, [`Error::InvalidSalt`]
/// for a salt under 8 octets, [`Error::KeyTooLong`] past the RFC 2898 cap of
/// `hLen × (2^32 − 1)` octets. No other failure exists.
#[instrument(level = "debug", skip(password, salt), fields(salt_len = salt.len()))]
pub fn derive(
    password: &[u8],
    salt: &[u8],
    iteration_count: u32,
    key_length: usize,
    algorithm: &str,
) -> Result<DerivedKey> {
    let algorithm = HashAlgorithm::resolve(algorithm)?;
    derive_with(algorithm, password, salt, iteration_count, key_length)
}

/// [`derive`] with the algorithm already resolved.
///
/// # Errors
/// [`Error::InvalidSalt`] for a salt under 8 octets, [`Error::KeyTooLong`]
/// past the RFC 2898 length cap.
#[instrument(level = "debug", skip(password, salt), fields(salt_len = salt.len()))]
pub fn derive_with(
    algorithm: HashAlgorithm,
    password: &[u8],
    salt: &[u8],
    iteration_count: u32,
    key_length: usize,
) -> Result<DerivedKey> {
    assert_valid_salt(salt)?;

    // RFC 2898 §5.2 step 1: "if dkLen > (2^32 - 1) * hLen, output 'derived
    // key too long' and stop". Keeps the 32-bit block counter exact.
    if key_length.div_ceil(algorithm.output_len()) > u32::MAX as usize {
        return Err(Error::KeyTooLong { requested: key_length });
    }

    let mut bytes = vec![0u8; key_length];
    match algorithm {
        HashAlgorithm::Sha1 => pbkdf2::<HmacSha1>(password, salt, iteration_count, &mut bytes),
        HashAlgorithm::Sha256 => pbkdf2::<HmacSha256>(password, salt, iteration_count, &mut bytes),
        HashAlgorithm::Sha384 => pbkdf2::<HmacSha384>(password, salt, iteration_count, &mut bytes),
        HashAlgorithm::Sha512 => pbkdf2::<HmacSha512>(password, salt, iteration_count, &mut bytes),
        HashAlgorithm::Sha3_256 => {
            pbkdf2::<HmacSha3_256>(password, salt, iteration_count, &mut bytes);
        }
        HashAlgorithm::Sha3_384 => {
            pbkdf2::<HmacSha3_384>(password, salt, iteration_count, &mut bytes);
        }
        HashAlgorithm::Sha3_512 => {
            pbkdf2::<HmacSha3_512>(password, salt, iteration_count, &mut bytes);
        }
    }
    Ok(DerivedKey { bytes })
}

/// Check that the salt is at least 8 octets (64 bits) long.
///
/// Length is measured in raw octets; salts are byte arrays, never text. A
/// namespaced salt must still contain 8 octets of random data.
///
/// # Errors
/// Returns [`Error::InvalidSalt`] for a shorter salt.
pub fn assert_valid_salt(salt: &[u8]) -> Result<()> {
    if salt.len() < MIN_SALT_LEN {
        return Err(Error::InvalidSalt { actual: salt.len() });
    }
    Ok(())
}

/// The raw PBKDF2 engine (RFC 2898 §5.2), generic over the PRF.
///
/// Fills `derived_key` completely; the output length is the buffer length.
/// Performs no input validation — the registry-gated [`derive`] is the
/// checked surface, and only it enforces the salt floor and the RFC length
/// cap, so outputs must stay below `hLen × 2^32` octets here.
///
/// The PRF is keyed once and cloned per application, so the iteration loop
/// allocates nothing.
///
/// # Example
/// ```
/// use passkdf::{pbkdf2, HmacSha1};
///
/// let mut key = [0u8; 20];
/// pbkdf2::<HmacSha1>(b"password", b"salt", 4096, &mut key);
/// ```
pub fn pbkdf2<Prf>(password: &[u8], salt: &[u8], iteration_count: u32, derived_key: &mut [u8])
where
    Prf: KeyInit + Update + FixedOutput + Clone,
{
    let prf = Prf::new_from_slice(password).expect("HMAC accepts keys of any length");

    for (index, chunk) in derived_key.chunks_mut(Prf::output_size()).enumerate() {
        // Block indices are 1-based per RFC 2898 §5.2.
        let block_index = (index as u32).wrapping_add(1);
        derive_block(&prf, salt, iteration_count, block_index, chunk);
    }
}

/// Produce block `T_i` and write its leading octets into `out`.
///
/// `U_1 = PRF(password, salt || BE32(i))`, then `U_j = PRF(password,
/// U_{j-1})` with every `U_j` XOR-folded into the block. An iteration count
/// of 0 or 1 leaves the block at exactly `U_1`. The final block is written
/// only up to `out.len()`, which truncates the concatenated stream to the
/// requested key length.
fn derive_block<Prf>(prf: &Prf, salt: &[u8], iteration_count: u32, block_index: u32, out: &mut [u8])
where
    Prf: Update + FixedOutput + Clone,
{
    let mut mac = prf.clone();
    mac.update(salt);
    mac.update(&block_index.to_be_bytes());
    let mut u = mac.finalize_fixed();

    let mut block = u.clone();
    for _ in 1..iteration_count {
        let mut mac = prf.clone();
        mac.update(&u);
        u = mac.finalize_fixed();
        for (acc, next) in block.iter_mut().zip(u.iter()) {
            *acc ^= next;
        }
    }

    for (dst, src) in out.iter_mut().zip(block.iter()) {
        *dst = *src;
    }
}
