//! Cryptographic primitives for the Fair Game protocol.
//!
//! This module provides:
//! - HmacKey, the secret revealed after the player moves
//! - MacDigest, the HMAC-SHA256 published before the player moves
//! - Commitment, the key and digest bound to the computer's move
//! - EntropySource, the secure randomness every draw goes through

mod commitment;
mod key;
mod mac;

pub use commitment::Commitment;
pub use key::HmacKey;
pub use mac::MacDigest;

use rand::{CryptoRng, RngCore};

/// Cryptographically secure randomness.
///
/// Anything implementing `RngCore + CryptoRng` qualifies: `OsRng` or
/// `thread_rng()` in production, a seeded `StdRng` in tests.
pub trait EntropySource: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng + ?Sized> EntropySource for T {}

/// Length in bytes of keys and digests
pub const DIGEST_LEN: usize = 32;

fn decode_hex(s: &str) -> Result<[u8; DIGEST_LEN], crate::GameError> {
    let bytes = hex::decode(s.trim()).map_err(|e| crate::GameError::InvalidHex(e.to_string()))?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        crate::GameError::InvalidHex(format!(
            "expected {} bytes, got {}",
            DIGEST_LEN,
            bytes.len()
        ))
    })
}

mod hex_serde {
    use super::DIGEST_LEN;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; DIGEST_LEN], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; DIGEST_LEN], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}
