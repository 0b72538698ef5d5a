//! HMAC-SHA256 digest published before the player moves.

use super::{HmacKey, DIGEST_LEN};
use crate::GameError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

/// MAC = HMAC-SHA256(key, message)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacDigest(#[serde(with = "super::hex_serde")] [u8; DIGEST_LEN]);

impl MacDigest {
    /// Compute the MAC of `message` under `key`
    pub fn compute(key: &HmacKey, message: &[u8]) -> Self {
        let mut mac = keyed(key);
        mac.update(message);
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Verify that `key` and `message` produce this digest.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &HmacKey, message: &[u8]) -> bool {
        let mut mac = keyed(key);
        mac.update(message);
        mac.verify_slice(&self.0).is_ok()
    }
}

fn keyed(key: &HmacKey) -> HmacSha256 {
    HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length")
}

impl fmt::Debug for MacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacDigest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for MacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for MacDigest {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::decode_hex(s).map(Self)
    }
}
