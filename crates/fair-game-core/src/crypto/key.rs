//! Secret HMAC key.

use super::{EntropySource, DIGEST_LEN};
use crate::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 256-bit HMAC key, kept secret until the reveal
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacKey(#[serde(with = "super::hex_serde")] [u8; DIGEST_LEN]);

impl HmacKey {
    /// Draw a fresh key from a secure source
    pub fn generate<R: EntropySource + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

// Prefix only: the full key must not reach logs before the reveal.
impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey({}..)", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for HmacKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::decode_hex(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_keys_differ() {
        let mut rng = rand::thread_rng();
        let key1 = HmacKey::generate(&mut rng);
        let key2 = HmacKey::generate(&mut rng);

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let key1 = HmacKey::generate(&mut StdRng::seed_from_u64(7));
        let key2 = HmacKey::generate(&mut StdRng::seed_from_u64(7));

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_display_is_full_hex() {
        let key = HmacKey::from_bytes([0x0f; DIGEST_LEN]);
        let shown = key.to_string();

        assert_eq!(shown.len(), 64);
        assert_eq!(shown, "0f".repeat(DIGEST_LEN));
    }

    #[test]
    fn test_debug_shows_only_prefix() {
        let key = HmacKey::from_bytes([0xaa; DIGEST_LEN]);
        let debug = format!("{:?}", key);

        assert_eq!(debug, format!("HmacKey({}..)", "aa".repeat(8)));
        assert!(!debug.contains(&key.to_string()));
    }

    #[test]
    fn test_parse_from_display() {
        let key = HmacKey::generate(&mut rand::thread_rng());
        let parsed: HmacKey = key.to_string().parse().unwrap();

        assert_eq!(key, parsed);
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let key = HmacKey::from_bytes([1; DIGEST_LEN]);
        let json = serde_json::to_string(&key).unwrap();

        assert_eq!(json, format!("\"{}\"", "01".repeat(DIGEST_LEN)));
    }
}
