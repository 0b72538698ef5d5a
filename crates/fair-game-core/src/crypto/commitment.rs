//! Key and digest binding the computer to its move.

use super::{EntropySource, HmacKey, MacDigest};

/// Commitment = (key, HMAC(key, move))
///
/// The digest is public from the moment the commitment exists. The key stays
/// inside until [`Commitment::reveal`] hands out a copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commitment {
    key: HmacKey,
    mac: MacDigest,
}

impl Commitment {
    /// Commit to `message` under a freshly generated key
    pub fn new<R: EntropySource + ?Sized>(rng: &mut R, message: &[u8]) -> Self {
        Self::with_key(HmacKey::generate(rng), message)
    }

    /// Commit to `message` under a known key
    pub fn with_key(key: HmacKey, message: &[u8]) -> Self {
        let mac = MacDigest::compute(&key, message);
        Self { key, mac }
    }

    /// The published digest
    pub fn mac(&self) -> &MacDigest {
        &self.mac
    }

    /// Disclose the key
    pub fn reveal(&self) -> HmacKey {
        self.key.clone()
    }

    /// Verify that `message` is what was committed to
    pub fn verify(&self, message: &[u8]) -> bool {
        self.mac.verify(&self.key, message)
    }
}
