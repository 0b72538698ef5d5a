//! Protocol messages.

use crate::crypto::{HmacKey, MacDigest};
use crate::games::Outcome;
use crate::protocol::SessionId;
use serde::{Deserialize, Serialize};

/// Published before the player moves
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMessage {
    pub session_id: SessionId,
    pub mac: MacDigest,
}

/// Published after the player moves: the result and the key
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealMessage {
    pub session_id: SessionId,
    pub human_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    pub key: HmacKey,
    /// Same digest as the matching [`CommitMessage`]
    pub mac: MacDigest,
}

impl RevealMessage {
    /// Check that the revealed key and computer move reproduce the MAC
    pub fn verify(&self) -> bool {
        self.mac.verify(&self.key, self.computer_move.as_bytes())
    }

    /// Check against the commit message shown before the player moved
    pub fn matches(&self, commit: &CommitMessage) -> bool {
        self.session_id == commit.session_id && self.mac == commit.mac && self.verify()
    }
}
