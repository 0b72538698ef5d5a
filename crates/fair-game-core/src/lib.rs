//! Fair Game Core Library
//!
//! This crate provides the cyclic rule engine, the HMAC commit-reveal
//! primitives, and the session state machine for a human-vs-computer
//! generalized rock-paper-scissors game.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{Commitment, EntropySource, HmacKey, MacDigest};
pub use error::{ConfigurationError, GameError, InputError};
pub use games::{MenuEntry, MoveSet, Outcome, OutcomeTable, Rules};
pub use protocol::{
    CommitMessage, GameSession, PlayerInput, RevealMessage, SessionId, SessionOutcome,
    SessionState,
};
