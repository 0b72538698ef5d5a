//! Protocol types.

use crate::crypto::EntropySource;
use crate::error::InputError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique session identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Draw a version 4 id from `rng`, so seeded sources replay the same id
    pub fn generate<R: EntropySource + ?Sized>(rng: &mut R) -> Self {
        Self(uuid::Builder::from_random_bytes(rng.gen()).into_uuid())
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a session is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Initialized,
    Committed,
    AwaitingInput,
    Resolved,
    HelpRequested,
    Invalid,
    Aborted,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Initialized => "Initialized",
            SessionState::Committed => "Committed",
            SessionState::AwaitingInput => "AwaitingInput",
            SessionState::Resolved => "Resolved",
            SessionState::HelpRequested => "HelpRequested",
            SessionState::Invalid => "Invalid",
            SessionState::Aborted => "Aborted",
        }
    }

    /// Has the session ended?
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionState::Resolved
                | SessionState::HelpRequested
                | SessionState::Invalid
                | SessionState::Aborted
        )
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token typed at the prompt
pub const HELP_TOKEN: &str = "?";

/// Number that ends the session without a move
pub const EXIT_CHOICE: usize = 0;

/// A player's token, classified
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerInput {
    Help,
    Exit,
    /// 0-based move index
    Choice(usize),
    Invalid(InputError),
}

impl PlayerInput {
    /// Classify `token` for a menu of `moves` entries numbered from 1
    pub fn parse(token: &str, moves: usize) -> Self {
        let token = token.trim();
        if token == HELP_TOKEN {
            return PlayerInput::Help;
        }
        match token.parse::<usize>() {
            Ok(EXIT_CHOICE) => PlayerInput::Exit,
            Ok(choice) if choice <= moves => PlayerInput::Choice(choice - 1),
            Ok(choice) => PlayerInput::Invalid(InputError::OutOfRange {
                choice,
                max: moves,
            }),
            Err(_) => PlayerInput::Invalid(InputError::NotANumber(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_session_id_generation() {
        let mut rng = StdRng::seed_from_u64(1);
        let id1 = SessionId::generate(&mut rng);
        let id2 = SessionId::generate(&mut rng);
        assert_ne!(id1, id2);
        assert_eq!(id1.0.get_version_num(), 4);
    }

    #[test]
    fn test_session_id_follows_seed() {
        let id1 = SessionId::generate(&mut StdRng::seed_from_u64(7));
        let id2 = SessionId::generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_session_id_parse() {
        let id = SessionId::generate(&mut rand::thread_rng());
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!SessionState::Initialized.is_terminal());
        assert!(!SessionState::Committed.is_terminal());
        assert!(!SessionState::AwaitingInput.is_terminal());
        assert!(SessionState::Resolved.is_terminal());
        assert!(SessionState::HelpRequested.is_terminal());
        assert!(SessionState::Invalid.is_terminal());
        assert!(SessionState::Aborted.is_terminal());
    }

    #[test]
    fn test_parse_help_and_exit() {
        assert_eq!(PlayerInput::parse("?", 3), PlayerInput::Help);
        assert_eq!(PlayerInput::parse(" ?\n", 3), PlayerInput::Help);
        assert_eq!(PlayerInput::parse("0", 3), PlayerInput::Exit);
    }

    #[test]
    fn test_parse_choices_are_zero_based() {
        assert_eq!(PlayerInput::parse("1", 3), PlayerInput::Choice(0));
        assert_eq!(PlayerInput::parse("3\n", 3), PlayerInput::Choice(2));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            PlayerInput::parse("4", 3),
            PlayerInput::Invalid(InputError::OutOfRange { choice: 4, max: 3 })
        );
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(
            PlayerInput::parse("rock", 3),
            PlayerInput::Invalid(InputError::NotANumber("rock".to_string()))
        );
        assert_eq!(
            PlayerInput::parse("-1", 3),
            PlayerInput::Invalid(InputError::NotANumber("-1".to_string()))
        );
        assert_eq!(
            PlayerInput::parse("", 3),
            PlayerInput::Invalid(InputError::NotANumber(String::new()))
        );
        assert_eq!(
            PlayerInput::parse("??", 3),
            PlayerInput::Invalid(InputError::NotANumber("??".to_string()))
        );
    }
}
