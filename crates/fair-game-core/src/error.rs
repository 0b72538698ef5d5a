//! Error types.

use crate::protocol::SessionState;
use thiserror::Error;

/// Errors from core game operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Move index {index} out of range for {len} moves")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Session is {actual}, expected {expected}")]
    InvalidState {
        expected: SessionState,
        actual: SessionState,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Malformed outcome table: {0}")]
    MalformedTable(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

/// Why a move set was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("at least 3 moves are required, got {0}")]
    TooFewMoves(usize),

    #[error("an odd number of moves is required, got {0}")]
    EvenMoveCount(usize),

    #[error("moves must be unique, {0:?} is repeated")]
    DuplicateMove(String),
}

/// Why a player's token was not accepted as a move
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{0:?} is not a move number")]
    NotANumber(String),

    #[error("move {choice} is not between 1 and {max}")]
    OutOfRange { choice: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_message() {
        let err = GameError::from(ConfigurationError::EvenMoveCount(4));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: an odd number of moves is required, got 4"
        );
    }

    #[test]
    fn test_duplicate_move_message_quotes_name() {
        let err = ConfigurationError::DuplicateMove("Rock".to_string());
        assert_eq!(err.to_string(), "moves must be unique, \"Rock\" is repeated");
    }

    #[test]
    fn test_invalid_state_message() {
        let err = GameError::InvalidState {
            expected: SessionState::AwaitingInput,
            actual: SessionState::Initialized,
        };
        assert_eq!(
            err.to_string(),
            "Session is Initialized, expected AwaitingInput"
        );
    }
}
