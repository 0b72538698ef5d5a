//! Validated, ordered move names.

use crate::error::{ConfigurationError, GameError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Ordered, unique move names with an odd count of at least three
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate and build a move set
    pub fn new<I, S>(moves: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < MIN_MOVES {
            return Err(ConfigurationError::TooFewMoves(moves.len()).into());
        }
        if moves.len() % 2 == 0 {
            return Err(ConfigurationError::EvenMoveCount(moves.len()).into());
        }

        let mut seen = HashSet::with_capacity(moves.len());
        for name in &moves {
            if !seen.insert(name.as_str()) {
                return Err(ConfigurationError::DuplicateMove(name.clone()).into());
            }
        }

        Ok(Self(moves))
    }

    /// Number of moves (N)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a valid move set has at least three moves
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the move called `name`
    pub fn index_of(&self, name: &str) -> Result<usize, GameError> {
        self.0
            .iter()
            .position(|m| m == name)
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))
    }

    /// Name of the move at `index`
    pub fn name(&self, index: usize) -> Result<&str, GameError> {
        self.0
            .get(index)
            .map(String::as_str)
            .ok_or(GameError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Move names in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Menu entries, numbered from 1
    pub fn menu(&self) -> Vec<MenuEntry> {
        self.iter()
            .enumerate()
            .map(|(index, name)| MenuEntry {
                number: index + 1,
                name: name.to_string(),
            })
            .collect()
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = GameError;

    fn try_from(moves: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(moves)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(moves: MoveSet) -> Self {
        moves.0
    }
}

/// One line of the move menu
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// 1-based number the player types
    pub number: usize,
    pub name: String,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.number, self.name)
    }
}
