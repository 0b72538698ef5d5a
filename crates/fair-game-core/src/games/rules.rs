//! Cyclic win/lose/draw rules.
//!
//! Moves sit on a circle in the order they were given. Each move beats the
//! `N / 2` moves before it and loses to the `N / 2` moves after it:
//!
//! d = (human - computer + N) mod N
//! Draw if d = 0, Win if d <= N / 2, Lose otherwise
//!
//! With an odd N the two halves are the same size, so the relation is
//! antisymmetric and the only draw is a move against itself.

use super::MoveSet;
use crate::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a round, from the human's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// The same round seen from the other side
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule engine for a move set of a given size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    len: usize,
}

impl Rules {
    /// Rules for `moves`. The move set guarantees an odd size of at least 3.
    pub fn new(moves: &MoveSet) -> Self {
        Self { len: moves.len() }
    }

    /// Outcome of `human` against `computer`
    pub fn judge(&self, human: usize, computer: usize) -> Result<Outcome, GameError> {
        self.check(human)?;
        self.check(computer)?;
        Ok(cyclic_outcome(human, computer, self.len))
    }

    /// Does `a` beat `b`?
    pub fn beats(&self, a: usize, b: usize) -> Result<bool, GameError> {
        Ok(self.judge(a, b)? == Outcome::Win)
    }

    fn check(&self, index: usize) -> Result<(), GameError> {
        if index < self.len {
            Ok(())
        } else {
            Err(GameError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }
}

/// Indices must already be in `0..len`.
pub(crate) fn cyclic_outcome(human: usize, computer: usize, len: usize) -> Outcome {
    if human == computer {
        return Outcome::Draw;
    }
    let d = (human + len - computer) % len;
    if d <= len / 2 {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(names: &[&str]) -> Rules {
        Rules::new(&MoveSet::new(names.iter().copied()).unwrap())
    }

    fn rules_of_size(n: usize) -> Rules {
        let names: Vec<String> = (0..n).map(|i| format!("m{}", i)).collect();
        Rules::new(&MoveSet::new(names).unwrap())
    }

    #[test]
    fn test_rock_beats_scissors() {
        let rules = rules(&["Rock", "Paper", "Scissors"]);

        assert_eq!(rules.judge(0, 2).unwrap(), Outcome::Win);
        assert_eq!(rules.judge(2, 0).unwrap(), Outcome::Lose);
    }

    #[test]
    fn test_paper_beats_rock() {
        let rules = rules(&["Rock", "Paper", "Scissors"]);

        assert_eq!(rules.judge(1, 0).unwrap(), Outcome::Win);
        assert_eq!(rules.judge(0, 1).unwrap(), Outcome::Lose);
    }

    #[test]
    fn test_scissors_beats_paper() {
        let rules = rules(&["Rock", "Paper", "Scissors"]);

        assert_eq!(rules.judge(2, 1).unwrap(), Outcome::Win);
        assert_eq!(rules.judge(1, 2).unwrap(), Outcome::Lose);
    }

    #[test]
    fn test_five_moves() {
        let rules = rules(&["A", "B", "C", "D", "E"]);

        assert_eq!(rules.judge(0, 1).unwrap(), Outcome::Lose);
        assert_eq!(rules.judge(0, 2).unwrap(), Outcome::Lose);
        assert_eq!(rules.judge(0, 3).unwrap(), Outcome::Win);
        assert_eq!(rules.judge(0, 4).unwrap(), Outcome::Win);
    }

    #[test]
    fn test_self_match_draws() {
        for n in [3, 5, 7, 9, 11] {
            let rules = rules_of_size(n);
            for i in 0..n {
                assert_eq!(rules.judge(i, i).unwrap(), Outcome::Draw);
            }
        }
    }

    #[test]
    fn test_antisymmetry() {
        for n in [3, 5, 7, 9, 11, 21] {
            let rules = rules_of_size(n);
            for i in 0..n {
                for j in 0..n {
                    let forward = rules.judge(i, j).unwrap();
                    let backward = rules.judge(j, i).unwrap();
                    assert_eq!(forward, backward.reversed(), "n={} i={} j={}", n, i, j);
                }
            }
        }
    }

    #[test]
    fn test_balance() {
        for n in [3, 5, 7, 9, 11, 21] {
            let rules = rules_of_size(n);
            for i in 0..n {
                let mut wins = 0;
                let mut losses = 0;
                let mut draws = 0;
                for j in 0..n {
                    match rules.judge(i, j).unwrap() {
                        Outcome::Win => wins += 1,
                        Outcome::Lose => losses += 1,
                        Outcome::Draw => draws += 1,
                    }
                }
                assert_eq!(wins, n / 2);
                assert_eq!(losses, n / 2);
                assert_eq!(draws, 1);
            }
        }
    }

    #[test]
    fn test_beats() {
        let rules = rules(&["Rock", "Paper", "Scissors"]);

        assert!(rules.beats(0, 2).unwrap());
        assert!(!rules.beats(2, 0).unwrap());
        assert!(!rules.beats(1, 1).unwrap());
    }

    #[test]
    fn test_out_of_range() {
        let rules = rules(&["Rock", "Paper", "Scissors"]);

        assert_eq!(
            rules.judge(3, 0),
            Err(GameError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            rules.judge(0, 7),
            Err(GameError::IndexOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_range_follows_move_set() {
        for n in [3, 5, 101] {
            let rules = rules_of_size(n);

            assert!(rules.judge(n - 1, 0).is_ok());
            assert_eq!(
                rules.judge(n, 0),
                Err(GameError::IndexOutOfRange { index: n, len: n })
            );
        }
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Win.to_string(), "Win");
        assert_eq!(Outcome::Lose.to_string(), "Lose");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }
}
