//! One round between the player and the computer.
//!
//! Initialized -> Committed -> AwaitingInput -> Resolved
//!                                           -> HelpRequested
//!                                           -> Invalid
//!                                           -> Aborted
//!
//! The MAC leaves the session in [`GameSession::commit`], before the menu is
//! handed out. The key leaves only inside the [`RevealMessage`] of a resolved
//! session. Every other terminal state drops the commitment unrevealed.

use crate::crypto::{Commitment, EntropySource};
use crate::error::{GameError, InputError};
use crate::games::{MenuEntry, MoveSet, OutcomeTable, Rules};
use crate::protocol::{CommitMessage, PlayerInput, RevealMessage, SessionId, SessionState};
use rand::Rng;
use tracing::{debug, info, warn};

/// What a finished session hands back to the caller
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Resolved(RevealMessage),
    Help(OutcomeTable),
    Invalid(InputError),
    Aborted,
}

impl SessionOutcome {
    /// Terminal state this outcome belongs to
    pub fn state(&self) -> SessionState {
        match self {
            SessionOutcome::Resolved(_) => SessionState::Resolved,
            SessionOutcome::Help(_) => SessionState::HelpRequested,
            SessionOutcome::Invalid(_) => SessionState::Invalid,
            SessionOutcome::Aborted => SessionState::Aborted,
        }
    }

    /// The reveal, if the round was played. Invalid input becomes an error.
    pub fn into_result(self) -> Result<Option<RevealMessage>, GameError> {
        match self {
            SessionOutcome::Resolved(reveal) => Ok(Some(reveal)),
            SessionOutcome::Help(_) | SessionOutcome::Aborted => Ok(None),
            SessionOutcome::Invalid(e) => Err(e.into()),
        }
    }
}

/// Computer move and the commitment to it
#[derive(Debug)]
struct ComputerCommit {
    index: usize,
    commitment: Commitment,
}

/// A single round: commit, take one token, finish
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    moves: MoveSet,
    rules: Rules,
    state: SessionState,
    computer: Option<ComputerCommit>,
}

impl GameSession {
    pub fn new<R: EntropySource>(moves: MoveSet, rng: &mut R) -> Self {
        let rules = Rules::new(&moves);
        let id = SessionId::generate(rng);
        debug!(session = %id, moves = moves.len(), "session initialized");
        Self {
            id,
            moves,
            rules,
            state: SessionState::Initialized,
            computer: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Pick the computer move, generate the key, and publish the MAC.
    ///
    /// Initialized -> Committed
    pub fn commit<R: EntropySource>(&mut self, rng: &mut R) -> Result<CommitMessage, GameError> {
        self.expect_state(SessionState::Initialized)?;

        let index = rng.gen_range(0..self.moves.len());
        let name = self.moves.name(index)?;
        let commitment = Commitment::new(rng, name.as_bytes());
        let message = CommitMessage {
            session_id: self.id,
            mac: *commitment.mac(),
        };

        self.computer = Some(ComputerCommit { index, commitment });
        self.state = SessionState::Committed;
        debug!(session = %self.id, mac = %message.mac, "computer move committed");

        Ok(message)
    }

    /// Hand out the menu and start waiting for the player's token.
    ///
    /// Committed -> AwaitingInput
    pub fn await_input(&mut self) -> Result<Vec<MenuEntry>, GameError> {
        self.expect_state(SessionState::Committed)?;
        self.state = SessionState::AwaitingInput;
        debug!(session = %self.id, "awaiting input");
        Ok(self.moves.menu())
    }

    /// Consume the player's token and end the session.
    ///
    /// AwaitingInput -> Resolved | HelpRequested | Invalid | Aborted
    pub fn submit(&mut self, token: &str) -> Result<SessionOutcome, GameError> {
        self.expect_state(SessionState::AwaitingInput)?;

        let outcome = match PlayerInput::parse(token, self.moves.len()) {
            PlayerInput::Help => SessionOutcome::Help(OutcomeTable::new(&self.moves)),
            PlayerInput::Exit => SessionOutcome::Aborted,
            PlayerInput::Choice(index) => SessionOutcome::Resolved(self.resolve(index)?),
            PlayerInput::Invalid(e) => {
                warn!(session = %self.id, error = %e, "invalid input");
                SessionOutcome::Invalid(e)
            }
        };

        self.state = outcome.state();
        if !matches!(outcome, SessionOutcome::Resolved(_)) {
            debug!(session = %self.id, state = %self.state, "session ended without reveal");
        }
        Ok(outcome)
    }

    fn resolve(&self, human: usize) -> Result<RevealMessage, GameError> {
        let computer = self.computer.as_ref().ok_or(GameError::InvalidState {
            expected: SessionState::Committed,
            actual: self.state,
        })?;

        let outcome = self.rules.judge(human, computer.index)?;
        let reveal = RevealMessage {
            session_id: self.id,
            human_move: self.moves.name(human)?.to_string(),
            computer_move: self.moves.name(computer.index)?.to_string(),
            outcome,
            key: computer.commitment.reveal(),
            mac: *computer.commitment.mac(),
        };

        info!(
            session = %self.id,
            human = %reveal.human_move,
            computer = %reveal.computer_move,
            outcome = %outcome,
            "session resolved"
        );
        Ok(reveal)
    }

    fn expect_state(&self, expected: SessionState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }
}
