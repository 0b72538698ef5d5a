//! Protocol types, messages, and the session state machine.

mod messages;
mod session;
mod types;

pub use messages::{CommitMessage, RevealMessage};
pub use session::{GameSession, SessionOutcome};
pub use types::{PlayerInput, SessionId, SessionState, EXIT_CHOICE, HELP_TOKEN};
