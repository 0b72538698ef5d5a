//! Move sets, cyclic rules, and the outcome table.

mod moves;
mod rules;
mod table;

pub use moves::{MenuEntry, MoveSet};
pub use rules::{Outcome, Rules};
pub use table::{OutcomeTable, TABLE_CORNER};
