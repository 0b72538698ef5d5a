//! Help table listing every pairing.

use super::rules::cyclic_outcome;
use super::MoveSet;
use crate::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label in the top-left cell
pub const TABLE_CORNER: &str = "PC/User >";

const COLUMN_SEPARATOR: &str = " | ";

/// (N+1) x (N+1) grid: header row, header column, and the outcome of the
/// row's move against the column's move in every other cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct OutcomeTable {
    rows: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct RawTable {
    rows: Vec<Vec<String>>,
}

impl TryFrom<RawTable> for OutcomeTable {
    type Error = GameError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        let size = raw.rows.len();
        if size == 0 {
            return Err(GameError::MalformedTable("table has no rows".to_string()));
        }
        for (r, row) in raw.rows.iter().enumerate() {
            if row.len() != size {
                return Err(GameError::MalformedTable(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    size
                )));
            }
        }
        Ok(Self { rows: raw.rows })
    }
}

impl OutcomeTable {
    pub fn new(moves: &MoveSet) -> Self {
        let n = moves.len();
        let mut rows = Vec::with_capacity(n + 1);

        let mut header = Vec::with_capacity(n + 1);
        header.push(TABLE_CORNER.to_string());
        header.extend(moves.iter().map(str::to_string));
        rows.push(header);

        for (i, name) in moves.iter().enumerate() {
            let mut row = Vec::with_capacity(n + 1);
            row.push(name.to_string());
            row.extend((0..n).map(|j| cyclic_outcome(i, j, n).to_string()));
            rows.push(row);
        }

        Self { rows }
    }

    /// Raw cells, header row first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Display width of each column
    pub fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.first().map_or(0, Vec::len);
        (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl fmt::Display for OutcomeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(COLUMN_SEPARATOR)?;
                }
                let width = widths.get(c).copied().unwrap_or(0);
                write!(f, "{:<width$}", cell, width = width)?;
            }
        }
        Ok(())
    }
}
