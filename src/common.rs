//! Shared error types for field input.

use core::fmt;

use crate::config::BOARD_SIZE;

/// Errors produced when reading a field from its text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldParseError {
    /// More non-empty rows than the field has.
    TooManyRows,
    /// Fewer non-empty rows than the field has.
    NotEnoughRows { rows: usize },
    /// A row carrying more cell glyphs than the field is wide.
    RowTooLong { row: usize },
    /// A row carrying fewer cell glyphs than the field is wide.
    RowTooShort { row: usize, len: usize },
    /// A character that names no cell state.
    UnknownGlyph { row: usize, col: usize, glyph: char },
}

impl fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldParseError::TooManyRows => {
                write!(f, "field has more than {} rows", BOARD_SIZE)
            }
            FieldParseError::NotEnoughRows { rows } => {
                write!(f, "field has {} rows, expected {}", rows, BOARD_SIZE)
            }
            FieldParseError::RowTooLong { row } => {
                write!(f, "row {} has more than {} cells", row + 1, BOARD_SIZE)
            }
            FieldParseError::RowTooShort { row, len } => {
                write!(f, "row {} has {} cells, expected {}", row + 1, len, BOARD_SIZE)
            }
            FieldParseError::UnknownGlyph { row, col, glyph } => {
                write!(
                    f,
                    "unknown cell glyph {:?} at row {}, column {}",
                    glyph,
                    row + 1,
                    col + 1
                )
            }
        }
    }
}
