//! Field snapshot: the player's current marking of the grid.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::FieldParseError;
use crate::config::BOARD_SIZE;

/// Mask over the field; placements and clusters use the same representation.
pub type CellMask = BitBoard<u64, BOARD_SIZE>;

/// Player knowledge about a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Never shot at.
    #[default]
    Unknown,
    /// Shot at, nothing there.
    Miss,
    /// Shot at, part of a ship that is still afloat.
    Hit,
    /// Part of a fully destroyed ship.
    Sunk,
}

impl CellState {
    /// Glyph used in field text and rendering.
    pub const fn glyph(self) -> char {
        match self {
            CellState::Unknown => '.',
            CellState::Miss => 'o',
            CellState::Hit => 'x',
            CellState::Sunk => '#',
        }
    }

    fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(CellState::Unknown),
            'o' => Some(CellState::Miss),
            'x' => Some(CellState::Hit),
            '#' => Some(CellState::Sunk),
            _ => None,
        }
    }
}

/// A full snapshot of the player's marking, supplied fresh on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// An all-Unknown field.
    pub fn new() -> Self {
        Grid {
            cells: [[CellState::Unknown; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// State of the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    /// Overwrite the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col] = state;
    }

    /// Mask of every cell currently in `state`.
    pub fn mask_of(&self, state: CellState) -> CellMask {
        CellMask::from_cells(
            (0..BOARD_SIZE)
                .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
                .filter(|&(r, c)| self.cells[r][c] == state),
        )
    }

    /// Parse a field from its text form: one line per row, one glyph per
    /// cell (`.` unknown, `o` miss, `x` hit, `#` sunk). Whitespace between
    /// glyphs is permitted and blank lines are skipped.
    pub fn from_text(text: &str) -> Result<Self, FieldParseError> {
        let mut grid = Grid::new();
        let mut rows = 0usize;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if rows >= BOARD_SIZE {
                return Err(FieldParseError::TooManyRows);
            }
            let mut cols = 0usize;
            for ch in line.chars() {
                if ch.is_whitespace() {
                    continue;
                }
                if cols >= BOARD_SIZE {
                    return Err(FieldParseError::RowTooLong { row: rows });
                }
                grid.cells[rows][cols] =
                    CellState::from_glyph(ch).ok_or(FieldParseError::UnknownGlyph {
                        row: rows,
                        col: cols,
                        glyph: ch,
                    })?;
                cols += 1;
            }
            if cols != BOARD_SIZE {
                return Err(FieldParseError::RowTooShort { row: rows, len: cols });
            }
            rows += 1;
        }
        if rows != BOARD_SIZE {
            return Err(FieldParseError::NotEnoughRows { rows });
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[r][c].glyph())?;
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
