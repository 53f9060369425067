//! Immutable Othello position
//!
//! `Position` is a 65-byte `Copy` value: 64 cells plus the side to move.
//! Applying a move never mutates the receiver; `make_move` returns a fresh
//! position, so the searcher can share positions down the tree without
//! undo bookkeeping.

use crate::board::*;
use crate::constants::*;
use crate::error::{PositionError, PositionResult};
use crate::move_gen::{self, Cells};
use crate::types::*;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    cells: Cells,
    to_move: Player,
}

impl Position {
    pub fn new(cells: Cells, to_move: Player) -> Self {
        Position { cells, to_move }
    }

    /// An empty board with `to_move` to play
    pub fn empty(to_move: Player) -> Self {
        Position::new([Cell::Empty; CELL_COUNT], to_move)
    }

    /// Standard opening: White on d4/e5, Black on e4/d5, Black to move
    pub fn initial() -> Self {
        Position::empty(Player::Black)
            .with_cell(3, 3, Cell::White)
            .with_cell(3, 4, Cell::Black)
            .with_cell(4, 3, Cell::Black)
            .with_cell(4, 4, Cell::White)
    }

    /// Copy of this position with one cell replaced
    pub fn with_cell(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.cells[square_to_index(row, col)] = cell;
        self
    }

    /// Copy of this position with a different side to move
    pub fn with_side_to_move(mut self, to_move: Player) -> Self {
        self.to_move = to_move;
        self
    }

    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.to_move
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[square_to_index(row, col)]
    }

    #[inline]
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Legal placements for the side to move, row-major; empty if it must pass
    pub fn get_moves(&self) -> Vec<Action> {
        move_gen::legal_moves(&self.cells, self.to_move)
    }

    pub fn has_moves(&self) -> bool {
        move_gen::has_any_move(&self.cells, self.to_move)
    }

    /// Number of legal placements `player` would have, whoever is to move
    pub fn mobility(&self, player: Player) -> usize {
        move_gen::count_moves(&self.cells, player)
    }

    /// Game over: neither side can place a disc
    pub fn is_terminal(&self) -> bool {
        !move_gen::has_any_move(&self.cells, self.to_move)
            && !move_gen::has_any_move(&self.cells, self.to_move.opponent())
    }

    /// (white discs, black discs)
    pub fn disc_counts(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(white, black), cell| match cell {
            Cell::White => (white + 1, black),
            Cell::Black => (white, black + 1),
            Cell::Empty => (white, black),
        })
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count()
    }

    /// Apply `action` for the side to move and return the resulting position
    ///
    /// A pass flips the side to move and leaves the board unchanged. A
    /// placement must land on an empty square and flip at least one disc.
    pub fn make_move(&self, action: Action) -> PositionResult<Position> {
        let Some((row, col)) = action.coords() else {
            return Ok(self.with_side_to_move(self.to_move.opponent()));
        };

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(PositionError::OutOfBounds {
                row: row as u8,
                col: col as u8,
            });
        }
        if self.cell(row, col) != Cell::Empty {
            return Err(PositionError::Occupied { action });
        }

        let mut cells = self.cells;
        if move_gen::place_disc(&mut cells, self.to_move, row, col) == 0 {
            return Err(PositionError::IllegalMove { action });
        }

        Ok(Position::new(cells, self.to_move.opponent()))
    }

    /// Multi-line board diagram for logs
    pub fn diagram(&self) -> String {
        let mut out = String::with_capacity((BOARD_SIZE + 2) * (BOARD_SIZE * 2 + 4));
        out.push_str("  1 2 3 4 5 6 7 8\n");
        for row in 0..BOARD_SIZE {
            out.push_str(&(row + 1).to_string());
            for col in 0..BOARD_SIZE {
                out.push(' ');
                out.push(match self.cell(row, col) {
                    Cell::Empty => '.',
                    cell => cell.to_char(),
                });
            }
            out.push('\n');
        }
        out.push_str(&format!("{} to move", self.to_move));
        out
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::initial()
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parse the 65-character encoding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != ENCODED_LEN {
            return Err(PositionError::InvalidLength {
                expected: ENCODED_LEN,
                found,
            });
        }

        let mut chars = s.chars();
        let side = chars.next().unwrap_or_default();
        let to_move =
            Player::from_char(side).ok_or(PositionError::InvalidSideToMove { found: side })?;

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, ch) in chars.enumerate() {
            cells[index] =
                Cell::from_char(ch).ok_or(PositionError::InvalidCell { index, found: ch })?;
        }

        Ok(Position::new(cells, to_move))
    }
}

impl fmt::Display for Position {
    /// Encode as the 65-character string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded: String = std::iter::once(self.to_move.to_char())
            .chain(self.cells.iter().map(|cell| cell.to_char()))
            .collect();
        f.write_str(&encoded)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({self})")
    }
}
