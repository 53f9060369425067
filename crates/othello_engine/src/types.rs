//! # Othello Engine Core Types
//!
//! ## Cells and Players
//!
//! A `Cell` is exactly one of `Empty`, `White` or `Black`. A `Player` is the
//! owner of a disc and the side to move. White is the maximizing side: scores
//! above zero favour White, scores below zero favour Black.
//!
//! ## Actions
//!
//! An `Action` is either a placement at a (row, col) square or the canonical
//! pass. Coordinates are 0-based internally and 1-based in the printed
//! notation, so `Action::place(3, 2)` prints as `(4,3)` and the pass prints as
//! `pass`.

use crate::constants::*;
use crate::error::PositionError;
use std::fmt;
use std::str::FromStr;

/// Evaluation score. Higher favours White.
pub type Score = i32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
}

impl Cell {
    /// Decode a board character from the position encoding
    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            EMPTY_CHAR => Some(Cell::Empty),
            WHITE_CHAR => Some(Cell::White),
            BLACK_CHAR => Some(Cell::Black),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => EMPTY_CHAR,
            Cell::White => WHITE_CHAR,
            Cell::Black => BLACK_CHAR,
        }
    }

    /// The player owning the disc on this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Player::White),
            Cell::Black => Some(Player::Black),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }

    /// White maximizes, Black minimizes
    pub fn is_maximizing(self) -> bool {
        self == Player::White
    }

    /// Decode the side-to-move character of the position encoding
    pub fn from_char(ch: char) -> Option<Player> {
        match ch {
            WHITE_TO_MOVE => Some(Player::White),
            BLACK_TO_MOVE => Some(Player::Black),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::White => WHITE_TO_MOVE,
            Player::Black => BLACK_TO_MOVE,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => f.write_str("White"),
            Player::Black => f.write_str("Black"),
        }
    }
}

/// A move: a disc placement or the canonical pass
///
/// A pass carries no coordinates. It is only legal when the side to move has
/// no placement available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Place { row: u8, col: u8 },
    Pass,
}

impl Action {
    #[inline]
    pub fn place(row: usize, col: usize) -> Action {
        Action::Place {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        self == Action::Pass
    }

    /// 0-based (row, col) of a placement, `None` for the pass
    pub fn coords(self) -> Option<(usize, usize)> {
        match self {
            Action::Place { row, col } => Some((row as usize, col as usize)),
            Action::Pass => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place { row, col } => write!(f, "({},{})", row + 1, col + 1),
            Action::Pass => f.write_str(PASS_NOTATION),
        }
    }
}

impl FromStr for Action {
    type Err = PositionError;

    /// Parse the printed notation: `pass` or `(row,col)` with 1-based coordinates
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidAction {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(PASS_NOTATION) {
            return Ok(Action::Pass);
        }

        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let (row, col) = inner.split_once(',').ok_or_else(invalid)?;
        let row: usize = row.trim().parse().map_err(|_| invalid())?;
        let col: usize = col.trim().parse().map_err(|_| invalid())?;

        if !(1..=BOARD_SIZE).contains(&row) || !(1..=BOARD_SIZE).contains(&col) {
            return Err(invalid());
        }

        Ok(Action::place(row - 1, col - 1))
    }
}

/// Outcome of one completed depth-limited search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scored {
    pub score: Score,
    pub action: Action,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_notation_is_one_based() {
        assert_eq!(Action::place(0, 0).to_string(), "(1,1)");
        assert_eq!(Action::place(3, 2).to_string(), "(4,3)");
        assert_eq!(Action::place(7, 7).to_string(), "(8,8)");
        assert_eq!(Action::Pass.to_string(), "pass");
    }

    #[test]
    fn test_action_coords() {
        assert_eq!(Action::place(3, 2).coords(), Some((3, 2)));
        assert_eq!(Action::Pass.coords(), None);
        assert!(Action::Pass.is_pass());
        assert!(!Action::place(0, 0).is_pass());
    }

    #[test]
    fn test_action_parse_accepts_printed_form() {
        assert_eq!("(4,3)".parse::<Action>().unwrap(), Action::place(3, 2));
        assert_eq!(" ( 8 , 1 ) ".parse::<Action>().unwrap(), Action::place(7, 0));
        assert_eq!("pass".parse::<Action>().unwrap(), Action::Pass);
    }

    #[test]
    fn test_action_parse_rejects_out_of_range() {
        assert!("(0,1)".parse::<Action>().is_err());
        assert!("(9,1)".parse::<Action>().is_err());
        assert!("4,3".parse::<Action>().is_err());
        assert!("(a,b)".parse::<Action>().is_err());
    }

    #[test]
    fn test_player_opponent_and_cells() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.to_cell(), Cell::White);
        assert!(Player::White.is_maximizing());
        assert!(!Player::Black.is_maximizing());
    }

    #[test]
    fn test_cell_characters() {
        for cell in [Cell::Empty, Cell::White, Cell::Black] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('W'), None);
        assert_eq!(Cell::Black.owner(), Some(Player::Black));
        assert_eq!(Cell::Empty.owner(), None);
    }
}
