//! # Engine Constants - Geometry, Encoding & Search Parameters
//!
//! ## Board Geometry
//!
//! The board is an 8x8 grid stored row-major in a flat array of 64 cells:
//! index = row * 8 + col. Row 0 is the top row of the encoded string.
//!
//! ## Position Encoding
//!
//! Positions travel as 65-character strings:
//! - **Character 0**: side to move, `W` (White) or `B` (Black)
//! - **Characters 1-64**: cells in row-major order, `E` (empty), `O` (White disc)
//!   or `X` (Black disc)
//!
//! ## Search Bounds
//!
//! White is the maximizing side. `AB_INF` bounds the initial alpha-beta
//! window `(-AB_INF, AB_INF)`. Nodes always take their first child, so
//! evaluators may return any `Score`, including the extremes.

use crate::types::Score;

pub const BOARD_SIZE: usize = 8;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
/// Side-to-move character plus one character per cell
pub const ENCODED_LEN: usize = CELL_COUNT + 1;

/// Deepest iteration the driver attempts (one ply per cell)
pub const MAX_DEPTH: u32 = CELL_COUNT as u32;

pub const AB_INF: Score = Score::MAX;

pub const WHITE_TO_MOVE: char = 'W';
pub const BLACK_TO_MOVE: char = 'B';
pub const EMPTY_CHAR: char = 'E';
pub const WHITE_CHAR: char = 'O';
pub const BLACK_CHAR: char = 'X';

pub const PASS_NOTATION: &str = "pass";

/// (row, col) step for each of the eight rays: NW, N, NE, W, E, SW, S, SE
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Positional weights, from White's perspective (Black discs count negated)
///
/// Corners are prized; the squares next to a corner hand it to the opponent.
pub const WEIGHT_MATRIX: [[Score; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -30, 6, 2, 2, 6, -30, 100],
    [-30, -50, 0, 0, 0, 0, -50, -30],
    [6, 0, 0, 0, 0, 0, 0, 6],
    [2, 0, 0, 3, 3, 0, 0, 2],
    [2, 0, 0, 3, 3, 0, 0, 2],
    [6, 0, 0, 0, 0, 0, 0, 6],
    [-30, -50, 0, 0, 0, 0, -50, -30],
    [100, -30, 6, 2, 2, 6, -30, 100],
];

/// Score per legal move of difference in mobility
pub const MOBILITY_WEIGHT: Score = 5;
