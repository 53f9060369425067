//! Board utilities and helper functions
//!
//! Square indexing shared by the position model and move generation:
//! - Row-major index conversion
//! - Bounds checking
//! - Stepping along a ray

use crate::constants::*;

/// Convert row and column to linear index (0-63)
#[inline]
pub fn square_to_index(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

/// Convert linear index to (row, col)
#[inline]
pub fn index_to_square(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Check if signed square coordinates are on the board
#[inline]
pub fn is_valid_square(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col)
}

/// The square one step from (row, col) along `dir`, if still on the board
#[inline]
pub fn step(row: usize, col: usize, dir: (i8, i8)) -> Option<(usize, usize)> {
    let r = row as i8 + dir.0;
    let c = col as i8 + dir.1;
    is_valid_square(r, c).then(|| (r as usize, c as usize))
}
