//! Legal move generation and disc flipping
//!
//! A placement is legal when the target cell is empty and, along at least one
//! of the eight rays, a contiguous run of opponent discs is closed off by a
//! disc of the mover. Moves are generated by a row-major scan, which fixes
//! the enumeration order the searcher's tie-break depends on.

use crate::board::*;
use crate::constants::*;
use crate::types::*;

pub type Cells = [Cell; CELL_COUNT];

/// Number of opponent discs `player` would flip along `dir` by placing at (row, col)
///
/// Zero when the run is empty, touches the edge or an empty cell before a
/// disc of `player` closes it.
pub fn flips_in_direction(
    cells: &Cells,
    player: Player,
    row: usize,
    col: usize,
    dir: (i8, i8),
) -> usize {
    let own = player.to_cell();
    let opponent = player.opponent().to_cell();
    let mut run = 0;
    let mut square = step(row, col, dir);

    while let Some((r, c)) = square {
        match cells[square_to_index(r, c)] {
            cell if cell == opponent => {
                run += 1;
                square = step(r, c, dir);
            }
            cell if cell == own => return run,
            _ => return 0,
        }
    }

    0
}

/// Check if `player` may place a disc at (row, col)
pub fn is_legal(cells: &Cells, player: Player, row: usize, col: usize) -> bool {
    if cells[square_to_index(row, col)] != Cell::Empty {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&dir| flips_in_direction(cells, player, row, col, dir) > 0)
}

/// All legal placements for `player`, in row-major order
pub fn legal_moves(cells: &Cells, player: Player) -> Vec<Action> {
    let mut moves = Vec::new();

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if is_legal(cells, player, row, col) {
                moves.push(Action::place(row, col));
            }
        }
    }

    moves
}

/// Count legal placements for `player`
pub fn count_moves(cells: &Cells, player: Player) -> usize {
    (0..CELL_COUNT)
        .filter(|&index| {
            let (row, col) = index_to_square(index);
            is_legal(cells, player, row, col)
        })
        .count()
}

/// Whether `player` has at least one legal placement
pub fn has_any_move(cells: &Cells, player: Player) -> bool {
    (0..CELL_COUNT).any(|index| {
        let (row, col) = index_to_square(index);
        is_legal(cells, player, row, col)
    })
}

/// Place a disc for `player` at (row, col) and flip every captured run
///
/// Returns the number of flipped discs. The caller discards `cells` when the
/// result is zero, since such a placement is illegal.
pub(crate) fn place_disc(cells: &mut Cells, player: Player, row: usize, col: usize) -> usize {
    let own = player.to_cell();
    let mut flipped = 0;

    for &dir in &DIRECTIONS {
        let run = flips_in_direction(cells, player, row, col, dir);
        let mut square = step(row, col, dir);
        for _ in 0..run {
            let Some((r, c)) = square else { break };
            cells[square_to_index(r, c)] = own;
            square = step(r, c, dir);
        }
        flipped += run;
    }

    cells[square_to_index(row, col)] = own;
    flipped
}
