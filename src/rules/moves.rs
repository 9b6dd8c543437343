//! Move-possibility probe.
//!
//! Tries every orthogonal swap on a scratch copy of the board and reports the
//! first one that would create a match. Only the right and lower neighbors
//! of each cell are probed: swapping is symmetric, so that covers every pair.
//!
//! The probe is advisory. It never changes the real board and never forces
//! a reshuffle on its own.

use crate::board::Board;
use crate::core::Coord;
use crate::matching::find_all_matches;

/// Swap two cells, scan, and swap back. True if the swap produced a match.
///
/// Returns false without touching the board if either cell is absent or empty.
pub fn swap_creates_match(board: &mut Board, a: Coord, b: Coord) -> bool {
    if board.token(a).is_none() || board.token(b).is_none() {
        return false;
    }
    board.swap(a, b);
    let found = !find_all_matches(board).is_empty();
    board.swap(a, b);
    found
}

/// First swap, in row-major order, that would create a match.
#[must_use]
pub fn find_possible_move(board: &Board) -> Option<(Coord, Coord)> {
    let mut scratch = board.clone();

    for y in 0..=board.max_y() {
        for x in 0..=board.max_x() {
            let current = Coord::new(x, y);
            if board.token(current).is_none() {
                continue;
            }
            for other in [current.offset(1, 0), current.offset(0, 1)] {
                if swap_creates_match(&mut scratch, current, other) {
                    return Some((current, other));
                }
            }
        }
    }
    None
}

/// True if any single orthogonal swap would create a match.
#[must_use]
pub fn has_any_possible_move(board: &Board) -> bool {
    find_possible_move(board).is_some()
}
