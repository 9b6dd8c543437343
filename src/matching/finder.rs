//! Full-board match scan.
//!
//! Every function here is pure: it reads the board and returns coordinates.
//! Absent and empty cells break runs and shapes the same way.

use smallvec::SmallVec;

use super::{LShape, MatchSet};
use crate::board::Board;
use crate::core::Coord;

/// Shortest run that counts as a match.
pub const MIN_RUN: usize = 3;

/// Cells of every run of `MIN_RUN` or more along one line.
fn runs_along(board: &Board, line: impl Iterator<Item = Coord>) -> Vec<Coord> {
    let mut matches = Vec::new();
    let mut run: SmallVec<[Coord; 8]> = SmallVec::new();
    let mut kind = None;

    for coord in line {
        let token = board.token(coord);
        if token.is_some() && token == kind {
            run.push(coord);
            continue;
        }
        if run.len() >= MIN_RUN {
            matches.extend(run.iter().copied());
        }
        run.clear();
        kind = token;
        if token.is_some() {
            run.push(coord);
        }
    }
    if run.len() >= MIN_RUN {
        matches.extend(run);
    }
    matches
}

/// Run matches in row `y`, scanned left to right.
pub fn find_row_runs(board: &Board, y: i32) -> Vec<Coord> {
    runs_along(board, (0..=board.max_x()).map(|x| Coord::new(x, y)))
}

/// Run matches in column `x`, scanned top to bottom.
pub fn find_column_runs(board: &Board, x: i32) -> Vec<Coord> {
    runs_along(board, (0..=board.max_y()).map(|y| Coord::new(x, y)))
}

/// Every 2x2 block of one token kind.
pub fn find_square_matches(board: &Board) -> Vec<Coord> {
    let mut matches = Vec::new();

    for x in 0..board.max_x() {
        for y in 0..board.max_y() {
            let top_left = Coord::new(x, y);
            let Some(kind) = board.token(top_left) else { continue };
            let block = [top_left, top_left.offset(1, 0), top_left.offset(0, 1), top_left.offset(1, 1)];
            if block.iter().all(|&c| board.token(c) == Some(kind)) {
                matches.extend(block);
            }
        }
    }
    matches
}

/// Corner matches: the first fitting L-shape at every pivot.
pub fn find_corner_matches(board: &Board) -> Vec<Coord> {
    let mut matches = Vec::new();

    for x in 0..=board.max_x() {
        for y in 0..=board.max_y() {
            if let Some((_, cells)) = LShape::first_at(board, Coord::new(x, y)) {
                matches.extend(cells);
            }
        }
    }
    matches
}

/// Union of every shape rule over the whole board.
pub fn find_all_matches(board: &Board) -> MatchSet {
    let mut all = MatchSet::new();

    for y in 0..=board.max_y() {
        all.extend(find_row_runs(board, y));
    }
    for x in 0..=board.max_x() {
        all.extend(find_column_runs(board, x));
    }
    all.extend(find_square_matches(board));
    all.extend(find_corner_matches(board));
    all
}
