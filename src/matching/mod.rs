//! Match detection.
//!
//! A *match* is a set of same-typed occupied cells that satisfies one of the
//! shape rules:
//!
//! - **Runs**: three or more consecutive cells in a row or column.
//! - **Squares**: any 2x2 block.
//! - **Corners**: an L-shape around a pivot cell (see [`LShape`]).
//!
//! [`find_all_matches`] returns the union of every rule as a [`MatchSet`]. A
//! cell that satisfies several rules appears once.
//!
//! ```
//! use rust_match3::board::Board;
//! use rust_match3::matching::find_all_matches;
//!
//! let board = Board::from_rows(&[
//!     "AAAB",
//!     "BCDC",
//! ]);
//! assert_eq!(find_all_matches(&board).len(), 3);
//! ```

mod finder;
mod shapes;

pub use finder::{
    find_all_matches, find_column_runs, find_corner_matches, find_row_runs, find_square_matches,
};
pub use shapes::LShape;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// A deduplicated set of matched coordinates.
///
/// Iterates in row-major order so results are stable across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSet {
    cells: BTreeSet<Coord>,
}

impl MatchSet {
    /// Create an empty match set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell. Returns false if it was already present.
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.cells.insert(coord)
    }

    /// Number of distinct cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no cell matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if `coord` is part of the set.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Cells as a vector, row-major.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Coord> {
        self.iter().collect()
    }
}

impl FromIterator<Coord> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coord> for MatchSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
