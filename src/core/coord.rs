//! Cell coordinates.
//!
//! Every cell on a board is addressed by an integer `(x, y)` pair assigned
//! when the board is built. Coordinates never change afterwards.
//!
//! ## Orientation
//!
//! - `x` grows to the right.
//! - `y` grows downward: row `0` is the top of the board, and gravity pulls
//!   tokens toward larger `y`.
//!
//! Coordinates are signed so shape probes can step off the board edge
//! (e.g. `x - 2` at the left border) and simply miss.
//!
//! ```
//! use rust_match3::core::Coord;
//!
//! let a = Coord::new(2, 3);
//! assert!(a.is_neighbor(Coord::new(2, 4)));
//! assert!(!a.is_neighbor(Coord::new(3, 4)));
//! assert_eq!(a.offset(-1, 0), Coord::new(1, 3));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Position of a cell on the board.
///
/// Ordering is row-major (by `y`, then `x`) so sets of coordinates iterate
/// in the same order the board is scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance to another coordinate.
    #[must_use]
    pub const fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True if `other` is an orthogonal neighbor (distance exactly 1).
    #[must_use]
    pub const fn is_neighbor(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
