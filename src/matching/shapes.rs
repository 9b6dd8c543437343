//! Corner (L-shape) orientations.
//!
//! Each orientation is named "first arm, second arm" and lists the offsets
//! of its arm cells from the pivot. Offsets use board orientation, so "up"
//! is `dy = -1`.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coord, Token};

/// One of the eight corner orientations tested at every pivot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LShape {
    UpLeft,
    UpRight,
    DownLeft,
    /// Two cells down and two to the right: the only five-cell orientation.
    DownRight,
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl LShape {
    /// Orientations in the order they are tried. The first hit wins.
    pub const ORDER: [LShape; 8] = [
        LShape::UpLeft,
        LShape::UpRight,
        LShape::DownLeft,
        LShape::DownRight,
        LShape::LeftUp,
        LShape::LeftDown,
        LShape::RightUp,
        LShape::RightDown,
    ];

    /// Arm offsets relative to the pivot.
    #[must_use]
    pub const fn arms(self) -> &'static [(i32, i32)] {
        match self {
            LShape::UpLeft => &[(0, -1), (0, -2), (-1, 0)],
            LShape::UpRight => &[(0, -1), (0, -2), (1, 0)],
            LShape::DownLeft => &[(0, 1), (0, 2), (-1, 0)],
            LShape::DownRight => &[(0, 1), (0, 2), (1, 0), (2, 0)],
            LShape::LeftUp => &[(-1, 0), (-2, 0), (0, -1)],
            LShape::LeftDown => &[(-1, 0), (-2, 0), (0, 1)],
            LShape::RightUp => &[(1, 0), (2, 0), (0, -1)],
            LShape::RightDown => &[(1, 0), (2, 0), (0, 1)],
        }
    }

    /// Pivot plus arm cells if every arm cell holds `kind`.
    pub fn cells_at(self, board: &Board, pivot: Coord, kind: Token) -> Option<SmallVec<[Coord; 5]>> {
        let mut cells = SmallVec::new();
        cells.push(pivot);
        for &(dx, dy) in self.arms() {
            let coord = pivot.offset(dx, dy);
            if board.token(coord) != Some(kind) {
                return None;
            }
            cells.push(coord);
        }
        Some(cells)
    }

    /// The first orientation that fits at `pivot`, with its cells.
    ///
    /// Returns `None` if the pivot is empty or absent, or nothing fits.
    pub fn first_at(board: &Board, pivot: Coord) -> Option<(LShape, SmallVec<[Coord; 5]>)> {
        let kind = board.token(pivot)?;
        Self::ORDER
            .iter()
            .find_map(|&shape| shape.cells_at(board, pivot, kind).map(|cells| (shape, cells)))
    }
}
