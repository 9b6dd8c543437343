//! Match scoring.
//!
//! A match set scores 10 points per cell, plus bonuses for the patterns it
//! contains. Bonuses are checked independently against the same set, so one
//! set can collect several of them.
//!
//! | Pattern | Bonus | Condition |
//! |---------|-------|-----------|
//! | square  | +50   | some 2x2 block is fully in the set |
//! | corner  | +30   | some cell has two set cells along a row and two along a column (set of 4+) |
//! | line    | +20   | four consecutive set cells in a row or column (set of 4+) |
//!
//! Sets smaller than three cells score nothing.
//!
//! ```
//! use rust_match3::core::Coord;
//! use rust_match3::matching::MatchSet;
//! use rust_match3::rules::score;
//!
//! let row_of_four: MatchSet = (0..4).map(|x| Coord::new(x, 0)).collect();
//! assert_eq!(score(&row_of_four), 4 * 10 + 20);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Coord;
use crate::matching::MatchSet;

pub const POINTS_PER_CELL: u32 = 10;
pub const SQUARE_BONUS: u32 = 50;
pub const CORNER_BONUS: u32 = 30;
pub const LINE_BONUS: u32 = 20;

/// Smallest set that scores at all.
pub const MIN_SCORING_CELLS: usize = 3;

/// Points for one match set, split by source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: u32,
    pub square: u32,
    pub corner: u32,
    pub line: u32,
}

impl ScoreBreakdown {
    /// Sum of base points and bonuses.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.base + self.square + self.corner + self.line
    }
}

/// Score a match set.
#[must_use]
pub fn score(matches: &MatchSet) -> u32 {
    score_breakdown(matches).total()
}

/// Score a match set, keeping each bonus separate.
#[must_use]
pub fn score_breakdown(matches: &MatchSet) -> ScoreBreakdown {
    if matches.len() < MIN_SCORING_CELLS {
        return ScoreBreakdown::default();
    }

    ScoreBreakdown {
        base: matches.len() as u32 * POINTS_PER_CELL,
        square: if has_square(matches) { SQUARE_BONUS } else { 0 },
        corner: if has_corner(matches) { CORNER_BONUS } else { 0 },
        line: if has_line_of_four(matches) { LINE_BONUS } else { 0 },
    }
}

fn has_square(matches: &MatchSet) -> bool {
    matches.iter().any(|c| {
        matches.contains(c.offset(1, 0)) && matches.contains(c.offset(0, 1)) && matches.contains(c.offset(1, 1))
    })
}

fn has_arm(matches: &MatchSet, pivot: Coord, dx: i32, dy: i32) -> bool {
    matches.contains(pivot.offset(dx, dy)) && matches.contains(pivot.offset(2 * dx, 2 * dy))
}

fn has_corner(matches: &MatchSet) -> bool {
    if matches.len() < 4 {
        return false;
    }
    matches.iter().any(|c| {
        let horizontal = has_arm(matches, c, -1, 0) || has_arm(matches, c, 1, 0);
        let vertical = has_arm(matches, c, 0, -1) || has_arm(matches, c, 0, 1);
        horizontal && vertical
    })
}

fn has_line_of_four(matches: &MatchSet) -> bool {
    if matches.len() < 4 {
        return false;
    }
    let run_from = |start: Coord, dx: i32, dy: i32| {
        (1..4).take_while(|&i| matches.contains(start.offset(i * dx, i * dy))).count() + 1
    };
    matches.iter().any(|c| run_from(c, 1, 0) >= 4 || run_from(c, 0, 1) >= 4)
}
