//! Gravity and refill.
//!
//! Gravity works column by column: every token in a column slides toward
//! the bottom (largest `y`), keeping its order, and skips over absent cells.
//! Refill then draws a new token for every empty present cell.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::Board;
use crate::core::{Coord, GameRng, Token};

/// A token that gravity moved from one cell to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMove {
    pub from: Coord,
    pub to: Coord,
    pub token: Token,
}

impl Board {
    /// Present cells of column `x`, bottom to top.
    fn column_bottom_up(&self, x: i32) -> Vec<Coord> {
        (0..=self.max_y())
            .rev()
            .map(|y| Coord::new(x, y))
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Compact every column downward.
    ///
    /// Returns the tokens that changed cell. Vacated cells at the top of
    /// each column are left empty.
    pub fn apply_gravity(&mut self) -> Vec<CellMove> {
        let mut moves = Vec::new();

        for x in 0..=self.max_x() {
            let cells = self.column_bottom_up(x);
            let falling: Vec<(Coord, Token)> = cells
                .iter()
                .filter_map(|&c| self.take(c).map(|t| (c, t)))
                .collect();

            for (&to, &(from, token)) in cells.iter().zip(falling.iter()) {
                self.place(to, token);
                if from != to {
                    moves.push(CellMove { from, to, token });
                }
            }
        }

        trace!(moved = moves.len(), "gravity applied");
        moves
    }

    /// Fill every empty present cell with a random token.
    ///
    /// Columns are filled left to right, each from the bottom up. With an
    /// empty palette nothing is placed.
    pub fn refill(&mut self, palette: &[Token], rng: &mut GameRng) -> Vec<(Coord, Token)> {
        let mut filled = Vec::new();

        for x in 0..=self.max_x() {
            for coord in self.column_bottom_up(x) {
                if !self.is_empty_cell(coord) {
                    continue;
                }
                let Some(token) = rng.draw(palette) else {
                    return filled;
                };
                self.place(coord, token);
                filled.push((coord, token));
            }
        }

        trace!(filled = filled.len(), "refill applied");
        filled
    }
}
