//! Seeding a board without starting matches.
//!
//! Cells are filled in row-major order. For each cell a random token is
//! drawn and placed, and the whole board is re-scanned; a draw that creates
//! any match is taken back and redrawn. After `max_attempts` failed draws
//! the first palette token is placed regardless, which may leave a match on
//! the board. That fallback is logged and reported, never fatal.

use tracing::{debug, warn};

use super::Board;
use crate::core::{Coord, GameRng, Token};
use crate::matching::find_all_matches;

/// Outcome of a seeding pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Tokens placed.
    pub placed: usize,

    /// Cells that received the fallback token after every draw matched.
    pub fallbacks: Vec<Coord>,
}

impl SeedReport {
    /// True if every cell was seeded without the fallback.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

impl Board {
    /// Clear the board and fill every cell so that no match exists.
    ///
    /// With an empty palette the board is left empty.
    pub fn reseed(&mut self, palette: &[Token], rng: &mut GameRng, max_attempts: u32) -> SeedReport {
        self.clear();
        let mut report = SeedReport::default();

        let Some(&fallback) = palette.first() else {
            warn!("reseed with an empty palette leaves the board empty");
            return report;
        };

        let coords = self.coords().to_vec();
        for coord in coords {
            let mut placed = false;

            for _ in 0..max_attempts {
                let Some(token) = rng.draw(palette) else { break };
                self.place(coord, token);
                if find_all_matches(self).is_empty() {
                    placed = true;
                    break;
                }
                self.take(coord);
            }

            if !placed {
                warn!(
                    x = coord.x,
                    y = coord.y,
                    attempts = max_attempts,
                    token = %fallback,
                    "seeding safety limit reached, placing fallback token"
                );
                self.place(coord, fallback);
                report.fallbacks.push(coord);
            }
            report.placed += 1;
        }

        debug!(placed = report.placed, fallbacks = report.fallbacks.len(), "board reseeded");
        report
    }
}
