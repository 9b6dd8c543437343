//! Cascade resolution.
//!
//! A cascade starts from a set of matched cells and repeats
//! remove, gravity, refill, re-scan until the board holds no match. Each
//! repetition is recorded as a [`CascadePhase`] with enough detail for a
//! renderer to replay it.
//!
//! ## Termination
//!
//! Refills are random, so the loop has no natural bound. The resolver caps
//! the number of rounds; if matches remain when the cap is hit, the board is
//! reseeded with the seeding algorithm instead (no points) and the cascade
//! stops. The reseed is recorded in [`CascadeReport::forced_reseed`].
//!
//! ```
//! use rust_match3::board::Board;
//! use rust_match3::cascade::CascadeResolver;
//! use rust_match3::core::{GameRng, Token};
//! use rust_match3::matching::find_all_matches;
//!
//! let mut board = Board::from_rows(&[
//!     "BCD",
//!     "AAA",
//! ]);
//! let palette = Token::palette(6);
//! let mut refill = GameRng::new(7).for_context("refill");
//! let mut seed = GameRng::new(7).for_context("seed");
//!
//! let initial = find_all_matches(&board);
//! let report = CascadeResolver::new(&palette).resolve(&mut board, initial, &mut refill, &mut seed, true);
//!
//! assert_eq!(report.phases[0].points, 30);
//! assert!(find_all_matches(&board).is_empty() || report.forced_reseed.is_some());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Board, CellMove, SeedReport};
use crate::core::{Coord, GameRng, Token};
use crate::matching::{find_all_matches, MatchSet};
use crate::rules::score;

/// Default cap on cascade rounds.
pub const DEFAULT_MAX_ROUNDS: u32 = 32;

/// Default seeding attempts per cell for a forced reseed.
pub const DEFAULT_SEED_ATTEMPTS: u32 = 50;

/// One remove, gravity, refill round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadePhase {
    /// Round index, starting at 1.
    pub round: u32,

    /// Cells cleared this round.
    pub matched: MatchSet,

    /// Points scored for `matched`. Zero when scoring is off.
    pub points: u32,

    /// Tokens removed, row-major.
    pub removed: Vec<(Coord, Token)>,

    /// Tokens moved by gravity.
    pub moved: Vec<CellMove>,

    /// Tokens created by the refill.
    pub filled: Vec<(Coord, Token)>,
}

/// Everything one cascade did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub phases: Vec<CascadePhase>,

    /// Sum of every phase's points.
    pub total_score: u32,

    /// Set when the round cap was hit and the board was reseeded.
    pub forced_reseed: Option<SeedReport>,
}

impl CascadeReport {
    /// Number of rounds that ran.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.phases.len()
    }

    /// True if no round ran.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

/// Drives a board from a match to a stable state.
#[derive(Clone, Copy, Debug)]
pub struct CascadeResolver<'a> {
    palette: &'a [Token],
    max_rounds: u32,
    seed_attempts: u32,
}

impl<'a> CascadeResolver<'a> {
    /// Create a resolver that refills from `palette`.
    pub fn new(palette: &'a [Token]) -> Self {
        Self {
            palette,
            max_rounds: DEFAULT_MAX_ROUNDS,
            seed_attempts: DEFAULT_SEED_ATTEMPTS,
        }
    }

    /// Set the round cap (builder pattern).
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the seeding attempts used by a forced reseed (builder pattern).
    #[must_use]
    pub fn with_seed_attempts(mut self, attempts: u32) -> Self {
        self.seed_attempts = attempts;
        self
    }

    /// Run the cascade starting from `initial`.
    ///
    /// `refill` supplies new tokens after each round; `reseed` is only used
    /// if the round cap is reached. Points are computed only when `scoring`
    /// is set.
    pub fn resolve(
        &self,
        board: &mut Board,
        initial: MatchSet,
        refill: &mut GameRng,
        reseed: &mut GameRng,
        scoring: bool,
    ) -> CascadeReport {
        let mut report = CascadeReport::default();
        let mut matches = initial;

        loop {
            // Cells that lost their token since the scan cannot be cleared.
            let matched: MatchSet = matches.iter().filter(|&c| board.token(c).is_some()).collect();
            if matched.is_empty() {
                break;
            }

            if report.rounds() as u32 >= self.max_rounds {
                warn!(
                    rounds = self.max_rounds,
                    remaining = matched.len(),
                    "cascade round cap reached, reseeding board"
                );
                let seeded = board.reseed(self.palette, reseed, self.seed_attempts);
                if !find_all_matches(board).is_empty() {
                    warn!(fallbacks = seeded.fallbacks.len(), "forced reseed left a match on the board");
                }
                report.forced_reseed = Some(seeded);
                break;
            }

            let round = report.rounds() as u32 + 1;
            let points = if scoring { score(&matched) } else { 0 };
            let removed: Vec<(Coord, Token)> = matched
                .iter()
                .filter_map(|c| board.take(c).map(|t| (c, t)))
                .collect();
            let moved = board.apply_gravity();
            let filled = board.refill(self.palette, refill);

            debug!(
                round,
                matched = matched.len(),
                points,
                moved = moved.len(),
                filled = filled.len(),
                "cascade round"
            );

            report.total_score += points;
            report.phases.push(CascadePhase {
                round,
                matched,
                points,
                removed,
                moved,
                filled,
            });

            matches = find_all_matches(board);
        }

        report
    }
}
