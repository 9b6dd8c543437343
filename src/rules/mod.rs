//! Scoring and move probing.
//!
//! Both work on finished [`MatchSet`](crate::matching::MatchSet)s or boards
//! and never change session state.

pub mod moves;
pub mod scoring;

pub use moves::{find_possible_move, has_any_possible_move, swap_creates_match};
pub use scoring::{score, score_breakdown, ScoreBreakdown};
