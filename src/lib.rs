//! # rust-match3
//!
//! Rules engine for a tile-matching ("match-3") puzzle.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every random token comes from a seeded
//!    [`GameRng`] stream, so a session replays exactly from its config.
//!
//! 2. **Presentation-free**: the engine never animates or renders. It
//!    publishes [`GameEvent`]s with enough detail (removed, moved and filled
//!    cells per cascade round) for a renderer to replay each step.
//!
//! 3. **Rejected input is a value**: invalid clicks and swaps return an
//!    [`ActionError`] and leave the session untouched.
//!
//! ## Modules
//!
//! - `core`: coordinates, tokens, RNG, configuration
//! - `board`: cell storage, gravity, refill, seeding
//! - `matching`: run, square and corner detection
//! - `rules`: scoring and the move probe
//! - `buffs`: column/row clears and reshuffle
//! - `cascade`: remove, gravity, refill, re-scan loop
//! - `events`: event payloads and the listener registry
//! - `session`: the controller tying it all together

pub mod board;
pub mod buffs;
pub mod cascade;
pub mod core;
pub mod error;
pub mod events;
pub mod matching;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{BoardLayout, Coord, GameConfig, GameRng, Token};

pub use crate::board::{Board, Cell, CellMove, SeedReport};

pub use crate::matching::{find_all_matches, LShape, MatchSet};

pub use crate::rules::{find_possible_move, has_any_possible_move, score, ScoreBreakdown};

pub use crate::buffs::{BuffCharges, BuffKind, BuffOutcome, BuffSystem};

pub use crate::cascade::{CascadePhase, CascadeReport, CascadeResolver};

pub use crate::events::{EventBus, GameEvent, ListenerId};

pub use crate::session::{SelectOutcome, Session, SessionStatus, SwapOutcome};

pub use crate::error::{ActionError, ConfigError};
