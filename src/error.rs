//! Error types.
//!
//! Two families:
//! - [`ConfigError`]: a configuration the engine refuses to run with.
//! - [`ActionError`]: a player action that was not performed. These are
//!   recoverable no-ops; the session state is unchanged when one is returned.

use thiserror::Error;

use crate::buffs::BuffKind;
use crate::core::{Coord, Token};

/// Invalid session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("board has no cells")]
    EmptyBoard,

    #[error("board of {width}x{height} exceeds the {max} cell limit")]
    BoardTooLarge { width: u32, height: u32, max: usize },

    #[error("hole {0} lies outside the board")]
    HoleOutOfBounds(Coord),

    #[error("palette has {len} tokens, at least {min} required")]
    PaletteTooSmall { len: usize, min: usize },

    #[error("palette lists {0} more than once")]
    DuplicateToken(Token),

    #[error("starting move count must be positive")]
    ZeroMoves,

    #[error("seeding attempt limit must be positive")]
    ZeroSeedAttempts,

    #[error("cascade round cap must be positive")]
    ZeroCascadeRounds,
}

/// A player action that was rejected without side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("session has not started")]
    NotStarted,

    #[error("session has already started")]
    AlreadyStarted,

    #[error("board does not fit the configured layout")]
    LayoutMismatch,

    #[error("session is finished")]
    Finished,

    #[error("no cell at {0}")]
    InvalidCell(Coord),

    #[error("cell {0} is empty")]
    EmptyCell(Coord),

    #[error("{0} and {1} are not neighbors")]
    NotNeighbors(Coord, Coord),

    #[error("no buff is active")]
    NoActiveBuff,

    #[error("{0} has no uses left")]
    BuffExhausted(BuffKind),
}

/// Result type alias for player actions.
pub type Result<T> = std::result::Result<T, ActionError>;
