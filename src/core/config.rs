//! Game configuration types.
//!
//! A session is configured once, at construction, by providing:
//! - `BoardLayout`: board dimensions plus any absent cells (irregular boards)
//! - the token palette
//! - starting move count and per-buff use counts
//! - the RNG seed and the engine's safety limits
//!
//! Configuration can be built in code with the `with_*` builders or loaded
//! from TOML. Keys missing from a TOML document keep their defaults.
//!
//! ```
//! use rust_match3::core::{GameConfig, Token};
//!
//! let config = GameConfig::from_toml_str(r#"
//!     moves = 20
//!     palette = [0, 1, 2, 3]
//!
//!     [layout]
//!     width = 6
//!     height = 7
//!     holes = [{ x = 0, y = 0 }]
//! "#).unwrap();
//!
//! assert_eq!(config.moves, 20);
//! assert_eq!(config.palette, Token::palette(4));
//! assert_eq!(config.layout.cell_count(), 41);
//! ```

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{Coord, Token};
use crate::buffs::BuffCharges;
use crate::error::ConfigError;

/// Smallest palette a session accepts.
///
/// With a single token every line of three is a match, so no board could
/// ever settle.
pub const MIN_PALETTE: usize = 2;

/// Largest bounding rectangle, holes included, a session accepts.
pub const MAX_BOARD_CELLS: usize = 1 << 16;

/// Board geometry: a `width` x `height` rectangle minus `holes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Number of columns.
    pub width: u32,

    /// Number of rows.
    pub height: u32,

    /// Coordinates inside the rectangle that have no cell.
    #[serde(default)]
    pub holes: Vec<Coord>,
}

impl BoardLayout {
    /// A full rectangle with no holes.
    #[must_use]
    pub fn rect(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            holes: Vec::new(),
        }
    }

    /// Remove a cell from the layout.
    #[must_use]
    pub fn with_hole(mut self, hole: Coord) -> Self {
        self.holes.push(hole);
        self
    }

    /// True if `coord` lies inside the bounding rectangle.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < self.width && (coord.y as u32) < self.height
    }

    /// Coordinates of every present cell, in row-major order.
    pub fn cells(&self) -> Vec<Coord> {
        let holes: FxHashSet<Coord> = self.holes.iter().copied().collect();
        let mut cells = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let coord = Coord::new(x, y);
                if !holes.contains(&coord) {
                    cells.push(coord);
                }
            }
        }
        cells
    }

    /// Number of present cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells().len()
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::rect(8, 8)
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board geometry.
    pub layout: BoardLayout,

    /// Tokens that may be drawn when seeding or refilling.
    pub palette: Vec<Token>,

    /// Starting number of moves.
    pub moves: u32,

    /// Starting uses for each buff.
    pub buff_uses: BuffCharges,

    /// RNG seed. Equal seeds give equal sessions.
    pub seed: u64,

    /// Draws tried per cell while seeding before the fallback token is used.
    pub seed_attempts: u32,

    /// Cascade rounds allowed before the resolver forces a reseed.
    pub max_cascade_rounds: u32,

    /// Allow arming a buff with no uses left. Using it then only disarms it.
    pub consume_exhausted_buffs: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: BoardLayout::default(),
            palette: Token::palette(5),
            moves: 30,
            buff_uses: BuffCharges::default(),
            seed: 0,
            seed_attempts: 50,
            max_cascade_rounds: 32,
            consume_exhausted_buffs: false,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (8x8, five tokens, 30 moves).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a TOML string and validate it.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Set the board layout.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the token palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Token>) -> Self {
        self.palette = palette;
        self
    }

    /// Set the starting move count.
    #[must_use]
    pub fn with_moves(mut self, moves: u32) -> Self {
        self.moves = moves;
        self
    }

    /// Set the starting buff uses.
    #[must_use]
    pub fn with_buff_uses(mut self, uses: BuffCharges) -> Self {
        self.buff_uses = uses;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-cell seeding attempt limit.
    #[must_use]
    pub fn with_seed_attempts(mut self, attempts: u32) -> Self {
        self.seed_attempts = attempts;
        self
    }

    /// Set the cascade round cap.
    #[must_use]
    pub fn with_max_cascade_rounds(mut self, rounds: u32) -> Self {
        self.max_cascade_rounds = rounds;
        self
    }

    /// Allow exhausted buffs to be armed and consumed as no-ops.
    #[must_use]
    pub fn with_consume_exhausted_buffs(mut self, consume: bool) -> Self {
        self.consume_exhausted_buffs = consume;
        self
    }

    /// Check every precondition the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.width == 0 || self.layout.height == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let area = self.layout.width.checked_mul(self.layout.height);
        if !matches!(area, Some(n) if n as usize <= MAX_BOARD_CELLS) {
            return Err(ConfigError::BoardTooLarge {
                width: self.layout.width,
                height: self.layout.height,
                max: MAX_BOARD_CELLS,
            });
        }
        if let Some(&hole) = self.layout.holes.iter().find(|h| !self.layout.in_bounds(**h)) {
            return Err(ConfigError::HoleOutOfBounds(hole));
        }
        if self.layout.cell_count() == 0 {
            return Err(ConfigError::EmptyBoard);
        }

        let mut seen = FxHashSet::default();
        for &token in &self.palette {
            if !seen.insert(token) {
                return Err(ConfigError::DuplicateToken(token));
            }
        }
        if self.palette.len() < MIN_PALETTE {
            return Err(ConfigError::PaletteTooSmall {
                len: self.palette.len(),
                min: MIN_PALETTE,
            });
        }

        if self.moves == 0 {
            return Err(ConfigError::ZeroMoves);
        }
        if self.seed_attempts == 0 {
            return Err(ConfigError::ZeroSeedAttempts);
        }
        if self.max_cascade_rounds == 0 {
            return Err(ConfigError::ZeroCascadeRounds);
        }
        Ok(())
    }
}
