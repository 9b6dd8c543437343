//! Seeded token source.
//!
//! Every token the engine creates, whether while seeding, refilling or
//! reshuffling, comes from a [`GameRng`]. A session splits its root seed
//! into named streams so that, for example, a reshuffle never shifts the
//! sequence used by cascade refills.
//!
//! Stream seeds are derived with `FxHasher`, which is stable across runs
//! but hashes in `usize` words, so 32-bit and 64-bit targets derive
//! different streams. On one target, a config plus a list of inputs always
//! replays the same game.
//!
//! ```
//! use rust_match3::core::{GameRng, Token};
//!
//! let palette = Token::palette(5);
//! let mut refill = GameRng::new(42).for_context("refill");
//! let mut replay = GameRng::new(42).for_context("refill");
//!
//! assert_eq!(refill.draw(&palette), replay.draw(&palette));
//! ```

use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

use super::Token;

/// ChaCha8 stream that remembers the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the named stream `context` from this stream's seed.
    ///
    /// Only the seed is used, never the current position, so a context
    /// stream can be created at any time with the same result.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform index in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform token from `palette`, or `None` if it is empty.
    pub fn draw(&mut self, palette: &[Token]) -> Option<Token> {
        if palette.is_empty() {
            return None;
        }
        Some(palette[self.gen_range_usize(0..palette.len())])
    }
}
