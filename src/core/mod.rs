//! Core engine types: coordinates, tokens, RNG, configuration.
//!
//! This module contains the fundamental building blocks shared by every
//! other module. Sessions are configured via `GameConfig` rather than by
//! modifying the engine.

pub mod coord;
pub mod token;
pub mod rng;
pub mod config;

pub use coord::Coord;
pub use token::Token;
pub use rng::GameRng;
pub use config::{BoardLayout, GameConfig, MAX_BOARD_CELLS, MIN_PALETTE};
