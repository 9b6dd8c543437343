//! Session controller.
//!
//! A [`Session`] owns the board, score, move counter, selection and buffs
//! for one game, and is the only thing that mutates them. The presentation
//! layer drives it through three inputs:
//!
//! - [`Session::select_cell`] for every cell click
//! - [`Session::activate_buff`] / [`Session::deactivate_buff`] (or
//!   [`Session::toggle_buff`]) for the buff buttons
//!
//! and observes it through [`GameEvent`](crate::events::GameEvent)s.
//!
//! ## Selection
//!
//! ```text
//! Idle --select--> Selected --select same--> Idle
//!                  Selected --select other, not adjacent--> Selected (other)
//!                  Selected --select neighbor--> swap --> Idle
//! ```
//!
//! A swap that creates no match is undone and costs nothing. A swap that
//! matches costs one move and runs the cascade. When the last move is spent
//! the session finishes and rejects further input.
//!
//! While a buff is armed, a click fires the buff instead of selecting.
//! Buffs never cost a move.
//!
//! ```
//! use rust_match3::core::GameConfig;
//! use rust_match3::session::{Session, SessionStatus};
//!
//! let mut session = Session::new(GameConfig::default().with_seed(3)).unwrap();
//! session.start().unwrap();
//!
//! assert_eq!(session.status(), SessionStatus::Running);
//! assert_eq!(session.moves_remaining(), 30);
//! assert_eq!(session.score(), 0);
//! ```

mod controller;

pub use controller::Session;

use crate::buffs::{BuffKind, BuffOutcome};
use crate::cascade::CascadeReport;
use crate::core::Coord;

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Created but not started. Input is rejected.
    NotStarted,
    /// Accepting input.
    Running,
    /// Out of moves. Input is rejected; the final score stays readable.
    Finished,
}

/// Result of an accepted swap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    /// No match; the swap was undone.
    Reverted,
    /// The swap matched and the cascade ran.
    Matched(CascadeReport),
}

/// Result of an accepted cell click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The cell is now selected.
    Selected(Coord),
    /// The selected cell was clicked again.
    Deselected,
    /// The click completed a neighbor pair.
    Swap(SwapOutcome),
    /// The click fired the armed buff.
    Buff {
        kind: BuffKind,
        outcome: BuffOutcome,
        cascade: Option<CascadeReport>,
    },
}
