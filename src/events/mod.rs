//! Session notifications for the presentation layer.
//!
//! The session publishes a [`GameEvent`] for every visible state change.
//! Listeners are registered on an [`EventBus`]; the engine never depends on
//! any of them being present.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use rust_match3::events::{EventBus, GameEvent};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut bus = EventBus::new();
//!
//! let sink = Rc::clone(&seen);
//! let id = bus.subscribe(move |event| sink.borrow_mut().push(event.clone()));
//!
//! bus.publish(&GameEvent::ScoreChanged { score: 30 });
//! assert!(bus.unsubscribe(id));
//! bus.publish(&GameEvent::ScoreChanged { score: 60 });
//!
//! assert_eq!(*seen.borrow(), vec![GameEvent::ScoreChanged { score: 30 }]);
//! ```

mod bus;

pub use bus::{EventBus, ListenerId};

use serde::{Deserialize, Serialize};

use crate::buffs::BuffKind;
use crate::cascade::CascadePhase;
use crate::core::{Coord, Token};

/// Something the presentation layer may want to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The score changed to `score`.
    ScoreChanged { score: u32 },

    /// Moves remaining changed to `moves`.
    MovesChanged { moves: u32 },

    /// The session ended.
    SessionFinished { final_score: u32 },

    /// The selected cell changed.
    SelectionChanged { selected: Option<Coord> },

    /// The armed buff changed.
    ActiveBuffChanged { active: Option<BuffKind> },

    /// A buff was fired; `remaining` is its uses left afterwards.
    BuffUsed { kind: BuffKind, remaining: u32 },

    /// Two tokens were exchanged.
    Swapped { a: Coord, b: Coord },

    /// A swap found no match and was undone.
    SwapReverted { a: Coord, b: Coord },

    /// One cascade round.
    CascadePhase(CascadePhase),

    /// The whole board was replaced. `cells` lists every present cell.
    BoardReseeded { cells: Vec<(Coord, Option<Token>)> },

    /// No single swap can create a match. Advisory only.
    NoMovesAvailable,
}
