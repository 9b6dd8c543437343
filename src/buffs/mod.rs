//! Limited-use power actions.
//!
//! A buff is armed with [`BuffSystem::activate`] and fired by the next cell
//! the player picks. Three kinds exist:
//!
//! - [`BuffKind::VerticalClear`]: clears every occupied cell in the picked
//!   cell's column.
//! - [`BuffKind::HorizontalClear`]: same for the row.
//! - [`BuffKind::Reshuffle`]: asks for a full reseed of the board.
//!
//! Each kind has its own use counter ([`BuffCharges`]). Counters only go
//! down, and never below zero.

mod system;

pub use system::{BuffOutcome, BuffSystem};

use serde::{Deserialize, Serialize};

/// Which buff is armed or used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffKind {
    VerticalClear,
    HorizontalClear,
    Reshuffle,
}

impl BuffKind {
    /// Every kind, in display order.
    pub const ALL: [BuffKind; 3] = [
        BuffKind::VerticalClear,
        BuffKind::HorizontalClear,
        BuffKind::Reshuffle,
    ];
}

impl std::fmt::Display for BuffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BuffKind::VerticalClear => "vertical clear",
            BuffKind::HorizontalClear => "horizontal clear",
            BuffKind::Reshuffle => "reshuffle",
        };
        f.write_str(name)
    }
}

/// Remaining uses per buff kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuffCharges {
    pub vertical: u32,
    pub horizontal: u32,
    pub reshuffle: u32,
}

impl BuffCharges {
    /// Uses each buff starts with unless configured otherwise.
    pub const DEFAULT_USES: u32 = 3;

    #[must_use]
    pub const fn new(vertical: u32, horizontal: u32, reshuffle: u32) -> Self {
        Self {
            vertical,
            horizontal,
            reshuffle,
        }
    }

    /// The same number of uses for every kind.
    #[must_use]
    pub const fn uniform(uses: u32) -> Self {
        Self::new(uses, uses, uses)
    }

    /// Uses left for `kind`.
    #[must_use]
    pub const fn get(&self, kind: BuffKind) -> u32 {
        match kind {
            BuffKind::VerticalClear => self.vertical,
            BuffKind::HorizontalClear => self.horizontal,
            BuffKind::Reshuffle => self.reshuffle,
        }
    }

    /// Spend one use of `kind`. Returns false, changing nothing, at zero.
    pub fn spend(&mut self, kind: BuffKind) -> bool {
        let slot = match kind {
            BuffKind::VerticalClear => &mut self.vertical,
            BuffKind::HorizontalClear => &mut self.horizontal,
            BuffKind::Reshuffle => &mut self.reshuffle,
        };
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

impl Default for BuffCharges {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_USES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_charges() {
        let charges = BuffCharges::default();

        for kind in BuffKind::ALL {
            assert_eq!(charges.get(kind), 3);
        }
    }

    #[test]
    fn test_spend_stops_at_zero() {
        let mut charges = BuffCharges::new(1, 0, 2);

        assert!(charges.spend(BuffKind::VerticalClear));
        assert!(!charges.spend(BuffKind::VerticalClear));
        assert!(!charges.spend(BuffKind::HorizontalClear));
        assert_eq!(charges, BuffCharges::new(0, 0, 2));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(BuffKind::HorizontalClear.to_string(), "horizontal clear");
    }
}
