//! Buff state machine.

use tracing::debug;

use super::{BuffCharges, BuffKind};
use crate::board::Board;
use crate::core::Coord;
use crate::error::{ActionError, Result};
use crate::matching::MatchSet;

/// What firing a buff produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuffOutcome {
    /// Cells to clear through the cascade.
    Cleared(MatchSet),

    /// The board should be reseeded.
    Reshuffle,

    /// The buff had no uses left; it was disarmed with no effect.
    Exhausted(BuffKind),
}

/// Armed buff plus remaining uses.
///
/// At most one buff is armed. Any attempt to fire it, even one that finds
/// the counter at zero, disarms it; a rejected target leaves it armed.
#[derive(Clone, Debug)]
pub struct BuffSystem {
    active: Option<BuffKind>,
    charges: BuffCharges,
    allow_exhausted: bool,
}

impl BuffSystem {
    /// Create a buff system with the given starting uses.
    ///
    /// With `allow_exhausted`, a buff at zero uses can still be armed; firing
    /// it yields [`BuffOutcome::Exhausted`].
    pub fn new(charges: BuffCharges, allow_exhausted: bool) -> Self {
        Self {
            active: None,
            charges,
            allow_exhausted,
        }
    }

    /// The armed buff, if any.
    #[must_use]
    pub fn active(&self) -> Option<BuffKind> {
        self.active
    }

    /// Uses left for `kind`.
    #[must_use]
    pub fn remaining(&self, kind: BuffKind) -> u32 {
        self.charges.get(kind)
    }

    /// True if `kind` has at least one use left.
    #[must_use]
    pub fn is_available(&self, kind: BuffKind) -> bool {
        self.remaining(kind) > 0
    }

    #[must_use]
    pub fn charges(&self) -> BuffCharges {
        self.charges
    }

    /// Arm `kind`, replacing any other armed buff. Arming the armed buff
    /// again changes nothing.
    pub fn activate(&mut self, kind: BuffKind) -> Result<()> {
        if !self.allow_exhausted && !self.is_available(kind) {
            return Err(ActionError::BuffExhausted(kind));
        }
        self.active = Some(kind);
        Ok(())
    }

    /// Disarm, returning what was armed.
    pub fn deactivate(&mut self) -> Option<BuffKind> {
        self.active.take()
    }

    /// Disarm if `kind` is armed, otherwise arm it. Returns the new armed
    /// buff.
    pub fn toggle(&mut self, kind: BuffKind) -> Result<Option<BuffKind>> {
        if self.active == Some(kind) {
            self.active = None;
        } else {
            self.activate(kind)?;
        }
        Ok(self.active)
    }

    /// Fire the armed buff at `target`.
    ///
    /// Fails without side effects if nothing is armed or `target` is absent
    /// or empty. Otherwise the buff is disarmed and one use is spent if any
    /// remain.
    pub fn try_use_on_cell(&mut self, board: &Board, target: Coord) -> Result<BuffOutcome> {
        let kind = self.active.ok_or(ActionError::NoActiveBuff)?;
        if !board.contains(target) {
            return Err(ActionError::InvalidCell(target));
        }
        if board.token(target).is_none() {
            return Err(ActionError::EmptyCell(target));
        }

        self.active = None;
        if !self.charges.spend(kind) {
            debug!(%kind, "buff fired with no uses left");
            return Ok(BuffOutcome::Exhausted(kind));
        }

        let outcome = match kind {
            BuffKind::VerticalClear => BuffOutcome::Cleared(board.occupied_in_column(target.x).into_iter().collect()),
            BuffKind::HorizontalClear => BuffOutcome::Cleared(board.occupied_in_row(target.y).into_iter().collect()),
            BuffKind::Reshuffle => BuffOutcome::Reshuffle,
        };
        debug!(%kind, x = target.x, y = target.y, remaining = self.remaining(kind), "buff used");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_rows(&[
            "AB.",
            "CDE",
            "F#G",
        ])
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut buffs = BuffSystem::new(BuffCharges::default(), false);

        buffs.activate(BuffKind::Reshuffle).unwrap();
        buffs.activate(BuffKind::Reshuffle).unwrap();

        assert_eq!(buffs.active(), Some(BuffKind::Reshuffle));
        assert_eq!(buffs.remaining(BuffKind::Reshuffle), 3);
    }

    #[test]
    fn test_activate_replaces_other_buff() {
        let mut buffs = BuffSystem::new(BuffCharges::default(), false);

        buffs.activate(BuffKind::Reshuffle).unwrap();
        buffs.activate(BuffKind::VerticalClear).unwrap();

        assert_eq!(buffs.active(), Some(BuffKind::VerticalClear));
    }

    #[test]
    fn test_toggle() {
        let mut buffs = BuffSystem::new(BuffCharges::default(), false);

        assert_eq!(buffs.toggle(BuffKind::HorizontalClear), Ok(Some(BuffKind::HorizontalClear)));
        assert_eq!(buffs.toggle(BuffKind::HorizontalClear), Ok(None));
        assert_eq!(buffs.deactivate(), None);
    }

    #[test]
    fn test_vertical_clear_collects_occupied_column() {
        let mut buffs = BuffSystem::new(BuffCharges::default(), false);
        buffs.activate(BuffKind::VerticalClear).unwrap();

        let outcome = buffs.try_use_on_cell(&board(), Coord::new(1, 0)).unwrap();

        // (1, 2) is a hole
        let expected: MatchSet = [Coord::new(1, 0), Coord::new(1, 1)].into_iter().collect();
        assert_eq!(outcome, BuffOutcome::Cleared(expected));
        assert_eq!(buffs.remaining(BuffKind::VerticalClear), 2);
        assert_eq!(buffs.active(), None);
    }

    #[test]
    fn test_horizontal_clear_skips_empty_cells() {
        let mut buffs = BuffSystem::new(BuffCharges::default(), false);
        buffs.activate(BuffKind::HorizontalClear).unwrap();

        let BuffOutcome::Cleared(cells) = buffs.try_use_on_cell(&board(), Coord::new(0, 0)).unwrap() else {
            panic!("expected a clear");
        };

        assert_eq!(cells.to_vec(), vec![Coord::new(0, 0), Coord::new(1, 0)]);
    }

    #[test]
    fn test_reshuffle() {
        let mut buffs = BuffSystem::new(BuffCharges::default(), false);
        buffs.activate(BuffKind::Reshuffle).unwrap();

        assert_eq!(buffs.try_use_on_cell(&board(), Coord::new(2, 2)), Ok(BuffOutcome::Reshuffle));
        assert_eq!(buffs.remaining(BuffKind::Reshuffle), 2);
    }

    #[test]
    fn test_no_active_buff() {
        let mut buffs = BuffSystem::new(BuffCharges::default(), false);

        assert_eq!(
            buffs.try_use_on_cell(&board(), Coord::new(0, 0)),
            Err(ActionError::NoActiveBuff)
        );
    }

    #[test]
    fn test_rejected_target_keeps_buff_armed() {
        let mut buffs = BuffSystem::new(BuffCharges::default(), false);
        buffs.activate(BuffKind::VerticalClear).unwrap();

        assert_eq!(
            buffs.try_use_on_cell(&board(), Coord::new(1, 2)),
            Err(ActionError::InvalidCell(Coord::new(1, 2)))
        );
        assert_eq!(
            buffs.try_use_on_cell(&board(), Coord::new(2, 0)),
            Err(ActionError::EmptyCell(Coord::new(2, 0)))
        );
        assert_eq!(buffs.active(), Some(BuffKind::VerticalClear));
        assert_eq!(buffs.remaining(BuffKind::VerticalClear), 3);
    }

    #[test]
    fn test_exhausted_buff_cannot_be_armed() {
        let mut buffs = BuffSystem::new(BuffCharges::new(0, 1, 1), false);

        assert_eq!(
            buffs.activate(BuffKind::VerticalClear),
            Err(ActionError::BuffExhausted(BuffKind::VerticalClear))
        );
        assert_eq!(buffs.active(), None);
    }

    #[test]
    fn test_exhausted_buff_armed_when_allowed() {
        let mut buffs = BuffSystem::new(BuffCharges::new(0, 1, 1), true);
        buffs.activate(BuffKind::VerticalClear).unwrap();

        let outcome = buffs.try_use_on_cell(&board(), Coord::new(0, 0)).unwrap();

        assert_eq!(outcome, BuffOutcome::Exhausted(BuffKind::VerticalClear));
        assert_eq!(buffs.remaining(BuffKind::VerticalClear), 0);
        assert_eq!(buffs.active(), None);
    }

    #[test]
    fn test_uses_run_out() {
        let mut buffs = BuffSystem::new(BuffCharges::new(0, 2, 0), false);
        let board = board();

        for _ in 0..2 {
            buffs.activate(BuffKind::HorizontalClear).unwrap();
            buffs.try_use_on_cell(&board, Coord::new(0, 1)).unwrap();
        }

        assert!(!buffs.is_available(BuffKind::HorizontalClear));
        assert!(buffs.activate(BuffKind::HorizontalClear).is_err());
    }
}
