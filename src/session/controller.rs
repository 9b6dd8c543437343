//! Session state and transitions.

use tracing::{debug, info};

use super::{SelectOutcome, SessionStatus, SwapOutcome};
use crate::board::{Board, SeedReport};
use crate::buffs::{BuffKind, BuffOutcome, BuffSystem};
use crate::cascade::{CascadeReport, CascadeResolver};
use crate::core::{Coord, GameConfig, GameRng};
use crate::error::{ActionError, ConfigError, Result};
use crate::events::{EventBus, GameEvent, ListenerId};
use crate::matching::{find_all_matches, MatchSet};
use crate::rules::find_possible_move;

/// One game from start to final score.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    board: Board,
    buffs: BuffSystem,
    bus: EventBus,
    seed_rng: GameRng,
    refill_rng: GameRng,
    score: u32,
    moves: u32,
    selected: Option<Coord>,
    status: SessionStatus,
}

impl Session {
    /// Validate `config` and build an unstarted session with an empty board.
    pub fn new(config: GameConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let rng = GameRng::new(config.seed);
        Ok(Self {
            board: Board::new(&config.layout),
            buffs: BuffSystem::new(config.buff_uses, config.consume_exhausted_buffs),
            bus: EventBus::new(),
            seed_rng: rng.for_context("seed"),
            refill_rng: rng.for_context("refill"),
            score: 0,
            moves: config.moves,
            selected: None,
            status: SessionStatus::NotStarted,
            config,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn buffs(&self) -> &BuffSystem {
        &self.buffs
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == SessionStatus::Finished
    }

    /// A swap that would create a match, if one exists.
    #[must_use]
    pub fn hint(&self) -> Option<(Coord, Coord)> {
        find_possible_move(&self.board)
    }

    // === Listeners ===

    /// Register a listener for every event this session publishes.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id)
    }

    // === Lifecycle ===

    /// Seed the board and begin accepting input.
    pub fn start(&mut self) -> Result<SeedReport> {
        self.ensure_not_started()?;
        let report = self
            .board
            .reseed(&self.config.palette, &mut self.seed_rng, self.config.seed_attempts);
        self.begin();
        Ok(report)
    }

    /// Begin on a prepared board instead of a seeded one.
    ///
    /// The board is used as given, matches included; they stay on the board
    /// until a cascade touches them. It must have exactly the cells of the
    /// configured layout.
    pub fn start_with(&mut self, board: Board) -> Result<()> {
        self.ensure_not_started()?;
        if !board.fits(&self.config.layout) {
            return Err(ActionError::LayoutMismatch);
        }
        self.board = board;
        self.begin();
        Ok(())
    }

    fn begin(&mut self) {
        self.status = SessionStatus::Running;
        self.score = 0;
        self.moves = self.config.moves;
        info!(moves = self.moves, seed = self.config.seed, "session started");

        self.publish_board();
        self.bus.publish(&GameEvent::ScoreChanged { score: self.score });
        self.bus.publish(&GameEvent::MovesChanged { moves: self.moves });
    }

    fn finish(&mut self) {
        self.status = SessionStatus::Finished;
        self.set_selection(None);
        if self.buffs.deactivate().is_some() {
            self.bus.publish(&GameEvent::ActiveBuffChanged { active: None });
        }
        info!(score = self.score, "session finished");
        self.bus.publish(&GameEvent::SessionFinished { final_score: self.score });
    }

    // === Input ===

    /// Handle a click on `cell`.
    ///
    /// Routes to the armed buff if there is one, otherwise advances the
    /// selection state machine.
    pub fn select_cell(&mut self, cell: Coord) -> Result<SelectOutcome> {
        self.ensure_running()?;
        self.ensure_occupied(cell)?;

        if self.buffs.active().is_some() {
            return self.use_buff(cell);
        }

        match self.selected {
            Some(current) if current == cell => {
                self.set_selection(None);
                Ok(SelectOutcome::Deselected)
            }
            Some(current) if current.is_neighbor(cell) => self.attempt_swap(current, cell).map(SelectOutcome::Swap),
            _ => {
                self.set_selection(Some(cell));
                Ok(SelectOutcome::Selected(cell))
            }
        }
    }

    /// Exchange two neighboring tokens, keeping the swap only if it matches.
    pub fn attempt_swap(&mut self, a: Coord, b: Coord) -> Result<SwapOutcome> {
        self.ensure_running()?;
        self.ensure_occupied(a)?;
        self.ensure_occupied(b)?;
        if !a.is_neighbor(b) {
            return Err(ActionError::NotNeighbors(a, b));
        }

        self.set_selection(None);
        self.board.swap(a, b);
        self.bus.publish(&GameEvent::Swapped { a, b });

        let matches = find_all_matches(&self.board);
        if matches.is_empty() {
            self.board.swap(a, b);
            debug!(%a, %b, "swap reverted");
            self.bus.publish(&GameEvent::SwapReverted { a, b });
            return Ok(SwapOutcome::Reverted);
        }

        self.moves = self.moves.saturating_sub(1);
        debug!(%a, %b, matched = matches.len(), moves = self.moves, "swap accepted");
        self.bus.publish(&GameEvent::MovesChanged { moves: self.moves });

        let report = self.run_cascade(matches);
        if self.moves == 0 {
            self.finish();
        } else {
            self.check_possible_moves();
        }
        Ok(SwapOutcome::Matched(report))
    }

    /// Arm a buff.
    pub fn activate_buff(&mut self, kind: BuffKind) -> Result<()> {
        self.ensure_running()?;
        let before = self.buffs.active();
        self.buffs.activate(kind)?;
        if before != Some(kind) {
            self.bus.publish(&GameEvent::ActiveBuffChanged { active: Some(kind) });
        }
        Ok(())
    }

    /// Disarm the armed buff, returning it.
    pub fn deactivate_buff(&mut self) -> Option<BuffKind> {
        let previous = self.buffs.deactivate();
        if previous.is_some() {
            self.bus.publish(&GameEvent::ActiveBuffChanged { active: None });
        }
        previous
    }

    /// Disarm `kind` if armed, otherwise arm it.
    pub fn toggle_buff(&mut self, kind: BuffKind) -> Result<Option<BuffKind>> {
        self.ensure_running()?;
        let active = self.buffs.toggle(kind)?;
        self.bus.publish(&GameEvent::ActiveBuffChanged { active });
        Ok(active)
    }

    // === Internals ===

    fn use_buff(&mut self, cell: Coord) -> Result<SelectOutcome> {
        let kind = self.buffs.active().ok_or(ActionError::NoActiveBuff)?;
        let outcome = self.buffs.try_use_on_cell(&self.board, cell)?;
        self.set_selection(None);

        let cascade = match &outcome {
            BuffOutcome::Cleared(cells) => Some(self.run_cascade(cells.clone())),
            BuffOutcome::Reshuffle => {
                self.board
                    .reseed(&self.config.palette, &mut self.seed_rng, self.config.seed_attempts);
                self.publish_board();
                None
            }
            BuffOutcome::Exhausted(_) => None,
        };

        self.bus.publish(&GameEvent::BuffUsed {
            kind,
            remaining: self.buffs.remaining(kind),
        });
        self.bus.publish(&GameEvent::ActiveBuffChanged { active: None });
        if !matches!(outcome, BuffOutcome::Exhausted(_)) {
            self.check_possible_moves();
        }

        Ok(SelectOutcome::Buff { kind, outcome, cascade })
    }

    fn run_cascade(&mut self, initial: MatchSet) -> CascadeReport {
        let report = CascadeResolver::new(&self.config.palette)
            .with_max_rounds(self.config.max_cascade_rounds)
            .with_seed_attempts(self.config.seed_attempts)
            .resolve(
                &mut self.board,
                initial,
                &mut self.refill_rng,
                &mut self.seed_rng,
                self.status == SessionStatus::Running,
            );

        for phase in &report.phases {
            if phase.points > 0 {
                self.score += phase.points;
                self.bus.publish(&GameEvent::ScoreChanged { score: self.score });
            }
            self.bus.publish(&GameEvent::CascadePhase(phase.clone()));
        }
        if report.forced_reseed.is_some() {
            self.publish_board();
        }
        report
    }

    fn check_possible_moves(&mut self) {
        if find_possible_move(&self.board).is_none() {
            debug!("no possible move left on the board");
            self.bus.publish(&GameEvent::NoMovesAvailable);
        }
    }

    fn set_selection(&mut self, selected: Option<Coord>) {
        if self.selected != selected {
            self.selected = selected;
            self.bus.publish(&GameEvent::SelectionChanged { selected });
        }
    }

    fn publish_board(&mut self) {
        let cells = self.board.snapshot();
        self.bus.publish(&GameEvent::BoardReseeded { cells });
    }

    fn ensure_not_started(&self) -> Result<()> {
        match self.status {
            SessionStatus::NotStarted => Ok(()),
            SessionStatus::Running => Err(ActionError::AlreadyStarted),
            SessionStatus::Finished => Err(ActionError::Finished),
        }
    }

    fn ensure_running(&self) -> Result<()> {
        match self.status {
            SessionStatus::NotStarted => Err(ActionError::NotStarted),
            SessionStatus::Running => Ok(()),
            SessionStatus::Finished => Err(ActionError::Finished),
        }
    }

    fn ensure_occupied(&self, cell: Coord) -> Result<()> {
        match self.board.cell(cell) {
            None => Err(ActionError::InvalidCell(cell)),
            Some(c) if c.is_empty() => Err(ActionError::EmptyCell(cell)),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardLayout, Token};

    fn session_on(rows: &[&str], moves: u32) -> Session {
        let board = Board::from_rows(rows);
        let config = GameConfig::default()
            .with_layout(board.layout())
            .with_palette(Token::palette(6))
            .with_moves(moves)
            .with_seed(17);
        let mut session = Session::new(config).unwrap();
        session.start_with(board).unwrap();
        session
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GameConfig::default().with_moves(0);

        assert!(matches!(Session::new(config), Err(ConfigError::ZeroMoves)));
    }

    #[test]
    fn test_input_before_start() {
        let mut session = Session::new(GameConfig::default()).unwrap();

        assert_eq!(session.status(), SessionStatus::NotStarted);
        assert_eq!(session.select_cell(Coord::new(0, 0)), Err(ActionError::NotStarted));
        assert_eq!(session.activate_buff(BuffKind::Reshuffle), Err(ActionError::NotStarted));
    }

    #[test]
    fn test_start_twice() {
        let mut session = Session::new(GameConfig::default()).unwrap();
        session.start().unwrap();

        assert_eq!(session.start(), Err(ActionError::AlreadyStarted));
    }

    #[test]
    fn test_start_with_rejects_other_layout() {
        let config = GameConfig::default().with_layout(BoardLayout::rect(3, 2));
        let mut session = Session::new(config).unwrap();

        assert_eq!(session.start_with(Board::from_rows(&["ABC", "BCA", "CAB"])), Err(ActionError::LayoutMismatch));
        assert_eq!(session.start_with(Board::from_rows(&["ABC", "BC#"])), Err(ActionError::LayoutMismatch));
        assert_eq!(session.status(), SessionStatus::NotStarted);

        assert_eq!(session.start_with(Board::from_rows(&["ABC", "BCA"])), Ok(()));
        assert_eq!(session.status(), SessionStatus::Running);
    }

    #[test]
    fn test_start_seeds_full_board() {
        let mut session = Session::new(GameConfig::default().with_seed(5)).unwrap();
        let report = session.start().unwrap();

        assert_eq!(report.placed, 64);
        assert!(session.board().empty_cells().is_empty());
        if report.is_clean() {
            assert!(find_all_matches(session.board()).is_empty());
        }
    }

    #[test]
    fn test_selection_state_machine() {
        let mut session = session_on(&["ABC", "BCA", "CAB"], 5);

        assert_eq!(session.select_cell(Coord::new(0, 0)), Ok(SelectOutcome::Selected(Coord::new(0, 0))));
        assert_eq!(session.select_cell(Coord::new(0, 0)), Ok(SelectOutcome::Deselected));
        assert_eq!(session.selected(), None);

        session.select_cell(Coord::new(0, 0)).unwrap();
        // Not adjacent: reselect.
        assert_eq!(session.select_cell(Coord::new(2, 2)), Ok(SelectOutcome::Selected(Coord::new(2, 2))));
        assert_eq!(session.selected(), Some(Coord::new(2, 2)));
    }

    #[test]
    fn test_reverted_swap_is_free() {
        let mut session = session_on(&["ABC", "BCA", "CAB"], 5);
        let before = session.board().clone();

        session.select_cell(Coord::new(0, 0)).unwrap();
        let outcome = session.select_cell(Coord::new(1, 0)).unwrap();

        assert_eq!(outcome, SelectOutcome::Swap(SwapOutcome::Reverted));
        assert_eq!(session.board(), &before);
        assert_eq!(session.moves_remaining(), 5);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_matching_swap_costs_a_move() {
        let mut session = session_on(&["AABAC", "CDAEB"], 5);

        let SwapOutcome::Matched(report) = session.attempt_swap(Coord::new(2, 0), Coord::new(2, 1)).unwrap() else {
            panic!("expected a match");
        };

        assert_eq!(report.phases[0].points, 60);
        assert_eq!(session.score(), report.total_score);
        assert_eq!(session.moves_remaining(), 4);
    }

    #[test]
    fn test_swap_rejects_non_neighbors() {
        let mut session = session_on(&["AABAC", "CDAEB"], 5);

        assert_eq!(
            session.attempt_swap(Coord::new(0, 0), Coord::new(2, 0)),
            Err(ActionError::NotNeighbors(Coord::new(0, 0), Coord::new(2, 0)))
        );
    }

    #[test]
    fn test_last_move_finishes() {
        let mut session = session_on(&["AABAC", "CDAEB"], 1);

        session.attempt_swap(Coord::new(2, 0), Coord::new(2, 1)).unwrap();

        assert!(session.is_finished());
        assert_eq!(session.moves_remaining(), 0);
        assert_eq!(session.select_cell(Coord::new(0, 0)), Err(ActionError::Finished));
    }

    #[test]
    fn test_buff_click_routes_to_buff() {
        let mut session = session_on(&["ABC", "BCA", "CAB"], 5);
        session.activate_buff(BuffKind::Reshuffle).unwrap();

        let outcome = session.select_cell(Coord::new(1, 1)).unwrap();

        assert!(matches!(outcome, SelectOutcome::Buff { kind: BuffKind::Reshuffle, .. }));
        assert_eq!(session.buffs().remaining(BuffKind::Reshuffle), 2);
        assert_eq!(session.buffs().active(), None);
        assert_eq!(session.moves_remaining(), 5);
        assert_eq!(session.score(), 0);
    }
}
