//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use rust_match3::{Board, GameConfig, GameEvent, Session, Token};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber once. `RUST_LOG` sets the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Config sized to `board`, six-token palette, fixed seed.
pub fn config_for(board: &Board, moves: u32) -> GameConfig {
    GameConfig::default()
        .with_layout(board.layout())
        .with_palette(Token::palette(6))
        .with_moves(moves)
        .with_seed(2024)
}

/// A running session on a prepared board.
pub fn session_on(rows: &[&str], moves: u32) -> Session {
    session_with(rows, |config| config.with_moves(moves))
}

/// A running session on a prepared board, with the config adjusted first.
pub fn session_with(rows: &[&str], adjust: impl FnOnce(GameConfig) -> GameConfig) -> Session {
    init_tracing();
    let board = Board::from_rows(rows);
    let config = adjust(config_for(&board, 10));
    let mut session = Session::new(config).expect("valid config");
    session.start_with(board).expect("fresh session");
    session
}

/// Capture every event the session publishes from now on.
pub fn record(session: &mut Session) -> Rc<RefCell<Vec<GameEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    session.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    log
}
