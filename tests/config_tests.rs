//! Configuration loading and serialization.

use rust_match3::{
    BoardLayout, BuffCharges, BuffKind, ConfigError, Coord, GameConfig, GameEvent, Session, Token,
};

/// A full TOML config drives a session on an irregular board.
#[test]
fn test_toml_irregular_board() {
    let config = GameConfig::from_toml_str(
        r#"
        palette = [0, 1, 2, 3]
        moves = 8
        seed = 31

        [layout]
        width = 4
        height = 3
        holes = [{ x = 0, y = 0 }, { x = 3, y = 2 }]
        "#,
    )
    .unwrap();

    assert_eq!(config.palette, Token::palette(4));
    assert_eq!(config.layout.cell_count(), 10);

    let mut session = Session::new(config).unwrap();
    session.start().unwrap();

    assert!(!session.board().contains(Coord::new(0, 0)));
    assert!(!session.board().contains(Coord::new(3, 2)));
    assert_eq!(session.board().coords().len(), 10);
    assert_eq!(session.moves_remaining(), 8);
}

/// A hole outside the board is rejected before a session exists.
#[test]
fn test_toml_hole_out_of_bounds() {
    let result = GameConfig::from_toml_str(
        r#"
        [layout]
        width = 2
        height = 2
        holes = [{ x = 5, y = 0 }]
        "#,
    );

    assert!(matches!(result, Err(ConfigError::HoleOutOfBounds(c)) if c == Coord::new(5, 0)));
}

/// A board whose area overflows is an error, not a crash.
#[test]
fn test_toml_oversized_board() {
    let result = GameConfig::from_toml_str(
        r#"
        [layout]
        width = 70000
        height = 70000
        "#,
    );

    assert!(matches!(result, Err(ConfigError::BoardTooLarge { width: 70_000, height: 70_000, .. })));
}

/// Config survives a JSON round trip.
#[test]
fn test_config_json_round_trip() {
    let config = GameConfig::default()
        .with_layout(BoardLayout::rect(6, 5).with_hole(Coord::new(2, 2)))
        .with_buff_uses(BuffCharges::new(1, 2, 3))
        .with_seed(5);

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized, config);
}

/// Events serialize for transport to a presentation process.
#[test]
fn test_event_json_round_trip() {
    let events = vec![
        GameEvent::ScoreChanged { score: 90 },
        GameEvent::BuffUsed {
            kind: BuffKind::HorizontalClear,
            remaining: 1,
        },
        GameEvent::BoardReseeded {
            cells: vec![(Coord::new(0, 0), Some(Token::new(2))), (Coord::new(1, 0), None)],
        },
    ];

    let json = serde_json::to_string(&events).unwrap();
    let deserialized: Vec<GameEvent> = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized, events);
}
