//! Scoring of matches found on real boards.

use rust_match3::rules::{score_breakdown, ScoreBreakdown};
use rust_match3::{find_all_matches, score, Board};

/// Four in a row and nothing else: 4 x 10 + 20.
#[test]
fn test_run_of_four_scores_sixty() {
    let board = Board::from_rows(&[
        "AAAAB",
        "BCBCA",
    ]);
    let matches = find_all_matches(&board);

    assert_eq!(matches.len(), 4);
    assert_eq!(score(&matches), 60);
}

/// A lone 2x2 block: 4 x 10 + 50.
#[test]
fn test_square_scores_ninety() {
    let board = Board::from_rows(&[
        "BCB",
        "CAA",
        "BAA",
    ]);
    let matches = find_all_matches(&board);

    assert_eq!(matches.len(), 4);
    assert_eq!(score(&matches), 90);
}

/// The five-cell corner collects the corner bonus but no line bonus.
#[test]
fn test_corner_bonus() {
    let board = Board::from_rows(&[
        "AAA",
        "ABC",
        "ACB",
    ]);
    let breakdown = score_breakdown(&find_all_matches(&board));

    assert_eq!(
        breakdown,
        ScoreBreakdown {
            base: 50,
            square: 0,
            corner: 30,
            line: 0,
        }
    );
}

/// Two unrelated runs in one scan are scored as one set.
#[test]
fn test_separate_runs_score_together() {
    let board = Board::from_rows(&[
        "AAAB",
        "CDCD",
        "BBBC",
    ]);
    let matches = find_all_matches(&board);

    assert_eq!(matches.len(), 6);
    assert_eq!(score(&matches), 60);
}

/// No match, no points.
#[test]
fn test_stable_board_scores_zero() {
    let board = Board::from_rows(&[
        "ABAB",
        "BABA",
    ]);

    assert_eq!(score(&find_all_matches(&board)), 0);
}
