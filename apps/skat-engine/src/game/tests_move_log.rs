use std::io::Write;

use crate::domain::fixtures::{clubs_hand_sweep, deal_line, game_of};
use crate::domain::state::TableRules;
use crate::errors::domain::DomainError;
use crate::game::move_log::{parse_moves, split_games};
use crate::game::projection::Game;

#[test]
fn log_text_round_trips() {
    let game = game_of(&clubs_hand_sweep());
    let text = game.log().to_string();
    assert_eq!(text.lines().count(), 36);
    let parsed = parse_moves(&text);
    assert!(parsed.error.is_none());
    assert_eq!(parsed.moves, game.moves());
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let text = format!("# table 3\n\n{}\n  1 18  \n# bid\n0 y\n", deal_line());
    let parsed = parse_moves(&text);
    assert!(parsed.error.is_none());
    assert_eq!(parsed.moves.len(), 3);
}

#[test]
fn parsing_stops_at_the_first_bad_line() {
    let text = format!("{}\n1 18\n0 maybe\n0 y\n", deal_line());
    let parsed = parse_moves(&text);
    assert_eq!(parsed.moves.len(), 2);
    match parsed.error {
        Some(DomainError::MalformedLogEntry { index, detail }) => {
            assert_eq!(index, 2);
            assert!(detail.contains("line 3"), "{detail}");
        }
        other => panic!("expected a malformed entry, got {other:?}"),
    }
}

#[test]
fn illegal_move_keeps_the_valid_prefix() {
    // rear cannot bid before middle
    let text = format!("{}\n2 18\n1 18\n", deal_line());
    let (game, err) = Game::load(TableRules::default(), &text);
    assert_eq!(game.len(), 1);
    assert!(matches!(err, Some(DomainError::MalformedLogEntry { index: 1, .. })));
}

#[test]
fn games_are_separated_by_blank_lines() {
    let one = format!("{}\n1 p\n2 p\n0 p\n", deal_line());
    let text = format!("# series\n\n{one}\n\n\n{one}\n# trailing comment only\n");
    let games = split_games(&text);
    assert_eq!(games.len(), 2);
    assert_eq!(parse_moves(&games[1]).moves.len(), 4);
}

#[test]
fn loads_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let game = game_of(&clubs_hand_sweep());
    write!(file, "{}", game.log()).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let (loaded, err) = Game::load(TableRules::default(), &text);
    assert!(err.is_none());
    assert_eq!(loaded.moves(), game.moves());
    assert_eq!(loaded.result(), game.result());
}
