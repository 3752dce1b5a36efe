//! Tests for headless replay.

use tictac_timeline::{Script, render_text, replay};
use tictac_timeline_core::{SortOrder, TimelineErrorKind};

#[test]
fn test_replay_renders_text() {
    let script = Script {
        moves: vec![0, 4],
        ..Script::default()
    };
    let view = replay::run(&script, SortOrder::Ascending).expect("valid script");
    let text = render_text(&view);
    assert_eq!(
        text,
        "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.\n\nNext player: X\n\n  Go to game start\n  Go to move #1, played row #1, column#1\n> Go to move #2, played row #2, column#2\n"
    );
}

#[test]
fn test_replay_skips_rejected_moves() {
    let script = Script {
        moves: vec![0, 4, 3, 5, 6, 7, 0],
        ..Script::default()
    };
    let view = replay::run(&script, SortOrder::Ascending).expect("valid script");
    assert_eq!(view.status(), "Winner: X");
    assert_eq!(view.history().len(), 6);
}

#[test]
fn test_replay_jump_and_descending() {
    let script = Script {
        moves: vec![0, 4, 8],
        jump: Some(1),
        descending: true,
    };
    let view = replay::run(&script, SortOrder::Ascending).expect("valid script");
    assert_eq!(*view.sort_order(), SortOrder::Descending);
    let steps: Vec<usize> = view.history().iter().map(|e| *e.step()).collect();
    assert_eq!(steps, vec![3, 2, 1, 0]);
    assert_eq!(view.status(), "Next player: O");
}

#[test]
fn test_replay_descending_config_is_not_toggled_back() {
    let script = Script {
        moves: vec![4],
        descending: true,
        ..Script::default()
    };
    let view = replay::run(&script, SortOrder::Descending).expect("valid script");
    assert_eq!(*view.sort_order(), SortOrder::Descending);
}

#[test]
fn test_replay_rejects_bad_cell() {
    let script = Script {
        moves: vec![0, 9],
        ..Script::default()
    };
    let err = replay::run(&script, SortOrder::Ascending).expect_err("bad cell");
    assert_eq!(err.kind, TimelineErrorKind::CellOutOfRange(9));
}
