//! End-to-end shift and undo scenarios driven through a `Player`.

mod common;

use common::new_player;
use gearshift::{ShiftError, StackKind, TransmissionState};

#[test]
fn fresh_player_is_idle_and_cannot_undo() {
    let player = new_player();

    assert_eq!(player.transmission_state(), TransmissionState::Idle);

    let err = player.undo().unwrap_err();
    assert_eq!(err, ShiftError::EmptyStack(StackKind::CommandList));
    assert_eq!(player.transmission_state(), TransmissionState::Idle);
}

#[test]
fn shift_up_then_undo_restores_idle() {
    let player = new_player();

    player.shift_up();
    assert_eq!(player.transmission_state(), TransmissionState::ShiftingUp);

    assert!(player.undo().is_ok());
    assert_eq!(player.transmission_state(), TransmissionState::Idle);
}

#[test]
fn shift_down_then_undo_restores_idle() {
    let player = new_player();

    player.shift_down();
    assert_eq!(player.transmission_state(), TransmissionState::ShiftingDown);

    assert!(player.undo().is_ok());
    assert_eq!(player.transmission_state(), TransmissionState::Idle);
}

#[test]
fn redo_after_undo_fails_and_leaves_state() {
    let player = new_player();

    player.shift_up();
    player.undo().unwrap();

    assert_eq!(player.redo(), Err(ShiftError::NotImplemented("redo")));
    assert_eq!(player.transmission_state(), TransmissionState::Idle);
}

#[test]
fn redo_without_undo_fails_and_leaves_state() {
    let player = new_player();
    player.shift_down();

    assert_eq!(player.redo(), Err(ShiftError::NotImplemented("redo")));
    assert_eq!(player.transmission_state(), TransmissionState::ShiftingDown);
    assert_eq!(player.commands().len(), 1);
}

#[test]
fn undos_run_in_reverse_order_until_empty() {
    let player = new_player();

    player.shift_up();
    player.shift_down();

    player.undo().unwrap();
    assert_eq!(player.transmission_state(), TransmissionState::ShiftingUp);
    player.undo().unwrap();
    assert_eq!(player.transmission_state(), TransmissionState::Idle);

    let err = player.undo().unwrap_err();
    assert!(err.is_empty_stack());
    assert_eq!(player.transmission_state(), TransmissionState::Idle);
}

#[test]
fn repeated_shifts_in_the_same_direction_are_each_undoable() {
    let player = new_player();

    player.shift_up();
    player.shift_up();
    player.shift_up();

    player.undo().unwrap();
    player.undo().unwrap();
    assert_eq!(player.transmission_state(), TransmissionState::ShiftingUp);
    player.undo().unwrap();
    assert_eq!(player.transmission_state(), TransmissionState::Idle);
}

#[test]
fn controller_redo_matches_player_redo() {
    let player = new_player();
    player.shift_up();

    assert_eq!(player.shifter().redo_last_undo_action(), player.redo());
    assert_eq!(player.transmission_state(), TransmissionState::ShiftingUp);
}

#[test]
fn history_tracks_the_path_taken() {
    let player = new_player();

    player.shift_up();
    player.shift_down();

    let snapshot = player.shifter().transmission().snapshot();
    let path: Vec<_> = snapshot
        .previous_states()
        .get_path()
        .into_iter()
        .copied()
        .collect();
    assert_eq!(
        path,
        vec![
            TransmissionState::Idle,
            TransmissionState::ShiftingUp,
            TransmissionState::ShiftingDown,
        ]
    );
}
