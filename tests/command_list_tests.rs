//! Concurrency behavior of a shared `CommandList`.

mod common;

use gearshift::{
    Command, CommandList, SharedTransmission, ShiftDownCommand, ShiftUpCommand, TransmissionState,
};
use std::sync::Arc;
use std::thread;

#[test]
fn concurrent_pushes_are_never_lost() {
    common::init_tracing();

    const THREADS: usize = 8;
    const PUSHES_PER_THREAD: usize = 250;

    let transmission = SharedTransmission::new();
    let commands = Arc::new(CommandList::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let commands = Arc::clone(&commands);
            let transmission = transmission.clone();
            thread::spawn(move || {
                for _ in 0..PUSHES_PER_THREAD {
                    let command: Arc<dyn Command> = if i % 2 == 0 {
                        Arc::new(ShiftUpCommand::new(transmission.clone()))
                    } else {
                        Arc::new(ShiftDownCommand::new(transmission.clone()))
                    };
                    commands.push_command(command);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(commands.len(), THREADS * PUSHES_PER_THREAD);
}

#[test]
fn concurrent_shift_and_undo_pairs_balance_out() {
    common::init_tracing();

    const THREADS: usize = 4;
    const ROUNDS: usize = 100;

    let transmission = SharedTransmission::new();
    let commands = Arc::new(CommandList::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let commands = Arc::clone(&commands);
            let up = Arc::new(ShiftUpCommand::new(transmission.clone()));
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    up.execute();
                    commands.push_command(up.clone());
                    commands.undo_last_command().unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Every shift was matched by one undo, whichever thread performed it.
    assert!(commands.is_empty());
    assert!(transmission.snapshot().previous_states().is_empty());
    assert_eq!(transmission.state(), TransmissionState::Idle);
}

#[test]
fn audit_list_can_be_shared_between_controllers() {
    let audit = Arc::new(CommandList::new());
    let first = gearshift::ShiftController::new();
    let second = gearshift::ShiftController::new();

    first.shift_up_action(&audit);
    second.shift_down_action(&audit);

    assert_eq!(audit.len(), 2);
    assert_eq!(audit.last_command_name().as_deref(), Some("shift_down"));

    audit.undo_last_command().unwrap();
    assert_eq!(second.transmission_state(), TransmissionState::Idle);
    assert_eq!(first.transmission_state(), TransmissionState::ShiftingUp);
}
