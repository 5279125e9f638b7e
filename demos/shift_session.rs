//! Shift Session
//!
//! This example drives one player through a scripted sequence of shifts,
//! undos and a redo attempt, printing the transmission state after each.
//!
//! Key concepts:
//! - Shifts always succeed and are recorded on the player's undo stack
//! - Undo reverses shifts in reverse order until the stack is empty
//! - Redo is reported as not implemented instead of being ignored
//!
//! Run with: RUST_LOG=gearshift=debug cargo run --example shift_session

use gearshift::{Player, ShiftError};
use tracing_subscriber::EnvFilter;

enum Input {
    ShiftUp,
    ShiftDown,
    Undo,
    Redo,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Shift Session Example ===\n");

    let player = Player::new();
    println!(
        "Player {} starts in {}",
        player.id(),
        player.transmission_state()
    );

    let script = [
        Input::ShiftUp,
        Input::ShiftDown,
        Input::ShiftUp,
        Input::Undo,
        Input::Redo,
        Input::Undo,
        Input::Undo,
        Input::Undo,
    ];

    for input in script {
        let (label, result): (&str, Result<(), ShiftError>) = match input {
            Input::ShiftUp => {
                player.shift_up();
                ("shift up", Ok(()))
            }
            Input::ShiftDown => {
                player.shift_down();
                ("shift down", Ok(()))
            }
            Input::Undo => ("undo", player.undo()),
            Input::Redo => ("redo", player.redo()),
        };

        match result {
            Ok(()) => println!(
                "  {:<10} -> {:<13} (undo depth {})",
                label,
                player.transmission_state(),
                player.commands().len()
            ),
            Err(err) => println!("  {:<10} !! {}", label, err),
        }
    }

    let snapshot = player.shifter().transmission().snapshot();
    println!(
        "\nFinal state: {} with {} saved states (path: {:?})",
        snapshot.state(),
        snapshot.previous_states().len(),
        snapshot.previous_states().get_path()
    );
    let saved: Vec<_> = snapshot.previous_states().saved_states().collect();
    println!("Saved for undo, oldest first: {:?}", saved);

    println!("\n=== Example Complete ===");
}
