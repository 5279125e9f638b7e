//! Gearshift: a transmission shift state machine with a command-pattern undo stack.
//!
//! A [`Player`] drives a [`Transmission`] through a [`ShiftController`].
//! Every shift the controller performs is recorded in the player's
//! [`CommandList`], and undo pops that list in reverse order.
//!
//! # Core Concepts
//!
//! - **Transmission**: unguarded state machine over [`TransmissionState`]
//!   with a LIFO history of prior states
//! - **Commands**: [`ShiftUpCommand`] and [`ShiftDownCommand`] bind a shift
//!   on a [`SharedTransmission`] to the [`Command`] trait
//! - **Command list**: mutex-guarded undo stack of executed commands
//! - **Errors**: every failure is a [`ShiftError`]; redo is always
//!   `NotImplemented`
//!
//! # Example
//!
//! ```rust
//! use gearshift::{Player, TransmissionState};
//!
//! let player = Player::builder().build();
//!
//! player.shift_up();
//! assert_eq!(player.transmission_state(), TransmissionState::ShiftingUp);
//!
//! player.undo().unwrap();
//! assert_eq!(player.transmission_state(), TransmissionState::Idle);
//! assert!(player.redo().is_err());
//! ```

pub mod builder;
pub mod command;
pub mod controller;
pub mod core;
pub mod error;
pub mod player;
pub mod transmission;

// Re-export commonly used types
pub use crate::core::{State, StateHistory, StateTransition};
pub use builder::PlayerBuilder;
pub use command::{Command, CommandList, CommandListGuard, ShiftDownCommand, ShiftUpCommand};
pub use controller::ShiftController;
pub use error::{ShiftError, StackKind};
pub use player::{Player, PlayerId};
pub use transmission::{SharedTransmission, Transmission, TransmissionState};
