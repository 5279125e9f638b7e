//! Core state types.
//!
//! This module holds the pieces every machine in the crate builds on:
//! - State definitions via the `State` trait
//! - The LIFO history stack consulted on undo

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
