//! Builder API for ergonomic construction.
//!
//! This module provides the `state_enum!` macro for declaring states and a
//! fluent builder for players.

pub mod macros;
pub mod player;

pub use player::PlayerBuilder;
