//! Error types shared by the transmission, command list and player.

use std::fmt;
use thiserror::Error;

/// Which LIFO stack an `EmptyStack` error came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackKind {
    /// The transmission's history of prior states
    History,
    /// A command list's stack of executed commands
    CommandList,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::History => f.write_str("transmission history"),
            Self::CommandList => f.write_str("command list"),
        }
    }
}

/// Errors returned by shift, undo and redo operations.
///
/// Shifting itself never fails. A failed operation leaves all state untouched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShiftError {
    #[error("Nothing to pop off the {0}")]
    EmptyStack(StackKind),

    #[error("{0} not implemented yet")]
    NotImplemented(&'static str),
}

impl ShiftError {
    /// Shorthand for the error every redo call returns.
    pub(crate) fn redo_unsupported() -> Self {
        Self::NotImplemented("redo")
    }

    /// True for `EmptyStack`, whichever stack it came from.
    pub fn is_empty_stack(&self) -> bool {
        matches!(self, Self::EmptyStack(_))
    }
}
