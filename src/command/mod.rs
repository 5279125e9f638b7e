//! Command pattern: executable, undoable units of work.
//!
//! # Key Concepts
//!
//! - **Command**: binds one mutation on a target behind `execute`/`undo`
//! - **Shift commands**: the two commands bound to a [`SharedTransmission`]
//! - **Command list**: mutex-guarded LIFO stack of executed commands
//!
//! [`SharedTransmission`]: crate::transmission::SharedTransmission

mod list;
mod shift;

pub use list::{CommandList, CommandListGuard};
pub use shift::{ShiftDownCommand, ShiftUpCommand};

use crate::error::ShiftError;

/// A unit of work that can be executed and undone.
///
/// Commands are stored in a [`CommandList`] as `Arc<dyn Command>`, so they
/// must be shareable across threads.
///
/// The shift commands undo through the transmission's own history stack.
/// Undoing either variant restores whatever state the transmission saved
/// last, so per-command `undo` does not depend on which command it is
/// called on. A command type carrying its own captured state would need to
/// diverge from this.
pub trait Command: Send + Sync {
    /// Apply the command to its target. Cannot fail.
    fn execute(&self);

    /// Reverse the most recent change on the command's target.
    ///
    /// # Errors
    ///
    /// Returns whatever error the target's own undo reports.
    fn undo(&self) -> Result<(), ShiftError>;

    /// Short label for logs.
    fn name(&self) -> &str;
}
