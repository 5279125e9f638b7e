//! Mutex-guarded undo stack of executed commands.

use super::Command;
use crate::error::{ShiftError, StackKind};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Ordered stack of executed commands.
///
/// `push_command` and `undo_last_command` each hold the list's lock for
/// their whole operation, so a list shared through `Arc` never loses or
/// double-undoes an entry. Commands are undone in reverse order of
/// execution. There is no redo buffer.
///
/// ```rust
/// use gearshift::command::{CommandList, ShiftUpCommand};
/// use gearshift::{SharedTransmission, TransmissionState};
/// use std::sync::Arc;
///
/// let transmission = SharedTransmission::new();
/// let shift_up = Arc::new(ShiftUpCommand::new(transmission.clone()));
/// let commands = CommandList::new();
///
/// gearshift::Command::execute(shift_up.as_ref());
/// commands.push_command(shift_up);
///
/// commands.undo_last_command().unwrap();
/// assert_eq!(transmission.state(), TransmissionState::Idle);
/// assert!(commands.undo_last_command().is_err());
/// ```
#[derive(Default)]
pub struct CommandList {
    list: Mutex<Vec<Arc<dyn Command>>>,
}

impl CommandList {
    /// An empty command list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command under the list's lock.
    pub fn push_command(&self, command: Arc<dyn Command>) {
        self.lock().push_command(command);
    }

    /// Remove and return the most recent command.
    ///
    /// Takes `&mut self`, so nothing else can be holding the lock; callers
    /// sharing the list go through [`CommandList::lock`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::EmptyStack`] if the list is empty.
    pub fn pop_last_command(&mut self) -> Result<Arc<dyn Command>, ShiftError> {
        let list = self.list.get_mut().unwrap_or_else(PoisonError::into_inner);
        pop_from(list)
    }

    /// Acquire exclusive access to the list until the guard is dropped.
    pub fn lock(&self) -> CommandListGuard<'_> {
        CommandListGuard {
            list: self.list.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Pop the most recent command and undo it, all under one lock.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::EmptyStack`] with [`StackKind::CommandList`]
    /// if nothing has been recorded, otherwise whatever the command's own
    /// undo returns. A command whose undo fails is not put back.
    pub fn undo_last_command(&self) -> Result<(), ShiftError> {
        let mut guard = self.lock();
        let command = guard.pop_last_command().inspect_err(|err| {
            warn!(error = %err, "undo requested with no recorded commands");
        })?;

        debug!(
            command = command.name(),
            remaining = guard.len(),
            "undoing command"
        );
        command.undo()
    }

    /// Always fails: executed commands are discarded on undo, so there is
    /// nothing to redo.
    ///
    /// # Errors
    ///
    /// Always returns [`ShiftError::NotImplemented`].
    pub fn redo_last_command(&self) -> Result<(), ShiftError> {
        warn!("redo requested on command list");
        Err(ShiftError::redo_unsupported())
    }

    /// Number of commands waiting to be undone.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the command an undo would reverse next.
    pub fn last_command_name(&self) -> Option<String> {
        self.lock().list.last().map(|c| c.name().to_string())
    }
}

impl fmt::Debug for CommandList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.lock();
        f.debug_list()
            .entries(guard.list.iter().map(|c| c.name()))
            .finish()
    }
}

/// Exclusive access to a [`CommandList`], held until dropped.
pub struct CommandListGuard<'a> {
    list: MutexGuard<'a, Vec<Arc<dyn Command>>>,
}

impl CommandListGuard<'_> {
    pub fn push_command(&mut self, command: Arc<dyn Command>) {
        debug!(
            command = command.name(),
            depth = self.list.len() + 1,
            "command recorded"
        );
        self.list.push(command);
    }

    /// See [`CommandList::pop_last_command`].
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::EmptyStack`] if the list is empty.
    pub fn pop_last_command(&mut self) -> Result<Arc<dyn Command>, ShiftError> {
        pop_from(&mut self.list)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

fn pop_from(list: &mut Vec<Arc<dyn Command>>) -> Result<Arc<dyn Command>, ShiftError> {
    list.pop()
        .ok_or(ShiftError::EmptyStack(StackKind::CommandList))
}
