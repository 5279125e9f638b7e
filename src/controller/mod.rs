//! Shift controller: mediates between a player and one transmission.

use crate::command::{Command, CommandList, ShiftDownCommand, ShiftUpCommand};
use crate::error::ShiftError;
use crate::transmission::{SharedTransmission, Transmission, TransmissionState};
use std::sync::Arc;
use tracing::warn;

/// Creates one transmission and the two commands bound to it, and records
/// every shift it performs into the command list it is handed.
///
/// ```rust
/// use gearshift::{CommandList, ShiftController, TransmissionState};
///
/// let shifter = ShiftController::new();
/// let commands = CommandList::new();
///
/// shifter.shift_up_action(&commands);
/// assert_eq!(shifter.transmission_state(), TransmissionState::ShiftingUp);
/// assert_eq!(commands.len(), 1);
/// ```
#[derive(Debug)]
pub struct ShiftController {
    transmission: SharedTransmission,
    shift_up: Arc<ShiftUpCommand>,
    shift_down: Arc<ShiftDownCommand>,
}

impl Default for ShiftController {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftController {
    /// Controller around a fresh idle transmission.
    pub fn new() -> Self {
        Self::with_transmission(Transmission::new())
    }

    /// Controller around a transmission built by the caller.
    pub fn with_transmission(transmission: Transmission) -> Self {
        let transmission = SharedTransmission::from_transmission(transmission);
        let shift_up = Arc::new(ShiftUpCommand::new(transmission.clone()));
        let shift_down = Arc::new(ShiftDownCommand::new(transmission.clone()));
        Self {
            transmission,
            shift_up,
            shift_down,
        }
    }

    /// Shift up and record the command in `commands`.
    pub fn shift_up_action(&self, commands: &CommandList) {
        self.shift_up.execute();
        commands.push_command(self.shift_up.clone());
    }

    /// Shift down and record the command in `commands`.
    pub fn shift_down_action(&self, commands: &CommandList) {
        self.shift_down.execute();
        commands.push_command(self.shift_down.clone());
    }

    /// Undo the most recent action recorded in `commands`.
    ///
    /// # Errors
    ///
    /// See [`CommandList::undo_last_command`].
    pub fn undo_last_action(&self, commands: &CommandList) -> Result<(), ShiftError> {
        commands.undo_last_command()
    }

    /// Always fails; there is no redo buffer.
    ///
    /// # Errors
    ///
    /// Always returns [`ShiftError::NotImplemented`].
    pub fn redo_last_undo_action(&self) -> Result<(), ShiftError> {
        warn!("redo requested on shift controller");
        Err(ShiftError::redo_unsupported())
    }

    /// Current state of the controlled transmission.
    pub fn transmission_state(&self) -> TransmissionState {
        self.transmission.state()
    }

    /// Handle to the transmission both commands act on.
    pub fn transmission(&self) -> &SharedTransmission {
        &self.transmission
    }
}
