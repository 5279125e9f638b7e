//! Shift commands bound to a shared transmission.

use super::Command;
use crate::error::ShiftError;
use crate::transmission::SharedTransmission;

/// Shifts its transmission up.
#[derive(Clone, Debug)]
pub struct ShiftUpCommand {
    transmission: SharedTransmission,
}

impl ShiftUpCommand {
    pub fn new(transmission: SharedTransmission) -> Self {
        Self { transmission }
    }
}

impl Command for ShiftUpCommand {
    fn execute(&self) {
        self.transmission.shift_up();
    }

    fn undo(&self) -> Result<(), ShiftError> {
        self.transmission.undo()
    }

    fn name(&self) -> &str {
        "shift_up"
    }
}

/// Shifts its transmission down.
#[derive(Clone, Debug)]
pub struct ShiftDownCommand {
    transmission: SharedTransmission,
}

impl ShiftDownCommand {
    pub fn new(transmission: SharedTransmission) -> Self {
        Self { transmission }
    }
}

impl Command for ShiftDownCommand {
    fn execute(&self) {
        self.transmission.shift_down();
    }

    fn undo(&self) -> Result<(), ShiftError> {
        self.transmission.undo()
    }

    fn name(&self) -> &str {
        "shift_down"
    }
}
