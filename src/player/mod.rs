//! Players: the external-facing actors that drive a transmission.
//!
//! Each [`Player`] owns its own [`ShiftController`] and [`CommandList`].
//! Nothing is shared between players.

mod id;

pub use id::PlayerId;

use crate::builder::PlayerBuilder;
use crate::command::CommandList;
use crate::controller::ShiftController;
use crate::error::ShiftError;
use crate::transmission::TransmissionState;
use tracing::{debug, warn};

/// One actor with its own shift controller and undo stack.
///
/// # Example
///
/// ```rust
/// use gearshift::{Player, ShiftError, TransmissionState};
///
/// let player = Player::new();
/// player.shift_up();
/// player.shift_down();
///
/// player.undo().unwrap();
/// player.undo().unwrap();
/// assert_eq!(player.transmission_state(), TransmissionState::Idle);
///
/// assert!(player.undo().unwrap_err().is_empty_stack());
/// assert_eq!(player.redo(), Err(ShiftError::NotImplemented("redo")));
/// ```
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    commands: CommandList,
    shifter: ShiftController,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A player with a fresh id and an idle transmission.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a player with a chosen id or initial state.
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub(crate) fn from_parts(id: PlayerId, shifter: ShiftController) -> Self {
        Self {
            id,
            commands: CommandList::new(),
            shifter,
        }
    }

    /// Shift up and record the command for undo.
    pub fn shift_up(&self) {
        debug!(player = %self.id, "shift up");
        self.shifter.shift_up_action(&self.commands);
    }

    /// Shift down and record the command for undo.
    pub fn shift_down(&self) {
        debug!(player = %self.id, "shift down");
        self.shifter.shift_down_action(&self.commands);
    }

    /// Undo this player's most recent shift.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::EmptyStack`] if there is nothing to undo.
    pub fn undo(&self) -> Result<(), ShiftError> {
        debug!(player = %self.id, "undo");
        self.commands.undo_last_command()
    }

    /// Always fails without touching any state.
    ///
    /// # Errors
    ///
    /// Always returns [`ShiftError::NotImplemented`].
    pub fn redo(&self) -> Result<(), ShiftError> {
        warn!(player = %self.id, "redo requested");
        Err(ShiftError::redo_unsupported())
    }

    /// This player's identifier.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Current state of this player's transmission.
    pub fn transmission_state(&self) -> TransmissionState {
        self.shifter.transmission_state()
    }

    /// This player's shift controller.
    pub fn shifter(&self) -> &ShiftController {
        &self.shifter
    }

    /// This player's undo stack.
    pub fn commands(&self) -> &CommandList {
        &self.commands
    }
}
