//! Builder for constructing players.

use crate::controller::ShiftController;
use crate::player::{Player, PlayerId};
use crate::transmission::{Transmission, TransmissionState};

/// Builder for [`Player`] with a fluent API.
///
/// Every setting has a default, so `build` cannot fail.
#[derive(Debug, Default)]
pub struct PlayerBuilder {
    id: Option<PlayerId>,
    initial_state: Option<TransmissionState>,
}

impl PlayerBuilder {
    /// A builder with a random id and an idle transmission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a known id instead of a random one.
    pub fn id(mut self, id: PlayerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Start the transmission in `state` rather than `Idle`.
    pub fn initial_state(mut self, state: TransmissionState) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Assemble the player with an empty command list.
    pub fn build(self) -> Player {
        let transmission = Transmission::with_state(self.initial_state.unwrap_or_default());
        Player::from_parts(
            self.id.unwrap_or_default(),
            ShiftController::with_transmission(transmission),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn defaults_build_an_idle_player() {
        let player = PlayerBuilder::new().build();
        assert_eq!(player.transmission_state(), TransmissionState::Idle);
        assert!(player.commands().is_empty());
    }

    #[test]
    fn builder_sets_id_and_initial_state() {
        let id = PlayerId::from(Uuid::nil());
        let player = PlayerBuilder::new()
            .id(id)
            .initial_state(TransmissionState::ShiftingDown)
            .build();

        assert_eq!(player.id(), id);
        assert_eq!(player.transmission_state(), TransmissionState::ShiftingDown);
        // The starting state is not undoable history.
        assert!(player.undo().is_err());
    }
}
