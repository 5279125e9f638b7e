//! The transmission state machine.
//!
//! A [`Transmission`] always accepts a shift: shifting pushes the current
//! state onto its history stack and moves to the new state. The only
//! guarded operation is [`Transmission::undo`], which needs a non-empty
//! history.

mod shared;
mod state;

pub use shared::SharedTransmission;
pub use state::TransmissionState;

use crate::core::{StateHistory, StateTransition};
use crate::error::{ShiftError, StackKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current shift state plus the stack of states it came from.
///
/// # Example
///
/// ```rust
/// use gearshift::{Transmission, TransmissionState};
///
/// let mut transmission = Transmission::new();
/// transmission.shift_up();
/// transmission.shift_down();
/// assert_eq!(transmission.state(), TransmissionState::ShiftingDown);
///
/// transmission.undo().unwrap();
/// assert_eq!(transmission.state(), TransmissionState::ShiftingUp);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transmission {
    state: TransmissionState,
    previous_states: StateHistory<TransmissionState>,
}

impl Default for Transmission {
    fn default() -> Self {
        Self::new()
    }
}

impl Transmission {
    /// A transmission sitting in `Idle` with no history.
    pub fn new() -> Self {
        Self::with_state(TransmissionState::Idle)
    }

    /// A transmission starting in `state` with no history.
    pub fn with_state(state: TransmissionState) -> Self {
        Self {
            state,
            previous_states: StateHistory::new(),
        }
    }

    /// The gear state the transmission is in now.
    pub fn state(&self) -> TransmissionState {
        self.state
    }

    /// Every shift taken so far, oldest first.
    pub fn previous_states(&self) -> &StateHistory<TransmissionState> {
        &self.previous_states
    }

    /// Move to `ShiftingUp`, recording the state left behind.
    pub fn shift_up(&mut self) {
        self.shift_to(TransmissionState::ShiftingUp);
    }

    /// Move to `ShiftingDown`, recording the state left behind.
    pub fn shift_down(&mut self) {
        self.shift_to(TransmissionState::ShiftingDown);
    }

    /// Restore the state saved by the most recent shift.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::EmptyStack`] if there is no history; the
    /// current state is left as it was.
    pub fn undo(&mut self) -> Result<(), ShiftError> {
        let transition = self
            .previous_states
            .pop()
            .ok_or(ShiftError::EmptyStack(StackKind::History))?;

        debug!(
            from = %self.state,
            to = %transition.from,
            depth = self.previous_states.len(),
            "transmission undo"
        );
        self.state = transition.from;
        Ok(())
    }

    fn shift_to(&mut self, next: TransmissionState) {
        let from = self.state;
        let transition = StateTransition::now(from, next);
        self.previous_states.record(transition);
        self.state = next;

        debug!(
            from = %from,
            to = %next,
            depth = self.previous_states.len(),
            "transmission shifted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transmission_is_idle_with_empty_history() {
        let transmission = Transmission::new();
        assert_eq!(transmission.state(), TransmissionState::Idle);
        assert!(transmission.previous_states().is_empty());
    }

    #[test]
    fn shift_up_saves_previous_state() {
        let mut transmission = Transmission::new();
        transmission.shift_up();

        assert_eq!(transmission.state(), TransmissionState::ShiftingUp);
        let saved: Vec<_> = transmission.previous_states().saved_states().collect();
        assert_eq!(saved, vec![&TransmissionState::Idle]);
    }

    #[test]
    fn shifting_is_unguarded() {
        let mut transmission = Transmission::new();
        transmission.shift_up();
        transmission.shift_up();
        transmission.shift_down();
        transmission.shift_down();

        assert_eq!(transmission.state(), TransmissionState::ShiftingDown);
        assert_eq!(transmission.previous_states().len(), 4);
    }

    #[test]
    fn undo_restores_states_in_reverse_order() {
        let mut transmission = Transmission::new();
        transmission.shift_up();
        transmission.shift_down();

        transmission.undo().unwrap();
        assert_eq!(transmission.state(), TransmissionState::ShiftingUp);
        transmission.undo().unwrap();
        assert_eq!(transmission.state(), TransmissionState::Idle);
    }

    #[test]
    fn undo_on_empty_history_fails_without_changing_state() {
        let mut transmission = Transmission::with_state(TransmissionState::ShiftingDown);

        let err = transmission.undo().unwrap_err();

        assert_eq!(err, ShiftError::EmptyStack(StackKind::History));
        assert_eq!(transmission.state(), TransmissionState::ShiftingDown);
    }

    #[test]
    fn transmission_snapshot_round_trips_through_json() {
        let mut transmission = Transmission::new();
        transmission.shift_down();

        let json = serde_json::to_string(&transmission).unwrap();
        let restored: Transmission = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, transmission);
        assert!(json.contains("ShiftingDown"));
    }
}
