//! State history tracking.
//!
//! A machine records every transition it makes on a LIFO stack so the most
//! recent one can be popped again to restore the state it left.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state transition.
///
/// `from` is the state that was current before the transition, which is
/// exactly what an undo restores.
///
/// # Example
///
/// ```rust
/// use gearshift::core::StateTransition;
/// use gearshift::TransmissionState;
///
/// let transition = StateTransition::now(TransmissionState::Idle, TransmissionState::ShiftingUp);
/// assert_eq!(transition.from, TransmissionState::Idle);
/// assert_eq!(transition.to, TransmissionState::ShiftingUp);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Build a transition stamped with the current time.
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// LIFO stack of state transitions.
///
/// `record` pushes onto the top, `pop` removes from the top. There is no
/// redo side: a popped transition is gone.
///
/// # Example
///
/// ```rust
/// use gearshift::core::{StateHistory, StateTransition};
/// use gearshift::TransmissionState;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition::now(TransmissionState::Idle, TransmissionState::ShiftingUp));
/// history.record(StateTransition::now(
///     TransmissionState::ShiftingUp,
///     TransmissionState::ShiftingDown,
/// ));
///
/// assert_eq!(history.len(), 2);
///
/// let last = history.pop().unwrap();
/// assert_eq!(last.from, TransmissionState::ShiftingUp);
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Push a transition onto the top of the stack.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Remove and return the most recent transition.
    pub fn pop(&mut self) -> Option<StateTransition<S>> {
        self.transitions.pop()
    }

    /// The most recent transition, if any.
    pub fn peek(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first recorded `from` state followed by the `to` state
    /// of every transition. Empty when nothing has been recorded.
    ///
    /// ```rust
    /// use gearshift::core::{StateHistory, StateTransition};
    /// use gearshift::TransmissionState::{Idle, ShiftingDown, ShiftingUp};
    ///
    /// let mut history = StateHistory::new();
    /// history.record(StateTransition::now(Idle, ShiftingUp));
    /// history.record(StateTransition::now(ShiftingUp, ShiftingDown));
    ///
    /// assert_eq!(history.get_path(), vec![&Idle, &ShiftingUp, &ShiftingDown]);
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Saved prior states, oldest first.
    pub fn saved_states(&self) -> impl Iterator<Item = &S> + '_ {
        self.transitions.iter().map(|t| &t.from)
    }
}
