//! Shared handle to one transmission.

use super::{Transmission, TransmissionState};
use crate::error::ShiftError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle giving commands and a controller access to the same
/// [`Transmission`].
///
/// Cloning the handle never clones the transmission.
///
/// ```rust
/// use gearshift::{SharedTransmission, TransmissionState};
///
/// let transmission = SharedTransmission::new();
/// let other = transmission.clone();
///
/// other.shift_up();
/// assert_eq!(transmission.state(), TransmissionState::ShiftingUp);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedTransmission {
    inner: Arc<Mutex<Transmission>>,
}

impl SharedTransmission {
    /// A handle to a fresh idle transmission.
    pub fn new() -> Self {
        Self::from_transmission(Transmission::new())
    }

    /// Wrap an existing transmission so it can be shared.
    pub fn from_transmission(transmission: Transmission) -> Self {
        Self {
            inner: Arc::new(Mutex::new(transmission)),
        }
    }

    /// See [`Transmission::shift_up`].
    pub fn shift_up(&self) {
        self.lock().shift_up();
    }

    /// See [`Transmission::shift_down`].
    pub fn shift_down(&self) {
        self.lock().shift_down();
    }

    /// See [`Transmission::undo`].
    pub fn undo(&self) -> Result<(), ShiftError> {
        self.lock().undo()
    }

    /// The current state, read under the lock.
    pub fn state(&self) -> TransmissionState {
        self.lock().state()
    }

    /// Copy of the transmission as it is right now.
    pub fn snapshot(&self) -> Transmission {
        self.lock().clone()
    }

    /// True if both handles point at the same transmission.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // A panic can't leave a Transmission half-updated, so a poisoned lock
    // still holds a valid value.
    fn lock(&self) -> MutexGuard<'_, Transmission> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
