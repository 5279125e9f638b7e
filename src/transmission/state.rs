//! Gear-shift states.

crate::state_enum! {
    /// Shift state of a transmission. Every state may follow every other.
    #[derive(Default)]
    pub enum TransmissionState {
        #[default]
        Idle,
        ShiftingUp => "Shifting Up",
        ShiftingDown => "Shifting Down",
    }
}
