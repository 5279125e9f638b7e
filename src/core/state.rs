//! Core State trait for machine states.
//!
//! Every state tracked by a history stack implements this trait, which
//! exposes pure methods for inspecting a state without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// All methods are pure. States are plain values describing where a
/// machine currently sits.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the history stack on every shift
/// - `PartialEq`: states must be comparable for assertions and undo checks
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: history snapshots are serializable
/// - `Send` + `Sync`: machines are shared behind a mutex
///
/// # Example
///
/// ```rust
/// use gearshift::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Ignition {
///     Off,
///     Running,
/// }
///
/// impl State for Ignition {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::Running => "Running",
///         }
///     }
/// }
///
/// assert_eq!(Ignition::Running.name(), "Running");
/// assert!(!Ignition::Off.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display and logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
