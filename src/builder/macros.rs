//! Macros for declaring machine states.

/// Generate a state enum with its `State` and `Display` implementations.
///
/// Each variant may carry a display label with `=> "label"`; variants
/// without one use their identifier.
///
/// # Example
///
/// ```
/// use gearshift::core::State;
/// use gearshift::state_enum;
///
/// state_enum! {
///     pub enum Ignition {
///         Off,
///         Cranking => "Cranking Engine",
///         Running,
///         Stalled,
///     }
///     final: [Stalled]
/// }
///
/// assert_eq!(Ignition::Cranking.name(), "Cranking Engine");
/// assert_eq!(Ignition::Off.to_string(), "Off");
/// assert!(Ignition::Stalled.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@label $variant $($label)?)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::core::State::name(self))
            }
        }
    };
}
