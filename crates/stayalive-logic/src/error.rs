//! Error type for engine operations.

use std::fmt;

use crate::activity::Activity;
use crate::attribute::Boundary;

/// Failures returned by [`Engine`](crate::engine::Engine) operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Activity text not present in the configured map. Caller should reprompt.
    UnsupportedActivity { text: String },
    /// GodMode was requested. Recoverable; signals the special branch.
    SpecialActivitySelected,
    /// Weight reached a bound during a tick. Satiation, hydration and energy
    /// were already updated; condition flags were left as they were.
    WeightBoundaryCrossed { boundary: Boundary },
    /// Profile lookup for an activity that has none (internal fault).
    UnsupportedProfile(Activity),
    /// Configuration rejected at engine construction.
    InvalidConfig(String),
}

impl SimError {
    /// True for errors the caller is expected to handle by reprompting or
    /// branching, as opposed to faults and aborted ticks.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SimError::UnsupportedActivity { .. } | SimError::SpecialActivitySelected
        )
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::UnsupportedActivity { text } => {
                write!(f, "`{}` is an unsupported activity", text)
            }
            SimError::SpecialActivitySelected => write!(f, "enlightenment attained"),
            SimError::WeightBoundaryCrossed { boundary } => match boundary {
                Boundary::Low => write!(f, "weight boundary crossed: underweight"),
                Boundary::High => write!(f, "weight boundary crossed: overweight"),
            },
            SimError::UnsupportedProfile(activity) => {
                write!(f, "{} is not a supported state", activity)
            }
            SimError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = SimError::UnsupportedActivity { text: "xyz".into() };
        assert_eq!(e.to_string(), "`xyz` is an unsupported activity");
        let e = SimError::UnsupportedProfile(Activity::GodMode);
        assert_eq!(e.to_string(), "GodMode is not a supported state");
        let e = SimError::WeightBoundaryCrossed {
            boundary: Boundary::High,
        };
        assert!(e.to_string().contains("overweight"));
    }

    #[test]
    fn test_recoverable_split() {
        assert!(SimError::SpecialActivitySelected.is_recoverable());
        assert!(SimError::UnsupportedActivity { text: String::new() }.is_recoverable());
        assert!(!SimError::WeightBoundaryCrossed {
            boundary: Boundary::Low
        }
        .is_recoverable());
        assert!(!SimError::InvalidConfig("x".into()).is_recoverable());
    }
}
