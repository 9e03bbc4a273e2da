//! The simulated character.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::attributes::AttributeSet;
use crate::conditions::ConditionFlags;

/// One character's activity, physical state and active conditions.
///
/// Fields are only mutated by [`Engine`](crate::engine::Engine); outside
/// callers read through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub(crate) activity: Activity,
    pub(crate) attributes: AttributeSet,
    pub(crate) conditions: ConditionFlags,
}

impl Character {
    /// Start with no active conditions.
    pub fn new(activity: Activity, attributes: AttributeSet) -> Self {
        Self {
            activity,
            attributes,
            conditions: ConditionFlags::new(),
        }
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn conditions(&self) -> &ConditionFlags {
        &self.conditions
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Activity: {}\t{}", self.activity, self.attributes)
    }
}
