//! Boundary conditions derived from attribute updates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeKind, Boundary, SetOutcome};

/// Named boundary states, two per attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Starved,
    Stuffed,
    Parched,
    Saturated,
    Drained,
    Cranked,
    Underweight,
    Overweight,
}

impl Condition {
    pub const ALL: [Condition; 8] = [
        Condition::Starved,
        Condition::Stuffed,
        Condition::Parched,
        Condition::Saturated,
        Condition::Drained,
        Condition::Cranked,
        Condition::Underweight,
        Condition::Overweight,
    ];

    /// The condition signalled when `kind` reaches `boundary`.
    pub fn for_boundary(kind: AttributeKind, boundary: Boundary) -> Self {
        let (low, high) = Self::pair(kind);
        match boundary {
            Boundary::Low => low,
            Boundary::High => high,
        }
    }

    /// (low, high) conditions for an attribute.
    pub fn pair(kind: AttributeKind) -> (Condition, Condition) {
        match kind {
            AttributeKind::Satiation => (Condition::Starved, Condition::Stuffed),
            AttributeKind::Hydration => (Condition::Parched, Condition::Saturated),
            AttributeKind::Energy => (Condition::Drained, Condition::Cranked),
            AttributeKind::Weight => (Condition::Underweight, Condition::Overweight),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One boolean per [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConditionFlags {
    flags: [bool; 8],
}

impl ConditionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, condition: Condition) -> bool {
        self.flags[condition.index()]
    }

    /// Record a write outcome for `kind`: sets the crossed side and clears
    /// the other, or clears both when the write stayed inside the range.
    pub fn record(&mut self, kind: AttributeKind, outcome: SetOutcome) {
        let (low, high) = Condition::pair(kind);
        self.flags[low.index()] = outcome == SetOutcome::CrossedLow;
        self.flags[high.index()] = outcome == SetOutcome::CrossedHigh;
    }

    /// Conditions currently set, in declaration order.
    pub fn active(&self) -> impl Iterator<Item = Condition> + '_ {
        Condition::ALL.into_iter().filter(|c| self.is_set(*c))
    }

    pub fn any(&self) -> bool {
        self.flags.iter().any(|f| *f)
    }
}

impl fmt::Display for ConditionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for condition in Condition::ALL {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "[{:?}, {}]", condition, self.is_set(condition))?;
        }
        Ok(())
    }
}
