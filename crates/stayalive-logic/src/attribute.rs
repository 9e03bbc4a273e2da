//! Bounded attribute values and boundary detection.
//!
//! A bounded attribute holds a single need level in `[0, 100]`. Writes go
//! through [`BoundedAttribute::set`], which stores a clamped value and reports
//! whether the *unclamped* input touched a boundary. Reaching a boundary is a
//! normal outcome, not an error — the caller turns it into a condition flag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest storable attribute value.
pub const ATTRIBUTE_MIN: f32 = 0.0;

/// Highest storable attribute value.
pub const ATTRIBUTE_MAX: f32 = 100.0;

/// The four tracked needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Satiation,
    Hydration,
    Energy,
    Weight,
}

impl AttributeKind {
    /// All kinds in tick processing order.
    pub const ALL: [AttributeKind; 4] = [
        AttributeKind::Satiation,
        AttributeKind::Hydration,
        AttributeKind::Energy,
        AttributeKind::Weight,
    ];

    /// Display label. Energy is shown as "Stamina" in console output.
    pub fn label(self) -> &'static str {
        match self {
            AttributeKind::Satiation => "Satiation",
            AttributeKind::Hydration => "Hydration",
            AttributeKind::Energy => "Stamina",
            AttributeKind::Weight => "Weight",
        }
    }
}

/// Which side of the range a write reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Boundary {
    /// Input was at or below [`ATTRIBUTE_MIN`].
    Low,
    /// Input was at or above [`ATTRIBUTE_MAX`].
    High,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Low => write!(f, "low"),
            Boundary::High => write!(f, "high"),
        }
    }
}

/// Result of a bounded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// Input was strictly inside the range.
    Within,
    /// Input was `<= 0`.
    CrossedLow,
    /// Input was `>= 100`.
    CrossedHigh,
}

impl SetOutcome {
    /// Classify a raw (unclamped) value.
    pub fn classify(raw: f32) -> Self {
        if raw.is_nan() || raw <= ATTRIBUTE_MIN {
            SetOutcome::CrossedLow
        } else if raw >= ATTRIBUTE_MAX {
            SetOutcome::CrossedHigh
        } else {
            SetOutcome::Within
        }
    }

    /// The crossed boundary, if any.
    pub fn boundary(self) -> Option<Boundary> {
        match self {
            SetOutcome::Within => None,
            SetOutcome::CrossedLow => Some(Boundary::Low),
            SetOutcome::CrossedHigh => Some(Boundary::High),
        }
    }
}

/// How an out-of-range write is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampMode {
    /// Store the nearest bound (101 → 100, -3 → 0).
    #[default]
    Saturate,
    /// Store 0 for overflow in either direction (101 → 0, -3 → 0).
    ResetToZero,
}

impl ClampMode {
    /// Value actually stored for a raw write.
    pub fn apply(self, raw: f32) -> f32 {
        if raw.is_nan() {
            return ATTRIBUTE_MIN;
        }
        if (ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&raw) {
            return raw;
        }
        match self {
            ClampMode::Saturate => raw.clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX),
            ClampMode::ResetToZero => ATTRIBUTE_MIN,
        }
    }
}

/// A single need level, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundedAttribute {
    value: f32,
}

impl BoundedAttribute {
    /// Create an attribute. Initial values outside the range are saturated.
    pub fn new(value: f32) -> Self {
        Self {
            value: ClampMode::Saturate.apply(value),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Store `raw` according to `mode` and report whether `raw` touched a
    /// boundary. The outcome is computed from `raw`, not the stored value.
    pub fn set(&mut self, raw: f32, mode: ClampMode) -> SetOutcome {
        self.value = mode.apply(raw);
        SetOutcome::classify(raw)
    }

    /// Add `delta` to the current value. Shorthand for `set(value + delta)`.
    pub fn apply_delta(&mut self, delta: f32, mode: ClampMode) -> SetOutcome {
        self.set(self.value + delta, mode)
    }
}

impl fmt::Display for BoundedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
