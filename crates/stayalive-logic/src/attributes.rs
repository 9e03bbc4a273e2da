//! A character's physical state: the four bounded needs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeKind, BoundedAttribute, ClampMode, SetOutcome};

/// Plain attribute values, used for starting state in tuning data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeValues {
    pub satiation: f32,
    pub hydration: f32,
    pub energy: f32,
    pub weight: f32,
}

impl AttributeValues {
    pub fn new(satiation: f32, hydration: f32, energy: f32, weight: f32) -> Self {
        Self {
            satiation,
            hydration,
            energy,
            weight,
        }
    }

    pub fn get(&self, kind: AttributeKind) -> f32 {
        match kind {
            AttributeKind::Satiation => self.satiation,
            AttributeKind::Hydration => self.hydration,
            AttributeKind::Energy => self.energy,
            AttributeKind::Weight => self.weight,
        }
    }
}

impl Default for AttributeValues {
    fn default() -> Self {
        Self::new(50.0, 50.0, 50.0, 59.0)
    }
}

/// Exactly four bounded attributes owned by one character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeSet {
    satiation: BoundedAttribute,
    hydration: BoundedAttribute,
    energy: BoundedAttribute,
    weight: BoundedAttribute,
}

impl AttributeSet {
    pub fn new(satiation: f32, hydration: f32, energy: f32, weight: f32) -> Self {
        Self {
            satiation: BoundedAttribute::new(satiation),
            hydration: BoundedAttribute::new(hydration),
            energy: BoundedAttribute::new(energy),
            weight: BoundedAttribute::new(weight),
        }
    }

    pub fn satiation(&self) -> f32 {
        self.satiation.value()
    }

    pub fn hydration(&self) -> f32 {
        self.hydration.value()
    }

    pub fn energy(&self) -> f32 {
        self.energy.value()
    }

    pub fn weight(&self) -> f32 {
        self.weight.value()
    }

    pub fn get(&self, kind: AttributeKind) -> f32 {
        self.slot(kind).value()
    }

    /// Add `delta` to one attribute and report the boundary outcome.
    pub(crate) fn apply_delta(
        &mut self,
        kind: AttributeKind,
        delta: f32,
        mode: ClampMode,
    ) -> SetOutcome {
        self.slot_mut(kind).apply_delta(delta, mode)
    }

    /// Snapshot as plain values.
    pub fn values(&self) -> AttributeValues {
        AttributeValues::new(
            self.satiation(),
            self.hydration(),
            self.energy(),
            self.weight(),
        )
    }

    fn slot(&self, kind: AttributeKind) -> &BoundedAttribute {
        match kind {
            AttributeKind::Satiation => &self.satiation,
            AttributeKind::Hydration => &self.hydration,
            AttributeKind::Energy => &self.energy,
            AttributeKind::Weight => &self.weight,
        }
    }

    fn slot_mut(&mut self, kind: AttributeKind) -> &mut BoundedAttribute {
        match kind {
            AttributeKind::Satiation => &mut self.satiation,
            AttributeKind::Hydration => &mut self.hydration,
            AttributeKind::Energy => &mut self.energy,
            AttributeKind::Weight => &mut self.weight,
        }
    }
}

impl From<AttributeValues> for AttributeSet {
    fn from(v: AttributeValues) -> Self {
        Self::new(v.satiation, v.hydration, v.energy, v.weight)
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        AttributeValues::default().into()
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for kind in AttributeKind::ALL {
            if !first {
                write!(f, "\t")?;
            }
            first = false;
            write!(f, "{}: {}", kind.label(), self.get(kind))?;
        }
        Ok(())
    }
}
