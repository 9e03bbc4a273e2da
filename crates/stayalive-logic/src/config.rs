//! Simulation tuning — starting state, activity profiles, penalties and the
//! text → activity lookup table.
//!
//! A `SimConfig` is assembled once and handed to the engine, which never
//! mutates it. Every field has a default, so a partial tuning document only
//! overrides what it names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ProfileTable};
use crate::attribute::{AttributeKind, ClampMode, ATTRIBUTE_MAX, ATTRIBUTE_MIN};
use crate::attributes::AttributeValues;
use crate::conditions::{Condition, ConditionFlags};
use crate::error::SimError;

/// Default magnitude of every cross-attribute penalty.
pub const DEFAULT_PENALTY_MULTIPLIER: f32 = 1.25;

/// Full engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub starting_activity: Activity,
    pub starting_attributes: AttributeValues,
    pub profiles: ProfileTable,
    pub penalty_multiplier: f32,
    pub activity_map: BTreeMap<String, Activity>,
    pub clamp_mode: ClampMode,
    /// Install an enabled [`LogObserver`](crate::observer::LogObserver) in
    /// [`Engine::new`](crate::engine::Engine::new).
    pub debug_logging: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            starting_activity: Activity::Idle,
            starting_attributes: AttributeValues::default(),
            profiles: ProfileTable::default(),
            penalty_multiplier: DEFAULT_PENALTY_MULTIPLIER,
            activity_map: default_activity_map(),
            clamp_mode: ClampMode::default(),
            debug_logging: true,
        }
    }
}

/// Built-in command words.
pub fn default_activity_map() -> BTreeMap<String, Activity> {
    [
        ("relax", Activity::Idle),
        ("drink", Activity::Drinking),
        ("eat", Activity::Eating),
        ("walk", Activity::Walking),
        ("run", Activity::Running),
        ("nap", Activity::Napping),
        ("god mode", Activity::GodMode),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

impl SimConfig {
    /// Check the config can drive an engine.
    pub fn validate(&self) -> Result<(), SimError> {
        let m = self.penalty_multiplier;
        if !m.is_finite() || m < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "penalty_multiplier must be finite and non-negative, got {}",
                m
            )));
        }

        for (activity, profile) in self.profiles.iter() {
            if !profile.is_finite() {
                return Err(SimError::InvalidConfig(format!(
                    "profile for {} has a non-finite delta",
                    activity
                )));
            }
        }

        for kind in AttributeKind::ALL {
            let v = self.starting_attributes.get(kind);
            if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&v) {
                return Err(SimError::InvalidConfig(format!(
                    "starting {} {} is outside [{}, {}]",
                    kind.label(),
                    v,
                    ATTRIBUTE_MIN,
                    ATTRIBUTE_MAX
                )));
            }
        }

        if self.starting_activity.is_special() {
            return Err(SimError::InvalidConfig(format!(
                "{} cannot be a starting activity",
                self.starting_activity
            )));
        }

        Ok(())
    }

    /// Penalty magnitudes derived from the multiplier.
    pub fn penalties(&self) -> Penalties {
        Penalties::from_multiplier(self.penalty_multiplier)
    }

    /// Resolve a command word. Case-sensitive exact match.
    pub fn lookup_activity(&self, text: &str) -> Option<Activity> {
        self.activity_map.get(text).copied()
    }
}

/// Signed penalty applied while a condition is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penalties {
    pub starved: f32,
    pub stuffed: f32,
    pub parched: f32,
    pub saturated: f32,
    pub drained: f32,
    pub cranked: f32,
}

impl Penalties {
    /// Low conditions pull down, high conditions push up.
    pub fn from_multiplier(m: f32) -> Self {
        Self {
            starved: -m,
            stuffed: m,
            parched: -m,
            saturated: m,
            drained: -m,
            cranked: m,
        }
    }

    /// Penalty for `condition`. Weight conditions carry none.
    pub fn for_condition(&self, condition: Condition) -> f32 {
        match condition {
            Condition::Starved => self.starved,
            Condition::Stuffed => self.stuffed,
            Condition::Parched => self.parched,
            Condition::Saturated => self.saturated,
            Condition::Drained => self.drained,
            Condition::Cranked => self.cranked,
            Condition::Underweight | Condition::Overweight => 0.0,
        }
    }

    /// Sum of penalties for each of `conditions` set in `flags`.
    pub fn sum_active(&self, flags: &ConditionFlags, conditions: &[Condition]) -> f32 {
        conditions
            .iter()
            .filter(|c| flags.is_set(**c))
            .map(|c| self.for_condition(*c))
            .sum()
    }
}

impl Default for Penalties {
    fn default() -> Self {
        Self::from_multiplier(DEFAULT_PENALTY_MULTIPLIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityProfile;
    use crate::attribute::SetOutcome;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_penalty_signs() {
        let p = Penalties::from_multiplier(1.25);
        assert_eq!(p.starved, -1.25);
        assert_eq!(p.stuffed, 1.25);
        assert_eq!(p.parched, -1.25);
        assert_eq!(p.saturated, 1.25);
        assert_eq!(p.drained, -1.25);
        assert_eq!(p.cranked, 1.25);
        assert_eq!(p.for_condition(Condition::Overweight), 0.0);
    }

    #[test]
    fn test_sum_active() {
        let p = Penalties::default();
        let mut flags = ConditionFlags::new();
        flags.record(AttributeKind::Satiation, SetOutcome::CrossedLow);
        flags.record(AttributeKind::Energy, SetOutcome::CrossedLow);
        let sum = p.sum_active(
            &flags,
            &[Condition::Starved, Condition::Stuffed, Condition::Drained],
        );
        assert!((sum - -2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let config = SimConfig::default();
        assert_eq!(config.lookup_activity("nap"), Some(Activity::Napping));
        assert_eq!(config.lookup_activity("god mode"), Some(Activity::GodMode));
        assert_eq!(config.lookup_activity("Nap"), None);
        assert_eq!(config.lookup_activity("sleep"), None);
    }

    #[test]
    fn test_rejects_bad_multiplier() {
        let config = SimConfig {
            penalty_multiplier: f32::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
        let config = SimConfig {
            penalty_multiplier: -1.0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_god_mode_start() {
        let config = SimConfig {
            starting_activity: Activity::GodMode,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_start() {
        let config = SimConfig {
            starting_attributes: AttributeValues::new(50.0, 50.0, 150.0, 50.0),
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Stamina"));
    }

    #[test]
    fn test_rejects_non_finite_profile() {
        let mut config = SimConfig::default();
        config
            .profiles
            .set(Activity::Walking, ActivityProfile::new(0.0, f32::INFINITY, 0.0, 0.0))
            .unwrap();
        assert!(config.validate().is_err());
    }
}
