//! Update engine — advances one character by discrete ticks and handles
//! activity changes.
//!
//! # Tick order
//!
//! Each tick applies the active profile to the attributes in a fixed order,
//! because the cross-attribute penalties read flags from different points in
//! time:
//!
//! | Step | Attribute | Penalty source |
//! |------|-----------|----------------|
//! | 1 | Satiation | Cranked from the **previous** tick |
//! | 2 | Hydration | none |
//! | 3 | Energy | Parched / Saturated from **this** tick (step 2) |
//! | 4 | Weight | Starved / Stuffed / Drained from the **previous** tick |
//!
//! Satiation, hydration and energy boundary outcomes become the new condition
//! flags, swapped in only after all four attributes are processed. A weight
//! boundary aborts the tick with [`SimError::WeightBoundaryCrossed`]: the
//! earlier attributes keep their new values, the clamped weight is stored,
//! and the flags stay as they were.

use crate::activity::{Activity, ActivityProfile};
use crate::attribute::AttributeKind;
use crate::attributes::AttributeSet;
use crate::character::Character;
use crate::conditions::{Condition, ConditionFlags};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::observer::{LogObserver, TickObserver};

/// Previous-tick conditions feeding the weight penalty.
const WEIGHT_PENALTY_CONDITIONS: [Condition; 3] =
    [Condition::Starved, Condition::Stuffed, Condition::Drained];

/// Drives one character.
pub struct Engine<O: TickObserver = LogObserver> {
    config: SimConfig,
    character: Character,
    observer: O,
    ticks: u64,
}

impl Engine<LogObserver> {
    /// Character built from the config's starting activity and attributes.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let character = Character::new(
            config.starting_activity,
            AttributeSet::from(config.starting_attributes),
        );
        Self::with_character(config, character)
    }

    /// Caller-supplied character.
    pub fn with_character(config: SimConfig, character: Character) -> Result<Self, SimError> {
        let observer = LogObserver::new(config.debug_logging);
        Engine::with_observer(config, character, observer)
    }
}

impl<O: TickObserver> Engine<O> {
    pub fn with_observer(
        config: SimConfig,
        character: Character,
        mut observer: O,
    ) -> Result<Self, SimError> {
        config.validate()?;
        observer.run_started(&character);
        Ok(Self {
            config,
            character,
            observer,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn activity(&self) -> Activity {
        self.character.activity
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.character.attributes
    }

    pub fn conditions(&self) -> &ConditionFlags {
        &self.character.conditions
    }

    /// Ticks attempted so far, including aborted ones.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Profile that the next tick will apply.
    pub fn current_profile(&self) -> Result<&ActivityProfile, SimError> {
        self.config.profiles.profile_for(self.character.activity)
    }

    /// Advance one tick. Returns the new condition flags.
    pub fn advance_tick(&mut self) -> Result<ConditionFlags, SimError> {
        let profile = *self.config.profiles.profile_for(self.character.activity)?;
        self.ticks += 1;
        let tick = self.ticks;
        self.observer.tick_started(tick, &profile, &self.character);

        match self.apply_profile(&profile) {
            Ok(flags) => {
                self.character.conditions = flags;
                self.observer.tick_finished(tick, &self.character);
                Ok(flags)
            }
            Err(e) => {
                self.observer.tick_failed(tick, &self.character, &e);
                Err(e)
            }
        }
    }

    fn apply_profile(&mut self, profile: &ActivityProfile) -> Result<ConditionFlags, SimError> {
        let mode = self.config.clamp_mode;
        let penalties = self.config.penalties();
        let previous = self.character.conditions;
        let attrs = &mut self.character.attributes;
        let mut next = ConditionFlags::new();

        let satiation_penalty = penalties.sum_active(&previous, &[Condition::Cranked]);
        let outcome = attrs.apply_delta(
            AttributeKind::Satiation,
            profile.satiation + satiation_penalty,
            mode,
        );
        next.record(AttributeKind::Satiation, outcome);

        let outcome = attrs.apply_delta(AttributeKind::Hydration, profile.hydration, mode);
        next.record(AttributeKind::Hydration, outcome);

        let energy_penalty =
            penalties.sum_active(&next, &[Condition::Parched, Condition::Saturated]);
        let outcome = attrs.apply_delta(AttributeKind::Energy, profile.energy + energy_penalty, mode);
        next.record(AttributeKind::Energy, outcome);

        let weight_penalty = penalties.sum_active(&previous, &WEIGHT_PENALTY_CONDITIONS);
        let outcome = attrs.apply_delta(AttributeKind::Weight, profile.weight + weight_penalty, mode);
        if let Some(boundary) = outcome.boundary() {
            return Err(SimError::WeightBoundaryCrossed { boundary });
        }

        Ok(next)
    }

    /// Switch activity from a command word. Takes effect on the next tick.
    pub fn set_activity(&mut self, text: &str) -> Result<Activity, SimError> {
        let activity = self
            .config
            .lookup_activity(text)
            .ok_or_else(|| SimError::UnsupportedActivity {
                text: text.to_string(),
            })?;

        if activity.is_special() {
            return Err(SimError::SpecialActivitySelected);
        }

        self.character.activity = activity;
        Ok(activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{Boundary, ClampMode};
    use crate::observer::NullObserver;

    const EPS: f32 = 1e-4;

    fn engine_with(profile: ActivityProfile, start: AttributeSet) -> Engine<NullObserver> {
        let mut config = SimConfig::default();
        config.profiles.set(Activity::Idle, profile).unwrap();
        Engine::with_observer(config, Character::new(Activity::Idle, start), NullObserver).unwrap()
    }

    #[test]
    fn test_single_idle_tick() {
        let mut engine = Engine::new(SimConfig::default()).unwrap();
        let flags = engine.advance_tick().unwrap();
        assert!(!flags.any());
        let a = engine.attributes();
        assert!((a.satiation() - 49.0).abs() < EPS);
        assert!((a.hydration() - 49.0).abs() < EPS);
        assert!((a.energy() - 50.0).abs() < EPS);
        assert!((a.weight() - 58.5).abs() < EPS);
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn test_previous_cranked_raises_satiation() {
        // Energy hits the ceiling on tick 1; satiation feels it on tick 2.
        let mut engine = engine_with(
            ActivityProfile::new(0.0, 0.0, 1.0, 0.0),
            AttributeSet::new(50.0, 50.0, 99.0, 50.0),
        );
        let flags = engine.advance_tick().unwrap();
        assert!(flags.is_set(Condition::Cranked));
        assert!((engine.attributes().satiation() - 50.0).abs() < EPS);

        engine.advance_tick().unwrap();
        assert!((engine.attributes().satiation() - 51.25).abs() < EPS);
    }

    #[test]
    fn test_parched_this_tick_drains_energy_same_tick() {
        let mut engine = engine_with(
            ActivityProfile::new(0.0, -1.0, 0.0, 0.0),
            AttributeSet::new(50.0, 1.0, 50.0, 50.0),
        );
        let flags = engine.advance_tick().unwrap();
        assert!(flags.is_set(Condition::Parched));
        assert!((engine.attributes().energy() - 48.75).abs() < EPS);
    }

    #[test]
    fn test_saturated_this_tick_raises_energy_same_tick() {
        let mut engine = engine_with(
            ActivityProfile::new(0.0, 1.0, 0.0, 0.0),
            AttributeSet::new(50.0, 99.5, 50.0, 50.0),
        );
        let flags = engine.advance_tick().unwrap();
        assert!(flags.is_set(Condition::Saturated));
        assert!((engine.attributes().energy() - 51.25).abs() < EPS);
    }

    #[test]
    fn test_weight_penalty_uses_previous_flags() {
        let mut engine = engine_with(
            ActivityProfile::new(-1.0, 0.0, -1.0, 0.0),
            AttributeSet::new(1.0, 50.0, 1.0, 50.0),
        );
        // Tick 1: starved and drained now, but weight sees last tick's flags.
        engine.advance_tick().unwrap();
        assert!((engine.attributes().weight() - 50.0).abs() < EPS);

        // Tick 2: starved + drained from tick 1 → -2.5.
        engine.advance_tick().unwrap();
        assert!((engine.attributes().weight() - 47.5).abs() < EPS);
    }

    #[test]
    fn test_weight_boundary_aborts_tick() {
        let mut engine = engine_with(
            ActivityProfile::new(-1.0, -1.0, 0.0, -1.0),
            AttributeSet::new(1.0, 50.0, 50.0, 1.0),
        );
        let err = engine.advance_tick().unwrap_err();
        assert_eq!(
            err,
            SimError::WeightBoundaryCrossed {
                boundary: Boundary::Low
            }
        );
        // Earlier attributes already applied, flags untouched.
        assert_eq!(engine.attributes().satiation(), 0.0);
        assert!((engine.attributes().hydration() - 49.0).abs() < EPS);
        assert_eq!(engine.attributes().weight(), 0.0);
        assert!(!engine.conditions().is_set(Condition::Starved));
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn test_overweight_is_high_boundary() {
        let mut engine = engine_with(
            ActivityProfile::new(0.0, 0.0, 0.0, 2.0),
            AttributeSet::new(50.0, 50.0, 50.0, 99.0),
        );
        assert_eq!(
            engine.advance_tick(),
            Err(SimError::WeightBoundaryCrossed {
                boundary: Boundary::High
            })
        );
        assert_eq!(engine.attributes().weight(), 100.0);
    }

    #[test]
    fn test_reset_to_zero_mode() {
        let mut config = SimConfig {
            clamp_mode: ClampMode::ResetToZero,
            ..SimConfig::default()
        };
        config
            .profiles
            .set(Activity::Idle, ActivityProfile::new(1.0, 0.0, 0.0, 0.0))
            .unwrap();
        let character = Character::new(Activity::Idle, AttributeSet::new(100.0, 50.0, 50.0, 50.0));
        let mut engine = Engine::with_observer(config, character, NullObserver).unwrap();

        let flags = engine.advance_tick().unwrap();
        assert!(flags.is_set(Condition::Stuffed));
        assert_eq!(engine.attributes().satiation(), 0.0);
    }

    #[test]
    fn test_set_activity() {
        let mut engine = Engine::new(SimConfig::default()).unwrap();
        assert_eq!(engine.set_activity("run"), Ok(Activity::Running));
        assert_eq!(engine.activity(), Activity::Running);
        assert_eq!(*engine.current_profile().unwrap(), engine.config().profiles.running);
    }

    #[test]
    fn test_set_activity_rejects_god_mode() {
        let mut engine = Engine::new(SimConfig::default()).unwrap();
        assert_eq!(
            engine.set_activity("god mode"),
            Err(SimError::SpecialActivitySelected)
        );
        assert_eq!(engine.activity(), Activity::Idle);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SimConfig {
            penalty_multiplier: f32::INFINITY,
            ..SimConfig::default()
        };
        assert!(matches!(Engine::new(config), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_god_mode_character_cannot_tick() {
        let character = Character::new(Activity::GodMode, AttributeSet::default());
        let mut engine =
            Engine::with_observer(SimConfig::default(), character, NullObserver).unwrap();
        assert_eq!(
            engine.advance_tick(),
            Err(SimError::UnsupportedProfile(Activity::GodMode))
        );
        assert_eq!(engine.ticks(), 0);
    }
}
