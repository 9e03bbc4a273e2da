//! Activities and their per-tick attribute deltas.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeKind;
use crate::error::SimError;

/// What a character is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Idle,
    Eating,
    Drinking,
    Napping,
    Sleeping,
    Walking,
    Running,
    /// Enlightenment. Defined so text can name it, never assignable.
    GodMode,
}

impl Activity {
    /// Activities that carry a profile and may be assigned at runtime.
    pub const ORDINARY: [Activity; 7] = [
        Activity::Idle,
        Activity::Eating,
        Activity::Drinking,
        Activity::Napping,
        Activity::Sleeping,
        Activity::Walking,
        Activity::Running,
    ];

    pub fn is_special(self) -> bool {
        matches!(self, Activity::GodMode)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Signed per-tick change applied to each attribute while an activity runs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityProfile {
    pub satiation: f32,
    pub hydration: f32,
    pub energy: f32,
    pub weight: f32,
}

impl ActivityProfile {
    pub const fn new(satiation: f32, hydration: f32, energy: f32, weight: f32) -> Self {
        Self {
            satiation,
            hydration,
            energy,
            weight,
        }
    }

    pub fn delta(&self, kind: AttributeKind) -> f32 {
        match kind {
            AttributeKind::Satiation => self.satiation,
            AttributeKind::Hydration => self.hydration,
            AttributeKind::Energy => self.energy,
            AttributeKind::Weight => self.weight,
        }
    }

    pub fn is_finite(&self) -> bool {
        AttributeKind::ALL
            .iter()
            .all(|k| self.delta(*k).is_finite())
    }
}

impl fmt::Display for ActivityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Satiation: {}\tHydration: {}\tStamina: {}\tWeight: {}",
            self.satiation, self.hydration, self.energy, self.weight
        )
    }
}

/// One profile per ordinary activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileTable {
    pub idle: ActivityProfile,
    pub eating: ActivityProfile,
    pub drinking: ActivityProfile,
    pub napping: ActivityProfile,
    pub sleeping: ActivityProfile,
    pub walking: ActivityProfile,
    pub running: ActivityProfile,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self {
            idle: ActivityProfile::new(-1.0, -1.0, 0.0, -0.5),
            eating: ActivityProfile::new(1.0, -1.0, 0.0, 0.5),
            drinking: ActivityProfile::new(-1.0, 1.0, 0.0, -0.5),
            napping: ActivityProfile::new(-1.0, -1.0, 0.5, -0.35),
            sleeping: ActivityProfile::new(-1.0, -1.0, 1.0, -0.25),
            walking: ActivityProfile::new(-2.5, -1.5, -2.0, -1.0),
            running: ActivityProfile::new(-5.0, -3.0, -4.0, -2.0),
        }
    }
}

impl ProfileTable {
    /// Profile for `activity`. GodMode has none.
    pub fn profile_for(&self, activity: Activity) -> Result<&ActivityProfile, SimError> {
        match activity {
            Activity::Idle => Ok(&self.idle),
            Activity::Eating => Ok(&self.eating),
            Activity::Drinking => Ok(&self.drinking),
            Activity::Napping => Ok(&self.napping),
            Activity::Sleeping => Ok(&self.sleeping),
            Activity::Walking => Ok(&self.walking),
            Activity::Running => Ok(&self.running),
            Activity::GodMode => Err(SimError::UnsupportedProfile(activity)),
        }
    }

    /// Replace the profile for an ordinary activity.
    pub fn set(&mut self, activity: Activity, profile: ActivityProfile) -> Result<(), SimError> {
        let slot = match activity {
            Activity::Idle => &mut self.idle,
            Activity::Eating => &mut self.eating,
            Activity::Drinking => &mut self.drinking,
            Activity::Napping => &mut self.napping,
            Activity::Sleeping => &mut self.sleeping,
            Activity::Walking => &mut self.walking,
            Activity::Running => &mut self.running,
            Activity::GodMode => return Err(SimError::UnsupportedProfile(activity)),
        };
        *slot = profile;
        Ok(())
    }

    /// Builder-style override, used when assembling test and tuning configs.
    pub fn with(mut self, activity: Activity, profile: ActivityProfile) -> Result<Self, SimError> {
        self.set(activity, profile)?;
        Ok(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Activity, &ActivityProfile)> {
        Activity::ORDINARY
            .into_iter()
            .filter_map(move |a| self.profile_for(a).ok().map(|p| (a, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ordinary_activity_has_profile() {
        let table = ProfileTable::default();
        for activity in Activity::ORDINARY {
            assert!(table.profile_for(activity).is_ok(), "{activity} has no profile");
        }
        assert_eq!(table.iter().count(), 7);
    }

    #[test]
    fn test_god_mode_has_no_profile() {
        let table = ProfileTable::default();
        assert!(matches!(
            table.profile_for(Activity::GodMode),
            Err(SimError::UnsupportedProfile(Activity::GodMode))
        ));
    }

    #[test]
    fn test_default_idle_and_running() {
        let table = ProfileTable::default();
        assert_eq!(
            *table.profile_for(Activity::Idle).unwrap(),
            ActivityProfile::new(-1.0, -1.0, 0.0, -0.5)
        );
        assert_eq!(
            *table.profile_for(Activity::Running).unwrap(),
            ActivityProfile::new(-5.0, -3.0, -4.0, -2.0)
        );
    }

    #[test]
    fn test_override_profile() {
        let table = ProfileTable::default()
            .with(Activity::Idle, ActivityProfile::new(1.0, 0.0, 0.0, 0.0))
            .unwrap();
        assert_eq!(table.idle.satiation, 1.0);
        assert_eq!(table.idle.weight, 0.0);
        // Others untouched
        assert_eq!(table.running, ProfileTable::default().running);
    }

    #[test]
    fn test_cannot_override_god_mode() {
        let mut table = ProfileTable::default();
        assert!(table.set(Activity::GodMode, ActivityProfile::default()).is_err());
    }

    #[test]
    fn test_profile_finite_check() {
        assert!(ActivityProfile::new(1.0, 2.0, 3.0, 4.0).is_finite());
        assert!(!ActivityProfile::new(f32::NAN, 0.0, 0.0, 0.0).is_finite());
    }
}
