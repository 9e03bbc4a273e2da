//! Logging collaborator notified at tick boundaries.
//!
//! The engine calls an observer at run start, at the start and end of each
//! tick, and when a tick fails. Update rules never log directly.

use crate::activity::ActivityProfile;
use crate::character::Character;
use crate::error::SimError;

/// Receives engine lifecycle notifications. All methods default to no-ops.
pub trait TickObserver {
    fn run_started(&mut self, _character: &Character) {}

    fn tick_started(&mut self, _tick: u64, _profile: &ActivityProfile, _character: &Character) {}

    fn tick_finished(&mut self, _tick: u64, _character: &Character) {}

    fn tick_failed(&mut self, _tick: u64, _character: &Character, _error: &SimError) {}
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl TickObserver for NullObserver {}

/// Forwards notifications to the `log` facade.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    enabled: bool,
}

impl LogObserver {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TickObserver for LogObserver {
    fn run_started(&mut self, character: &Character) {
        if self.enabled {
            log::debug!("Character starting as... {}", character);
        }
    }

    fn tick_started(&mut self, tick: u64, profile: &ActivityProfile, character: &Character) {
        if !self.enabled {
            return;
        }
        log::debug!("Tick {}: applying state...", tick);
        log::debug!("Current factors: {}", profile);
        log::debug!("{}", character);
        log::debug!("Conditions:\n{}", character.conditions());
    }

    fn tick_finished(&mut self, tick: u64, character: &Character) {
        if !self.enabled {
            return;
        }
        log::debug!("Tick {}: post state application...", tick);
        log::debug!("{}", character);
        log::debug!("Conditions:\n{}", character.conditions());
    }

    fn tick_failed(&mut self, tick: u64, character: &Character, error: &SimError) {
        if self.enabled {
            log::warn!("Tick {} aborted: {} ({})", tick, error, character);
        }
    }
}

impl<T: TickObserver + ?Sized> TickObserver for Box<T> {
    fn run_started(&mut self, character: &Character) {
        (**self).run_started(character)
    }

    fn tick_started(&mut self, tick: u64, profile: &ActivityProfile, character: &Character) {
        (**self).tick_started(tick, profile, character)
    }

    fn tick_finished(&mut self, tick: u64, character: &Character) {
        (**self).tick_finished(tick, character)
    }

    fn tick_failed(&mut self, tick: u64, character: &Character, error: &SimError) {
        (**self).tick_failed(tick, character, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Activity;
    use crate::attributes::AttributeSet;
    use crate::config::SimConfig;
    use crate::engine::Engine;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl TickObserver for Recorder {
        fn run_started(&mut self, _character: &Character) {
            self.events.push("start".into());
        }

        fn tick_started(&mut self, tick: u64, _profile: &ActivityProfile, _character: &Character) {
            self.events.push(format!("begin {}", tick));
        }

        fn tick_finished(&mut self, tick: u64, _character: &Character) {
            self.events.push(format!("end {}", tick));
        }

        fn tick_failed(&mut self, tick: u64, _character: &Character, _error: &SimError) {
            self.events.push(format!("fail {}", tick));
        }
    }

    #[test]
    fn test_observer_called_at_tick_boundaries() {
        let character = Character::new(Activity::Idle, AttributeSet::new(50.0, 50.0, 50.0, 1.0));
        let mut engine =
            Engine::with_observer(SimConfig::default(), character, Recorder::default()).unwrap();

        // Weight 1 - 0.5 survives one tick, then hits the floor.
        engine.advance_tick().unwrap();
        assert!(engine.advance_tick().is_err());
        // Activity changes are not tick boundaries.
        engine.set_activity("eat").unwrap();

        assert_eq!(
            engine.observer().events,
            vec!["start", "begin 1", "end 1", "begin 2", "fail 2"]
        );
    }

    #[test]
    fn test_boxed_observer() {
        let observer: Box<dyn TickObserver> = Box::new(NullObserver);
        let mut engine = Engine::with_observer(
            SimConfig::default(),
            Character::new(Activity::Idle, AttributeSet::default()),
            observer,
        )
        .unwrap();
        assert!(engine.advance_tick().is_ok());
    }

    #[test]
    fn test_log_observer_switch() {
        assert!(LogObserver::default().enabled());
        assert!(!LogObserver::new(false).enabled());
    }
}
