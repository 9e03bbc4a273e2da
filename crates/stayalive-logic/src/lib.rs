//! Pure survival-stat simulation logic for StayAlive.
//!
//! One character's needs (satiation, hydration, energy, weight) change each
//! tick according to the current activity. Reaching a floor or ceiling sets
//! a condition (starved, parched, ...) which feeds penalties into other
//! attributes on later updates. Everything here is plain data and pure
//! functions driven synchronously by the caller.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`activity`] | Activities and the per-tick profile table |
//! | [`attribute`] | Single bounded value, clamp modes, boundary outcomes |
//! | [`attributes`] | The four-attribute physical state |
//! | [`character`] | Activity + attributes + conditions |
//! | [`conditions`] | Boundary condition kinds and flag set |
//! | [`config`] | Tuning: starting state, profiles, penalties, command words |
//! | [`engine`] | Tick update rules and activity selection |
//! | [`error`] | `SimError` |
//! | [`observer`] | Logging collaborator called at tick boundaries |
//!
//! # Example
//!
//! ```rust
//! use stayalive_logic::config::SimConfig;
//! use stayalive_logic::engine::Engine;
//!
//! let mut engine = Engine::new(SimConfig::default()).unwrap();
//! engine.advance_tick().unwrap();
//! engine.set_activity("nap").unwrap();
//! engine.advance_tick().unwrap();
//! assert!(engine.attributes().energy() > 50.0);
//! ```

pub mod activity;
pub mod attribute;
pub mod attributes;
pub mod character;
pub mod conditions;
pub mod config;
pub mod engine;
pub mod error;
pub mod observer;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::activity::{Activity, ActivityProfile, ProfileTable};
    pub use crate::attribute::{AttributeKind, Boundary, ClampMode, SetOutcome};
    pub use crate::attributes::{AttributeSet, AttributeValues};
    pub use crate::character::Character;
    pub use crate::conditions::{Condition, ConditionFlags};
    pub use crate::config::SimConfig;
    pub use crate::engine::Engine;
    pub use crate::error::SimError;
    pub use crate::observer::{LogObserver, NullObserver, TickObserver};
}
