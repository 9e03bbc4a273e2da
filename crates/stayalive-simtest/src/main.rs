//! StayAlive Headless Simulation Harness
//!
//! Validates the tick engine and the bundled tuning data, then replays a
//! scripted session and prints the character after every tick.
//! Runs entirely in-process — no rendering, no input prompts.
//!
//! Usage:
//!   cargo run -p stayalive-simtest
//!   cargo run -p stayalive-simtest -- --verbose
//!   cargo run -p stayalive-simtest -- --config tuning.json --script session.json

use serde::Deserialize;
use stayalive_logic::activity::{Activity, ActivityProfile};
use stayalive_logic::attribute::{AttributeKind, Boundary, ClampMode, SetOutcome};
use stayalive_logic::attributes::AttributeSet;
use stayalive_logic::character::Character;
use stayalive_logic::conditions::Condition;
use stayalive_logic::config::SimConfig;
use stayalive_logic::engine::Engine;
use stayalive_logic::error::SimError;
use stayalive_logic::observer::{NullObserver, TickObserver};

// ── Bundled data ────────────────────────────────────────────────────────
const DEFAULT_CONFIG_JSON: &str = include_str!("../../../data/default_config.json");
const DEFAULT_SESSION_JSON: &str = include_str!("../../../data/session.json");

/// One step of a scripted session: optionally switch activity, then tick.
#[derive(Debug, Deserialize)]
struct SessionStep {
    command: Option<String>,
    ticks: u32,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

struct Args {
    verbose: bool,
    config_path: Option<String>,
    script_path: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        verbose: false,
        config_path: None,
        script_path: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--verbose" => args.verbose = true,
            "--config" => args.config_path = iter.next(),
            "--script" => args.script_path = iter.next(),
            other => eprintln!("ignoring unknown argument `{}`", other),
        }
    }
    args
}

fn main() {
    let args = parse_args();
    println!("=== StayAlive Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Bundled tuning data
    results.extend(validate_tuning_data(args.verbose));

    // 2. Bounded attribute rules
    results.extend(validate_bounded_attributes(args.verbose));

    // 3. Reference scenarios
    results.extend(validate_scenarios(args.verbose));

    // 4. Scripted session
    results.extend(run_session(&args));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Console observer ────────────────────────────────────────────────────

/// Prints tick boundaries to stdout when enabled.
struct ConsoleObserver {
    enabled: bool,
}

impl TickObserver for ConsoleObserver {
    fn run_started(&mut self, character: &Character) {
        if self.enabled {
            println!("Character starting as...\n{}\n", character);
        }
    }

    fn tick_started(&mut self, tick: u64, profile: &ActivityProfile, _character: &Character) {
        if self.enabled {
            println!("Tick {:>3}  factors  {}", tick, profile);
        }
    }

    fn tick_finished(&mut self, tick: u64, character: &Character) {
        if !self.enabled {
            return;
        }
        let active: Vec<String> = character
            .conditions()
            .active()
            .map(|c| format!("{:?}", c))
            .collect();
        println!("Tick {:>3}  {}  [{}]", tick, character, active.join(", "));
    }

    fn tick_failed(&mut self, tick: u64, character: &Character, error: &SimError) {
        if self.enabled {
            println!("Tick {:>3}  ABORTED: {}  {}", tick, error, character);
        }
    }
}

// ── 1. Tuning Data ──────────────────────────────────────────────────────

fn validate_tuning_data(_verbose: bool) -> Vec<TestResult> {
    println!("--- Tuning Data ---");
    let mut results = Vec::new();

    let bundled: SimConfig = match serde_json::from_str(DEFAULT_CONFIG_JSON) {
        Ok(c) => c,
        Err(e) => {
            results.push(TestResult {
                name: "tuning_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "tuning_valid".into(),
        passed: bundled.validate().is_ok(),
        detail: "bundled config passes validation".into(),
    });

    let defaults = SimConfig::default();
    results.push(TestResult {
        name: "tuning_matches_defaults".into(),
        passed: bundled == defaults,
        detail: "default_config.json mirrors built-in defaults".into(),
    });

    let all_profiles = Activity::ORDINARY
        .iter()
        .all(|a| bundled.profiles.profile_for(*a).is_ok());
    results.push(TestResult {
        name: "tuning_profiles_complete".into(),
        passed: all_profiles,
        detail: format!("{} ordinary activities have profiles", Activity::ORDINARY.len()),
    });

    let reachable: Vec<_> = bundled
        .activity_map
        .values()
        .filter(|a| !a.is_special())
        .collect();
    results.push(TestResult {
        name: "tuning_command_words".into(),
        passed: !reachable.is_empty()
            && bundled.lookup_activity("god mode") == Some(Activity::GodMode),
        detail: format!(
            "{} command words, {} assignable",
            bundled.activity_map.len(),
            reachable.len()
        ),
    });

    results
}

// ── 2. Bounded Attributes ───────────────────────────────────────────────

fn validate_bounded_attributes(_verbose: bool) -> Vec<TestResult> {
    println!("--- Bounded Attributes ---");
    let mut results = Vec::new();

    results.push(TestResult {
        name: "attribute_classify".into(),
        passed: SetOutcome::classify(0.0) == SetOutcome::CrossedLow
            && SetOutcome::classify(100.0) == SetOutcome::CrossedHigh
            && SetOutcome::classify(50.0) == SetOutcome::Within,
        detail: "<=0 low, >=100 high, otherwise within".into(),
    });

    results.push(TestResult {
        name: "attribute_saturate".into(),
        passed: ClampMode::Saturate.apply(101.0) == 100.0
            && ClampMode::Saturate.apply(-1.0) == 0.0,
        detail: "101 → 100, -1 → 0".into(),
    });

    results.push(TestResult {
        name: "attribute_reset_to_zero".into(),
        passed: ClampMode::ResetToZero.apply(101.0) == 0.0
            && ClampMode::ResetToZero.apply(-1.0) == 0.0,
        detail: "101 → 0, -1 → 0".into(),
    });

    results
}

// ── 3. Scenarios ────────────────────────────────────────────────────────

fn quiet_engine(start: [f32; 4], config: SimConfig) -> Result<Engine<NullObserver>, SimError> {
    let character = Character::new(
        Activity::Idle,
        AttributeSet::new(start[0], start[1], start[2], start[3]),
    );
    Engine::with_observer(config, character, NullObserver)
}

fn idle_override(profile: ActivityProfile) -> Result<SimConfig, SimError> {
    let mut config = SimConfig::default();
    config.profiles.set(Activity::Idle, profile)?;
    Ok(config)
}

fn validate_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Scenarios ---");
    let mut results = Vec::new();

    // Starvation penalty on weight
    let starving = quiet_engine([1.0, 50.0, 50.0, 50.0], SimConfig::default()).and_then(|mut e| {
        for _ in 0..3 {
            e.advance_tick()?;
        }
        Ok(e)
    });
    results.push(match starving {
        Ok(e) => {
            let a = e.attributes();
            TestResult {
                name: "scenario_starving".into(),
                passed: a.satiation() == 0.0
                    && (a.weight() - 46.0).abs() < 1e-4
                    && (a.hydration() - 47.0).abs() < 1e-4
                    && e.conditions().is_set(Condition::Starved),
                detail: format!("after 3 ticks: {}", a),
            }
        }
        Err(err) => failed("scenario_starving", err),
    });

    // Ceiling and floor
    for (name, start, delta, expected, condition) in [
        ("scenario_ceiling", 100.0, 1.0, 100.0, Condition::Stuffed),
        ("scenario_floor", 0.0, -1.0, 0.0, Condition::Starved),
    ] {
        let run = idle_override(ActivityProfile::new(delta, 0.0, 0.0, 0.0))
            .and_then(|config| quiet_engine([start, 50.0, 50.0, 50.0], config))
            .and_then(|mut e| {
                let mut flagged = true;
                for _ in 0..2 {
                    flagged &= e.advance_tick()?.is_set(condition);
                }
                Ok((e, flagged))
            });
        results.push(match run {
            Ok((e, flagged)) => TestResult {
                name: name.into(),
                passed: flagged && e.attributes().satiation() == expected,
                detail: format!(
                    "satiation {} → {} with {:?} each tick",
                    start,
                    e.attributes().satiation(),
                    condition
                ),
            },
            Err(err) => failed(name, err),
        });
    }

    // Activity selection
    results.push(match quiet_engine([50.0, 50.0, 50.0, 50.0], SimConfig::default()) {
        Ok(mut e) => {
            let nap = e.set_activity("nap");
            let unknown = e.set_activity("xyz");
            let god = e.set_activity("god mode");
            TestResult {
                name: "scenario_activity_selection".into(),
                passed: nap == Ok(Activity::Napping)
                    && matches!(unknown, Err(SimError::UnsupportedActivity { .. }))
                    && god == Err(SimError::SpecialActivitySelected)
                    && e.activity() == Activity::Napping,
                detail: format!("nap → {:?}, god mode → {:?}", nap, god),
            }
        }
        Err(err) => failed("scenario_activity_selection", err),
    });

    // Weight boundary is a hard failure
    let weight = idle_override(ActivityProfile::new(0.0, 0.0, 0.0, -1.0))
        .and_then(|config| quiet_engine([50.0, 50.0, 50.0, 1.0], config));
    results.push(match weight {
        Ok(mut e) => {
            let outcome = e.advance_tick();
            TestResult {
                name: "scenario_weight_boundary".into(),
                passed: outcome
                    == Err(SimError::WeightBoundaryCrossed {
                        boundary: Boundary::Low,
                    })
                    && e.attributes().get(AttributeKind::Weight) == 0.0,
                detail: format!("{:?}", outcome),
            }
        }
        Err(err) => failed("scenario_weight_boundary", err),
    });

    if verbose {
        println!("  {} scenario checks", results.len());
    }

    results
}

fn failed(name: &str, err: SimError) -> TestResult {
    TestResult {
        name: name.into(),
        passed: false,
        detail: format!("unexpected error: {}", err),
    }
}

// ── 4. Scripted Session ─────────────────────────────────────────────────

fn load_text(path: Option<&str>, bundled: &'static str) -> Result<String, String> {
    match path {
        Some(p) => std::fs::read_to_string(p).map_err(|e| format!("{}: {}", p, e)),
        None => Ok(bundled.to_string()),
    }
}

fn run_session(args: &Args) -> Vec<TestResult> {
    println!("--- Scripted Session ---");
    let mut results = Vec::new();

    let config = load_text(args.config_path.as_deref(), DEFAULT_CONFIG_JSON)
        .and_then(|text| serde_json::from_str::<SimConfig>(&text).map_err(|e| e.to_string()));
    let script = load_text(args.script_path.as_deref(), DEFAULT_SESSION_JSON).and_then(|text| {
        serde_json::from_str::<Vec<SessionStep>>(&text).map_err(|e| e.to_string())
    });

    let (config, script) = match (config, script) {
        (Ok(c), Ok(s)) => (c, s),
        (Err(e), _) | (_, Err(e)) => {
            results.push(TestResult {
                name: "session_load".into(),
                passed: false,
                detail: e,
            });
            return results;
        }
    };

    let character = Character::new(
        config.starting_activity,
        AttributeSet::from(config.starting_attributes),
    );
    let observer = ConsoleObserver {
        enabled: args.verbose,
    };
    let mut engine = match Engine::with_observer(config, character, observer) {
        Ok(e) => e,
        Err(e) => {
            results.push(failed("session_start", e));
            return results;
        }
    };

    let mut in_range = true;
    let mut aborted = None;
    let mut rejected = Vec::new();

    'steps: for step in &script {
        if let Some(command) = &step.command {
            match engine.set_activity(command) {
                Ok(_) => {}
                Err(SimError::SpecialActivitySelected) => {
                    println!("  Enlightenment attained. Session over.");
                    break 'steps;
                }
                Err(e) => {
                    rejected.push(e.to_string());
                    continue;
                }
            }
        }
        for _ in 0..step.ticks {
            let outcome = engine.advance_tick();
            in_range &= AttributeKind::ALL
                .iter()
                .all(|k| (0.0..=100.0).contains(&engine.attributes().get(*k)));
            if let Err(e) = outcome {
                aborted = Some(e);
                break 'steps;
            }
        }
    }

    println!("  final: {}", engine.character());

    results.push(TestResult {
        name: "session_completed".into(),
        passed: aborted.is_none(),
        detail: match &aborted {
            None => format!("{} ticks", engine.ticks()),
            Some(e) => format!("aborted at tick {}: {}", engine.ticks(), e),
        },
    });

    results.push(TestResult {
        name: "session_in_range".into(),
        passed: in_range,
        detail: "all attributes stayed within [0, 100]".into(),
    });

    results.push(TestResult {
        name: "session_commands".into(),
        passed: rejected.is_empty(),
        detail: if rejected.is_empty() {
            "all commands accepted".into()
        } else {
            rejected.join("; ")
        },
    });

    results
}
