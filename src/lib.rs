//! # probability_lab
//!
//! Two seeded Monte Carlo experiments on classic probability puzzles.
//!
//! - **Monty Hall**, generalised: `count_door` doors hide `count_prize`
//!   prizes. The contestant picks one, the host opens empty doors until
//!   `closed_door` doors remain shut (prize doors are never opened), and the
//!   contestant either keeps the pick or switches to one of the closed doors.
//!   Win rates of both strategies are reported for the textbook 3-door game
//!   and for the requested layout.
//! - **Sibling study**: families with a weighted-random number of children,
//!   each with a random birth date and sex. The engine tallies every child's
//!   older/younger brothers and sisters and reports how many children are
//!   only children versus have a sibling.
//!
//! ## How it works
//!
//! 1. Build a [`MontyHallRequest`] or a [`FamilyPoolRequest`]; both have
//!    defaults and an optional RNG seed.
//! 2. Call [`run_experiment`] or [`build_family_pool`]. Invalid layouts are
//!    rejected up front with a [`SimulationError`] naming the broken rule.
//! 3. Hand the result to [`api_adapter`] to get the JSON shape the web layer
//!    returns, or read the typed structs directly.
//!
//! ## Quick start
//!
//! ```rust
//! use probability_lab::{build_family_pool, run_experiment, FamilyPoolRequest, MontyHallRequest};
//!
//! let report = run_experiment(MontyHallRequest {
//!     count_prize: 2,
//!     count_door: 10,
//!     closed_door: 3,
//!     iteration: 2000,
//!     rng_seed: Some(42),
//! })
//! .unwrap();
//! println!("switch {}% / stay {}%", report.customizable.change, report.customizable.stay);
//!
//! let pool = build_family_pool(FamilyPoolRequest {
//!     rng_seed: Some(7),
//!     ..FamilyPoolRequest::new((1, 5), 100)
//! })
//! .unwrap();
//! assert!((pool.stats.only_child_percent + pool.stats.sibling_percent - 100.0).abs() < 0.011);
//! ```

pub mod api_adapter;
pub mod simulation_engine;

pub use simulation_engine::{
    build_family_pool, is_valid, run_experiment, validate, Child, ChildHouse, ConfigViolation,
    Door, ExperimentReport, Family, FamilyConfigError, FamilyPool, FamilyPoolRequest,
    MontyHallRequest, PopulationRange, Sex, SiblingCounts, SiblingStats, SimulationError,
    Strategy, StrategyRates, TrialConfig,
};

#[cfg(test)]
mod tests;
