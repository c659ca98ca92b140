//! Core simulation engine: door mechanics, family generation, aggregation.
//!
//! ## Module overview
//!
//! | Module          | Purpose |
//! |-----------------|---------|
//! | `models`        | Shared types: doors, children, families, request/response structs |
//! | `error`         | Validation and no-data errors |
//! | `doors`         | Door pool with prize placement and destructive picks |
//! | `validator`     | Monty Hall layout invariants |
//! | `monty_hall`    | Trial runner and the base-vs-custom experiment |
//! | `family`        | Birth dates, weighted family sizes, family generation |
//! | `relationships` | Pairwise older/younger sibling tally |
//! | `child_house`   | Family pool, child numbering, only-child statistics |
//! | `helpers`       | Percent rounding and calendar arithmetic |
//! | `generator`     | Seeded entry points `run_experiment()` / `build_family_pool()` |

pub mod child_house;
pub mod doors;
pub mod error;
pub mod family;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod monty_hall;
pub mod relationships;
pub mod validator;

pub use child_house::ChildHouse;
pub use error::{ConfigViolation, FamilyConfigError, Result, SimulationError};
pub use generator::{build_family_pool, run_experiment, FamilyPool};
pub use models::{
    Child, Door, ExperimentReport, Family, FamilyPoolRequest, MontyHallRequest,
    PopulationRange, Sex, SiblingCounts, SiblingStats, Strategy, StrategyRates, TrialConfig,
    BASE_ITERATIONS, DEFAULT_BIRTH_WEIGHTS,
};
pub use validator::{is_valid, validate};
