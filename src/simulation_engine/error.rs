//! Error taxonomy shared by both experiments.
//!
//! Every variant here is a recoverable, deterministic validation outcome.
//! Sampling past the end of a pool is not represented: it can only happen if
//! validation was skipped, and the sampling code panics instead.

use thiserror::Error;

/// Which Monty Hall invariant a configuration breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("prize, door and closed-door counts must all be positive")]
    NonPositiveCount,
    #[error("at most count_door - 2 prizes can be placed ({count_prize} prizes, {count_door} doors)")]
    TooManyPrizes { count_prize: usize, count_door: usize },
    #[error("closed doors ({closed_door}) must be able to hold every prize ({count_prize})")]
    ClosedBelowPrizes { count_prize: usize, closed_door: usize },
    #[error("closed doors ({closed_door}) must be fewer than count_door - 1 ({count_door} doors)")]
    TooManyClosed { closed_door: usize, count_door: usize },
    #[error("iteration count must be positive")]
    NoIterations,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyConfigError {
    #[error("population range {min}..={max} is empty or starts at zero")]
    EmptyRange { min: usize, max: usize },
    #[error("population max {max} exceeds the weight table ({len} entries)")]
    RangeExceedsWeights { max: usize, len: usize },
    #[error("every weight in {min}..={max} is zero")]
    ZeroWeights { min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("invalid Monty Hall configuration: {0}")]
    InvalidConfig(#[from] ConfigViolation),
    #[error("invalid family configuration: {0}")]
    InvalidFamily(#[from] FamilyConfigError),
    #[error("no children were generated, rates are undefined")]
    NoData,
}

pub type Result<T> = std::result::Result<T, SimulationError>;
