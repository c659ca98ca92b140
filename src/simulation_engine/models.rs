use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Monty Hall primitives
// ---------------------------------------------------------------------------

/// One door of the game show. Only the prize flag matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub has_prize: bool,
}

impl Door {
    pub fn place_prize(&mut self) {
        self.has_prize = true;
    }
}

/// The contestant's policy after the host has revealed the empty doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Re-pick uniformly among the doors that stayed closed.
    Change,
    /// Keep the initial pick.
    Stay,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Change, Strategy::Stay];

    pub fn switches(self) -> bool {
        matches!(self, Strategy::Change)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Change => write!(f, "Change"),
            Strategy::Stay   => write!(f, "Stay"),
        }
    }
}

/// Parameters of one batch of Monty Hall trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialConfig {
    pub count_prize: usize,
    pub count_door: usize,
    pub closed_door: usize,
    pub iteration_count: usize,
    pub strategy: Strategy,
}

impl TrialConfig {
    /// The textbook case: three doors, one prize, one door left closed.
    pub fn canonical(iteration_count: usize, strategy: Strategy) -> Self {
        TrialConfig {
            count_prize: 1,
            count_door: 3,
            closed_door: 1,
            iteration_count,
            strategy,
        }
    }
}

// ---------------------------------------------------------------------------
// Sibling study primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// How a sibling of this sex is called: "brother" or "sister".
    pub fn relation_label(self) -> &'static str {
        match self {
            Sex::Male   => "brother",
            Sex::Female => "sister",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male   => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Brother / sister tally on one side of the age order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingCounts {
    pub brother_count: u32,
    pub sister_count: u32,
}

impl SiblingCounts {
    /// Count one more sibling of the given sex.
    pub fn add(&mut self, sibling: Sex) {
        match sibling {
            Sex::Male   => self.brother_count += 1,
            Sex::Female => self.sister_count += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.brother_count + self.sister_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub birth_date: NaiveDate,
    pub sex: Sex,
    /// Siblings born before this child.
    pub older: SiblingCounts,
    /// Siblings born after this child.
    pub younger: SiblingCounts,
    pub has_relative: bool,
    /// Position in the flattened pool; zero until a `ChildHouse` numbers it.
    pub sequence_number: usize,
    /// Index of the owning family inside its pool.
    pub family_index: usize,
    /// Handles (indices into the owning family's `children`) of every sibling.
    pub relatives: BTreeSet<usize>,
}

impl Child {
    pub fn new(birth_date: NaiveDate, sex: Sex) -> Self {
        Child {
            birth_date,
            sex,
            older: SiblingCounts::default(),
            younger: SiblingCounts::default(),
            has_relative: false,
            sequence_number: 0,
            family_index: 0,
            relatives: BTreeSet::new(),
        }
    }
}

/// Inclusive range of children per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRange {
    pub min: usize,
    pub max: usize,
}

impl PopulationRange {
    pub fn new(min: usize, max: usize) -> Self {
        PopulationRange { min, max }
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl From<(usize, usize)> for PopulationRange {
    fn from((min, max): (usize, usize)) -> Self {
        PopulationRange::new(min, max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub population_range: PopulationRange,
    pub weight_table: Vec<u32>,
    pub children: Vec<Child>,
    pub children_count: usize,
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Relative weight of a family having 1, 2, ... 8 children.
pub const DEFAULT_BIRTH_WEIGHTS: [u32; 8] = [30, 38, 18, 8, 3, 1, 1, 1];

/// Iterations used for the canonical three-door comparison.
pub const BASE_ITERATIONS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MontyHallRequest {
    pub count_prize: usize,
    pub count_door: usize,
    pub closed_door: usize,
    pub iteration: usize,
    pub rng_seed: Option<u64>,
}

impl Default for MontyHallRequest {
    fn default() -> Self {
        MontyHallRequest {
            count_prize: 1,
            count_door: 3,
            closed_door: 1,
            iteration: BASE_ITERATIONS,
            rng_seed: None,
        }
    }
}

impl MontyHallRequest {
    /// Custom door layout with the default iteration count and entropy seeding.
    pub fn new(count_prize: usize, count_door: usize, closed_door: usize) -> Self {
        MontyHallRequest { count_prize, count_door, closed_door, ..Default::default() }
    }

    pub fn trial_config(&self, strategy: Strategy) -> TrialConfig {
        TrialConfig {
            count_prize: self.count_prize,
            count_door: self.count_door,
            closed_door: self.closed_door,
            iteration_count: self.iteration,
            strategy,
        }
    }
}

/// Win rates (percent, two decimals) of both strategies on one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyRates {
    #[serde(rename = "Change")]
    pub change: f64,
    #[serde(rename = "Stay")]
    pub stay: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    #[serde(rename = "Base")]
    pub base: StrategyRates,
    #[serde(rename = "Customizable")]
    pub customizable: StrategyRates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyPoolRequest {
    pub population_range: (usize, usize),
    pub family_count: usize,
    pub weight_table: Vec<u32>,
    /// Birth years are drawn from the 30 years before this one; `None` means today.
    pub reference_year: Option<i32>,
    pub rng_seed: Option<u64>,
}

impl Default for FamilyPoolRequest {
    fn default() -> Self {
        FamilyPoolRequest {
            population_range: (1, 5),
            family_count: 100,
            weight_table: DEFAULT_BIRTH_WEIGHTS.to_vec(),
            reference_year: None,
            rng_seed: None,
        }
    }
}

impl FamilyPoolRequest {
    pub fn new(population_range: (usize, usize), family_count: usize) -> Self {
        FamilyPoolRequest { population_range, family_count, ..Default::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiblingStats {
    pub only_child_percent: f64,
    pub sibling_percent: f64,
}
