use rand::{rngs::StdRng, SeedableRng};

use crate::simulation_engine::{
    child_house::ChildHouse,
    error::Result,
    helpers::current_year,
    models::{ExperimentReport, FamilyPoolRequest, MontyHallRequest, SiblingStats, Strategy},
    monty_hall::start_experiment,
};

/// Outcome of one sibling study: the statistics plus the pool they came from.
#[derive(Debug, Clone)]
pub struct FamilyPool {
    pub stats: SiblingStats,
    pub house: ChildHouse,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Compare switching and staying on the textbook layout and on the
/// requested one.
pub fn run_experiment(request: MontyHallRequest) -> Result<ExperimentReport> {
    let mut rng = make_rng(request.rng_seed);
    start_experiment(&mut rng, &request.trial_config(Strategy::Change))
}

/// Generate a pool of families and compute only-child / sibling rates.
pub fn build_family_pool(request: FamilyPoolRequest) -> Result<FamilyPool> {
    let mut rng = make_rng(request.rng_seed);
    let reference_year = request.reference_year.unwrap_or_else(current_year);
    let house = ChildHouse::build(
        &mut rng,
        request.population_range.into(),
        request.family_count,
        &request.weight_table,
        reference_year,
    )?;
    let stats = house.stats()?;
    Ok(FamilyPool { stats, house })
}
