//! Monty Hall trial runner and the two-part experiment built on it.
//!
//! One trial: fresh pool, prizes placed, contestant picks, host leaves
//! `closed_door` doors shut (never revealing a prize), contestant optionally
//! re-picks among them.

use log::{debug, info};
use rand::Rng;

use crate::simulation_engine::{
    doors::setup_pool,
    error::{ConfigViolation, Result},
    helpers::percent,
    models::{ExperimentReport, Strategy, StrategyRates, TrialConfig, BASE_ITERATIONS},
    validator::validate,
};

/// Play a single trial; `true` if the finally selected door has a prize.
///
/// The configuration must already be validated.
pub fn run_trial<R: Rng>(rng: &mut R, config: &TrialConfig) -> bool {
    let mut pool = setup_pool(rng, config.count_door, config.count_prize);
    let selected = pool.pick_door(rng);
    let mut closed = pool.into_closed_doors(rng, config.closed_door);
    let selected = if config.strategy.switches() {
        closed.pick_door(rng)
    } else {
        selected
    };
    selected.has_prize
}

/// Win rate in percent (two decimals) over `config.iteration_count` trials.
///
/// Nothing is run when the configuration is invalid.
pub fn run<R: Rng>(rng: &mut R, config: &TrialConfig) -> Result<f64> {
    validate(config.count_prize, config.count_door, config.closed_door)?;
    if config.iteration_count == 0 {
        return Err(ConfigViolation::NoIterations.into());
    }

    let wins = (0..config.iteration_count)
        .filter(|_| run_trial(rng, config))
        .count();
    let rate = percent(wins, config.iteration_count);
    debug!(
        "{} strategy: {wins}/{} wins ({rate}%) with {} prizes, {} doors, {} closed",
        config.strategy, config.iteration_count, config.count_prize, config.count_door, config.closed_door
    );
    Ok(rate)
}

fn rates_for<R: Rng>(rng: &mut R, config_for: impl Fn(Strategy) -> TrialConfig) -> Result<StrategyRates> {
    Ok(StrategyRates {
        change: run(rng, &config_for(Strategy::Change))?,
        stay: run(rng, &config_for(Strategy::Stay))?,
    })
}

/// Compare both strategies on the textbook layout and on `custom`.
///
/// `custom.strategy` is ignored; both strategies are always played. The
/// custom layout is validated before any trial runs, so an invalid request
/// never produces partial results.
pub fn start_experiment<R: Rng>(rng: &mut R, custom: &TrialConfig) -> Result<ExperimentReport> {
    validate(custom.count_prize, custom.count_door, custom.closed_door)?;
    if custom.iteration_count == 0 {
        return Err(ConfigViolation::NoIterations.into());
    }

    let base = rates_for(rng, |strategy| TrialConfig::canonical(BASE_ITERATIONS, strategy))?;
    let customizable = rates_for(rng, |strategy| TrialConfig { strategy, ..*custom })?;
    info!(
        "Monty Hall experiment done: base change/stay {}/{}, custom change/stay {}/{}",
        base.change, base.stay, customizable.change, customizable.stay
    );
    Ok(ExperimentReport { base, customizable })
}
