//! Behavioural tests for the `probability_lab` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical reports and pools |
//! | Monty Hall | Validation, rate bounds, textbook convergence, base case independence |
//! | Sibling study | Family sizes in range, pairwise age order, rate complement, end-to-end pool |
//! | Adapter | JSON envelopes for good and bad requests, child view |

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::api_adapter::{
    children_view, experiment_catalogue, family_pool_response, monty_hall_info, monty_hall_response,
};
use crate::simulation_engine::{
    build_family_pool, is_valid, run_experiment, ConfigViolation, FamilyConfigError,
    FamilyPoolRequest, MontyHallRequest, SimulationError,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn monty(count_prize: usize, count_door: usize, closed_door: usize, iteration: usize, seed: u64) -> MontyHallRequest {
    MontyHallRequest { count_prize, count_door, closed_door, iteration, rng_seed: Some(seed) }
}

fn pool(min: usize, max: usize, family_count: usize, seed: u64) -> FamilyPoolRequest {
    FamilyPoolRequest {
        reference_year: Some(2025),
        rng_seed: Some(seed),
        ..FamilyPoolRequest::new((min, max), family_count)
    }
}

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_experiment() {
    for seed in SEEDS {
        let a = run_experiment(monty(3, 15, 5, 500, seed)).unwrap();
        let b = run_experiment(monty(3, 15, 5, 500, seed)).unwrap();
        assert_eq!(a, b, "seed={seed}");
    }
}

#[test]
fn same_seed_produces_identical_family_pool() {
    let a = build_family_pool(pool(1, 6, 80, 12345)).unwrap();
    let b = build_family_pool(pool(1, 6, 80, 12345)).unwrap();
    assert_eq!(a.stats, b.stats);
    assert_eq!(a.house.families(), b.house.families());
}

#[test]
fn entropy_seed_produces_valid_results() {
    let report = run_experiment(MontyHallRequest::default()).unwrap();
    assert!((0.0..=100.0).contains(&report.base.change));
    let family_pool = build_family_pool(FamilyPoolRequest::default()).unwrap();
    assert!(family_pool.house.total_children() >= 100);
}

// ── Monty Hall ───────────────────────────────────────────────────────────────

#[test]
fn validity_examples() {
    assert!(is_valid(1, 3, 1));
    assert!(!is_valid(2, 3, 1));
    assert!(!is_valid(1, 3, 2));
}

#[test]
fn win_rates_are_percentages_for_valid_layouts() {
    let layouts = [(1, 3, 1), (1, 10, 1), (2, 10, 7), (10, 30, 10), (5, 7, 5)];
    for (seed, &(p, d, c)) in SEEDS.iter().zip(layouts.iter()) {
        let report = run_experiment(monty(p, d, c, 300, *seed)).unwrap();
        for rate in [report.base.change, report.base.stay, report.customizable.change, report.customizable.stay] {
            assert!((0.0..=100.0).contains(&rate), "{p}/{d}/{c}: {rate}");
        }
    }
}

#[test]
fn textbook_case_converges_to_two_thirds_for_switching() {
    let report = run_experiment(monty(1, 3, 1, 20_000, 2024)).unwrap();
    assert_abs_diff_eq!(report.customizable.change, 66.67, epsilon = 2.0);
    assert_abs_diff_eq!(report.customizable.stay, 33.33, epsilon = 2.0);
    // Base case always runs 1000 iterations.
    assert_abs_diff_eq!(report.base.change, 66.67, epsilon = 5.0);
    assert_abs_diff_eq!(report.base.stay, 33.33, epsilon = 5.0);
}

#[test]
fn generalised_layout_matches_closed_form() {
    // P(stay) = K/N. P(change) = sum over the pick outcome of the prize
    // share among the closed doors: (K/N)(K-1)/C + (1-K/N)K/C.
    let (k, n, c) = (2.0, 10.0, 4.0);
    let stay = 100.0 * k / n;
    let change = 100.0 * ((k / n) * (k - 1.0) / c + (1.0 - k / n) * k / c);
    let report = run_experiment(monty(2, 10, 4, 20_000, 77)).unwrap();
    assert_abs_diff_eq!(report.customizable.stay, stay, epsilon = 2.0);
    assert_abs_diff_eq!(report.customizable.change, change, epsilon = 2.0);
}

#[test]
fn invalid_layout_is_reported_with_the_broken_rule() {
    let err = run_experiment(monty(1, 3, 2, 100, 1)).unwrap_err();
    assert_eq!(
        err,
        SimulationError::InvalidConfig(ConfigViolation::TooManyClosed { closed_door: 2, count_door: 3 })
    );
    let err = run_experiment(monty(1, 3, 1, 0, 1)).unwrap_err();
    assert_eq!(err, SimulationError::InvalidConfig(ConfigViolation::NoIterations));
}

#[test]
fn huge_counts_are_rejected_before_any_trial() {
    let err = run_experiment(monty(1, 3, usize::MAX, 100, 1)).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidConfig(ConfigViolation::TooManyClosed { .. })));
    let err = run_experiment(monty(usize::MAX, 5, usize::MAX, 100, 1)).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidConfig(ConfigViolation::TooManyPrizes { .. })));
}

// ── sibling study ────────────────────────────────────────────────────────────

#[test]
fn family_sizes_stay_inside_the_population_range() {
    for (min, max) in [(1, 1), (1, 5), (2, 4), (8, 8), (3, 8)] {
        let family_pool = build_family_pool(pool(min, max, 200, 5)).unwrap();
        for family in family_pool.house.families() {
            assert!(
                (min..=max).contains(&family.children_count),
                "{} outside {min}..={max}",
                family.children_count
            );
            assert_eq!(family.children.len(), family.children_count);
        }
    }
}

#[test]
fn distinct_birth_dates_give_one_older_and_one_younger() {
    let family_pool = build_family_pool(pool(2, 6, 50, 321)).unwrap();
    for family in family_pool.house.families() {
        let kids = &family.children;
        for (i, a) in kids.iter().enumerate() {
            assert!(a.relatives.iter().all(|&r| r != i && kids[r].relatives.contains(&i)));
            assert_eq!(a.relatives.len(), kids.len() - 1);

            let born_before = kids.iter().filter(|b| b.birth_date < a.birth_date).count() as u32;
            let born_after = kids.iter().filter(|b| b.birth_date > a.birth_date).count() as u32;
            assert_eq!(a.older.total(), born_before);
            assert_eq!(a.younger.total(), born_after);
        }
        // Every ordered pair is counted once on each side.
        let older: u32 = kids.iter().map(|c| c.older.total()).sum();
        let younger: u32 = kids.iter().map(|c| c.younger.total()).sum();
        assert_eq!(older, younger);
    }
}

#[test]
fn only_child_and_sibling_rates_sum_to_100() {
    for seed in SEEDS {
        let stats = build_family_pool(pool(1, 5, 100, seed)).unwrap().stats;
        assert_abs_diff_eq!(stats.only_child_percent + stats.sibling_percent, 100.0, epsilon = 0.011);
    }
}

#[test]
fn end_to_end_family_pool() {
    let family_pool = build_family_pool(pool(1, 5, 100, 2718)).unwrap();
    let expected: usize = family_pool.house.families().iter().map(|f| f.children_count).sum();
    assert_eq!(family_pool.house.total_children(), expected);
    assert_eq!(family_pool.house.children().count(), expected);
    assert_eq!(family_pool.house.families().len(), 100);
}

#[test]
fn zero_families_is_no_data() {
    let err = build_family_pool(pool(1, 5, 0, 1)).unwrap_err();
    assert_eq!(err, SimulationError::NoData);
}

#[test]
fn bad_population_range_is_rejected() {
    let err = build_family_pool(pool(0, 3, 10, 1)).unwrap_err();
    assert_eq!(err, SimulationError::InvalidFamily(FamilyConfigError::EmptyRange { min: 0, max: 3 }));
}

// ── adapter ──────────────────────────────────────────────────────────────────

#[test]
fn monty_hall_response_uses_the_published_keys() {
    let response = monty_hall_response(&run_experiment(monty(1, 3, 1, 100, 9)));
    assert_eq!(response["status"], "Good");
    for part in ["Base", "Customizable"] {
        for strategy in ["Change", "Stay"] {
            assert!(response["data"][part][strategy].is_f64(), "{part}.{strategy}");
        }
    }
}

#[test]
fn monty_hall_response_reports_bad_request() {
    let response = monty_hall_response(&run_experiment(monty(2, 3, 1, 100, 9)));
    assert_eq!(response["status"], "Bad");
    assert_eq!(response["error"], "400");
    assert!(response["msg"].as_str().unwrap().contains("prizes"));
}

#[test]
fn family_pool_response_carries_rates_and_histogram() {
    let response = family_pool_response(&build_family_pool(pool(1, 5, 100, 3)));
    assert_eq!(response["status"], "Good");
    let data = &response["data"];
    let sum = data["only_child_percent"].as_f64().unwrap() + data["sibling_percent"].as_f64().unwrap();
    assert_abs_diff_eq!(sum, 100.0, epsilon = 0.011);
    let families: u64 = data["families_by_size"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(families, 100);
}

#[test]
fn children_view_lists_every_child_with_relatives() {
    let family_pool = build_family_pool(pool(1, 4, 20, 8)).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let view = children_view(&family_pool.house, false, &mut rng);
    let records = view.as_array().unwrap();
    assert_eq!(records.len(), family_pool.house.total_children());
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record["sequence_number"], i);
        let relatives = record["relatives"].as_array().unwrap();
        assert_eq!(!relatives.is_empty(), record["has_relative"] == Value::Bool(true));
    }
}

#[test]
fn info_endpoints_are_static() {
    assert_eq!(monty_hall_info()["base_data"]["doors"], 3);
    assert_eq!(experiment_catalogue()["experiments"].as_array().unwrap().len(), 2);
}
