use rand::Rng;
use serde_json::{json, Value};

use crate::simulation_engine::{
    child_house::ChildHouse,
    error::{Result, SimulationError},
    generator::FamilyPool,
    models::{Child, ExperimentReport},
};

/// Experiments the service publishes, for the landing endpoint.
pub fn experiment_catalogue() -> Value {
    json!({
        "status": "Good",
        "experiments": [
            {
                "name": "Monty_Hall",
                "description": "Switch or stay: win rates over N doors, K prizes and C doors left closed"
            },
            {
                "name": "OldestBrother",
                "description": "Only-child and sibling rates over randomly generated families"
            }
        ]
    })
}

/// Base layout and rules of the Monty Hall game.
pub fn monty_hall_info() -> Value {
    json!({
        "status": "Good",
        "base_data": {
            "doors": 3,
            "prize": 1,
            "close_doors": 1
        },
        "rules": "Pick a door. The host opens empty doors until only the closed ones remain, \
                  never revealing a prize. Then keep your door or switch to one of the closed doors."
    })
}

/// Error envelope for a request the core refused.
fn bad_request(err: &SimulationError) -> Value {
    json!({
        "status": "Bad",
        "error": "400",
        "name_error": "bad request",
        "msg": err.to_string()
    })
}

/// `{"status": "Good", "data": {"Base": {...}, "Customizable": {...}}}` or the error envelope.
pub fn monty_hall_response(result: &Result<ExperimentReport>) -> Value {
    match result {
        Ok(report) => json!({ "status": "Good", "data": report }),
        Err(err)   => bad_request(err),
    }
}

fn child_view(house: &ChildHouse, child: &Child) -> Value {
    let relatives: Vec<usize> = house
        .relatives_of(child.sequence_number)
        .into_iter()
        .map(|c| c.sequence_number)
        .collect();
    json!({
        "sequence_number": child.sequence_number,
        "sex": child.sex.to_string(),
        "relation": child.sex.relation_label(),
        "birth_date": child.birth_date.to_string(),
        "older": child.older,
        "younger": child.younger,
        "has_relative": child.has_relative,
        "relatives": relatives
    })
}

/// Presentation records for every child, shuffled or in sequence order.
pub fn children_view<R: Rng>(house: &ChildHouse, randomize: bool, rng: &mut R) -> Value {
    Value::Array(
        house
            .shuffle_children(rng, randomize)
            .into_iter()
            .map(|c| child_view(house, c))
            .collect(),
    )
}

/// Sibling-study envelope: rates plus the family-size histogram.
pub fn family_pool_response(result: &Result<FamilyPool>) -> Value {
    match result {
        Ok(pool) => {
            let buckets: serde_json::Map<String, Value> = pool
                .house
                .bucket_sizes()
                .into_iter()
                .map(|(size, families)| (size.to_string(), json!(families)))
                .collect();
            json!({
                "status": "Good",
                "data": {
                    "only_child_percent": pool.stats.only_child_percent,
                    "sibling_percent": pool.stats.sibling_percent,
                    "total_children": pool.house.total_children(),
                    "families_by_size": buckets
                }
            })
        }
        Err(err) => bad_request(err),
    }
}
