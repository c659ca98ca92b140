use chrono::NaiveDate;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::simulation_engine::{
    error::FamilyConfigError,
    helpers::days_in_month,
    models::{Child, Family, PopulationRange, Sex},
    relationships::resolve_relationships,
};

/// How many years back birth dates may fall.
pub const BIRTH_YEAR_SPAN: i32 = 30;

/// Random birth date within the `BIRTH_YEAR_SPAN` years before `reference_year`.
///
/// `reference_year` itself is never produced.
pub fn generate_birth_date<R: Rng>(rng: &mut R, reference_year: i32) -> NaiveDate {
    let year = rng.gen_range(reference_year - BIRTH_YEAR_SPAN..reference_year);
    let month = rng.gen_range(1..=12u32);
    let day = rng.gen_range(1..=days_in_month(year, month));
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => unreachable!("{year}-{month}-{day} was drawn inside the month"),
    }
}

pub fn random_sex<R: Rng>(rng: &mut R) -> Sex {
    if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female }
}

/// Weighted draw of a family size.
///
/// The weight of `v` children is `weight_table[v - 1]`; only sizes inside
/// the population range take part in the draw.
#[derive(Debug, Clone)]
pub struct FamilySizeSampler {
    range: PopulationRange,
    weight_table: Vec<u32>,
    weights: Vec<u32>,
    index: WeightedIndex<u32>,
}

impl FamilySizeSampler {
    pub fn new(range: PopulationRange, weight_table: &[u32]) -> Result<Self, FamilyConfigError> {
        let PopulationRange { min, max } = range;
        if min == 0 || min > max {
            return Err(FamilyConfigError::EmptyRange { min, max });
        }
        if max > weight_table.len() {
            return Err(FamilyConfigError::RangeExceedsWeights { max, len: weight_table.len() });
        }
        let weights = weight_table[min - 1..max].to_vec();
        let index = WeightedIndex::new(&weights)
            .map_err(|_| FamilyConfigError::ZeroWeights { min, max })?;
        Ok(FamilySizeSampler { range, weight_table: weight_table.to_vec(), weights, index })
    }

    pub fn range(&self) -> PopulationRange {
        self.range
    }

    /// The full table the sampler was built from, indexed by child count - 1.
    pub fn weight_table(&self) -> &[u32] {
        &self.weight_table
    }

    /// Weight of a family with `count` children, zero outside the range.
    pub fn weight_of(&self, count: usize) -> u32 {
        if self.range.contains(count) {
            self.weights[count - self.range.min]
        } else {
            0
        }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        self.range.min + self.index.sample(rng)
    }
}

/// Generate one family and resolve its sibling relationships.
pub fn generate_family<R: Rng>(
    rng: &mut R,
    sizes: &FamilySizeSampler,
    reference_year: i32,
) -> Family {
    let children_count = sizes.sample(rng);
    let mut children: Vec<Child> = (0..children_count)
        .map(|_| {
            let birth_date = generate_birth_date(rng, reference_year);
            Child::new(birth_date, random_sex(rng))
        })
        .collect();
    resolve_relationships(&mut children);

    Family {
        population_range: sizes.range(),
        weight_table: sizes.weight_table().to_vec(),
        children,
        children_count,
    }
}
