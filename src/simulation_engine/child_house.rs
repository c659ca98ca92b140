//! Pool of generated families and the only-child / sibling statistics.
//!
//! The only-child rate is taken from the bucket of families with the fewest
//! children observed in the pool. That is the size-1 bucket whenever any
//! single-child family was generated; with a population minimum above one
//! it measures the share of children in the smallest families instead.

use std::collections::BTreeMap;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::simulation_engine::{
    error::{FamilyConfigError, Result, SimulationError},
    family::{generate_family, FamilySizeSampler},
    helpers::percent,
    models::{Child, Family, PopulationRange, SiblingStats},
};

#[derive(Debug, Clone)]
pub struct ChildHouse {
    families: Vec<Family>,
    /// `(family, child)` position of every child, in sequence-number order.
    order: Vec<(usize, usize)>,
    /// Rates fixed at construction; `None` when the pool has no children.
    stats: Option<SiblingStats>,
}

impl ChildHouse {
    /// Generate `family_count` families and number their children in
    /// generation order, continuing across family boundaries.
    pub fn build<R: Rng>(
        rng: &mut R,
        population_range: PopulationRange,
        family_count: usize,
        weight_table: &[u32],
        reference_year: i32,
    ) -> std::result::Result<Self, FamilyConfigError> {
        let sizes = FamilySizeSampler::new(population_range, weight_table)?;
        let families = (0..family_count)
            .map(|_| generate_family(rng, &sizes, reference_year))
            .collect();
        let house = ChildHouse::from_families(families);
        debug!(
            "Built {} families holding {} children (range {}..={})",
            house.families.len(),
            house.order.len(),
            population_range.min,
            population_range.max
        );
        Ok(house)
    }

    /// Adopt already generated families and number their children.
    pub fn from_families(mut families: Vec<Family>) -> Self {
        let mut order = Vec::new();
        for (family_index, family) in families.iter_mut().enumerate() {
            for (child_index, child) in family.children.iter_mut().enumerate() {
                child.family_index = family_index;
                child.sequence_number = order.len();
                order.push((family_index, child_index));
            }
        }
        let stats = lowest_bucket_children(&families).map(|lowest| SiblingStats {
            only_child_percent: percent(lowest, order.len()),
            sibling_percent: percent(order.len() - lowest, order.len()),
        });
        ChildHouse { families, order, stats }
    }

    pub fn families(&self) -> &[Family] {
        &self.families
    }

    pub fn total_children(&self) -> usize {
        self.order.len()
    }

    /// Children in sequence-number order.
    pub fn children(&self) -> impl Iterator<Item = &Child> + '_ {
        self.order.iter().map(move |&(f, c)| &self.families[f].children[c])
    }

    pub fn child(&self, sequence_number: usize) -> Option<&Child> {
        self.order
            .get(sequence_number)
            .map(|&(f, c)| &self.families[f].children[c])
    }

    /// Number of families per `children_count`, smallest size first.
    pub fn bucket_sizes(&self) -> BTreeMap<usize, usize> {
        bucket_sizes(&self.families)
    }

    /// Percent of all children belonging to the lowest family-size bucket.
    pub fn only_child_rate(&self) -> Result<f64> {
        self.stats().map(|s| s.only_child_percent)
    }

    /// Percent of all children outside the lowest bucket, computed from the
    /// complement count rather than by subtraction.
    pub fn sibling_rate(&self) -> Result<f64> {
        self.stats().map(|s| s.sibling_percent)
    }

    pub fn stats(&self) -> Result<SiblingStats> {
        self.stats.ok_or(SimulationError::NoData)
    }

    /// All children, either shuffled or in sequence order. The stored order
    /// is never touched.
    pub fn shuffle_children<R: Rng>(&self, rng: &mut R, randomize: bool) -> Vec<&Child> {
        let mut children: Vec<&Child> = self.children().collect();
        if randomize {
            children.shuffle(rng);
        }
        children
    }

    /// The siblings of a child, resolved from its family-local handles.
    pub fn relatives_of(&self, sequence_number: usize) -> Vec<&Child> {
        let Some(child) = self.child(sequence_number) else {
            return Vec::new();
        };
        let family = &self.families[child.family_index];
        child.relatives.iter().map(|&idx| &family.children[idx]).collect()
    }

    /// Sequence numbers of a child and all of its relatives, ascending.
    pub fn kin_group(&self, sequence_number: usize) -> Vec<usize> {
        let mut group: Vec<usize> = self
            .relatives_of(sequence_number)
            .into_iter()
            .map(|c| c.sequence_number)
            .collect();
        if self.child(sequence_number).is_some() {
            group.push(sequence_number);
        }
        group.sort_unstable();
        group
    }
}

fn bucket_sizes(families: &[Family]) -> BTreeMap<usize, usize> {
    let mut buckets = BTreeMap::new();
    for family in families {
        *buckets.entry(family.children_count).or_insert(0) += 1;
    }
    buckets
}

/// Children living in the families of the smallest non-empty size.
fn lowest_bucket_children(families: &[Family]) -> Option<usize> {
    let lowest = bucket_sizes(families)
        .into_iter()
        .find(|&(size, _)| size > 0)
        .map(|(size, count)| size * count);
    if lowest.is_none() {
        warn!("Family pool holds no children");
    }
    lowest
}
