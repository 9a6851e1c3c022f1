//! Probability Accumulator & Normalizer
//!
//! Every enumerated world adds its joint probability to each person's gene
//! and trait buckets. Once all worlds are in, each distribution is divided
//! by its own total.

use super::{joint_probability, worlds, Family, GeneCount, InheritanceModel, World};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Posterior gene and trait distributions for one person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posterior {
    pub name: String,
    /// Indexed by gene count 0, 1, 2
    pub genes: [f64; 3],
    /// Indexed `[false, true]`
    pub has_trait: [f64; 2],
}

impl Posterior {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            genes: [0.0; 3],
            has_trait: [0.0; 2],
        }
    }

    pub fn gene(&self, genes: GeneCount) -> f64 {
        self.genes[genes.index()]
    }

    pub fn trait_probability(&self, has_trait: bool) -> f64 {
        self.has_trait[usize::from(has_trait)]
    }
}

/// Running, unnormalised sums over enumerated worlds
#[derive(Debug, Clone)]
pub struct Accumulator {
    posteriors: Vec<Posterior>,
    worlds: u64,
}

impl Accumulator {
    pub fn new(family: &Family) -> Self {
        Self {
            posteriors: family.people().iter().map(|p| Posterior::empty(&p.name)).collect(),
            worlds: 0,
        }
    }

    /// Credit `probability` to the bucket each person occupies in `world`
    pub fn add(&mut self, world: &World, probability: f64) {
        for (i, posterior) in self.posteriors.iter_mut().enumerate() {
            posterior.genes[world.genes(i).index()] += probability;
            posterior.has_trait[usize::from(world.has_trait(i))] += probability;
        }
        self.worlds += 1;
    }

    pub fn worlds(&self) -> u64 {
        self.worlds
    }

    /// Rescale every distribution to sum to one.
    ///
    /// A distribution with zero total mass is left as all zeros.
    pub fn normalize(self) -> Vec<Posterior> {
        let mut posteriors = self.posteriors;
        for posterior in &mut posteriors {
            if !rescale(&mut posterior.genes) {
                warn!("Gene distribution for '{}' has zero mass", posterior.name);
            }
            if !rescale(&mut posterior.has_trait) {
                warn!("Trait distribution for '{}' has zero mass", posterior.name);
            }
        }
        posteriors
    }
}

fn rescale(distribution: &mut [f64]) -> bool {
    let total: f64 = distribution.iter().sum();
    if total == 0.0 {
        return false;
    }
    for p in distribution.iter_mut() {
        *p /= total;
    }
    true
}

/// Exact posterior for every person by enumeration over all consistent worlds
pub fn infer(family: &Family, model: &InheritanceModel) -> Vec<Posterior> {
    let mut accumulator = Accumulator::new(family);
    for world in worlds(family) {
        let p = joint_probability(family, model, &world);
        debug!("World {:?} has joint probability {:.6e}", world, p);
        accumulator.add(&world, p);
    }
    info!(
        "Enumerated {} worlds for {} people",
        accumulator.worlds(),
        family.len()
    );
    accumulator.normalize()
}
