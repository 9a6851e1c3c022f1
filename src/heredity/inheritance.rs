//! InheritanceModel — Punnett tables and trait likelihoods
//!
//! Each parent passes one copy of the gene to the child. A parent with two
//! copies passes it unless it mutates, a parent with none passes it only by
//! mutation, and a parent with one copy passes it half the time. The child's
//! gene count is the sum of the two independent draws, which yields one 3x3
//! Punnett table per child gene count.

use crate::config::HeredityConfig;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// Number of copies of the gene a person carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    pub fn index(self) -> usize {
        match self {
            GeneCount::Zero => 0,
            GeneCount::One => 1,
            GeneCount::Two => 2,
        }
    }
}

/// Immutable lookup tables derived once from a `HeredityConfig`
#[derive(Debug, Clone, PartialEq)]
pub struct InheritanceModel {
    gene_prior: [f64; 3],
    trait_given_genes: [f64; 3],
    /// `punnett[child][(mother, father)]`
    punnett: [Matrix3<f64>; 3],
}

impl Default for InheritanceModel {
    fn default() -> Self {
        Self::new(&HeredityConfig::default())
    }
}

impl InheritanceModel {
    pub fn new(config: &HeredityConfig) -> Self {
        let mutation = config.mutation_rate;
        let punnett = GeneCount::ALL.map(|child| {
            Matrix3::from_fn(|mother, father| {
                let from_mother = transmission(GeneCount::ALL[mother], mutation);
                let from_father = transmission(GeneCount::ALL[father], mutation);
                match child {
                    GeneCount::Zero => (1.0 - from_mother) * (1.0 - from_father),
                    GeneCount::One => {
                        from_mother * (1.0 - from_father) + (1.0 - from_mother) * from_father
                    }
                    GeneCount::Two => from_mother * from_father,
                }
            })
        });

        Self {
            gene_prior: config.gene_prior,
            trait_given_genes: config.trait_given_genes,
            punnett,
        }
    }

    /// Unconditional probability for someone with no recorded parents
    pub fn prior(&self, genes: GeneCount) -> f64 {
        self.gene_prior[genes.index()]
    }

    /// Probability of the child's gene count given both parents' counts
    pub fn inherit(&self, child: GeneCount, mother: GeneCount, father: GeneCount) -> f64 {
        self.punnett[child.index()][(mother.index(), father.index())]
    }

    pub fn trait_probability(&self, genes: GeneCount, has_trait: bool) -> f64 {
        let p = self.trait_given_genes[genes.index()];
        if has_trait {
            p
        } else {
            1.0 - p
        }
    }

    /// The Punnett table for one child gene count, indexed (mother, father)
    pub fn punnett(&self, child: GeneCount) -> &Matrix3<f64> {
        &self.punnett[child.index()]
    }
}

/// Probability that a parent with `genes` copies passes the gene on
fn transmission(genes: GeneCount, mutation: f64) -> f64 {
    match genes {
        GeneCount::Zero => mutation,
        GeneCount::One => 0.5,
        GeneCount::Two => 1.0 - mutation,
    }
}
