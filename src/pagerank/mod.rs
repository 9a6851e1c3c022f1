//! PageRank — page importance over a corpus of linked documents
//!
//! Two estimators share one random-surfer model: a Monte Carlo sampler that
//! walks the chain and counts visits, and an iterative solver that applies
//! the damped update until it reaches a fixed point.

mod corpus;
mod iterate;
mod sampler;
mod transition;

pub use corpus::Corpus;
pub use iterate::{iterate_pagerank, Convergence};
pub use sampler::sample_pagerank;
pub use transition::transition_model;

use std::collections::BTreeMap;

/// Page name to score, ordered by page name
pub type Ranks = BTreeMap<String, f64>;

/// PageRank pipeline errors
#[derive(Debug, thiserror::Error)]
pub enum PageRankError {
    #[error("Failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corpus contains no pages")]
    EmptyCorpus,

    #[error("Page not in corpus: {0}")]
    UnknownPage(String),

    #[error("Damping factor {0} must lie in [0, 1)")]
    InvalidDamping(f64),

    #[error("Convergence tolerance {0} must be positive")]
    InvalidTolerance(f64),

    #[error("Sample count must be positive")]
    NoSamples,

    #[error("Invalid transition weights: {0}")]
    Weights(#[from] rand::distributions::WeightedError),
}

/// Shared precondition for every estimator
fn check_inputs(corpus: &Corpus, damping: f64) -> Result<(), PageRankError> {
    if corpus.is_empty() {
        return Err(PageRankError::EmptyCorpus);
    }
    if !(0.0..1.0).contains(&damping) {
        return Err(PageRankError::InvalidDamping(damping));
    }
    Ok(())
}
