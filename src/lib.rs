//! bayes-rank — small exact and approximate probabilistic inference
//!
//! Two independent pipelines: exact Bayesian inference of gene and trait
//! inheritance across a family, and PageRank over a corpus of linked pages
//! estimated both by sampling and by iteration.

pub mod config;
pub mod heredity;
pub mod pagerank;
pub mod report;

pub use config::{Config, ConfigError, HeredityConfig, PageRankConfig};
pub use heredity::{Family, HeredityError, InheritanceModel, Posterior};
pub use pagerank::{Corpus, PageRankError, Ranks};
