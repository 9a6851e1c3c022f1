//! Heredity — exact Bayesian inference of gene and trait inheritance
//!
//! A family is a small Bayesian network: each person's gene count depends on
//! their parents' gene counts, and their trait depends on their own gene
//! count. Posteriors are computed by enumerating every joint world that is
//! consistent with the observed traits.

mod family;
mod inheritance;
mod joint;
mod posterior;
mod world;

pub use family::{Family, Person, MAX_PEOPLE};
pub use inheritance::{GeneCount, InheritanceModel};
pub use joint::{joint_probability, person_factor};
pub use posterior::{infer, Accumulator, Posterior};
pub use world::{subsets, worlds, Subsets, World};

/// Heredity pipeline errors
#[derive(Debug, thiserror::Error)]
pub enum HeredityError {
    #[error("Failed to read family data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed family CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Family data is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Family has {count} people, enumeration supports at most {max}")]
    TooManyPeople { count: usize, max: usize },
}
