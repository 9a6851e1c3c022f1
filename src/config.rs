//! Configuration — tunable parameters for both inference pipelines
//!
//! Every field has a sensible default, so a config file only needs to list
//! what it overrides. Files are plain JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Probability tables driving the heredity network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeredityConfig {
    /// Unconditional probability of carrying 0, 1 or 2 copies of the gene
    pub gene_prior: [f64; 3],
    /// Probability of exhibiting the trait given 0, 1 or 2 copies
    pub trait_given_genes: [f64; 3],
    /// Probability that a passed-on gene flips state
    pub mutation_rate: f64,
}

impl Default for HeredityConfig {
    fn default() -> Self {
        Self {
            gene_prior: [0.96, 0.03, 0.01],
            trait_given_genes: [0.01, 0.56, 0.65],
            mutation_rate: 0.01,
        }
    }
}

/// Parameters for both PageRank estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Probability the surfer follows a link instead of teleporting
    pub damping: f64,
    /// Number of Monte Carlo steps taken by the sampler
    pub samples: usize,
    /// Stop iterating once no rank moves by more than this in a sweep
    pub tolerance: f64,
    /// Fixed RNG seed for reproducible sampling
    pub seed: Option<u64>,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
            tolerance: 0.001,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub heredity: HeredityConfig,
    pub pagerank: PageRankConfig,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl Config {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.heredity.validate()?;
        self.pagerank.validate()
    }
}

impl HeredityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut probabilities = self
            .gene_prior
            .iter()
            .chain(self.trait_given_genes.iter())
            .chain(std::iter::once(&self.mutation_rate));
        if let Some(p) = probabilities.find(|p| !is_probability(**p)) {
            return Err(ConfigError::Invalid(format!(
                "heredity probability {} is outside [0, 1]",
                p
            )));
        }
        let total: f64 = self.gene_prior.iter().sum();
        if (total - 1.0).abs() > 1e-9 {
            return Err(ConfigError::Invalid(format!(
                "gene_prior sums to {} instead of 1",
                total
            )));
        }
        Ok(())
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.damping) {
            return Err(ConfigError::Invalid(format!(
                "damping {} must lie in [0, 1)",
                self.damping
            )));
        }
        if self.samples == 0 {
            return Err(ConfigError::Invalid("samples must be positive".into()));
        }
        if !(self.tolerance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tolerance {} must be positive",
                self.tolerance
            )));
        }
        Ok(())
    }
}

fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"pagerank": {{"damping": 0.5, "seed": 7}}}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.pagerank.damping, 0.5);
        assert_eq!(config.pagerank.seed, Some(7));
        assert_eq!(config.pagerank.samples, 10_000);
        assert_eq!(config.heredity, HeredityConfig::default());
    }

    #[test]
    fn test_rejects_damping_of_one() {
        let config = PageRankConfig {
            damping: 1.0,
            ..PageRankConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_unnormalized_prior() {
        let config = HeredityConfig {
            gene_prior: [0.5, 0.5, 0.5],
            ..HeredityConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_mutation_rate() {
        let config = HeredityConfig {
            mutation_rate: 1.5,
            ..HeredityConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Json(_))));
    }
}
