//! Reporter — renders results as text or JSON
//!
//! Text output prints every probability with four decimals; JSON output
//! carries full precision.

use crate::heredity::{GeneCount, Posterior};
use crate::pagerank::{Convergence, Ranks};
use serde::Serialize;
use std::fmt::Write;

/// Both PageRank estimates for one corpus
#[derive(Debug, Clone, Serialize)]
pub struct PageRankReport {
    pub damping: f64,
    pub samples: usize,
    pub sampled: Ranks,
    pub iterated: Ranks,
    pub iterations: usize,
}

impl PageRankReport {
    pub fn new(damping: f64, samples: usize, sampled: Ranks, iterated: Convergence) -> Self {
        Self {
            damping,
            samples,
            sampled,
            iterated: iterated.ranks,
            iterations: iterated.iterations,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("PageRank Results from Sampling (n = {})\n", self.samples);
        write_ranks(&mut out, &self.sampled);
        out.push_str("PageRank Results from Iteration\n");
        write_ranks(&mut out, &self.iterated);
        out
    }
}

fn write_ranks(out: &mut String, ranks: &Ranks) {
    for (page, rank) in ranks {
        let _ = writeln!(out, "  {}: {:.4}", page, rank);
    }
}

/// Per-person gene and trait distributions, in family order
pub fn heredity_text(posteriors: &[Posterior]) -> String {
    let mut out = String::new();
    for posterior in posteriors {
        let _ = writeln!(out, "{}:", posterior.name);
        out.push_str("  Gene:\n");
        for genes in GeneCount::ALL.iter().rev() {
            let _ = writeln!(out, "    {}: {:.4}", genes.index(), posterior.gene(*genes));
        }
        out.push_str("  Trait:\n");
        for has_trait in [true, false] {
            let label = if has_trait { "True" } else { "False" };
            let _ = writeln!(out, "    {}: {:.4}", label, posterior.trait_probability(has_trait));
        }
    }
    out
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heredity_text_layout() {
        let posteriors = vec![Posterior {
            name: "Harry".into(),
            genes: [0.535119, 0.455698, 0.009183],
            has_trait: [0.733489, 0.266511],
        }];
        let expected = "\
Harry:
  Gene:
    2: 0.0092
    1: 0.4557
    0: 0.5351
  Trait:
    True: 0.2665
    False: 0.7335
";
        assert_eq!(heredity_text(&posteriors), expected);
    }

    #[test]
    fn test_pagerank_text_sorted_by_page() {
        let ranks: Ranks = [("b.html".to_string(), 0.25), ("a.html".to_string(), 0.75)]
            .into_iter()
            .collect();
        let report = PageRankReport::new(
            0.85,
            100,
            ranks.clone(),
            Convergence {
                ranks,
                iterations: 3,
            },
        );
        let expected = "\
PageRank Results from Sampling (n = 100)
  a.html: 0.7500
  b.html: 0.2500
PageRank Results from Iteration
  a.html: 0.7500
  b.html: 0.2500
";
        assert_eq!(report.to_text(), expected);
    }

    #[test]
    fn test_json_keeps_precision() {
        let posteriors = vec![Posterior {
            name: "Ann".into(),
            genes: [0.96, 0.03, 0.01],
            has_trait: [0.9, 0.1],
        }];
        let json = to_json(&posteriors).unwrap();
        let parsed: Vec<Posterior> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, posteriors);
        assert!(json.contains("\"name\": \"Ann\""));
    }
}
