//! Iterative Solver — damped PageRank by fixed-point iteration
//!
//! The corpus becomes a column-stochastic link matrix `M` where column `q`
//! spreads page `q`'s rank evenly over its links (over every page if `q` is
//! dangling). Each sweep computes `r' = (1 - d)/N + d * M r` for all pages at
//! once and stops when no page moves by `tolerance` or more.

use super::{check_inputs, Corpus, PageRankError, Ranks};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Converged ranks together with the number of sweeps taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Convergence {
    pub ranks: Ranks,
    pub iterations: usize,
}

pub fn iterate_pagerank(
    corpus: &Corpus,
    damping: f64,
    tolerance: f64,
) -> Result<Convergence, PageRankError> {
    check_inputs(corpus, damping)?;
    if !(tolerance > 0.0) {
        return Err(PageRankError::InvalidTolerance(tolerance));
    }

    let n = corpus.len();
    let links = link_matrix(&corpus.adjacency(), n);
    let teleport = DVector::from_element(n, (1.0 - damping) / n as f64);

    let mut rank = DVector::from_element(n, 1.0 / n as f64);
    let mut iterations = 0;
    loop {
        let next = &teleport + (&links * &rank) * damping;
        let delta = (&next - &rank).amax();
        rank = next;
        iterations += 1;
        log::debug!("Sweep {} max change {:.6}", iterations, delta);
        if delta < tolerance {
            break;
        }
    }

    log::info!("PageRank converged after {} sweeps over {} pages", iterations, n);
    let ranks = corpus
        .pages()
        .zip(rank.iter())
        .map(|(p, r)| (p.to_string(), *r))
        .collect();
    Ok(Convergence { ranks, iterations })
}

/// `M[(p, q)]` is the share of `q`'s rank that flows to `p`
fn link_matrix(adjacency: &[Vec<usize>], n: usize) -> DMatrix<f64> {
    let mut m = DMatrix::zeros(n, n);
    for (q, outlinks) in adjacency.iter().enumerate() {
        if outlinks.is_empty() {
            m.column_mut(q).fill(1.0 / n as f64);
        } else {
            let share = 1.0 / outlinks.len() as f64;
            for &p in outlinks {
                m[(p, q)] = share;
            }
        }
    }
    m
}
