//! Sampler — Monte Carlo estimate of PageRank
//!
//! Walks the surfer chain `samples` steps from a uniformly random start and
//! scores each page by the fraction of steps that landed on it.

use super::transition::transition_weights;
use super::{check_inputs, Corpus, PageRankError, Ranks};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

pub fn sample_pagerank<R: Rng>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Ranks, PageRankError> {
    check_inputs(corpus, damping)?;
    if samples == 0 {
        return Err(PageRankError::NoSamples);
    }

    let n = corpus.len();
    let choices = corpus
        .adjacency()
        .iter()
        .map(|outlinks| WeightedIndex::new(transition_weights(outlinks, n, damping)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut visits = vec![0usize; n];
    let mut page = rng.gen_range(0..n);
    for _ in 0..samples {
        page = choices[page].sample(rng);
        visits[page] += 1;
    }

    log::info!("Sampled {} steps over {} pages", samples, n);
    Ok(corpus
        .pages()
        .zip(visits)
        .map(|(p, count)| (p.to_string(), count as f64 / samples as f64))
        .collect())
}
