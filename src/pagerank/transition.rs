//! Transition Model — where the random surfer goes next
//!
//! With probability `damping` the surfer follows one of the current page's
//! links uniformly; otherwise it teleports to any page uniformly. A page
//! with no links sends the surfer anywhere with equal probability.

use super::{check_inputs, Corpus, PageRankError, Ranks};

/// Probability distribution over the next page given the current `page`
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> Result<Ranks, PageRankError> {
    check_inputs(corpus, damping)?;
    let links = corpus
        .links(page)
        .ok_or_else(|| PageRankError::UnknownPage(page.to_string()))?;

    let n = corpus.len() as f64;
    let distribution: Ranks = if links.is_empty() {
        corpus.pages().map(|p| (p.to_string(), 1.0 / n)).collect()
    } else {
        let follow = damping / links.len() as f64;
        corpus
            .pages()
            .map(|p| {
                let bonus = if links.contains(p) { follow } else { 0.0 };
                (p.to_string(), (1.0 - damping) / n + bonus)
            })
            .collect()
    };
    Ok(distribution)
}

/// Index-based form of `transition_model` for a page with `outlinks`
pub(crate) fn transition_weights(outlinks: &[usize], pages: usize, damping: f64) -> Vec<f64> {
    let n = pages as f64;
    if outlinks.is_empty() {
        return vec![1.0 / n; pages];
    }
    let mut weights = vec![(1.0 - damping) / n; pages];
    let follow = damping / outlinks.len() as f64;
    for &target in outlinks {
        weights[target] += follow;
    }
    weights
}
