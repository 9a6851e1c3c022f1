//! Corpus Crawler — builds the link graph from a directory of HTML pages
//!
//! Each `.html` file is a page. Links are the `href` targets of anchor tags;
//! self-links and links to pages outside the directory are dropped.

use super::PageRankError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use std::sync::LazyLock;

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("hardcoded regex")
});

/// Page name to the set of corpus pages it links to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    links: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Crawl every `.html` file directly inside `dir`
    pub fn crawl(dir: impl AsRef<Path>) -> Result<Self, PageRankError> {
        let dir = dir.as_ref();
        let mut pages = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(".html") || !entry.file_type()?.is_file() {
                log::debug!("Skipping {}", entry.path().display());
                continue;
            }
            let contents = std::fs::read_to_string(entry.path())?;
            pages.push((name, extract_links(&contents)));
        }

        let corpus = Self::from_links(pages);
        if corpus.is_empty() {
            log::warn!("No .html pages found in {}", dir.display());
        } else {
            log::info!("Crawled {} pages from {}", corpus.len(), dir.display());
        }
        Ok(corpus)
    }

    /// Build a corpus from raw (page, links) pairs, dropping self-links and
    /// links to pages that are not themselves in the corpus
    pub fn from_links<I, P, L>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let raw: BTreeMap<String, BTreeSet<String>> = pages
            .into_iter()
            .map(|(page, links)| (page.into(), links.into_iter().map(Into::into).collect()))
            .collect();

        let links = raw
            .iter()
            .map(|(page, targets)| {
                let kept = targets
                    .iter()
                    .filter(|target| *target != page && raw.contains_key(*target))
                    .cloned()
                    .collect();
                (page.clone(), kept)
            })
            .collect();

        Self { links }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Page names in sorted order
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.links.get(page)
    }

    /// Outgoing links as indices into `pages()` order
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let position: HashMap<&str, usize> = self.pages().enumerate().map(|(i, p)| (p, i)).collect();
        self.links
            .values()
            .map(|targets| {
                targets
                    .iter()
                    .filter_map(|t| position.get(t.as_str()).copied())
                    .collect()
            })
            .collect()
    }
}

/// Every distinct `href` target of an anchor tag in `html`
pub fn extract_links(html: &str) -> BTreeSet<String> {
    LINK_PATTERN
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}
