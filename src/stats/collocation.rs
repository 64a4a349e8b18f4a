/*! Collocates

Ranks the terms found around a node term by pointwise mutual information.

With `N` tokens in the corpus, `c_a` occurrences of the node, `c_b` occurrences of a collocate
and `c_ab` occurrences of the collocate within the window of a node occurrence:

`MI = log2((c_ab * N) / (c_a * c_b * span))`, `span` being the number of slots of the window.

Windows never cross document boundaries.
!*/
use std::cmp::Ordering;
use std::collections::HashMap;

use log::{info, warn};
use serde::Serialize;

use crate::error::Error;
use crate::tokens::TokenSequences;

/// Context window around the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub left: usize,
    pub right: usize,
}

impl Window {
    pub fn symmetric(size: usize) -> Self {
        Self {
            left: size,
            right: size,
        }
    }

    pub fn span(&self) -> usize {
        self.left + self.right
    }
}

impl Default for Window {
    /// 5 tokens on each side
    fn default() -> Self {
        Self::symmetric(5)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollocateRow {
    pub term: String,
    /// co-occurrences within the window
    pub cooccurrences: u64,
    pub left: u64,
    pub right: u64,
    /// frequency in the whole corpus
    pub frequency: u64,
    pub mi: f64,
}

/// Collocates of `node`, sorted by decreasing MI.
///
/// `node` is compared with fused tokens (`token_tag` if sequences are tagged).
/// Collocates co-occurring less than `min_cooccurrences` times are dropped.
pub fn collocates(
    sequences: &TokenSequences,
    node: &str,
    window: Window,
    min_cooccurrences: u64,
) -> Result<Vec<CollocateRow>, Error> {
    if window.span() == 0 {
        return Err(Error::Custom("collocation window is empty".to_string()));
    }

    let separator = sequences.separator();
    let documents = sequences
        .sequences()
        .iter()
        .map(|s| s.fused(separator))
        .collect::<Result<Vec<_>, Error>>()?;

    let mut frequencies: HashMap<&str, u64> = HashMap::new();
    // term -> (left, right)
    let mut cooccurrences: HashMap<&str, (u64, u64)> = HashMap::new();
    let mut nb_tokens = 0u64;

    for tokens in &documents {
        nb_tokens += tokens.len() as u64;
        for (pos, token) in tokens.iter().enumerate() {
            *frequencies.entry(token.as_str()).or_default() += 1;

            if token != node {
                continue;
            }

            let start = pos.saturating_sub(window.left);
            for context in &tokens[start..pos] {
                if context != node {
                    cooccurrences.entry(context.as_str()).or_default().0 += 1;
                }
            }

            let end = (pos + 1 + window.right).min(tokens.len());
            for context in &tokens[pos + 1..end] {
                if context != node {
                    cooccurrences.entry(context.as_str()).or_default().1 += 1;
                }
            }
        }
    }

    let node_freq = frequencies.get(node).copied().unwrap_or(0);
    if node_freq == 0 {
        warn!("node {node:?} does not occur in the corpus");
        return Ok(Vec::new());
    }

    let span = window.span() as f64;
    let mut rows: Vec<CollocateRow> = cooccurrences
        .into_iter()
        .map(|(term, (left, right))| {
            let c_ab = left + right;
            let c_b = frequencies[term];
            let mi = ((c_ab as f64 * nb_tokens as f64) / (node_freq as f64 * c_b as f64 * span))
                .log2();
            CollocateRow {
                term: term.to_string(),
                cooccurrences: c_ab,
                left,
                right,
                frequency: c_b,
                mi,
            }
        })
        .filter(|row| row.cooccurrences >= min_cooccurrences)
        .collect();

    rows.sort_by(|x, y| {
        y.mi.partial_cmp(&x.mi)
            .unwrap_or(Ordering::Equal)
            .then_with(|| y.cooccurrences.cmp(&x.cooccurrences))
            .then_with(|| x.term.cmp(&y.term))
    });

    info!(
        "{} collocates of {:?} ({} occurrences, window {}/{})",
        rows.len(),
        node,
        node_freq,
        window.left,
        window.right
    );
    Ok(rows)
}
