//! Frequency tables.
use serde::Serialize;

use crate::matrix::DocumentTermMatrix;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    pub rank: usize,
    pub term: String,
    /// absolute frequency
    pub frequency: u64,
    /// per million tokens
    pub per_million: f64,
    /// percentage of documents containing the term
    pub range: f64,
}

/// Terms by decreasing frequency (ties by term), ranks starting at 1.
pub fn frequency_table(dtm: &DocumentTermMatrix) -> Vec<FrequencyRow> {
    let total = dtm.total() as f64;
    let nb_docs = dtm.nb_docs() as f64;

    let mut rows: Vec<(&str, u64, usize)> = dtm
        .term_frequencies()
        .into_iter()
        .zip(dtm.doc_frequencies())
        .map(|((term, freq), (_, docfreq))| (term, freq, docfreq))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    rows.into_iter()
        .enumerate()
        .map(|(idx, (term, frequency, docfreq))| FrequencyRow {
            rank: idx + 1,
            term: term.to_string(),
            frequency,
            per_million: frequency as f64 / total * 1_000_000.0,
            range: docfreq as f64 / nb_docs * 100.0,
        })
        .collect()
}
