//! Document-term matrix.
use std::collections::{BTreeSet, HashMap};

use log::{debug, info};

use crate::error::Error;
use crate::filtering::{Filter, TokenSelection};
use crate::tokens::TokenSequences;

use super::Grouping;

/// Matrix row header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRow {
    pub id: String,
    pub group: String,
}

/// Sparse document-term count matrix.
#[derive(Debug, Clone, Default)]
pub struct DocumentTermMatrix {
    docs: Vec<DocumentRow>,
    terms: Vec<String>,
    index: HashMap<String, usize>,
    // per document, term index -> count
    counts: Vec<HashMap<usize, u64>>,
}

impl DocumentTermMatrix {
    /// Build a matrix from (row, tokens) pairs.
    pub fn from_tokens<I, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = (DocumentRow, T)>,
        T: IntoIterator<Item = String>,
    {
        let mut dtm = Self::default();

        for (row, tokens) in documents {
            let mut counts = HashMap::new();
            for token in tokens {
                let term_idx = dtm.term_index(&token);
                *counts.entry(term_idx).or_insert(0) += 1;
            }
            dtm.docs.push(row);
            dtm.counts.push(counts);
        }

        dtm
    }

    fn term_index(&mut self, term: &str) -> usize {
        if let Some(idx) = self.index.get(term) {
            return *idx;
        }
        let idx = self.terms.len();
        self.index.insert(term.to_string(), idx);
        self.terms.push(term.to_string());
        idx
    }

    /// Build a matrix from token sequences.
    ///
    /// Tokens are fused (see [crate::tokens::TaggedToken::fuse]) and passed through `selection`
    /// before being counted, so that unselected tokens never contribute counts.
    pub fn build(
        sequences: &TokenSequences,
        grouping: &Grouping,
        selection: &TokenSelection,
    ) -> Result<Self, Error> {
        let separator = sequences.separator();
        let mut documents = Vec::with_capacity(sequences.len());
        let mut removed = 0;

        for seq in sequences.sequences() {
            let row = DocumentRow {
                id: seq.doc_id().to_string(),
                group: grouping.group(seq.doc_id())?,
            };
            let fused = seq.fused(separator)?;
            let nb_fused = fused.len();
            let kept: Vec<String> = fused.into_iter().filter(|t| selection.detect(t)).collect();
            removed += nb_fused - kept.len();
            documents.push((row, kept));
        }

        let dtm = Self::from_tokens(documents);
        info!(
            "built a {}x{} matrix ({} tokens filtered out)",
            dtm.nb_docs(),
            dtm.nb_terms(),
            removed
        );
        Ok(dtm)
    }

    pub fn nb_docs(&self) -> usize {
        self.docs.len()
    }

    pub fn nb_terms(&self) -> usize {
        self.terms.len()
    }

    /// Get a reference to the matrix rows.
    pub fn docs(&self) -> &[DocumentRow] {
        self.docs.as_ref()
    }

    /// Get a reference to the matrix columns.
    pub fn terms(&self) -> &[String] {
        self.terms.as_ref()
    }

    /// Distinct group labels, sorted.
    pub fn groups(&self) -> Vec<&str> {
        self.docs
            .iter()
            .map(|d| d.group.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Count of `term` in the document at row `doc`.
    pub fn count(&self, doc: usize, term: &str) -> u64 {
        match (self.counts.get(doc), self.index.get(term)) {
            (Some(counts), Some(idx)) => counts.get(idx).copied().unwrap_or(0),
            _ => 0,
        }
    }

    /// Total count of each term, in column order.
    pub fn term_frequencies(&self) -> Vec<(&str, u64)> {
        let mut totals = vec![0; self.terms.len()];
        for counts in &self.counts {
            for (idx, count) in counts {
                totals[*idx] += count;
            }
        }
        self.terms
            .iter()
            .map(String::as_str)
            .zip(totals)
            .collect()
    }

    /// Number of documents containing each term, in column order.
    pub fn doc_frequencies(&self) -> Vec<(&str, usize)> {
        let mut totals = vec![0; self.terms.len()];
        for counts in &self.counts {
            for (idx, count) in counts {
                if *count > 0 {
                    totals[*idx] += 1;
                }
            }
        }
        self.terms
            .iter()
            .map(String::as_str)
            .zip(totals)
            .collect()
    }

    /// Total count of `term`.
    pub fn frequency(&self, term: &str) -> u64 {
        match self.index.get(term) {
            Some(idx) => self.counts.iter().filter_map(|c| c.get(idx)).sum(),
            None => 0,
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().flat_map(|c| c.values()).sum()
    }

    /// Rebuild a matrix from a subset of rows and columns.
    /// Columns that end up with no count are dropped.
    fn rebuild<D, T>(&self, keep_doc: D, keep_term: T) -> Self
    where
        D: Fn(&DocumentRow) -> bool,
        T: Fn(usize) -> bool,
    {
        let mut dtm = Self::default();

        for (row, counts) in self.docs.iter().zip(&self.counts) {
            if !keep_doc(row) {
                continue;
            }

            let mut kept: Vec<(usize, u64)> = counts
                .iter()
                .filter(|(idx, count)| **count > 0 && keep_term(**idx))
                .map(|(idx, count)| (*idx, *count))
                .collect();
            // keep column order stable
            kept.sort_unstable();

            let mut new_counts = HashMap::with_capacity(kept.len());
            for (idx, count) in kept {
                new_counts.insert(dtm.term_index(&self.terms[idx]), count);
            }
            dtm.docs.push(row.clone());
            dtm.counts.push(new_counts);
        }

        dtm
    }

    /// Rows belonging to `group`.
    pub fn subset(&self, group: &str) -> Self {
        let dtm = self.subset_where(|row| row.group == group);
        debug!("subset {group:?}: {} documents", dtm.nb_docs());
        dtm
    }

    /// Rows matching `predicate`.
    pub fn subset_where<P: Fn(&DocumentRow) -> bool>(&self, predicate: P) -> Self {
        self.rebuild(predicate, |_| true)
    }

    /// Drop terms occurring less than `min_termfreq` times.
    pub fn trim(&self, min_termfreq: u64) -> Self {
        let keep: Vec<bool> = self
            .term_frequencies()
            .into_iter()
            .map(|(_, freq)| freq >= min_termfreq)
            .collect();
        let dtm = self.rebuild(|_| true, |idx| keep[idx]);
        debug!(
            "trimmed terms under {min_termfreq}: {} -> {} terms",
            self.nb_terms(),
            dtm.nb_terms()
        );
        dtm
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::filtering::TokenSelection;
    use crate::matrix::Grouping;
    use crate::tokens::{TaggedToken, TokenSequence, TokenSequences};

    use super::{DocumentRow, DocumentTermMatrix};

    pub(crate) fn dtm(docs: &[(&str, &str, &str)]) -> DocumentTermMatrix {
        DocumentTermMatrix::from_tokens(docs.iter().map(|(id, group, text)| {
            (
                DocumentRow {
                    id: id.to_string(),
                    group: group.to_string(),
                },
                text.split_whitespace().map(str::to_string).collect::<Vec<_>>(),
            )
        }))
    }

    fn sequences() -> TokenSequences {
        let tagged = |form: &str, tag: &str| TaggedToken::new(form.to_string(), Some(tag.to_string()));
        TokenSequences::new(
            vec![
                TokenSequence::new(
                    "news1".to_string(),
                    vec![tagged("天气", "NN"), tagged("好", "VA"), tagged("。", "PU")],
                ),
                TokenSequence::new(
                    "blog2".to_string(),
                    vec![tagged("好", "VA"), tagged("好", "VA"), tagged("！", "PU")],
                ),
            ],
            '_',
        )
    }

    #[test]
    fn counts_and_groups() {
        let m = dtm(&[("a1", "a", "x y x"), ("b2", "b", "y z")]);
        assert_eq!(m.nb_docs(), 2);
        assert_eq!(m.terms(), &["x", "y", "z"]);
        assert_eq!(m.count(0, "x"), 2);
        assert_eq!(m.count(1, "x"), 0);
        assert_eq!(m.frequency("y"), 2);
        assert_eq!(m.total(), 5);
        assert_eq!(m.groups(), vec!["a", "b"]);
        assert_eq!(m.doc_frequencies(), vec![("x", 1), ("y", 2), ("z", 1)]);
    }

    #[test]
    fn subset_drops_empty_terms() {
        let m = dtm(&[("a1", "a", "x y x"), ("b2", "b", "y z")]);
        let b = m.subset("b");
        assert_eq!(b.nb_docs(), 1);
        assert_eq!(b.terms(), &["y", "z"]);
        assert_eq!(b.total(), 2);
    }

    #[test]
    fn trim() {
        let m = dtm(&[("a1", "a", "x y x w"), ("a2", "a", "y z x")]);
        let t = m.trim(2);
        assert_eq!(t.terms(), &["x", "y"]);
        assert_eq!(t.frequency("x"), 3);
        assert_eq!(t.frequency("z"), 0);
    }

    #[test]
    fn subset_then_trim_keeps_counts() {
        let m = dtm(&[
            ("a1", "a", "x y x x"),
            ("a2", "a", "w"),
            ("b3", "b", "y y z"),
        ]);
        let t = m.subset("a").trim(2);

        assert_eq!(t.nb_docs(), 2);
        assert_eq!(t.terms(), &["x"]);
        assert_eq!(t.count(0, "x"), 3);
        assert_eq!(t.count(1, "w"), 0);
        assert_eq!(t.total(), 3);
        assert_eq!(t.docs()[1].id, "a2");
    }

    #[test]
    fn build_with_selection() {
        let selection = TokenSelection::remove(&["_pu$"]).unwrap();
        let m = DocumentTermMatrix::build(&sequences(), &Grouping::default(), &selection).unwrap();

        assert_eq!(m.groups(), vec!["blog", "news"]);
        assert_eq!(m.frequency("好_VA"), 3);
        assert!(m.terms().iter().all(|t| !t.to_lowercase().ends_with("_pu")));
    }

    #[test]
    fn build_unknown_group() {
        let grouping = Grouping::from_pattern("^news").unwrap();
        assert!(DocumentTermMatrix::build(&sequences(), &grouping, &TokenSelection::default()).is_err());
    }
}
