//! Token records and tables.
use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single parsed token with its morphological and syntactic annotations.
///
/// `sentence_id` is 1-based and scoped per document,
/// `token_id` is 1-based and scoped per sentence.
/// A `head_token_id` of 0 marks the root of the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub doc_id: String,
    pub sentence_id: u32,
    pub token_id: u32,
    pub token: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
    pub head_token_id: u32,
    pub dep_rel: String,
}

/// An ordered collection of [TokenRecord]s, possibly spanning several documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    records: Vec<TokenRecord>,
}

impl TokenTable {
    pub fn new(records: Vec<TokenRecord>) -> Self {
        Self { records }
    }

    /// Get a reference to the table's records.
    pub fn records(&self) -> &[TokenRecord] {
        self.records.as_ref()
    }

    pub fn into_records(self) -> Vec<TokenRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append the records of another table at the end of this one.
    pub fn extend(&mut self, other: TokenTable) {
        self.records.extend(other.records);
    }

    /// Distinct document ids, in order of first appearance.
    pub fn doc_ids(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.doc_id.as_str())
            .unique()
            .collect()
    }

    /// Records grouped by document, in order of first appearance.
    /// Each group is sorted by `(sentence_id, token_id)`.
    pub fn documents(&self) -> Vec<(&str, Vec<&TokenRecord>)> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<&TokenRecord>)> = Vec::new();

        for record in &self.records {
            let idx = *positions.entry(record.doc_id.as_str()).or_insert_with(|| {
                groups.push((record.doc_id.as_str(), Vec::new()));
                groups.len() - 1
            });
            groups[idx].1.push(record);
        }

        for (_, records) in groups.iter_mut() {
            records.sort_by_key(|r| (r.sentence_id, r.token_id));
        }

        groups
    }

    /// Sort records by declared document order, then by sentence and token id.
    ///
    /// Documents absent from `order` are put at the end, sorted by id.
    pub fn sort_by_documents(&mut self, order: &[&str]) {
        let positions: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(pos, id)| (*id, pos))
            .collect();

        self.records.sort_by(|a, b| {
            let pa = positions.get(a.doc_id.as_str()).copied().unwrap_or(usize::MAX);
            let pb = positions.get(b.doc_id.as_str()).copied().unwrap_or(usize::MAX);
            pa.cmp(&pb)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
                .then_with(|| a.sentence_id.cmp(&b.sentence_id))
                .then_with(|| a.token_id.cmp(&b.token_id))
        });
    }

    /// Concatenation of the token forms of a document, in token order.
    ///
    /// Returns [None] if the document has no records.
    pub fn concatenated_forms(&self, doc_id: &str) -> Option<String> {
        let records: Vec<&TokenRecord> = self
            .records
            .iter()
            .filter(|r| r.doc_id == doc_id)
            .sorted_by_key(|r| (r.sentence_id, r.token_id))
            .collect();

        if records.is_empty() {
            return None;
        }

        Some(records.iter().map(|r| r.token.as_str()).join(""))
    }

    /// Check identifiers and head references.
    ///
    /// - sentence and token ids are 1-based
    /// - a token id is unique within its sentence
    /// - a non-zero head references a token of the same sentence
    pub fn validate(&self) -> Result<(), Error> {
        let mut sentences: HashMap<(&str, u32), HashSet<u32>> = HashMap::new();

        for record in &self.records {
            if record.sentence_id == 0 || record.token_id == 0 {
                return Err(Error::Schema(format!(
                    "{}: sentence and token ids start at 1 (got sentence {}, token {})",
                    record.doc_id, record.sentence_id, record.token_id
                )));
            }

            let inserted = sentences
                .entry((record.doc_id.as_str(), record.sentence_id))
                .or_default()
                .insert(record.token_id);

            if !inserted {
                return Err(Error::Schema(format!(
                    "{}: duplicate token {} in sentence {}",
                    record.doc_id, record.token_id, record.sentence_id
                )));
            }
        }

        for record in &self.records {
            if record.head_token_id == 0 {
                continue;
            }
            let tokens = &sentences[&(record.doc_id.as_str(), record.sentence_id)];
            if !tokens.contains(&record.head_token_id) {
                return Err(Error::Schema(format!(
                    "{}: token {} of sentence {} has head {} outside of its sentence",
                    record.doc_id, record.token_id, record.sentence_id, record.head_token_id
                )));
            }
        }

        Ok(())
    }
}

impl From<Vec<TokenRecord>> for TokenTable {
    fn from(records: Vec<TokenRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<TokenRecord> for TokenTable {
    fn from_iter<I: IntoIterator<Item = TokenRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{TokenRecord, TokenTable};

    pub(crate) fn record(doc: &str, sentence: u32, token: u32, form: &str, head: u32) -> TokenRecord {
        TokenRecord {
            doc_id: doc.to_string(),
            sentence_id: sentence,
            token_id: token,
            token: form.to_string(),
            lemma: form.to_string(),
            upos: "X".to_string(),
            xpos: "x".to_string(),
            head_token_id: head,
            dep_rel: if head == 0 { "root" } else { "dep" }.to_string(),
        }
    }

    #[test]
    fn validate_ok() {
        let table = TokenTable::new(vec![
            record("a1", 1, 1, "foo", 2),
            record("a1", 1, 2, "bar", 0),
            record("a1", 2, 1, "baz", 0),
        ]);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn validate_head_outside_sentence() {
        let table = TokenTable::new(vec![
            record("a1", 1, 1, "foo", 0),
            record("a1", 2, 1, "bar", 2),
        ]);
        assert!(table.validate().is_err());
    }

    #[test]
    fn validate_duplicate_token() {
        let table = TokenTable::new(vec![
            record("a1", 1, 1, "foo", 0),
            record("a1", 1, 1, "bar", 0),
        ]);
        assert!(table.validate().is_err());
    }

    #[test]
    fn sort_by_documents() {
        let mut table = TokenTable::new(vec![
            record("b1", 1, 2, "y", 0),
            record("a1", 2, 1, "z", 0),
            record("b1", 1, 1, "x", 2),
            record("a1", 1, 1, "w", 0),
        ]);
        table.sort_by_documents(&["a1", "b1"]);
        let forms: Vec<&str> = table.records().iter().map(|r| r.token.as_str()).collect();
        assert_eq!(forms, vec!["w", "z", "x", "y"]);
    }

    #[test]
    fn documents_first_appearance() {
        let table = TokenTable::new(vec![
            record("b1", 1, 2, "y", 0),
            record("a1", 1, 1, "w", 0),
            record("b1", 1, 1, "x", 2),
        ]);
        let docs = table.documents();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].0, "b1");
        assert_eq!(docs[0].1[0].token, "x");
        assert_eq!(table.doc_ids(), vec!["b1", "a1"]);
        assert_eq!(table.concatenated_forms("b1"), Some("xy".to_string()));
        assert_eq!(table.concatenated_forms("c1"), None);
    }
}
