//! Document grouping.
use std::collections::HashMap;

use regex::Regex;

use crate::corpus::Document;
use crate::error::Error;

/// Text type of a document id built as `type + row number`.
pub const DEFAULT_GROUP_PATTERN: &str = r"^(.*?)\d+$";

/// Assigns a group label to each document id.
#[derive(Debug, Clone)]
pub enum Grouping {
    /// first capture group of the pattern (or whole match if there is no group)
    Pattern(Regex),
    /// explicit document id -> group mapping
    Labels(HashMap<String, String>),
}

impl Grouping {
    pub fn from_pattern(pattern: &str) -> Result<Self, Error> {
        Ok(Grouping::Pattern(Regex::new(pattern)?))
    }

    /// Use document types as groups.
    pub fn from_documents(documents: &[Document]) -> Self {
        Grouping::Labels(
            documents
                .iter()
                .map(|d| (d.id().to_string(), d.kind().to_string()))
                .collect(),
        )
    }

    /// Group of a document.
    ///
    /// Fails if the id does not match the pattern, or has no label.
    pub fn group(&self, doc_id: &str) -> Result<String, Error> {
        match self {
            Grouping::Pattern(re) => {
                let caps = re.captures(doc_id).ok_or_else(|| {
                    Error::Custom(format!("document id {doc_id:?} does not match {re}"))
                })?;
                let group = caps.get(1).or_else(|| caps.get(0));
                // get(0) always exists on a match
                Ok(group.map(|m| m.as_str().to_string()).unwrap_or_default())
            }
            Grouping::Labels(labels) => labels
                .get(doc_id)
                .cloned()
                .ok_or_else(|| Error::Custom(format!("document id {doc_id:?} has no group"))),
        }
    }
}

impl Default for Grouping {
    fn default() -> Self {
        // the default pattern is a valid regular expression
        Grouping::Pattern(Regex::new(DEFAULT_GROUP_PATTERN).unwrap())
    }
}
