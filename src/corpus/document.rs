use serde::{Deserialize, Serialize};

/// A raw, labelled document.
///
/// Documents are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: String,
    kind: String,
    text: String,
}

impl Document {
    pub fn new(id: String, kind: String, text: String) -> Self {
        Self { id, kind, text }
    }

    /// Build a document from its label and its 1-based row number.
    ///
    /// The id is the label directly followed by the row number (`acad12`).
    /// A label ending in a digit makes the id ambiguous (`L2` at row 1 gives `L21`):
    /// [crate::io::CorpusReader] rejects such labels.
    pub fn from_row(kind: String, row: usize, text: String) -> Self {
        let id = format!("{kind}{row}");
        Self { id, kind, text }
    }

    /// Get a reference to the document's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get a reference to the document's type label.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Get a reference to the document's text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::Document;

    #[test]
    fn id_from_row() {
        let doc = Document::from_row("news".to_string(), 12, "foo".to_string());
        assert_eq!(doc.id(), "news12");
        assert_eq!(doc.kind(), "news");
        assert_eq!(doc.text(), "foo");
    }
}
