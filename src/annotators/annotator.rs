//! Annotation traits.
use log::error;

use crate::corpus::Document;
use crate::error::Error;
use crate::tokens::TokenTable;

/// Text in, token records out.
pub trait Annotate {
    /// Annotate a single document.
    ///
    /// Returned records carry the document id, 1-based sentence and token ids and head references.
    fn annotate(&self, doc: &Document) -> Result<TokenTable, Error>;

    /// Annotate documents in order, stopping at the first failure.
    fn annotate_all(&self, docs: &[Document]) -> Result<TokenTable, Error> {
        let mut table = TokenTable::default();
        for doc in docs {
            let annotated = self.annotate(doc).map_err(|e| {
                error!("[{}] annotation failed: {}", doc.id(), e);
                e
            })?;
            table.extend(annotated);
        }
        Ok(table)
    }
}

/// Loads a fresh model.
///
/// Loaders are shared across worker threads, models are not.
pub trait ModelLoader: Sync {
    type Model: Annotate;

    fn load(&self) -> Result<Self::Model, Error>;
}
