/*! Splitting

Cuts a document list into contiguous chunks of `chunk_size` documents.
The last chunk may be shorter.
!*/
use log::debug;

use crate::corpus::Document;
use crate::error::Error;

/// Default number of documents per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// A contiguous run of documents, tagged with its position in the split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    index: usize,
    documents: Vec<Document>,
}

impl Chunk {
    pub fn new(index: usize, documents: Vec<Document>) -> Self {
        Self { index, documents }
    }

    /// Get the chunk's index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get a reference to the chunk's documents.
    pub fn documents(&self) -> &[Document] {
        self.documents.as_ref()
    }
}

/// Split `documents` into `ceil(len / chunk_size)` chunks.
pub fn split(documents: Vec<Document>, chunk_size: usize) -> Result<Vec<Chunk>, Error> {
    if chunk_size == 0 {
        return Err(Error::Custom("chunk size must be at least 1".to_string()));
    }

    let mut chunks = Vec::with_capacity((documents.len() + chunk_size - 1) / chunk_size);
    let mut documents = documents.into_iter().peekable();

    while documents.peek().is_some() {
        let chunk: Vec<Document> = documents.by_ref().take(chunk_size).collect();
        chunks.push(Chunk::new(chunks.len(), chunk));
    }

    debug!("split into {} chunks of at most {chunk_size} documents", chunks.len());
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::corpus::Document;

    use super::split;

    fn docs(nb: usize) -> Vec<Document> {
        (1..=nb)
            .map(|row| Document::from_row("t".to_string(), row, format!("text {row}")))
            .collect()
    }

    #[test]
    fn chunk_count() {
        for (size, chunk_size) in [(0, 10), (1, 10), (10, 10), (11, 10), (20, 10), (25, 3), (7, 1)] {
            let chunks = split(docs(size), chunk_size).unwrap();
            assert_eq!(chunks.len(), (size + chunk_size - 1) / chunk_size);
        }
    }

    #[test]
    fn union_without_duplicates() {
        let input = docs(23);
        let chunks = split(input.clone(), 10).unwrap();

        assert_eq!(chunks[2].documents().len(), 3);
        let indices: Vec<usize> = chunks.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        let flattened: Vec<&Document> = chunks.iter().flat_map(|c| c.documents()).collect();
        assert_eq!(flattened.len(), input.len());

        let ids: HashSet<&str> = flattened.iter().map(|d| d.id()).collect();
        let expected: HashSet<&str> = input.iter().map(|d| d.id()).collect();
        assert_eq!(ids, expected);

        // contiguous
        assert_eq!(flattened[10].id(), "t11");
    }

    #[test]
    fn zero_chunk_size() {
        assert!(split(docs(3), 0).is_err());
    }
}
