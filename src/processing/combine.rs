/*! Combining

Merges per-chunk annotation results into a single [TokenTable].

Chunks may complete in any order. Each result carries the index of its chunk,
so that the declared document order can be restored before merging.
!*/
use log::debug;

use crate::tokens::TokenTable;

/// Annotation result of a single chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkAnnotation {
    index: usize,
    table: TokenTable,
}

impl ChunkAnnotation {
    pub fn new(index: usize, table: TokenTable) -> Self {
        Self { index, table }
    }

    /// Get the chunk index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get a reference to the chunk's token table.
    pub fn table(&self) -> &TokenTable {
        &self.table
    }
}

/// Ordering policy of the combined table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// chunks are merged by chunk index, which restores the input document order.
    #[default]
    Declared,
    /// chunks are merged in the order they are given (usually completion order).
    Completion,
}

/// Concatenate chunk tables.
///
/// Every document of every chunk is present in the result, whatever the [Order].
pub fn combine(mut chunks: Vec<ChunkAnnotation>, order: Order) -> TokenTable {
    if order == Order::Declared {
        chunks.sort_by_key(|c| c.index);
    }

    debug!(
        "combining chunks {:?}",
        chunks.iter().map(|c| c.index).collect::<Vec<_>>()
    );

    let mut combined = TokenTable::default();
    for chunk in chunks {
        combined.extend(chunk.table);
    }
    combined
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::tokens::record::tests::record;
    use crate::tokens::TokenTable;

    use super::{combine, ChunkAnnotation, Order};

    fn chunks() -> Vec<ChunkAnnotation> {
        // completion order 2, 0, 1
        vec![
            ChunkAnnotation::new(2, TokenTable::new(vec![record("c5", 1, 1, "e", 0)])),
            ChunkAnnotation::new(
                0,
                TokenTable::new(vec![record("a1", 1, 1, "a", 0), record("a2", 1, 1, "b", 0)]),
            ),
            ChunkAnnotation::new(
                1,
                TokenTable::new(vec![record("b3", 1, 1, "c", 0), record("b4", 1, 1, "d", 0)]),
            ),
        ]
    }

    #[test]
    fn declared_order() {
        let table = combine(chunks(), Order::Declared);
        assert_eq!(table.doc_ids(), vec!["a1", "a2", "b3", "b4", "c5"]);
    }

    #[test]
    fn completion_order_is_complete() {
        let table = combine(chunks(), Order::Completion);
        assert_eq!(table.doc_ids()[0], "c5");

        let ids: HashSet<&str> = table.doc_ids().into_iter().collect();
        let expected: HashSet<&str> = ["a1", "a2", "b3", "b4", "c5"].into_iter().collect();
        assert_eq!(ids, expected);
        assert_eq!(table.len(), 5);
    }
}
