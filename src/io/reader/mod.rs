/*! Readers

- [CorpusReader] loads labelled raw documents,
- [TokenReader] loads token tables saved by [crate::io::writer::TokenWriter] or other UD toolkits,
- [read_conllu] imports CoNLL-U parser output.
!*/
mod conllu;
mod corpus;
mod tokens;

pub use conllu::{parse_conllu, read_conllu};
pub use corpus::CorpusReader;
pub use tokens::TokenReader;
