/*! Writers

- [TokenWriter] saves token tables as delimited files, so that annotation does not have to be run again,
- [write_conllu] exports token tables as CoNLL-U,
- [TableWriter] saves statistics tables (keyness, collocates, frequencies) as CSV or JSON lines.
!*/
mod conllu;
mod table;
mod tokens;

pub use conllu::{to_conllu, write_conllu};
pub use table::{OutputFormat, TableWriter};
pub use tokens::TokenWriter;
