/*! Document-term matrices

A [DocumentTermMatrix] counts terms per document; each document carries a group label given by a [Grouping].
Matrices are read-only once built: subsetting and trimming return new matrices.
!*/
pub(crate) mod dtm;
mod grouping;

pub use dtm::{DocumentRow, DocumentTermMatrix};
pub use grouping::{Grouping, DEFAULT_GROUP_PATTERN};
