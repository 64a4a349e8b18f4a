/*! Raw corpus documents.

A [Document] is a labelled raw text, identified by its label concatenated with its row number in the corpus file.
!*/
mod document;

pub use document::Document;
