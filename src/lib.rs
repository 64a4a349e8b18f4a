//! # udcorpus
//!
//! Universal Dependencies annotation of labelled corpora, and corpus statistics over the annotations:
//! keyness between two groups of documents, collocates of a node term and frequency tables.
//!
//! The library follows the data flow of the `udcorpus` tool:
//!
//! 1. [io::CorpusReader] loads documents, [processing::Sampler] samples them,
//! 1. [pipelines::AnnotationPipeline] annotates them with an [annotators::Annotate] model on a worker pool,
//! 1. [tokens::TokenSequences] reshape the token table, [filtering::TokenSelection] selects tokens,
//! 1. [matrix::DocumentTermMatrix] counts them, and [stats] computes keyness, collocates and frequencies.
pub mod annotators;
pub mod corpus;
pub mod error;
pub mod filtering;
pub mod io;
pub mod matrix;
pub mod pipelines;
pub mod processing;
pub mod stats;
pub mod tokens;
