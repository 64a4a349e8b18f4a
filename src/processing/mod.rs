/*! Corpus processing

Data shaping around the annotator:

1. [sample] draws a reproducible, per-label subset of the corpus,
1. [split] cuts it into contiguous chunks that are annotated independently,
1. [combine] merges the per-chunk token tables back into a single one.
!*/
pub mod combine;
pub mod sample;
pub mod split;

pub use combine::{combine, ChunkAnnotation, Order};
pub use sample::Sampler;
pub use split::{split, Chunk};
