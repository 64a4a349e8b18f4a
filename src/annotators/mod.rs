/*! Annotators

All annotators implement [Annotate] to be useable in the annotation pipeline.
Models are obtained through a [ModelLoader], so that each worker task can load its own, exclusively held, model.

The shipped model is a [Lexicon]: a forward maximum-matching segmenter and tagger driven by a lexicon file,
with a baseline dependency attachment. Output of other Universal Dependencies parsers can be imported
through [crate::io::read_conllu].
!*/
mod annotator;
mod lexicon;
mod segment;

pub use annotator::{Annotate, ModelLoader};
pub use lexicon::{Lexicon, LexiconBuilder, LexiconEntry};
pub use segment::{sentences, words, Segment};
