//! Pipelines.
//!
//! Various pipelines are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
//!
//! - [AnnotationPipeline] annotates documents chunk by chunk on a worker pool,
//! - [AnnotateCorpus] runs load → sample → annotate → save from files,
//! - [analysis] pipelines compute keyness, collocates and frequencies from saved token tables.
pub mod analysis;
pub mod annotation;
pub mod corpus;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use analysis::{CollocateAnalysis, FrequencyAnalysis, KeynessAnalysis, TokenOptions};
pub use annotation::{AnnotationPipeline, AnnotationPipelineBuilder};
pub use corpus::{AnnotateCorpus, TokenFormat};
pub use pipeline::Pipeline;
