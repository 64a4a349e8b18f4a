/*! Parallel annotation

Documents are split into chunks (see [crate::processing::split]) that are processed on a pool of `workers` threads.

For each chunk, the worker:
1. loads a fresh model through the [ModelLoader] (models are never shared between chunks),
1. annotates every document of the chunk, in order,
1. returns the chunk table tagged with the chunk index.

Chunk tables are then merged by [crate::processing::combine].
Any failure aborts the whole run: no partial result is returned and nothing is retried.
!*/
use log::{debug, error, info};
use rayon::prelude::*;

use crate::annotators::{Annotate, ModelLoader};
use crate::corpus::Document;
use crate::error::Error;
use crate::processing::split::DEFAULT_CHUNK_SIZE;
use crate::processing::{combine, split, Chunk, ChunkAnnotation, Order};
use crate::tokens::TokenTable;

/// Default number of worker threads.
pub const DEFAULT_WORKERS: usize = 4;

pub struct AnnotationPipeline<L: ModelLoader> {
    loader: L,
    chunk_size: usize,
    workers: usize,
    order: Order,
}

impl<L: ModelLoader> AnnotationPipeline<L> {
    /// Annotate a single chunk with a freshly loaded model.
    fn process_chunk(loader: &L, chunk: &Chunk) -> Result<ChunkAnnotation, Error> {
        debug!(
            "chunk {}: loading model for {} documents",
            chunk.index(),
            chunk.documents().len()
        );

        let model = loader.load().map_err(|e| {
            error!("chunk {}: could not load model: {}", chunk.index(), e);
            e
        })?;
        let table = model.annotate_all(chunk.documents())?;

        debug!("chunk {}: {} tokens", chunk.index(), table.len());
        Ok(ChunkAnnotation::new(chunk.index(), table))
    }

    /// Annotate documents.
    ///
    /// The resulting table is validated before being returned.
    pub fn run(&self, documents: Vec<Document>) -> Result<TokenTable, Error> {
        let nb_documents = documents.len();
        let chunks = split(documents, self.chunk_size)?;
        info!(
            "annotating {} documents in {} chunks on {} workers",
            nb_documents,
            chunks.len(),
            self.workers
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;

        let loader = &self.loader;
        let annotated: Vec<ChunkAnnotation> = pool.install(|| {
            chunks
                .par_iter()
                .map(|chunk| Self::process_chunk(loader, chunk))
                .collect::<Result<Vec<_>, Error>>()
        })?;

        let table = combine(annotated, self.order);
        table.validate()?;

        info!(
            "annotated {} tokens from {} documents",
            table.len(),
            table.doc_ids().len()
        );
        Ok(table)
    }
}

/// [AnnotationPipeline] builder.
///
/// Defaults: chunks of [DEFAULT_CHUNK_SIZE] documents, [DEFAULT_WORKERS] workers, [Order::Declared].
pub struct AnnotationPipelineBuilder<L: ModelLoader> {
    loader: L,
    chunk_size: usize,
    workers: usize,
    order: Order,
}

impl<L: ModelLoader> AnnotationPipelineBuilder<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            chunk_size: DEFAULT_CHUNK_SIZE,
            workers: DEFAULT_WORKERS,
            order: Order::default(),
        }
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn build(self) -> Result<AnnotationPipeline<L>, Error> {
        if self.chunk_size == 0 {
            return Err(Error::Custom("chunk size must be at least 1".to_string()));
        }
        if self.workers == 0 {
            return Err(Error::Custom("at least one worker is needed".to_string()));
        }

        Ok(AnnotationPipeline {
            loader: self.loader,
            chunk_size: self.chunk_size,
            workers: self.workers,
            order: self.order,
        })
    }
}
