/*! Corpus annotation pipeline

1. loads a labelled corpus file,
1. optionally samples a fixed number of documents per label,
1. annotates the documents with a lexicon model on a worker pool,
1. saves the token table, so that annotation does not have to be run again.
!*/
use std::path::PathBuf;

use log::{info, warn};

use crate::annotators::LexiconBuilder;
use crate::error::Error;
use crate::io::{write_conllu, CorpusReader, TokenWriter};
use crate::processing::Sampler;
use crate::tokens::TokenTable;

use super::{AnnotationPipelineBuilder, Pipeline};

/// Token table output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    Csv,
    Conllu,
}

pub struct AnnotateCorpus {
    src: PathBuf,
    model: PathBuf,
    dst: PathBuf,
    delimiter: u8,
    sample: Option<usize>,
    seed: u64,
    chunk_size: usize,
    workers: usize,
    format: TokenFormat,
}

impl AnnotateCorpus {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        src: PathBuf,
        model: PathBuf,
        dst: PathBuf,
        delimiter: u8,
        sample: Option<usize>,
        seed: u64,
        chunk_size: usize,
        workers: usize,
        format: TokenFormat,
    ) -> Self {
        if sample.is_none() {
            warn!("No sample size specified! The whole corpus will be annotated.");
        }

        Self {
            src,
            model,
            dst,
            delimiter,
            sample,
            seed,
            chunk_size,
            workers,
            format,
        }
    }
}

impl Pipeline<TokenTable> for AnnotateCorpus {
    fn run(&self) -> Result<TokenTable, Error> {
        let documents = CorpusReader::new(self.delimiter).from_path(&self.src)?;

        let documents = match self.sample {
            Some(per_label) => Sampler::new(self.seed).sample(&documents, per_label)?,
            None => documents,
        };

        let mut loader = LexiconBuilder::default();
        loader.path(&self.model);

        let pipeline = AnnotationPipelineBuilder::new(loader)
            .chunk_size(self.chunk_size)
            .workers(self.workers)
            .build()?;

        let table = pipeline.run(documents)?;

        match self.format {
            TokenFormat::Csv => TokenWriter::new(self.delimiter).to_path(&self.dst, &table)?,
            TokenFormat::Conllu => write_conllu(&self.dst, &table)?,
        }

        info!("annotation done ({})", Self::version());
        Ok(table)
    }
}
