/*! Analysis pipelines

Each pipeline loads a saved token table, reshapes it into token sequences and computes a statistics table:

- [KeynessAnalysis]: target group vs reference group,
- [CollocateAnalysis]: collocates of a node term,
- [FrequencyAnalysis]: frequency table, optionally restricted to a group.
!*/
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::filtering::TokenSelection;
use crate::io::TokenReader;
use crate::matrix::{DocumentTermMatrix, Grouping};
use crate::stats::{
    collocates, frequency_table, keyness, CollocateRow, FrequencyRow, KeynessRow, Measure, Window,
};
use crate::tokens::{AdapterOptions, TokenSequences};

use super::Pipeline;

/// Token table loading and shaping options shared by analyses.
#[derive(Debug, Clone, Default)]
pub struct TokenOptions {
    pub adapter: AdapterOptions,
    /// keep tokens matching one of these patterns
    pub keep: Vec<String>,
    /// remove tokens matching one of these patterns
    pub remove: Vec<String>,
    pub delimiter: Option<u8>,
}

impl TokenOptions {
    /// Keep and remove patterns are mutually exclusive.
    pub fn selection(&self) -> Result<TokenSelection, Error> {
        match (self.keep.is_empty(), self.remove.is_empty()) {
            (true, true) => Ok(TokenSelection::default()),
            (false, true) => TokenSelection::keep(&self.keep),
            (true, false) => TokenSelection::remove(&self.remove),
            (false, false) => Err(Error::Custom(
                "keep and remove patterns cannot be used together".to_string(),
            )),
        }
    }

    pub fn sequences(&self, src: &Path) -> Result<TokenSequences, Error> {
        let reader = TokenReader::new(self.delimiter.unwrap_or(b','));
        let table = reader.from_path(src)?;
        Ok(TokenSequences::from_table(&table, &self.adapter))
    }

    pub fn matrix(&self, src: &Path, grouping: &Grouping) -> Result<DocumentTermMatrix, Error> {
        let sequences = self.sequences(src)?;
        DocumentTermMatrix::build(&sequences, grouping, &self.selection()?)
    }
}

pub struct KeynessAnalysis {
    pub src: PathBuf,
    pub target: String,
    pub reference: String,
    pub grouping: Grouping,
    pub tokens: TokenOptions,
    pub min_freq: u64,
    pub measure: Measure,
}

impl Pipeline<Vec<KeynessRow>> for KeynessAnalysis {
    fn run(&self) -> Result<Vec<KeynessRow>, Error> {
        let dtm = self.tokens.matrix(&self.src, &self.grouping)?;

        // each subset is trimmed on its own
        let target = dtm.subset(&self.target).trim(self.min_freq);
        let reference = dtm.subset(&self.reference).trim(self.min_freq);
        info!(
            "{:?}: {} documents, {:?}: {} documents",
            self.target,
            target.nb_docs(),
            self.reference,
            reference.nb_docs()
        );

        keyness(&target, &reference, self.measure)
    }
}

/// Keep and remove patterns are applied before windowing: windows run over selected tokens only.
pub struct CollocateAnalysis {
    pub src: PathBuf,
    pub node: String,
    pub window: Window,
    pub min_cooccurrences: u64,
    pub tokens: TokenOptions,
}

impl Pipeline<Vec<CollocateRow>> for CollocateAnalysis {
    fn run(&self) -> Result<Vec<CollocateRow>, Error> {
        let sequences = self
            .tokens
            .sequences(&self.src)?
            .select(&self.tokens.selection()?)?;
        collocates(&sequences, &self.node, self.window, self.min_cooccurrences)
    }
}

pub struct FrequencyAnalysis {
    pub src: PathBuf,
    pub group: Option<String>,
    pub grouping: Grouping,
    pub tokens: TokenOptions,
    pub min_freq: u64,
}

impl Pipeline<Vec<FrequencyRow>> for FrequencyAnalysis {
    fn run(&self) -> Result<Vec<FrequencyRow>, Error> {
        let dtm = self.tokens.matrix(&self.src, &self.grouping)?;
        let dtm = match &self.group {
            Some(group) => dtm.subset(group),
            None => dtm,
        };
        Ok(frequency_table(&dtm.trim(self.min_freq)))
    }
}
