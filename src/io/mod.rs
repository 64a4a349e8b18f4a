/*!
# IO utilities

Loading of raw corpora and token tables, saving of token tables and statistics tables.

Paths ending in `.gz` are transparently (de)compressed.
!*/
pub mod reader;
pub mod writer;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Error;

fn is_gzip(path: &Path) -> bool {
    path.extension().map(|ext| ext == "gz").unwrap_or(false)
}

/// Open a file for reading, decompressing it if its name ends in `.gz`.
pub fn open(path: &Path) -> Result<Box<dyn Read>, Error> {
    let file = BufReader::new(File::open(path)?);
    if is_gzip(path) {
        Ok(Box::new(MultiGzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// Create a file for writing, compressing it if its name ends in `.gz`.
pub fn create(path: &Path) -> Result<Box<dyn Write>, Error> {
    let file = BufWriter::new(File::create(path)?);
    if is_gzip(path) {
        Ok(Box::new(GzEncoder::new(file, Compression::default())))
    } else {
        Ok(Box::new(file))
    }
}

pub use reader::{read_conllu, CorpusReader, TokenReader};
pub use writer::{write_conllu, OutputFormat, TableWriter, TokenWriter};
