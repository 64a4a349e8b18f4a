/*! Corpus reader

Reads a delimited file holding at least a `type` and a `text` column.
Each row becomes a [Document] whose id is its type followed by its 1-based row number.
Types ending in a digit are rejected: the row number could not be told apart from the type.
!*/
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};

use crate::corpus::Document;
use crate::error::Error;

pub struct CorpusReader {
    delimiter: u8,
}

impl CorpusReader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    fn column(headers: &csv::StringRecord, name: &str) -> Result<usize, Error> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::Schema(format!("corpus has no {name:?} column")))
    }

    /// Read documents from any reader.
    pub fn from_reader<R: Read>(&self, reader: R) -> Result<Vec<Document>, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let type_col = Self::column(&headers, "type")?;
        let text_col = Self::column(&headers, "text")?;
        debug!("type column: {type_col}, text column: {text_col}");

        let mut documents = Vec::new();
        for (idx, row) in rdr.records().enumerate() {
            let row = row?;
            let row_number = idx + 1;

            let kind = row.get(type_col).unwrap_or_default().trim().to_string();
            let text = row.get(text_col).unwrap_or_default().to_string();

            if kind.is_empty() {
                return Err(Error::Schema(format!("row {row_number} has an empty type")));
            }
            if kind.ends_with(|c: char| c.is_ascii_digit()) {
                return Err(Error::Schema(format!(
                    "row {row_number}: type {kind:?} ends with a digit"
                )));
            }
            if text.trim().is_empty() {
                warn!("row {row_number} ({kind}) has an empty text");
            }

            documents.push(Document::from_row(kind, row_number, text));
        }

        Ok(documents)
    }

    /// Read documents from a file (gzipped if its name ends in `.gz`).
    pub fn from_path(&self, path: &Path) -> Result<Vec<Document>, Error> {
        info!("loading corpus {:?}", path);
        let documents = self.from_reader(crate::io::open(path)?)?;
        info!("loaded {} documents", documents.len());
        Ok(documents)
    }
}

impl Default for CorpusReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}
