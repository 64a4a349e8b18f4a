//! Token table writer.
use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::tokens::schema::canonical_header;
use crate::tokens::TokenTable;

/// Writes a [TokenTable] with a `doc_id,sentence_id,token_id,token,lemma,upos,xpos,head_token_id,dep_rel` header.
pub struct TokenWriter {
    delimiter: u8,
}

impl TokenWriter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// The header is written even if the table is empty.
    pub fn to_writer<W: Write>(&self, writer: W, table: &TokenTable) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(canonical_header())?;
        for record in table.records() {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_path(&self, path: &Path, table: &TokenTable) -> Result<(), Error> {
        info!("writing {} tokens to {:?}", table.len(), path);
        self.to_writer(crate::io::create(path)?, table)
    }
}

impl Default for TokenWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}
