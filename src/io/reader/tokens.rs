//! Token table reader.
use std::io::Read;
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::tokens::schema::Schema;
use crate::tokens::TokenTable;

/// Reads a delimited token table, resolving its columns through [Schema].
///
/// The loaded table is validated (see [TokenTable::validate]).
pub struct TokenReader {
    delimiter: u8,
}

impl TokenReader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<TokenTable, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let schema = Schema::from_header(rdr.headers()?)?;

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            records.push(schema.record(&row, line)?);
        }

        let table = TokenTable::new(records);
        table.validate()?;
        Ok(table)
    }

    pub fn from_path(&self, path: &Path) -> Result<TokenTable, Error> {
        info!("loading token table {:?}", path);
        let table = self.from_reader(crate::io::open(path)?)?;
        info!(
            "loaded {} tokens from {} documents",
            table.len(),
            table.doc_ids().len()
        );
        Ok(table)
    }
}

impl Default for TokenReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}
