//! CoNLL-U export.
use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::tokens::TokenTable;

fn field(value: &str) -> &str {
    if value.is_empty() {
        "_"
    } else {
        value
    }
}

/// Serialize a table as CoNLL-U, one `# newdoc id` block per document.
///
/// FEATS, DEPS and MISC are left empty (`_`).
pub fn to_conllu<W: Write>(mut writer: W, table: &TokenTable) -> Result<(), Error> {
    for (doc_id, records) in table.documents() {
        writeln!(writer, "# newdoc id = {doc_id}")?;

        let mut current = None;
        for record in records {
            if current != Some(record.sentence_id) {
                if current.is_some() {
                    writeln!(writer)?;
                }
                writeln!(writer, "# sent_id = {}-{}", doc_id, record.sentence_id)?;
                current = Some(record.sentence_id);
            }

            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}\t_\t{}\t{}\t_\t_",
                record.token_id,
                field(&record.token),
                field(&record.lemma),
                field(&record.upos),
                field(&record.xpos),
                record.head_token_id,
                field(&record.dep_rel)
            )?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a table as a CoNLL-U file (gzipped if its name ends in `.gz`).
pub fn write_conllu(path: &Path, table: &TokenTable) -> Result<(), Error> {
    info!("writing {} tokens to {:?} (CoNLL-U)", table.len(), path);
    to_conllu(crate::io::create(path)?, table)
}
