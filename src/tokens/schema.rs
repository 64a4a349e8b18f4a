/*! Token table schema.

External token tables (from UD toolkits, spreadsheets or earlier runs) name their columns differently.
[FIELDS] is the explicit mapping between each [TokenRecord] field and the column names accepted for it.
A [Schema] is resolved once from a header row and then converts every row, failing on missing columns or unparsable ids.
!*/
use csv::StringRecord;
use lazy_static::lazy_static;

use crate::error::Error;

use super::TokenRecord;

/// A [TokenRecord] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DocId,
    SentenceId,
    TokenId,
    Token,
    Lemma,
    Upos,
    Xpos,
    HeadTokenId,
    DepRel,
}

lazy_static! {
    /// Accepted column names for each field, canonical name first.
    pub static ref FIELDS: Vec<(Field, Vec<&'static str>)> = vec![
        (Field::DocId, vec!["doc_id", "doc", "document", "document_id"]),
        (Field::SentenceId, vec!["sentence_id", "sentence", "sent_id"]),
        (Field::TokenId, vec!["token_id", "id", "tid"]),
        (Field::Token, vec!["token", "form", "word"]),
        (Field::Lemma, vec!["lemma"]),
        (Field::Upos, vec!["upos", "pos"]),
        (Field::Xpos, vec!["xpos", "tag"]),
        (Field::HeadTokenId, vec!["head_token_id", "head", "head_id"]),
        (Field::DepRel, vec!["dep_rel", "deprel", "relation"]),
    ];
}

/// Canonical header, in [TokenRecord] field order.
pub fn canonical_header() -> Vec<&'static str> {
    FIELDS.iter().map(|(_, names)| names[0]).collect()
}

/// Column positions of every [Field] in a given header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<(Field, usize)>,
}

impl Schema {
    /// Resolve column positions from a header row.
    ///
    /// Header matching is case-insensitive. Unknown columns are ignored.
    pub fn from_header(header: &StringRecord) -> Result<Self, Error> {
        let lowered: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();

        let columns = FIELDS
            .iter()
            .map(|(field, names)| {
                lowered
                    .iter()
                    .position(|h| names.contains(&h.as_str()))
                    .map(|pos| (*field, pos))
                    .ok_or_else(|| {
                        Error::Schema(format!(
                            "missing column for {:?} (accepted names: {})",
                            field,
                            names.join(", ")
                        ))
                    })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self { columns })
    }

    fn position(&self, field: Field) -> usize {
        // every field is resolved in from_header
        self.columns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, pos)| *pos)
            .unwrap_or(usize::MAX)
    }

    fn text(&self, row: &StringRecord, field: Field) -> String {
        row.get(self.position(field)).unwrap_or_default().to_string()
    }

    fn number(&self, row: &StringRecord, field: Field, line: u64) -> Result<u32, Error> {
        let value = row.get(self.position(field)).unwrap_or_default().trim();
        value.parse::<u32>().map_err(|_| {
            Error::Schema(format!(
                "line {line}: {field:?} is not a non-negative integer: {value:?}"
            ))
        })
    }

    /// Convert a row into a [TokenRecord].
    ///
    /// `line` is only used for error reporting.
    pub fn record(&self, row: &StringRecord, line: u64) -> Result<TokenRecord, Error> {
        Ok(TokenRecord {
            doc_id: self.text(row, Field::DocId),
            sentence_id: self.number(row, Field::SentenceId, line)?,
            token_id: self.number(row, Field::TokenId, line)?,
            token: self.text(row, Field::Token),
            lemma: self.text(row, Field::Lemma),
            upos: self.text(row, Field::Upos),
            xpos: self.text(row, Field::Xpos),
            head_token_id: self.number(row, Field::HeadTokenId, line)?,
            dep_rel: self.text(row, Field::DepRel),
        })
    }
}
