//! Tokenizer adapter: per-document token sequences.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::filtering::{Filter, TokenSelection};

use super::{TokenRecord, TokenTable};

/// Tag given to tokens whose tag is unspecified (`_` or empty), as in CoNLL-U `_` fields.
pub const UNSPECIFIED_TAG: &str = "X";

/// Tag vocabulary attached to each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagField {
    None,
    Upos,
    Xpos,
}

impl FromStr for TagField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(TagField::None),
            "upos" => Ok(TagField::Upos),
            "xpos" => Ok(TagField::Xpos),
            other => Err(Error::Custom(format!(
                "unknown tag field {other:?} (expected none, upos or xpos)"
            ))),
        }
    }
}

/// Tokenizer adapter options.
///
/// Defaults: no tag, `_` separator, no lowercasing, surface forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterOptions {
    pub tag: TagField,
    pub separator: char,
    pub lowercase: bool,
    pub use_lemma: bool,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            tag: TagField::None,
            separator: '_',
            lowercase: false,
            use_lemma: false,
        }
    }
}

/// A token form and its (optional) tag, kept apart until serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedToken {
    form: String,
    tag: Option<String>,
}

impl TaggedToken {
    pub fn new(form: String, tag: Option<String>) -> Self {
        Self { form, tag }
    }

    /// Get a reference to the token's form.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Get a reference to the token's tag.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Flatten into `form<separator>tag`, or `form` if there is no tag.
    ///
    /// Fails if `separator` occurs in the form or the tag,
    /// since the fused string could not be split back unambiguously.
    pub fn fuse(&self, separator: char) -> Result<String, Error> {
        match &self.tag {
            None => Ok(self.form.clone()),
            Some(tag) => {
                for value in [&self.form, tag] {
                    if value.contains(separator) {
                        return Err(Error::Separator {
                            separator,
                            value: value.clone(),
                        });
                    }
                }
                Ok(format!("{}{}{}", self.form, separator, tag))
            }
        }
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}/{}", self.form, tag),
            None => write!(f, "{}", self.form),
        }
    }
}

/// Ordered tokens of a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    doc_id: String,
    tokens: Vec<TaggedToken>,
}

impl TokenSequence {
    pub fn new(doc_id: String, tokens: Vec<TaggedToken>) -> Self {
        Self { doc_id, tokens }
    }

    /// Get a reference to the sequence's document id.
    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    /// Get a reference to the sequence's tokens.
    pub fn tokens(&self) -> &[TaggedToken] {
        self.tokens.as_ref()
    }

    /// Fused representation of every token. See [TaggedToken::fuse].
    pub fn fused(&self, separator: char) -> Result<Vec<String>, Error> {
        self.tokens.iter().map(|t| t.fuse(separator)).collect()
    }
}

/// Token sequences of a whole corpus, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequences {
    sequences: Vec<TokenSequence>,
    separator: char,
}

impl TokenSequences {
    pub fn new(sequences: Vec<TokenSequence>, separator: char) -> Self {
        Self {
            sequences,
            separator,
        }
    }

    fn convert(record: &TokenRecord, options: &AdapterOptions) -> TaggedToken {
        let form = if options.use_lemma {
            &record.lemma
        } else {
            &record.token
        };
        let form = if options.lowercase {
            form.to_lowercase()
        } else {
            form.clone()
        };

        let tag = match options.tag {
            TagField::None => None,
            TagField::Upos => Some(record.upos.as_str()),
            TagField::Xpos => Some(record.xpos.as_str()),
        };
        let tag = tag.map(|tag| match tag.trim() {
            "" | "_" => UNSPECIFIED_TAG.to_string(),
            tag => tag.to_string(),
        });

        TaggedToken::new(form, tag)
    }

    /// Build one sequence per document, in order of first appearance in the table.
    ///
    /// Tokens are ordered by `(sentence_id, token_id)`.
    pub fn from_table(table: &TokenTable, options: &AdapterOptions) -> Self {
        let sequences = table
            .documents()
            .into_iter()
            .map(|(doc_id, records)| {
                let tokens = records
                    .into_iter()
                    .map(|r| Self::convert(r, options))
                    .collect();
                TokenSequence::new(doc_id.to_string(), tokens)
            })
            .collect();

        Self::new(sequences, options.separator)
    }

    /// Drop the tokens whose fused form is not selected by `selection`.
    ///
    /// Remaining tokens keep their order and become adjacent.
    pub fn select(&self, selection: &TokenSelection) -> Result<Self, Error> {
        let mut sequences = Vec::with_capacity(self.sequences.len());
        for seq in &self.sequences {
            let mut tokens = Vec::with_capacity(seq.tokens.len());
            for token in &seq.tokens {
                if selection.detect(token.fuse(self.separator)?.as_str()) {
                    tokens.push(token.clone());
                }
            }
            sequences.push(TokenSequence::new(seq.doc_id.clone(), tokens));
        }

        Ok(Self::new(sequences, self.separator))
    }

    /// Get a reference to the sequences.
    pub fn sequences(&self) -> &[TokenSequence] {
        self.sequences.as_ref()
    }

    /// Separator used when fusing tokens.
    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Total number of tokens.
    pub fn nb_tokens(&self) -> usize {
        self.sequences.iter().map(|s| s.tokens.len()).sum()
    }
}
