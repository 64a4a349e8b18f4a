/*! Token-level annotations.

- [TokenRecord] and [TokenTable] hold the annotator output, one row per token.
- [schema] maps the columns of external token tables onto [TokenRecord] fields.
- [TokenSequences] reshape a table into ordered, per-document sequences of [TaggedToken]s
  that are only flattened into `token_tag` strings when matched or counted.
!*/
pub(crate) mod record;
pub mod schema;
mod sequence;

pub use record::{TokenRecord, TokenTable};
pub use sequence::{
    AdapterOptions, TagField, TaggedToken, TokenSequence, TokenSequences, UNSPECIFIED_TAG,
};
