/*! Filtering utilities

Filters implement [filter::Filter]: a pure detection over an item.

[TokenSelection] selects tokens by case-insensitive regular expressions matched against their fused `token_tag` form.
It runs as a pre-pass over token sequences, so that excluded tokens never contribute counts.
! */
mod filter;
mod pattern;

pub use filter::Filter;
pub use pattern::{SelectionMode, TokenSelection};
