/*! Corpus statistics

- [keyness] compares term frequencies between a target and a reference matrix,
- [collocates] ranks the neighbours of a node term by pointwise mutual information,
- [frequency_table] ranks terms by frequency with their dispersion across documents.
!*/
mod collocation;
mod distribution;
mod frequency;
mod keyness;

pub use collocation::{collocates, CollocateRow, Window};
pub use distribution::chi_squared_sf;
pub use frequency::{frequency_table, FrequencyRow};
pub use keyness::{keyness, KeynessRow, Measure};
