/*! Sampling

Reproducible per-label sampling.

A single [StdRng] is seeded once for the whole sample, and labels are visited in sorted order,
so that the result only depends on the seed and on the input order.
!*/
use std::collections::BTreeMap;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::corpus::Document;
use crate::error::Error;

/// Default seed.
pub const DEFAULT_SEED: u64 = 123;

pub struct Sampler {
    seed: u64,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Get the sampler's seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample `per_label` documents of each label, without replacement.
    ///
    /// Documents are grouped by label (sorted), and emitted in sampled order within each label.
    /// Fails with [Error::Sample] if a label has fewer than `per_label` documents.
    pub fn sample(&self, documents: &[Document], per_label: usize) -> Result<Vec<Document>, Error> {
        let mut by_label: BTreeMap<&str, Vec<&Document>> = BTreeMap::new();
        for doc in documents {
            by_label.entry(doc.kind()).or_default().push(doc);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut sample = Vec::with_capacity(per_label * by_label.len());

        for (label, docs) in by_label {
            if docs.len() < per_label {
                return Err(Error::Sample {
                    label: label.to_string(),
                    available: docs.len(),
                    requested: per_label,
                });
            }

            debug!("[{label}] sampling {per_label} out of {}", docs.len());
            sample.extend(
                docs.choose_multiple(&mut rng, per_label)
                    .map(|doc| (*doc).clone()),
            );
        }

        info!(
            "sampled {} documents (seed {}, {} per label)",
            sample.len(),
            self.seed,
            per_label
        );
        Ok(sample)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
