//! Pattern-based token selection.
use log::debug;
use regex::{Regex, RegexBuilder};

use crate::error::Error;

use super::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// keep tokens matching at least one pattern
    Keep,
    /// remove tokens matching at least one pattern
    Remove,
}

/// Case-insensitive token selection.
///
/// Patterns are unanchored: use `^…$` for whole-token matches.
/// The default selection removes nothing.
#[derive(Debug, Clone)]
pub struct TokenSelection {
    patterns: Vec<Regex>,
    mode: SelectionMode,
}

impl TokenSelection {
    fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>, Error> {
        patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p.as_ref())
                    .case_insensitive(true)
                    .build()
                    .map_err(Error::from)
            })
            .collect()
    }

    pub fn new<S: AsRef<str>>(patterns: &[S], mode: SelectionMode) -> Result<Self, Error> {
        let patterns = Self::compile(patterns)?;
        debug!("{:?} selection with patterns {:?}", mode, patterns);
        Ok(Self { patterns, mode })
    }

    /// Keep tokens matching any of `patterns`.
    pub fn keep<S: AsRef<str>>(patterns: &[S]) -> Result<Self, Error> {
        Self::new(patterns, SelectionMode::Keep)
    }

    /// Remove tokens matching any of `patterns`.
    pub fn remove<S: AsRef<str>>(patterns: &[S]) -> Result<Self, Error> {
        Self::new(patterns, SelectionMode::Remove)
    }

    /// Get the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    fn matches(&self, token: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(token))
    }
}

impl Default for TokenSelection {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            mode: SelectionMode::Remove,
        }
    }
}

impl Filter<&str> for TokenSelection {
    fn detect(&self, token: &str) -> bool {
        match self.mode {
            SelectionMode::Keep => self.matches(token),
            SelectionMode::Remove => !self.matches(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::filtering::Filter;

    use super::TokenSelection;

    #[test]
    fn remove_non_letter_tags() {
        // drop tokens whose tag holds no letter
        let sel = TokenSelection::remove(&["_[^a-z]+$"]).unwrap();
        assert!(sel.detect("愉快_va"));
        assert!(sel.detect("愉快_VA"));
        assert!(!sel.detect("._."));
    }

    #[test]
    fn case_insensitive() {
        let sel = TokenSelection::remove(&["_pu$"]).unwrap();
        assert!(!sel.detect("。_PU"));

        let sel = TokenSelection::keep(&["^RUST"]).unwrap();
        assert!(sel.detect("rustacean"));
        assert!(!sel.detect("crust"));
    }

    #[test]
    fn default_keeps_everything() {
        assert!(TokenSelection::default().detect("anything"));
    }

    #[test]
    fn invalid_pattern() {
        assert!(TokenSelection::remove(&["("]).is_err());
    }
}
