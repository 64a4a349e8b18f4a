/*! Segmentation

Sentence and word segmentation following Unicode text segmentation rules (UAX #29).

UAX #29 word boundaries isolate every ideograph, so [words] regroups contiguous Han characters into runs,
which are then segmented by the lexicon.
!*/
use unicode_script::{Script, UnicodeScript};
use unicode_segmentation::UnicodeSegmentation;

/// A word-level segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// contiguous Han characters
    Han(&'a str),
    /// any other non-whitespace word-bound segment
    Other(&'a str),
}

fn is_han(segment: &str) -> bool {
    segment.chars().all(|c| c.script() == Script::Han)
}

/// Non-empty sentences of a text, surrounding whitespace removed.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split_sentence_bounds()
        .flat_map(|s| s.split('\n'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Word segments of a sentence, whitespace skipped and Han characters regrouped.
pub fn words(sentence: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    // byte range of the current Han run
    let mut han: Option<(usize, usize)> = None;

    for (start, word) in sentence.split_word_bound_indices() {
        let end = start + word.len();

        if is_han(word) {
            han = match han {
                Some((run_start, _)) => Some((run_start, end)),
                None => Some((start, end)),
            };
            continue;
        }

        if let Some((run_start, run_end)) = han.take() {
            segments.push(Segment::Han(&sentence[run_start..run_end]));
        }

        if !word.trim().is_empty() {
            segments.push(Segment::Other(word));
        }
    }

    if let Some((run_start, run_end)) = han {
        segments.push(Segment::Han(&sentence[run_start..run_end]));
    }

    segments
}
