/*! Lexicon model

A tab-separated lexicon file drives segmentation and tagging:

```text
# form	lemma	upos	xpos
祝	祝	VERB	VV
一天	一天	NOUN	NT
过得	过	VERB	VV
```

- Han runs are segmented by forward maximum matching against the lexicon, unknown characters become single-character tokens.
- Tokens are tagged from the lexicon, punctuation and numbers are recognized, anything else is tagged `X`.
- Every sentence gets a baseline dependency tree: the first verb (or the first non-punctuation token) is the root,
  every other token is attached to it.
!*/
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::corpus::Document;
use crate::error::Error;
use crate::tokens::{TokenRecord, TokenTable};

use super::segment::{sentences, words, Segment};
use super::{Annotate, ModelLoader};

/// Default longest lexicon entry considered by the segmenter, in characters.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 6;

const PUNCT: &str = "PUNCT";
const NUM: &str = "NUM";
const UNKNOWN: &str = "X";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
}

/// Lexicon-driven segmenter, tagger and baseline parser.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    max_word_length: usize,
}

impl Lexicon {
    pub fn new(entries: HashMap<String, LexiconEntry>, max_word_length: usize) -> Self {
        Self {
            entries,
            max_word_length: max_word_length.max(1),
        }
    }

    /// Parse a lexicon file.
    ///
    /// Blank lines and lines starting with `#` are skipped, other lines must hold 4 tab-separated fields.
    /// When a form is listed twice, the first entry is kept.
    pub fn from_reader<R: Read>(reader: R, max_word_length: usize) -> Result<Self, Error> {
        let mut entries = HashMap::new();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 4 || fields[0].is_empty() {
                return Err(Error::Model(format!(
                    "lexicon line {}: expected form, lemma, upos and xpos separated by tabs",
                    idx + 1
                )));
            }

            let entry = LexiconEntry {
                lemma: fields[1].to_string(),
                upos: fields[2].to_string(),
                xpos: fields[3].to_string(),
            };

            if entries.contains_key(fields[0]) {
                debug!("duplicate lexicon entry {:?} ignored", fields[0]);
                continue;
            }
            entries.insert(fields[0].to_string(), entry);
        }

        Ok(Self::new(entries, max_word_length))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, form: &str) -> Option<&LexiconEntry> {
        self.entries
            .get(form)
            .or_else(|| self.entries.get(&form.to_lowercase()))
    }

    /// Forward maximum matching over a run of Han characters.
    fn segment_han<'a>(&self, run: &'a str, tokens: &mut Vec<&'a str>) {
        let boundaries: Vec<usize> = run
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(run.len()))
            .collect();

        let nb_chars = boundaries.len() - 1;
        let mut start = 0;
        while start < nb_chars {
            let longest = self.max_word_length.min(nb_chars - start);
            let len = (1..=longest)
                .rev()
                .find(|len| {
                    self.entries
                        .contains_key(&run[boundaries[start]..boundaries[start + len]])
                })
                .unwrap_or(1);

            tokens.push(&run[boundaries[start]..boundaries[start + len]]);
            start += len;
        }
    }

    /// Segment a sentence into tokens.
    pub fn tokenize<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        for segment in words(sentence) {
            match segment {
                Segment::Han(run) => self.segment_han(run, &mut tokens),
                Segment::Other(word) => tokens.push(word),
            }
        }
        tokens
    }

    fn tag(&self, form: &str) -> LexiconEntry {
        if let Some(entry) = self.get(form) {
            return entry.clone();
        }

        let (upos, xpos) = if form.chars().all(|c| !c.is_alphanumeric()) {
            (PUNCT, "PU")
        } else if form.chars().all(|c| c.is_numeric() || c == '.' || c == ',') {
            (NUM, "CD")
        } else {
            (UNKNOWN, UNKNOWN)
        };

        LexiconEntry {
            lemma: form.to_string(),
            upos: upos.to_string(),
            xpos: xpos.to_string(),
        }
    }

    /// Position (0-based) of the sentence root.
    fn root(tags: &[LexiconEntry]) -> usize {
        tags.iter()
            .position(|t| t.upos == "VERB")
            .or_else(|| tags.iter().position(|t| t.upos != PUNCT))
            .unwrap_or(0)
    }

    fn annotate_sentence(&self, doc_id: &str, sentence_id: u32, sentence: &str) -> Vec<TokenRecord> {
        let tokens = self.tokenize(sentence);
        let tags: Vec<LexiconEntry> = tokens.iter().map(|t| self.tag(t)).collect();
        let root = Self::root(&tags);

        tokens
            .into_iter()
            .zip(tags)
            .enumerate()
            .map(|(idx, (form, tag))| {
                let (head, dep_rel) = if idx == root {
                    (0, "root")
                } else if tag.upos == PUNCT {
                    (root as u32 + 1, "punct")
                } else {
                    (root as u32 + 1, "dep")
                };

                TokenRecord {
                    doc_id: doc_id.to_string(),
                    sentence_id,
                    token_id: idx as u32 + 1,
                    token: form.to_string(),
                    lemma: tag.lemma,
                    upos: tag.upos,
                    xpos: tag.xpos,
                    head_token_id: head,
                    dep_rel: dep_rel.to_string(),
                }
            })
            .collect()
    }
}

impl Annotate for Lexicon {
    fn annotate(&self, doc: &Document) -> Result<TokenTable, Error> {
        let mut records = Vec::new();
        let mut sentence_id = 0;

        for sentence in sentences(doc.text()) {
            let annotated = self.annotate_sentence(doc.id(), sentence_id + 1, sentence);
            if annotated.is_empty() {
                continue;
            }
            sentence_id += 1;
            records.extend(annotated);
        }

        if records.is_empty() {
            warn!("[{}] no tokens", doc.id());
        }

        Ok(TokenTable::new(records))
    }
}

/// Lexicon loader.
///
/// Each call to [ModelLoader::load] reads the lexicon file again.
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    path: Option<PathBuf>,
    max_word_length: usize,
}

impl LexiconBuilder {
    pub fn path(&mut self, path: &Path) -> &mut Self {
        self.path = Some(path.to_path_buf());
        self
    }

    pub fn max_word_length(&mut self, max_word_length: usize) -> &mut Self {
        self.max_word_length = max_word_length;
        self
    }

    pub fn build(&self) -> Result<Lexicon, Error> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| Error::Model("No lexicon path provided".to_string()))?;

        let file = crate::io::open(path)
            .map_err(|e| Error::Model(format!("could not open lexicon {path:?}: {e}")))?;
        let lexicon = Lexicon::from_reader(file, self.max_word_length)?;

        info!("loaded lexicon {:?} ({} entries)", path, lexicon.len());
        Ok(lexicon)
    }
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self {
            path: None,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

impl ModelLoader for LexiconBuilder {
    type Model = Lexicon;

    fn load(&self) -> Result<Lexicon, Error> {
        self.build()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use crate::annotators::{Annotate, ModelLoader};
    use crate::corpus::Document;

    use super::{Lexicon, LexiconBuilder};

    pub(crate) const LEXICON: &str = "# form\tlemma\tupos\txpos
祝\t祝\tVERB\tVV
你\t你\tPRON\tPN
一天\t一天\tNOUN\tNT
过得\t过\tVERB\tVV
过\t过\tVERB\tVV
愉快\t愉快\tADJ\tVA
今天\t今天\tNOUN\tNT
天气\t天气\tNOUN\tNN
很\t很\tADV\tAD
好\t好\tADJ\tVA
";

    pub(crate) fn lexicon() -> Lexicon {
        Lexicon::from_reader(LEXICON.as_bytes(), 6).unwrap()
    }

    #[test]
    fn tokenize_max_match() {
        let lex = lexicon();
        assert_eq!(
            lex.tokenize("祝你一天过得愉快."),
            vec!["祝", "你", "一天", "过得", "愉快", "."]
        );
        // unknown characters are kept one by one
        assert_eq!(lex.tokenize("今天天气龘好"), vec!["今天", "天气", "龘", "好"]);
    }

    #[test]
    fn annotate_reconstitutes_text() {
        let doc = Document::new("blog1".into(), "blog".into(), "祝你一天过得愉快.".into());
        let table = lexicon().annotate(&doc).unwrap();

        assert_eq!(
            table.concatenated_forms("blog1"),
            Some("祝你一天过得愉快.".to_string())
        );
        assert!(table.validate().is_ok());

        let records = table.records();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].dep_rel, "root");
        assert_eq!(records[0].head_token_id, 0);
        assert_eq!(records[3].lemma, "过");
        assert_eq!(records[5].upos, "PUNCT");
        assert_eq!(records[5].dep_rel, "punct");
        assert!(records.iter().skip(1).all(|r| r.head_token_id == 1));
    }

    #[test]
    fn sentence_ids() {
        let doc = Document::new("news1".into(), "news".into(), "今天天气很好。你好！\n  ".into());
        let table = lexicon().annotate(&doc).unwrap();
        let sentences: Vec<u32> = table.records().iter().map(|r| r.sentence_id).collect();
        assert_eq!(sentences, vec![1, 1, 1, 1, 1, 2, 2, 2]);
        // no verb in the second sentence: the first token is the root
        assert_eq!(table.records()[5].head_token_id, 0);
    }

    #[test]
    fn unknown_words_are_tagged_x() {
        let doc = Document::new("news1".into(), "news".into(), "龘很好。".into());
        let table = lexicon().annotate(&doc).unwrap();

        let first = &table.records()[0];
        assert_eq!(first.token, "龘");
        assert_eq!((first.upos.as_str(), first.xpos.as_str()), ("X", "X"));
    }

    #[test]
    fn malformed_lexicon() {
        assert!(Lexicon::from_reader("祝\tVERB\n".as_bytes(), 6).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zh.lex");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(LEXICON.as_bytes())
            .unwrap();

        let lex = LexiconBuilder::default().path(&path).load().unwrap();
        assert_eq!(lex.len(), 10);
    }

    #[test]
    fn missing_model() {
        assert!(LexiconBuilder::default().load().is_err());
        assert!(LexiconBuilder::default()
            .path(std::path::Path::new("does/not/exist.lex"))
            .load()
            .is_err());
    }
}
