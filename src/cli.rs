//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;
use udcorpus::io::OutputFormat;
use udcorpus::matrix::DEFAULT_GROUP_PATTERN;
use udcorpus::pipelines::TokenOptions;
use udcorpus::stats::Measure;
use udcorpus::tokens::{AdapterOptions, TagField};

#[derive(Debug, StructOpt)]
#[structopt(name = "udcorpus", about = "corpus annotation and statistics tool.")]
/// Holds every command that is callable by the `udcorpus` command.
pub enum Udcorpus {
    #[structopt(about = "Annotate a corpus")]
    Annotate(Annotate),
    #[structopt(about = "Convert CoNLL-U parser output into a token table")]
    ImportConllu(ImportConllu),
    #[structopt(about = "Keyness of a target group against a reference group")]
    Keyness(Keyness),
    #[structopt(about = "Collocates of a node term")]
    Collocates(Collocates),
    #[structopt(about = "Frequency table")]
    Frequency(Frequency),
}

/// Parse a single-byte delimiter.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        s if s.len() == 1 => Ok(s.as_bytes()[0]),
        s => Err(format!("delimiter must be a single byte, got {s:?}")),
    }
}

fn parse_separator(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("separator must be a single character, got {s:?}")),
    }
}

#[derive(Debug, StructOpt)]
/// Annotate command and parameters.
///
/// ```sh
/// USAGE:
///     udcorpus annotate [FLAGS] [OPTIONS] <src> <model> <dst>
///
/// FLAGS:
///         --conllu    write CoNLL-U instead of a delimited token table
///
/// OPTIONS:
///     -n, --sample <sample>            documents to sample per type. Default is the whole corpus.
///         --seed <seed>                sampling seed [default: 123]
///     -c, --chunk-size <chunk-size>    documents per chunk [default: 10]
///     -w, --workers <workers>          number of worker threads [default: 4]
///     -d, --delimiter <delimiter>      field delimiter [default: ,]
/// ```
pub struct Annotate {
    #[structopt(parse(from_os_str), help = "corpus file (type and text columns)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "lexicon model file")]
    pub model: PathBuf,
    #[structopt(parse(from_os_str), help = "token table destination")]
    pub dst: PathBuf,
    #[structopt(
        short = "n",
        long = "sample",
        help = "documents to sample per type. Default is the whole corpus."
    )]
    pub sample: Option<usize>,
    #[structopt(long = "seed", help = "sampling seed", default_value = "123")]
    pub seed: u64,
    #[structopt(
        short = "c",
        long = "chunk-size",
        help = "documents per chunk",
        default_value = "10"
    )]
    pub chunk_size: usize,
    #[structopt(
        short = "w",
        long = "workers",
        help = "number of worker threads",
        default_value = "4"
    )]
    pub workers: usize,
    #[structopt(
        short = "d",
        long = "delimiter",
        help = "field delimiter",
        default_value = ",",
        parse(try_from_str = parse_delimiter)
    )]
    pub delimiter: u8,
    #[structopt(long = "conllu", help = "write CoNLL-U instead of a delimited token table")]
    pub conllu: bool,
}

#[derive(Debug, StructOpt)]
pub struct ImportConllu {
    #[structopt(parse(from_os_str), help = "CoNLL-U file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "token table destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Token shaping parameters shared by analysis commands.
pub struct Tokens {
    #[structopt(
        long = "tag",
        help = "tag fused to tokens: none, upos or xpos",
        default_value = "none"
    )]
    pub tag: TagField,
    #[structopt(
        long = "separator",
        help = "token/tag separator",
        default_value = "_",
        parse(try_from_str = parse_separator)
    )]
    pub separator: char,
    #[structopt(long = "lowercase", help = "lowercase tokens")]
    pub lowercase: bool,
    #[structopt(long = "lemma", help = "use lemmas instead of surface forms")]
    pub lemma: bool,
    #[structopt(
        long = "keep",
        help = "keep tokens matching this pattern (case-insensitive, repeatable)"
    )]
    pub keep: Vec<String>,
    #[structopt(
        long = "remove",
        help = "remove tokens matching this pattern (case-insensitive, repeatable)"
    )]
    pub remove: Vec<String>,
    #[structopt(
        short = "d",
        long = "delimiter",
        help = "token table delimiter",
        default_value = ",",
        parse(try_from_str = parse_delimiter)
    )]
    pub delimiter: u8,
}

impl From<&Tokens> for TokenOptions {
    fn from(t: &Tokens) -> Self {
        TokenOptions {
            adapter: AdapterOptions {
                tag: t.tag,
                separator: t.separator,
                lowercase: t.lowercase,
                use_lemma: t.lemma,
            },
            keep: t.keep.clone(),
            remove: t.remove.clone(),
            delimiter: Some(t.delimiter),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Output parameters shared by analysis commands.
pub struct Output {
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        help = "destination file. Default is stdout."
    )]
    pub dst: Option<PathBuf>,
    #[structopt(
        short = "f",
        long = "format",
        help = "output format: csv or json",
        default_value = "csv"
    )]
    pub format: OutputFormat,
}

#[derive(Debug, StructOpt)]
pub struct Keyness {
    #[structopt(parse(from_os_str), help = "token table")]
    pub src: PathBuf,
    #[structopt(help = "target group")]
    pub target: String,
    #[structopt(help = "reference group")]
    pub reference: String,
    #[structopt(
        long = "group-pattern",
        help = "pattern extracting the group from document ids",
        default_value = DEFAULT_GROUP_PATTERN
    )]
    pub group_pattern: String,
    #[structopt(
        long = "min-freq",
        help = "drop terms occurring less than this in each group",
        default_value = "1"
    )]
    pub min_freq: u64,
    #[structopt(
        long = "measure",
        help = "significance measure: ll or chi2",
        default_value = "ll"
    )]
    pub measure: Measure,
    #[structopt(flatten)]
    pub tokens: Tokens,
    #[structopt(flatten)]
    pub output: Output,
}

#[derive(Debug, StructOpt)]
pub struct Collocates {
    #[structopt(parse(from_os_str), help = "token table")]
    pub src: PathBuf,
    #[structopt(help = "node term (fused with its tag if --tag is used)")]
    pub node: String,
    #[structopt(long = "window", help = "tokens on each side of the node", default_value = "5")]
    pub window: usize,
    #[structopt(
        long = "min-freq",
        help = "minimum number of co-occurrences",
        default_value = "1"
    )]
    pub min_freq: u64,
    #[structopt(flatten)]
    pub tokens: Tokens,
    #[structopt(flatten)]
    pub output: Output,
}

#[derive(Debug, StructOpt)]
pub struct Frequency {
    #[structopt(parse(from_os_str), help = "token table")]
    pub src: PathBuf,
    #[structopt(long = "group", help = "restrict to a group")]
    pub group: Option<String>,
    #[structopt(
        long = "group-pattern",
        help = "pattern extracting the group from document ids",
        default_value = DEFAULT_GROUP_PATTERN
    )]
    pub group_pattern: String,
    #[structopt(
        long = "min-freq",
        help = "drop terms occurring less than this",
        default_value = "1"
    )]
    pub min_freq: u64,
    #[structopt(flatten)]
    pub tokens: Tokens,
    #[structopt(flatten)]
    pub output: Output,
}
