//! # udcorpus
//!
//! Annotates labelled corpora and computes keyness, collocates and frequency tables over the annotations.
//!
//! ```sh
//! udcorpus 0.1.0
//! corpus annotation and statistics tool.
//!
//! USAGE:
//!     udcorpus <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     annotate         Annotate a corpus
//!     collocates       Collocates of a node term
//!     frequency        Frequency table
//!     help             Prints this message or the help of the given subcommand(s)
//!     import-conllu    Convert CoNLL-U parser output into a token table
//!     keyness          Keyness of a target group against a reference group
//! ```
//!
//! Logging is configured through `RUST_LOG` (for example `RUST_LOG=info`).
use structopt::StructOpt;
use udcorpus::error::Error;
use udcorpus::io::{read_conllu, TableWriter, TokenWriter};
use udcorpus::matrix::Grouping;
use udcorpus::pipelines::{
    AnnotateCorpus, CollocateAnalysis, FrequencyAnalysis, KeynessAnalysis, Pipeline, TokenFormat,
};
use udcorpus::stats::Window;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Udcorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Udcorpus::Annotate(a) => {
            let format = if a.conllu {
                TokenFormat::Conllu
            } else {
                TokenFormat::Csv
            };
            let p = AnnotateCorpus::new(
                a.src,
                a.model,
                a.dst,
                a.delimiter,
                a.sample,
                a.seed,
                a.chunk_size,
                a.workers,
                format,
            );
            p.run()?;
        }

        cli::Udcorpus::ImportConllu(i) => {
            let table = read_conllu(&i.src)?;
            TokenWriter::default().to_path(&i.dst, &table)?;
        }

        cli::Udcorpus::Keyness(k) => {
            let p = KeynessAnalysis {
                src: k.src,
                target: k.target,
                reference: k.reference,
                grouping: Grouping::from_pattern(&k.group_pattern)?,
                tokens: (&k.tokens).into(),
                min_freq: k.min_freq,
                measure: k.measure,
            };
            let rows = p.run()?;
            TableWriter::new(k.output.format).write(k.output.dst.as_deref(), &rows)?;
        }

        cli::Udcorpus::Collocates(c) => {
            let p = CollocateAnalysis {
                src: c.src,
                node: c.node,
                window: Window::symmetric(c.window),
                min_cooccurrences: c.min_freq,
                tokens: (&c.tokens).into(),
            };
            let rows = p.run()?;
            TableWriter::new(c.output.format).write(c.output.dst.as_deref(), &rows)?;
        }

        cli::Udcorpus::Frequency(f) => {
            let p = FrequencyAnalysis {
                src: f.src,
                group: f.group,
                grouping: Grouping::from_pattern(&f.group_pattern)?,
                tokens: (&f.tokens).into(),
                min_freq: f.min_freq,
            };
            let rows = p.run()?;
            TableWriter::new(f.output.format).write(f.output.dst.as_deref(), &rows)?;
        }
    };
    Ok(())
}
