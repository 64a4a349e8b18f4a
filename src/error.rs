//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Regex(regex::Error),
    Serde(serde_json::Error),
    ThreadPool(rayon::ThreadPoolBuildError),
    /// a label holds fewer documents than requested by the sampler.
    Sample {
        label: String,
        available: usize,
        requested: usize,
    },
    /// the fusion separator occurs in a token form or tag.
    Separator {
        separator: char,
        value: String,
    },
    /// a table does not follow the expected schema (missing column, bad head reference...)
    Schema(String),
    /// the annotation model could not be loaded.
    Model(String),
    /// a document could not be annotated.
    Annotation {
        doc_id: String,
        reason: String,
    },
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Regex(e) => write!(f, "invalid pattern: {e}"),
            Error::Serde(e) => write!(f, "serialization error: {e}"),
            Error::ThreadPool(e) => write!(f, "could not build worker pool: {e}"),
            Error::Sample {
                label,
                available,
                requested,
            } => write!(
                f,
                "cannot sample {requested} documents of type {label:?}: only {available} available"
            ),
            Error::Separator { separator, value } => {
                write!(f, "separator {separator:?} found in {value:?}")
            }
            Error::Schema(s) => write!(f, "schema error: {s}"),
            Error::Model(s) => write!(f, "model error: {s}"),
            Error::Annotation { doc_id, reason } => {
                write!(f, "could not annotate {doc_id}: {reason}")
            }
            Error::Custom(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::Regex(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Error {
        Error::ThreadPool(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
