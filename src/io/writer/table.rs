//! Statistics table writer.
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use log::info;
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    /// one JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(Error::Custom(format!(
                "unknown output format {other:?} (expected csv or json)"
            ))),
        }
    }
}

/// Writes serializable rows in a given [OutputFormat].
pub struct TableWriter {
    format: OutputFormat,
}

impl TableWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn to_writer<W: Write, T: Serialize>(&self, mut writer: W, rows: &[T]) -> Result<(), Error> {
        match self.format {
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(writer);
                for row in rows {
                    wtr.serialize(row)?;
                }
                wtr.flush()?;
            }
            OutputFormat::Json => {
                for row in rows {
                    serde_json::to_writer(&mut writer, row)?;
                    writer.write_all(b"\n")?;
                }
                writer.flush()?;
            }
        }
        Ok(())
    }

    /// Write rows to `path`, or to stdout if there is no path.
    pub fn write<T: Serialize>(&self, path: Option<&Path>, rows: &[T]) -> Result<(), Error> {
        match path {
            Some(path) => {
                info!("writing {} rows to {:?}", rows.len(), path);
                self.to_writer(crate::io::create(path)?, rows)
            }
            None => self.to_writer(std::io::stdout().lock(), rows),
        }
    }
}
