//! Benchmark results output.
//!
//! The text format prints one line per measurement:
//! ```text
//! Vector time: 12ms
//! List time: 130ms
//! Preallocated Vector time: 37ms
//! ```
//! The csv format prints a header line and one row per measurement of
//! every repetition.

use crate::bench::{Measurement, Summary, Variant};
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::info;

mod table;
pub use table::{Record, Table, COLUMNS};

#[derive(Debug)]
pub enum ReportError {
    /// Record without a value for the named column.
    MissingField(String),
    /// Record with this number of fields instead of one per column.
    InvalidNumberOfFields(usize),
    IOError(io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::MissingField(name) => {
                write!(f, "Record is missing field: {}", name)
            }
            ReportError::InvalidNumberOfFields(n) => {
                write!(f, "Record has an invalid number of fields: {}", n)
            }
            ReportError::IOError(e) => write!(f, "Cannot write report: {}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::IOError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        ReportError::IOError(e)
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<Label> time: <millis>ms` lines.
    Text,
    /// Separated values with a header line.
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "csv"];
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            s => Err(ConfigError::ConfigFormatError(format!(
                "Invalid output format: {}. Expected one of: {}",
                s,
                OutputFormat::NAMES.join(", ")
            ))),
        }
    }
}

/// Where results are printed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "filename")]
pub enum OutputKind {
    /// Output is printed to stdout.
    Stdout,
    /// Output is appended to a file of the given name.
    File(String),
}

impl Default for OutputKind {
    fn default() -> Self {
        OutputKind::Stdout
    }
}

impl OutputKind {
    /// Open the output destination. Files are created if needed and
    /// appended to.
    pub fn open(&self) -> Result<Box<dyn Write>, io::Error> {
        match self {
            OutputKind::Stdout => Ok(Box::new(io::stdout())),
            OutputKind::File(filename) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(filename)?;
                Ok(Box::new(file))
            }
        }
    }
}

/// Text line of one measurement.
pub fn line(m: &Measurement) -> String {
    format!("{} time: {}ms", m.variant.label(), m.millis())
}

/// Writer of a [`Summary`] in a given [`OutputFormat`].
#[derive(Debug, Clone)]
pub struct Report {
    format: OutputFormat,
    separator: String,
}

impl Report {
    pub fn new(format: OutputFormat) -> Self {
        Report {
            format,
            separator: String::from(","),
        }
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = String::from(separator);
        self
    }

    /// Write `summary` to `output`.
    ///
    /// With the text format and several runs, the fastest measurement of
    /// each variant is printed and min/mean/max are logged.
    pub fn write<W: Write + ?Sized>(
        &self,
        output: &mut W,
        summary: &Summary,
    ) -> Result<(), ReportError> {
        match self.format {
            OutputFormat::Text => self.write_text(output, summary),
            OutputFormat::Csv => self.write_csv(output, summary),
        }
    }

    fn write_text<W: Write + ?Sized>(
        &self,
        output: &mut W,
        summary: &Summary,
    ) -> Result<(), ReportError> {
        let best = match summary.best() {
            Some(best) => best,
            None => return Ok(()),
        };
        if summary.len() > 1 {
            for variant in Variant::ALL {
                if let Some(stats) = summary.stats(variant) {
                    info!(
                        variant = variant.label(),
                        runs = summary.len(),
                        min_ms = stats.min.as_millis() as u64,
                        mean_ms = stats.mean.as_millis() as u64,
                        max_ms = stats.max.as_millis() as u64,
                        "repeated measurements"
                    );
                }
            }
        }
        for m in best.iter() {
            writeln!(output, "{}", line(m))?;
        }
        Ok(())
    }

    fn write_csv<W: Write + ?Sized>(
        &self,
        output: &mut W,
        summary: &Summary,
    ) -> Result<(), ReportError> {
        let mut table = Table::measurements();
        for (run, measurements) in summary.runs().iter().enumerate() {
            for m in measurements.iter() {
                table.push_measurement(run, m)?;
            }
        }
        table.write(output, self.separator.as_str())
    }
}
