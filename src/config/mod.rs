//! Benchmark settings read from a configuration file.
//!
//! Configuration files describe a benchmark run using the
//! [`toml`](https://toml.io/en/) format. Every field is optional and
//! falls back to the value of [`BenchConfig::default()`].
//! ```
//! use midbench::config::BenchConfig;
//! use midbench::bench::PreallocatedMode;
//! use midbench::report::{OutputFormat, OutputKind};
//!
//! let config: BenchConfig = "
//! count = 2000
//! preallocated = 'reserved'
//! repeat = 5
//! format = 'csv'
//! separator = ';'
//! output = { kind = 'File', filename = 'results.csv' }
//! ".parse().unwrap();
//!
//! assert_eq!(config.count, 2000);
//! assert_eq!(config.preallocated, PreallocatedMode::Reserved);
//! assert_eq!(config.format, OutputFormat::Csv);
//! assert_eq!(config.output, OutputKind::File(String::from("results.csv")));
//! ```

#[allow(clippy::module_inception)]
mod config;
pub use config::BenchConfig;
mod error;
pub use error::ConfigError;
