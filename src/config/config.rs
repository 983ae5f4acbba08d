use crate::bench::{PreallocatedMode, Suite, DEFAULT_COUNT};
use crate::config::ConfigError;
use crate::report::{OutputFormat, OutputKind, Report};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::str::FromStr;

/// Settings of a benchmark run.
///
/// The defaults reproduce the plain run: 10000 insertions, the
/// preallocated measurement reusing the first vector, a single
/// repetition and three text lines on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Number of insertions per measurement.
    pub count: usize,
    pub preallocated: PreallocatedMode,
    /// Number of times the whole suite is run.
    pub repeat: usize,
    pub format: OutputFormat,
    /// Column separator of the csv format.
    pub separator: String,
    pub output: OutputKind,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            count: DEFAULT_COUNT,
            preallocated: PreallocatedMode::default(),
            repeat: 1,
            format: OutputFormat::default(),
            separator: String::from(","),
            output: OutputKind::Stdout,
        }
    }
}

impl BenchConfig {
    /// Read a configuration file.
    pub fn from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, ConfigError> {
        let mut file = std::fs::File::open(&path)?;
        let mut s = String::new();
        file.read_to_string(&mut s)?;
        s.parse()
    }

    /// Check values that the toml format alone cannot reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeat == 0 {
            return Err(ConfigError::ConfigFormatError(String::from(
                "Invalid repeat: 0. The suite must run at least once.",
            )));
        }
        if self.separator.is_empty() {
            return Err(ConfigError::ConfigFormatError(String::from(
                "Invalid separator: the csv separator cannot be empty.",
            )));
        }
        Ok(())
    }

    pub fn suite(&self) -> Suite {
        Suite::new(self.count).with_preallocated(self.preallocated)
    }

    pub fn report(&self) -> Report {
        Report::new(self.format).with_separator(self.separator.as_str())
    }
}

impl FromStr for BenchConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: BenchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::BenchConfig;
    use crate::bench::{PreallocatedMode, DEFAULT_COUNT};
    use crate::config::ConfigError;
    use crate::report::{OutputFormat, OutputKind};
    use std::io::Write;

    #[test]
    fn test_empty_config() {
        let config: BenchConfig = "".parse().unwrap();
        assert_eq!(config, BenchConfig::default());
        assert_eq!(config.count, DEFAULT_COUNT);
        assert_eq!(config.preallocated, PreallocatedMode::Reuse);
        assert_eq!(config.repeat, 1);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.output, OutputKind::Stdout);
    }

    #[test]
    fn test_partial_config() {
        let config: BenchConfig =
            "count = 12\noutput = { kind = 'Stdout' }".parse().unwrap();
        assert_eq!(config.count, 12);
        assert_eq!(config.suite().count(), 12);
        assert_eq!(config.repeat, 1);
    }

    #[test]
    fn test_invalid_toml() {
        match "count = ".parse::<BenchConfig>() {
            Err(ConfigError::TomlFormatError(_)) => {}
            r => panic!("Unexpected result: {:?}", r),
        }
    }

    #[test]
    fn test_unknown_field() {
        assert!(matches!(
            "capacity = 10".parse::<BenchConfig>(),
            Err(ConfigError::TomlFormatError(_))
        ));
    }

    #[test]
    fn test_invalid_mode() {
        assert!(matches!(
            "preallocated = 'fresh'".parse::<BenchConfig>(),
            Err(ConfigError::TomlFormatError(_))
        ));
    }

    #[test]
    fn test_invalid_values() {
        let e = "repeat = 0".parse::<BenchConfig>().unwrap_err();
        assert!(matches!(e, ConfigError::ConfigFormatError(_)));
        assert!(e.to_string().contains("repeat"));
        assert!(matches!(
            "separator = ''".parse::<BenchConfig>(),
            Err(ConfigError::ConfigFormatError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "count = 3\nformat = 'csv'").unwrap();
        let config = BenchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.count, 3);
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            BenchConfig::from_file(path),
            Err(ConfigError::IOError(_))
        ));
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = BenchConfig {
            count: 7,
            preallocated: PreallocatedMode::Reserved,
            repeat: 2,
            format: OutputFormat::Csv,
            separator: String::from(";"),
            output: OutputKind::File(String::from("out.csv")),
        };
        let s = toml::to_string(&config).unwrap();
        assert_eq!(s.parse::<BenchConfig>().unwrap(), config);
    }
}
