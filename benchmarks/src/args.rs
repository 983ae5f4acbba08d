use clap::{Arg, ArgMatches, Command};
use midbench::config::{BenchConfig, ConfigError};
use midbench::report::OutputKind;
use std::str::FromStr;

pub struct MidbenchArgs {
    pub config: BenchConfig,
    pub verbosity: u64,
}

fn parse<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match matches.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid format for arg '{}': {}",
                name, e
            ))
        }),
    }
}

impl MidbenchArgs {
    pub fn app(app_name: &str) -> Command<'static> {
        let count = Arg::new("count")
            .long("count")
            .short('n')
            .takes_value(true)
            .help("Number of midpoint insertions per container. Defaults to 10000.");
        let preallocated = Arg::new("preallocated")
            .long("preallocated")
            .takes_value(true)
            .help("Container of the preallocated vector measurement. 'reuse' runs a second round of insertions in the already filled vector of the first measurement. 'reserved' runs in a fresh empty vector with reserved capacity. Defaults to 'reuse'.");
        let repeat = Arg::new("repeat")
            .long("repeat")
            .short('r')
            .takes_value(true)
            .help("Number of times the three measurements are run. With the text format, the fastest time of each container is printed.");
        let format = Arg::new("format")
            .long("format")
            .short('f')
            .takes_value(true)
            .help("Output format: 'text' or 'csv'. Defaults to 'text'.");
        let file = Arg::new("output-file")
            .short('o')
            .takes_value(true)
            .help("File where to append results. If not provided, results are written to stdout.");
        let config = Arg::new("config")
            .long("config")
            .short('c')
            .takes_value(true)
            .help("Toml configuration file. Command line arguments override its values.");
        let verbose = Arg::new("verbose")
            .short('v')
            .multiple_occurrences(true)
            .help("Raise the log level on stderr. Can be repeated.");

        Command::new(app_name)
            .version(clap::crate_version!())
            .about("Measure the time of repeated insertions in the middle of a vector and of a linked list.")
            .arg(count)
            .arg(preallocated)
            .arg(repeat)
            .arg(format)
            .arg(file)
            .arg(config)
            .arg(verbose)
    }

    /// Build the run configuration: the configuration file if any, then
    /// command line overrides.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let mut config = match matches.value_of("config") {
            Some(path) => BenchConfig::from_file(path)?,
            None => BenchConfig::default(),
        };

        if let Some(count) = parse(matches, "count")? {
            config.count = count;
        }
        if let Some(preallocated) = parse(matches, "preallocated")? {
            config.preallocated = preallocated;
        }
        if let Some(repeat) = parse(matches, "repeat")? {
            config.repeat = repeat;
        }
        if let Some(format) = parse(matches, "format")? {
            config.format = format;
        }
        if let Some(file) = matches.value_of("output-file") {
            config.output = OutputKind::File(String::from(file));
        }
        config.validate()?;

        Ok(MidbenchArgs {
            config,
            verbosity: matches.occurrences_of("verbose"),
        })
    }

    pub fn new(app_name: &str) -> Result<Self, ConfigError> {
        Self::from_matches(&Self::app(app_name).get_matches())
    }
}
