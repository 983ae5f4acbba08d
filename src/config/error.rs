use std::fmt;
use std::io::Error as IOError;
use std::string::String;
use toml::de::Error as TomlDeError;

#[derive(Debug)]
pub enum ConfigError {
    TomlFormatError(TomlDeError),
    ConfigFormatError(String),
    IOError(IOError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TomlFormatError(e) => {
                write!(f, "Invalid toml configuration: {}", e)
            }
            ConfigError::ConfigFormatError(s) => f.write_str(s),
            ConfigError::IOError(e) => {
                write!(f, "Cannot read configuration: {}", e)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::TomlFormatError(e) => Some(e),
            ConfigError::ConfigFormatError(_) => None,
            ConfigError::IOError(e) => Some(e),
        }
    }
}

impl From<TomlDeError> for ConfigError {
    fn from(e: TomlDeError) -> Self {
        ConfigError::TomlFormatError(e)
    }
}

impl From<IOError> for ConfigError {
    fn from(e: IOError) -> Self {
        ConfigError::IOError(e)
    }
}
