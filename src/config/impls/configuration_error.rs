use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::MissingInterval => write!(f, "gc_interval must be larger than zero"),
            ConfigurationError::MissingLifetime => write!(f, "peer_lifetime must be larger than zero"),
            ConfigurationError::IoError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ConfigurationError {}
