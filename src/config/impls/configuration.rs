use std::fs::File;
use std::io::Write;

use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::tracker_config::TrackerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            tracker_config: TrackerConfig {
                shard_count_bits: 10,
                gc_interval: 900,
                peer_lifetime: 2700,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IoError(e)),
            Ok(data) => match Self::load(data.as_slice()) {
                Ok(cfg) => Ok(cfg),
                Err(e) => Err(ConfigurationError::ParseError(e)),
            },
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => match file.write_all(data.as_ref()) {
                Ok(_) => Ok(()),
                Err(e) => Err(ConfigurationError::IoError(e)),
            },
            Err(e) => Err(ConfigurationError::IoError(e)),
        }
    }

    /// Checks the store invariants on the core settings.
    ///
    /// A zero `gc_interval` or `peer_lifetime` would disable eviction
    /// entirely and is rejected. `shard_count_bits` is not an error at any
    /// value; out-of-range values are normalized by
    /// [`TrackerConfig::shard_bits`].
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.tracker_config.gc_interval == 0 {
            return Err(ConfigurationError::MissingInterval);
        }
        if self.tracker_config.peer_lifetime == 0 {
            return Err(ConfigurationError::MissingLifetime);
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
