#[derive(Debug)]
pub enum ConfigurationError {
    /// The garbage collection interval is zero.
    MissingInterval,
    /// The peer lifetime is zero.
    MissingLifetime,
    IoError(std::io::Error),
    ParseError(toml::de::Error),
}
