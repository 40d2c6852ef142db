//! Configuration management module.
//!
//! This module handles loading, parsing and validating the store
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: Verbosity of the `log` facade output
//! - **tracker_config**: Core store settings (shard count, GC interval,
//!   peer lifetime)
//!
//! # Features
//!
//! - TOML file parsing with typed errors
//! - Default value generation
//! - Validation of the store invariants (non-zero GC interval and peer
//!   lifetime, shard count bit normalization)
//!
//! # Example
//!
//! ```rust,ignore
//! use optmem_peerstore::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//! ```

/// Configuration enumerations (validation and parse errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
