//! Implementation blocks for configuration structures.

/// Configuration loading, saving, defaults and validation.
pub mod configuration;

/// Display and Error impls for configuration errors.
pub mod configuration_error;

/// Effective-value accessors for the core store settings.
pub mod tracker_config;
