//! Configuration data structures.
//!
//! This module contains the struct definitions for configuration options.
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Core store settings (shard count, intervals, lifetimes).
pub mod tracker_config;
