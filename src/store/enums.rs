//! Enumerations for store operations.
//!
//! This module contains enum definitions for the store's discriminators and
//! error values.

/// Address family of a stored peer (IPv4 or IPv6).
///
/// Each swarm keeps a separate peer list per family; announces and scrapes
/// target one family at a time.
pub mod address_family;

/// Peer role flag bits (seeder or leecher).
pub mod peer_flag;

/// Errors surfaced by the store facade.
pub mod peer_store_error;
