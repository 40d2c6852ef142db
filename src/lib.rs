//! # Optmem Peer Store
//!
//! A memory-optimized, in-memory peer index for BitTorrent trackers.
//!
//! ## Overview
//!
//! This crate stores, for each torrent (keyed by its 20-byte info hash), the
//! set of peers currently participating in the swarm. It is built for
//! high-rate announce traffic on a single node while keeping the per-peer and
//! per-swarm memory footprint as small as possible.
//!
//! ## Design
//!
//! - **Byte-packed peers**: each peer is a 21-byte record (16-byte IP,
//!   big-endian port, role flag, truncated 16-bit wall-clock timestamp).
//!   Peer IDs are intentionally not stored.
//! - **Sharded keyspace**: swarms are distributed over a configurable number
//!   of shards selected by the top bits of the info hash. Each shard is
//!   guarded by its own reader/writer lock.
//! - **Bucketed peer lists**: within a swarm, each address family keeps its
//!   peers in hash-assigned, sorted buckets with binary-search insert and
//!   delete, rebalanced as the swarm grows and shrinks.
//! - **Cheap sampling**: announce responses are drawn with a request-seeded
//!   xorshift generator, allocation-free and under a read lock only.
//! - **Garbage collection**: a background task periodically evicts peers
//!   that have stopped announcing, reclaiming empty swarms.
//!
//! The crate is a pure library. Front-ends (HTTP/UDP trackers) decode the
//! wire formats and hand already-parsed info hashes and peers to the store;
//! the store performs no I/O besides logging.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use optmem_peerstore::config::structs::configuration::Configuration;
//! use optmem_peerstore::store::structs::peer_store::PeerStore;
//!
//! let config = Arc::new(Configuration::default());
//! let store = Arc::new(PeerStore::new(config)?);
//! store.spawn_cleanup();
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Shared helpers (hex formatting, timestamps, logging setup)
//! - [`config`] - Configuration loading, validation and defaults
//! - [`store`] - The peer store core (records, peer lists, shards, facade)

/// Common utilities shared across modules.
///
/// Contains hex conversion helpers, wall-clock timestamp helpers and the
/// logging setup built on `fern`.
pub mod common;

/// Configuration management module.
///
/// Handles TOML parsing, default generation and validation of the few
/// settings the store reads (shard count, GC interval, peer lifetime).
pub mod config;

/// Core peer store module.
///
/// Contains the packed peer record, the bucketed per-swarm peer lists, the
/// sharded swarm index and the `PeerStore` facade with its GC task.
pub mod store;
