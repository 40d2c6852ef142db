//! Core peer store implementation.
//!
//! This module contains the memory-optimized peer index: the packed peer
//! record, the bucketed per-swarm peer lists, the sharded swarm map and the
//! `PeerStore` facade that front-ends talk to.
//!
//! # Architecture
//!
//! The store uses a sharded architecture for scalable peer storage:
//! - Swarms are distributed across `2^shard_count_bits` shards selected by
//!   the top bits of the info hash
//! - Each shard is protected by a `RwLock` for concurrent access
//! - Each swarm holds one peer list per address family; each list keeps its
//!   peers in sorted, hash-assigned buckets
//! - A global swarm counter is maintained atomically
//!
//! # Main Components
//!
//! - `PeerStore` - The store facade and GC task
//! - `SwarmSharding` - Sharded storage for swarms
//! - `InfoHash` - 20-byte torrent identifier
//! - `PeerRecord` - 21-byte packed peer representation
//! - `PeerList` - Per-family bucket array with sampling and GC
//!
//! # Example
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

/// Enumerations for store operations.
///
/// Contains enums for address families, peer roles and store errors.
pub mod enums;

/// Implementation blocks for store structs.
///
/// Contains the method implementations for all store-related structs
/// including the `PeerStore` facade, the sharding logic and the peer list
/// operations.
pub mod impls;

/// Data structures for store operations.
///
/// Contains struct definitions for identifiers, packed records, peer lists,
/// swarms, shards and result types.
pub mod structs;
