//! Implementation blocks for the store data structures.
//!
//! This module contains all the `impl` blocks that provide methods for the
//! store's data structures. Implementations are organized by the struct
//! they extend; the `PeerStore` facade is split by concern.

/// AddressFamily implementation: family detection from canonical IPs.
pub mod address_family;

/// InfoHash implementation: Display, FromStr, Serialize, Deserialize.
pub mod info_hash;

/// Serde string visitor for InfoHash.
pub mod info_hash_visitor;

/// PeerId implementation: Display, FromStr, Serialize, Deserialize.
pub mod peer_id;

/// Serde string visitor for PeerId.
pub mod peer_id_visitor;

/// Peer implementation: construction helpers for front-ends and tests.
pub mod peer;

/// ResponsePeer implementation: projection from packed records.
pub mod response_peer;

/// PeerRecord implementation: packed field accessors and IP normalization.
pub mod peer_record;

/// PeerList implementation: buckets, upsert/remove, sampling and GC.
pub mod peer_list;

/// Swarm implementation: per-family list access and counters.
pub mod swarm;

/// Shard implementation: aggregate counter maintenance.
pub mod shard;

/// SwarmSharding implementation: shard selection and the swarm counter.
pub mod swarm_sharding;

/// PeerStore core implementation: construction, counters and shutdown.
pub mod peer_store;

/// PeerStore peer operations (put, delete, graduate, announce, scrape).
pub mod peer_store_peers;

/// PeerStore garbage collection (sweeps and the background task).
pub mod peer_store_cleanup;

/// Xorshift128Plus implementation: stepping and seeding.
pub mod xorshift128;

/// Display and Error impls for store errors.
pub mod peer_store_error;
