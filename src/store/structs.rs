//! Data structures for the peer store.
//!
//! This module contains all the struct definitions used by the store,
//! from the identifier newtypes down to the packed record and the sharded
//! container.

/// 20-byte torrent info hash identifier.
///
/// A wrapper around `[u8; 20]` that implements common traits for use as
/// a map key and for serialization.
pub mod info_hash;

/// 20-byte peer identifier.
///
/// A wrapper around `[u8; 20]` representing the peer ID sent by clients.
/// The store never persists it; it only feeds the announce sampler's
/// entropy derivation.
pub mod peer_id;

/// Wire-level peer endpoint handed in by front-ends.
///
/// Carries the raw 4- or 16-byte IP, the port and the optional peer ID.
pub mod peer;

/// Peer endpoint returned to callers.
///
/// IPv4 records are projected back to their 4-byte form.
pub mod response_peer;

/// Per-family peer enumerations returned by the get operations.
pub mod family_peers;

/// Swarm statistics for a scrape response.
pub mod scrape_stats;

/// 21-byte packed peer record.
///
/// The in-memory representation of a peer: 16-byte IP, big-endian port,
/// role flag and truncated 16-bit timestamp.
pub mod peer_record;

/// Per-swarm, per-family bucket array.
///
/// Owns the sorted buckets together with the peer, seeder and download
/// counters.
pub mod peer_list;

/// A single swarm: up to two peer lists, one per address family.
pub mod swarm;

/// One shard of the info-hash keyspace with its aggregate counters.
pub mod shard;

/// Sharded swarm storage.
///
/// Distributes swarms over `2^shard_count_bits` independently locked shards
/// and owns the global swarm counter.
pub mod swarm_sharding;

/// The peer store facade.
///
/// Dispatches operations to shards and runs the garbage collection task.
pub mod peer_store;

/// Small allocation-free generator for announce sampling.
pub mod xorshift128;
