use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::store::structs::shard::Shard;

/// Sharded swarm storage.
///
/// The shard for an info hash is selected by the top `shard_count_bits`
/// bits of its first four bytes, read as a big-endian integer. Since
/// BitTorrent info hashes are SHA-1 output, load spreads near-uniformly.
///
/// `num_swarms` is updated with a single atomic add whenever a mutation
/// creates or deletes a swarm, right after the shard lock is released, so
/// reading it never blocks.
#[derive(Debug)]
pub struct SwarmSharding {
    pub shards: Vec<Arc<RwLock<Shard>>>,
    pub num_swarms: AtomicU64,
    pub shard_count_shift: u32,
}
