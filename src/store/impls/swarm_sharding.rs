use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use byteorder::{BigEndian, ByteOrder};
use parking_lot::RwLock;

use crate::store::structs::info_hash::InfoHash;
use crate::store::structs::shard::Shard;
use crate::store::structs::swarm_sharding::SwarmSharding;

impl SwarmSharding {
    /// Builds `2^shard_count_bits` empty shards.
    ///
    /// `shard_count_bits` must already be normalized to `1..=16`; see
    /// `TrackerConfig::shard_bits`.
    pub fn new(shard_count_bits: u32) -> SwarmSharding {
        let shard_count = 1usize << shard_count_bits;
        let mut shards = Vec::with_capacity(shard_count);
        for _ in 0..shard_count {
            shards.push(Arc::new(RwLock::new(Shard::new())));
        }

        SwarmSharding {
            shards,
            num_swarms: AtomicU64::new(0),
            shard_count_shift: 32 - shard_count_bits,
        }
    }

    /// The shard index for an info hash: the top bits of its first four
    /// bytes, read big-endian.
    pub fn shard_index(&self, info_hash: &InfoHash) -> usize {
        (BigEndian::read_u32(&info_hash.0[..4]) >> self.shard_count_shift) as usize
    }

    pub fn get_shard(&self, index: usize) -> Arc<RwLock<Shard>> {
        self.shards[index].clone()
    }

    pub fn shard_for(&self, info_hash: &InfoHash) -> Arc<RwLock<Shard>> {
        self.get_shard(self.shard_index(info_hash))
    }

    pub fn len(&self) -> usize {
        self.shards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }

    /// Applies a swarm create/delete to the global counter.
    ///
    /// Call after releasing the shard lock that performed the change; the
    /// counter may momentarily trail the shard contents for concurrent
    /// readers, which is acceptable for a monitoring signal.
    pub fn add_swarms(&self, delta: i64) {
        if delta >= 0 {
            self.num_swarms.fetch_add(delta as u64, Ordering::Relaxed);
        } else {
            self.num_swarms.fetch_sub(delta.unsigned_abs(), Ordering::Relaxed);
        }
    }

    pub fn num_swarms(&self) -> u64 {
        self.num_swarms.load(Ordering::Relaxed)
    }
}
