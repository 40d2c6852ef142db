use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    /// Number of top info-hash bits used for shard selection.
    ///
    /// For example:
    /// shard_count_bits = 1, shards = 2
    /// shard_count_bits = 2, shards = 4
    /// shard_count_bits = 10, shards = 1024
    ///
    /// Every shard covers an equal slice of the info-hash keyspace.
    /// More shards mean more base memory but less lock contention, as each
    /// shard is locked independently. A value of 0 selects the default of
    /// 10 bits (1024 shards).
    pub shard_count_bits: u32,

    /// Interval between garbage collection sweeps, in seconds.
    pub gc_interval: u64,

    /// Maximum time a peer may go without announcing before it is evicted,
    /// in seconds. Peer timestamps are truncated to 16 bits, so lifetimes
    /// approaching 32768 seconds are unsupported.
    pub peer_lifetime: u64,
}
