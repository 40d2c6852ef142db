use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::store::structs::peer_store::PeerStore;
use crate::store::structs::swarm_sharding::SwarmSharding;

impl PeerStore {
    /// Builds a store from a validated configuration.
    ///
    /// The GC task is not started here; call
    /// [`spawn_cleanup`](PeerStore::spawn_cleanup) once a tokio runtime is
    /// available.
    pub fn new(config: Arc<Configuration>) -> Result<PeerStore, ConfigurationError> {
        config.validate()?;
        let sharding = SwarmSharding::new(config.tracker_config.shard_bits());

        Ok(PeerStore {
            config,
            sharding,
            closed: AtomicBool::new(false),
            shutdown: Notify::new(),
            cleanup_handle: Mutex::new(None),
        })
    }

    /// Panics when the store is used after shutdown. Calling into a stopped
    /// store is a caller bug, not a recoverable condition.
    pub(crate) fn assert_open(&self) {
        if self.closed.load(Ordering::SeqCst) {
            panic!("peer store accessed after shutdown");
        }
    }

    /// The number of swarms currently tracked. Runs in constant time.
    #[tracing::instrument(level = "debug")]
    pub fn num_swarms(&self) -> u64 {
        self.assert_open();
        self.sharding.num_swarms()
    }

    /// Fleet-wide (seeders, leechers) totals.
    ///
    /// Sums the per-shard aggregates, taking one read lock per shard in
    /// turn; the result mixes per-shard snapshots and may be observed
    /// mid-update by concurrent writers.
    #[tracing::instrument(level = "debug")]
    pub fn num_total_peers(&self) -> (u64, u64) {
        self.assert_open();

        let mut seeders: u64 = 0;
        let mut leechers: u64 = 0;
        for shard_lock in &self.sharding.shards {
            let shard = shard_lock.read();
            seeders += shard.num_seeders;
            leechers += shard.num_peers - shard.num_seeders;
        }

        (seeders, leechers)
    }

    /// Fleet-wide seeder total. Runs in linear time over the shards.
    #[tracing::instrument(level = "debug")]
    pub fn num_total_seeders(&self) -> u64 {
        self.num_total_peers().0
    }

    /// Fleet-wide leecher total. Runs in linear time over the shards.
    #[tracing::instrument(level = "debug")]
    pub fn num_total_leechers(&self) -> u64 {
        self.num_total_peers().1
    }

    /// Shuts the store down.
    ///
    /// Flips the closed flag, wakes the GC task and waits for it to drain.
    /// Every operation entering the store afterwards panics.
    #[tracing::instrument(level = "debug")]
    pub async fn stop(&self) {
        self.closed.store(true, Ordering::SeqCst);
        // notify_one stores a permit, so the GC task sees the shutdown even
        // when it is mid-sweep rather than parked on the signal
        self.shutdown.notify_one();

        let handle = self.cleanup_handle.lock().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}
