use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use log::{debug, info};

use crate::common::common::{current_time, unix_time};
use crate::store::structs::peer_store::PeerStore;

impl PeerStore {
    /// Starts the background GC task on the current tokio runtime.
    ///
    /// The task wakes every `gc_interval` seconds, evicts peers older than
    /// `peer_lifetime` and exits promptly when
    /// [`stop`](PeerStore::stop) is called.
    pub fn spawn_cleanup(self: &Arc<Self>) {
        let store = Arc::clone(self);
        let handle = tokio::spawn(async move {
            store.cleanup_loop().await;
        });
        *self.cleanup_handle.lock() = Some(handle);
    }

    async fn cleanup_loop(self: Arc<Self>) {
        let gc_interval = Duration::from_secs(self.config.tracker_config.gc_interval);
        let peer_lifetime = Duration::from_secs(self.config.tracker_config.peer_lifetime);

        loop {
            if self.closed.load(Ordering::SeqCst) {
                debug!("[GC] task shutting down");
                break;
            }
            tokio::select! {
                _ = self.shutdown.notified() => {
                    debug!("[GC] task shutting down");
                    break;
                }
                _ = tokio::time::sleep(gc_interval) => {
                    let cutoff = SystemTime::now() - peer_lifetime;
                    info!("[GC] collecting stale peers, cutoff unix time {}", unix_time(cutoff));
                    self.sweep(cutoff).await;
                    info!("[GC] sweep finished");
                }
            }
        }
    }

    /// One full sweep, yielding between shards so announce and scrape
    /// traffic is not starved while the GC walks a large store.
    async fn sweep(&self, cutoff: SystemTime) {
        let (cutoff_time, max_diff) = gc_window(cutoff);
        for index in 0..self.sharding.len() {
            self.collect_shard(index, cutoff_time, max_diff);
            tokio::task::yield_now().await;
        }
    }

    /// Evicts every peer that last announced before `cutoff`.
    ///
    /// Emptied peer lists are unlinked from their swarm and swarms with no
    /// remaining family are removed from their shard.
    #[tracing::instrument(level = "debug")]
    pub fn collect_garbage(&self, cutoff: SystemTime) {
        self.assert_open();

        let (cutoff_time, max_diff) = gc_window(cutoff);
        debug!("[GC] running, internal cutoff: {cutoff_time}, max diff: {max_diff}");
        for index in 0..self.sharding.len() {
            self.collect_shard(index, cutoff_time, max_diff);
        }
    }

    fn collect_shard(&self, index: usize, cutoff_time: u16, max_diff: u16) {
        let shard_lock = self.sharding.get_shard(index);
        let mut swarms_delta: i64 = 0;
        {
            let mut shard = shard_lock.write();
            let mut removed_peers: u64 = 0;
            let mut removed_seeders: u64 = 0;

            shard.swarms.retain(|_, swarm| {
                for slot in [&mut swarm.peers4, &mut swarm.peers6] {
                    if let Some(list) = slot.as_mut() {
                        let peers_before = list.num_peers as u64;
                        let seeders_before = list.num_seeders as u64;
                        if list.collect_garbage(cutoff_time, max_diff) {
                            list.rebalance_buckets();
                        }
                        removed_peers += peers_before - list.num_peers as u64;
                        removed_seeders += seeders_before - list.num_seeders as u64;
                        if list.num_peers == 0 {
                            *slot = None;
                        }
                    }
                }
                if swarm.is_empty() {
                    swarms_delta -= 1;
                    return false;
                }
                true
            });

            shard.num_peers -= removed_peers;
            shard.num_seeders -= removed_seeders;
        }
        self.sharding.add_swarms(swarms_delta);
    }
}

/// Derives the truncated GC comparison window from a wall-clock cutoff:
/// the cutoff second truncated to 16 bits and the width of the liveness
/// window. The subtraction wraps exactly like the stored timestamps do.
fn gc_window(cutoff: SystemTime) -> (u16, u16) {
    let cutoff_unix = unix_time(cutoff);
    let max_diff = current_time().wrapping_sub(cutoff_unix) as u16;
    (cutoff_unix as u16, max_diff)
}
