use std::collections::BTreeMap;

use crate::store::structs::shard::Shard;

impl Shard {
    pub fn new() -> Shard {
        Shard {
            swarms: BTreeMap::new(),
            num_peers: 0,
            num_seeders: 0,
        }
    }

    /// Applies the deltas a peer-list mutation reported.
    ///
    /// Must be called under the shard write lock that covered the mutation,
    /// so the aggregates never drift from the peer lists.
    pub fn apply_deltas(&mut self, peers_delta: i64, seeders_delta: i64) {
        self.num_peers = self.num_peers.wrapping_add_signed(peers_delta);
        self.num_seeders = self.num_seeders.wrapping_add_signed(seeders_delta);
    }
}
