use std::collections::BTreeMap;

use crate::store::structs::info_hash::InfoHash;
use crate::store::structs::swarm::Swarm;

/// One slice of the info-hash keyspace.
///
/// The aggregate counters are kept in sync with the swarm map under the
/// shard's write lock, so fleet-wide totals cost one read lock per shard
/// instead of a walk over every swarm.
#[derive(Debug, Default)]
pub struct Shard {
    pub swarms: BTreeMap<InfoHash, Swarm>,
    pub num_peers: u64,
    pub num_seeders: u64,
}
