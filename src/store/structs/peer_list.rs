use crate::store::structs::peer_record::PeerRecord;

/// A bucket is a contiguous run of records, kept sorted by identity.
pub type Bucket = Vec<PeerRecord>;

/// The peers of one swarm and one address family.
///
/// Peers are spread over a power-of-two number of buckets by a hash of the
/// identity prefix, and kept sorted within each bucket so membership checks
/// are a hash plus a binary search. The bucket count follows the peer count
/// with a hysteresis band to avoid rebuild churn around the boundaries.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct PeerList {
    pub num_seeders: usize,
    pub num_peers: usize,
    pub num_downloads: u64,
    pub buckets: Vec<Bucket>,
}
