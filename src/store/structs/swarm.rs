use crate::store::structs::peer_list::PeerList;

/// All peers of one torrent.
///
/// A peer list slot is `None` exactly when that family has no peers; a
/// swarm with both slots empty is removed from its shard.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Swarm {
    pub peers4: Option<PeerList>,
    pub peers6: Option<PeerList>,
}
