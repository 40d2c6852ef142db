use crate::store::structs::peer_id::PeerId;

/// A peer endpoint as decoded by a tracker front-end.
///
/// The IP is carried as raw wire bytes (4 for IPv4, 16 for IPv6); anything
/// else is rejected by the store with `InvalidAddress`. The peer ID is only
/// consumed by the announce sampler's entropy derivation and is never
/// stored.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Peer {
    pub ip: Vec<u8>,
    pub port: u16,
    pub peer_id: Option<PeerId>,
}
