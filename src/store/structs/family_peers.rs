use crate::store::structs::response_peer::ResponsePeer;

/// Peers of one role, enumerated separately per address family.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct FamilyPeers {
    pub peers4: Vec<ResponsePeer>,
    pub peers6: Vec<ResponsePeer>,
}
