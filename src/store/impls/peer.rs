use std::net::{IpAddr, SocketAddr};

use crate::store::structs::peer::Peer;
use crate::store::structs::peer_id::PeerId;

impl Peer {
    pub fn new(ip: Vec<u8>, port: u16) -> Peer {
        Peer { ip, port, peer_id: None }
    }

    pub fn from_addr(addr: SocketAddr) -> Peer {
        let ip = match addr.ip() {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        };
        Peer { ip, port: addr.port(), peer_id: None }
    }

    pub fn with_peer_id(mut self, peer_id: PeerId) -> Peer {
        self.peer_id = Some(peer_id);
        self
    }
}
