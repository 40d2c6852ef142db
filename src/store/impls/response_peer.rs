use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::store::structs::peer_record::{PeerRecord, IP_LEN};
use crate::store::structs::response_peer::ResponsePeer;

impl From<&PeerRecord> for ResponsePeer {
    fn from(record: &PeerRecord) -> ResponsePeer {
        let ip = if record.is_v4_mapped() {
            IpAddr::V4(Ipv4Addr::new(record.0[12], record.0[13], record.0[14], record.0[15]))
        } else {
            let mut octets = [0u8; IP_LEN];
            octets.copy_from_slice(record.ip());
            IpAddr::V6(Ipv6Addr::from(octets))
        };
        ResponsePeer { ip, port: record.port() }
    }
}
