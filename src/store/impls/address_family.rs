use crate::store::enums::address_family::AddressFamily;
use crate::store::structs::peer_record::V4_IN_V6_PREFIX;

impl AddressFamily {
    /// The family of a canonical 16-byte IP.
    pub fn of(ip: &[u8; 16]) -> AddressFamily {
        if ip[..12] == V4_IN_V6_PREFIX {
            AddressFamily::V4
        } else {
            AddressFamily::V6
        }
    }
}
