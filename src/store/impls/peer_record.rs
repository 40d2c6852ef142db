use byteorder::{BigEndian, ByteOrder};

use crate::store::enums::peer_flag::PeerFlag;
use crate::store::structs::peer_record::{
    PeerRecord, FLAG_LEN, IP_LEN, PEER_COMPARE_LEN, PEER_RECORD_LEN, PORT_LEN, V4_IN_V6_PREFIX,
};

impl PeerRecord {
    pub fn new() -> PeerRecord {
        PeerRecord([0u8; PEER_RECORD_LEN])
    }

    /// Builds a complete record from a canonical IP.
    pub fn assemble(ip: &[u8; IP_LEN], port: u16, flag: PeerFlag, peer_time: u16) -> PeerRecord {
        let mut record = PeerRecord::new();
        record.set_ip(ip);
        record.set_port(port);
        record.set_flag(flag);
        record.set_peer_time(peer_time);
        record
    }

    /// Normalizes a wire-level IP to the canonical 16-byte form.
    ///
    /// 4-byte addresses are mapped into the v4-in-v6 prefix; 16-byte
    /// addresses pass through. Any other length is invalid.
    pub fn canonical_ip(ip: &[u8]) -> Option<[u8; IP_LEN]> {
        let mut canonical = [0u8; IP_LEN];
        match ip.len() {
            4 => {
                canonical[..12].copy_from_slice(&V4_IN_V6_PREFIX);
                canonical[12..].copy_from_slice(ip);
                Some(canonical)
            }
            16 => {
                canonical.copy_from_slice(ip);
                Some(canonical)
            }
            _ => None,
        }
    }

    pub fn set_ip(&mut self, ip: &[u8; IP_LEN]) {
        self.0[..IP_LEN].copy_from_slice(ip);
    }

    pub fn ip(&self) -> &[u8] {
        &self.0[..IP_LEN]
    }

    pub fn set_port(&mut self, port: u16) {
        BigEndian::write_u16(&mut self.0[IP_LEN..IP_LEN + PORT_LEN], port);
    }

    pub fn port(&self) -> u16 {
        BigEndian::read_u16(&self.0[IP_LEN..IP_LEN + PORT_LEN])
    }

    pub fn flag(&self) -> u8 {
        self.0[IP_LEN + PORT_LEN]
    }

    pub fn set_flag(&mut self, flag: PeerFlag) {
        self.0[IP_LEN + PORT_LEN] = flag as u8;
    }

    pub fn peer_time(&self) -> u16 {
        BigEndian::read_u16(&self.0[IP_LEN + PORT_LEN + FLAG_LEN..])
    }

    pub fn set_peer_time(&mut self, peer_time: u16) {
        BigEndian::write_u16(&mut self.0[IP_LEN + PORT_LEN + FLAG_LEN..], peer_time);
    }

    pub fn is_seeder(&self) -> bool {
        self.flag() & PeerFlag::Seeder as u8 != 0
    }

    pub fn is_leecher(&self) -> bool {
        self.flag() & PeerFlag::Leecher as u8 != 0
    }

    /// The identity prefix (IP + port) used for ordering and equality.
    pub fn identity(&self) -> &[u8] {
        &self.0[..PEER_COMPARE_LEN]
    }

    pub fn is_v4_mapped(&self) -> bool {
        self.0[..12] == V4_IN_V6_PREFIX
    }
}

impl Default for PeerRecord {
    fn default() -> Self {
        Self::new()
    }
}
