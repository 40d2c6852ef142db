// Common test utilities and fixtures
#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;

use optmem_peerstore::config::structs::configuration::Configuration;
use optmem_peerstore::config::structs::tracker_config::TrackerConfig;
use optmem_peerstore::store::structs::info_hash::InfoHash;
use optmem_peerstore::store::structs::peer::Peer;
use optmem_peerstore::store::structs::peer_id::PeerId;
use optmem_peerstore::store::structs::peer_store::PeerStore;

pub type TestStore = Arc<PeerStore>;

/// Create a test configuration with a small shard table
pub fn create_test_config() -> Arc<Configuration> {
    Arc::new(Configuration {
        log_level: "info".to_string(),
        tracker_config: TrackerConfig {
            shard_count_bits: 10,
            gc_interval: 10,
            peer_lifetime: 10,
        },
    })
}

/// Create a test store instance
pub fn create_test_store() -> TestStore {
    Arc::new(PeerStore::new(create_test_config()).expect("valid test configuration"))
}

/// Generate a random InfoHash for testing
pub fn random_info_hash() -> InfoHash {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let bytes: [u8; 20] = rng.gen();
    InfoHash(bytes)
}

/// Generate a random PeerId for testing
#[allow(dead_code)]
pub fn random_peer_id() -> PeerId {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let bytes: [u8; 20] = rng.gen();
    PeerId(bytes)
}

/// The all-zero info hash used by the scenario tests
pub fn zero_info_hash() -> InfoHash {
    InfoHash([0u8; 20])
}

pub fn v4_peer(a: u8, b: u8, c: u8, d: u8, port: u16) -> Peer {
    Peer::from_addr(SocketAddr::new(IpAddr::V4(Ipv4Addr::new(a, b, c, d)), port))
}

#[allow(dead_code)]
pub fn v6_peer(segments: [u16; 8], port: u16) -> Peer {
    Peer::from_addr(SocketAddr::new(IpAddr::V6(Ipv6Addr::from(segments)), port))
}
