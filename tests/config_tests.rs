mod common;

use std::sync::Arc;

use optmem_peerstore::config::enums::configuration_error::ConfigurationError;
use optmem_peerstore::config::structs::configuration::Configuration;
use optmem_peerstore::store::structs::peer_store::PeerStore;

#[test]
fn test_store_accepts_a_valid_configuration() {
    let store = PeerStore::new(common::create_test_config()).unwrap();
    assert_eq!(store.num_swarms(), 0);
    assert_eq!(store.sharding.len(), 1024);
}

#[test]
fn test_store_rejects_a_zero_gc_interval() {
    let mut config = Configuration::default();
    config.tracker_config.gc_interval = 0;

    let result = PeerStore::new(Arc::new(config));
    assert!(matches!(result, Err(ConfigurationError::MissingInterval)));
}

#[test]
fn test_store_rejects_a_zero_peer_lifetime() {
    let mut config = Configuration::default();
    config.tracker_config.peer_lifetime = 0;

    let result = PeerStore::new(Arc::new(config));
    assert!(matches!(result, Err(ConfigurationError::MissingLifetime)));
}

#[test]
fn test_zero_shard_bits_fall_back_to_the_default_table() {
    let mut config = Configuration::default();
    config.tracker_config.shard_count_bits = 0;

    let store = PeerStore::new(Arc::new(config)).unwrap();
    assert_eq!(store.sharding.len(), 1024);
}

#[test]
fn test_small_shard_tables_are_honored() {
    let mut config = Configuration::default();
    config.tracker_config.shard_count_bits = 2;

    let store = PeerStore::new(Arc::new(config)).unwrap();
    assert_eq!(store.sharding.len(), 4);
}
