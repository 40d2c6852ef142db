mod common;

use std::net::{IpAddr, Ipv4Addr};
use std::time::{Duration, SystemTime};

use optmem_peerstore::store::enums::address_family::AddressFamily;
use optmem_peerstore::store::enums::peer_store_error::PeerStoreError;

#[test]
fn test_put_seeder_and_read_it_back() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();
    let p1 = common::v4_peer(1, 2, 3, 4, 1234);

    store.put_seeder(info_hash, &p1).unwrap();

    assert_eq!(store.num_seeders(info_hash), 1);
    assert_eq!(store.num_leechers(info_hash), 0);

    let seeders = store.get_seeders(info_hash).unwrap();
    assert_eq!(seeders.peers4.len(), 1);
    assert!(seeders.peers6.is_empty());
    assert_eq!(seeders.peers4[0].ip, IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)));
    assert_eq!(seeders.peers4[0].port, 1234);

    let leechers = store.get_leechers(info_hash).unwrap();
    assert!(leechers.peers4.is_empty());
    assert!(leechers.peers6.is_empty());

    let stats = store.scrape(info_hash, AddressFamily::V4);
    assert_eq!(stats.complete, 1);
    assert_eq!(stats.incomplete, 0);
}

#[test]
fn test_put_twice_keeps_one_peer() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();
    let p1 = common::v4_peer(1, 2, 3, 4, 1234);

    store.put_seeder(info_hash, &p1).unwrap();
    store.put_seeder(info_hash, &p1).unwrap();

    assert_eq!(store.num_seeders(info_hash), 1);
    assert_eq!(store.num_swarms(), 1);

    // the final role wins when the same endpoint re-announces
    store.put_leecher(info_hash, &p1).unwrap();
    assert_eq!(store.num_seeders(info_hash), 0);
    assert_eq!(store.num_leechers(info_hash), 1);
}

#[test]
fn test_delete_from_an_unknown_swarm_is_not_found() {
    let store = common::create_test_store();
    let p1 = common::v4_peer(1, 2, 3, 4, 1234);

    assert_eq!(
        store.delete_seeder(common::random_info_hash(), &p1).unwrap_err(),
        PeerStoreError::NotFound
    );
}

#[test]
fn test_delete_seeder_keeps_the_rest_of_the_swarm() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();
    let p1 = common::v4_peer(1, 2, 3, 4, 1234);
    let p2 = common::v4_peer(2, 3, 4, 5, 2345);

    store.put_seeder(info_hash, &p1).unwrap();
    store.put_seeder(info_hash, &p2).unwrap();
    assert_eq!(store.num_seeders(info_hash), 2);

    store.delete_seeder(info_hash, &p2).unwrap();

    assert_eq!(store.num_seeders(info_hash), 1);
    let seeders = store.get_seeders(info_hash).unwrap();
    assert_eq!(seeders.peers4.len(), 1);
    assert_eq!(seeders.peers4[0].ip, IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)));
    assert_eq!(seeders.peers4[0].port, 1234);
}

#[test]
fn test_deleting_the_last_peer_removes_the_swarm() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();
    let p1 = common::v4_peer(1, 2, 3, 4, 1234);

    store.put_seeder(info_hash, &p1).unwrap();
    assert_eq!(store.num_swarms(), 1);

    store.delete_seeder(info_hash, &p1).unwrap();

    assert_eq!(store.num_seeders(info_hash), 0);
    assert_eq!(store.num_swarms(), 0);
    assert_eq!(store.get_seeders(info_hash).unwrap_err(), PeerStoreError::NotFound);
}

#[test]
fn test_graduate_leecher_flips_the_role() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();
    let p1 = common::v4_peer(1, 2, 3, 4, 1234);

    store.put_leecher(info_hash, &p1).unwrap();
    assert_eq!(store.num_leechers(info_hash), 1);
    assert_eq!(store.num_seeders(info_hash), 0);

    store.graduate_leecher(info_hash, &p1).unwrap();

    assert_eq!(store.num_leechers(info_hash), 0);
    assert_eq!(store.num_seeders(info_hash), 1);
    let seeders = store.get_seeders(info_hash).unwrap();
    assert_eq!(seeders.peers4.len(), 1);
    assert_eq!(seeders.peers4[0].port, 1234);
}

#[test]
fn test_graduate_counts_a_download_once() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();
    let p1 = common::v4_peer(1, 2, 3, 4, 1234);

    store.put_leecher(info_hash, &p1).unwrap();
    store.graduate_leecher(info_hash, &p1).unwrap();
    // graduating again must not count another download
    store.graduate_leecher(info_hash, &p1).unwrap();

    let stats = store.scrape(info_hash, AddressFamily::V4);
    assert_eq!(stats.complete, 1);
    assert_eq!(stats.downloaded, 1);
}

#[test]
fn test_delete_with_the_wrong_role_is_not_found() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();
    let p1 = common::v4_peer(1, 2, 3, 4, 1234);

    store.put_seeder(info_hash, &p1).unwrap();

    assert_eq!(store.delete_leecher(info_hash, &p1).unwrap_err(), PeerStoreError::NotFound);
    assert_eq!(store.num_seeders(info_hash), 1);
}

#[test]
fn test_invalid_ip_lengths_are_rejected() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();

    let mut bogus = common::v4_peer(1, 2, 3, 4, 1234);
    bogus.ip = vec![1, 2, 3];

    assert_eq!(store.put_seeder(info_hash, &bogus).unwrap_err(), PeerStoreError::InvalidAddress);
    assert_eq!(store.delete_seeder(info_hash, &bogus).unwrap_err(), PeerStoreError::InvalidAddress);
    assert_eq!(
        store.announce_peers(info_hash, false, 10, &bogus).unwrap_err(),
        PeerStoreError::InvalidAddress
    );
    assert_eq!(store.num_swarms(), 0);
}

#[test]
fn test_families_are_tracked_separately() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();

    store.put_seeder(info_hash, &common::v4_peer(1, 2, 3, 4, 1234)).unwrap();
    store
        .put_seeder(info_hash, &common::v6_peer([0x2001, 0xdb8, 0, 0, 0, 0, 0, 1], 4321))
        .unwrap();

    assert_eq!(store.num_seeders(info_hash), 2);

    let seeders = store.get_seeders(info_hash).unwrap();
    assert_eq!(seeders.peers4.len(), 1);
    assert_eq!(seeders.peers6.len(), 1);
    assert!(seeders.peers6[0].ip.is_ipv6());

    assert_eq!(store.scrape(info_hash, AddressFamily::V4).complete, 1);
    assert_eq!(store.scrape(info_hash, AddressFamily::V6).complete, 1);
}

#[test]
fn test_announce_returns_only_the_announcers_family() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();

    for i in 0..5 {
        store.put_leecher(info_hash, &common::v4_peer(10, 0, 0, i, 6881)).unwrap();
    }
    store
        .put_leecher(info_hash, &common::v6_peer([0x2001, 0xdb8, 0, 0, 0, 0, 0, 9], 6881))
        .unwrap();

    let announcer = common::v4_peer(99, 99, 99, 99, 7000);
    let peers = store.announce_peers(info_hash, false, 100, &announcer).unwrap();

    assert_eq!(peers.len(), 5);
    assert!(peers.iter().all(|peer| peer.ip.is_ipv4()));
}

#[test]
fn test_announcing_seeder_receives_only_leechers() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();

    for i in 0..10 {
        store.put_seeder(info_hash, &common::v4_peer(10, 0, 0, i, 6881)).unwrap();
    }
    for i in 0..10 {
        store.put_leecher(info_hash, &common::v4_peer(20, 0, 0, i, 6881)).unwrap();
    }

    let announcer = common::v4_peer(99, 99, 99, 99, 7000);
    let peers = store.announce_peers(info_hash, true, 100, &announcer).unwrap();

    assert_eq!(peers.len(), 10);
    for peer in &peers {
        match peer.ip {
            IpAddr::V4(v4) => assert_eq!(v4.octets()[0], 20, "seeder leaked into a seeder announce"),
            IpAddr::V6(_) => panic!("unexpected family"),
        }
    }
}

#[test]
fn test_announce_on_an_unknown_swarm_is_not_found() {
    let store = common::create_test_store();
    let announcer = common::v4_peer(99, 99, 99, 99, 7000);

    assert_eq!(
        store.announce_peers(common::random_info_hash(), false, 50, &announcer).unwrap_err(),
        PeerStoreError::NotFound
    );
}

#[test]
fn test_announce_is_deterministic_for_the_same_requester() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();

    for i in 0..100u8 {
        store.put_leecher(info_hash, &common::v4_peer(10, 0, 0, i, 6881)).unwrap();
    }

    let announcer = common::v4_peer(99, 99, 99, 99, 7000).with_peer_id(common::random_peer_id());
    let first = store.announce_peers(info_hash, false, 10, &announcer).unwrap();
    let second = store.announce_peers(info_hash, false, 10, &announcer).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_scrape_of_an_unknown_swarm_is_zeroed() {
    let store = common::create_test_store();
    let stats = store.scrape(common::random_info_hash(), AddressFamily::V4);
    assert_eq!(stats.complete, 0);
    assert_eq!(stats.incomplete, 0);
    assert_eq!(stats.downloaded, 0);
}

#[test]
fn test_collect_garbage_drops_peers_at_the_cutoff() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();
    let p1 = common::v4_peer(1, 2, 3, 4, 1234);

    store.put_seeder(info_hash, &p1).unwrap();
    assert_eq!(store.num_swarms(), 1);

    // a cutoff of "now" makes the freshly stamped peer stale
    store.collect_garbage(SystemTime::now());

    assert_eq!(store.num_seeders(info_hash), 0);
    assert_eq!(store.num_swarms(), 0);
    assert_eq!(store.num_total_peers(), (0, 0));
    assert_eq!(store.get_seeders(info_hash).unwrap_err(), PeerStoreError::NotFound);
}

#[test]
fn test_collect_garbage_keeps_live_peers() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();
    let p1 = common::v4_peer(1, 2, 3, 4, 1234);

    store.put_seeder(info_hash, &p1).unwrap();

    store.collect_garbage(SystemTime::now() - Duration::from_secs(600));

    assert_eq!(store.num_seeders(info_hash), 1);
    assert_eq!(store.num_swarms(), 1);
}

#[test]
fn test_fleet_totals_sum_each_family_once() {
    let store = common::create_test_store();

    for i in 0..4 {
        let info_hash = common::random_info_hash();
        store.put_seeder(info_hash, &common::v4_peer(10, 0, 0, i, 6881)).unwrap();
        store.put_leecher(info_hash, &common::v4_peer(20, 0, 0, i, 6881)).unwrap();
        store
            .put_leecher(info_hash, &common::v6_peer([0x2001, 0xdb8, 0, 0, 0, 0, 0, u16::from(i)], 6881))
            .unwrap();
    }

    assert_eq!(store.num_total_peers(), (4, 8));
    assert_eq!(store.num_total_seeders(), 4);
    assert_eq!(store.num_total_leechers(), 8);
}

#[test]
fn test_sharding_distribution_tracks_every_swarm() {
    let store = common::create_test_store();

    for _ in 0..256 {
        let info_hash = common::random_info_hash();
        store.put_leecher(info_hash, &common::v4_peer(127, 0, 0, 1, 6881)).unwrap();
    }

    assert_eq!(store.num_swarms(), 256);

    let mut populated_shards = 0;
    for shard_lock in &store.sharding.shards {
        if !shard_lock.read().swarms.is_empty() {
            populated_shards += 1;
        }
    }
    // 256 random hashes over 1024 shards collide rarely
    assert!(populated_shards > 128, "suspiciously clustered shard load: {populated_shards}");
}

#[tokio::test]
async fn test_concurrent_peer_additions() {
    let store = common::create_test_store();
    let info_hash = common::zero_info_hash();

    let mut handles = vec![];
    for i in 0..100 {
        let store_clone = store.clone();
        handles.push(tokio::spawn(async move {
            store_clone
                .put_leecher(info_hash, &common::v4_peer(127, 0, 0, i as u8, 6881))
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.expect("task should complete");
    }

    assert_eq!(store.num_leechers(info_hash), 100);
}

#[tokio::test]
async fn test_stop_joins_the_cleanup_task() {
    let store = common::create_test_store();
    store.spawn_cleanup();

    store.put_seeder(common::zero_info_hash(), &common::v4_peer(1, 2, 3, 4, 1234)).unwrap();

    store.stop().await;
}

#[tokio::test]
#[should_panic(expected = "peer store accessed after shutdown")]
async fn test_use_after_stop_panics() {
    let store = common::create_test_store();
    store.stop().await;

    let _ = store.put_seeder(common::zero_info_hash(), &common::v4_peer(1, 2, 3, 4, 1234));
}
