use std::collections::btree_map::Entry;

use crate::common::common::packed_time;
use crate::store::enums::address_family::AddressFamily;
use crate::store::enums::peer_flag::PeerFlag;
use crate::store::enums::peer_store_error::PeerStoreError;
use crate::store::structs::family_peers::FamilyPeers;
use crate::store::structs::info_hash::InfoHash;
use crate::store::structs::peer::Peer;
use crate::store::structs::peer_record::{PeerRecord, IP_LEN};
use crate::store::structs::peer_store::PeerStore;
use crate::store::structs::response_peer::ResponsePeer;
use crate::store::structs::scrape_stats::ScrapeStats;
use crate::store::structs::swarm::Swarm;
use crate::store::structs::xorshift128::Xorshift128Plus;

impl PeerStore {
    /// Inserts or updates a peer as a seeder, stamped with the current
    /// time.
    #[tracing::instrument(level = "debug")]
    pub fn put_seeder(&self, info_hash: InfoHash, peer: &Peer) -> Result<(), PeerStoreError> {
        self.put(info_hash, peer, PeerFlag::Seeder, false)
    }

    /// Inserts or updates a peer as a leecher, stamped with the current
    /// time.
    #[tracing::instrument(level = "debug")]
    pub fn put_leecher(&self, info_hash: InfoHash, peer: &Peer) -> Result<(), PeerStoreError> {
        self.put(info_hash, peer, PeerFlag::Leecher, false)
    }

    /// Marks a leecher as having completed the download.
    ///
    /// Behaves like [`put_seeder`](PeerStore::put_seeder) and is
    /// idempotent; the swarm's download counter only moves when the peer
    /// actually flips from leecher to seeder.
    #[tracing::instrument(level = "debug")]
    pub fn graduate_leecher(&self, info_hash: InfoHash, peer: &Peer) -> Result<(), PeerStoreError> {
        self.put(info_hash, peer, PeerFlag::Seeder, true)
    }

    fn put(&self, info_hash: InfoHash, peer: &Peer, flag: PeerFlag, graduate: bool) -> Result<(), PeerStoreError> {
        self.assert_open();

        let ip = PeerRecord::canonical_ip(&peer.ip).ok_or(PeerStoreError::InvalidAddress)?;
        let family = AddressFamily::of(&ip);
        let record = PeerRecord::assemble(&ip, peer.port, flag, packed_time());

        let shard_lock = self.sharding.shard_for(&info_hash);
        let mut swarms_delta: i64 = 0;
        {
            let mut shard = shard_lock.write();
            let swarm = match shard.swarms.entry(info_hash) {
                Entry::Vacant(vacant) => {
                    swarms_delta = 1;
                    vacant.insert(Swarm::new())
                }
                Entry::Occupied(occupied) => occupied.into_mut(),
            };

            let list = swarm.ensure_list(family);
            let (peers_delta, seeders_delta) = list.put(record);
            if graduate && peers_delta == 0 && seeders_delta > 0 {
                list.num_downloads += 1;
            }
            list.rebalance_buckets();
            shard.apply_deltas(peers_delta, seeders_delta);
        }
        self.sharding.add_swarms(swarms_delta);

        Ok(())
    }

    /// Removes a seeder by exact endpoint.
    ///
    /// An endpoint present with the leecher role is not a match.
    #[tracing::instrument(level = "debug")]
    pub fn delete_seeder(&self, info_hash: InfoHash, peer: &Peer) -> Result<(), PeerStoreError> {
        self.delete(info_hash, peer, PeerFlag::Seeder)
    }

    /// Removes a leecher by exact endpoint.
    ///
    /// An endpoint present with the seeder role is not a match.
    #[tracing::instrument(level = "debug")]
    pub fn delete_leecher(&self, info_hash: InfoHash, peer: &Peer) -> Result<(), PeerStoreError> {
        self.delete(info_hash, peer, PeerFlag::Leecher)
    }

    fn delete(&self, info_hash: InfoHash, peer: &Peer, flag: PeerFlag) -> Result<(), PeerStoreError> {
        self.assert_open();

        let ip = PeerRecord::canonical_ip(&peer.ip).ok_or(PeerStoreError::InvalidAddress)?;
        let family = AddressFamily::of(&ip);
        let mut record = PeerRecord::new();
        record.set_ip(&ip);
        record.set_port(peer.port);
        record.set_flag(flag);

        let shard_lock = self.sharding.shard_for(&info_hash);
        let mut swarms_delta: i64 = 0;
        {
            let mut shard = shard_lock.write();
            let swarm = match shard.swarms.get_mut(&info_hash) {
                None => return Err(PeerStoreError::NotFound),
                Some(swarm) => swarm,
            };

            let slot = swarm.slot_mut(family);
            let list = match slot.as_mut() {
                None => return Err(PeerStoreError::NotFound),
                Some(list) => list,
            };

            let was_seeder = match list.remove(&record) {
                None => return Err(PeerStoreError::NotFound),
                Some(was_seeder) => was_seeder,
            };

            if list.num_peers == 0 {
                *slot = None;
            } else {
                list.rebalance_buckets();
            }

            let swarm_empty = swarm.is_empty();
            shard.apply_deltas(-1, if was_seeder { -1 } else { 0 });
            if swarm_empty {
                shard.swarms.remove(&info_hash);
                swarms_delta = -1;
            }
        }
        self.sharding.add_swarms(swarms_delta);

        Ok(())
    }

    /// Samples up to `num_want` peers of the announcer's address family.
    ///
    /// A seeding announcer only receives leechers; a leeching announcer
    /// receives seeders first, padded with random leechers. The draw is
    /// seeded from the request, so it holds only a read lock and repeats
    /// against an unchanged swarm.
    #[tracing::instrument(level = "debug")]
    pub fn announce_peers(
        &self,
        info_hash: InfoHash,
        announcer_is_seeder: bool,
        num_want: usize,
        announcer: &Peer,
    ) -> Result<Vec<ResponsePeer>, PeerStoreError> {
        self.assert_open();

        let ip = PeerRecord::canonical_ip(&announcer.ip).ok_or(PeerStoreError::InvalidAddress)?;
        let family = AddressFamily::of(&ip);
        let mut rng = self.announce_rng(&info_hash, announcer, &ip);

        let shard_lock = self.sharding.shard_for(&info_hash);
        let shard = shard_lock.read();
        let swarm = shard.swarms.get(&info_hash).ok_or(PeerStoreError::NotFound)?;
        let list = swarm.list(family).ok_or(PeerStoreError::NotFound)?;

        let records = list.announce_peers(num_want, announcer_is_seeder, &mut rng);
        Ok(records.iter().map(ResponsePeer::from).collect())
    }

    /// Seeds the sampler from the request: the info hash on one side, the
    /// announcing peer on the other. Peers that sent no peer ID fall back
    /// to their canonical IP as entropy.
    fn announce_rng(&self, info_hash: &InfoHash, announcer: &Peer, ip: &[u8; IP_LEN]) -> Xorshift128Plus {
        match &announcer.peer_id {
            Some(peer_id) => {
                let mut entropy = [0u8; 16];
                entropy.copy_from_slice(&peer_id.0[..16]);
                Xorshift128Plus::for_announce(info_hash, &entropy)
            }
            None => Xorshift128Plus::for_announce(info_hash, ip),
        }
    }

    /// Swarm statistics for one address family.
    ///
    /// An unknown info hash or an absent family yields zeroed statistics,
    /// matching what a scrape response reports for an untracked torrent.
    #[tracing::instrument(level = "debug")]
    pub fn scrape(&self, info_hash: InfoHash, family: AddressFamily) -> ScrapeStats {
        self.assert_open();

        let shard_lock = self.sharding.shard_for(&info_hash);
        let shard = shard_lock.read();

        match shard.swarms.get(&info_hash).and_then(|swarm| swarm.list(family)) {
            None => ScrapeStats::default(),
            Some(list) => ScrapeStats {
                complete: list.num_seeders as u64,
                incomplete: (list.num_peers - list.num_seeders) as u64,
                downloaded: list.num_downloads,
            },
        }
    }

    /// The swarm's seeder count, summed over both address families.
    #[tracing::instrument(level = "debug")]
    pub fn num_seeders(&self, info_hash: InfoHash) -> u64 {
        self.assert_open();

        let shard_lock = self.sharding.shard_for(&info_hash);
        let shard = shard_lock.read();
        shard.swarms.get(&info_hash).map_or(0, Swarm::num_seeders)
    }

    /// The swarm's leecher count, summed over both address families.
    #[tracing::instrument(level = "debug")]
    pub fn num_leechers(&self, info_hash: InfoHash) -> u64 {
        self.assert_open();

        let shard_lock = self.sharding.shard_for(&info_hash);
        let shard = shard_lock.read();
        shard.swarms.get(&info_hash).map_or(0, Swarm::num_leechers)
    }

    /// Every seeder of the swarm, enumerated per address family.
    #[tracing::instrument(level = "debug")]
    pub fn get_seeders(&self, info_hash: InfoHash) -> Result<FamilyPeers, PeerStoreError> {
        self.assert_open();

        let shard_lock = self.sharding.shard_for(&info_hash);
        let shard = shard_lock.read();
        let swarm = shard.swarms.get(&info_hash).ok_or(PeerStoreError::NotFound)?;

        Ok(FamilyPeers {
            peers4: swarm
                .peers4
                .as_ref()
                .map_or_else(Vec::new, |list| list.get_all_seeders().iter().map(ResponsePeer::from).collect()),
            peers6: swarm
                .peers6
                .as_ref()
                .map_or_else(Vec::new, |list| list.get_all_seeders().iter().map(ResponsePeer::from).collect()),
        })
    }

    /// Every leecher of the swarm, enumerated per address family.
    #[tracing::instrument(level = "debug")]
    pub fn get_leechers(&self, info_hash: InfoHash) -> Result<FamilyPeers, PeerStoreError> {
        self.assert_open();

        let shard_lock = self.sharding.shard_for(&info_hash);
        let shard = shard_lock.read();
        let swarm = shard.swarms.get(&info_hash).ok_or(PeerStoreError::NotFound)?;

        Ok(FamilyPeers {
            peers4: swarm
                .peers4
                .as_ref()
                .map_or_else(Vec::new, |list| list.get_all_leechers().iter().map(ResponsePeer::from).collect()),
            peers6: swarm
                .peers6
                .as_ref()
                .map_or_else(Vec::new, |list| list.get_all_leechers().iter().map(ResponsePeer::from).collect()),
        })
    }
}
