use std::time::Instant;

use log::{debug, info};

use crate::store::structs::peer_list::{Bucket, PeerList};
use crate::store::structs::peer_record::PeerRecord;
use crate::store::structs::xorshift128::Xorshift128Plus;

impl PeerList {
    pub fn new() -> PeerList {
        PeerList {
            num_seeders: 0,
            num_peers: 0,
            num_downloads: 0,
            buckets: vec![Vec::new()],
        }
    }

    /// DJB2-style hash over the identity prefix. This spreads peers over
    /// buckets; it has nothing to do with the ordering inside a bucket.
    fn hash_identity(identity: &[u8]) -> u64 {
        let mut hash: u64 = 5381;
        for &byte in identity {
            hash = hash.wrapping_add(hash << 5).wrapping_add(u64::from(byte));
        }
        hash
    }

    fn bucket_index(&self, identity: &[u8]) -> usize {
        (Self::hash_identity(identity) % self.buckets.len() as u64) as usize
    }

    /// Computes the number of buckets to use for a number of peers.
    ///
    /// Returns the target together with a defensive target used when
    /// shrinking. Both are powers of two sized so that, assuming an even
    /// distribution, no bucket exceeds 512 peers; the defensive value adds
    /// a buffer of one tenth of the peer count so that swarms hovering
    /// around a boundary do not rebuild on every mutation.
    pub fn compute_target_buckets(num_peers: usize) -> (usize, usize) {
        let mut target_buckets: usize = 1;
        let mut defensive_target_buckets: usize = 1;
        let buffer_width = num_peers as isize / 10 - 1;

        if num_peers > 0 {
            let mut t = (num_peers as isize - 1) >> 9;
            while t != 0 {
                target_buckets *= 2;
                t >>= 1;
            }
            let mut t = (num_peers as isize + buffer_width) >> 9;
            while t != 0 {
                defensive_target_buckets *= 2;
                t >>= 1;
            }
        }

        (target_buckets, defensive_target_buckets)
    }

    /// Rebuilds the bucket vector if the peer count crossed a boundary.
    ///
    /// Growing happens as soon as the target changes; shrinking only once
    /// the count has also left the defensive band. Returns whether a
    /// rebuild was performed.
    pub fn rebalance_buckets(&mut self) -> bool {
        let (target_buckets, defensive_target_buckets) = Self::compute_target_buckets(self.num_peers);

        if self.buckets.len() == target_buckets {
            return false;
        }
        if self.buckets.len() > target_buckets && target_buckets != defensive_target_buckets {
            // Buffer zone: don't immediately reduce the number of buckets
            return false;
        }

        let before = Instant::now();
        let old_buckets = std::mem::replace(&mut self.buckets, vec![Vec::new(); target_buckets]);

        // Append everything unsorted first, then sort each bucket once.
        for bucket in old_buckets {
            for record in bucket {
                let index = self.bucket_index(record.identity());
                self.buckets[index].push(record);
            }
        }
        for bucket in &mut self.buckets {
            bucket.sort_unstable_by(|a, b| a.identity().cmp(b.identity()));
        }

        debug!(
            "[REBALANCE] rebuilt {} buckets for {} peers in {:?}",
            target_buckets,
            self.num_peers,
            before.elapsed()
        );
        if target_buckets >= 256 {
            info!(
                "[REBALANCE] huge rebuild: {} buckets for {} peers in {:?}",
                target_buckets,
                self.num_peers,
                before.elapsed()
            );
        }
        true
    }

    fn search(bucket: &Bucket, identity: &[u8]) -> Result<usize, usize> {
        bucket.binary_search_by(|record| record.identity().cmp(identity))
    }

    /// Inserts or updates a record.
    ///
    /// An existing record with the same identity is overwritten in place,
    /// flipping the seeder counter when the role changes. Returns the
    /// deltas to apply to shard-level (peers, seeders) aggregates.
    pub fn put(&mut self, record: PeerRecord) -> (i64, i64) {
        let index = self.bucket_index(record.identity());
        let bucket = &mut self.buckets[index];

        match Self::search(bucket, record.identity()) {
            Err(position) => {
                let seeders_delta = i64::from(record.is_seeder());
                bucket.insert(position, record);
                self.num_peers += 1;
                if record.is_seeder() {
                    self.num_seeders += 1;
                }
                (1, seeders_delta)
            }
            Ok(position) => {
                let mut seeders_delta = 0;
                if bucket[position].is_leecher() && record.is_seeder() {
                    self.num_seeders += 1;
                    seeders_delta = 1;
                } else if bucket[position].is_seeder() && record.is_leecher() {
                    self.num_seeders -= 1;
                    seeders_delta = -1;
                }
                bucket[position] = record;
                (0, seeders_delta)
            }
        }
    }

    /// Removes the record with the same identity and role flag.
    ///
    /// A record with a matching endpoint but the other role does not count
    /// as found. Returns whether the removed record was a seeder.
    pub fn remove(&mut self, record: &PeerRecord) -> Option<bool> {
        let index = self.bucket_index(record.identity());
        let bucket = &mut self.buckets[index];

        match Self::search(bucket, record.identity()) {
            Err(_) => None,
            Ok(position) => {
                if bucket[position].flag() != record.flag() {
                    return None;
                }
                let was_seeder = bucket[position].is_seeder();
                bucket.remove(position);
                self.num_peers -= 1;
                if was_seeder {
                    self.num_seeders -= 1;
                }
                Some(was_seeder)
            }
        }
    }

    /// Whether a record older than the cutoff should be evicted.
    ///
    /// `cutoff` is the truncated cutoff second and `max_diff` the width of
    /// the liveness window in seconds. The comparison is wraparound-aware:
    /// monotonically advancing timestamps survive the 16-bit rollover as
    /// long as `max_diff` stays well below 32768.
    pub fn is_stale(peer_time: u16, cutoff: u16, max_diff: u16) -> bool {
        if peer_time == cutoff {
            return true;
        }
        if peer_time < cutoff {
            // annoying wrapping case
            u16::MAX - (cutoff - peer_time) > max_diff
        } else {
            peer_time - cutoff > max_diff
        }
    }

    /// Evicts every stale record in place.
    ///
    /// Returns whether at least one peer was removed; callers are expected
    /// to rebalance afterwards.
    pub fn collect_garbage(&mut self, cutoff: u16, max_diff: u16) -> bool {
        let mut removed_peers: usize = 0;
        let mut removed_seeders: usize = 0;

        for bucket in &mut self.buckets {
            bucket.retain(|record| {
                if Self::is_stale(record.peer_time(), cutoff, max_diff) {
                    removed_peers += 1;
                    if record.is_seeder() {
                        removed_seeders += 1;
                    }
                    return false;
                }
                true
            });
        }

        self.num_peers -= removed_peers;
        self.num_seeders -= removed_seeders;
        removed_peers > 0
    }

    /// Every peer of the list, seeders first, then leechers.
    ///
    /// Callers rely on this order when an announce wants the whole swarm.
    pub fn get_all_peers(&self) -> Vec<PeerRecord> {
        let mut seeders = Vec::with_capacity(self.num_seeders);
        let mut leechers = Vec::with_capacity(self.num_peers - self.num_seeders);

        for bucket in &self.buckets {
            for record in bucket {
                if record.is_seeder() {
                    seeders.push(*record);
                } else {
                    leechers.push(*record);
                }
            }
        }

        seeders.extend(leechers);
        seeders
    }

    pub fn get_all_seeders(&self) -> Vec<PeerRecord> {
        let mut seeders = Vec::with_capacity(self.num_seeders);
        for bucket in &self.buckets {
            for record in bucket {
                if record.is_seeder() {
                    seeders.push(*record);
                }
            }
        }
        seeders
    }

    pub fn get_all_leechers(&self) -> Vec<PeerRecord> {
        let mut leechers = Vec::with_capacity(self.num_peers - self.num_seeders);
        for bucket in &self.buckets {
            for record in bucket {
                if record.is_leecher() {
                    leechers.push(*record);
                }
            }
        }
        leechers
    }

    /// Draws `num_want` records of one role.
    ///
    /// Each pass redraws a position in `[0, 1024)` and probes that offset
    /// in every bucket, accepting records whose role matches. The result
    /// is biased, but needs no shuffling, no candidate set and no
    /// allocation beyond the output. Callers must cap `num_want` at the
    /// number of records of the wanted role.
    fn get_random_of_role(&self, num_want: usize, want_seeders: bool, rng: &mut Xorshift128Plus) -> Vec<PeerRecord> {
        let mut chosen = Vec::with_capacity(num_want);
        if num_want == 0 {
            return chosen;
        }

        while chosen.len() < num_want {
            let bucket_offset = rng.intn(1024);
            for bucket in &self.buckets {
                if chosen.len() == num_want {
                    break;
                }
                if bucket.is_empty() {
                    continue;
                }
                let record = bucket[bucket_offset % bucket.len()];
                let matches = if want_seeders { record.is_seeder() } else { record.is_leecher() };
                if matches {
                    chosen.push(record);
                }
            }
        }

        chosen
    }

    /// Selects up to `num_want` peers for an announce response.
    ///
    /// A seeding announcer only receives leechers. A leeching announcer
    /// receives as many seeders as possible, padded with random leechers;
    /// when the whole swarm is requested the full enumeration is returned
    /// with seeders first.
    pub fn announce_peers(&self, num_want: usize, seeder: bool, rng: &mut Xorshift128Plus) -> Vec<PeerRecord> {
        let num_leechers = self.num_peers - self.num_seeders;

        if seeder {
            let num_want = num_want.min(num_leechers);
            if num_want == num_leechers {
                return self.get_all_leechers();
            }
            return self.get_random_of_role(num_want, false, rng);
        }

        let num_want = num_want.min(self.num_peers);

        // enough seeders to serve the request with seeders alone
        if num_want <= self.num_seeders {
            return self.get_random_of_role(num_want, true, rng);
        }
        if num_want == self.num_peers {
            return self.get_all_peers();
        }

        let mut peers = Vec::with_capacity(num_want);
        peers.extend(self.get_all_seeders());
        peers.extend(self.get_random_of_role(num_want - self.num_seeders, false, rng));
        peers
    }
}

impl Default for PeerList {
    fn default() -> Self {
        Self::new()
    }
}
