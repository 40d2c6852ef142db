use crate::store::enums::address_family::AddressFamily;
use crate::store::structs::peer_list::PeerList;
use crate::store::structs::swarm::Swarm;

impl Swarm {
    pub fn new() -> Swarm {
        Swarm { peers4: None, peers6: None }
    }

    pub fn list(&self, family: AddressFamily) -> Option<&PeerList> {
        match family {
            AddressFamily::V4 => self.peers4.as_ref(),
            AddressFamily::V6 => self.peers6.as_ref(),
        }
    }

    /// The slot for a family's peer list, for code that needs to unlink an
    /// emptied list.
    pub fn slot_mut(&mut self, family: AddressFamily) -> &mut Option<PeerList> {
        match family {
            AddressFamily::V4 => &mut self.peers4,
            AddressFamily::V6 => &mut self.peers6,
        }
    }

    /// The family's peer list, created lazily on first insert.
    pub fn ensure_list(&mut self, family: AddressFamily) -> &mut PeerList {
        self.slot_mut(family).get_or_insert_with(PeerList::new)
    }

    /// A swarm with no peer list in either family is eligible for removal
    /// from its shard.
    pub fn is_empty(&self) -> bool {
        self.peers4.is_none() && self.peers6.is_none()
    }

    pub fn num_seeders(&self) -> u64 {
        let v4 = self.peers4.as_ref().map_or(0, |list| list.num_seeders as u64);
        let v6 = self.peers6.as_ref().map_or(0, |list| list.num_seeders as u64);
        v4 + v6
    }

    pub fn num_leechers(&self) -> u64 {
        let v4 = self.peers4.as_ref().map_or(0, |list| (list.num_peers - list.num_seeders) as u64);
        let v6 = self.peers6.as_ref().map_or(0, |list| (list.num_peers - list.num_seeders) as u64);
        v4 + v6
    }
}
