use byteorder::{BigEndian, ByteOrder};

use crate::store::structs::info_hash::InfoHash;
use crate::store::structs::xorshift128::Xorshift128Plus;

impl Xorshift128Plus {
    pub fn new(s0: u64, s1: u64) -> Xorshift128Plus {
        Xorshift128Plus { s0, s1 }
    }

    /// Derives the per-request state for an announce.
    ///
    /// Both seeds fold 16 bytes into a u64 with a wrapping add of the two
    /// big-endian halves: one from the info hash, one from the announcing
    /// peer's entropy bytes. Identical requests against an unchanged swarm
    /// therefore sample identically.
    pub fn for_announce(info_hash: &InfoHash, entropy: &[u8; 16]) -> Xorshift128Plus {
        let s0 = BigEndian::read_u64(&info_hash.0[..8]).wrapping_add(BigEndian::read_u64(&info_hash.0[8..16]));
        let s1 = BigEndian::read_u64(&entropy[..8]).wrapping_add(BigEndian::read_u64(&entropy[8..]));
        Xorshift128Plus { s0, s1 }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.s0;
        let y = self.s1;
        self.s0 = y;
        x ^= x << 23;
        self.s1 = x ^ y ^ (x >> 17) ^ (y >> 26);
        self.s1.wrapping_add(y)
    }

    /// A pseudo-random integer in `[0, n)`. `n` must be nonzero.
    pub fn intn(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}
