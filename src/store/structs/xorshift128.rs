/// A xorshift128+ generator for announce sampling.
///
/// Seeded per request from the info hash and the announcing peer, so a
/// repeated announce against an unchanged swarm draws the same candidate
/// sequence. Stepping it needs no allocation and no shared state, which is
/// what allows sampling to run under a plain read lock.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Xorshift128Plus {
    pub s0: u64,
    pub s1: u64,
}
