/// Role flag bits of a stored peer.
///
/// Exactly one bit is set on insert; an update may flip the role. The flag
/// byte lives outside the 18-byte identity prefix, so a role change never
/// moves a record inside its bucket.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum PeerFlag {
    Seeder = 1,
    Leecher = 2,
}
