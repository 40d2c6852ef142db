/// Length of the stored IP, always the 16-byte v4-in-v6 mapped form.
pub const IP_LEN: usize = 16;
/// Length of the big-endian port.
pub const PORT_LEN: usize = 2;
/// Length of the role flag byte.
pub const FLAG_LEN: usize = 1;
/// Length of the big-endian truncated timestamp.
pub const TIME_LEN: usize = 2;

/// Total packed record length.
pub const PEER_RECORD_LEN: usize = IP_LEN + PORT_LEN + FLAG_LEN + TIME_LEN;

/// Length of the identity prefix (IP + port). Two records with equal
/// identity are the same peer regardless of flag and timestamp.
pub const PEER_COMPARE_LEN: usize = IP_LEN + PORT_LEN;

/// The 12-byte prefix marking a v4-in-v6 mapped address.
pub const V4_IN_V6_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// A peer, packed into 21 bytes.
///
/// Layout: 16-byte IP, 2-byte big-endian port, 1-byte role flag, 2-byte
/// big-endian truncated unix timestamp. A plain byte array instead of
/// separate fields keeps swarms of hundreds of thousands of peers compact
/// and cache-friendly.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PeerRecord(pub [u8; PEER_RECORD_LEN]);
