use serde::{Deserialize, Serialize};

/// Address family of a peer endpoint.
///
/// The store keeps IPv4 and IPv6 peers of the same swarm in separate lists.
/// IPv4 addresses are stored in their v4-in-v6 mapped form; the family is
/// recovered from the canonical 16-byte representation.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum AddressFamily {
    V4,
    V6,
}
