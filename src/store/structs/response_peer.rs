use std::net::IpAddr;

use serde::Serialize;

/// A peer endpoint as returned to callers.
///
/// Records stored in the v4-in-v6 mapped form are projected back to a
/// 4-byte IPv4 address.
#[derive(Serialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ResponsePeer {
    pub ip: IpAddr,
    pub port: u16,
}
