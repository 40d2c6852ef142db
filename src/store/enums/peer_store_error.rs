/// Errors returned by the fallible store operations.
///
/// Misuse of the store after [`stop`](crate::store::structs::peer_store::PeerStore::stop)
/// is a caller bug and panics instead of returning a value from this enum.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PeerStoreError {
    /// The peer IP is neither 4 nor 16 bytes long.
    InvalidAddress,
    /// The info hash is unknown, or the endpoint is not present in its
    /// family's peer list.
    NotFound,
}
