use crate::store::enums::peer_store_error::PeerStoreError;

impl std::fmt::Display for PeerStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PeerStoreError::InvalidAddress => write!(f, "invalid IP address"),
            PeerStoreError::NotFound => write!(f, "resource does not exist"),
        }
    }
}

impl std::error::Error for PeerStoreError {}
