use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::config::structs::configuration::Configuration;
use crate::store::structs::swarm_sharding::SwarmSharding;

/// The peer store facade.
///
/// Validates inputs, builds packed records and dispatches every operation
/// to the right shard. Once [`stop`](PeerStore::stop) has completed, any
/// further call is a caller bug and panics.
#[derive(Debug)]
pub struct PeerStore {
    pub config: Arc<Configuration>,
    pub sharding: SwarmSharding,
    pub closed: AtomicBool,
    pub shutdown: Notify,
    pub cleanup_handle: Mutex<Option<JoinHandle<()>>>,
}
