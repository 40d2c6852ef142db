use serde::{Deserialize, Serialize};

/// Swarm statistics for one address family, as served in scrape responses.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ScrapeStats {
    pub complete: u64,
    pub incomplete: u64,
    pub downloaded: u64,
}
