use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::Mutex;
use tracing::info;
use trove_model::StatsSnapshot;
use trove_store::{ItemStore, StoreError};

/// Lazily computed catalog stats with explicit ownership of the cached
/// value. Invalidation is an explicit method call; the mtime watcher task is
/// one caller, and a write that never changes the file on disk leaves the
/// cache stale until the next observed change (best-effort contract).
pub struct StatsCache {
    inner: Mutex<Option<StatsSnapshot>>,
}

impl StatsCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    pub async fn get(&self, store: &dyn ItemStore) -> Result<StatsSnapshot, StoreError> {
        let mut cached = self.inner.lock().await;
        if let Some(snapshot) = *cached {
            return Ok(snapshot);
        }
        let snapshot = StatsSnapshot::compute(&store.load_all()?);
        *cached = Some(snapshot);
        Ok(snapshot)
    }

    pub async fn invalidate(&self) {
        *self.inner.lock().await = None;
    }

    /// Polls the data file's mtime and invalidates the cache when it moves.
    pub fn spawn_mtime_watcher(self: &Arc<Self>, path: PathBuf, interval: Duration) {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            let mut last = file_mtime(&path);
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let current = file_mtime(&path);
                if current != last {
                    last = current;
                    cache.invalidate().await;
                    info!(path = %path.display(), "data file changed; stats cache invalidated");
                }
            }
        });
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new()
    }
}

fn file_mtime(path: &std::path::Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
