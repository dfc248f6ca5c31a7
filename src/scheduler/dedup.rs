//! Re-entrancy guard for discard pipelines.
//!
//! A tab id enters the set when its submission is accepted and leaves it
//! either when the pipeline completes (early release) or when the TTL timer
//! fires, whichever comes first. While a tab is a member, further
//! submissions for it are ignored, so two pipelines can never start for the
//! same tab.
//!
//! Each entry owns an explicit timer handle (a [`CancellationToken`]):
//! early release cancels it, otherwise it fires standalone and removes the
//! entry on its own.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::tab::TabId;

/// Time-bounded membership set of tabs with a pipeline in progress.
pub struct DedupGuard {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<TabId, CancellationToken>>>,
}

impl DedupGuard {
    /// Creates a guard whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Registers a tab as in progress.
    ///
    /// Returns `false` if the tab is already a member (duplicate, ignore).
    /// Otherwise inserts it, arms the TTL timer, and returns `true`.
    pub async fn try_register(&self, id: TabId) -> bool {
        let mut entries = self.entries.lock().await;
        if entries.contains_key(&id) {
            return false;
        }

        let token = CancellationToken::new();
        entries.insert(id, token.clone());
        drop(entries);

        let entries = Arc::clone(&self.entries);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(ttl) => {
                    entries.lock().await.remove(&id);
                    debug!(tab = %id, "dedup entry expired");
                }
            }
        });

        true
    }

    /// Removes a tab immediately, cancelling its TTL timer.
    ///
    /// Idempotent: releasing an absent id is a no-op.
    pub async fn release(&self, id: TabId) {
        if let Some(token) = self.entries.lock().await.remove(&id) {
            token.cancel();
        }
    }

    /// Whether the tab is currently a member.
    pub async fn contains(&self, id: TabId) -> bool {
        self.entries.lock().await.contains_key(&id)
    }

    /// Number of tabs currently in progress.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the set is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
