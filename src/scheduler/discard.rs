//! The one irreversible step: asking the tab registry to discard.

use std::sync::Arc;

use tracing::{debug, warn};

use super::tab::TabId;
use super::traits::TabRegistry;

/// Performs the discard action against the tab registry.
///
/// Discard is best-effort and never retried: a registry error is logged and
/// the job is still treated as complete, so the slot is released and the
/// overflow queue keeps draining.
pub struct DiscardExecutor<R> {
    registry: Arc<R>,
}

impl<R: TabRegistry> DiscardExecutor<R> {
    /// Creates an executor over the given registry.
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Requests the discard, swallowing any reported error.
    pub async fn discard(&self, id: TabId) {
        match self.registry.discard(id).await {
            Ok(()) => debug!(tab = %id, "tab discarded"),
            Err(err) => warn!(tab = %id, error = %err, "discarding failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tab::TabSnapshot;
    use crate::scheduler::traits::DiscardError;
    use std::sync::Mutex;

    struct RecordingRegistry {
        discarded: Mutex<Vec<TabId>>,
        fail: bool,
    }

    impl RecordingRegistry {
        fn new(fail: bool) -> Self {
            Self {
                discarded: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    impl TabRegistry for RecordingRegistry {
        async fn snapshot(&self, _id: TabId) -> Option<TabSnapshot> {
            None
        }

        async fn discard(&self, id: TabId) -> Result<(), DiscardError> {
            self.discarded.lock().unwrap().push(id);
            if self.fail {
                Err(DiscardError::new("host rejected discard"))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_discard_invokes_registry() {
        let registry = Arc::new(RecordingRegistry::new(false));
        let executor = DiscardExecutor::new(Arc::clone(&registry));

        executor.discard(TabId::new(5)).await;

        assert_eq!(*registry.discarded.lock().unwrap(), vec![TabId::new(5)]);
    }

    #[tokio::test]
    async fn test_discard_swallows_registry_error() {
        let registry = Arc::new(RecordingRegistry::new(true));
        let executor = DiscardExecutor::new(Arc::clone(&registry));

        // Must not panic or propagate; one attempt, no retry.
        executor.discard(TabId::new(5)).await;

        assert_eq!(registry.discarded.lock().unwrap().len(), 1);
    }
}
