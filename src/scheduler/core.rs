//! Scheduler entry path and pipeline driver.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::debug;

use super::admission::{Admission, AdmissionController};
use super::config::SchedulerConfig;
use super::dedup::DedupGuard;
use super::discard::DiscardExecutor;
use super::pipeline;
use super::tab::{TabId, TabSnapshot};
use super::traits::{FaviconFetcher, PreferencesStore, ScriptHost, ScriptOp, TabRegistry};
use crate::badge;
use crate::prefs::Preferences;

/// Outcome reported to the submitter.
///
/// Informational only: failures inside an admitted pipeline are never
/// surfaced, so `Completed` means the pipeline ran to its end, not that the
/// discard itself succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The tab is already mid-pipeline (dedup window).
    Duplicate,
    /// The tab is the foreground tab of its window; dropped at the entry
    /// guard with no state change beyond the dedup registration.
    ActiveTab,
    /// Nothing to do; dropped at the entry guard like an active tab.
    AlreadyDiscarded,
    /// Admission is saturated; the tab waits in the overflow queue and will
    /// re-enter the full entry path when a slot frees up.
    Queued,
    /// The pipeline ran to completion.
    Completed,
}

/// Schedules discard pipelines against browser tabs.
///
/// One instance owns all mutable scheduling state (dedup set, concurrency
/// count, overflow queue); construct independent instances for independent
/// schedulers. All shared state sits behind its own lock and is only
/// touched between suspension points, preserving the atomicity of the
/// original single-threaded model on a multi-threaded runtime.
pub struct DiscardScheduler<P, R, H, F> {
    prefs: Arc<P>,
    registry: Arc<R>,
    host: Arc<H>,
    fetcher: Arc<F>,
    executor: DiscardExecutor<R>,
    dedup: DedupGuard,
    admission: Mutex<AdmissionController>,
}

impl<P, R, H, F> DiscardScheduler<P, R, H, F>
where
    P: PreferencesStore,
    R: TabRegistry,
    H: ScriptHost,
    F: FaviconFetcher,
{
    /// Creates a scheduler over the given collaborators.
    pub fn new(
        config: SchedulerConfig,
        prefs: Arc<P>,
        registry: Arc<R>,
        host: Arc<H>,
        fetcher: Arc<F>,
    ) -> Self {
        Self {
            executor: DiscardExecutor::new(Arc::clone(&registry)),
            dedup: DedupGuard::new(config.dedup_ttl),
            admission: Mutex::new(AdmissionController::new(config.stale_window)),
            prefs,
            registry,
            host,
            fetcher,
        }
    }

    /// Submits a tab for discarding.
    ///
    /// The full entry path: dedup registration, entry guards (active or
    /// already-discarded tabs are dropped with no further state change),
    /// a fresh preferences snapshot, admission, then the visual pipeline
    /// and the discard itself. Completion releases the admission slot,
    /// drops the dedup entry early, and resubmits the overflow head through
    /// this same path with a fresh snapshot.
    pub async fn submit(&self, tab: TabSnapshot) -> SubmitOutcome {
        if !self.dedup.try_register(tab.id).await {
            debug!(tab = %tab.id, "submission ignored, already in progress");
            return SubmitOutcome::Duplicate;
        }

        // Entry guards: the dedup entry stays registered, its TTL governs
        // re-entry.
        if tab.active {
            debug!(tab = %tab.id, "tab is active");
            return SubmitOutcome::ActiveTab;
        }
        if tab.discarded {
            debug!(tab = %tab.id, "already discarded");
            return SubmitOutcome::AlreadyDiscarded;
        }

        let prefs = self.prefs.load().await;

        let admitted = {
            let mut admission = self.admission.lock().await;
            admission.accept(tab.id, prefs.simultaneous_jobs)
        };
        if admitted == Admission::Queued {
            return SubmitOutcome::Queued;
        }

        self.run_pipeline(&tab, &prefs).await;
        self.finish(tab.id).await;
        SubmitOutcome::Completed
    }

    /// Runs the ordered visual steps, the debounce, and the discard.
    ///
    /// Steps execute strictly in order; each failure is swallowed and the
    /// pipeline proceeds.
    async fn run_pipeline(&self, tab: &TabSnapshot, prefs: &Preferences) {
        if !prefs.prepends.is_empty() {
            self.stamp_title(tab.id, &prefs.prepends).await;
        }
        if prefs.favicon {
            self.overlay_favicon(tab).await;
        }
        if pipeline::wants_delay(prefs) {
            sleep(prefs.favicon_delay).await;
        }
        self.executor.discard(tab.id).await;
    }

    async fn stamp_title(&self, id: TabId, prefix: &str) {
        let op = ScriptOp::StampTitle {
            prefix: prefix.to_string(),
        };
        if let Err(err) = self.host.execute(id, op).await {
            debug!(tab = %id, error = %err, "title stamp skipped");
        }
    }

    async fn overlay_favicon(&self, tab: &TabSnapshot) {
        let rendered = match &tab.fav_icon_url {
            Some(url) => match self.fetcher.fetch(url).await {
                Ok(bytes) => badge::render(&bytes),
                Err(err) => {
                    debug!(tab = %tab.id, error = %err, "favicon fetch failed, skipping overlay");
                    return;
                }
            },
            None => badge::render_placeholder(),
        };

        let href = match rendered {
            Ok(href) => href,
            Err(err) => {
                debug!(tab = %tab.id, error = %err, "badge render failed, skipping overlay");
                return;
            }
        };

        if let Err(err) = self.host.execute(tab.id, ScriptOp::InstallIcon { href }).await {
            debug!(tab = %tab.id, error = %err, "icon injection skipped");
        }
    }

    /// Completion transition: release the slot, drop the dedup entry ahead
    /// of its TTL, and drain the overflow head.
    async fn finish(&self, id: TabId) {
        self.dedup.release(id).await;

        let next = { self.admission.lock().await.release() };
        if let Some(next_id) = next {
            // The queued tab re-enters immediately, so free its dedup entry
            // before resubmission.
            self.dedup.release(next_id).await;
            self.resubmit(next_id).await;
        }
    }

    /// Resubmits a drained tab through the full entry path with a fresh
    /// snapshot; its active/discarded state is re-evaluated now, never
    /// cached from first submission.
    fn resubmit(&self, id: TabId) -> BoxFuture<'_, ()> {
        async move {
            match self.registry.snapshot(id).await {
                Some(snapshot) => {
                    let outcome = self.submit(snapshot).await;
                    debug!(tab = %id, ?outcome, "drained queued tab");
                }
                None => debug!(tab = %id, "queued tab vanished before resubmission"),
            }
        }
        .boxed()
    }

    /// Number of pipelines currently counted against the admission limit.
    pub async fn in_flight(&self) -> u32 {
        self.admission.lock().await.in_flight()
    }

    /// Number of submissions waiting in the overflow queue.
    pub async fn queued(&self) -> usize {
        self.admission.lock().await.queued()
    }
}
