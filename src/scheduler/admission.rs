//! Concurrency admission and overflow queueing.
//!
//! Tracks how many discard pipelines are in flight against the per-job
//! preference limit, queues overflow submissions in FIFO order, and heals a
//! stale counter left behind by pipelines that never released their slot
//! (crashed hosts, dropped futures).
//!
//! # The `limit + 1` ceiling
//!
//! The admission guard is strict `count > limit`, inherited behavior that
//! callers observe and depend on: with limit 1, a first job admits (count
//! 0 → 1) and a second also admits (1 is not > 1, count → 2) before a third
//! is queued. The effective ceiling is therefore `limit + 1`, not `limit`.
//! Flagged for product confirmation; do not change the comparison.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use super::tab::TabId;

/// Outcome of an admission decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// A slot was taken; the pipeline may run now.
    Admitted,
    /// Saturated; the tab was appended to the overflow queue.
    Queued,
}

/// Concurrency bookkeeping for the scheduler.
///
/// Not internally synchronized: the scheduler owns one instance behind a
/// single mutex, mirroring the single-threaded atomicity of the original
/// event-loop model.
pub struct AdmissionController {
    stale_window: Duration,
    count: u32,
    window_start: Instant,
    overflow: VecDeque<TabId>,
}

impl AdmissionController {
    /// Creates a controller with the given stale window.
    pub fn new(stale_window: Duration) -> Self {
        Self {
            stale_window,
            count: 0,
            window_start: Instant::now(),
            overflow: VecDeque::new(),
        }
    }

    /// Decides whether a submission may run now or must wait.
    ///
    /// Heals first: an over-limit count with no admission for the whole
    /// stale window is bookkeeping left by jobs that never released, and is
    /// reset to zero. The reset does not cancel anything in flight.
    pub fn accept(&mut self, id: TabId, limit: u32) -> Admission {
        if self.count > limit && self.window_start.elapsed() >= self.stale_window {
            warn!(
                stuck_count = self.count,
                limit, "resetting stale admission counter"
            );
            self.count = 0;
        }

        if self.count > limit {
            self.overflow.push_back(id);
            debug!(
                tab = %id,
                in_flight = self.count,
                queued = self.overflow.len(),
                "admission saturated, queueing"
            );
            return Admission::Queued;
        }

        self.count += 1;
        self.window_start = Instant::now();
        Admission::Admitted
    }

    /// Releases a slot and pops the overflow head, if any.
    ///
    /// Called exactly once per admitted job. The count saturates at zero.
    pub fn release(&mut self) -> Option<TabId> {
        self.count = self.count.saturating_sub(1);
        self.overflow.pop_front()
    }

    /// Current concurrent job count.
    pub fn in_flight(&self) -> u32 {
        self.count
    }

    /// Number of submissions waiting in the overflow queue.
    pub fn queued(&self) -> usize {
        self.overflow.len()
    }
}
