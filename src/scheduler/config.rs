//! Scheduler configuration.
//!
//! This module contains the [`SchedulerConfig`] struct and related constants
//! for configuring the discard scheduler. Per-job knobs (concurrency limit,
//! title prefix, favicon settings) live in
//! [`Preferences`](crate::prefs::Preferences) instead, because they are
//! re-read from the preferences store on every submission.

use std::time::Duration;

// =============================================================================
// Configuration Constants
// =============================================================================

/// Default dedup window: how long a tab id stays barred from re-entering
/// the pipeline unless its job completes first.
pub const DEFAULT_DEDUP_TTL_MS: u64 = 2_000;

/// Default stale window: how long after the last admission a stuck
/// concurrency counter is considered stale and reset.
pub const DEFAULT_STALE_WINDOW_MS: u64 = 5_000;

// =============================================================================
// Scheduler Configuration
// =============================================================================

/// Configuration for the discard scheduler.
#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    /// TTL on dedup entries. Completion releases an entry early; the TTL
    /// covers pipelines that never complete.
    pub dedup_ttl: Duration,

    /// Elapsed time since the last admission after which an over-limit
    /// concurrency counter is reset to zero.
    pub stale_window: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            dedup_ttl: Duration::from_millis(DEFAULT_DEDUP_TTL_MS),
            stale_window: Duration::from_millis(DEFAULT_STALE_WINDOW_MS),
        }
    }
}
