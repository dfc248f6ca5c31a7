//! Preference snapshot consumed by the discard scheduler.
//!
//! Preferences are read from the [`PreferencesStore`] collaborator once per
//! submission and stay immutable for that job's lifetime. A queued job that
//! re-enters the pipeline after a slot frees up counts as a new submission
//! and gets a fresh snapshot.
//!
//! [`PreferencesStore`]: crate::scheduler::PreferencesStore

use std::time::Duration;

/// Default maximum concurrent discard pipelines.
pub const DEFAULT_SIMULTANEOUS_JOBS: u32 = 10;

/// Default title prefix stamped on discarded tabs.
pub const DEFAULT_PREPENDS: &str = "\u{1f4a4}";

/// Default debounce between the visual steps and the discard action.
pub const DEFAULT_FAVICON_DELAY_MS: u64 = 500;

/// Preferences governing a single discard job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    /// Maximum concurrent discard pipelines before new requests queue.
    ///
    /// Note the admission guard is strict `count > limit`, so the effective
    /// ceiling is `simultaneous_jobs + 1` (see
    /// [`AdmissionController`](crate::scheduler::AdmissionController)).
    pub simultaneous_jobs: u32,

    /// Title prefix stamped on discarded tabs. Empty disables the stamp.
    pub prepends: String,

    /// Whether to install the dimmed, marked favicon before discarding.
    pub favicon: bool,

    /// Debounce between the visual steps and the discard action itself.
    ///
    /// Applies whenever at least one visual step was enabled, regardless of
    /// whether the step succeeded.
    pub favicon_delay: Duration,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            simultaneous_jobs: DEFAULT_SIMULTANEOUS_JOBS,
            prepends: DEFAULT_PREPENDS.to_string(),
            favicon: true,
            favicon_delay: Duration::from_millis(DEFAULT_FAVICON_DELAY_MS),
        }
    }
}

impl Preferences {
    /// Preferences with every visual step disabled and no delay.
    ///
    /// Useful for callers (and tests) that want the bare discard path.
    pub fn bare() -> Self {
        Self {
            simultaneous_jobs: DEFAULT_SIMULTANEOUS_JOBS,
            prepends: String::new(),
            favicon: false,
            favicon_delay: Duration::ZERO,
        }
    }
}
