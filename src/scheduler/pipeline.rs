//! Visual pipeline step rules.
//!
//! The pipeline itself is driven by
//! [`DiscardScheduler`](super::DiscardScheduler); this module holds the pure
//! step rules so the scheduler, script-host implementations, and tests share
//! one definition.

use crate::prefs::Preferences;

/// Computes the stamped title for a tab, or `None` when the title is
/// already stamped.
///
/// Mirrors what the injected payload does inside the tab: use the document
/// title, fall back to the location when there is none, and never
/// double-stamp. The prefix and title are joined with a single space.
pub fn stamp_title(prefix: &str, title: Option<&str>, url: Option<&str>) -> Option<String> {
    let current = title.filter(|t| !t.is_empty()).or(url).unwrap_or("");
    if current.starts_with(prefix) {
        None
    } else {
        Some(format!("{prefix} {current}"))
    }
}

/// Whether the debounce delay runs before the discard step.
///
/// The delay applies whenever at least one visual step was enabled, whether
/// or not the step succeeded. With both steps disabled the pipeline
/// discards immediately.
pub fn wants_delay(prefs: &Preferences) -> bool {
    !prefs.prepends.is_empty() || prefs.favicon
}
