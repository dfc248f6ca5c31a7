//! Collaborator traits for the discard scheduler.
//!
//! This module contains the abstract contracts between the scheduler and the
//! browser-side collaborators it drives. These traits enable dependency
//! injection and testability; none of them are owned by the core.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Discard Scheduler                         │
//! │                                                               │
//! │  The pipeline depends on these trait abstractions:            │
//! │  • PreferencesStore - per-submission preference snapshot      │
//! │  • TabRegistry      - tab snapshots + the discard action      │
//! │  • ScriptHost       - run a payload inside a tab's document   │
//! │  • FaviconFetcher   - cross-origin favicon bytes              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Diagnostics go through `tracing` directly; there is no logger trait.

use std::future::Future;

use thiserror::Error;

use super::tab::{TabId, TabSnapshot};
use crate::prefs::Preferences;

/// Asynchronous source of preference snapshots.
///
/// Read once per submission; the scheduler never caches across jobs.
pub trait PreferencesStore: Send + Sync + 'static {
    /// Loads the current preferences.
    fn load(&self) -> impl Future<Output = Preferences> + Send;
}

/// The browser's view of its tabs, plus the discard action itself.
///
/// Implementations report discard failures through the `Result`; they must
/// not panic.
pub trait TabRegistry: Send + Sync + 'static {
    /// Returns a fresh snapshot for the given tab, or `None` if the tab no
    /// longer exists.
    fn snapshot(&self, id: TabId) -> impl Future<Output = Option<TabSnapshot>> + Send;

    /// Asks the host to discard the tab.
    fn discard(&self, id: TabId) -> impl Future<Output = Result<(), DiscardError>> + Send;
}

/// Executes a script payload inside a tab's document context.
///
/// The scheduler only decides whether and with what data to invoke a
/// payload; the host owns the document mutation.
pub trait ScriptHost: Send + Sync + 'static {
    /// Runs the payload in the given tab.
    fn execute(
        &self,
        tab: TabId,
        op: ScriptOp,
    ) -> impl Future<Output = Result<(), InjectionError>> + Send;
}

/// Fetches favicon bytes, cross-origin.
pub trait FaviconFetcher: Send + Sync + 'static {
    /// Downloads the icon at `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Script payload executed inside a tab's document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptOp {
    /// Prefix the document title. The rewrite rule lives in
    /// [`pipeline::stamp_title`](super::pipeline::stamp_title) so hosts and
    /// tests share one definition; stamping is idempotent.
    StampTitle {
        /// The configured prefix, guaranteed non-empty.
        prefix: String,
    },

    /// Replace the document's icon links with a `data:` URL icon. Injected
    /// across all frames; only the top frame applies it.
    InstallIcon {
        /// PNG `data:` URL produced by [`badge::render`](crate::badge::render).
        href: String,
    },
}

impl ScriptOp {
    /// Whether the payload is injected into every frame of the tab.
    pub fn all_frames(&self) -> bool {
        matches!(self, Self::InstallIcon { .. })
    }
}

/// Error reported by the tab registry's discard action.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct DiscardError {
    message: String,
}

impl DiscardError {
    /// Creates a new discard error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error reported by the script host when a tab cannot be reached (it
/// navigated away, closed, or is otherwise inaccessible).
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct InjectionError {
    message: String,
}

impl InjectionError {
    /// Creates a new injection error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error reported by the favicon fetcher.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    /// Creates a new fetch error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
