//! Tab identity and snapshots.
//!
//! The scheduler never enumerates or owns tabs; callers hand it a
//! [`TabSnapshot`] per submission, and queued tabs are re-snapshotted
//! through the [`TabRegistry`](super::TabRegistry) when they re-enter.

use std::fmt;

/// Unique identifier for a browser tab.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct TabId(u32);

impl TabId {
    /// Creates a tab id from the host's raw numeric id.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric id.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TabId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Read-only snapshot of a tab at submission time.
///
/// `active` and `discarded` gate the pipeline; `title` and `url` feed the
/// title-stamp fallback chain; `fav_icon_url` is the source for the badge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabSnapshot {
    /// The tab's identifier.
    pub id: TabId,

    /// Whether the tab is the foreground tab of its window.
    pub active: bool,

    /// Whether the tab is already discarded.
    pub discarded: bool,

    /// Current document title, if any.
    pub title: Option<String>,

    /// Current location, used when the document has no title.
    pub url: Option<String>,

    /// Current favicon URL, if the tab has one.
    pub fav_icon_url: Option<String>,
}

impl TabSnapshot {
    /// Creates an inactive, non-discarded snapshot with no document state.
    pub fn new(id: TabId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the discarded flag.
    pub fn with_discarded(mut self, discarded: bool) -> Self {
        self.discarded = discarded;
        self
    }

    /// Sets the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the location.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the favicon URL.
    pub fn with_fav_icon_url(mut self, url: impl Into<String>) -> Self {
        self.fav_icon_url = Some(url.into());
        self
    }
}
