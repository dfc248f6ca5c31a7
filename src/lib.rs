//! AutoDiscard - scheduling pipeline for discarding browser tabs.
//!
//! A "discard" frees a tab's in-memory content while keeping its entry
//! (title, icon) for later reload. The discard call itself is trivial; this
//! crate owns the scheduling around it: deduplicating re-entrant requests
//! per tab, bounding concurrent pipelines against a configured limit,
//! healing a stale concurrency counter, queueing overflow in FIFO order, and
//! running the failure-tolerant visual-feedback steps (title prefix, dimmed
//! and marked favicon) before the irreversible discard.
//!
//! # High-Level API
//!
//! The [`scheduler`] module provides the entry point:
//!
//! ```ignore
//! use std::sync::Arc;
//! use autodiscard::scheduler::{DiscardScheduler, SchedulerConfig, TabSnapshot, TabId};
//!
//! let scheduler = Arc::new(DiscardScheduler::new(
//!     SchedulerConfig::default(),
//!     prefs_store,
//!     tab_registry,
//!     script_host,
//!     favicon_fetcher,
//! ));
//!
//! let outcome = scheduler.submit(TabSnapshot::new(TabId::new(42))).await;
//! ```
//!
//! Browser-side concerns (reading persisted preferences, enumerating tabs,
//! executing scripts inside documents, fetching favicons cross-origin) are
//! consumed through the collaborator traits in [`scheduler::traits`] and are
//! not owned by this crate.

pub mod badge;
pub mod logging;
pub mod prefs;
pub mod scheduler;

/// Version of the AutoDiscard library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
