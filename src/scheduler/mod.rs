//! Discard Scheduler
//!
//! This module owns the pipeline that turns a "please discard this tab"
//! request into the one irreversible discard call, with deduplication,
//! bounded concurrency, and best-effort visual feedback along the way.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      DiscardScheduler                         │
//! │  submit(tab) entry path, queue drain on completion           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌──────────────────┐  ┌─────────────────┐  │
//! │  │ DedupGuard  │  │ Admission        │  │ DiscardExecutor │  │
//! │  │ TTL member- │  │ Controller       │  │ best-effort     │  │
//! │  │ ship set    │  │ count + overflow │  │ discard call    │  │
//! │  └─────────────┘  └──────────────────┘  └─────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Control Flow
//!
//! Per submission: the [`DedupGuard`] rejects tabs already mid-pipeline,
//! entry guards drop active or already-discarded tabs, the
//! [`AdmissionController`] admits or queues against the preference limit,
//! the visual steps run in order (title stamp, favicon overlay, debounce),
//! the [`DiscardExecutor`] commits, and completion releases the slot and
//! resubmits the overflow head through the same path.
//!
//! # Failure Model
//!
//! Every failure past admission is local and silent: injection failures skip
//! their step, a failed discard is logged and the job still completes. An
//! admitted job reaches completion exactly once.

mod admission;
mod config;
mod core;
mod dedup;
mod discard;
pub mod pipeline;
mod tab;
pub mod traits;

pub use self::admission::{Admission, AdmissionController};
pub use self::config::{DEFAULT_DEDUP_TTL_MS, DEFAULT_STALE_WINDOW_MS, SchedulerConfig};
pub use self::core::{DiscardScheduler, SubmitOutcome};
pub use self::dedup::DedupGuard;
pub use self::discard::DiscardExecutor;
pub use self::tab::{TabId, TabSnapshot};
pub use self::traits::{
    DiscardError, FaviconFetcher, FetchError, InjectionError, PreferencesStore, ScriptHost,
    ScriptOp, TabRegistry,
};
