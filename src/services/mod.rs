//! Business logic services.
//!
//! The classification pipeline (scoring → classify → grid → assembler)
//! is pure data transformation; the report cache drives it. The Gerrit
//! client and notifier are the only services that touch the network.

pub mod assembler;
pub mod classify;
pub mod gerrit_client;
pub mod grid;
pub mod notify;
pub mod report_cache;
pub mod scoring;

pub use gerrit_client::GerritClient;
pub use grid::{GridCounts, ReviewGrid};
pub use notify::Notifier;
pub use report_cache::{CachedReport, ReportCache};
