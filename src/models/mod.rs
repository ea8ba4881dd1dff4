//! Data models for the dashboard.
//!
//! `Patch` mirrors the Gerrit query payload; `Score` and `Category` are
//! derived per patch per report cycle and never persisted.

pub mod category;
pub mod patch;
pub mod score;

// Re-exports for convenient access
pub use category::Category;
pub use patch::{Account, Label, Patch, Vote, CODE_REVIEW_LABEL, VERIFIED_LABEL};
pub use score::Score;
