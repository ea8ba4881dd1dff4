//! Gerrit open-patch review dashboard.
//!
//! Polls a Gerrit instance's changes query endpoint, classifies each open
//! patch by its verification and code-review state, and serves an HTML
//! dashboard grouping patches by that state, plus a cross-tab statistics
//! view and an optional webhook notification of the distribution.

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod server;
pub mod services;
