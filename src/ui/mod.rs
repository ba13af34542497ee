//! Terminal UI
//!
//! Human-readable rendering (icons, colors, headers, summaries) and the
//! NDJSON helpers used by `--json`.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
