//! # mimic-export
//!
//! Export sink for rendered knowledge bases. One attempt per publish with a
//! bounded timeout; failures surface as [`ExportError`](mimic_core::ExportError).

pub mod hastebin;
pub mod protocol;

pub use hastebin::HastebinSink;
