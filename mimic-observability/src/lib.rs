//! # mimic-observability
//!
//! Tracing subscriber setup driven by [`ObservabilityConfig`](mimic_core::config::ObservabilityConfig),
//! plus the span constructors shared by the other crates.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing};
