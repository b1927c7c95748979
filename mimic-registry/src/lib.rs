//! # mimic-registry
//!
//! Maps community ids to chain models. Each community's model is owned by a
//! dedicated Tokio task fed through a bounded mailbox, so operations on one
//! community run strictly in submission order while different communities
//! proceed in parallel.
//!
//! ## Modules
//!
//! - [`registry`] — `ModelRegistry`, the public entry point
//! - [`worker`] — Per-community worker task and its command set

pub mod registry;
pub mod worker;

pub use registry::{ModelRegistry, PolicyFactory};
