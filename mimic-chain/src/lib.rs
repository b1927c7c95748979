//! # mimic-chain
//!
//! The statistical text engine of one community: a k-order Markov chain over
//! lower-cased word tokens.
//!
//! ## Modules
//!
//! - [`tokenizer`] — Fixed tokenization policy
//! - [`table`] — `TransitionTable` of context → weighted successors
//! - [`sampling`] — Replaceable sampling policies (`ISamplingPolicy`)
//! - [`model`] — `ChainModel`: ingest, generate, remove, render
//! - [`knowledge`] — Conversion to and from the rendered knowledge base

pub mod knowledge;
pub mod model;
pub mod sampling;
pub mod table;
pub mod tokenizer;

pub use model::ChainModel;
pub use sampling::{policy_for, FrequencyWeighted, ISamplingPolicy, Uniform};
pub use table::{Context, Successors, TransitionTable};
pub use tokenizer::tokenize;
