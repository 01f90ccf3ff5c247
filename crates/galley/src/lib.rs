//! Galley - Deduplicating LLM Proofreading Pipeline
//!
//! Galley takes a table of narrative rows, deduplicates identical
//! (story, sub-story) pairs, sends each unique pair to a hosted language
//! model for spelling correction or fact-checking, and reassembles the
//! results back onto every original row for review and re-export.
//!
//! # Features
//!
//! - **Content-exact deduplication**: identical pairs are revised once and
//!   the result is shared by every row in the group
//! - **Paced batch dispatch**: fixed-size chunks, one in-flight request at a
//!   time, with a static inter-chunk delay
//! - **Driver seam**: the remote call is a trait, so the pipeline runs
//!   against a deterministic stub in tests
//! - **Two modes**: spelling correction and web-grounded fact-checking with
//!   source citations
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use galley::{GeminiReviser, Mode, ProofExecutor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     galley::init_tracing()?;
//!     let config = galley::GalleyConfig::load()?;
//!
//!     let executor = ProofExecutor::new(GeminiReviser::new()?)
//!         .with_options(config.dispatch.run_options());
//!     let output = executor.run(&records, Mode::Correct).await?;
//!     println!("{} rows exported", output.table.rows.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Galley is organized as a workspace with focused crates:
//!
//! - `galley_error` - Error types
//! - `galley_core` - Core data types (rows, canonical entries, results)
//! - `galley_interface` - RevisionDriver and ProgressSink traits
//! - `galley_models` - Remote driver implementations (Gemini)
//! - `galley_pipeline` - Normalize, deduplicate, dispatch, reconcile, export
//!
//! This crate (`galley`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod telemetry;

pub use config::{DispatchConfig, GalleyConfig, ProviderConfig};
pub use telemetry::init_tracing;

pub use galley_core::*;
pub use galley_error::*;
pub use galley_interface::*;
pub use galley_models::{GeminiReviser, collect_sources, parse_entries};
pub use galley_pipeline::*;
