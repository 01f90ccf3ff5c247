//! The Galley run pipeline.
//!
//! This crate wires the pipeline stages together: normalize rows, deduplicate
//! identical (story, sub-story) pairs, dispatch canonical entries to a remote
//! revision driver in paced chunks, reconcile results back onto every original
//! row, and format the export tables.
//!
//! Data flows strictly left to right; no stage calls back into an earlier one.
//! All per-run mutable state lives in a [`RunContext`] owned by the run.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod dedup;
mod executor;
mod export;
mod normalize;
mod options;
mod reconcile;
mod state;

pub use context::RunContext;
pub use dedup::deduplicate;
pub use executor::{ProofExecutor, RunOutput};
pub use export::{
    CORRECTED_STORY_COLUMN, CORRECTED_SUB_STORY_COLUMN, STORY_ANALYSIS_COLUMN,
    SUB_STORY_ANALYSIS_COLUMN, export,
};
pub use normalize::{RawRecord, normalize};
pub use options::RunOptions;
pub use reconcile::reconcile;
pub use state::RunState;
