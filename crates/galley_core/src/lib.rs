//! Core data types for the Galley proofreading pipeline.
//!
//! This crate provides the foundation data types shared by the pipeline
//! stages and the remote revision drivers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod canonical;
mod mode;
mod output;
mod progress;
mod result;
mod row;

pub use canonical::{CanonicalEntry, GroupIndex, KEY_SEPARATOR, content_key};
pub use mode::Mode;
pub use output::OutputTable;
pub use progress::ProgressReport;
pub use result::{ExpandedResult, ResultEntry, RevisionBatch, SourceCitation};
pub use row::{Row, RowTable, STORY_COLUMN, SUB_STORY_COLUMN};
