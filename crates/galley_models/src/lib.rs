//! Remote revision driver implementations for Galley.
//!
//! This crate provides the concrete [`RevisionDriver`] backends. Currently
//! one is shipped: [`GeminiReviser`], which talks to the Google Gemini
//! `generateContent` REST endpoint.
//!
//! # Example
//!
//! ```no_run
//! use galley_core::{CanonicalEntry, Mode};
//! use galley_interface::RevisionDriver;
//! use galley_models::GeminiReviser;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reviser = GeminiReviser::new()?;
//! let chunk = vec![CanonicalEntry::new(0, "Teh cat", "ran")];
//! let batch = reviser.revise(&chunk, Mode::Correct).await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`RevisionDriver`]: galley_interface::RevisionDriver

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    CORRECTION_SYSTEM_INSTRUCTION, FACT_CHECK_SYSTEM_INSTRUCTION, GeminiReviser,
    GenerateContentResponse, collect_sources, parse_entries, user_payload,
};
