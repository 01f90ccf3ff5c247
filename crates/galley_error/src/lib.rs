//! Error types for the Galley library.
//!
//! This crate provides the foundation error types used throughout the Galley
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use galley_error::{GalleyResult, RemoteError, RemoteErrorKind};
//!
//! fn call_model() -> GalleyResult<String> {
//!     Err(RemoteError::new(RemoteErrorKind::EmptyResponse))?
//! }
//!
//! match call_model() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod remote;
mod table;

pub use config::ConfigError;
pub use error::{GalleyError, GalleyErrorKind, GalleyResult};
pub use json::JsonError;
pub use remote::{RemoteError, RemoteErrorKind};
pub use table::{TableError, TableErrorKind};
