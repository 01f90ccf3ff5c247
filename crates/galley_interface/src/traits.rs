//! Trait definitions for remote revision backends.

use async_trait::async_trait;
use galley_core::{CanonicalEntry, Mode, RevisionBatch};
use galley_error::GalleyResult;

/// Core trait that all remote revision backends must implement.
///
/// One call covers one chunk of canonical entries. The implementation is
/// expected — not guaranteed — to return exactly one result per input entry
/// with matching ids; callers must tolerate sparse or reordered responses.
/// A same-length-or-fewer batch is the contract; anything that cannot be
/// decoded to that shape is an error.
#[async_trait]
pub trait RevisionDriver: Send + Sync {
    /// Revise one chunk of canonical entries in the given mode.
    async fn revise(&self, chunk: &[CanonicalEntry], mode: Mode) -> GalleyResult<RevisionBatch>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash-lite").
    fn model_name(&self) -> &str;
}
