//! Progress reporting seam.

use galley_core::ProgressReport;

/// Receives status updates from a pipeline run.
///
/// The executor calls this before each chunk dispatch and once at completion
/// or failure. Implementations should return quickly; the pipeline blocks on
/// the call.
pub trait ProgressSink: Send + Sync {
    /// Deliver one progress update.
    fn update(&self, report: &ProgressReport);
}

/// A sink that discards every update.
///
/// # Examples
///
/// ```
/// use galley_core::ProgressReport;
/// use galley_interface::{NullSink, ProgressSink};
///
/// NullSink.update(&ProgressReport::new("working", 50));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn update(&self, _report: &ProgressReport) {}
}
