//! Dispatch tuning knobs.

use std::time::Duration;

/// Chunking and pacing parameters for the batch dispatcher.
///
/// The defaults match the service limits the pipeline was built against:
/// chunks of 20 canonical entries with a 1500 ms pause between remote calls.
/// The pause is a static throughput cap, not adaptive backoff.
///
/// # Examples
///
/// ```
/// use galley_pipeline::RunOptions;
/// use std::time::Duration;
///
/// let options = RunOptions::default();
/// assert_eq!(options.chunk_size, 20);
/// assert_eq!(options.pacing, Duration::from_millis(1500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum canonical entries per remote call
    pub chunk_size: usize,
    /// Pause inserted after every chunk except the last
    pub pacing: Duration,
}

impl RunOptions {
    /// Create options with explicit values; a zero chunk size is bumped to 1.
    pub fn new(chunk_size: usize, pacing: Duration) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            pacing,
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            chunk_size: 20,
            pacing: Duration::from_millis(1500),
        }
    }
}
