//! Run state machine.

/// The states a pipeline run moves through.
///
/// `Idle → Validating → Deduplicating → Dispatching(0) → Delaying →
/// Dispatching(1) → … → Reconciling → Done`, with any failure transitioning
/// directly to `Failed`. `Done` and `Failed` are terminal; there is no
/// cancelled state — an abandoned run simply drops its context.
///
/// # Examples
///
/// ```
/// use galley_pipeline::RunState;
///
/// assert_eq!(format!("{}", RunState::Dispatching(2)), "Dispatching chunk 2");
/// assert_eq!(format!("{}", RunState::Done), "Done");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RunState {
    /// No run in progress
    Idle,
    /// Normalizing rows and checking the schema
    Validating,
    /// Grouping rows by identical content
    Deduplicating,
    /// Waiting on the remote call for the given chunk
    #[display("Dispatching chunk {}", _0)]
    Dispatching(usize),
    /// Pacing delay between chunks
    Delaying,
    /// Expanding results back onto original rows
    Reconciling,
    /// Run finished, results available
    Done,
    /// Run aborted; accumulated results were discarded
    Failed,
}

impl RunState {
    /// Whether the run can no longer make progress.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }
}
