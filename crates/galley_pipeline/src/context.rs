//! Per-run mutable state.

use crate::RunState;
use galley_core::{ProgressReport, ResultEntry, RevisionBatch, SourceCitation};
use galley_interface::ProgressSink;
use tracing::debug;

/// Accumulators and progress counters for one pipeline run.
///
/// Exclusively owned by the run that created it; a new run starts from a
/// fresh context, so nothing leaks between runs.
pub struct RunContext<'a> {
    sink: &'a dyn ProgressSink,
    state: RunState,
    chunks_total: usize,
    last_percent: u8,
    results: Vec<ResultEntry>,
    sources: Vec<SourceCitation>,
}

impl<'a> RunContext<'a> {
    /// Create a fresh context reporting to the given sink.
    pub fn new(sink: &'a dyn ProgressSink) -> Self {
        Self {
            sink,
            state: RunState::Idle,
            chunks_total: 0,
            last_percent: 0,
            results: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// Move to a new state.
    pub fn transition(&mut self, state: RunState) {
        debug!(from = %self.state, to = %state, "Run state transition");
        self.state = state;
    }

    /// Emit a progress update through the sink.
    pub fn report(&mut self, message: impl Into<String>, percent: u8) {
        self.last_percent = percent.min(100);
        self.sink.update(&ProgressReport::new(message, self.last_percent));
    }

    /// Record the total number of chunks for this run.
    pub fn set_chunks_total(&mut self, total: usize) {
        self.chunks_total = total;
    }

    /// Absorb one remote batch into the accumulators.
    pub fn absorb(&mut self, batch: RevisionBatch) {
        self.results.extend(batch.entries);
        self.sources.extend(batch.sources);
    }

    /// The current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Total chunks planned for the dispatch phase.
    pub fn chunks_total(&self) -> usize {
        self.chunks_total
    }

    /// The most recently reported percent.
    pub fn last_percent(&self) -> u8 {
        self.last_percent
    }

    /// Results accumulated so far, in arrival order.
    pub fn results(&self) -> &[ResultEntry] {
        &self.results
    }

    /// Source citations accumulated so far, in arrival order.
    pub fn sources(&self) -> &[SourceCitation] {
        &self.sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_interface::NullSink;

    #[test]
    fn test_fresh_context_starts_idle_and_empty() {
        let ctx = RunContext::new(&NullSink);
        assert_eq!(ctx.state(), RunState::Idle);
        assert_eq!(ctx.chunks_total(), 0);
        assert_eq!(ctx.last_percent(), 0);
        assert!(ctx.results().is_empty());
        assert!(ctx.sources().is_empty());
    }

    #[test]
    fn test_absorb_appends_in_arrival_order() {
        let mut ctx = RunContext::new(&NullSink);
        ctx.absorb(RevisionBatch {
            entries: vec![ResultEntry {
                canonical_id: 0,
                ..Default::default()
            }],
            sources: Vec::new(),
        });
        ctx.absorb(RevisionBatch {
            entries: vec![ResultEntry {
                canonical_id: 1,
                ..Default::default()
            }],
            sources: vec![SourceCitation {
                title: "Example".to_string(),
                url: "https://example.com".to_string(),
            }],
        });

        let ids: Vec<usize> = ctx.results().iter().map(|r| r.canonical_id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(ctx.sources().len(), 1);
    }

    #[test]
    fn test_report_clamps_percent() {
        let mut ctx = RunContext::new(&NullSink);
        ctx.report("over", 250);
        assert_eq!(ctx.last_percent(), 100);
    }
}
