//! Pipeline execution logic.
//!
//! This module provides the executor that drives a full run: validate and
//! normalize the upload, deduplicate, dispatch paced chunks to the remote
//! driver, reconcile, and format the export tables.

use crate::{
    RawRecord, RunContext, RunOptions, RunState, deduplicate, export, normalize, reconcile,
};
use galley_core::{ExpandedResult, Mode, OutputTable};
use galley_error::GalleyResult;
use galley_interface::{NullSink, ProgressSink, RevisionDriver};
use tracing::{error, info};

/// Everything a completed run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    /// The merged export table, one row per uploaded row
    pub table: OutputTable,
    /// The sources table, when fact-checking collected any citations
    pub sources: Option<OutputTable>,
    /// The reconciled results, one per row whose canonical entry was answered
    pub expanded: Vec<ExpandedResult>,
}

/// Executes pipeline runs against a remote revision driver.
///
/// The executor issues one remote call at a time and awaits it before
/// continuing; the inter-chunk pacing delay is an awaited sleep on the same
/// task. Any failure aborts the run immediately and discards everything
/// accumulated so far — there is no retry and no partial commit. Per-run
/// state lives in a fresh [`RunContext`], so consecutive runs on the same
/// executor share nothing.
///
/// # Example
///
/// ```rust,ignore
/// use galley_pipeline::{ProofExecutor, RunOptions};
/// use galley_models::GeminiReviser;
///
/// let executor = ProofExecutor::new(GeminiReviser::new()?)
///     .with_options(RunOptions::default());
/// let output = executor.run(&records, Mode::Correct).await?;
/// ```
pub struct ProofExecutor<D: RevisionDriver> {
    driver: D,
    options: RunOptions,
    sink: Box<dyn ProgressSink>,
}

impl<D: RevisionDriver> ProofExecutor<D> {
    /// Create a new executor with default options and no progress reporting.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            options: RunOptions::default(),
            sink: Box::new(NullSink),
        }
    }

    /// Override the chunking and pacing options.
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach a progress sink for the status channel.
    pub fn with_progress(mut self, sink: Box<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run the whole pipeline on one upload.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload is empty or fails schema validation,
    /// or if any remote call fails or returns an unusable payload. All
    /// errors are terminal for the run; the caller restarts from scratch.
    #[tracing::instrument(
        skip(self, records),
        fields(records = records.len(), mode = %mode, provider = self.driver.provider_name())
    )]
    pub async fn run(&self, records: &[RawRecord], mode: Mode) -> GalleyResult<RunOutput> {
        let mut ctx = RunContext::new(self.sink.as_ref());

        match self.run_inner(records, mode, &mut ctx).await {
            Ok(output) => {
                ctx.transition(RunState::Done);
                ctx.report("Done", 100);
                info!(rows = output.table.rows.len(), "Run complete");
                Ok(output)
            }
            Err(e) => {
                ctx.transition(RunState::Failed);
                let percent = ctx.last_percent();
                ctx.report(format!("Failed: {}", e), percent);
                error!(error = %e, "Run aborted; accumulated results discarded");
                Err(e)
            }
        }
    }

    async fn run_inner(
        &self,
        records: &[RawRecord],
        mode: Mode,
        ctx: &mut RunContext<'_>,
    ) -> GalleyResult<RunOutput> {
        ctx.transition(RunState::Validating);
        let table = normalize(records)?;

        ctx.transition(RunState::Deduplicating);
        let (entries, index) = deduplicate(&table);

        let chunk_size = self.options.chunk_size.max(1);
        let total = entries.len().div_ceil(chunk_size);
        ctx.set_chunks_total(total);

        for (i, chunk) in entries.chunks(chunk_size).enumerate() {
            ctx.transition(RunState::Dispatching(i));
            ctx.report(
                format!("Processing chunk {}/{}", i + 1, total),
                ((i * 100) / total) as u8,
            );

            let batch = self.driver.revise(chunk, mode).await?;
            ctx.absorb(batch);

            if i + 1 < total {
                ctx.transition(RunState::Delaying);
                tokio::time::sleep(self.options.pacing).await;
            }
        }

        ctx.transition(RunState::Reconciling);
        let expanded = reconcile(&entries, &index, ctx.results());
        let (output, sources) = export(&table, &expanded, mode, ctx.sources());

        Ok(RunOutput {
            table: output,
            sources,
            expanded,
        })
    }
}
