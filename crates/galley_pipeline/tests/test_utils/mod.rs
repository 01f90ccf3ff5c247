//! Test utilities for Galley pipeline tests.
//!
//! This module provides a deterministic mock revision driver and a progress
//! sink that records every report.

use async_trait::async_trait;
use galley_core::{
    CanonicalEntry, Mode, ProgressReport, ResultEntry, RevisionBatch, SourceCitation,
};
use galley_error::{GalleyResult, RemoteError, RemoteErrorKind};
use galley_interface::{ProgressSink, RevisionDriver};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock batches.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Echo every entry back as its own correction
    Echo,
    /// Echo, overriding specific canonical ids with fixed corrections
    Corrections(HashMap<usize, (String, String)>),
    /// Return exactly these entries for every call, ignoring the input
    Fixed(Vec<ResultEntry>),
    /// Fixed analysis text per entry plus source citations (fact-check)
    Analyses {
        analysis: String,
        sources: Vec<SourceCitation>,
    },
    /// Echo, omitting the given canonical ids from every response
    Omitting(HashSet<usize>),
    /// Always fail with the given error kind
    Error(RemoteErrorKind),
    /// Fail with the error on the given 0-based call, echo otherwise
    ErrorOnCall {
        call: usize,
        error: RemoteErrorKind,
    },
}

/// Mock revision driver for testing.
///
/// Records every chunk it receives so tests can verify chunking and call
/// counts without a live backend.
pub struct MockReviser {
    behavior: MockBehavior,
    chunks: Arc<Mutex<Vec<Vec<CanonicalEntry>>>>,
}

#[allow(dead_code)]
impl MockReviser {
    /// A driver that echoes every entry back as its own correction.
    pub fn echo() -> Self {
        Self::with_behavior(MockBehavior::Echo)
    }

    /// A driver that echoes, overriding the given ids with corrections.
    pub fn correcting(corrections: &[(usize, &str, &str)]) -> Self {
        let map = corrections
            .iter()
            .map(|(id, story, sub)| (*id, (story.to_string(), sub.to_string())))
            .collect();
        Self::with_behavior(MockBehavior::Corrections(map))
    }

    /// A driver that returns exactly these entries on every call.
    pub fn fixed(entries: Vec<ResultEntry>) -> Self {
        Self::with_behavior(MockBehavior::Fixed(entries))
    }

    /// A fact-check driver returning the same analysis for every entry.
    pub fn analyzing(analysis: impl Into<String>, sources: Vec<SourceCitation>) -> Self {
        Self::with_behavior(MockBehavior::Analyses {
            analysis: analysis.into(),
            sources,
        })
    }

    /// A driver that echoes but never answers the given canonical ids.
    pub fn omitting(ids: &[usize]) -> Self {
        Self::with_behavior(MockBehavior::Omitting(ids.iter().copied().collect()))
    }

    /// A driver that always fails.
    pub fn failing(error: RemoteErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Error(error))
    }

    /// A driver that fails on one specific call and echoes otherwise.
    pub fn failing_on(call: usize, error: RemoteErrorKind) -> Self {
        Self::with_behavior(MockBehavior::ErrorOnCall { call, error })
    }

    /// A driver with custom behavior.
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            chunks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times revise() was called.
    pub fn call_count(&self) -> usize {
        self.chunks.lock().unwrap().len()
    }

    /// Every chunk received, in call order.
    pub fn chunks(&self) -> Vec<Vec<CanonicalEntry>> {
        self.chunks.lock().unwrap().clone()
    }

    /// A handle onto the chunk log that stays valid after the mock moves
    /// into an executor.
    pub fn chunk_log(&self) -> Arc<Mutex<Vec<Vec<CanonicalEntry>>>> {
        Arc::clone(&self.chunks)
    }

    fn echo_entry(entry: &CanonicalEntry) -> ResultEntry {
        ResultEntry {
            canonical_id: entry.canonical_id,
            corrected_story: Some(entry.story.clone()),
            corrected_sub_story: Some(entry.sub_story.clone()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl RevisionDriver for MockReviser {
    async fn revise(&self, chunk: &[CanonicalEntry], _mode: Mode) -> GalleyResult<RevisionBatch> {
        let call = {
            let mut chunks = self.chunks.lock().unwrap();
            chunks.push(chunk.to_vec());
            chunks.len() - 1
        };

        match &self.behavior {
            MockBehavior::Echo => Ok(RevisionBatch {
                entries: chunk.iter().map(Self::echo_entry).collect(),
                sources: Vec::new(),
            }),
            MockBehavior::Corrections(map) => {
                let entries = chunk
                    .iter()
                    .map(|entry| match map.get(&entry.canonical_id) {
                        Some((story, sub)) => ResultEntry {
                            canonical_id: entry.canonical_id,
                            corrected_story: Some(story.clone()),
                            corrected_sub_story: Some(sub.clone()),
                            ..Default::default()
                        },
                        None => Self::echo_entry(entry),
                    })
                    .collect();
                Ok(RevisionBatch {
                    entries,
                    sources: Vec::new(),
                })
            }
            MockBehavior::Fixed(entries) => Ok(RevisionBatch {
                entries: entries.clone(),
                sources: Vec::new(),
            }),
            MockBehavior::Analyses { analysis, sources } => {
                let entries = chunk
                    .iter()
                    .map(|entry| ResultEntry {
                        canonical_id: entry.canonical_id,
                        story_analysis: Some(analysis.clone()),
                        sub_story_analysis: Some(analysis.clone()),
                        ..Default::default()
                    })
                    .collect();
                let sources = if call == 0 { sources.clone() } else { Vec::new() };
                Ok(RevisionBatch { entries, sources })
            }
            MockBehavior::Omitting(ids) => Ok(RevisionBatch {
                entries: chunk
                    .iter()
                    .filter(|entry| !ids.contains(&entry.canonical_id))
                    .map(Self::echo_entry)
                    .collect(),
                sources: Vec::new(),
            }),
            MockBehavior::Error(error) => Err(RemoteError::new(error.clone()).into()),
            MockBehavior::ErrorOnCall { call: failing, error } => {
                if call == *failing {
                    Err(RemoteError::new(error.clone()).into())
                } else {
                    Ok(RevisionBatch {
                        entries: chunk.iter().map(Self::echo_entry).collect(),
                        sources: Vec::new(),
                    })
                }
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-reviser"
    }
}

/// A sink that records every progress report.
///
/// Clones share the same report log, so a test can keep one handle while
/// handing another to the executor.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    reports: Arc<Mutex<Vec<ProgressReport>>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<ProgressReport> {
        self.reports.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingSink {
    fn update(&self, report: &ProgressReport) {
        self.reports.lock().unwrap().push(report.clone());
    }
}
