//! Progress reporting types.

use serde::{Deserialize, Serialize};

/// A progress update for the status channel.
///
/// Emitted before each chunk dispatch and at completion or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Human-readable status message
    pub message: String,
    /// Completion percentage, 0 through 100
    pub percent: u8,
}

impl ProgressReport {
    /// Create a new report, clamping percent to 100.
    pub fn new(message: impl Into<String>, percent: u8) -> Self {
        Self {
            message: message.into(),
            percent: percent.min(100),
        }
    }
}
