//! Processing mode selection.

use serde::{Deserialize, Serialize};

/// Which remote operation a run performs.
///
/// # Examples
///
/// ```
/// use galley_core::Mode;
///
/// assert_ne!(Mode::Correct, Mode::FactCheck);
/// assert_eq!(format!("{}", Mode::Correct), "Correct");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mode {
    /// Spelling correction only; fields come back unchanged or corrected
    Correct,
    /// Claim verification with web search; fields come back as analysis text
    FactCheck,
}
