//! Input table error types.

/// Specific input table error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TableErrorKind {
    /// A record could not be used as a row
    #[display("Malformed input record: {}", _0)]
    Malformed(String),

    /// Required column missing after field-name normalization
    #[display("Missing required column: {}", _0)]
    MissingColumn(String),

    /// The table has no rows to process
    #[display("No rows to process")]
    Empty,
}

/// Input table error with source location tracking.
///
/// # Examples
///
/// ```
/// use galley_error::{TableError, TableErrorKind};
///
/// let err = TableError::new(TableErrorKind::MissingColumn("sub-story".to_string()));
/// assert!(format!("{}", err).contains("sub-story"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Table Error: {} at line {} in {}", kind, line, file)]
pub struct TableError {
    /// The kind of error that occurred
    pub kind: TableErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TableError {
    /// Create a new TableError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TableErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TableErrorKind {
        &self.kind
    }
}
