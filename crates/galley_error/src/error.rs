//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, RemoteError, TableError};

/// This is the foundation error enum. Each variant wraps one of the
/// domain-specific error types defined in this crate.
///
/// # Examples
///
/// ```
/// use galley_error::{GalleyError, TableError, TableErrorKind};
///
/// let table_err = TableError::new(TableErrorKind::Empty);
/// let err: GalleyError = table_err.into();
/// assert!(format!("{}", err).contains("No rows"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GalleyErrorKind {
    /// Input table error
    #[from(TableError)]
    Table(TableError),
    /// Remote revision call error
    #[from(RemoteError)]
    Remote(RemoteError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Galley error with kind discrimination.
///
/// # Examples
///
/// ```
/// use galley_error::{GalleyResult, TableError, TableErrorKind};
///
/// fn might_fail() -> GalleyResult<()> {
///     Err(TableError::new(TableErrorKind::Empty))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Galley Error: {}", _0)]
pub struct GalleyError(Box<GalleyErrorKind>);

impl GalleyError {
    /// Create a new error from a kind.
    pub fn new(kind: GalleyErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GalleyErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to GalleyErrorKind
impl<T> From<T> for GalleyError
where
    T: Into<GalleyErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Galley operations.
///
/// # Examples
///
/// ```
/// use galley_error::{GalleyResult, RemoteError, RemoteErrorKind};
///
/// fn call_remote() -> GalleyResult<String> {
///     Err(RemoteError::new(RemoteErrorKind::ApiRequest("timeout".to_string())))?
/// }
/// ```
pub type GalleyResult<T> = std::result::Result<T, GalleyError>;
