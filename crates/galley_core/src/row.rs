//! Normalized input rows.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Required column holding the main narrative text.
pub const STORY_COLUMN: &str = "story";

/// Required column holding the secondary narrative text.
pub const SUB_STORY_COLUMN: &str = "sub-story";

/// One normalized input row.
///
/// Field names are lower-cased at normalization time and the id is the row's
/// position in the original upload. Rows are immutable once built.
///
/// # Examples
///
/// ```
/// use galley_core::Row;
/// use std::collections::HashMap;
///
/// let mut fields = HashMap::new();
/// fields.insert("story".to_string(), "Teh cat".to_string());
/// let row = Row { id: 0, fields };
///
/// assert_eq!(row.field("story"), Some("Teh cat"));
/// assert_eq!(row.field_or_empty("sub-story"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Position of the row in the original upload, stable for the session
    pub id: usize,
    /// Lower-cased field name to cell value
    pub fields: HashMap<String, String>,
}

impl Row {
    /// Look up a field value by its normalized name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.as_str())
    }

    /// Look up a field value, treating a missing field as the empty string.
    pub fn field_or_empty(&self, name: &str) -> &str {
        self.field(name).unwrap_or("")
    }
}

/// The normalized input table: ordered column names plus rows.
///
/// Column order is the first record's field order after normalization, so
/// extra columns pass through to the export in their original positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowTable {
    /// Normalized column names in first-seen order
    pub columns: Vec<String>,
    /// The normalized rows, in upload order
    pub rows: Vec<Row>,
}

impl RowTable {
    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
