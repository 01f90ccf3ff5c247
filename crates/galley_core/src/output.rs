//! Export-ready output tables.

use serde::{Deserialize, Serialize};

/// A row-oriented table ready for tabular export.
///
/// Every row holds one value per column, aligned positionally with
/// `columns`. The pipeline's internal row id never appears here.
///
/// # Examples
///
/// ```
/// use galley_core::OutputTable;
///
/// let table = OutputTable {
///     columns: vec!["title".to_string(), "url".to_string()],
///     rows: vec![vec!["Example".to_string(), "https://example.com".to_string()]],
/// };
/// assert_eq!(table.column("url"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputTable {
    /// Column names, in export order
    pub columns: Vec<String>,
    /// Row values, aligned with `columns`
    pub rows: Vec<Vec<String>>,
}

impl OutputTable {
    /// Position of a column by name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell value by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column(column)?;
        self.rows.get(row)?.get(col).map(|v| v.as_str())
    }
}
