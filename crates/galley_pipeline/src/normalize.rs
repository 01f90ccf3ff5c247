//! Row normalization and schema validation.

use galley_core::{Row, RowTable, STORY_COLUMN, SUB_STORY_COLUMN};
use galley_error::{GalleyResult, TableError, TableErrorKind};
use std::collections::HashMap;
use tracing::debug;

/// One raw parsed record: field name to cell value, in source order.
pub type RawRecord = Vec<(String, String)>;

/// Normalize raw records into a [`RowTable`].
///
/// Field names are lower-cased (last-write-wins on collision after
/// lowering) and each row gets `id = index` in input order. Column order is
/// the first record's field order after normalization.
///
/// Schema validation runs on the first record only, as a cheap proxy for the
/// whole table: it must carry both `story` and `sub-story` after
/// normalization.
///
/// # Errors
///
/// - [`TableErrorKind::Empty`] when there are no records
/// - [`TableErrorKind::Malformed`] when a record has no fields
/// - [`TableErrorKind::MissingColumn`] when the first record lacks a
///   required column
pub fn normalize(records: &[RawRecord]) -> GalleyResult<RowTable> {
    if records.is_empty() {
        return Err(TableError::new(TableErrorKind::Empty).into());
    }

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (id, record) in records.iter().enumerate() {
        if record.is_empty() {
            return Err(TableError::new(TableErrorKind::Malformed(format!(
                "record {} has no fields",
                id
            )))
            .into());
        }

        let mut fields = HashMap::with_capacity(record.len());
        for (name, value) in record {
            let name = name.to_lowercase();
            if id == 0 && !columns.contains(&name) {
                columns.push(name.clone());
            }
            fields.insert(name, value.clone());
        }

        if id == 0 {
            for required in [STORY_COLUMN, SUB_STORY_COLUMN] {
                if !fields.contains_key(required) {
                    return Err(TableError::new(TableErrorKind::MissingColumn(
                        required.to_string(),
                    ))
                    .into());
                }
            }
        }

        rows.push(Row { id, fields });
    }

    debug!(rows = rows.len(), columns = columns.len(), "Normalized input table");
    Ok(RowTable { columns, rows })
}
