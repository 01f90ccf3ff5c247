//! Export table formatting.

use galley_core::{
    ExpandedResult, Mode, OutputTable, ResultEntry, RowTable, STORY_COLUMN, SUB_STORY_COLUMN,
    SourceCitation,
};
use std::collections::HashMap;
use tracing::debug;

/// Derived column holding the corrected story text.
pub const CORRECTED_STORY_COLUMN: &str = "corrected_story";

/// Derived column holding the corrected sub-story text.
pub const CORRECTED_SUB_STORY_COLUMN: &str = "corrected_sub-story";

/// Derived column holding the story verification analysis.
pub const STORY_ANALYSIS_COLUMN: &str = "story_analysis";

/// Derived column holding the sub-story verification analysis.
pub const SUB_STORY_ANALYSIS_COLUMN: &str = "substory_analysis";

/// Merge original rows with expanded results into export tables.
///
/// In correction mode, `corrected_story` and `corrected_sub-story` are
/// inserted directly after their source columns; a row with no result falls
/// back to its original field values, so the exported table always covers
/// every uploaded row. In fact-check mode the analysis columns are appended,
/// empty when no result exists, and a second sources table is returned when
/// any citations were collected. The internal row id is never emitted.
pub fn export(
    table: &RowTable,
    expanded: &[ExpandedResult],
    mode: Mode,
    sources: &[SourceCitation],
) -> (OutputTable, Option<OutputTable>) {
    let by_row: HashMap<usize, &ResultEntry> = expanded
        .iter()
        .map(|item| (item.row_id, &item.entry))
        .collect();

    let columns = output_columns(&table.columns, mode);
    let mut rows = Vec::with_capacity(table.len());

    for row in &table.rows {
        let result = by_row.get(&row.id).copied();
        let mut values = Vec::with_capacity(columns.len());

        for column in &table.columns {
            let original = row.field_or_empty(column);
            values.push(original.to_string());

            if mode == Mode::Correct {
                if column == STORY_COLUMN {
                    values.push(corrected_or(original, result, |r| &r.corrected_story));
                } else if column == SUB_STORY_COLUMN {
                    values.push(corrected_or(original, result, |r| &r.corrected_sub_story));
                }
            }
        }

        if mode == Mode::FactCheck {
            values.push(analysis_or_empty(result, |r| &r.story_analysis));
            values.push(analysis_or_empty(result, |r| &r.sub_story_analysis));
        }

        rows.push(values);
    }

    let sources_table = (!sources.is_empty()).then(|| OutputTable {
        columns: vec!["title".to_string(), "url".to_string()],
        rows: sources
            .iter()
            .map(|s| vec![s.title.clone(), s.url.clone()])
            .collect(),
    });

    debug!(
        rows = rows.len(),
        columns = columns.len(),
        sources = sources.len(),
        "Formatted export tables"
    );
    (OutputTable { columns, rows }, sources_table)
}

fn output_columns(original: &[String], mode: Mode) -> Vec<String> {
    let mut columns = Vec::with_capacity(original.len() + 2);
    for column in original {
        columns.push(column.clone());
        if mode == Mode::Correct {
            if column == STORY_COLUMN {
                columns.push(CORRECTED_STORY_COLUMN.to_string());
            } else if column == SUB_STORY_COLUMN {
                columns.push(CORRECTED_SUB_STORY_COLUMN.to_string());
            }
        }
    }
    if mode == Mode::FactCheck {
        columns.push(STORY_ANALYSIS_COLUMN.to_string());
        columns.push(SUB_STORY_ANALYSIS_COLUMN.to_string());
    }
    columns
}

fn corrected_or(
    original: &str,
    result: Option<&ResultEntry>,
    field: impl Fn(&ResultEntry) -> &Option<String>,
) -> String {
    result
        .and_then(|r| field(r).clone())
        .unwrap_or_else(|| original.to_string())
}

fn analysis_or_empty(
    result: Option<&ResultEntry>,
    field: impl Fn(&ResultEntry) -> &Option<String>,
) -> String {
    result.and_then(|r| field(r).clone()).unwrap_or_default()
}
