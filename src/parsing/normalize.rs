//! Record normalizer: maps raw table rows onto [`JunctionRecord`]s.

use tracing::debug;

use crate::core::record::JunctionRecord;
use crate::parsing::schema::{ColumnSchema, ResolvedColumns, SchemaError};
use crate::parsing::table::RawTable;
use crate::parsing::ParseError;
use crate::utils::validation::{canonicalize_reference, coerce_integer};

/// Normalize every row of a raw table
///
/// The header is resolved against `schema` before any row is looked at, so a
/// missing column fails even when the table has no data rows. The first bad
/// row aborts normalization; no partial output is returned.
///
/// # Errors
///
/// Returns `ParseError::Schema` if a required column is missing or a key cell
/// is empty, `ParseError::NonNumericField` if a coordinate or count cannot be
/// read as an integer, or `ParseError::NegativeCount` for negative counts.
pub fn normalize_table(
    raw: &RawTable,
    schema: &ColumnSchema,
) -> Result<Vec<JunctionRecord>, ParseError> {
    let columns = schema.resolve(&raw.headers, &raw.source)?;

    let records = raw
        .rows
        .iter()
        .enumerate()
        // Row numbers in errors are 1-based for user friendliness
        .map(|(i, cells)| normalize_row(raw, &columns, i + 1, cells))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        table = %raw.source,
        rows = records.len(),
        "Normalized junction table"
    );

    Ok(records)
}

/// Normalize a single data row
///
/// `row` is the 1-based data-row number used in error messages.
///
/// # Errors
///
/// See [`normalize_table`].
pub fn normalize_row(
    raw: &RawTable,
    columns: &ResolvedColumns,
    row: usize,
    cells: &[String],
) -> Result<JunctionRecord, ParseError> {
    let cell = |idx: usize| cells.get(idx).map_or("", String::as_str);

    let reference = canonicalize_reference(cell(columns.reference));
    if reference.is_empty() {
        return Err(SchemaError::EmptyField {
            table: raw.source.clone(),
            row,
            column: raw.headers[columns.reference].trim().to_string(),
        }
        .into());
    }

    let integer = |idx: usize| {
        let value = cell(idx);
        coerce_integer(value).ok_or_else(|| ParseError::NonNumericField {
            table: raw.source.clone(),
            row,
            column: raw.headers[idx].trim().to_string(),
            value: value.to_string(),
        })
    };

    let start = integer(columns.start)?;
    let end = integer(columns.end)?;
    let read_count = integer(columns.read_count)?;

    if read_count < 0 {
        return Err(ParseError::NegativeCount {
            table: raw.source.clone(),
            row,
            value: read_count,
        });
    }

    Ok(JunctionRecord {
        reference,
        start,
        end,
        read_count,
    })
}
