//! Column schema: which source columns map onto the canonical junction fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical column names, in output order
pub const CANONICAL_COLUMNS: [&str; 4] = ["reference", "start", "end", "read_count"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{table}: missing required column '{field}' (accepted names: {accepted})")]
    MissingColumn {
        table: String,
        field: &'static str,
        accepted: String,
    },

    #[error("{table} row {row}: empty value in key column '{column}'")]
    EmptyField {
        table: String,
        row: usize,
        column: String,
    },

    #[error("schema file {path}: {message}")]
    InvalidSchema { path: String, message: String },
}

/// Accepted source column names for each canonical field, in priority order
///
/// The first name present in a table's header wins. Matching is exact
/// (case-sensitive), except that header cells are trimmed first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub reference: Vec<String>,
    pub start: Vec<String>,
    pub end: Vec<String>,
    pub read_count: Vec<String>,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            reference: names(&["Reference", "Segment", "reference", "segment", "chrom"]),
            start: names(&["Start", "start"]),
            end: names(&["End", "end", "Stop", "stop"]),
            read_count: names(&["NGS_read_count", "read_count", "Count", "count"]),
        }
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// Header positions of the canonical fields within one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub reference: usize,
    pub start: usize,
    pub end: usize,
    pub read_count: usize,
}

impl ColumnSchema {
    /// Load a schema from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidSchema` if the file cannot be read, is not
    /// valid JSON, or leaves a field without any accepted column name.
    pub fn load_from_file(path: &Path) -> Result<Self, SchemaError> {
        let invalid = |message: String| SchemaError::InvalidSchema {
            path: path.display().to_string(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let schema: Self = serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;

        for (field, accepted) in schema.fields() {
            if accepted.is_empty() {
                return Err(invalid(format!("no column names given for '{field}'")));
            }
        }

        Ok(schema)
    }

    fn fields(&self) -> [(&'static str, &[String]); 4] {
        [
            (CANONICAL_COLUMNS[0], &self.reference),
            (CANONICAL_COLUMNS[1], &self.start),
            (CANONICAL_COLUMNS[2], &self.end),
            (CANONICAL_COLUMNS[3], &self.read_count),
        ]
    }

    /// Locate each canonical field in a table header
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MissingColumn` for the first canonical field that
    /// has no matching header cell.
    pub fn resolve(&self, headers: &[String], table: &str) -> Result<ResolvedColumns, SchemaError> {
        let find = |field: &'static str, accepted: &[String]| {
            accepted
                .iter()
                .find_map(|name| headers.iter().position(|h| h.trim() == name))
                .ok_or_else(|| SchemaError::MissingColumn {
                    table: table.to_string(),
                    field,
                    accepted: accepted.join(", "),
                })
        };

        let [reference, start, end, read_count] = self.fields();
        Ok(ResolvedColumns {
            reference: find(reference.0, reference.1)?,
            start: find(start.0, start.1)?,
            end: find(end.0, end.1)?,
            read_count: find(read_count.0, read_count.1)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cols: &[&str]) -> Vec<String> {
        names(cols)
    }

    #[test]
    fn test_resolve_reference_dataset_columns() {
        // Ground-truth tables name the segment column "Segment"
        let h = header(&["Segment", "Start", "End", "NGS_read_count", "Extra"]);
        let cols = ColumnSchema::default().resolve(&h, "valid.csv").unwrap();
        assert_eq!(
            cols,
            ResolvedColumns {
                reference: 0,
                start: 1,
                end: 2,
                read_count: 3
            }
        );
    }

    #[test]
    fn test_resolve_prefers_earlier_alias() {
        let h = header(&["Segment", "Reference", "Start", "End", "NGS_read_count"]);
        let cols = ColumnSchema::default().resolve(&h, "t").unwrap();
        assert_eq!(cols.reference, 1);
    }

    #[test]
    fn test_resolve_trims_header_cells() {
        let h = header(&[" Reference", "Start ", "End", "NGS_read_count"]);
        assert!(ColumnSchema::default().resolve(&h, "t").is_ok());
    }

    #[test]
    fn test_missing_column() {
        let h = header(&["Reference", "Start", "NGS_read_count"]);
        let err = ColumnSchema::default().resolve(&h, "own.csv").unwrap_err();
        match err {
            SchemaError::MissingColumn { table, field, .. } => {
                assert_eq!(table, "own.csv");
                assert_eq!(field, "end");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let h = header(&["REFERENCE", "Start", "End", "NGS_read_count"]);
        assert!(ColumnSchema::default().resolve(&h, "t").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(
            &path,
            r#"{"reference":["seg"],"start":["from"],"end":["to"],"read_count":["reads"]}"#,
        )
        .unwrap();

        let schema = ColumnSchema::load_from_file(&path).unwrap();
        let cols = schema
            .resolve(&header(&["reads", "to", "from", "seg"]), "t")
            .unwrap();
        assert_eq!(cols.reference, 3);
        assert_eq!(cols.read_count, 0);
    }

    #[test]
    fn test_load_rejects_empty_alias_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(
            &path,
            r#"{"reference":[],"start":["from"],"end":["to"],"read_count":["reads"]}"#,
        )
        .unwrap();

        assert!(matches!(
            ColumnSchema::load_from_file(&path),
            Err(SchemaError::InvalidSchema { .. })
        ));
    }
}
