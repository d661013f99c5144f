//! Readers and normalizers for junction call tables.
//!
//! This module provides:
//!
//! - **Table reading** ([`table`]): CSV/TSV files, optionally gzip-compressed
//! - **Column schema** ([`schema`]): maps source-specific column names onto
//!   the canonical `reference`, `start`, `end`, `read_count` fields
//! - **Normalization** ([`normalize`]): type coercion and reference-name cleanup
//!
//! ## Example
//!
//! ```rust,no_run
//! use junction_recon::parsing::{load_records, ColumnSchema};
//! use std::path::Path;
//!
//! let records = load_records(Path::new("valid.csv"), &ColumnSchema::default()).unwrap();
//! println!("{} junction rows", records.len());
//! ```
//!
//! ## Default Column Names
//!
//! | Canonical field | Accepted source columns |
//! |-----------------|-------------------------|
//! | `reference` | Reference, Segment, reference, segment, chrom |
//! | `start` | Start, start |
//! | `end` | End, end, Stop, stop |
//! | `read_count` | `NGS_read_count`, `read_count`, Count, count |

use std::path::Path;

use thiserror::Error;

use crate::core::record::JunctionRecord;

pub mod normalize;
pub mod schema;
pub mod table;

pub use schema::{ColumnSchema, SchemaError};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("read: {table}: {source}")]
    Io {
        table: String,
        source: std::io::Error,
    },

    #[error("read: {table}: malformed table: {message}")]
    Csv { table: String, message: String },

    #[error("normalize: {0}")]
    Schema(#[from] SchemaError),

    #[error("normalize: {table} row {row}: column '{column}' is not an integer: '{value}'")]
    NonNumericField {
        table: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("normalize: {table} row {row}: read count must not be negative, got {value}")]
    NegativeCount {
        table: String,
        row: usize,
        value: i64,
    },

    #[error("read: {table}: too many records ({count} exceeds maximum allowed)")]
    TooManyRecords { table: String, count: usize },
}

/// Read and normalize a junction table file
///
/// # Errors
///
/// Returns any error from [`table::read_table_file`] or
/// [`normalize::normalize_table`].
pub fn load_records(path: &Path, schema: &ColumnSchema) -> Result<Vec<JunctionRecord>, ParseError> {
    let raw = table::read_table_file(path)?;
    normalize::normalize_table(&raw, schema)
}
