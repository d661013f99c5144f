//! # junction-recon
//!
//! A library for reconciling tables of recombination-junction calls.
//!
//! A junction is a `(reference, start, end)` coordinate pair with a supporting
//! read count. Given a trusted table and a locally produced one, this crate
//! merges duplicate rows, classifies every junction as missing, extra, or
//! count-mismatched, and lays out an area-proportional two-circle diagram of
//! the overlap.
//!
//! ## Features
//!
//! - **Schema normalization**: Source-specific column names map onto one schema
//! - **Deterministic aggregation**: Duplicate keys are summed with overflow checks
//! - **Three-way reconciliation**: Missing, extra, and mismatched junctions
//! - **Proportional layout**: Circle areas and lens area match the set sizes
//! - **Diagram output**: SVG or PNG, written atomically
//!
//! ## Example
//!
//! ```rust
//! use junction_recon::{aggregate, CircleLayout, JunctionRecord, ReconciliationReport};
//!
//! let valid = aggregate(&[
//!     JunctionRecord::new("PB2", 40, 2200, 5),
//!     JunctionRecord::new("HA", 40, 1600, 12),
//! ])
//! .unwrap();
//! let own = aggregate(&[
//!     JunctionRecord::new("PB2", 40, 2200, 5),
//!     JunctionRecord::new("HA", 40, 1600, 11),
//! ])
//! .unwrap();
//!
//! let report = ReconciliationReport::reconcile(&valid, &own);
//! assert_eq!(report.mismatched.len(), 1);
//! assert_eq!(report.exit_status(), 1);
//!
//! let layout = CircleLayout::solve(report.counts);
//! assert_eq!(layout.distance, 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Junction keys, records, and canonical tables
//! - [`parsing`]: Table readers, column schema, and row normalization
//! - [`reconcile`]: Aggregation and set reconciliation
//! - [`geometry`]: Two-circle area-proportional solver and label placement
//! - [`render`]: Diagram drawing
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod geometry;
pub mod parsing;
pub mod reconcile;
pub mod render;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::record::JunctionRecord;
pub use crate::core::table::CanonicalTable;
pub use crate::core::types::*;
pub use geometry::CircleLayout;
pub use parsing::{ColumnSchema, ParseError};
pub use reconcile::{aggregate, AggregationError, ReconciliationReport};
pub use render::{render_diagram, DiagramStyle, RenderError};
