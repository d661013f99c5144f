//! Aggregation and key-based reconciliation of junction tables.
//!
//! - [`aggregate`]: collapses duplicate keys into a [`CanonicalTable`]
//! - [`ReconciliationReport`]: missing / extra / count-mismatched junctions
//!
//! ## Classification
//!
//! | Category | Key in valid | Key in own | Counts |
//! |----------|--------------|------------|--------|
//! | missing  | yes | no  | - |
//! | extra    | no  | yes | - |
//! | mismatched | yes | yes | differ |
//!
//! Every shared key counts toward the overlap, including mismatched ones.
//!
//! ## Example
//!
//! ```rust
//! use junction_recon::core::record::JunctionRecord;
//! use junction_recon::reconcile::{aggregate, ReconciliationReport};
//!
//! let valid = aggregate(&[JunctionRecord::new("chr1", 100, 200, 10)]).unwrap();
//! let own = aggregate(&[JunctionRecord::new("chr1", 100, 200, 7)]).unwrap();
//!
//! let report = ReconciliationReport::reconcile(&valid, &own);
//! assert_eq!(report.mismatched.len(), 1);
//! assert_eq!(report.counts.both, 1);
//! ```
//!
//! [`CanonicalTable`]: crate::core::table::CanonicalTable

pub mod aggregate;
pub mod report;

pub use aggregate::{aggregate, aggregate_all, AggregationError};
pub use report::{CountMismatch, ReconciliationReport};
pub use crate::core::types::OverlapCounts;
