//! Core data types for junction reconciliation.
//!
//! This module provides the value types used throughout the library:
//!
//! - [`JunctionKey`]: The `(reference, start, end)` triple identifying a junction
//! - [`JunctionRecord`]: A single junction call with its supporting read count
//! - [`CanonicalTable`]: An aggregated, key-sorted set of junction records
//!
//! ## Ordering
//!
//! Keys order by reference name in byte order, then numerically by start and
//! end. The ordering never depends on locale:
//!
//! | reference | start | end |
//! |-----------|-------|-----|
//! | PB1       | 300   | 1100 |
//! | PB2       | 12    | 2200 |
//! | PB2       | 250   | 2100 |
//! | chr1      | 100   | 200 |
//!
//! Upper-case names sort before lower-case names. Coordinates are stored as
//! given: no conversion between 0-based and 1-based conventions is applied.

pub mod record;
pub mod table;
pub mod types;
