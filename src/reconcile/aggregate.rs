use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::core::record::JunctionRecord;
use crate::core::table::CanonicalTable;
use crate::core::types::JunctionKey;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    #[error("aggregate: read count for {key} overflows a 64-bit integer ({current} + {addend})")]
    Overflow {
        key: JunctionKey,
        current: i64,
        addend: i64,
    },
}

/// Group records by `(reference, start, end)` and sum their read counts.
///
/// The `BTreeMap` keeps groups in canonical key order, so the result does not
/// depend on the order rows arrive in.
///
/// # Errors
///
/// Returns `AggregationError::Overflow` if a summed count leaves the `i64`
/// range. No partial table is produced.
pub fn aggregate<'a, I>(records: I) -> Result<CanonicalTable, AggregationError>
where
    I: IntoIterator<Item = &'a JunctionRecord>,
{
    let mut groups: BTreeMap<JunctionKey, i64> = BTreeMap::new();
    let mut input_rows = 0usize;

    for record in records {
        input_rows += 1;
        let total = groups.entry(record.key()).or_insert(0);
        let current = *total;
        *total = current
            .checked_add(record.read_count)
            .ok_or_else(|| AggregationError::Overflow {
                key: record.key(),
                current,
                addend: record.read_count,
            })?;
    }

    let merged = input_rows - groups.len();
    debug!(
        input_rows,
        junctions = groups.len(),
        merged,
        "Aggregated junction records"
    );

    let records = groups
        .into_iter()
        .map(|(key, read_count)| JunctionRecord {
            reference: key.reference,
            start: key.start,
            end: key.end,
            read_count,
        })
        .collect();

    Ok(CanonicalTable::from_sorted(records))
}

/// Concatenate several record sets, then aggregate
///
/// Used when a candidate dataset is spread over several runs.
///
/// # Errors
///
/// See [`aggregate`].
pub fn aggregate_all(sets: &[Vec<JunctionRecord>]) -> Result<CanonicalTable, AggregationError> {
    aggregate(sets.iter().flatten())
}
