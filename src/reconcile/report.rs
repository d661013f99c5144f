use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::record::JunctionRecord;
use crate::core::table::CanonicalTable;
use crate::core::types::{JunctionKey, OverlapCounts};

/// A junction present in both tables with differing read counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountMismatch {
    #[serde(flatten)]
    pub key: JunctionKey,
    pub count_valid: i64,
    pub count_own: i64,
}

/// Key-level comparison of a ground-truth table against a candidate table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciliationReport {
    /// In ground truth, absent from candidate
    pub missing: BTreeSet<JunctionKey>,

    /// In candidate, absent from ground truth
    pub extra: BTreeSet<JunctionKey>,

    /// Shared keys whose read counts differ, in key order
    pub mismatched: Vec<CountMismatch>,

    pub counts: OverlapCounts,
}

#[inline]
fn count_to_u64(count: usize) -> u64 {
    // usize is at most 64 bits on supported targets
    u64::try_from(count).unwrap_or(u64::MAX)
}

impl ReconciliationReport {
    /// Compare `valid` (ground truth) against `own` (candidate)
    #[must_use]
    pub fn reconcile(valid: &CanonicalTable, own: &CanonicalTable) -> Self {
        let keys_valid: BTreeSet<JunctionKey> = valid.keys().collect();
        let keys_own: BTreeSet<JunctionKey> = own.keys().collect();

        let missing: BTreeSet<JunctionKey> = keys_valid.difference(&keys_own).cloned().collect();
        let extra: BTreeSet<JunctionKey> = keys_own.difference(&keys_valid).cloned().collect();

        let mut both = 0usize;
        let mut mismatched = Vec::new();
        // BTreeSet intersection iterates in key order
        for key in keys_valid.intersection(&keys_own) {
            both += 1;
            let (Some(a), Some(b)) = (valid.get(key), own.get(key)) else {
                continue;
            };
            if a.read_count != b.read_count {
                mismatched.push(CountMismatch {
                    key: key.clone(),
                    count_valid: a.read_count,
                    count_own: b.read_count,
                });
            }
        }

        let counts = OverlapCounts {
            only_a: count_to_u64(missing.len()),
            only_b: count_to_u64(extra.len()),
            both: count_to_u64(both),
        };

        Self {
            missing,
            extra,
            mismatched,
            counts,
        }
    }

    /// No missing, extra, or mismatched junctions
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.mismatched.is_empty()
    }

    /// Process exit status for this outcome: 0 when clean, 1 otherwise
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        u8::from(!self.is_clean())
    }

    /// Full ground-truth rows for the missing keys, in key order
    #[must_use]
    pub fn missing_rows<'a>(&self, valid: &'a CanonicalTable) -> Vec<&'a JunctionRecord> {
        self.missing.iter().filter_map(|k| valid.get(k)).collect()
    }

    /// Full candidate rows for the extra keys, in key order
    #[must_use]
    pub fn extra_rows<'a>(&self, own: &'a CanonicalTable) -> Vec<&'a JunctionRecord> {
        self.extra.iter().filter_map(|k| own.get(k)).collect()
    }
}
