use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::core::record::JunctionRecord;
use crate::core::types::JunctionKey;
use crate::utils::validation::compute_table_signature;

/// An aggregated junction table: one record per key, sorted by key
///
/// Only the aggregator builds these, so every instance upholds both
/// invariants. The table is immutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalTable {
    records: Vec<JunctionRecord>,

    /// Index: key -> position in `records`
    index: HashMap<JunctionKey, usize>,
}

impl CanonicalTable {
    /// Build from records that are already unique per key and key-sorted
    pub(crate) fn from_sorted(records: Vec<JunctionRecord>) -> Self {
        debug_assert!(
            records.windows(2).all(|w| w[0].key() < w[1].key()),
            "records must be strictly key-sorted"
        );

        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.key(), i))
            .collect();

        Self { records, index }
    }

    #[must_use]
    pub fn records(&self) -> &[JunctionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JunctionRecord> {
        self.records.iter()
    }

    /// Keys in canonical order
    pub fn keys(&self) -> impl Iterator<Item = JunctionKey> + '_ {
        self.records.iter().map(JunctionRecord::key)
    }

    #[must_use]
    pub fn get(&self, key: &JunctionKey) -> Option<&JunctionRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    #[cfg(test)]
    pub(crate) fn contains_key(&self, key: &JunctionKey) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of read counts over all junctions, saturating at `i64::MAX`
    #[must_use]
    pub fn total_reads(&self) -> i64 {
        self.records
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.read_count))
    }

    /// MD5 over the canonical serialization of the table
    #[must_use]
    pub fn signature(&self) -> String {
        compute_table_signature(&self.records)
    }
}

impl<'a> IntoIterator for &'a CanonicalTable {
    type Item = &'a JunctionRecord;
    type IntoIter = std::slice::Iter<'a, JunctionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for CanonicalTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CanonicalTable {
        CanonicalTable::from_sorted(vec![
            JunctionRecord::new("chr1", 100, 200, 10),
            JunctionRecord::new("chr1", 300, 400, 5),
        ])
    }

    #[test]
    fn test_lookup_by_key() {
        let t = table();
        assert_eq!(t.len(), 2);
        assert_eq!(
            t.get(&JunctionKey::new("chr1", 300, 400)).map(|r| r.read_count),
            Some(5)
        );
        assert!(!t.contains_key(&JunctionKey::new("chr2", 100, 200)));
    }

    #[test]
    fn test_total_reads() {
        assert_eq!(table().total_reads(), 15);
        assert_eq!(CanonicalTable::default().total_reads(), 0);
    }

    #[test]
    fn test_signature_depends_on_content() {
        let a = table();
        let b = CanonicalTable::from_sorted(vec![
            JunctionRecord::new("chr1", 100, 200, 10),
            JunctionRecord::new("chr1", 300, 400, 6),
        ]);
        assert_eq!(a.signature(), table().signature());
        assert_ne!(a.signature(), b.signature());
        assert_eq!(a.signature().len(), 32);
    }

    #[test]
    fn test_serializes_as_record_list() {
        let json = serde_json::to_value(table()).unwrap();
        assert_eq!(json[0]["reference"], "chr1");
        assert_eq!(json[1]["read_count"], 5);
    }
}
