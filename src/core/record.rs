use serde::{Deserialize, Serialize};

use crate::core::types::JunctionKey;

/// A single recombination junction call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JunctionRecord {
    /// Genomic segment name, whitespace-normalized and case-preserved
    pub reference: String,

    /// Junction start coordinate as reported upstream
    pub start: i64,

    /// Junction end coordinate as reported upstream
    pub end: i64,

    /// Number of reads supporting this junction (never negative)
    pub read_count: i64,
}

impl JunctionRecord {
    pub fn new(reference: impl Into<String>, start: i64, end: i64, read_count: i64) -> Self {
        Self {
            reference: reference.into(),
            start,
            end,
            read_count,
        }
    }

    #[must_use]
    pub fn key(&self) -> JunctionKey {
        JunctionKey::new(self.reference.clone(), self.start, self.end)
    }
}
