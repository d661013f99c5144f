use serde::{Deserialize, Serialize};

/// Identifies a junction: reference segment plus start and end coordinates
///
/// The derived `Ord` compares fields in declaration order, which gives the
/// canonical `(reference, start, end)` ordering. `String` compares by bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JunctionKey {
    pub reference: String,
    pub start: i64,
    pub end: i64,
}

impl JunctionKey {
    pub fn new(reference: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            reference: reference.into(),
            start,
            end,
        }
    }
}

impl std::fmt::Display for JunctionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.reference, self.start, self.end)
    }
}

/// Region sizes of a two-set overlap
///
/// `only_a` and `only_b` count keys exclusive to each side; `both` counts keys
/// present on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlapCounts {
    pub only_a: u64,
    pub only_b: u64,
    pub both: u64,
}

impl OverlapCounts {
    #[must_use]
    pub fn new(only_a: u64, only_b: u64, both: u64) -> Self {
        Self {
            only_a,
            only_b,
            both,
        }
    }

    /// Size of set A (`only_a + both`), saturating
    #[must_use]
    pub fn total_a(&self) -> u64 {
        self.only_a.saturating_add(self.both)
    }

    /// Size of set B (`only_b + both`), saturating
    #[must_use]
    pub fn total_b(&self) -> u64 {
        self.only_b.saturating_add(self.both)
    }

    /// Size of the union, saturating
    #[must_use]
    pub fn union(&self) -> u64 {
        self.total_a().saturating_add(self.only_b)
    }
}
