//! Centralized validation and helper functions.

use std::fmt::Write as _;

use crate::core::record::JunctionRecord;

/// Maximum number of rows accepted from a single input table (DOS protection)
pub const MAX_RECORDS: usize = 10_000_000;

/// Collapse a reference name to its canonical spelling.
///
/// Leading and trailing whitespace is removed and every interior run of
/// whitespace becomes a single space. Case is preserved: reference names are
/// case-sensitive.
///
/// # Examples
///
/// ```
/// use junction_recon::utils::validation::canonicalize_reference;
///
/// assert_eq!(canonicalize_reference("  PB2 "), "PB2");
/// assert_eq!(canonicalize_reference("seg\t 7"), "seg 7");
/// assert_eq!(canonicalize_reference("chrM"), "chrM");
/// ```
#[must_use]
pub fn canonicalize_reference(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Coerce a raw cell to an integer.
///
/// Accepts plain integers and float spellings with no fractional part
/// (`"100.0"`, `"1e3"`), which dataframe exports produce for integer columns.
/// A decimal with only zeros after the point is read as text, so the full
/// `i64` range is accepted in that form. Exponent spellings go through `f64`
/// and must lie below 2^63. Returns None for anything else, including the
/// empty string.
///
/// # Examples
///
/// ```
/// use junction_recon::utils::validation::coerce_integer;
///
/// assert_eq!(coerce_integer(" 42 "), Some(42));
/// assert_eq!(coerce_integer("100.0"), Some(100));
/// assert_eq!(coerce_integer("1.5"), None);
/// assert_eq!(coerce_integer(""), None);
/// ```
#[must_use]
pub fn coerce_integer(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }

    if let Some((int, frac)) = s.split_once('.') {
        if !int.is_empty() && frac.bytes().all(|b| b == b'0') {
            if let Ok(v) = int.parse::<i64>() {
                return Some(v);
            }
        }
    }

    // 2^63 is exactly representable; anything at or above it would saturate
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let v: f64 = s.parse().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v >= -LIMIT && v < LIMIT {
        #[allow(clippy::cast_possible_truncation)]
        Some(v as i64)
    } else {
        None
    }
}

/// Compute a signature hash for a canonical table.
///
/// The signature is computed by:
/// 1. Serializing each record as `reference\tstart\tend\tread_count`
/// 2. Joining the lines with newlines, in table order
/// 3. Computing MD5 of the concatenated string
///
/// Identical canonical tables always produce identical signatures. The empty
/// table hashes the empty string.
#[must_use]
pub fn compute_table_signature(records: &[JunctionRecord]) -> String {
    let mut buf = String::new();
    for r in records {
        // Writing to a String cannot fail
        let _ = writeln!(buf, "{}\t{}\t{}\t{}", r.reference, r.start, r.end, r.read_count);
    }
    let digest = md5::compute(buf.as_bytes());
    format!("{digest:x}")
}

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}
