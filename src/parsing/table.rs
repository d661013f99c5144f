//! Reader for delimited junction tables (CSV/TSV, optionally gzip-compressed).

use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// A table as read from disk: header cells plus string cells per row
///
/// Cells are kept exactly as written; interpretation happens in the
/// normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Where the table came from (path or caller-supplied label)
    pub source: String,

    pub headers: Vec<String>,

    pub rows: Vec<Vec<String>>,
}

#[cfg(test)]
impl RawTable {
    /// Value of `column` in data row `row` (0-based), if both exist
    fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h.trim() == column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Pick the field delimiter from the file name: tab for `.tsv`/`.tab`/`.txt`,
/// comma otherwise. A trailing `.gz`/`.bgz` is ignored.
#[must_use]
pub fn delimiter_for(path: &Path) -> u8 {
    let lower = path.to_string_lossy().to_lowercase();
    let name = lower
        .strip_suffix(".gz")
        .or_else(|| lower.strip_suffix(".bgz"))
        .unwrap_or(lower.as_str());

    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    match ext {
        "tsv" | "tab" | "txt" => b'\t',
        _ => b',',
    }
}

/// Read a junction table from disk
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, `ParseError::Csv` if
/// the content is not a well-formed delimited table, or
/// `ParseError::TooManyRecords` if the row limit is exceeded.
pub fn read_table_file(path: &Path) -> Result<RawTable, ParseError> {
    let source = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| ParseError::Io {
        table: source.clone(),
        source: e,
    })?;
    let delimiter = delimiter_for(path);

    if is_gzipped(path) {
        read_table(MultiGzDecoder::new(file), delimiter, &source)
    } else {
        read_table(BufReader::new(file), delimiter, &source)
    }
}

/// Parse a junction table from in-memory text
///
/// # Errors
///
/// Same as [`read_table`].
pub fn parse_table_text(text: &str, delimiter: u8, source: &str) -> Result<RawTable, ParseError> {
    read_table(text.as_bytes(), delimiter, source)
}

/// Parse a junction table from any reader
///
/// Lines starting with `#` before the header are skipped. After the header
/// every line is data, so a reference name beginning with `#` is kept as is.
/// Every data row must have as many cells as the header.
///
/// # Errors
///
/// Returns `ParseError::Io` if the preamble cannot be read, `ParseError::Csv`
/// on malformed input, or `ParseError::TooManyRecords` if the row limit is
/// exceeded.
pub fn read_table<R: Read>(reader: R, delimiter: u8, source: &str) -> Result<RawTable, ParseError> {
    let csv_error = |e: csv::Error| ParseError::Csv {
        table: source.to_string(),
        message: e.to_string(),
    };

    let mut reader = BufReader::new(reader);
    let header_line = skip_preamble(&mut reader).map_err(|e| ParseError::Io {
        table: source.to_string(),
        source: e,
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(Cursor::new(header_line).chain(reader));

    let headers: Vec<String> = rdr
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_error)?;

        // Check record limit for DOS protection
        if check_record_limit(rows.len()).is_some() {
            return Err(ParseError::TooManyRecords {
                table: source.to_string(),
                count: rows.len(),
            });
        }

        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable {
        source: source.to_string(),
        headers,
        rows,
    })
}

/// Consume leading `#` lines and return the first other line (the header)
fn skip_preamble<R: BufRead>(reader: &mut R) -> std::io::Result<Vec<u8>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 || line.first() != Some(&b'#') {
            return Ok(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    #[test]
    fn test_parse_csv_text() {
        let csv = "Segment,Start,End,NGS_read_count\nPB2,12,2200,3\nPB1,300,1100,8\n";
        let table = parse_table_text(csv, b',', "valid").unwrap();

        assert_eq!(table.source, "valid");
        assert_eq!(table.headers, vec!["Segment", "Start", "End", "NGS_read_count"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(1, "Start"), Some("300"));
        assert_eq!(table.cell(2, "Start"), None);
        assert_eq!(table.cell(0, "Missing"), None);
    }

    #[test]
    fn test_parse_tsv_with_comments() {
        let tsv = "# exported junctions\nReference\tStart\tEnd\tNGS_read_count\nNS\t5\t800\t2\n";
        let table = parse_table_text(tsv, b'\t', "own").unwrap();
        assert_eq!(table.headers[0], "Reference");
        assert_eq!(table.rows, vec![vec!["NS", "5", "800", "2"]]);
    }

    #[test]
    fn test_hash_prefixed_data_row_is_kept() {
        let csv = "# exported\nReference,Start,End,NGS_read_count\n#PB2,1,2,3\nHA,4,5,6\n";
        let table = parse_table_text(csv, b',', "own").unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(0, "Reference"), Some("#PB2"));
        assert_eq!(table.cell(1, "Reference"), Some("HA"));
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let table = parse_table_text("", b',', "t").unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_header_only_table() {
        let table = parse_table_text("Reference,Start,End,NGS_read_count\n", b',', "t").unwrap();
        assert!(table.rows.is_empty());
        assert_eq!(table.headers.len(), 4);
    }

    #[test]
    fn test_ragged_row_is_error() {
        let csv = "Reference,Start,End,NGS_read_count\nPB2,12,2200\n";
        let err = parse_table_text(csv, b',', "own").unwrap_err();
        assert!(matches!(err, ParseError::Csv { .. }));
    }

    #[test]
    fn test_delimiter_for() {
        assert_eq!(delimiter_for(Path::new("a/b.csv")), b',');
        assert_eq!(delimiter_for(Path::new("a/b.tsv")), b'\t');
        assert_eq!(delimiter_for(Path::new("a/b.TSV.gz")), b'\t');
        assert_eq!(delimiter_for(Path::new("a/b.csv.gz")), b',');
        assert_eq!(delimiter_for(Path::new("noext")), b',');
    }

    #[test]
    fn test_read_gzipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("own.tsv.gz");

        let file = std::fs::File::create(&path).unwrap();
        let mut enc = GzEncoder::new(file, Compression::default());
        enc.write_all(b"Reference\tStart\tEnd\tNGS_read_count\nHA\t40\t1600\t11\n")
            .unwrap();
        enc.finish().unwrap();

        let table = read_table_file(&path).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.cell(0, "NGS_read_count"), Some("11"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_table_file(Path::new("/nonexistent/junctions.csv")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
