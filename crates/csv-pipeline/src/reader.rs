//! Raw CSV Ingest

use crate::error::PipelineError;
use sensor_record::{COLUMNS, COLUMN_COUNT};
use std::fs::File;
use std::path::Path;
use tracing::warn;

/// One raw data row: its 1-based source line and the untyped tokens
#[derive(Debug, Clone)]
pub struct RawRow {
    pub line: usize,
    pub tokens: Vec<String>,
}

/// Read the header and all data rows from a sensor CSV.
///
/// Any row whose token count differs from the 7-column schema is a fatal
/// `Format` error: a malformed file yields no rows at all. Header names are
/// checked leniently; a mismatch against the canonical schema only warns.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, PipelineError> {
    let file = File::open(path).map_err(|e| PipelineError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = reader.records();

    let header = match records.next() {
        Some(result) => result?,
        None => {
            return Err(PipelineError::Format {
                line: 1,
                found: 0,
                expected: COLUMN_COUNT,
            })
        }
    };
    check_header(&header)?;

    let mut rows = Vec::new();
    for (index, result) in records.enumerate() {
        let record = result?;
        // records() is 0-based and starts after the header; prefer the
        // parser's own line accounting when it is available
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 2);

        if record.len() != COLUMN_COUNT {
            return Err(PipelineError::Format {
                line,
                found: record.len(),
                expected: COLUMN_COUNT,
            });
        }

        rows.push(RawRow {
            line,
            tokens: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(rows)
}

fn check_header(header: &csv::StringRecord) -> Result<(), PipelineError> {
    if header.len() != COLUMN_COUNT {
        return Err(PipelineError::Format {
            line: 1,
            found: header.len(),
            expected: COLUMN_COUNT,
        });
    }

    for (found, expected) in header.iter().zip(COLUMNS) {
        if normalize_header_name(found) != expected {
            warn!("unexpected header column '{}' (expected '{}')", found, expected);
        }
    }

    Ok(())
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header cell with a BOM;
    // strip it before comparing
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_header_and_rows() {
        let file = csv_file(
            "humidity,temperature,ph,n,p,k,rain\n\
             80.5,23.1,6.50,12,7,35,1\n\
             61.2,19.8,5.90,8,4,20,0\n",
        );
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].tokens[0], "80.5");
        assert_eq!(rows[1].line, 3);
        assert_eq!(rows[1].tokens[6], "0");
    }

    #[test]
    fn test_trims_whitespace_in_tokens() {
        let file = csv_file(
            "humidity,temperature,ph,n,p,k,rain\n\
             80.5 , 23.1,6.50,12,7,35, 1\n",
        );
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows[0].tokens[0], "80.5");
        assert_eq!(rows[0].tokens[6], "1");
    }

    #[test]
    fn test_short_row_is_format_error() {
        let file = csv_file(
            "humidity,temperature,ph,n,p,k,rain\n\
             80.5,23.1,6.50,12,7,35,1\n\
             1,2,3,4,5,6\n",
        );
        let err = read_rows(file.path()).unwrap_err();
        match err {
            PipelineError::Format {
                line,
                found,
                expected,
            } => {
                assert_eq!(line, 3);
                assert_eq!(found, 6);
                assert_eq!(expected, 7);
            }
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn test_wide_header_is_format_error() {
        let file = csv_file("humidity,temperature,ph,n,p,k,rain,extra\n");
        let err = read_rows(file.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Format { line: 1, .. }));
    }

    #[test]
    fn test_empty_file_is_format_error() {
        let file = csv_file("");
        let err = read_rows(file.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Format { line: 1, found: 0, .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_rows(Path::new("/nonexistent/readings.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_bom_on_first_header_cell_is_tolerated() {
        let file = csv_file("\u{feff}humidity,temperature,ph,n,p,k,rain\n50,20,6.5,1,2,3,0\n");
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
    }
}
