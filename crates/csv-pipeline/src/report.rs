//! Operator-Facing Conversion Report

use chrono::Utc;
use serde::Serialize;
use std::path::Path;

/// One rejected row and why it was rejected
#[derive(Debug, Clone, Serialize)]
pub struct RowDiagnostic {
    /// 1-based source line of the row
    pub line: usize,
    /// Field that failed validation
    pub field: String,
    /// Human-readable reason
    pub reason: String,
}

/// Summary of one conversion run.
///
/// Gives the operator the numbers to cross-check against the expected row
/// count before proceeding to the manual import step.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub timestamp: String,
    pub input: String,
    pub output: String,
    pub rows_read: usize,
    pub rows_accepted: usize,
    pub rows_rejected: usize,
    pub expected_rows: Option<usize>,
    pub rejects: Vec<RowDiagnostic>,
}

impl ConversionReport {
    pub(crate) fn new(
        input: &Path,
        output: &Path,
        rows_read: usize,
        rows_accepted: usize,
        expected_rows: Option<usize>,
        rejects: Vec<RowDiagnostic>,
    ) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            input: input.display().to_string(),
            output: output.display().to_string(),
            rows_read,
            rows_accepted,
            rows_rejected: rejects.len(),
            expected_rows,
            rejects,
        }
    }

    /// Whether the accepted count matches the operator's expectation
    pub fn row_count_matches(&self) -> bool {
        self.expected_rows.map_or(true, |n| n == self.rows_accepted)
    }

    /// Print a plain-text summary for the operator
    pub fn print_summary(&self) {
        println!("Conversion summary for {}", self.input);
        println!("  rows read:     {}", self.rows_read);
        println!("  rows accepted: {}", self.rows_accepted);
        println!("  rows rejected: {}", self.rows_rejected);
        for reject in &self.rejects {
            println!("    line {}: {}", reject.line, reject.reason);
        }
        if let Some(expected) = self.expected_rows {
            if self.row_count_matches() {
                println!("  row count matches expected {expected}");
            } else {
                println!(
                    "  WARNING: accepted {} rows, expected {expected}",
                    self.rows_accepted
                );
            }
        }
        println!("  output: {}", self.output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_cross_check() {
        let report = ConversionReport::new(
            Path::new("in.csv"),
            Path::new("out.csv"),
            66,
            66,
            Some(66),
            Vec::new(),
        );
        assert!(report.row_count_matches());

        let report = ConversionReport::new(
            Path::new("in.csv"),
            Path::new("out.csv"),
            66,
            65,
            Some(66),
            vec![RowDiagnostic {
                line: 12,
                field: "humidity".to_string(),
                reason: "out of range".to_string(),
            }],
        );
        assert!(!report.row_count_matches());
        assert_eq!(report.rows_rejected, 1);
    }

    #[test]
    fn test_no_expectation_always_matches() {
        let report = ConversionReport::new(
            Path::new("in.csv"),
            Path::new("out.csv"),
            10,
            8,
            None,
            Vec::new(),
        );
        assert!(report.row_count_matches());
    }
}
