//! Linear Conversion Pass

use crate::error::PipelineError;
use crate::reader;
use crate::report::{ConversionReport, RowDiagnostic};
use crate::writer;
use data_validator::{Normalizer, RangeConfig, Validator, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// What to do when a row fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Skip the offending row, record a diagnostic, continue
    Skip,
    /// Fail the whole run on the first offending row
    Abort,
}

/// Options for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub ranges: RangeConfig,
    pub precision: usize,
    pub policy: ValidationPolicy,
    pub append: bool,
    pub expect_rows: Option<usize>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            ranges: RangeConfig::default(),
            precision: DEFAULT_PRECISION,
            policy: ValidationPolicy::Abort,
            append: false,
            expect_rows: None,
        }
    }
}

/// Run the full cleaning pass: read, validate, normalize, write.
///
/// Every row is read and validated before the destination is opened, so a
/// fatal error (malformed shape, I/O failure, or a rejection under the abort
/// policy) leaves no partial output behind.
pub fn convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConversionReport, PipelineError> {
    let rows = reader::read_rows(input)?;
    let rows_read = rows.len();
    info!("read {} data rows from {}", rows_read, input.display());

    let validator = Validator::new(options.ranges.clone());
    let normalizer = Normalizer::new(options.precision);

    let mut accepted = Vec::with_capacity(rows.len());
    let mut rejects = Vec::new();

    for row in &rows {
        let tokens: Vec<&str> = row.tokens.iter().map(String::as_str).collect();
        match validator.parse_reading(&tokens) {
            Ok(reading) => accepted.push(normalizer.normalize(reading)),
            Err(e) => match options.policy {
                ValidationPolicy::Abort => {
                    return Err(PipelineError::Rejected {
                        line: row.line,
                        source: e,
                    })
                }
                ValidationPolicy::Skip => {
                    warn!("skipping line {}: {}", row.line, e);
                    rejects.push(RowDiagnostic {
                        line: row.line,
                        field: e.field().to_string(),
                        reason: e.to_string(),
                    });
                }
            },
        }
    }

    writer::write_table(output, &accepted, &normalizer, options.append)?;
    info!("wrote {} rows to {}", accepted.len(), output.display());

    let report = ConversionReport::new(
        input,
        output,
        rows_read,
        accepted.len(),
        options.expect_rows,
        rejects,
    );
    if !report.row_count_matches() {
        warn!(
            "accepted {} rows, expected {}",
            report.rows_accepted,
            options.expect_rows.unwrap_or_default()
        );
    }

    Ok(report)
}
