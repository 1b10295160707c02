//! Import-Ready CSV Export

use crate::error::PipelineError;
use data_validator::Normalizer;
use sensor_record::{SensorReading, COLUMNS};
use std::fs::OpenOptions;
use std::path::Path;

/// Serialize validated readings to `path` in the canonical column order.
///
/// Every float is rendered with fixed decimal precision (never scientific
/// notation) so downstream import tools interpret values consistently; the
/// rain flag is written as a bare integer. By default the destination is
/// created or overwritten with a single header row first; with `append` the
/// rows are appended and the header is only written when the file is new.
pub fn write_table(
    path: &Path,
    readings: &[SensorReading],
    normalizer: &Normalizer,
    append: bool,
) -> Result<(), PipelineError> {
    let io_err = |e: std::io::Error| PipelineError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    let fresh = !append || !path.exists();

    let mut options = OpenOptions::new();
    options.write(true).create(true);
    if append {
        options.append(true);
    } else {
        options.truncate(true);
    }
    let file = options.open(path).map_err(io_err)?;

    // csv::Writer buffers internally, no extra BufWriter needed
    let mut writer = csv::Writer::from_writer(file);
    if fresh {
        writer.write_record(COLUMNS)?;
    }

    for reading in readings {
        writer.write_record([
            normalizer.format(reading.humidity),
            normalizer.format(reading.temperature),
            normalizer.format(reading.ph),
            normalizer.format(reading.nitrogen),
            normalizer.format(reading.phosphorus),
            normalizer.format(reading.potassium),
            reading.rain.as_u8().to_string(),
        ])?;
    }

    writer.flush().map_err(io_err)?;

    Ok(())
}
