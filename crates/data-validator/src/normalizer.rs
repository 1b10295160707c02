//! Output Precision Normalization

use sensor_record::SensorReading;

/// Default number of decimal places in the emitted table
pub const DEFAULT_PRECISION: usize = 2;

/// Quantizes float fields to a fixed decimal precision.
///
/// Quantization keeps the emitted table stable: re-reading and re-validating
/// the converter's own output produces zero rejections.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    precision: usize,
}

impl Normalizer {
    /// Create a normalizer with the given number of decimal places
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Decimal places applied to every float field
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Quantize a single value to the output precision
    pub fn quantize(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.precision as i32);
        (value * scale).round() / scale
    }

    /// Quantize every float field of a reading
    pub fn normalize(&self, reading: SensorReading) -> SensorReading {
        SensorReading {
            humidity: self.quantize(reading.humidity),
            temperature: self.quantize(reading.temperature),
            ph: self.quantize(reading.ph),
            nitrogen: self.quantize(reading.nitrogen),
            phosphorus: self.quantize(reading.phosphorus),
            potassium: self.quantize(reading.potassium),
            rain: reading.rain,
        }
    }

    /// Render a value with fixed decimal precision, never scientific notation
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}
