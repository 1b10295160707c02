//! Validator for Token Parsing and Range Checking

use crate::error::ValidationError;
use sensor_record::{RainFlag, SensorReading};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Physical-range configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Relative humidity valid range (%)
    pub humidity: (f64, f64),
    /// Ambient temperature valid range (°C); None leaves it unconstrained
    pub temperature: Option<(f64, f64)>,
    /// Soil pH valid range
    pub ph: (f64, f64),
    /// Minimum nutrient concentration (N, P, K)
    pub nutrient_min: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            humidity: (0.0, 100.0),
            temperature: None,
            ph: (0.0, 14.0),
            nutrient_min: 0.0,
        }
    }
}

/// Validator for raw sensor-reading rows.
///
/// Parses each token into its declared type and checks it against the
/// configured physical ranges. Never repairs data: an offending token is
/// reported, not coerced.
pub struct Validator {
    config: RangeConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: RangeConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate humidity
    pub fn validate_humidity(&self, humidity: f64) -> Result<(), ValidationError> {
        self.validate_range("humidity", humidity, self.config.humidity)
    }

    /// Validate temperature; unconstrained unless a range is configured
    pub fn validate_temperature(&self, temperature: f64) -> Result<(), ValidationError> {
        match self.config.temperature {
            Some(range) => self.validate_range("temperature", temperature, range),
            None => Ok(()),
        }
    }

    /// Validate pH
    pub fn validate_ph(&self, ph: f64) -> Result<(), ValidationError> {
        self.validate_range("ph", ph, self.config.ph)
    }

    /// Validate a nutrient concentration (N, P, or K)
    pub fn validate_nutrient(&self, field: &'static str, value: f64) -> Result<(), ValidationError> {
        if value < self.config.nutrient_min {
            Err(ValidationError::BelowMinimum {
                field,
                value,
                min: self.config.nutrient_min,
            })
        } else {
            Ok(())
        }
    }

    /// Parse and validate one raw row of tokens, in column order.
    ///
    /// The first offending field is reported; the row is never partially
    /// accepted.
    pub fn parse_reading(&self, tokens: &[&str]) -> Result<SensorReading, ValidationError> {
        match self.try_parse(tokens) {
            Ok(reading) => Ok(reading),
            Err(e) => {
                debug!("row failed validation: {}", e);
                Err(e)
            }
        }
    }

    fn try_parse(&self, tokens: &[&str]) -> Result<SensorReading, ValidationError> {
        let humidity = parse_float("humidity", token(tokens, 0, "humidity")?)?;
        self.validate_humidity(humidity)?;

        let temperature = parse_float("temperature", token(tokens, 1, "temperature")?)?;
        self.validate_temperature(temperature)?;

        let ph = parse_float("ph", token(tokens, 2, "ph")?)?;
        self.validate_ph(ph)?;

        let nitrogen = parse_float("n", token(tokens, 3, "n")?)?;
        self.validate_nutrient("n", nitrogen)?;

        let phosphorus = parse_float("p", token(tokens, 4, "p")?)?;
        self.validate_nutrient("p", phosphorus)?;

        let potassium = parse_float("k", token(tokens, 5, "k")?)?;
        self.validate_nutrient("k", potassium)?;

        let rain = parse_rain(token(tokens, 6, "rain")?)?;

        Ok(SensorReading {
            humidity,
            temperature,
            ph,
            nitrogen,
            phosphorus,
            potassium,
            rain,
        })
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(RangeConfig::default())
    }
}

fn token<'a>(
    tokens: &[&'a str],
    index: usize,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    tokens
        .get(index)
        .copied()
        .ok_or(ValidationError::MissingField(field))
}

fn parse_float(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    let value: f64 = raw.parse().map_err(|_| ValidationError::Parse {
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

fn parse_rain(raw: &str) -> Result<RainFlag, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField("rain"));
    }
    let value: i64 = raw.parse().map_err(|_| ValidationError::Category {
        field: "rain",
        value: raw.to_string(),
    })?;
    u8::try_from(value)
        .ok()
        .and_then(RainFlag::from_u8)
        .ok_or_else(|| ValidationError::Category {
            field: "rain",
            value: raw.to_string(),
        })
}
