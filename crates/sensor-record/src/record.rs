//! Sensor reading record

use serde::{Deserialize, Serialize};

/// Binary rain indicator, carried as the integers 0/1 on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RainFlag {
    /// No rain recorded (0)
    Dry,
    /// Rain recorded (1)
    Rain,
}

impl RainFlag {
    /// Wire value of the flag
    pub fn as_u8(self) -> u8 {
        match self {
            RainFlag::Dry => 0,
            RainFlag::Rain => 1,
        }
    }

    /// Parse the wire value; anything other than 0 or 1 is rejected
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(RainFlag::Dry),
            1 => Some(RainFlag::Rain),
            _ => None,
        }
    }
}

impl From<RainFlag> for u8 {
    fn from(flag: RainFlag) -> Self {
        flag.as_u8()
    }
}

impl TryFrom<u8> for RainFlag {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        RainFlag::from_u8(value).ok_or_else(|| format!("rain must be 0 or 1, got {value}"))
    }
}

/// One validated row of agricultural sensor measurements.
///
/// Constructed only by validation; the sole mutation applied afterwards is
/// precision normalization. Invariants:
/// - `humidity` is within the configured physical range (default [0, 100])
/// - `ph` is within the configured physical range (default [0, 14])
/// - `nitrogen`, `phosphorus`, `potassium` are finite and non-negative
/// - `temperature` is finite; no bound is asserted by default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Relative humidity in percent
    pub humidity: f64,
    /// Ambient temperature in °C
    pub temperature: f64,
    /// Soil pH
    pub ph: f64,
    /// Nitrogen concentration
    pub nitrogen: f64,
    /// Phosphorus concentration
    pub phosphorus: f64,
    /// Potassium concentration
    pub potassium: f64,
    /// Rain indicator
    pub rain: RainFlag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rain_flag_wire_values() {
        assert_eq!(RainFlag::Dry.as_u8(), 0);
        assert_eq!(RainFlag::Rain.as_u8(), 1);
        assert_eq!(RainFlag::from_u8(0), Some(RainFlag::Dry));
        assert_eq!(RainFlag::from_u8(1), Some(RainFlag::Rain));
        assert_eq!(RainFlag::from_u8(2), None);
    }

    #[test]
    fn test_rain_flag_try_from_rejects_other_integers() {
        assert!(RainFlag::try_from(0u8).is_ok());
        assert!(RainFlag::try_from(1u8).is_ok());
        assert!(RainFlag::try_from(2u8).is_err());
        assert!(RainFlag::try_from(255u8).is_err());
    }
}
