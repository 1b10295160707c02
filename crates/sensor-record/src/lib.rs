//! Field Sensor Records
//!
//! Domain model and canonical column schema for agricultural sensor readings.

mod record;
mod schema;

pub use record::{RainFlag, SensorReading};
pub use schema::{COLUMNS, COLUMN_COUNT};
