//! Canonical column schema for the import table

/// Number of data columns per row
pub const COLUMN_COUNT: usize = 7;

/// Canonical header, in output order
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "humidity",
    "temperature",
    "ph",
    "n",
    "p",
    "k",
    "rain",
];
