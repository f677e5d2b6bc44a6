//! Error types for the order analytics pipeline.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Errors that can occur while validating and aggregating order data.
///
/// Every variant renders the complete user-visible message via `Display`;
/// row-scoped variants carry the 1-based CSV row number (the header is row 1,
/// so the first data row is row 2).
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Input had no header row at all
    #[error("CSV file is empty or has no header row.")]
    MissingHeader,

    /// Header row is present but lacks one or more required columns
    #[error("Missing required columns: {missing}. Expected: {expected}.")]
    MissingColumns { missing: String, expected: String },

    /// A data row has an empty or whitespace-only sku field
    #[error("Row {row}: missing or empty 'sku' value.")]
    EmptySku { row: usize },

    /// A data row has an empty quantity field
    #[error("Row {row}: missing 'quantity' value.")]
    MissingQuantity { row: usize },

    /// A data row's quantity is not an integer
    #[error("Row {row}: invalid quantity '{value}' (must be a whole number).")]
    InvalidQuantity { row: usize, value: String },

    /// A data row's quantity parsed but is negative
    #[error("Row {row}: negative quantity '{value}' is not allowed.")]
    NegativeQuantity { row: usize, value: i64 },

    /// A data row has an empty price field
    #[error("Row {row}: missing 'price' value.")]
    MissingPrice { row: usize },

    /// A data row's price is not a number
    #[error("Row {row}: invalid price '{value}' (must be a number).")]
    InvalidPrice { row: usize, value: String },

    /// A data row's price parsed but is negative
    #[error("Row {row}: negative price '{value}' is not allowed.")]
    NegativePrice { row: usize, value: String },

    /// A row's subtotal or a running total exceeded the representable range
    #[error("Row {row}: value out of range.")]
    ValueOutOfRange { row: usize },

    /// The header was valid but no data rows followed it
    #[error("CSV file contains a header but no data rows.")]
    NoDataRows,

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV-level read error (e.g. invalid UTF-8 in the stream)
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to serialize the analytics result
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input file bytes are not valid UTF-8
    #[error("File is not valid UTF-8 text.")]
    InvalidEncoding,

    /// Input file does not have a .csv name
    #[error("Only .csv files are accepted.")]
    UnsupportedFileType,

    /// Missing input file argument
    #[error("Missing input file argument. Usage: order-analytics <orders.csv>")]
    MissingArgument,
}
