//! Error types for the exchange normalizer.

use thiserror::Error;

/// Result type alias for normalizer operations
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Errors that can occur while loading, detecting or normalizing a file.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input has no header line
    #[error("Input is empty: no column header found")]
    EmptyInput,

    /// The column signature matches no registered scheme
    #[error("couldn't detect scheme for columns [{}]", .columns.join(", "))]
    SchemeNotDetected { columns: Vec<String> },

    /// A type value outside the scheme's vocabulary
    #[error("Unknown transaction type {value:?} for transaction {transaction_id}")]
    UnknownTransactionType {
        transaction_id: String,
        value: String,
    },

    /// A required cell is missing or holds the wrong kind of value
    #[error("Invalid cell at row {row}, column {column}: {message}")]
    InvalidCell {
        row: usize,
        column: String,
        message: String,
    },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: exchange-normalizer <input.csv>")]
    MissingArgument,
}
