use thiserror::Error;

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrdmError {
    /// The text entered by the user is not a finite number.
    #[error("Invalid input. Please enter a valid number.")]
    InvalidInput(String),

    #[error("{input_mm:.1}mm is outside the table (minimum {min_mm:.1}mm)")]
    OutOfRange { input_mm: f64, min_mm: f64 },

    #[error("Channel table has no rows")]
    EmptyTable,

    #[error("Row {row}: boundary {mm}mm does not increase past {previous_mm}mm")]
    NonIncreasingBoundary {
        row: usize,
        previous_mm: f64,
        mm: f64,
    },

    #[error("Row {row}: '{column}' is not a finite number")]
    NonFiniteValue { row: usize, column: &'static str },

    #[error("Row {row}: '{column}' must be a positive whole number, got {value}")]
    InvalidIndex {
        row: usize,
        column: &'static str,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, FrdmError>;
