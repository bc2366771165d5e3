// ============================================================================
// Decimal Errors
// Error types for exact decimal arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during exact decimal operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Input is not a valid base-10 decimal literal
    InvalidNumericFormat(String),
    /// Attempted division (or percentage) with a zero divisor
    DivisionByZero,
    /// Input or result exceeds the supported magnitude/precision range
    Overflow,
    /// A variadic operation received no operands
    EmptyOperands,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::InvalidNumericFormat(input) => {
                write!(f, "invalid numeric format: {input:?} is not a base-10 decimal")
            },
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds the representable range")
            },
            DecimalError::EmptyOperands => {
                write!(f, "empty operand list: at least one value is required")
            },
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
