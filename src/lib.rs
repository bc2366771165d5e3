// ============================================================================
// Exact Decimal Library
// Exact base-10 arithmetic over number and string operands
// ============================================================================

//! # Exact Decimal
//!
//! Exact decimal arithmetic, comparison and rounding over operands supplied
//! as native numbers or decimal-string literals.
//!
//! ## Features
//!
//! - **No binary floating-point artifacts**: all intermediate arithmetic is
//!   decimal, so `0.1 + 0.2` is exactly `0.3`
//! - **Two result surfaces**: lossless decimal strings ([`decimal`]) and
//!   convenient native floats ([`number`]), both computed exactly
//! - **Fail-fast errors**: malformed literals and zero divisors are typed
//!   failures, never silent coercions to `0`, `NaN` or infinity
//! - **Directional rounding**: half-up with ties toward positive infinity,
//!   plus true mathematical ceiling and floor at any precision
//!
//! ## Example
//!
//! ```rust
//! use exact_decimal::{decimal, number};
//!
//! // Lossless string surface
//! assert_eq!(decimal::add([0.1, 0.2]).unwrap(), "0.3");
//! assert_eq!(decimal::divide(1, 3, 2).unwrap(), "0.33");
//! assert_eq!(decimal::round("-4.5", 0).unwrap(), "-4");
//! assert!(decimal::divide(1, 0, 2).is_err());
//!
//! // Native-number surface, same exact computation inside
//! assert_eq!(number::add(0.1, 0.2).unwrap(), 0.3);
//! ```

pub mod decimal;
pub mod number;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::decimal;
    pub use crate::number;
    pub use crate::numeric::{DecimalError, DecimalResult, DecimalValue, ToDecimal};
}
