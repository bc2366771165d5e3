// ============================================================================
// Decimal Value
// Immutable exact-decimal value type and operand conversion
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable base-10 value with exact decimal semantics.
///
/// Internally backed by a 96-bit decimal mantissa, so sums, differences and
/// products of decimal inputs never pick up binary floating-point artifacts:
/// `0.1 + 0.2` is exactly `0.3`.
///
/// This is a pure value type. Every operation returns a new value; two
/// values are equal iff they denote the same number, regardless of trailing
/// zeros or the sign of zero.
///
/// # Example
/// ```
/// use exact_decimal::numeric::DecimalValue;
///
/// let a = DecimalValue::parse("0.1").unwrap();
/// let b = DecimalValue::parse("0.2").unwrap();
/// assert_eq!(a.checked_add(b).unwrap().to_string(), "0.3");
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct DecimalValue(Decimal);

impl DecimalValue {
    /// Zero value
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One (1.0)
    pub const ONE: Self = Self(Decimal::ONE);

    /// One hundred, the percentage scale factor
    pub const ONE_HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    /// Maximum representable value
    pub const MAX: Self = Self(Decimal::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(Decimal::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse a strict base-10 decimal literal.
    ///
    /// Accepts an optional leading `+` or `-`, ASCII digits and at most one
    /// decimal point (`"42"`, `"-0.001"`, `".5"`, `"5."`). Surrounding
    /// whitespace is trimmed. Exponent notation, thousands separators and
    /// anything else fail with `InvalidNumericFormat`; a literal beyond the
    /// representable magnitude fails with `Overflow`.
    pub fn parse(input: &str) -> DecimalResult<Self> {
        let trimmed = input.trim();
        if !is_decimal_literal(trimmed) {
            return Err(DecimalError::InvalidNumericFormat(input.to_string()));
        }
        Decimal::from_str(&canonical_literal(trimmed))
            .map(Self)
            .map_err(|_| DecimalError::Overflow)
    }

    /// Convert a native float via its shortest round-trip decimal form,
    /// so `0.1_f64` becomes exactly `0.1`.
    ///
    /// # Errors
    /// `InvalidNumericFormat` for NaN or infinities, `Overflow` when the
    /// magnitude exceeds the representable range.
    pub fn from_f64(value: f64) -> DecimalResult<Self> {
        if !value.is_finite() {
            return Err(DecimalError::InvalidNumericFormat(value.to_string()));
        }
        Decimal::from_f64(value).map(Self).ok_or(DecimalError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if the value is numerically zero (including `-0`).
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Check if the value is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Check if the value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Lossy conversion to the nearest native float. Exact intermediate
    /// results stay decimal; call this only as the final step.
    pub fn to_f64(self) -> DecimalResult<f64> {
        self.0.to_f64().ok_or(DecimalError::Overflow)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked exact addition.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> DecimalResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or(DecimalError::Overflow)
    }

    /// Checked exact subtraction.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> DecimalResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or(DecimalError::Overflow)
    }

    /// Checked exact multiplication.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> DecimalResult<Self> {
        self.0.checked_mul(rhs.0).map(Self).ok_or(DecimalError::Overflow)
    }

    /// Checked division at full backend precision.
    ///
    /// # Errors
    /// `DivisionByZero` when `rhs` is numerically zero, in any spelling of
    /// zero (`0`, `-0`, `0.0`). Never produces an infinity or NaN.
    pub fn checked_div(self, rhs: Self) -> DecimalResult<Self> {
        if rhs.0.is_zero() {
            tracing::debug!("division by zero rejected (dividend {})", self.0);
            return Err(DecimalError::DivisionByZero);
        }
        self.0.checked_div(rhs.0).map(Self).ok_or(DecimalError::Overflow)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round half-up at `precision` fractional digits, ties toward positive
    /// infinity: `4.5` rounds to `5` and `-4.5` rounds to `-4`.
    pub fn round_dp(self, precision: u32) -> Self {
        // Ties toward +inf means away from zero above zero, toward zero below.
        let strategy = if self.0.is_sign_negative() {
            RoundingStrategy::MidpointTowardZero
        } else {
            RoundingStrategy::MidpointAwayFromZero
        };
        Self(self.0.round_dp_with_strategy(precision, strategy))
    }

    /// Smallest value at `precision` fractional digits that is >= self.
    /// Always rounds toward positive infinity: `ceil(-3.1)` is `-3`.
    pub fn ceil_dp(self, precision: u32) -> Self {
        Self(self.0.round_dp_with_strategy(precision, RoundingStrategy::ToPositiveInfinity))
    }

    /// Largest value at `precision` fractional digits that is <= self.
    /// Always rounds toward negative infinity: `floor(-3.1)` is `-4`.
    pub fn floor_dp(self, precision: u32) -> Self {
        Self(self.0.round_dp_with_strategy(precision, RoundingStrategy::ToNegativeInfinity))
    }

    /// Format with exactly `precision` fractional digits, rounding half-up
    /// (away from zero) at the cutoff and zero-padding shorter values.
    pub fn format_fixed(self, precision: u32) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.width$}", width = precision as usize)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalValue {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for DecimalValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for DecimalValue {}

impl PartialOrd for DecimalValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalValue {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Hash for DecimalValue {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Neg for DecimalValue {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl FromStr for DecimalValue {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalValue({})", self.0)
    }
}

impl fmt::Display for DecimalValue {
    /// The normalized exact decimal string: trailing zeros stripped and
    /// `-0` printed as `0`, with no loss of precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.normalize().fmt(f)
    }
}

// ============================================================================
// Literal Validation
// ============================================================================

/// Accepts an optionally signed run of ASCII digits with at most one
/// decimal point and at least one digit. Exponents, separators and inner
/// whitespace are all rejected.
fn is_decimal_literal(s: &str) -> bool {
    let digits = s
        .strip_prefix('+')
        .or_else(|| s.strip_prefix('-'))
        .unwrap_or(s);
    if digits.is_empty() {
        return false;
    }
    let mut seen_point = false;
    let mut seen_digit = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

/// The backend parser is stricter than the validator about bare leading or
/// trailing points and a leading `+`, so rewrite `"+.5"` as `"0.5"` etc.
fn canonical_literal(s: &str) -> String {
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.strip_prefix('+').unwrap_or(s)),
    };
    let body = body.strip_suffix('.').unwrap_or(body);
    if body.starts_with('.') {
        format!("{sign}0{body}")
    } else {
        format!("{sign}{body}")
    }
}

// ============================================================================
// Operand Conversion
// ============================================================================

/// Conversion from caller-supplied operands (native numbers or decimal
/// string literals) into [`DecimalValue`].
///
/// Parsing fails fast: a malformed literal or non-finite float is reported
/// as `InvalidNumericFormat` at the call that introduced it, never silently
/// coerced to zero or NaN.
pub trait ToDecimal {
    /// Convert to the exact decimal representation.
    fn to_decimal(&self) -> DecimalResult<DecimalValue>;

    /// The operand as the caller supplied it, used when an operation echoes
    /// an input back verbatim (`max`/`min`).
    fn literal(&self) -> String;
}

impl ToDecimal for f64 {
    fn to_decimal(&self) -> DecimalResult<DecimalValue> {
        DecimalValue::from_f64(*self)
    }

    fn literal(&self) -> String {
        self.to_string()
    }
}

impl ToDecimal for f32 {
    fn to_decimal(&self) -> DecimalResult<DecimalValue> {
        if !self.is_finite() {
            return Err(DecimalError::InvalidNumericFormat(self.to_string()));
        }
        Decimal::from_f32(*self)
            .map(DecimalValue)
            .ok_or(DecimalError::Overflow)
    }

    fn literal(&self) -> String {
        self.to_string()
    }
}

impl ToDecimal for str {
    fn to_decimal(&self) -> DecimalResult<DecimalValue> {
        DecimalValue::parse(self)
    }

    fn literal(&self) -> String {
        self.to_string()
    }
}

impl ToDecimal for String {
    fn to_decimal(&self) -> DecimalResult<DecimalValue> {
        DecimalValue::parse(self)
    }

    fn literal(&self) -> String {
        self.clone()
    }
}

impl ToDecimal for DecimalValue {
    fn to_decimal(&self) -> DecimalResult<DecimalValue> {
        Ok(*self)
    }

    fn literal(&self) -> String {
        self.to_string()
    }
}

impl<T: ToDecimal + ?Sized> ToDecimal for &T {
    fn to_decimal(&self) -> DecimalResult<DecimalValue> {
        (**self).to_decimal()
    }

    fn literal(&self) -> String {
        (**self).literal()
    }
}

macro_rules! impl_to_decimal_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToDecimal for $t {
                fn to_decimal(&self) -> DecimalResult<DecimalValue> {
                    Ok(DecimalValue(Decimal::from(*self)))
                }

                fn literal(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_to_decimal_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ============================================================================
// Tests
// ============================================================================
