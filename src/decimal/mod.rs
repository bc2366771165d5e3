// ============================================================================
// Exact Decimal Surface
// Free functions producing lossless decimal strings
// ============================================================================
//
// Every operation here parses its operands into the exact representation,
// computes without touching binary floating point, and renders the result
// as a decimal string. Arithmetic and rounding results are normalized
// (trailing zeros stripped); `divide` and `percentage` render a fixed
// number of fractional digits instead.

use crate::numeric::{DecimalError, DecimalResult, DecimalValue, ToDecimal};
use std::cmp::Ordering;

/// Fractional digits rendered by [`divide`] unless the caller picks a width.
pub const DEFAULT_DIVIDE_PRECISION: u32 = 10;

/// Fractional digits rendered by [`percentage`] unless the caller picks a width.
pub const DEFAULT_PERCENTAGE_PRECISION: u32 = 2;

/// Parse a single operand into a [`DecimalValue`].
///
/// # Example
/// ```
/// use exact_decimal::decimal;
///
/// let value = decimal::of("123.45").unwrap();
/// assert_eq!(value.to_string(), "123.45");
/// assert!(decimal::of("abc").is_err());
/// ```
pub fn of<T: ToDecimal>(value: T) -> DecimalResult<DecimalValue> {
    value.to_decimal()
}

/// Exact sum of all operands, folded left to right.
///
/// # Example
/// ```
/// use exact_decimal::decimal;
///
/// assert_eq!(decimal::add([0.1, 0.2]).unwrap(), "0.3");
/// assert_eq!(decimal::add(["0.1", "0.2", "0.3"]).unwrap(), "0.6");
/// ```
pub fn add<I>(values: I) -> DecimalResult<String>
where
    I: IntoIterator,
    I::Item: ToDecimal,
{
    Ok(fold(values, DecimalValue::checked_add)?.to_string())
}

/// Exact difference `minuend - subtrahend`.
pub fn subtract<A, B>(minuend: A, subtrahend: B) -> DecimalResult<String>
where
    A: ToDecimal,
    B: ToDecimal,
{
    Ok(minuend
        .to_decimal()?
        .checked_sub(subtrahend.to_decimal()?)?
        .to_string())
}

/// Exact product of all operands, folded left to right.
pub fn multiply<I>(values: I) -> DecimalResult<String>
where
    I: IntoIterator,
    I::Item: ToDecimal,
{
    Ok(fold(values, DecimalValue::checked_mul)?.to_string())
}

/// Exact quotient rendered with exactly `precision` fractional digits,
/// rounding half-up at the cutoff.
///
/// # Errors
/// `DivisionByZero` when the divisor is numerically zero, whatever its
/// spelling (`0`, `"0"`, `"-0"`, `"0.0"`).
///
/// # Example
/// ```
/// use exact_decimal::decimal;
///
/// assert_eq!(decimal::divide("0.3", "0.1", 10).unwrap(), "3.0000000000");
/// assert_eq!(decimal::divide(1, 3, 2).unwrap(), "0.33");
/// assert!(decimal::divide(1, 0, 2).is_err());
/// ```
pub fn divide<A, B>(dividend: A, divisor: B, precision: u32) -> DecimalResult<String>
where
    A: ToDecimal,
    B: ToDecimal,
{
    let quotient = dividend.to_decimal()?.checked_div(divisor.to_decimal()?)?;
    Ok(quotient.format_fixed(precision))
}

/// Round half-up at `precision` fractional digits; ties go toward positive
/// infinity, so `round(4.5, 0)` is `"5"` while `round(-4.5, 0)` is `"-4"`.
pub fn round<T: ToDecimal>(value: T, precision: u32) -> DecimalResult<String> {
    Ok(value.to_decimal()?.round_dp(precision).to_string())
}

/// Smallest value at `precision` fractional digits that is >= the input.
/// The mathematical ceiling: `ceil(-3.1, 0)` is `"-3"`.
pub fn ceil<T: ToDecimal>(value: T, precision: u32) -> DecimalResult<String> {
    Ok(value.to_decimal()?.ceil_dp(precision).to_string())
}

/// Largest value at `precision` fractional digits that is <= the input.
/// The mathematical floor: `floor(-3.1, 0)` is `"-4"`.
pub fn floor<T: ToDecimal>(value: T, precision: u32) -> DecimalResult<String> {
    Ok(value.to_decimal()?.floor_dp(precision).to_string())
}

/// Exact absolute value.
pub fn abs<T: ToDecimal>(value: T) -> DecimalResult<String> {
    Ok(value.to_decimal()?.abs().to_string())
}

/// Largest operand, echoed back as its original literal. Ties keep the
/// earliest operand supplied.
pub fn max<I>(values: I) -> DecimalResult<String>
where
    I: IntoIterator,
    I::Item: ToDecimal,
{
    extremum(values, Ordering::Greater)
}

/// Smallest operand, echoed back as its original literal. Ties keep the
/// earliest operand supplied.
pub fn min<I>(values: I) -> DecimalResult<String>
where
    I: IntoIterator,
    I::Item: ToDecimal,
{
    extremum(values, Ordering::Less)
}

/// Exact three-way comparison, no epsilon tolerance.
pub fn compare<A, B>(a: A, b: B) -> DecimalResult<Ordering>
where
    A: ToDecimal,
    B: ToDecimal,
{
    Ok(a.to_decimal()?.cmp(&b.to_decimal()?))
}

/// Exact equality, true iff [`compare`] is `Equal`.
pub fn equals<A, B>(a: A, b: B) -> DecimalResult<bool>
where
    A: ToDecimal,
    B: ToDecimal,
{
    Ok(compare(a, b)? == Ordering::Equal)
}

/// True iff `value` is strictly greater than `other`.
pub fn gt<A, B>(value: A, other: B) -> DecimalResult<bool>
where
    A: ToDecimal,
    B: ToDecimal,
{
    Ok(compare(value, other)? == Ordering::Greater)
}

/// True iff `value` is strictly less than `other`.
pub fn lt<A, B>(value: A, other: B) -> DecimalResult<bool>
where
    A: ToDecimal,
    B: ToDecimal,
{
    Ok(compare(value, other)? == Ordering::Less)
}

/// `(number / total) * 100`, rendered with exactly `precision` fractional
/// digits. The sign follows ordinary arithmetic: a negative numerator or
/// a negative total (but not both) yields a negative percentage.
///
/// # Errors
/// `DivisionByZero` when `total` is numerically zero.
///
/// # Example
/// ```
/// use exact_decimal::decimal;
///
/// assert_eq!(decimal::percentage(1, 2, 2).unwrap(), "50.00");
/// assert_eq!(decimal::percentage(1, 3, 1).unwrap(), "33.3");
/// ```
pub fn percentage<A, B>(number: A, total: B, precision: u32) -> DecimalResult<String>
where
    A: ToDecimal,
    B: ToDecimal,
{
    let ratio = number.to_decimal()?.checked_div(total.to_decimal()?)?;
    let scaled = ratio.checked_mul(DecimalValue::ONE_HUNDRED)?;
    Ok(scaled.format_fixed(precision))
}

// Left-to-right fold over at least one operand.
fn fold<I>(
    values: I,
    op: fn(DecimalValue, DecimalValue) -> DecimalResult<DecimalValue>,
) -> DecimalResult<DecimalValue>
where
    I: IntoIterator,
    I::Item: ToDecimal,
{
    let mut iter = values.into_iter();
    let first = iter.next().ok_or(DecimalError::EmptyOperands)?;
    let mut acc = first.to_decimal()?;
    for value in iter {
        acc = op(acc, value.to_decimal()?)?;
    }
    Ok(acc)
}

// Extremum scan keeping the winning operand's original literal. Strict
// replacement, so ties resolve to the earliest operand.
fn extremum<I>(values: I, keep: Ordering) -> DecimalResult<String>
where
    I: IntoIterator,
    I::Item: ToDecimal,
{
    let mut iter = values.into_iter();
    let first = iter.next().ok_or(DecimalError::EmptyOperands)?;
    let mut best = first.to_decimal()?;
    let mut best_literal = first.literal();
    for value in iter {
        let parsed = value.to_decimal()?;
        if parsed.cmp(&best) == keep {
            best = parsed;
            best_literal = value.literal();
        }
    }
    Ok(best_literal)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(["0.1", "0.2"]).unwrap(), "0.3");
        assert_eq!(add(["0.1", "0.2", "0.3"]).unwrap(), "0.6");
        assert_eq!(add(["-1.5", "2.5"]).unwrap(), "1");
        assert_eq!(add([0.1, 0.2]).unwrap(), "0.3");
        assert_eq!(add(["7.5"]).unwrap(), "7.5");
    }

    #[test]
    fn test_add_empty_operands() {
        assert_eq!(add(Vec::<f64>::new()), Err(DecimalError::EmptyOperands));
    }

    #[test]
    fn test_add_rejects_malformed_operand() {
        assert_eq!(
            add(["0.1", "abc"]),
            Err(DecimalError::InvalidNumericFormat("abc".to_string()))
        );
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract("0.3", "0.1").unwrap(), "0.2");
        assert_eq!(subtract("2.5", "-1.5").unwrap(), "4");
        assert_eq!(subtract(0.3, 0.1).unwrap(), "0.2");
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(["0.1", "0.2"]).unwrap(), "0.02");
        assert_eq!(multiply(["0.1", "0.2", "0.3"]).unwrap(), "0.006");
        assert_eq!(multiply(["-2", "3"]).unwrap(), "-6");
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide("0.3", "0.1", DEFAULT_DIVIDE_PRECISION).unwrap(), "3.0000000000");
        assert_eq!(divide(1, 3, 2).unwrap(), "0.33");
        assert_eq!(divide(2, 3, 4).unwrap(), "0.6667");
        assert_eq!(divide("-1", "8", 2).unwrap(), "-0.13");
    }

    #[test]
    fn test_divide_by_zero_in_any_spelling() {
        assert_eq!(divide("1", "0", 2), Err(DecimalError::DivisionByZero));
        assert_eq!(divide(1, 0, 2), Err(DecimalError::DivisionByZero));
        assert_eq!(divide("1", "-0", 2), Err(DecimalError::DivisionByZero));
        assert_eq!(divide("1", "0.0", 2), Err(DecimalError::DivisionByZero));
        assert_eq!(divide(1.0, -0.0, 2), Err(DecimalError::DivisionByZero));
    }

    #[test]
    fn test_round() {
        assert_eq!(round("3.45", 0).unwrap(), "3");
        assert_eq!(round("3.45", 1).unwrap(), "3.5");
        assert_eq!(round("4.006", 2).unwrap(), "4.01");
        assert_eq!(round("4.5", 0).unwrap(), "5");
    }

    #[test]
    fn test_round_negative_ties_toward_positive_infinity() {
        assert_eq!(round("-4.5", 0).unwrap(), "-4");
        assert_eq!(round("-3.45", 1).unwrap(), "-3.4");
        assert_eq!(round("-4.6", 0).unwrap(), "-5");
    }

    #[test]
    fn test_ceil() {
        assert_eq!(ceil("3.1", 0).unwrap(), "4");
        assert_eq!(ceil("3.11", 1).unwrap(), "3.2");
        assert_eq!(ceil("-3.1", 0).unwrap(), "-3");
        assert_eq!(ceil("4", 0).unwrap(), "4");
    }

    #[test]
    fn test_floor() {
        assert_eq!(floor("3.9", 0).unwrap(), "3");
        assert_eq!(floor("3.9", 1).unwrap(), "3.9");
        assert_eq!(floor("-3.1", 0).unwrap(), "-4");
        assert_eq!(floor("4", 0).unwrap(), "4");
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare("0.1", "0.2").unwrap(), Ordering::Less);
        assert_eq!(compare("0.2", "0.2").unwrap(), Ordering::Equal);
        assert_eq!(compare("0.3", "0.2").unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_equals_gt_lt() {
        assert!(equals("0.1", "0.1").unwrap());
        assert!(equals("0.10", 0.1).unwrap());
        assert!(!equals("0.1", "0.2").unwrap());
        assert!(gt("0.2", "0.1").unwrap());
        assert!(!gt("0.1", "0.2").unwrap());
        assert!(lt("0.1", "0.2").unwrap());
        assert!(!lt("0.2", "0.1").unwrap());
    }

    #[test]
    fn test_abs() {
        assert_eq!(abs("-3.2").unwrap(), "3.2");
        assert_eq!(abs("3.2").unwrap(), "3.2");
        assert_eq!(abs(-0.0).unwrap(), "0");
    }

    #[test]
    fn test_max_min() {
        assert_eq!(max(["1", "2", "3"]).unwrap(), "3");
        assert_eq!(max(["-1", "-2", "-3"]).unwrap(), "-1");
        assert_eq!(min(["1", "2", "3"]).unwrap(), "1");
        assert_eq!(min(["-1", "-2", "-3"]).unwrap(), "-3");
    }

    #[test]
    fn test_max_min_preserve_the_winning_literal() {
        assert_eq!(max(["0.5", "1.00"]).unwrap(), "1.00");
        assert_eq!(min(["0.50", "1.0"]).unwrap(), "0.50");
        // Equal values keep the earliest spelling
        assert_eq!(max(["2.50", "2.5"]).unwrap(), "2.50");
        assert_eq!(min(["2.5", "2.50"]).unwrap(), "2.5");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 2, DEFAULT_PERCENTAGE_PRECISION).unwrap(), "50.00");
        assert_eq!(percentage("1", "4", 2).unwrap(), "25.00");
        assert_eq!(percentage(2, 5, 2).unwrap(), "40.00");
        assert_eq!(percentage(1, 3, 1).unwrap(), "33.3");
        assert_eq!(percentage(1, 3, 3).unwrap(), "33.333");
        assert_eq!(percentage("2", "3", 4).unwrap(), "66.6667");
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(1, 0, 2), Err(DecimalError::DivisionByZero));
        assert_eq!(percentage("1", "0", 2), Err(DecimalError::DivisionByZero));
        assert_eq!(percentage("1", "-0.0", 2), Err(DecimalError::DivisionByZero));
    }

    #[test]
    fn test_percentage_sign_propagation() {
        assert_eq!(percentage(-1, 2, 2).unwrap(), "-50.00");
        assert_eq!(percentage(1, -2, 2).unwrap(), "-50.00");
        assert_eq!(percentage(-1, -2, 2).unwrap(), "50.00");
    }

    #[test]
    fn test_percentage_decimal_operands() {
        assert_eq!(percentage(0.1, 0.2, 2).unwrap(), "50.00");
        assert_eq!(percentage("0.3", "1.5", 2).unwrap(), "20.00");
        assert_eq!(percentage(1.5, 3, 1).unwrap(), "50.0");
    }
}
