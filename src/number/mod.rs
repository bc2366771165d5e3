// ============================================================================
// Native Number Surface
// Convenience operations returning f64
// ============================================================================
//
// Same exact computation as the string surface: operands are converted to
// the decimal representation, the arithmetic runs there, and only the
// finished result is converted to f64. That is why `add(0.1, 0.2)` returns
// exactly `0.3` instead of `0.30000000000000004`.

use crate::numeric::{DecimalResult, ToDecimal};

/// Exact sum, converted to f64 as the last step.
///
/// # Example
/// ```
/// use exact_decimal::number;
///
/// assert_eq!(number::add(0.1, 0.2).unwrap(), 0.3);
/// ```
pub fn add(augend: f64, addend: f64) -> DecimalResult<f64> {
    augend.to_decimal()?.checked_add(addend.to_decimal()?)?.to_f64()
}

/// Exact difference, converted to f64 as the last step.
pub fn subtract(minuend: f64, subtrahend: f64) -> DecimalResult<f64> {
    minuend.to_decimal()?.checked_sub(subtrahend.to_decimal()?)?.to_f64()
}

/// Exact product, converted to f64 as the last step.
pub fn multiply(multiplier: f64, multiplicand: f64) -> DecimalResult<f64> {
    multiplier.to_decimal()?.checked_mul(multiplicand.to_decimal()?)?.to_f64()
}

/// Exact quotient at full backend precision, converted to f64 as the last
/// step. Fails with `DivisionByZero` on a zero divisor, never infinity or NaN.
pub fn divide(dividend: f64, divisor: f64) -> DecimalResult<f64> {
    dividend.to_decimal()?.checked_div(divisor.to_decimal()?)?.to_f64()
}

/// Round half-up at `precision` fractional digits, ties toward positive
/// infinity: `round(-4.5, 0)` is `-4.0`.
pub fn round(value: f64, precision: u32) -> DecimalResult<f64> {
    value.to_decimal()?.round_dp(precision).to_f64()
}

/// Mathematical ceiling at `precision` fractional digits.
pub fn ceil(value: f64, precision: u32) -> DecimalResult<f64> {
    value.to_decimal()?.ceil_dp(precision).to_f64()
}

/// Mathematical floor at `precision` fractional digits.
pub fn floor(value: f64, precision: u32) -> DecimalResult<f64> {
    value.to_decimal()?.floor_dp(precision).to_f64()
}

/// Formatting options for [`format`].
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Fractional digits to render (half-up at the cutoff)
    pub precision: u32,
    /// Separator inserted between thousands groups of the integer part
    pub thousands_separator: char,
    /// Separator between the integer and fractional parts
    pub decimal_separator: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

/// Render a number with fixed precision and thousands grouping.
///
/// # Example
/// ```
/// use exact_decimal::number::{format, FormatOptions};
///
/// let text = format(1234.5678, &FormatOptions::default()).unwrap();
/// assert_eq!(text, "1,234.57");
/// ```
pub fn format(value: f64, options: &FormatOptions) -> DecimalResult<String> {
    let fixed = value.to_decimal()?.format_fixed(options.precision);

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(options.thousands_separator);
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push(options.decimal_separator);
        out.push_str(frac);
    }
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
