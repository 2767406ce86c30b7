//! Numeric coercion and digit generation.
//!
//! Every conversion letter coerces its argument before rendering. Coercion is
//! total: input without a numeric prefix becomes `NaN` instead of an error, and
//! `NaN`/infinite values render as `NaN`/`Infinity`.
//!
//! Integer coercion reads the text of the value and keeps the longest leading
//! run of digits (`"42px"` → 42, `"0x1f"` → 31, `"px"` → NaN). Float coercion
//! keeps the longest leading decimal literal (`"3.5e2kg"` → 350).
//!
//! `std::fmt` is only used to obtain exact or shortest round-trip digits; all
//! rounding for `%e` and `%f` is done here, half-up on the exact binary value.

use crate::value::{Number, Value};
use num_bigint::BigUint;

/// Integer coercion of an argument.
///
/// Integer values keep their exact `i64`; everything else goes through the
/// text-prefix parse and is carried as a double, which may be `NaN`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Integral {
    Exact(i64),
    Double(f64),
}

impl Integral {
    /// Coerces an argument, `None` being a missing argument.
    pub(crate) fn of(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(Number::Integer(i))) => Integral::Exact(*i),
            Some(other) => Integral::Double(parse_int(&other.to_string())),
            None => Integral::Double(f64::NAN),
        }
    }

    pub(crate) fn is_finite(self) -> bool {
        match self {
            Integral::Exact(_) => true,
            Integral::Double(d) => d.is_finite(),
        }
    }

    pub(crate) fn is_negative(self) -> bool {
        match self {
            Integral::Exact(i) => i < 0,
            Integral::Double(d) => d < 0.0,
        }
    }

    /// Renders the absolute value in `radix` (2, 8, 10 or 16), lowercase.
    pub(crate) fn render_abs(self, radix: u32) -> String {
        match self {
            Integral::Exact(i) => BigUint::from(i.unsigned_abs()).to_str_radix(radix),
            Integral::Double(d) => {
                let d = d.abs();
                if !d.is_finite() || radix == 10 {
                    number_to_string(d)
                } else {
                    integer_to_radix(d, radix)
                }
            }
        }
    }

    /// The character whose code point is the absolute value.
    ///
    /// `NaN` and infinities map to U+0000; surrogates and values beyond
    /// U+10FFFF map to U+FFFD.
    pub(crate) fn to_char(self) -> char {
        let code = match self {
            Integral::Exact(i) => u32::try_from(i.unsigned_abs()).ok(),
            Integral::Double(d) if !d.is_finite() => Some(0),
            Integral::Double(d) => {
                let d = d.abs();
                (d <= f64::from(u32::MAX)).then_some(d as u32)
            }
        };
        code.and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Float coercion of an argument, `None` being a missing argument.
pub(crate) fn float_of(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(other) => parse_float(&other.to_string()),
        None => f64::NAN,
    }
}

fn skip_whitespace(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Parses the leading integer of `text`, returning `NaN` when there is none.
///
/// A `0x`/`0X` prefix selects base 16; otherwise base 10.
///
/// ```text
/// "  42px" -> 42     "-7.9" -> -7     "0x1F" -> 31     "abc" -> NaN
/// ```
pub fn parse_int(text: &str) -> f64 {
    let (negative, rest) = split_sign(skip_whitespace(text));
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    if end == 0 {
        return f64::NAN;
    }
    let digits = &rest[..end];

    let magnitude = if radix == 10 {
        // digits only, so this is a correctly rounded decimal parse
        digits.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Parses the leading decimal literal of `text`, returning `NaN` when there is none.
///
/// ```text
/// "3.5e2kg" -> 350     ".5" -> 0.5     "-Infinity" -> -inf     "e5" -> NaN
/// ```
pub fn parse_float(text: &str) -> f64 {
    let (negative, rest) = split_sign(skip_whitespace(text));
    let magnitude = if rest.starts_with("Infinity") {
        f64::INFINITY
    } else {
        let end = decimal_literal_len(rest.as_bytes());
        if end == 0 {
            return f64::NAN;
        }
        rest[..end].parse::<f64>().unwrap_or(f64::NAN)
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Length of the longest prefix matching `digits [. digits] [e [sign] digits]`
/// with at least one mantissa digit, or 0.
fn decimal_literal_len(bytes: &[u8]) -> usize {
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = count_digits(0);
    let mut pos = int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(pos + 1);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(exp);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }
    pos
}

/// Renders a double the way it is shown as text: shortest round-trip digits,
/// exponent form outside `[1e-6, 1e21)`.
///
/// ```text
/// 3.0 -> "3"     0.1 -> "0.1"     1e21 -> "1e+21"     1.5e-7 -> "1.5e-7"     -0.0 -> "0"
/// ```
pub fn number_to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let abs = x.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", x);
    }

    let shortest = format!("{:e}", x);
    match shortest.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => shortest,
    }
}

/// Renders a non-negative integral double in a power-of-two radix, exactly.
fn integer_to_radix(x: f64, radix: u32) -> String {
    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    if biased == 0 {
        // zero or subnormal; an integral subnormal is zero
        return "0".to_string();
    }
    let mantissa = BigUint::from((bits & ((1u64 << 52) - 1)) | (1u64 << 52));
    let exponent = biased - 1075;
    let value = if exponent >= 0 {
        mantissa << exponent as usize
    } else {
        mantissa >> (-exponent) as usize
    };
    value.to_str_radix(radix)
}

/// Exact decimal expansion of a finite non-negative double.
///
/// Returns the significant digits (first digit non-zero unless `x == 0`) and
/// the decimal exponent of the first digit.
fn exact_digits(x: f64) -> (Vec<u8>, i64) {
    // 767 significant digits cover every finite double exactly
    let text = format!("{:.767e}", x);
    let (mantissa, exp) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    (digits, exp.parse().unwrap_or(0))
}

/// Adds one unit in the last place; returns `true` on carry out of the front.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

fn digit_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// Fixed-point rendering with `precision` fraction digits, rounding half-up.
///
/// Values at or above `1e21` fall back to [`number_to_string`].
pub fn to_fixed(x: f64, precision: usize) -> String {
    if !x.is_finite() || x.abs() >= 1e21 {
        return number_to_string(x);
    }
    let sign = if x < 0.0 { "-" } else { "" };
    let (digits, exp) = exact_digits(x.abs());
    let digit_at = |i: i64| {
        usize::try_from(i)
            .ok()
            .and_then(|i| digits.get(i).copied())
            .unwrap_or(0)
    };

    let keep = exp + 1 + precision as i64;
    let mut kept: Vec<u8> = (0..keep.max(0)).map(digit_at).collect();
    if keep >= 0 && digit_at(keep) >= 5 && increment(&mut kept) {
        kept.insert(0, 1);
    }
    if kept.len() <= precision {
        let mut padded = vec![0; precision + 1 - kept.len()];
        padded.extend_from_slice(&kept);
        kept = padded;
    }

    let (int_part, frac_part) = kept.split_at(kept.len() - precision);
    if precision == 0 {
        format!("{}{}", sign, digit_string(int_part))
    } else {
        format!(
            "{}{}.{}",
            sign,
            digit_string(int_part),
            digit_string(frac_part)
        )
    }
}

/// Exponential rendering with `precision` fraction digits, rounding half-up.
///
/// The exponent is written with an explicit sign and no padding: `1.5e+0`.
pub fn to_exponential(x: f64, precision: usize) -> String {
    if !x.is_finite() {
        return number_to_string(x);
    }
    let sign = if x < 0.0 { "-" } else { "" };
    let (digits, mut exp) = exact_digits(x.abs());

    let mut kept: Vec<u8> = (0..=precision)
        .map(|i| digits.get(i).copied().unwrap_or(0))
        .collect();
    let next = digits.get(precision + 1).copied().unwrap_or(0);
    if next >= 5 && increment(&mut kept) {
        kept.insert(0, 1);
        kept.truncate(precision + 1);
        exp += 1;
    }

    let mut out = String::with_capacity(precision + 8);
    out.push_str(sign);
    out.push_str(&digit_string(&kept[..1]));
    if precision > 0 {
        out.push('.');
        out.push_str(&digit_string(&kept[1..]));
    }
    out.push('e');
    out.push(if exp < 0 { '-' } else { '+' });
    out.push_str(&exp.abs().to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_prefixes() {
        assert_eq!(parse_int("42"), 42.0);
        assert_eq!(parse_int("  42px"), 42.0);
        assert_eq!(parse_int("-7.9"), -7.0);
        assert_eq!(parse_int("+3"), 3.0);
        assert_eq!(parse_int("0x1F"), 31.0);
        assert_eq!(parse_int("1e21"), 1.0);
        assert!(parse_int("abc").is_nan());
        assert!(parse_int("").is_nan());
        assert!(parse_int("-").is_nan());
        assert!(parse_int("0x").is_nan());
    }

    #[test]
    fn test_parse_int_negative_zero_is_not_negative() {
        let zero = parse_int("-0");
        assert_eq!(zero, 0.0);
        assert!(!(zero < 0.0));
    }

    #[test]
    fn test_parse_float_prefixes() {
        assert_eq!(parse_float("3.14"), 3.14);
        assert_eq!(parse_float("3.5e2kg"), 350.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("1e+"), 1.0);
        assert_eq!(parse_float("-2.5"), -2.5);
        assert_eq!(parse_float("Infinityx"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float(".").is_nan());
        assert!(parse_float("e5").is_nan());
        assert!(parse_float("NaN").is_nan());
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(3.0), "3");
        assert_eq!(number_to_string(0.1), "0.1");
        assert_eq!(number_to_string(-2.5), "-2.5");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(3.0, 6), "3.000000");
        assert_eq!(to_fixed(3.14159, 2), "3.14");
        assert_eq!(to_fixed(0.001, 2), "0.00");
        assert_eq!(to_fixed(0.005, 2), "0.01");
        assert_eq!(to_fixed(9.995, 0), "10");
        assert_eq!(to_fixed(99.99, 1), "100.0");
        assert_eq!(to_fixed(0.0, 3), "0.000");
        assert_eq!(to_fixed(-1.5, 1), "-1.5");
        assert_eq!(to_fixed(1e21, 2), "1e+21");
    }

    #[test]
    fn test_to_fixed_rounds_ties_up() {
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(1.125, 2), "1.13");
    }

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(1.5, 6), "1.500000e+0");
        assert_eq!(to_exponential(12345.0, 2), "1.23e+4");
        assert_eq!(to_exponential(0.00015, 1), "1.5e-4");
        assert_eq!(to_exponential(0.0, 2), "0.00e+0");
        assert_eq!(to_exponential(9.99, 1), "1.0e+1");
        assert_eq!(to_exponential(1.25, 1), "1.3e+0");
        assert_eq!(to_exponential(7.0, 0), "7e+0");
        assert_eq!(to_exponential(f64::INFINITY, 3), "Infinity");
    }

    #[test]
    fn test_integral_render() {
        assert_eq!(Integral::Exact(255).render_abs(16), "ff");
        assert_eq!(Integral::Exact(-8).render_abs(8), "10");
        assert_eq!(Integral::Exact(i64::MIN).render_abs(10), "9223372036854775808");
        assert_eq!(Integral::Double(5.0).render_abs(2), "101");
        assert_eq!(Integral::Double(2f64.powi(70)).render_abs(16), "400000000000000000");
        assert_eq!(Integral::Double(f64::NAN).render_abs(16), "NaN");
        assert_eq!(Integral::Double(f64::INFINITY).render_abs(2), "Infinity");
        assert!(Integral::Exact(i64::MAX).is_finite());
        assert!(!Integral::Double(f64::NAN).is_finite());
    }

    #[test]
    fn test_integral_to_char() {
        assert_eq!(Integral::Exact(65).to_char(), 'A');
        assert_eq!(Integral::Exact(-97).to_char(), 'a');
        assert_eq!(Integral::Double(f64::NAN).to_char(), '\0');
        assert_eq!(Integral::Exact(0xD800).to_char(), char::REPLACEMENT_CHARACTER);
        assert_eq!(Integral::Exact(0x11_0000).to_char(), char::REPLACEMENT_CHARACTER);
    }

    #[test]
    fn test_coercion_of_values() {
        assert_eq!(Integral::of(Some(&Value::from("12abc"))), Integral::Double(12.0));
        assert_eq!(Integral::of(Some(&Value::from(-3))), Integral::Exact(-3));
        assert!(matches!(Integral::of(None), Integral::Double(d) if d.is_nan()));
        assert_eq!(float_of(Some(&Value::from("2.5x"))), 2.5);
        assert!(float_of(Some(&Value::Null)).is_nan());
        assert!(float_of(None).is_nan());
    }
}
