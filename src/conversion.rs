//! Conversion letters and their rendering functions.
//!
//! | Letter | Coercion | Output | Sign |
//! |--------|----------|--------|------|
//! | `s` | text | truncated to precision | suppressed |
//! | `c` | integer | character at code point | suppressed |
//! | `b` | integer | base 2 | suppressed |
//! | `d` | integer | base 10 | yes |
//! | `o` | integer | base 8 | yes |
//! | `x` / `X` | integer | base 16 lower / upper | yes |
//! | `e` / `E` | float | exponential, precision 6 | yes |
//! | `f` | float | fixed, precision 6 | yes |
//!
//! Numeric conversions render the absolute value; the sign is placed by the
//! padding step.

use crate::coerce::{float_of, to_exponential, to_fixed, Integral};
use crate::parser::{SignFlag, Specifier};
use crate::Value;

/// A built-in conversion letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `s`
    String,
    /// `c`
    Char,
    /// `b`
    Binary,
    /// `d`
    Decimal,
    /// `o`
    Octal,
    /// `x`
    HexLower,
    /// `X`
    HexUpper,
    /// `e`
    ExpLower,
    /// `E`
    ExpUpper,
    /// `f`
    Fixed,
}

impl Conversion {
    /// All conversions, in letter order `s c b d e E f o x X`.
    pub const ALL: [Conversion; 10] = [
        Conversion::String,
        Conversion::Char,
        Conversion::Binary,
        Conversion::Decimal,
        Conversion::ExpLower,
        Conversion::ExpUpper,
        Conversion::Fixed,
        Conversion::Octal,
        Conversion::HexLower,
        Conversion::HexUpper,
    ];

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            's' => Conversion::String,
            'c' => Conversion::Char,
            'b' => Conversion::Binary,
            'd' => Conversion::Decimal,
            'o' => Conversion::Octal,
            'x' => Conversion::HexLower,
            'X' => Conversion::HexUpper,
            'e' => Conversion::ExpLower,
            'E' => Conversion::ExpUpper,
            'f' => Conversion::Fixed,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Conversion::String => 's',
            Conversion::Char => 'c',
            Conversion::Binary => 'b',
            Conversion::Decimal => 'd',
            Conversion::Octal => 'o',
            Conversion::HexLower => 'x',
            Conversion::HexUpper => 'X',
            Conversion::ExpLower => 'e',
            Conversion::ExpUpper => 'E',
            Conversion::Fixed => 'f',
        }
    }

    /// `true` for conversions that never carry a sign.
    #[must_use]
    pub const fn suppresses_sign(self) -> bool {
        matches!(
            self,
            Conversion::String | Conversion::Char | Conversion::Binary
        )
    }
}

/// Sign placed in front of a rendered value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    None,
    Minus,
    Flag(SignFlag),
}

impl Sign {
    fn new(negative: bool, flag: Option<SignFlag>) -> Self {
        match (negative, flag) {
            (true, _) => Sign::Minus,
            (false, Some(flag)) => Sign::Flag(flag),
            (false, None) => Sign::None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sign::None => "",
            Sign::Minus => "-",
            Sign::Flag(SignFlag::Plus) => "+",
            Sign::Flag(SignFlag::Space) => " ",
        }
    }
}

/// Output of one conversion, before padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub sign: Sign,
    /// Length to pad against instead of the length of `text`.
    pub length: Option<usize>,
}

/// Precision limits applied by a conversion.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PrecisionRules {
    pub default: usize,
    pub max: usize,
}

/// Applies `conversion` to `value` (`None` when the argument is missing).
pub(crate) fn convert(
    conversion: Conversion,
    value: Option<&Value>,
    spec: &Specifier<'_>,
    rules: PrecisionRules,
) -> Rendered {
    let float_precision = || spec.precision.unwrap_or(rules.default).min(rules.max);

    let (text, negative, length) = match conversion {
        Conversion::String => {
            let text = value.map(ToString::to_string).unwrap_or_default();
            let text = match spec.precision {
                Some(max_units) => truncate_utf16(&text, max_units).to_string(),
                None => text,
            };
            (text, false, None)
        }
        Conversion::Char => (Integral::of(value).to_char().to_string(), false, None),
        Conversion::Binary | Conversion::Decimal | Conversion::Octal | Conversion::HexLower => {
            let n = Integral::of(value);
            (n.render_abs(radix(conversion)), n.is_negative(), None)
        }
        Conversion::HexUpper => {
            let n = Integral::of(value);
            (uppercase_digits(n.render_abs(16), n.is_finite()), n.is_negative(), None)
        }
        Conversion::ExpLower | Conversion::ExpUpper => {
            let x = float_of(value);
            let text = to_exponential(x.abs(), float_precision());
            let text = if conversion == Conversion::ExpUpper {
                uppercase_digits(text, x.is_finite())
            } else {
                text
            };
            (text, x < 0.0, None)
        }
        Conversion::Fixed => {
            let x = float_of(value);
            let text = to_fixed(x.abs(), float_precision());
            let integer_len = text.split('.').next().map_or(0, utf16_len);
            (text, x < 0.0, Some(integer_len))
        }
    };

    let sign = if conversion.suppresses_sign() {
        Sign::None
    } else {
        Sign::new(negative, spec.sign)
    };
    Rendered { text, sign, length }
}

fn radix(conversion: Conversion) -> u32 {
    match conversion {
        Conversion::Binary => 2,
        Conversion::Octal => 8,
        Conversion::HexLower | Conversion::HexUpper => 16,
        _ => 10,
    }
}

/// Uppercases digits and exponent markers of a finite value; `NaN` and
/// `Infinity` keep their spelling.
fn uppercase_digits(text: String, finite: bool) -> String {
    if finite {
        text.to_ascii_uppercase()
    } else {
        text
    }
}

/// Length in UTF-16 code units.
pub(crate) fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Longest prefix of `text` not exceeding `max_units` UTF-16 code units.
///
/// A character that would straddle the limit is dropped whole.
fn truncate_utf16(text: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (idx, c) in text.char_indices() {
        units += c.len_utf16();
        if units > max_units {
            return &text[..idx];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: PrecisionRules = PrecisionRules {
        default: 6,
        max: 100,
    };

    fn run(letter: char, value: Option<Value>, spec: Specifier<'_>) -> Rendered {
        let conversion = Conversion::from_letter(letter).unwrap();
        convert(conversion, value.as_ref(), &spec, RULES)
    }

    fn text(letter: char, value: impl Into<Value>) -> String {
        run(letter, Some(value.into()), Specifier::default()).text
    }

    #[test]
    fn test_letters_roundtrip() {
        for conversion in Conversion::ALL {
            assert_eq!(Conversion::from_letter(conversion.letter()), Some(conversion));
        }
        assert_eq!(Conversion::from_letter('i'), None);
        assert_eq!(Conversion::from_letter('%'), None);
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(text('s', "hello"), "hello");
        assert_eq!(text('s', 1.5), "1.5");
        assert_eq!(run('s', None, Specifier::default()).text, "");

        let spec = Specifier {
            precision: Some(2),
            sign: Some(SignFlag::Plus),
            ..Specifier::default()
        };
        let out = run('s', Some(Value::from("hello")), spec);
        assert_eq!(out.text, "he");
        assert_eq!(out.sign, Sign::None);
    }

    #[test]
    fn test_string_truncation_counts_utf16_units() {
        assert_eq!(truncate_utf16("a😀b", 1), "a");
        assert_eq!(truncate_utf16("a😀b", 2), "a");
        assert_eq!(truncate_utf16("a😀b", 3), "a😀");
        assert_eq!(truncate_utf16("héllo", 0), "");
        assert_eq!(utf16_len("a😀b"), 4);
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(text('d', 42), "42");
        assert_eq!(text('d', "42.9abc"), "42");
        assert_eq!(text('d', "abc"), "NaN");
        assert_eq!(text('x', 255), "ff");
        assert_eq!(text('X', 255), "FF");
        assert_eq!(text('X', "zz"), "NaN");
        assert_eq!(text('X', 171), "AB");
        assert_eq!(text('X', 10), "A");
        assert_eq!(text('X', 26), "1A");
        assert_eq!(text('X', "0xbeef"), "BEEF");
        assert_eq!(text('X', f64::INFINITY), "NaN");
        assert_eq!(text('o', 8), "10");
        assert_eq!(text('b', 5), "101");
        assert_eq!(text('b', -5), "101");
        assert_eq!(run('d', None, Specifier::default()).text, "NaN");
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(text('c', 65), "A");
        assert_eq!(text('c', "97"), "a");
        assert_eq!(text('c', "x"), "\0");
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(text('f', 3), "3.000000");
        assert_eq!(text('e', 1234.5), "1.234500e+3");
        assert_eq!(text('E', 0.000123), "1.230000E-4");
        assert_eq!(text('E', "x"), "NaN");
        assert_eq!(text('E', f64::NEG_INFINITY), "Infinity");
        assert_eq!(text('f', "x"), "NaN");

        let spec = Specifier {
            precision: Some(2),
            ..Specifier::default()
        };
        let out = run('f', Some(Value::from(-123.456)), spec);
        assert_eq!(out.text, "123.46");
        assert_eq!(out.sign, Sign::Minus);
        assert_eq!(out.length, Some(3));
    }

    #[test]
    fn test_float_sign_follows_float_coercion_not_integer_prefix() {
        // "-0.04" has integer prefix -0, but its float value is negative
        let spec = Specifier {
            precision: Some(1),
            ..Specifier::default()
        };
        let out = run('f', Some(Value::from("-0.04")), spec.clone());
        assert_eq!((out.sign, out.text.as_str()), (Sign::Minus, "0.0"));

        let out = run('e', Some(Value::from("-0.04")), spec);
        assert_eq!((out.sign, out.text.as_str()), (Sign::Minus, "4.0e-2"));
    }

    #[test]
    fn test_precision_is_clamped() {
        let spec = Specifier {
            precision: Some(5000),
            ..Specifier::default()
        };
        let out = run('f', Some(Value::from(1)), spec);
        assert_eq!(out.text.len(), 2 + 100);
    }

    #[test]
    fn test_sign_rules() {
        let plus = Specifier {
            sign: Some(SignFlag::Plus),
            ..Specifier::default()
        };
        assert_eq!(run('d', Some(Value::from(5)), plus.clone()).sign, Sign::Flag(SignFlag::Plus));
        assert_eq!(run('d', Some(Value::from(-5)), plus.clone()).sign, Sign::Minus);
        assert_eq!(run('c', Some(Value::from(-65)), plus.clone()).sign, Sign::None);
        assert_eq!(run('b', Some(Value::from(-5)), plus.clone()).sign, Sign::None);
        assert_eq!(run('f', Some(Value::from(-0.5)), plus.clone()).sign, Sign::Minus);
        assert_eq!(run('d', Some(Value::from("-0")), plus).sign, Sign::Flag(SignFlag::Plus));
        assert_eq!(run('x', Some(Value::from(-1)), Specifier::default()).sign, Sign::Minus);
        assert_eq!(run('d', Some(Value::from(7)), Specifier::default()).sign, Sign::None);
    }
}
