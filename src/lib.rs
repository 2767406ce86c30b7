//! # strformat
//!
//! A printf-style string formatting engine for dynamically typed arguments.
//!
//! A template such as `"%-10s|%05.1f"` is scanned for conversion specifiers;
//! each specifier draws a [`Value`] from the arguments, coerces it to the type
//! its conversion letter expects and pads the result. Formatting never fails:
//! malformed specifiers are copied verbatim, missing arguments render as empty
//! strings or `NaN`.
//!
//! ## Quick Start
//!
//! ```rust
//! use strformat::{format, sprintf, Value};
//!
//! assert_eq!(format("%5d|%-5s|", &[Value::from(42), Value::from("ab")]), "   42|ab   |");
//! assert_eq!(sprintf!("%.2f%%", 99.456), "99.46%");
//! ```
//!
//! ## Specifiers
//!
//! ```text
//! %[ref][sign][pad][-][width][.precision]letter
//!
//! ref        N$ (1-based position) or {name}
//! sign       + (always signed) or space (space before positives)
//! pad        0 (zeros after the sign) or 'c (any character)
//! -          left-align
//! letter     s c b d e E f o x X
//! ```
//!
//! `%%` is a literal percent sign. The fields are positional: `%-05d` is
//! left-aligned with width 5, while `%0-5d` selects zero padding first and then
//! left-alignment (which turns the padding back into spaces).
//!
//! | Letter | Meaning |
//! |--------|---------|
//! | `s` | text, truncated to the precision |
//! | `c` | character for a code point |
//! | `b` `o` `d` `x` `X` | integer in base 2, 8, 10, 16, 16 (uppercase) |
//! | `e` `E` | exponential notation, 6 digits by default |
//! | `f` | fixed notation, 6 digits by default |
//!
//! ## Argument Sources
//!
//! A **single** array or object argument becomes the argument source itself;
//! anything else is a positional list:
//!
//! ```rust
//! use strformat::{format, value, Value};
//!
//! assert_eq!(format("%2$s %s", &[Value::from("a"), Value::from("b")]), "b a");
//! assert_eq!(format("%{x} and %{y}", &[value!({"x": "A", "y": "B"})]), "A and B");
//! assert_eq!(format("%s %s", &[value!(["one", "two"])]), "one two");
//! ```
//!
//! Any `T: Serialize` can serve as the source as well:
//!
//! ```rust
//! use serde::Serialize;
//! use strformat::format_serialize;
//!
//! #[derive(Serialize)]
//! struct Order { id: u32, total: f64 }
//!
//! let line = format_serialize("#%{id}06d: %{total}.2f", &Order { id: 42, total: 9.5 }).unwrap();
//! assert_eq!(line, "#000042: 9.50");
//! ```
//!
//! ## Coercion
//!
//! Integer conversions keep the leading integer of the argument's text
//! (`"42px"` → 42, `"0x1f"` → 31), float conversions the leading decimal
//! literal. Input without a numeric prefix renders as `NaN`.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: `trace`
//! records for specifiers kept as text and for missing arguments, `debug`
//! records when [`FormatOptions`] clamp a width or precision.

pub mod args;
mod coerce;
pub mod conversion;
pub mod engine;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod template;
pub mod value;

pub use args::Arguments;
pub use coerce::{number_to_string, parse_float, parse_int};
pub use conversion::Conversion;
pub use engine::Formatter;
pub use error::{Error, Result};
pub use map::ValueMap;
pub use options::FormatOptions;
pub use ser::{to_value, ValueSerializer};
pub use template::Template;
pub use value::{Number, Value};

use serde::Serialize;

/// Formats `template` with the arguments that follow it.
///
/// If `args` holds exactly one array or object, that value is the argument
/// source; otherwise `args` itself is the positional list.
///
/// # Examples
///
/// ```rust
/// use strformat::{format, Value};
///
/// assert_eq!(format("%05d", &[Value::from(-3)]), "-0003");
/// assert_eq!(format("%s %s", &[Value::from("only")]), "only ");
/// assert_eq!(format("%x/%X/%o/%b", &[
///     Value::from(255), Value::from(255), Value::from(8), Value::from(5),
/// ]), "ff/FF/10/101");
/// ```
#[must_use]
pub fn format(template: &str, args: &[Value]) -> String {
    Formatter::default().format(template, args)
}

/// Alias of [`format`].
#[must_use]
pub fn sprintf(template: &str, args: &[Value]) -> String {
    format(template, args)
}

/// Formats an optional template; `None` is returned unchanged without scanning.
///
/// # Examples
///
/// ```rust
/// use strformat::{format_nullable, Value};
///
/// assert_eq!(format_nullable(None, &[Value::from(1)]), None);
/// assert_eq!(format_nullable(Some("%d"), &[Value::from(1)]), Some("1".to_string()));
/// ```
#[must_use]
pub fn format_nullable(template: Option<&str>, args: &[Value]) -> Option<String> {
    template.map(|template| format(template, args))
}

/// Formats `template` with explicit [`FormatOptions`].
#[must_use]
pub fn format_with_options(template: &str, args: &[Value], options: &FormatOptions) -> String {
    Formatter::new(options.clone()).format(template, args)
}

/// Formats `template` using any `T: Serialize` as the single argument.
///
/// Structs and maps give named references, sequences positional ones; a
/// scalar is the first positional argument.
///
/// # Errors
///
/// Returns an error if `args` cannot be converted into a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_serialize<T>(template: &str, args: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(args)?;
    Ok(format(template, std::slice::from_ref(&value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct User {
        name: String,
        age: u32,
    }

    #[test]
    fn test_format_entry_points() {
        let args = [Value::from("x")];
        assert_eq!(format("[%s]", &args), "[x]");
        assert_eq!(sprintf("[%s]", &args), "[x]");
        assert_eq!(format_nullable(Some("[%s]"), &args), Some("[x]".to_string()));
        assert_eq!(format_nullable(None, &args), None);
    }

    #[test]
    fn test_format_serialize_struct() {
        let user = User {
            name: "Alice".to_string(),
            age: 30,
        };
        assert_eq!(
            format_serialize("%{name} is %{age}d", &user).unwrap(),
            "Alice is 30"
        );
    }

    #[test]
    fn test_format_serialize_sequence_and_scalar() {
        assert_eq!(format_serialize("%2$s%1$s", &["a", "b"]).unwrap(), "ba");
        assert_eq!(format_serialize("%d!", &7).unwrap(), "7!");
    }

    #[test]
    fn test_format_with_options() {
        let options = FormatOptions::new().with_max_precision(1);
        assert_eq!(
            format_with_options("%.3e", &[Value::from(1234)], &options),
            "1.2e+3"
        );
    }
}
