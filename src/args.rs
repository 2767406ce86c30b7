//! Argument resolution.
//!
//! The arguments trailing a template become an [`Arguments`] source exactly
//! once per call:
//!
//! - a **single** array or object argument is itself the source (positional
//!   by array index, or named by key);
//! - anything else, including a single scalar, is a positional sequence of
//!   all the arguments.
//!
//! ```rust
//! use strformat::{format, value};
//!
//! // one object: named references
//! assert_eq!(format("%{x}-%{y}", &[value!({"x": 1, "y": 2})]), "1-2");
//! // one array: its elements are the arguments
//! assert_eq!(format("%2$s%1$s", &[value!(["a", "b"])]), "ba");
//! // two arrays: each array is an argument
//! assert_eq!(format("%s|%s", &[value!([1, 2]), value!([3])]), "1,2|3");
//! ```

use crate::parser::Reference;
use crate::{Value, ValueMap};

/// Where specifier values are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arguments<'a> {
    Positional(&'a [Value]),
    Named(&'a ValueMap),
}

impl<'a> Arguments<'a> {
    /// Chooses the argument source for the arguments following a template.
    #[must_use]
    pub fn from_args(args: &'a [Value]) -> Self {
        match args {
            [Value::Array(items)] => Arguments::Positional(items),
            [Value::Object(map)] => Arguments::Named(map),
            _ => Arguments::Positional(args),
        }
    }

    /// Looks up the zero-based position `index`.
    ///
    /// In named mode the key is the decimal form of `index`.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&'a Value> {
        match *self {
            Arguments::Positional(items) => items.get(index),
            Arguments::Named(map) => map.get(&index.to_string()),
        }
    }

    /// Looks up `key`.
    ///
    /// In positional mode only canonical array indices (`"0"`, `"12"`, not
    /// `"012"`) resolve.
    #[must_use]
    pub fn named(&self, key: &str) -> Option<&'a Value> {
        match *self {
            Arguments::Positional(items) => array_index(key).and_then(|i| items.get(i)),
            Arguments::Named(map) => map.get(key),
        }
    }

    /// Resolves an explicit reference; `%0$` never resolves.
    #[must_use]
    pub fn resolve(&self, reference: &Reference<'_>) -> Option<&'a Value> {
        match reference {
            Reference::Index(position) => position.checked_sub(1).and_then(|i| self.at(i)),
            Reference::Name(key) => self.named(key),
        }
    }
}

fn array_index(key: &str) -> Option<usize> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Implicit-argument cursor for one formatting call.
#[derive(Debug)]
pub(crate) struct Resolver<'a> {
    source: Arguments<'a>,
    cursor: usize,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(source: Arguments<'a>) -> Self {
        Resolver {
            source,
            cursor: 0,
        }
    }

    /// The value for a specifier, advancing the cursor only for implicit
    /// references that actually convert.
    pub(crate) fn next(
        &mut self,
        reference: Option<&Reference<'_>>,
        consumes: bool,
    ) -> Option<&'a Value> {
        match reference {
            Some(reference) => self.source.resolve(reference),
            None => {
                let value = self.source.at(self.cursor);
                if consumes {
                    self.cursor += 1;
                }
                value
            }
        }
    }

    /// Number of implicit slots consumed so far.
    pub(crate) fn consumed(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_single_scalar_stays_positional() {
        let args = [Value::from(5)];
        assert_eq!(Arguments::from_args(&args), Arguments::Positional(&args));
    }

    #[test]
    fn test_single_array_is_the_source() {
        let args = [value!(["a", "b"])];
        let source = Arguments::from_args(&args);
        assert_eq!(source.at(1), Some(&Value::from("b")));
        assert_eq!(source.named("0"), Some(&Value::from("a")));
        assert_eq!(source.named("00"), None);
        assert_eq!(source.named("x"), None);
    }

    #[test]
    fn test_single_object_is_named() {
        let args = [value!({"x": "A", "0": "zero"})];
        let source = Arguments::from_args(&args);
        assert_eq!(source.named("x"), Some(&Value::from("A")));
        assert_eq!(source.at(0), Some(&Value::from("zero")));
        assert_eq!(source.resolve(&Reference::Index(1)), Some(&Value::from("zero")));
    }

    #[test]
    fn test_multiple_collections_stay_positional() {
        let args = [value!({"x": 1}), value!([2])];
        assert!(matches!(
            Arguments::from_args(&args),
            Arguments::Positional(items) if items.len() == 2
        ));
    }

    #[test]
    fn test_zero_index_never_resolves() {
        let args = [Value::from("a")];
        let source = Arguments::from_args(&args);
        assert_eq!(source.resolve(&Reference::Index(0)), None);
        assert_eq!(source.resolve(&Reference::Index(1)), Some(&Value::from("a")));
        assert_eq!(source.resolve(&Reference::Index(usize::MAX)), None);
    }

    #[test]
    fn test_resolver_cursor() {
        let args = [Value::from("a"), Value::from("b")];
        let mut resolver = Resolver::new(Arguments::from_args(&args));

        assert_eq!(resolver.next(Some(&Reference::Index(2)), true), Some(&Value::from("b")));
        assert_eq!(resolver.consumed(), 0);
        assert_eq!(resolver.next(None, false), Some(&Value::from("a")));
        assert_eq!(resolver.consumed(), 0);
        assert_eq!(resolver.next(None, true), Some(&Value::from("a")));
        assert_eq!(resolver.next(None, true), Some(&Value::from("b")));
        assert_eq!(resolver.next(None, true), None);
        assert_eq!(resolver.consumed(), 3);
    }
}
