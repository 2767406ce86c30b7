//! A template parsed once and formatted many times.
//!
//! ```rust
//! use strformat::{Template, Value};
//!
//! let greeting = Template::new("Hello, %s! You have %d new messages.");
//! assert_eq!(greeting.placeholders(), 2);
//! assert_eq!(
//!     greeting.format(&[Value::from("Ada"), Value::from(3)]),
//!     "Hello, Ada! You have 3 new messages."
//! );
//! ```

use crate::engine::Formatter;
use crate::parser::{parse, Segment};
use crate::Value;
use std::fmt;

/// A borrowed template together with its scanned segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Template {
            source,
            segments: parse(source),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Number of implicit argument slots one rendering consumes.
    ///
    /// Explicit `%N$` and `%{name}` references, `%%` and unrecognized `%` are
    /// not counted.
    #[must_use]
    pub fn placeholders(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Spec(spec, _) if spec.consumes_implicit()))
            .count()
    }

    /// Formats this template with default options.
    #[must_use]
    pub fn format(&self, args: &[Value]) -> String {
        self.format_with(&Formatter::default(), args)
    }

    /// Formats this template with a configured [`Formatter`].
    #[must_use]
    pub fn format_with(&self, formatter: &Formatter, args: &[Value]) -> String {
        formatter.render(&self.segments, args)
    }
}

impl<'a> From<&'a str> for Template<'a> {
    fn from(source: &'a str) -> Self {
        Template::new(source)
    }
}

impl fmt::Display for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}
