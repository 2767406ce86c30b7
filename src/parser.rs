//! Template scanning.
//!
//! A template is split in a single forward pass into [`Segment`]s: literal runs,
//! `%%` escapes and conversion specifiers. The specifier grammar is:
//!
//! ```text
//! specifier := "%%" | "%" reference? ( sign? pad? "-"? width? precision? letter )?
//! reference := digits "$" | "{" [A-Za-z0-9_]+ "}"
//! sign      := "+" | " "
//! pad       := "0" | "'" any-char-but-line-terminator
//! width     := digits
//! precision := "." digits?
//! letter    := s c b d e E f o x X
//! ```
//!
//! Fields are positional, never free-form: in `%-05d` the `-` comes before any
//! pad flag can, so `05` is read as the width and the result is left-aligned
//! with width 5 and space padding. The part after the reference is
//! all-or-nothing: without a letter to complete it nothing after the reference
//! is consumed.
//!
//! ```rust
//! use strformat::parser::{parse, Segment};
//!
//! let segments = parse("%5d%%!");
//! assert_eq!(segments.len(), 3);
//! assert!(matches!(segments[1], Segment::Percent));
//! assert!(matches!(segments[2], Segment::Literal("!")));
//! ```

use crate::conversion::Conversion;

/// How a specifier names its argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reference<'a> {
    /// `%N$`: one-based position.
    Index(usize),
    /// `%{name}`.
    Name(&'a str),
}

/// The `+` or space flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignFlag {
    Plus,
    Space,
}

impl SignFlag {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            SignFlag::Plus => '+',
            SignFlag::Space => ' ',
        }
    }
}

/// Padding character selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pad {
    /// `0`: zero padding, inserted between sign and value.
    Zero,
    /// `'c`: custom padding character.
    Char(char),
}

impl Pad {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Pad::Zero => '0',
            Pad::Char(c) => c,
        }
    }
}

/// One parsed `%...` occurrence.
///
/// A specifier with neither `reference` nor `conversion` is a lone `%`; it is
/// rendered as itself and consumes no argument.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Specifier<'a> {
    pub reference: Option<Reference<'a>>,
    pub sign: Option<SignFlag>,
    pub pad: Option<Pad>,
    pub left_align: bool,
    /// Saturates at `usize::MAX`.
    pub width: Option<usize>,
    /// `None` also for a bare `.`.
    pub precision: Option<usize>,
    pub conversion: Option<Conversion>,
}

impl Specifier<'_> {
    /// The conversion actually applied: the letter, or `s` when only a
    /// reference was given. `None` for a lone `%`.
    #[must_use]
    pub fn effective_conversion(&self) -> Option<Conversion> {
        match (self.conversion, &self.reference) {
            (Some(conversion), _) => Some(conversion),
            (None, Some(_)) => Some(Conversion::String),
            (None, None) => None,
        }
    }

    /// `true` if rendering this specifier advances the implicit cursor.
    #[must_use]
    pub fn consumes_implicit(&self) -> bool {
        self.reference.is_none() && self.conversion.is_some()
    }
}

/// A piece of a scanned template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied verbatim.
    Literal(&'a str),
    /// `%%`.
    Percent,
    /// A specifier together with its source text.
    Spec(Specifier<'a>, &'a str),
}

/// Splits `template` into segments.
///
/// Adjacent literal text is merged; an unrecognized `%` is kept as a
/// [`Segment::Spec`] with no conversion so that the renderer can emit it
/// unchanged.
#[must_use]
pub fn parse(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(offset) = rest.find('%') {
        if offset > 0 {
            segments.push(Segment::Literal(&rest[..offset]));
        }
        let tail = &rest[offset..];
        if tail.starts_with("%%") {
            segments.push(Segment::Percent);
            rest = &tail[2..];
            continue;
        }
        let (spec, consumed) = parse_specifier(tail);
        segments.push(Segment::Spec(spec, &tail[..consumed]));
        rest = &tail[consumed..];
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    segments
}

/// Parses one specifier at the start of `input`, which begins with `%`.
///
/// Returns the specifier and the number of bytes consumed, `%` included.
/// Never fails: the shortest match is a lone `%`.
pub(crate) fn parse_specifier(input: &str) -> (Specifier<'_>, usize) {
    let mut cursor = Cursor::new(input, 1);
    let reference = cursor.reference();
    let after_reference = cursor.pos;

    let mut spec = Specifier {
        reference,
        ..Specifier::default()
    };

    spec.sign = match cursor.peek() {
        Some('+') => {
            cursor.bump('+');
            Some(SignFlag::Plus)
        }
        Some(' ') => {
            cursor.bump(' ');
            Some(SignFlag::Space)
        }
        _ => None,
    };
    spec.pad = cursor.pad();
    if cursor.peek() == Some('-') {
        cursor.bump('-');
        spec.left_align = true;
    }
    spec.width = cursor.digits().map(saturating_decimal);
    if cursor.peek() == Some('.') {
        cursor.bump('.');
        spec.precision = cursor.digits().map(saturating_decimal);
    }

    match cursor.peek().and_then(Conversion::from_letter) {
        Some(conversion) => {
            cursor.bump(conversion.letter());
            spec.conversion = Some(conversion);
            (spec, cursor.pos)
        }
        None => (
            Specifier {
                reference: spec.reference,
                ..Specifier::default()
            },
            after_reference,
        ),
    }
}

fn saturating_decimal(digits: &str) -> usize {
    digits
        .bytes()
        .fold(0usize, |acc, b| {
            acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
        })
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str, pos: usize) -> Self {
        Cursor { input, pos }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Consumes a run of ASCII digits, if any.
    fn digits(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    /// `digits "$"` or `"{" word "}"`; consumes nothing when neither matches.
    fn reference(&mut self) -> Option<Reference<'a>> {
        let rest = self.rest();
        if let Some(body) = rest.strip_prefix('{') {
            let len = body
                .bytes()
                .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
                .count();
            if len > 0 && body[len..].starts_with('}') {
                self.pos += len + 2;
                return Some(Reference::Name(&body[..len]));
            }
            return None;
        }

        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len > 0 && rest[len..].starts_with('$') {
            self.pos += len + 1;
            return Some(Reference::Index(saturating_decimal(&rest[..len])));
        }
        None
    }

    fn pad(&mut self) -> Option<Pad> {
        let mut chars = self.rest().chars();
        match chars.next() {
            Some('0') => {
                self.bump('0');
                Some(Pad::Zero)
            }
            Some('\'') => match chars.next() {
                Some(c) if !is_line_terminator(c) => {
                    self.bump('\'');
                    self.bump(c);
                    Some(Pad::Char(c))
                }
                _ => None,
            },
            _ => None,
        }
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(input: &str) -> (Specifier<'_>, usize) {
        parse_specifier(input)
    }

    #[test]
    fn test_full_specifier() {
        let (s, len) = spec("%2$+'*-10.3fX");
        assert_eq!(len, 12);
        assert_eq!(s.reference, Some(Reference::Index(2)));
        assert_eq!(s.sign, Some(SignFlag::Plus));
        assert_eq!(s.pad, Some(Pad::Char('*')));
        assert!(s.left_align);
        assert_eq!(s.width, Some(10));
        assert_eq!(s.precision, Some(3));
        assert_eq!(s.conversion, Some(Conversion::Fixed));
    }

    #[test]
    fn test_named_reference_without_letter() {
        let (s, len) = spec("%{user_1}!");
        assert_eq!(len, 9);
        assert_eq!(s.reference, Some(Reference::Name("user_1")));
        assert_eq!(s.conversion, None);
        assert_eq!(s.effective_conversion(), Some(Conversion::String));
        assert!(!s.consumes_implicit());
    }

    #[test]
    fn test_incomplete_group_consumes_only_percent() {
        let (s, len) = spec("%5z");
        assert_eq!(len, 1);
        assert_eq!(s, Specifier::default());
        assert_eq!(s.effective_conversion(), None);

        let (s, len) = spec("%{a}-5z");
        assert_eq!(len, 4);
        assert_eq!(s.width, None);
        assert!(!s.left_align);
    }

    #[test]
    fn test_field_order_is_fixed() {
        // '-' before '0' is align then width "05"
        let (s, _) = spec("%-05d");
        assert!(s.left_align);
        assert_eq!(s.pad, None);
        assert_eq!(s.width, Some(5));

        // a second sign flag cannot follow the first
        let (s, len) = spec("%+ d");
        assert_eq!(len, 1);
        assert_eq!(s.conversion, None);
    }

    #[test]
    fn test_bare_precision_dot() {
        let (s, len) = spec("%.f");
        assert_eq!(len, 3);
        assert_eq!(s.precision, None);
        assert_eq!(s.conversion, Some(Conversion::Fixed));
    }

    #[test]
    fn test_pad_char_rules() {
        let (s, _) = spec("%'é5s");
        assert_eq!(s.pad, Some(Pad::Char('é')));
        assert_eq!(s.width, Some(5));

        let (s, len) = spec("%'\n5s");
        assert_eq!(len, 1);
        assert_eq!(s.conversion, None);
    }

    #[test]
    fn test_malformed_references() {
        let (s, len) = spec("%{}s");
        assert_eq!(s.reference, None);
        assert_eq!(len, 1);

        let (s, len) = spec("%{a-b}s");
        assert_eq!(s.reference, None);
        assert_eq!(len, 1);

        // digits without '$' are a width
        let (s, len) = spec("%12s");
        assert_eq!(s.reference, None);
        assert_eq!(s.width, Some(12));
        assert_eq!(len, 4);
    }

    #[test]
    fn test_width_saturates() {
        let (s, _) = spec("%99999999999999999999999999d");
        assert_eq!(s.width, Some(usize::MAX));
    }

    #[test]
    fn test_parse_segments() {
        let segments = parse("a%%b%sc%");
        assert_eq!(
            segments,
            vec![
                Segment::Literal("a"),
                Segment::Percent,
                Segment::Literal("b"),
                Segment::Spec(
                    Specifier {
                        conversion: Some(Conversion::String),
                        ..Specifier::default()
                    },
                    "%s"
                ),
                Segment::Literal("c"),
                Segment::Spec(Specifier::default(), "%"),
            ]
        );
    }

    #[test]
    fn test_percent_escape_wins_over_specifier() {
        assert_eq!(
            parse("%%d"),
            vec![Segment::Percent, Segment::Literal("d")]
        );
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("plain"), vec![Segment::Literal("plain")]);
    }
}
