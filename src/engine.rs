//! The formatting pipeline.
//!
//! For each specifier of a scanned template the [`Formatter`] resolves the
//! argument, applies the conversion and pads the result:
//!
//! ```text
//! width = 5, sign = "-", text = "3"
//!
//!   "%5d"   -> pad + sign + text     "   -3"
//!   "%05d"  -> sign + zeros + text   "-0003"
//!   "%-5d"  -> sign + text + pad     "-3   "
//!   "%0-5d" -> zero pad degrades     "-3   "
//! ```
//!
//! Padding is measured in UTF-16 code units. `%f` pads against the length of
//! its integer part only, so `%06.2f` of `3.14159` is `"000003.14"`.

use crate::args::{Arguments, Resolver};
use crate::conversion::{convert, utf16_len, PrecisionRules, Rendered};
use crate::options::FormatOptions;
use crate::parser::{parse, Pad, Segment, Specifier};
use crate::Value;

/// Renders templates with a fixed set of [`FormatOptions`].
///
/// # Examples
///
/// ```rust
/// use strformat::{Formatter, FormatOptions, Value};
///
/// let formatter = Formatter::new(FormatOptions::new().with_default_precision(1));
/// assert_eq!(formatter.format("%f|%e", &[Value::from(2.25), Value::from(2.25)]), "2.3|2.3e+0");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    #[must_use]
    pub fn new(options: FormatOptions) -> Self {
        Formatter { options }
    }

    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Formats `template` with the arguments that follow it.
    #[must_use]
    pub fn format(&self, template: &str, args: &[Value]) -> String {
        self.render(&parse(template), args)
    }

    /// Renders already scanned segments.
    #[must_use]
    pub fn render(&self, segments: &[Segment<'_>], args: &[Value]) -> String {
        let mut resolver = Resolver::new(Arguments::from_args(args));
        let mut out = String::with_capacity(estimate_len(segments));

        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Percent => out.push('%'),
                Segment::Spec(spec, source) => {
                    self.render_spec(spec, source, &mut resolver, &mut out);
                }
            }
        }

        log::trace!(
            "rendered {} segments, {} implicit arguments consumed",
            segments.len(),
            resolver.consumed()
        );
        out
    }

    fn render_spec(
        &self,
        spec: &Specifier<'_>,
        source: &str,
        resolver: &mut Resolver<'_>,
        out: &mut String,
    ) {
        let Some(conversion) = spec.effective_conversion() else {
            log::trace!("unrecognized specifier {:?} kept as text", source);
            out.push_str(source);
            return;
        };

        let value = resolver.next(spec.reference.as_ref(), spec.consumes_implicit());
        if value.is_none() {
            log::trace!("no argument for {:?}, rendering as missing", source);
        }

        let rules = self.precision_rules(spec);
        let rendered = convert(conversion, value, spec, rules);
        self.pad(rendered, spec, out);
    }

    fn precision_rules(&self, spec: &Specifier<'_>) -> PrecisionRules {
        if let Some(precision) = spec.precision {
            if precision > self.options.max_precision && spec.conversion.is_some() {
                log::debug!(
                    "precision {} clamped to {} where it applies",
                    precision,
                    self.options.max_precision
                );
            }
        }
        PrecisionRules {
            default: self.options.default_precision,
            max: self.options.max_precision,
        }
    }

    fn pad(&self, rendered: Rendered, spec: &Specifier<'_>, out: &mut String) {
        let mut width = spec.width.unwrap_or(0);
        if width > self.options.max_width {
            log::debug!("width {} clamped to {}", width, self.options.max_width);
            width = self.options.max_width;
        }

        let sign = rendered.sign.as_str();
        let length = rendered
            .length
            .unwrap_or_else(|| utf16_len(&rendered.text));
        let pad_len = width.saturating_sub(length).saturating_sub(sign.len());
        let zero = spec.pad == Some(Pad::Zero);
        let pad_char = spec.pad.map_or(' ', Pad::as_char);

        out.reserve(rendered.text.len() + sign.len() + pad_len * pad_char.len_utf8());
        if spec.left_align {
            out.push_str(sign);
            out.push_str(&rendered.text);
            push_repeated(out, if zero { ' ' } else { pad_char }, pad_len);
        } else if zero {
            out.push_str(sign);
            push_repeated(out, pad_char, pad_len);
            out.push_str(&rendered.text);
        } else {
            push_repeated(out, pad_char, pad_len);
            out.push_str(sign);
            out.push_str(&rendered.text);
        }
    }
}

fn push_repeated(out: &mut String, c: char, count: usize) {
    out.extend(std::iter::repeat(c).take(count));
}

fn estimate_len(segments: &[Segment<'_>]) -> usize {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text.len(),
            Segment::Percent => 1,
            Segment::Spec(_, source) => source.len() + 8,
        })
        .sum()
}
