//! Configuration options for formatting.
//!
//! [`FormatOptions`] bounds how much a single specifier can expand and sets
//! the precision used by `%e`, `%E` and `%f` when none is given.
//!
//! ## Examples
//!
//! ```rust
//! use strformat::{format_with_options, FormatOptions, Value};
//!
//! let options = FormatOptions::new().with_max_width(4);
//! assert_eq!(format_with_options("[%10d]", &[Value::from(1)], &options), "[   1]");
//!
//! let options = FormatOptions::new().with_default_precision(2);
//! assert_eq!(format_with_options("%f", &[Value::from(1)], &options), "1.00");
//! ```

/// Largest minimum width honoured by default, in UTF-16 code units.
pub const DEFAULT_MAX_WIDTH: usize = 1 << 20;

/// Largest precision accepted by `%e`, `%E` and `%f` by default.
pub const DEFAULT_MAX_PRECISION: usize = 100;

/// Precision of `%e`, `%E` and `%f` when the specifier has none.
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Formatting limits and defaults.
///
/// # Examples
///
/// ```rust
/// use strformat::FormatOptions;
///
/// let options = FormatOptions::new()
///     .with_max_width(1024)
///     .with_max_precision(20);
/// assert_eq!(options.max_width, 1024);
/// assert_eq!(options.max_precision, 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Upper bound applied to every specifier's minimum width.
    pub max_width: usize,
    /// Upper bound applied to float precision. `%s` truncation is not affected.
    pub max_precision: usize,
    pub default_precision: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            max_width: DEFAULT_MAX_WIDTH,
            max_precision: DEFAULT_MAX_PRECISION,
            default_precision: DEFAULT_FLOAT_PRECISION,
        }
    }
}

impl FormatOptions {
    /// Creates default options: width clamped to 1 MiB of code units, float
    /// precision clamped to 100, default float precision 6.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strformat::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options.max_width, 1 << 20);
    /// assert_eq!(options.default_precision, 6);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the minimum width of any specifier.
    #[must_use]
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Caps the precision of `%e`, `%E` and `%f`.
    #[must_use]
    pub fn with_max_precision(mut self, max_precision: usize) -> Self {
        self.max_precision = max_precision;
        self
    }

    /// Sets the precision of `%e`, `%E` and `%f` when the specifier has none.
    ///
    /// The value is still subject to [`max_precision`](Self::max_precision).
    #[must_use]
    pub fn with_default_precision(mut self, precision: usize) -> Self {
        self.default_precision = precision;
        self
    }
}
