// ============================================================================
// Print Module
// Bracketed, comma-separated rendering of heterogeneous values
// ============================================================================

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::io;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration
// ============================================================================

/// Delimiters used when rendering a list of values.
///
/// The default renders `{ a, b, c }`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BraceStyle {
    /// Written before the first value
    pub open: Cow<'static, str>,
    /// Written between two values
    pub separator: Cow<'static, str>,
    /// Written after the last value
    pub close: Cow<'static, str>,
}

impl BraceStyle {
    /// `{ a, b, c }`
    pub const CANONICAL: Self = Self {
        open: Cow::Borrowed("{ "),
        separator: Cow::Borrowed(", "),
        close: Cow::Borrowed(" }"),
    };

    pub fn with_open(mut self, open: impl Into<Cow<'static, str>>) -> Self {
        self.open = open.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_close(mut self, close: impl Into<Cow<'static, str>>) -> Self {
        self.close = close.into();
        self
    }
}

impl Default for BraceStyle {
    fn default() -> Self {
        Self::CANONICAL
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Display adapter rendering `items` with `style`.
#[derive(Clone, Copy)]
pub struct Braced<'a> {
    style: &'a BraceStyle,
    items: &'a [&'a dyn Display],
}

impl<'a> Braced<'a> {
    pub fn new(style: &'a BraceStyle, items: &'a [&'a dyn Display]) -> Self {
        Self { style, items }
    }
}

impl Display for Braced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.style.open)?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.style.separator)?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str(&self.style.close)
    }
}

impl fmt::Debug for Braced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Braced")
            .field("style", self.style)
            .field("items", &self.items.len())
            .finish()
    }
}

/// Write `items` to `out`, bracketed and separated according to `style`.
///
/// No trailing newline is written.
///
/// # Errors
/// Propagates any I/O error from `out`.
pub fn write_all<W>(out: &mut W, style: &BraceStyle, items: &[&dyn Display]) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    write!(out, "{}", Braced::new(style, items))
}

/// Render `items` into a new `String`.
pub fn format_all(style: &BraceStyle, items: &[&dyn Display]) -> String {
    Braced::new(style, items).to_string()
}

/// Print every argument to stdout as `{ a, b, c }`, without a newline.
///
/// Arguments may have different types as long as each implements `Display`.
/// Evaluates to `std::io::Result<()>`.
///
/// ```no_run
/// use fixed_dim::print_all;
///
/// print_all!(1, "two", 3.5, 'c').unwrap();
/// ```
#[macro_export]
macro_rules! print_all {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::print::write_all(
            &mut ::std::io::stdout().lock(),
            &$crate::print::BraceStyle::CANONICAL,
            &[&$first as &dyn ::std::fmt::Display $(, &$rest as &dyn ::std::fmt::Display)*],
        )
    };
}

/// Like [`print_all!`] but returns the rendered `String`.
///
/// ```
/// use fixed_dim::format_all;
///
/// assert_eq!(format_all!(1, "two", 'c'), "{ 1, two, c }");
/// ```
#[macro_export]
macro_rules! format_all {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::print::format_all(
            &$crate::print::BraceStyle::CANONICAL,
            &[&$first as &dyn ::std::fmt::Display $(, &$rest as &dyn ::std::fmt::Display)*],
        )
    };
}
