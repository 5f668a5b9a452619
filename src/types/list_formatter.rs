//! English-list formatting for error lists.
//!
//! The default configuration produces the stable rendering used by
//! [`ErrorSlice`]'s `Display` implementation:
//!
//! | elements | output |
//! |---|---|
//! | 0 | `""` |
//! | 1 | `"one"` |
//! | 2 | `"one and two"` |
//! | 3+ | `"one, two, and three"` |

use crate::types::alloc_type::{String, ToString};
use crate::types::ErrorSlice;
use core::fmt::{self, Display, Write};

/// Trait for customizing how a list of messages is joined.
pub trait ListFormatter {
    /// Writes a single item.
    fn write_item(&self, out: &mut dyn Write, item: &dyn Display) -> fmt::Result {
        write!(out, "{item}")
    }

    /// Writes whatever follows item `index` in a list of `total` items.
    fn write_separator(&self, out: &mut dyn Write, index: usize, total: usize) -> fmt::Result;

    /// Writes every item followed by its separator.
    fn write_list<'a, I>(&self, out: &mut dyn Write, items: I) -> fmt::Result
    where
        I: ExactSizeIterator<Item = &'a dyn Display>,
    {
        let total = items.len();
        for (index, item) in items.enumerate() {
            self.write_item(out, item)?;
            self.write_separator(out, index, total)?;
        }
        Ok(())
    }

    /// Formats the list into a new string.
    fn format_list<'a, I>(&self, items: I) -> String
    where
        I: ExactSizeIterator<Item = &'a dyn Display>,
    {
        let mut result = String::with_capacity(items.len() * 16);
        let _ = self.write_list(&mut result, items);
        result
    }
}

/// Configuration-based list formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFormatConfig {
    /// Placed between items that are not the final pair.
    pub separator: String,
    /// Word placed before the last item, `None` to use `separator` throughout.
    pub conjunction: Option<String>,
    /// Keep the separator's punctuation before the conjunction for 3+ items.
    pub serial_comma: bool,
    /// Written before every item.
    pub item_prefix: Option<String>,
    /// One item per line; `separator` and `conjunction` are ignored.
    pub multiline: bool,
}

impl Default for ListFormatConfig {
    fn default() -> Self {
        Self {
            separator: ", ".into(),
            conjunction: Some("and".into()),
            serial_comma: true,
            item_prefix: None,
            multiline: false,
        }
    }
}

impl ListFormatConfig {
    /// One item per line, bulleted with `"- "`.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            conjunction: None,
            item_prefix: Some("- ".into()),
            multiline: true,
            ..Default::default()
        }
    }

    /// Items joined by `" | "` with no conjunction.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), conjunction: None, ..Default::default() }
    }
}

impl ListFormatter for ListFormatConfig {
    fn write_item(&self, out: &mut dyn Write, item: &dyn Display) -> fmt::Result {
        if let Some(prefix) = &self.item_prefix {
            out.write_str(prefix)?;
        }
        write!(out, "{item}")
    }

    fn write_separator(&self, out: &mut dyn Write, index: usize, total: usize) -> fmt::Result {
        let remaining = total - index;
        if remaining <= 1 {
            return Ok(());
        }
        if self.multiline {
            return out.write_char('\n');
        }
        match (&self.conjunction, remaining) {
            (Some(conjunction), 2) => {
                // oxford comma
                if total > 2 && self.serial_comma {
                    out.write_str(self.separator.trim_end())?;
                }
                write!(out, " {conjunction} ")
            },
            _ => out.write_str(&self.separator),
        }
    }
}

/// Builder for customizing how an [`ErrorSlice`] is displayed.
///
/// Created by [`ErrorSlice::fmt`].
///
/// # Examples
///
/// ```
/// use error_slice::{BoxError, ErrorSlice};
///
/// let errors: ErrorSlice = ["red", "green", "blue"].into_iter().map(BoxError::from).collect();
///
/// assert_eq!(errors.fmt().conjunction("or").to_string(), "red, green, or blue");
/// assert_eq!(errors.fmt().serial_comma(false).to_string(), "red, green and blue");
/// assert_eq!(errors.fmt().pretty().to_string(), "- red\n- green\n- blue");
/// ```
pub struct ListFormatBuilder<'a> {
    pub(crate) errors: &'a ErrorSlice,
    pub(crate) config: ListFormatConfig,
}

impl<'a> ListFormatBuilder<'a> {
    pub fn new(errors: &'a ErrorSlice) -> Self {
        Self { errors, config: ListFormatConfig::default() }
    }

    pub fn with_config(mut self, config: ListFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn conjunction(mut self, conjunction: impl Into<String>) -> Self {
        self.config.conjunction = Some(conjunction.into());
        self
    }

    pub fn no_conjunction(mut self) -> Self {
        self.config.conjunction = None;
        self
    }

    pub fn serial_comma(mut self, enabled: bool) -> Self {
        self.config.serial_comma = enabled;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ListFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ListFormatConfig::compact();
        self
    }
}

impl Display for ListFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.config.write_list(f, self.errors.iter().map(|e| e as &dyn Display))
    }
}

impl ListFormatBuilder<'_> {
    /// Renders into an owned string.
    #[inline]
    pub fn render(&self) -> String {
        self.to_string()
    }
}
