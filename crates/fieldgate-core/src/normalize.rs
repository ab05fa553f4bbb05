#![forbid(unsafe_code)]

//! Value normalization.
//!
//! Everything the engine compares or validates goes through [`normalize`]
//! first: null-ish input becomes the empty string, numbers are stringified,
//! and surrounding whitespace is trimmed. The result is always an owned,
//! non-null `String`, so the rest of the engine never reasons about absent
//! values.

use std::fmt;

// ---------------------------------------------------------------------------
// RawInput
// ---------------------------------------------------------------------------

/// A raw value as supplied by a presentation layer.
///
/// Host frameworks hand fields strings, numbers, or nothing at all.
/// `RawInput` models that union so [`normalize`] can be total over it.
/// Conversions exist for `&str`, `String`, `i64`, `f64`, and `Option<T>`
/// (where `None` is the null-ish case).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawInput {
    /// No value supplied (null/undefined in the host layer).
    #[default]
    Empty,
    /// A text value.
    Text(String),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Number(f64),
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl fmt::Display for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// normalize
// ---------------------------------------------------------------------------

/// Canonicalize a raw value to a trimmed string.
///
/// Null-ish input yields `""`; any other value is stringified and has
/// leading and trailing whitespace removed. Pure and total: there is no
/// input this can fail on, and applying it twice is the same as applying
/// it once.
#[must_use]
pub fn normalize(value: impl Into<RawInput>) -> String {
    match value.into() {
        RawInput::Empty => String::new(),
        RawInput::Text(s) => s.trim().to_string(),
        RawInput::Integer(n) => n.to_string(),
        RawInput::Number(n) => n.to_string(),
    }
}

/// Coerce text to an integer for display-value reporting.
///
/// Mirrors a lenient `parseInt`: an optional sign followed by as many
/// leading digits as are present. Anything that yields no digits coerces
/// to `0`. Out-of-range magnitudes saturate. This is only for the numeric
/// output path; validity never consults it.
#[must_use]
pub fn coerce_integer(text: &str) -> i64 {
    let text = text.trim();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    };

    if digits.is_empty() {
        return 0;
    }

    match digits.parse::<i64>() {
        Ok(n) => {
            if negative {
                -n
            } else {
                n
            }
        }
        // Only reachable on overflow: the slice is all digits.
        Err(_) => {
            if negative {
                i64::MIN
            } else {
                i64::MAX
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
