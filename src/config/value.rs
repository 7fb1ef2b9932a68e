//! Scalar option values and their coercion rules.
//!
//! Options are exchanged with controls as strings. The store keeps them as
//! integers or strings depending on the type hint supplied by the writer.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    sync::LazyLock,
};

use {
    regex::Regex,
    serde::{Deserialize, Serialize},
};

/// Matches the integer prefix `atoi` would consume. ASCII only, as in the
/// C locale.
static LEADING_INT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\x0B\x0C\r]*([+-]?[0-9]+)").expect("leading integer pattern is valid")
});

/// How a string coming from a control should be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeHint {
    /// Integer when the whole text is an integer, string otherwise.
    #[default]
    Any,
    /// Always stored as a string.
    String,
    /// Always stored as an integer, parsed like `atoi`.
    Integer,
}

/// A single stored option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Integer value.
    Int(i64),
    /// String value.
    Str(String),
}

impl OptionValue {
    /// Builds a value from control text according to `hint`.
    #[must_use]
    pub fn coerce(text: &str, hint: TypeHint) -> Self {
        match hint {
            TypeHint::String => Self::Str(text.to_string()),
            TypeHint::Integer => Self::Int(parse_leading_int(text)),
            TypeHint::Any => match text.parse::<i64>() {
                Ok(value) => Self::Int(value),
                Err(_) => Self::Str(text.to_string()),
            },
        }
    }

    /// Returns the integer value, if this is one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Str(_) => None,
        }
    }
}

impl Display for OptionValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// Parses the leading integer of `text` the way C `atoi` does.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit, and text without a leading integer yields 0. Values outside
/// the `i64` range saturate.
#[must_use]
pub fn parse_leading_int(text: &str) -> i64 {
    let Some(captures) = LEADING_INT.captures(text) else {
        return 0;
    };
    let digits = &captures[1];

    digits.parse::<i64>().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}
