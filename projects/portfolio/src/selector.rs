use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::page::Element;

/// Which elements of a page are targets.
///
/// Supports `*`, a bare tag name (`section`, compared case-insensitively) and
/// `#id` (exact match on the element id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Any,
    Tag(String),
    Id(String),
}

impl Selector {
    pub fn matches<E: Element + ?Sized>(&self, element: &E) -> bool {
        match self {
            Selector::Any => true,
            Selector::Tag(tag) => element.tag().eq_ignore_ascii_case(tag),
            Selector::Id(id) => element.id() == Some(id.as_str()),
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();

        if raw.is_empty() {
            return Err(SelectorParseError::Empty);
        }
        if raw == "*" {
            return Ok(Selector::Any);
        }
        if let Some(id) = raw.strip_prefix('#') {
            if id.is_empty() || id.chars().any(char::is_whitespace) {
                return Err(SelectorParseError::InvalidId { raw: raw.to_string() });
            }
            return Ok(Selector::Id(id.to_string()));
        }

        let valid_tag = raw.starts_with(|c: char| c.is_ascii_alphabetic())
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid_tag {
            return Err(SelectorParseError::Unsupported { raw: raw.to_string() });
        }

        Ok(Selector::Tag(raw.to_ascii_lowercase()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Any => f.write_str("*"),
            Selector::Tag(tag) => f.write_str(tag),
            Selector::Id(id) => write!(f, "#{id}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SelectorParseError {
    #[error("Empty selector")]
    Empty,

    #[error("InvalidId: {raw}")]
    InvalidId {
        raw: String,
    },

    #[error("Unsupported selector: {raw} (expected `*`, a tag name or `#id`)")]
    Unsupported {
        raw: String,
    },
}
