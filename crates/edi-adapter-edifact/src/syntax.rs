//! EDIFACT syntax definitions and delimiter handling
//!
//! This module handles the service string advice (UNA), the default
//! separators, and release-aware splitting of segment text.

use crate::{Error, Result};

/// Default EDIFACT separators (when no UNA is present)
pub const DEFAULT_COMPONENT_SEPARATOR: char = ':';
pub const DEFAULT_ELEMENT_SEPARATOR: char = '+';
pub const DEFAULT_DECIMAL_POINT: char = '.';
pub const DEFAULT_SEGMENT_TERMINATOR: char = '\'';

/// Length of a UNA segment including the tag
pub const UNA_LENGTH: usize = 9;

/// Separators used for parsing EDIFACT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    /// Component separator (default ':')
    pub component: char,
    /// Element separator (default '+')
    pub element: char,
    /// Decimal point (default '.')
    pub decimal: char,
    /// Release character; only a UNA segment declares one
    pub release: Option<char>,
    /// Segment terminator (default '\'')
    pub segment: char,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            component: DEFAULT_COMPONENT_SEPARATOR,
            element: DEFAULT_ELEMENT_SEPARATOR,
            decimal: DEFAULT_DECIMAL_POINT,
            release: None,
            segment: DEFAULT_SEGMENT_TERMINATOR,
        }
    }
}

impl Separators {
    /// Parse separators from a UNA segment
    /// UNA format: UNA:+.? '
    /// Positions:  012345678
    ///              ^^^^ ^  (separators at positions 3,4,5,6,8)
    pub fn from_una(una: &str) -> Option<Self> {
        let chars: Vec<char> = una.chars().take(UNA_LENGTH).collect();
        if chars.len() < UNA_LENGTH || !una.starts_with("UNA") {
            return None;
        }

        Some(Self {
            component: chars[3],
            element: chars[4],
            decimal: chars[5],
            release: Some(chars[6]),
            // Position 7 is reserved (space)
            segment: chars[8],
        })
    }

    /// Resolve the separators for a message and return the remaining body
    ///
    /// A message that starts with `UNA` must carry the full service string
    /// advice; anything shorter is a syntax error.
    pub fn detect(message: &str) -> Result<(Self, &str)> {
        if !message.starts_with("UNA") {
            return Ok((Self::default(), message));
        }

        let separators = Self::from_una(message).ok_or_else(|| {
            Error::Syntax(format!(
                "UNA service string advice must be {UNA_LENGTH} characters, found {:?}",
                message.lines().next().unwrap_or(message)
            ))
        })?;

        let body_start = message
            .char_indices()
            .nth(UNA_LENGTH)
            .map_or(message.len(), |(offset, _)| offset);

        Ok((separators, &message[body_start..]))
    }

    /// The component separator repeated three times, used as a sub-composite marker
    pub fn triple_component(&self) -> String {
        std::iter::repeat_n(self.component, 3).collect()
    }

    /// Split `text` on `delimiter`, keeping released delimiters literal
    ///
    /// Release characters are left in place so nested splits see the same
    /// escapes; call [`Separators::unescape`] on leaf values.
    pub fn split<'a>(&self, text: &'a str, delimiter: char) -> Vec<&'a str> {
        let mut parts = Vec::new();
        let mut start = 0;
        let mut released = false;

        for (offset, c) in text.char_indices() {
            if released {
                released = false;
            } else if Some(c) == self.release {
                released = true;
            } else if c == delimiter {
                parts.push(&text[start..offset]);
                start = offset + c.len_utf8();
            }
        }

        parts.push(&text[start..]);
        parts
    }

    /// Remove release characters from a leaf value
    pub fn unescape(&self, value: &str) -> String {
        if self.release.is_none() {
            return value.to_string();
        }

        let mut result = String::with_capacity(value.len());
        let mut released = false;

        for c in value.chars() {
            if released {
                result.push(c);
                released = false;
            } else if Some(c) == self.release {
                released = true;
            } else {
                result.push(c);
            }
        }

        result
    }
}
