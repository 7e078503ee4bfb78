//! Error type for hex color parsing

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when a `#RRGGBB` string cannot be decoded, either because it
/// has the wrong number of digits or contains a non-hexadecimal character.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 6 characters after stripping '#')
    InvalidLength,
    /// A character outside `0-9a-fA-F` was found
    InvalidCharacter(char),
    /// Invalid hexadecimal digit pair
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 6 characters)")
            }
            ParseColorError::InvalidCharacter(c) => {
                write!(f, "invalid hex character: {:?}", c)
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex digits: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParseColorError::InvalidLength.to_string(),
            "invalid hex color length (expected 6 characters)"
        );
        assert_eq!(
            ParseColorError::InvalidCharacter('g').to_string(),
            "invalid hex character: 'g'"
        );
    }

    #[test]
    fn test_source_only_for_int_errors() {
        use std::error::Error;

        let int_err = u8::from_str_radix("zz", 16).unwrap_err();
        let err = ParseColorError::from(int_err);
        assert!(err.source().is_some());
        assert!(ParseColorError::InvalidLength.source().is_none());
    }
}
