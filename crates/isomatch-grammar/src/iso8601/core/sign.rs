//! Timezone offset sign.

use std::fmt;

use isomatch_core::constants::UNICODE_MINUS;
use serde::{Serialize, Serializer};

/// Sign glyph of a timezone offset.
///
/// Both ASCII hyphen-minus and U+2212 MINUS SIGN denote a negative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TzSign {
    /// `+`
    Plus,
    /// `-`
    HyphenMinus,
    /// `−` (U+2212)
    MinusSign,
}

impl TzSign {
    /// Maps a character to its sign, if it is one.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::HyphenMinus),
            UNICODE_MINUS => Some(Self::MinusSign),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::HyphenMinus => '-',
            Self::MinusSign => UNICODE_MINUS,
        }
    }

    /// Returns whether the offset lies west of UTC.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::HyphenMinus | Self::MinusSign)
    }
}

impl fmt::Display for TzSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for TzSign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}
