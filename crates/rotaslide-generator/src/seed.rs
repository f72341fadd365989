//! Reproducible scramble seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a scramble.
///
/// Seeds are written as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use rotaslide_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::daily("2026-10-18");
/// assert_eq!(seed, PuzzleSeed::daily("2026-10-18"));
/// assert_ne!(seed, PuzzleSeed::daily("2026-10-19"));
///
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>()?, seed);
/// # Ok::<(), rotaslide_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives the shared seed for a daily puzzle.
    ///
    /// Everyone passing the same label (typically an ISO date) gets the same
    /// scramble.
    #[must_use]
    pub fn daily(label: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"rotaslide daily:");
        hasher.update(label.trim().as_bytes());
        Self(hasher.finalize().into())
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors raised when parsing a [`PuzzleSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Characters supplied.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let hi = hex_value(chars.next())?;
            let lo = hex_value(chars.next())?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(ch: Option<char>) -> Result<u8, SeedParseError> {
    let ch = ch.unwrap_or_default();
    ch.to_digit(16)
        .and_then(|digit| u8::try_from(digit).ok())
        .ok_or(SeedParseError::InvalidDigit { ch })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_mixed_case() {
        let text = "1234567890ABCDEF1234567890abcdef1234567890abcdef1234567890abcdef";
        let seed: PuzzleSeed = text.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0x12);
        assert_eq!(seed.as_bytes()[7], 0xef);
        assert_eq!(seed.to_string(), text.to_ascii_lowercase());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let bad = format!("{}g", "0".repeat(63));
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidDigit { ch: 'g' })
        );
    }

    #[test]
    fn test_daily_ignores_surrounding_whitespace() {
        assert_eq!(PuzzleSeed::daily(" 2026-01-01\n"), PuzzleSeed::daily("2026-01-01"));
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
