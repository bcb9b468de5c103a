//! Length of the digest fragment embedded into hashed file names.

use std::fmt;

/// Number of hex characters of the content digest placed in a file name.
///
/// Always within [`HashLength::MIN`]..=[`HashLength::MAX`]; out-of-range
/// requests are clamped rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashLength(usize);

impl HashLength {
    /// Shortest allowed digest fragment.
    pub const MIN: usize = 4;
    /// Longest allowed digest fragment (a full SHA-256 hex digest).
    pub const MAX: usize = 64;
    /// Length used when the configuration does not set one.
    pub const DEFAULT: usize = 7;

    /// Creates a length from any integer, clamping it into the allowed range.
    pub fn clamped(requested: i64) -> Self {
        let clamped = requested.clamp(Self::MIN as i64, Self::MAX as i64);
        Self(clamped as usize)
    }

    /// Returns the length in hex characters.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for HashLength {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for HashLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_seven() {
        assert_eq!(HashLength::default().get(), 7);
    }

    #[test]
    fn clamps_low_values() {
        assert_eq!(HashLength::clamped(0).get(), 4);
        assert_eq!(HashLength::clamped(3).get(), 4);
        assert_eq!(HashLength::clamped(-20).get(), 4);
    }

    #[test]
    fn clamps_high_values() {
        assert_eq!(HashLength::clamped(65).get(), 64);
        assert_eq!(HashLength::clamped(i64::MAX).get(), 64);
    }

    #[test]
    fn keeps_in_range_values() {
        assert_eq!(HashLength::clamped(4).get(), 4);
        assert_eq!(HashLength::clamped(12).get(), 12);
        assert_eq!(HashLength::clamped(64).get(), 64);
    }
}
