//! Tile orientation in quarter turns.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// The orientation of a tile, in clockwise quarter turns from upright.
///
/// # Examples
///
/// ```
/// use rotaslide_core::Rotation;
///
/// let mut rotation = Rotation::R0;
/// for _ in 0..3 {
///     rotation = rotation.rotated();
/// }
/// assert_eq!(rotation.degrees(), 270);
/// assert_eq!(rotation.rotated(), Rotation::R0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rotation {
    /// Upright.
    #[default]
    R0 = 0,
    /// Turned 90° clockwise.
    R90 = 1,
    /// Turned upside down.
    R180 = 2,
    /// Turned 270° clockwise.
    R270 = 3,
}

impl Rotation {
    /// All orientations, in rotation order.
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Creates an orientation from a number of clockwise quarter turns.
    ///
    /// Values wrap modulo four.
    #[must_use]
    pub const fn from_quarter_turns(quarter_turns: u8) -> Self {
        match quarter_turns % 4 {
            0 => Self::R0,
            1 => Self::R90,
            2 => Self::R180,
            _ => Self::R270,
        }
    }

    /// Creates an orientation from a degree value that is a multiple of 90.
    ///
    /// Returns `None` for any other value.
    #[must_use]
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Self::R0),
            90 => Some(Self::R90),
            180 => Some(Self::R180),
            270 => Some(Self::R270),
            _ => None,
        }
    }

    /// Returns the number of clockwise quarter turns (0-3).
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// Returns the angle in degrees (0, 90, 180 or 270).
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self as u16 * 90
    }

    /// Returns `true` for the upright orientation.
    #[must_use]
    pub const fn is_upright(self) -> bool {
        matches!(self, Self::R0)
    }

    /// Returns the orientation after one more clockwise quarter turn.
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 1)
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_degrees_round_trip() {
        for rotation in Rotation::ALL {
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Some(rotation));
        }
        assert_eq!(Rotation::from_degrees(45), None);
        assert_eq!(Rotation::from_degrees(360), None);
    }

    proptest! {
        #[test]
        fn four_rotations_are_identity(turns in 0u8..4) {
            let start = Rotation::from_quarter_turns(turns);
            let end = start.rotated().rotated().rotated().rotated();
            prop_assert_eq!(start, end);
        }
    }
}
