//! Bit positions within a port byte.

use crate::error::CardError;
use std::fmt;

/// A validated bit position inside an 8-bit port (0-7).
///
/// Port bit operations take this type, so an out-of-range position is
/// rejected when the value is constructed rather than when it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitPosition(u8);

impl BitPosition {
    /// Number of bits in a port.
    pub const COUNT: u8 = 8;
    /// Least significant bit.
    pub const FIRST: Self = Self(0);
    /// Highest valid bit position.
    pub const MAX: u8 = 7;

    /// Create a new bit position, returning None if out of range.
    #[inline]
    pub const fn new(bit: u8) -> Option<Self> {
        if bit <= Self::MAX {
            Some(Self(bit))
        } else {
            None
        }
    }

    /// Get the raw bit position.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Single-bit mask for this position.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self.0
    }

    /// Iterate over all eight positions, least significant first.
    pub fn all() -> impl Iterator<Item = BitPosition> {
        (0..Self::COUNT).map(Self)
    }

    /// Position of `pin` within its port.
    #[inline]
    pub(crate) const fn of_pin(pin: u32) -> Self {
        Self((pin % Self::COUNT as u32) as u8)
    }
}

impl fmt::Display for BitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for BitPosition {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CardError::InvalidBitPosition(value))
    }
}

impl From<BitPosition> for u8 {
    fn from(bit: BitPosition) -> Self {
        bit.0
    }
}
