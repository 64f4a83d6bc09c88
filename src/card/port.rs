//! A single 8-pin port.
//!
//! Each port owns one byte of state; bit `n` of that byte is the sensor on
//! global pin `index * 8 + n`.

use crate::types::{BitPosition, Pin};
use std::fmt;

/// One byte of dry-contact state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    index: usize,
    state: u8,
}

impl Port {
    /// Create a cleared port. Only the owning card assigns indices.
    pub(crate) const fn new(index: usize) -> Self {
        Self { index, state: 0 }
    }

    /// Zero-based position of this port on its card.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Raw state byte.
    #[inline]
    pub const fn state(&self) -> u8 {
        self.state
    }

    /// Replace the whole state byte.
    #[inline]
    pub fn set(&mut self, state: u8) {
        self.state = state;
    }

    /// Turn on the bit at `bit`.
    #[inline]
    pub fn set_bit(&mut self, bit: BitPosition) {
        self.state |= bit.mask();
    }

    /// Turn off the bit at `bit`.
    #[inline]
    pub fn clear_bit(&mut self, bit: BitPosition) {
        self.state &= !bit.mask();
    }

    /// Value (0 or 1) of the bit at `bit`.
    #[inline]
    pub const fn pin_value(&self, bit: BitPosition) -> u8 {
        (self.state >> bit.as_u8()) & 0x1
    }

    /// Global pin number of the first pin on this port.
    #[inline]
    pub fn first_pin(&self) -> Pin {
        Pin::from_parts(self.index, BitPosition::FIRST)
    }

    /// Decode the byte into `(pin, value)` pairs, lowest pin first.
    pub fn pin_values(&self) -> impl Iterator<Item = (Pin, u8)> + '_ {
        BitPosition::all().map(move |bit| (Pin::from_parts(self.index, bit), self.pin_value(bit)))
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Port [index={}, pins={{", self.index)?;
        for (i, (pin, value)) in self.pin_values().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", pin, value)?;
        }
        write!(f, "}}]")
    }
}
