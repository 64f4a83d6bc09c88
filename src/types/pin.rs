//! Pin types with validation and parsing.
//!
//! A `Pin` is a global, zero-based sensor index. `PinRange` and `PinSpec`
//! handle textual pin selections such as `"1,4,40-47"`.

use super::BitPosition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A global pin number: `port * 8 + bit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pin(u32);

impl Pin {
    /// Pins carried by one port.
    pub const PER_PORT: u32 = BitPosition::COUNT as u32;

    #[inline]
    pub const fn new(pin: u32) -> Self {
        Self(pin)
    }

    /// Build a pin from its port index and bit position.
    ///
    /// Saturates at `u32::MAX` for port indices too large to number.
    #[inline]
    pub fn from_parts(port: usize, bit: BitPosition) -> Self {
        let first = u32::try_from(port)
            .unwrap_or(u32::MAX)
            .saturating_mul(Self::PER_PORT);
        Self(first.saturating_add(u32::from(bit.as_u8())))
    }

    /// Get the raw pin number.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Index of the port that carries this pin.
    #[inline]
    pub const fn port_index(self) -> usize {
        (self.0 / Self::PER_PORT) as usize
    }

    /// Bit position of this pin within its port.
    #[inline]
    pub const fn bit(self) -> BitPosition {
        BitPosition::of_pin(self.0)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Pin {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Pin> for u32 {
    fn from(pin: Pin) -> Self {
        pin.0
    }
}

/// Error type for pin parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PinError {
    #[error("invalid pin number: {0}")]
    InvalidFormat(String),
    #[error("invalid pin range: start ({0}) > end ({1})")]
    InvalidRange(u32, u32),
    #[error("empty pin specification")]
    Empty,
}

/// A range of pins (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRange {
    start: Pin,
    end: Pin,
}

impl PinRange {
    /// Create a new pin range.
    pub fn new(start: Pin, end: Pin) -> Result<Self, PinError> {
        if start > end {
            Err(PinError::InvalidRange(start.0, end.0))
        } else {
            Ok(Self { start, end })
        }
    }

    pub const fn single(pin: Pin) -> Self {
        Self {
            start: pin,
            end: pin,
        }
    }

    /// Iterate over all pins in this range.
    pub fn iter(&self) -> impl Iterator<Item = Pin> {
        (self.start.0..=self.end.0).map(Pin)
    }
}

impl fmt::Display for PinRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A pin selection made of one or more ranges.
///
/// Supports formats like:
/// - Single pin: "4"
/// - Comma-separated: "1,4,7"
/// - Range: "56-63"
/// - Mixed: "1,4,40-47"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinSpec {
    ranges: Vec<PinRange>,
}

impl PinSpec {
    pub const fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    pub fn add_range(&mut self, range: PinRange) {
        self.ranges.push(range);
    }

    pub fn add_pin(&mut self, pin: Pin) {
        self.ranges.push(PinRange::single(pin));
    }

    /// Get all pins as a sorted, deduplicated vector.
    pub fn to_pins(&self) -> Vec<Pin> {
        let mut pins: Vec<Pin> = self.ranges.iter().flat_map(|r| r.iter()).collect();
        pins.sort_unstable();
        pins.dedup();
        pins
    }

    /// Pins below `limit`, sorted and deduplicated.
    ///
    /// Each range is clamped before it is expanded, so a wide selection such
    /// as `0-4294967295` costs no more than the pins under the limit.
    pub fn pins_below(&self, limit: u32) -> Vec<Pin> {
        let mut pins: Vec<Pin> = self
            .ranges
            .iter()
            .filter(|r| r.start.0 < limit)
            .flat_map(|r| (r.start.0..=r.end.0.min(limit - 1)).map(Pin))
            .collect();
        pins.sort_unstable();
        pins.dedup();
        pins
    }

    /// Highest pin named by this selection.
    pub fn max_pin(&self) -> Option<Pin> {
        self.ranges.iter().map(|r| r.end).max()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

fn parse_pin(s: &str) -> Result<Pin, PinError> {
    s.trim()
        .parse::<u32>()
        .map(Pin)
        .map_err(|_| PinError::InvalidFormat(s.trim().to_string()))
}

impl FromStr for PinSpec {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PinError::Empty);
        }

        let mut spec = Self::new();

        for part in s.split(',') {
            let part = part.trim();
            match part.split_once('-') {
                Some((start, end)) => {
                    let range = PinRange::new(parse_pin(start)?, parse_pin(end)?)?;
                    spec.add_range(range);
                }
                None => spec.add_pin(parse_pin(part)?),
            }
        }

        Ok(spec)
    }
}

impl fmt::Display for PinSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.ranges.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
