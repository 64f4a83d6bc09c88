//! Textual card operations.
//!
//! Operations are written as `set:<pins>`, `clear:<pins>`,
//! `port:<index>=<byte>` or `clear-all`, and are applied to a card in the
//! order given.

use super::PinSpec;
use crate::card::Card;
use crate::error::{CardResult, OpError};
use std::fmt;
use std::str::FromStr;

/// A single mutation of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOp {
    /// Turn pins on.
    Set(PinSpec),
    /// Turn pins off.
    Clear(PinSpec),
    /// Replace one port's state byte.
    Port { index: usize, state: u8 },
    /// Zero every port.
    ClearAll,
}

impl CardOp {
    /// Apply this operation to `card`.
    ///
    /// Pins beyond the card are ignored; an out-of-range port index is an
    /// error.
    pub fn apply(&self, card: &mut Card) -> CardResult<()> {
        match self {
            Self::Set(spec) => {
                for pin in spec.pins_below(card.number_of_pins()) {
                    card.set_pin(pin.as_u32());
                }
            }
            Self::Clear(spec) => {
                for pin in spec.pins_below(card.number_of_pins()) {
                    card.clear_pin(pin.as_u32());
                }
            }
            Self::Port { index, state } => card.set_port(*index, *state)?,
            Self::ClearAll => card.clear_all(),
        }
        Ok(())
    }
}

/// Parse a state byte written in decimal, `0x` hex or `0b` binary.
fn parse_state_byte(s: &str) -> Result<u8, OpError> {
    let s = s.trim();
    let lower = s.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u8::from_str_radix(&bin.replace('_', ""), 2)
    } else {
        lower.parse()
    };
    parsed.map_err(|_| OpError::InvalidStateByte(s.to_string()))
}

impl FromStr for CardOp {
    type Err = OpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("clear-all") {
            return Ok(Self::ClearAll);
        }

        let (verb, arg) = s
            .split_once(':')
            .ok_or_else(|| OpError::Unknown(s.to_string()))?;
        let arg = arg.trim();
        if arg.is_empty() {
            return Err(OpError::MissingArgument(verb.to_string()));
        }

        match verb.trim().to_ascii_lowercase().as_str() {
            "set" => Ok(Self::Set(arg.parse()?)),
            "clear" => Ok(Self::Clear(arg.parse()?)),
            "port" => {
                let (index, state) = arg
                    .split_once('=')
                    .ok_or_else(|| OpError::InvalidPortAssignment(arg.to_string()))?;
                let index = index
                    .trim()
                    .parse()
                    .map_err(|_| OpError::InvalidPortAssignment(arg.to_string()))?;
                Ok(Self::Port {
                    index,
                    state: parse_state_byte(state)?,
                })
            }
            _ => Err(OpError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for CardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(spec) => write!(f, "set:{}", spec),
            Self::Clear(spec) => write!(f, "clear:{}", spec),
            Self::Port { index, state } => write!(f, "port:{}={:#04x}", index, state),
            Self::ClearAll => write!(f, "clear-all"),
        }
    }
}
