//! Core type definitions using newtype patterns for type safety.
//!
//! Bit positions are validated on construction, and textual pin selections
//! and card operations parse into typed values before they touch a card.

mod bit;
mod op;
mod pin;

pub use bit::BitPosition;
pub use op::CardOp;
pub use pin::{Pin, PinError, PinRange, PinSpec};
