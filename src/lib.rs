//! # drycontact - A Dry-Contact Sensor I/O Card Model
//!
//! drycontact models an I/O card that exposes a configurable number of
//! 8-bit ports, where each bit is one dry-contact sensor pin. Pins can be
//! set and cleared individually or a whole port at a time, and the card
//! renders its pin state as a text table for diagnostics.
//!
//! ## Example Usage
//!
//! ```rust
//! use drycontact::Card;
//!
//! let mut card = Card::new("rack-a", 8);
//! card.set_pin(4);
//! card.set_pin(49);
//! card.set_port(7, 0b1000_0000).unwrap();
//!
//! assert_eq!(card.pins_set_on(), vec![4, 49, 63]);
//! println!("{}", card.render());
//! ```
//!
//! ## Architecture
//!
//! - [`card`] - The `Card` and `Port` model and table rendering
//! - [`types`] - Bit positions, pin numbers, pin specifications and card operations
//! - [`output`] - Plain, JSON and CSV views of a card
//! - [`config`] - Settings and card profiles
//! - [`cli`] - Command-line front end
//! - [`error`] - Error types

pub mod card;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use card::{Card, Port};
pub use error::{CardError, CardResult};
pub use types::{BitPosition, CardOp, Pin, PinSpec};
