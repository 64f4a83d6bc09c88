//! Tabular text view of a card's pin state.
//!
//! The table is diagnostic output. It is not meant to be parsed back, but
//! the same state always renders to the same text:
//!
//! ```text
//! +-+-+-+-+-+-+-+-+
//! | Device: dev   |
//! +-+-+-+-+-+-+-+-+
//! |0|1|2|3|4|5|6|7|
//! +-+-+-+-+-+-+-+-+
//! |0|1|0|0|0|0|0|0|
//! +-+-+-+-+-+-+-+-+
//! ```
//!
//! Pins numbered 10 and above take an extra column so values stay under
//! their two-digit headers.

use super::Card;
use std::fmt;

const WIDE_PIN: u32 = 10;

impl Card {
    /// Render the pin table.
    pub fn render(&self) -> String {
        let mut border = String::new();
        let mut header = String::new();
        let mut values = String::new();

        for (pin, value) in self.pin_values() {
            let pin = pin.as_u32();
            if pin >= WIDE_PIN {
                border.push_str("+--");
                values.push_str("| ");
            } else {
                border.push_str("+-");
                values.push('|');
            }
            values.push_str(&value.to_string());
            header.push('|');
            header.push_str(&pin.to_string());
        }
        border.push('+');
        header.push('|');
        values.push('|');

        let banner = banner(self.device_name(), border.len());

        [
            border.as_str(),
            banner.as_str(),
            border.as_str(),
            header.as_str(),
            border.as_str(),
            values.as_str(),
            border.as_str(),
        ]
        .join("\n")
    }
}

/// Device name row, padded so its closing bar lines up with the border.
fn banner(device_name: &str, width: usize) -> String {
    let name = format!("| Device: {}", device_name);
    let padding = width.saturating_sub(name.chars().count() + 1);
    format!("{}{}|", name, " ".repeat(padding))
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
