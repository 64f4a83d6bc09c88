//! Plain text output formatting.
//!
//! Produces the pin table plus a short styled summary.

use crate::card::Card;
use console::style;
use std::io::{self, Write};

/// Write the pin table followed by a summary of the pins that are on.
pub fn write_plain<W: Write>(mut out: W, card: &Card) -> io::Result<()> {
    writeln!(out, "{}", card.render())?;

    let on = card.pins_set_on();
    if on.is_empty() {
        writeln!(out, "{}", style("No pins on.").dim())?;
    } else {
        let list: Vec<String> = on.iter().map(u32::to_string).collect();
        writeln!(
            out,
            "{} {} ({} of {})",
            style("Pins on:").bold(),
            style(list.join(", ")).green().bold(),
            on.len(),
            card.number_of_pins()
        )?;
    }

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
