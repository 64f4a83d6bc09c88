//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV views of a card.

mod csv_format;
mod json_format;
mod plain;
mod snapshot;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{print_error, print_info, print_success, print_warning, write_plain};
pub use snapshot::{CardSnapshot, PortSnapshot};

use crate::card::Card;
use crate::cli::OutputFormat;
use crate::error::CliResult;
use std::io::Write;

/// Write a card to `out` in the given format.
pub fn write_card<W: Write>(out: W, card: &Card, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Plain => plain::write_plain(out, card)?,
        OutputFormat::Json => json_format::write_json(out, card)?,
        OutputFormat::Csv => csv_format::write_csv(out, card)?,
    }
    Ok(())
}
