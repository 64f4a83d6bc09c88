//! JSON output formatting.

use super::CardSnapshot;
use crate::card::Card;
use std::io::{self, Write};

/// Write a pretty-printed snapshot of the card.
pub fn write_json<W: Write>(mut out: W, card: &Card) -> io::Result<()> {
    let snapshot = CardSnapshot::capture(card);
    serde_json::to_writer_pretty(&mut out, &snapshot)?;
    writeln!(out)
}
