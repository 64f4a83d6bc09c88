//! CSV output formatting.

use crate::card::Card;
use std::io::Write;

/// Write one row per pin: `pin,port,bit,value`.
pub fn write_csv<W: Write>(out: W, card: &Card) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["pin", "port", "bit", "value"])?;

    for (pin, value) in card.pin_values() {
        wtr.write_record([
            pin.to_string(),
            pin.port_index().to_string(),
            pin.bit().to_string(),
            value.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
