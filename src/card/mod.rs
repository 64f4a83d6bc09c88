//! The I/O card model.
//!
//! A [`Card`] owns a fixed number of 8-pin [`Port`]s. Pins are addressed by
//! a global number (`port * 8 + bit`) and routed to the owning port; whole
//! ports can be written at once, as a driver reading the hardware would.
//!
//! Pins that fall outside the card are silently ignored by [`Card::set_pin`]
//! and [`Card::clear_pin`]. Use [`Card::try_set_pin`] and
//! [`Card::try_clear_pin`] to get an error instead.

mod port;
mod render;

pub use port::Port;

use crate::error::{CardError, CardResult};
use crate::types::{BitPosition, Pin};
use tracing::debug;

/// A dry-contact sensor I/O card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    device_name: String,
    ports: Box<[Port]>,
}

impl Card {
    /// Create a card with `number_of_ports` cleared ports.
    pub fn new(device_name: impl Into<String>, number_of_ports: usize) -> Self {
        let device_name = device_name.into();
        debug!(device = %device_name, ports = number_of_ports, "creating card");
        Self {
            device_name,
            ports: (0..number_of_ports).map(Port::new).collect(),
        }
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn number_of_ports(&self) -> usize {
        self.ports.len()
    }

    /// Total pins on the card (`ports * 8`).
    pub fn number_of_pins(&self) -> u32 {
        u32::try_from(self.ports.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(Pin::PER_PORT)
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn port(&self, index: usize) -> Option<&Port> {
        self.ports.get(index)
    }

    /// Raw state byte of every port, in port order.
    pub fn port_states(&self) -> Vec<u8> {
        self.ports.iter().map(Port::state).collect()
    }

    /// Zero every port.
    pub fn clear_all(&mut self) {
        for port in self.ports.iter_mut() {
            port.set(0);
        }
    }

    /// Replace the whole state byte of one port.
    pub fn set_port(&mut self, index: usize, state: u8) -> CardResult<()> {
        let ports = self.ports.len();
        let port = self
            .ports
            .get_mut(index)
            .ok_or(CardError::PortOutOfRange { index, ports })?;
        debug!(port = index, state, "set port");
        port.set(state);
        Ok(())
    }

    /// Turn a pin on. Pins beyond the card are ignored.
    pub fn set_pin(&mut self, pin: u32) {
        self.update_pin(pin, Port::set_bit);
    }

    /// Turn a pin off. Pins beyond the card are ignored.
    pub fn clear_pin(&mut self, pin: u32) {
        self.update_pin(pin, Port::clear_bit);
    }

    /// Turn a pin on, failing if the pin is beyond the card.
    pub fn try_set_pin(&mut self, pin: u32) -> CardResult<()> {
        self.locate(Pin::new(pin))?.set_bit(Pin::new(pin).bit());
        Ok(())
    }

    /// Turn a pin off, failing if the pin is beyond the card.
    pub fn try_clear_pin(&mut self, pin: u32) -> CardResult<()> {
        self.locate(Pin::new(pin))?.clear_bit(Pin::new(pin).bit());
        Ok(())
    }

    /// Value (0 or 1) of a pin, or None if it is beyond the card.
    pub fn pin_value(&self, pin: u32) -> Option<u8> {
        let pin = Pin::new(pin);
        self.ports
            .get(pin.port_index())
            .map(|port| port.pin_value(pin.bit()))
    }

    /// Every pin on the card with its value, in ascending pin order.
    pub fn pin_values(&self) -> impl Iterator<Item = (Pin, u8)> + '_ {
        self.ports.iter().flat_map(Port::pin_values)
    }

    /// Pins currently on, in ascending order.
    pub fn pins_set_on(&self) -> Vec<u32> {
        self.pin_values()
            .filter(|&(_, value)| value != 0)
            .map(|(pin, _)| pin.as_u32())
            .collect()
    }

    fn update_pin(&mut self, pin: u32, apply: fn(&mut Port, BitPosition)) {
        let pin = Pin::new(pin);
        match self.ports.get_mut(pin.port_index()) {
            Some(port) => apply(port, pin.bit()),
            None => debug!(
                pin = pin.as_u32(),
                ports = self.ports.len(),
                "ignoring pin beyond card"
            ),
        }
    }

    fn locate(&mut self, pin: Pin) -> CardResult<&mut Port> {
        let pins = self.number_of_pins();
        self.ports
            .get_mut(pin.port_index())
            .ok_or(CardError::PinOutOfRange {
                pin: pin.as_u32(),
                pins,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_port_write_is_logged_at_debug() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut card = Card::new("test", 2);
            card.set_port(1, 0x81).unwrap();
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs
            .lines()
            .any(|line| line.contains("DEBUG") && line.contains("set port") && line.contains("port=1")));
    }

    #[test]
    fn test_new_card() {
        let card = Card::new("ADAM-6050", 8);
        assert_eq!(card.device_name(), "ADAM-6050");
        assert_eq!(card.number_of_ports(), 8);
        assert_eq!(card.number_of_pins(), 64);
        assert!(card.pins_set_on().is_empty());
        for (i, port) in card.ports().iter().enumerate() {
            assert_eq!(port.index(), i);
        }
    }

    #[test]
    fn test_set_and_clear_every_pin() {
        let mut card = Card::new("test", 3);
        for pin in 0..card.number_of_pins() {
            card.set_pin(pin);
            assert!(card.pins_set_on().contains(&pin));
            card.clear_pin(pin);
            assert!(!card.pins_set_on().contains(&pin));
        }
    }

    #[test]
    fn test_set_pin_idempotent() {
        let mut once = Card::new("test", 2);
        once.set_pin(9);

        let mut twice = Card::new("test", 2);
        twice.set_pin(9);
        twice.set_pin(9);

        assert_eq!(once, twice);
        assert_eq!(twice.pins_set_on(), vec![9]);
    }

    #[test]
    fn test_pins_set_on_is_ascending() {
        let mut card = Card::new("test", 4);
        for pin in [31, 2, 17, 8, 0, 30] {
            card.set_pin(pin);
        }
        assert_eq!(card.pins_set_on(), vec![0, 2, 8, 17, 30, 31]);
    }

    #[test]
    fn test_set_port_decodes_to_its_pins() {
        let mut card = Card::new("test", 4);
        card.set_port(2, 0b1010_0101).unwrap();

        let port_pins: Vec<(u32, u8)> = card
            .port(2)
            .unwrap()
            .pin_values()
            .map(|(p, v)| (p.as_u32(), v))
            .collect();
        assert_eq!(
            port_pins,
            vec![
                (16, 1),
                (17, 0),
                (18, 1),
                (19, 0),
                (20, 0),
                (21, 1),
                (22, 0),
                (23, 1),
            ]
        );
        assert_eq!(card.pins_set_on(), vec![16, 18, 21, 23]);
        assert_eq!(card.port_states(), vec![0, 0, 0b1010_0101, 0]);
    }

    #[test]
    fn test_set_port_out_of_range() {
        let mut card = Card::new("test", 2);
        assert_eq!(
            card.set_port(2, 0xFF),
            Err(CardError::PortOutOfRange { index: 2, ports: 2 })
        );
        assert!(card.pins_set_on().is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut card = Card::new("test", 2);
        card.set_port(0, 0xFF).unwrap();
        card.set_pin(12);
        card.clear_all();
        assert!(card.pins_set_on().is_empty());
        assert_eq!(card.port_states(), vec![0, 0]);
    }

    // Pins whose port index equals the port count (the first pin past the
    // card) are ignored just like any other pin beyond the card.
    #[test]
    fn test_pin_at_port_count_boundary_is_ignored() {
        let mut card = Card::new("test", 8);
        card.set_pin(64);
        card.set_pin(71);
        card.clear_pin(64);
        assert!(card.pins_set_on().is_empty());
        assert_eq!(card.port_states(), vec![0; 8]);
    }

    #[test]
    fn test_pin_far_beyond_card_is_ignored() {
        let mut card = Card::new("test", 1);
        card.set_pin(u32::MAX);
        assert!(card.pins_set_on().is_empty());
    }

    #[test]
    fn test_strict_pin_access() {
        let mut card = Card::new("test", 8);
        assert!(card.try_set_pin(63).is_ok());
        assert_eq!(card.pins_set_on(), vec![63]);
        assert_eq!(
            card.try_set_pin(64),
            Err(CardError::PinOutOfRange { pin: 64, pins: 64 })
        );
        assert!(card.try_clear_pin(63).is_ok());
        assert!(card.pins_set_on().is_empty());
        assert!(card.try_clear_pin(200).is_err());
    }

    #[test]
    fn test_pin_value_lookup() {
        let mut card = Card::new("test", 2);
        card.set_pin(10);
        assert_eq!(card.pin_value(10), Some(1));
        assert_eq!(card.pin_value(11), Some(0));
        assert_eq!(card.pin_value(16), None);
    }

    #[test]
    fn test_empty_card() {
        let mut card = Card::new("empty", 0);
        card.set_pin(0);
        assert_eq!(card.number_of_pins(), 0);
        assert!(card.pins_set_on().is_empty());
        assert!(card.set_port(0, 1).is_err());
    }
}
