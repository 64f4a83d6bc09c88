//! Serializable point-in-time view of a card.

use crate::card::Card;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State byte of one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSnapshot {
    pub index: usize,
    pub state: u8,
}

/// Everything needed to report a card's pin state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    /// Display name of the card.
    pub device_name: String,
    pub number_of_ports: usize,
    /// When the snapshot was taken.
    pub captured_at: DateTime<Utc>,
    /// Port state bytes in port order.
    pub ports: Vec<PortSnapshot>,
    /// Pins currently on, ascending.
    pub pins_on: Vec<u32>,
}

impl CardSnapshot {
    /// Capture the current state of `card`.
    pub fn capture(card: &Card) -> Self {
        Self {
            device_name: card.device_name().to_string(),
            number_of_ports: card.number_of_ports(),
            captured_at: Utc::now(),
            ports: card
                .ports()
                .iter()
                .map(|p| PortSnapshot {
                    index: p.index(),
                    state: p.state(),
                })
                .collect(),
            pins_on: card.pins_set_on(),
        }
    }
}
