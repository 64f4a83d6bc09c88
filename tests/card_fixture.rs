//! End-to-end walk through an 8-port card, driven through the public API.

use drycontact::{Card, CardError, CardOp};

#[test]
fn test_eight_port_card_lifecycle() {
    let mut card = Card::new("xxxxxx", 8);
    assert!(card.pins_set_on().is_empty());

    for pin in [4, 7, 1, 49, 63] {
        card.set_pin(pin);
    }
    assert_eq!(card.pins_set_on(), vec![1, 4, 7, 49, 63]);

    for pin in [4, 7, 1, 63] {
        card.clear_pin(pin);
    }
    assert_eq!(card.pins_set_on(), vec![49]);

    card.clear_pin(49);
    assert!(card.pins_set_on().is_empty());

    card.set_port(7, 0xFF).unwrap();
    assert_eq!(card.pins_set_on(), vec![56, 57, 58, 59, 60, 61, 62, 63]);

    card.clear_all();
    assert!(card.pins_set_on().is_empty());
}

#[test]
fn test_lifecycle_as_text_ops() {
    let mut card = Card::new("xxxxxx", 8);
    let steps: [(&str, Vec<u32>); 5] = [
        ("set:4,7,1,49,63", vec![1, 4, 7, 49, 63]),
        ("clear:4,7,1,63", vec![49]),
        ("clear:49", vec![]),
        ("port:7=0xff", (56..=63).collect()),
        ("clear-all", vec![]),
    ];

    for (text, expected) in steps {
        let op: CardOp = text.parse().unwrap();
        op.apply(&mut card).unwrap();
        assert_eq!(card.pins_set_on(), expected, "after {}", text);
    }
}

#[test]
fn test_every_port_byte_decodes_in_bit_order() {
    let mut card = Card::new("decode", 4);
    for (index, state) in [0x00u8, 0x5A, 0x81, 0xFF].into_iter().enumerate() {
        card.set_port(index, state).unwrap();
    }

    for port in card.ports() {
        for (pin, value) in port.pin_values() {
            let bit = pin.as_u32() - port.first_pin().as_u32();
            assert_eq!(value, (port.state() >> bit) & 1);
        }
    }
}

// Pins on the first port past the card are dropped by set_pin/clear_pin and
// rejected by the strict variants.
#[test]
fn test_out_of_range_policy() {
    let mut card = Card::new("edge", 8);

    card.set_pin(64);
    assert!(card.pins_set_on().is_empty());

    assert_eq!(
        card.try_set_pin(64),
        Err(CardError::PinOutOfRange { pin: 64, pins: 64 })
    );
    assert_eq!(
        card.set_port(8, 0xFF),
        Err(CardError::PortOutOfRange { index: 8, ports: 8 })
    );
}

#[test]
fn test_render_tracks_state() {
    let mut card = Card::new("xxxxxx", 8);
    let cleared = card.render();

    card.set_pin(49);
    let with_pin = card.render();
    assert_ne!(cleared, with_pin);

    card.clear_pin(49);
    assert_eq!(card.render(), cleared);
}
