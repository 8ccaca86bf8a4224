//! Integration tests for Colour

use argot_foundation::{Colour, Value};

#[test]
fn channels_pack_into_rgb() {
    let colour = Colour::from_rgb(0x12, 0x34, 0x56);
    assert_eq!(colour.value(), 0x12_3456);
    assert_eq!(colour.to_rgb(), (0x12, 0x34, 0x56));
    assert_eq!(colour.to_string(), "#123456");
}

#[test]
fn values_above_24_bits_are_rejected() {
    assert!(Colour::new(0xFF_FFFF).is_some());
    assert!(Colour::new(0x100_0000).is_none());
}

#[test]
fn every_preset_name_resolves() {
    for name in Colour::preset_names() {
        assert!(Colour::from_name(name).is_some(), "{name}");
    }
    assert_eq!(Colour::from_name("dark_teal"), Some(Colour::dark_teal()));
    assert_eq!(Colour::from_name("blurple"), Some(Colour::blurple()));
    assert_eq!(Colour::from_name("Dark Teal"), None);
}

#[test]
fn random_is_fully_saturated() {
    for _ in 0..32 {
        let (r, g, b) = Colour::random().to_rgb();
        assert_eq!(r.max(g).max(b), 255);
        assert_eq!(r.min(g).min(b), 0);
    }
}

#[test]
fn colour_values() {
    let value = Value::from(Colour::dark_teal());
    assert_eq!(value.as_colour(), Some(Colour::dark_teal()));
}
