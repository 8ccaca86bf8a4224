//! Colour converter.
//!
//! Accepted forms:
//!
//! - `#RRGGBB` or `#RGB`
//! - `0xRRGGBB` or `0x#RRGGBB`
//! - `rgb(r, g, b)` with each channel `0-255` or `0%-100%`
//! - a preset name such as `dark_teal` or `dark teal`, in any case

use async_trait::async_trait;

use argot_foundation::{Colour, Error, Result, Value};

use crate::context::Context;
use crate::converter::{Converter, ConverterResult};
use crate::patterns::RGB;

/// Converts to a [`Colour`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ColourConverter;

/// Alias for [`ColourConverter`].
pub type ColorConverter = ColourConverter;

impl ColourConverter {
    /// Parses hex digits. Three digits are expanded by doubling each one.
    ///
    /// # Errors
    ///
    /// Returns a bad colour error carrying `digits` when they are not hex
    /// or exceed `0xFFFFFF`.
    pub fn parse_hex(digits: &str) -> Result<Colour> {
        let expanded: String = if digits.chars().count() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };
        u32::from_str_radix(&expanded, 16)
            .ok()
            .and_then(Colour::new)
            .ok_or_else(|| Error::bad_colour(digits))
    }

    /// Parses `rgb(r, g, b)`. `argument` must already be lower-cased.
    ///
    /// # Errors
    ///
    /// Returns a bad colour error carrying `argument` when it does not match
    /// or a channel is out of range.
    pub fn parse_rgb(argument: &str) -> Result<Colour> {
        let caps = RGB.captures(argument).ok_or_else(|| Error::bad_colour(argument))?;
        let channel = |name: &str| {
            caps.name(name)
                .and_then(|m| parse_channel(m.as_str()))
                .ok_or_else(|| Error::bad_colour(argument))
        };
        Ok(Colour::from_rgb(channel("r")?, channel("g")?, channel("b")?))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_channel(number: &str) -> Option<u8> {
    match number.strip_suffix('%') {
        Some(percent) => {
            let percent: u8 = percent.parse().ok().filter(|p| *p <= 100)?;
            Some((255.0 * (f64::from(percent) / 100.0)).round_ties_even() as u8)
        }
        None => number.parse::<u16>().ok().and_then(|v| u8::try_from(v).ok()),
    }
}

#[async_trait]
impl Converter for ColourConverter {
    async fn convert(&self, _ctx: &Context, argument: &str) -> ConverterResult {
        if let Some(digits) = argument.strip_prefix('#') {
            return Ok(Value::Colour(Self::parse_hex(digits)?));
        }
        if let Some(rest) = argument.strip_prefix("0x") {
            let digits = rest.strip_prefix('#').unwrap_or(rest);
            return Ok(Value::Colour(Self::parse_hex(digits)?));
        }

        let lowered = argument.to_lowercase();
        if lowered.starts_with("rgb") {
            return Ok(Value::Colour(Self::parse_rgb(&lowered)?));
        }

        let name = lowered.replace(' ', "_");
        if name.starts_with("from_") {
            return Err(Error::bad_colour(name).into());
        }
        Colour::from_name(&name)
            .map(Value::Colour)
            .ok_or_else(|| Error::bad_colour(name).into())
    }
}
