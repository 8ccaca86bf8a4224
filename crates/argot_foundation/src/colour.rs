//! Packed 24-bit RGB colours and the named preset table.

use std::fmt;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 24-bit RGB colour packed as `0xRRGGBB`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Colour(u32);

/// American spelling alias.
pub type Color = Colour;

impl Colour {
    /// Largest packed value a colour may hold.
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Creates a colour from a packed value, or `None` if it exceeds 24 bits.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value > Self::MAX {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Creates a colour from its three channels.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Creates a colour from hue, saturation and value, each in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::many_single_char_names)]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let (r, g, b) = if s == 0.0 {
            (v, v, v)
        } else {
            let sector = (h * 6.0).floor();
            let f = h * 6.0 - sector;
            let p = v * (1.0 - s);
            let q = v * (1.0 - s * f);
            let t = v * (1.0 - s * (1.0 - f));
            match (sector as i64).rem_euclid(6) {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                _ => (v, p, q),
            }
        };
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
        Self::from_rgb(channel(r), channel(g), channel(b))
    }

    /// A fully saturated colour with a random hue.
    #[must_use]
    pub fn random() -> Self {
        let hue: f64 = rand::thread_rng().r#gen();
        Self::from_hsv(hue, 1.0, 1.0)
    }

    /// Returns the packed `0xRRGGBB` value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Returns `(r, g, b)`.
    #[must_use]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.r(), self.g(), self.b())
    }

    /// Looks up a named preset.
    ///
    /// `name` must already be normalized: lower-case, words joined by `_`.
    /// `random` yields a new random colour on every call.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "random" {
            return Some(Self::random());
        }
        PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|(_, make)| make())
    }

    /// Names of every preset accepted by [`Colour::from_name`].
    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS
            .iter()
            .map(|(name, _)| *name)
            .chain(std::iter::once("random"))
    }
}

macro_rules! presets {
    ($($name:literal => $ctor:ident = $value:literal),* $(,)?) => {
        impl Colour {
            $(
                #[doc = concat!("The `", $name, "` preset (`", stringify!($value), "`).")]
                #[must_use]
                pub const fn $ctor() -> Self {
                    Self($value)
                }
            )*
        }

        /// Preset name to constructor, in declaration order.
        const PRESETS: &[(&str, fn() -> Colour)] = &[$(($name, Colour::$ctor)),*];
    };
}

presets! {
    "default" => default_colour = 0x000000,
    "teal" => teal = 0x1abc9c,
    "dark_teal" => dark_teal = 0x11806a,
    "brand_green" => brand_green = 0x57f287,
    "green" => green = 0x2ecc71,
    "dark_green" => dark_green = 0x1f8b4c,
    "blue" => blue = 0x3498db,
    "dark_blue" => dark_blue = 0x206694,
    "purple" => purple = 0x9b59b6,
    "dark_purple" => dark_purple = 0x71368a,
    "magenta" => magenta = 0xe91e63,
    "dark_magenta" => dark_magenta = 0xad1457,
    "gold" => gold = 0xf1c40f,
    "dark_gold" => dark_gold = 0xc27c0e,
    "orange" => orange = 0xe67e22,
    "dark_orange" => dark_orange = 0xa84300,
    "brand_red" => brand_red = 0xed4245,
    "red" => red = 0xe74c3c,
    "dark_red" => dark_red = 0x992d22,
    "lighter_grey" => lighter_grey = 0x95a5a6,
    "lighter_gray" => lighter_gray = 0x95a5a6,
    "dark_grey" => dark_grey = 0x607d8b,
    "dark_gray" => dark_gray = 0x607d8b,
    "light_grey" => light_grey = 0x979c9f,
    "light_gray" => light_gray = 0x979c9f,
    "darker_grey" => darker_grey = 0x546e7a,
    "darker_gray" => darker_gray = 0x546e7a,
    "og_blurple" => og_blurple = 0x7289da,
    "blurple" => blurple = 0x5865f2,
    "greyple" => greyple = 0x99aab5,
    "dark_theme" => dark_theme = 0x36393f,
    "fuchsia" => fuchsia = 0xeb459e,
    "yellow" => yellow = 0xfee75c,
}

impl Default for Colour {
    fn default() -> Self {
        Self::default_colour()
    }
}

impl fmt::Debug for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colour(#{:06x})", self.0)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}
