use crate::error::{IconError, Result};
use std::{fmt, str::FromStr};

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const WHITE: Color = Color::rgb(255, 255, 255);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from wide integer channels, rejecting anything outside `0..=255`.
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let channel = |name: &str, value: i64| {
            u8::try_from(value).map_err(|_| {
                IconError::InvalidSpec(format!(
                    "{name} channel {value} is outside 0..=255"
                ))
            })
        };
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
        })
    }

    /// Parse a CSS colour (`#fff`, `#ff6b6b`, `rgb(255, 107, 107)`).
    ///
    /// Translucent colours are rejected: every colour here ends up in an
    /// opaque RGB file.
    pub fn parse(value: &str) -> Result<Self> {
        let srgb = css_color::Srgb::from_str(value)
            .map_err(|_| IconError::InvalidSpec(format!("Malformed colour: {value:?}")))?;
        if srgb.alpha < 1.0 {
            return Err(IconError::InvalidSpec(format!(
                "Colour {value:?} is not opaque"
            )));
        }
        Ok(Self {
            r: (srgb.red * 255.).round() as u8,
            g: (srgb.green * 255.).round() as u8,
            b: (srgb.blue * 255.).round() as u8,
        })
    }

    /// Blend two colours through an 8-bit mask value the way a masked paste
    /// does: `m == 0` yields `self`, `m == 255` yields `over`.
    pub fn blend(self, over: Color, m: u8) -> Color {
        let mix = |a: u8, b: u8| {
            let t = a as u32 * (255 - m as u32) + b as u32 * m as u32 + 128;
            ((t + (t >> 8)) >> 8) as u8
        };
        Color {
            r: mix(self.r, over.r),
            g: mix(self.g, over.g),
            b: mix(self.b, over.b),
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
