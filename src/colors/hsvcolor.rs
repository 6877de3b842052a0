//! This module implements HSV, the cousin of HSL. The difference is the third component: *value*
//! goes from black to the fully saturated colors instead of from black to white, so the space is a
//! single hexcone with black at the tip. Value is simply the largest RGB channel, which makes it a
//! poor stand-in for brightness (pure blue and white have the same value) but keeps the hue and
//! saturation a bit more meaningful than HSL's.
//!
//! The hue is exactly the same as HSL's, including the quirk that a hue of 360 converts back to
//! gray instead of red.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::color::{Color, ColorError, RGBColor};
use crate::hue::{self, HueRounding};
use crate::notation::{parse_functional, ColorParseError};

/// A color in HSV: hue in whole degrees from 0 to 360 inclusive, saturation and value from 0
/// to 255.
///
/// # Example
/// Changing only the hue of a red to a yellow brightens it, because value doesn't track brightness.
///
/// ```
/// # use hexcone::prelude::*;
/// let red = HSVColor::new(0, 128, 200).unwrap();
/// let yellow = HSVColor::new(60, 128, 200).unwrap();
/// assert_eq!(red.to_rgb(), RGBColor::new(200, 100, 100));
/// assert_eq!(yellow.to_rgb(), RGBColor::new(200, 200, 100));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HSVComponents")]
pub struct HSVColor {
    h: u16,
    s: u8,
    v: u8,
}

#[derive(Deserialize)]
struct HSVComponents {
    h: u16,
    s: u8,
    v: u8,
}

impl HSVColor {
    /// Creates an HSV color, with the hue in degrees.
    /// # Errors
    /// Returns [`ColorError::InvalidArgument`] if `h` is greater than 360.
    pub fn new(h: u16, s: u8, v: u8) -> Result<HSVColor, ColorError> {
        if h > 360 {
            Err(ColorError::InvalidArgument(h))
        } else {
            Ok(HSVColor { h, s, v })
        }
    }

    /// The hue, in degrees from 0 to 360 inclusive.
    pub fn h(&self) -> u16 {
        self.h
    }

    /// The saturation, from 0 to 255.
    pub fn s(&self) -> u8 {
        self.s
    }

    /// The value, from 0 to 255: the largest of the three RGB channels.
    pub fn v(&self) -> u8 {
        self.v
    }

    /// Returns the same color with a hue of 360 replaced by 0. See
    /// [`HSLColor::normalize_hue`](../hslcolor/struct.HSLColor.html#method.normalize_hue).
    pub fn normalize_hue(self) -> HSVColor {
        HSVColor {
            h: if self.h == 360 { 0 } else { self.h },
            ..self
        }
    }

    pub(crate) fn from_rgb_with(rgb: RGBColor, rounding: HueRounding) -> HSVColor {
        let (max, _, chroma) = hue::extremes(rgb);
        // saturation is chroma relative to value, rounded down; black gets 0 instead of dividing by 0
        let saturation = if max == 0 {
            0
        } else {
            u32::from(chroma) * 255 / u32::from(max)
        };
        HSVColor {
            h: hue::hue_from_rgb(rgb, rounding),
            s: saturation as u8,
            v: max,
        }
    }

    /// Converts to RGB. Like HSL, this only approximately inverts [`RGBColor::to_hsv`], and a hue of
    /// exactly 360 comes back as gray.
    ///
    /// [`RGBColor::to_hsv`]: ../../color/struct.RGBColor.html#method.to_hsv
    pub fn to_rgb(self) -> RGBColor {
        let chroma = u32::from(self.v) * u32::from(self.s) / 255;
        // the smallest channel: no halving here, value already sits at the top of the hexcone
        let offset = u32::from(self.v) - chroma;
        hue::sector_to_rgb(self.h, chroma as u8, offset as u8)
    }
}

impl Color for HSVColor {
    fn from_rgb(rgb: RGBColor) -> HSVColor {
        rgb.to_hsv()
    }
    fn into_rgb(self) -> RGBColor {
        self.to_rgb()
    }
}

impl TryFrom<HSVComponents> for HSVColor {
    type Error = ColorError;

    fn try_from(c: HSVComponents) -> Result<HSVColor, ColorError> {
        HSVColor::new(c.h, c.s, c.v)
    }
}

impl TryFrom<(u16, u8, u8)> for HSVColor {
    type Error = ColorError;

    fn try_from((h, s, v): (u16, u8, u8)) -> Result<HSVColor, ColorError> {
        HSVColor::new(h, s, v)
    }
}

impl From<HSVColor> for (u16, u8, u8) {
    fn from(hsv: HSVColor) -> (u16, u8, u8) {
        (hsv.h, hsv.s, hsv.v)
    }
}

impl fmt::Display for HSVColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hsv({}, {}, {})", self.h, self.s, self.v)
    }
}

impl FromStr for HSVColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<HSVColor, ColorParseError> {
        let (h, s, v) = parse_functional(s, "hsv")?;
        Ok(HSVColor::new(h, s, v)?)
    }
}
