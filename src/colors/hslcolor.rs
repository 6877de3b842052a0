//! This file implements HSL: hue, saturation, and lightness, a cylindrical rearrangement of RGB.
//! *Lightness* runs from black through the fully saturated colors in the middle up to white, which
//! makes the space a "bi-hexcone": the hexagon of hues is widest at half lightness and shrinks to a
//! point at both ends. HSL shares its hue with HSV exactly; only the other two components differ.
//!
//! Everything is integral here. Hue is in whole degrees from 0 to 360 *inclusive*, and saturation
//! and lightness run from 0 to 255 like RGB channels. Note that 0 and 360 are different values,
//! even though they name the same angle, and they don't convert back to the same RGB color: a hue
//! of 360 falls outside the six sectors of the hexagon and comes back as gray. Use
//! [`HSLColor::normalize_hue`] to fold 360 onto 0 first if that matters.
//!
//! Converting gray into HSL gives a hue of 0, although any hue would do.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::color::{Color, ColorError, RGBColor};
use crate::hue::{self, HueRounding};
use crate::notation::{parse_functional, ColorParseError};

/// A color in HSL. The components are fixed at construction: build a new color instead of changing
/// one.
///
/// # Example
/// ```
/// # use hexcone::prelude::*;
/// let pale_blue = HSLColor::new(210, 128, 200).unwrap();
/// assert_eq!(pale_blue.to_rgb(), RGBColor::new(173, 200, 228));
/// assert!(HSLColor::new(361, 0, 0).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HSLComponents")]
pub struct HSLColor {
    h: u16,
    s: u8,
    l: u8,
}

// what deserialization sees before the hue is checked
#[derive(Deserialize)]
struct HSLComponents {
    h: u16,
    s: u8,
    l: u8,
}

impl HSLColor {
    /// Creates an HSL color, with the hue in degrees.
    /// # Errors
    /// Returns [`ColorError::InvalidArgument`] if `h` is greater than 360.
    pub fn new(h: u16, s: u8, l: u8) -> Result<HSLColor, ColorError> {
        if h > 360 {
            Err(ColorError::InvalidArgument(h))
        } else {
            Ok(HSLColor { h, s, l })
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

    /// The lightness, from 0 to 255.
    pub fn l(&self) -> u8 {
        self.l
    }

    /// Returns the same color with a hue of 360 replaced by 0, so that it converts like every other
    /// red instead of collapsing to gray. Any other hue is left alone.
    pub fn normalize_hue(self) -> HSLColor {
        HSLColor {
            h: if self.h == 360 { 0 } else { self.h },
            ..self
        }
    }

    /// Converts from RGB with the given rounding policy for the hue. Lightness is the midpoint of
    /// the largest and smallest channels, rounded down; saturation is the chroma scaled against the
    /// largest chroma possible at that lightness, also rounded down.
    pub(crate) fn from_rgb_with(rgb: RGBColor, rounding: HueRounding) -> HSLColor {
        let (max, min, chroma) = hue::extremes(rgb);
        let sum = i32::from(max) + i32::from(min);
        let lightness = sum / 2;

        // the widest the hexagon gets at this lightness: 0 at black and white, 255 in the middle
        let divisor = 255 - (sum - 255).abs();
        let saturation = if divisor == 0 {
            0
        } else {
            i32::from(chroma) * 255 / divisor
        };

        HSLColor {
            h: hue::hue_from_rgb(rgb, rounding),
            s: saturation as u8,
            l: lightness as u8,
        }
    }

    /// Converts to RGB. All of the integer math truncates, so this is only approximately the inverse
    /// of [`RGBColor::to_hsl`]: a round trip usually lands within a step or two of where it started.
    /// A hue of exactly 360 comes back as gray.
    ///
    /// [`RGBColor::to_hsl`]: ../../color/struct.RGBColor.html#method.to_hsl
    pub fn to_rgb(self) -> RGBColor {
        let l = i32::from(self.l);
        // invert the lightness-dependent scaling of saturation to get back chroma
        let chroma = (255 - (2 * l - 255).abs()) * i32::from(self.s) / 255;
        let offset = l - chroma / 2;
        hue::sector_to_rgb(self.h, chroma as u8, offset as u8)
    }
}

impl Color for HSLColor {
    fn from_rgb(rgb: RGBColor) -> HSLColor {
        rgb.to_hsl()
    }
    fn into_rgb(self) -> RGBColor {
        self.to_rgb()
    }
}

impl TryFrom<HSLComponents> for HSLColor {
    type Error = ColorError;

    fn try_from(c: HSLComponents) -> Result<HSLColor, ColorError> {
        HSLColor::new(c.h, c.s, c.l)
    }
}

impl TryFrom<(u16, u8, u8)> for HSLColor {
    type Error = ColorError;

    fn try_from((h, s, l): (u16, u8, u8)) -> Result<HSLColor, ColorError> {
        HSLColor::new(h, s, l)
    }
}

impl From<HSLColor> for (u16, u8, u8) {
    fn from(hsl: HSLColor) -> (u16, u8, u8) {
        (hsl.h, hsl.s, hsl.l)
    }
}

impl fmt::Display for HSLColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hsl({}, {}, {})", self.h, self.s, self.l)
    }
}

impl FromStr for HSLColor {
    type Err = ColorParseError;

    /// Parses `hsl(h, s, l)` with integer components in their native ranges.
    fn from_str(s: &str) -> Result<HSLColor, ColorParseError> {
        let (h, s, l) = parse_functional(s, "hsl")?;
        Ok(HSLColor::new(h, s, l)?)
    }
}
