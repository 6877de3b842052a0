//! This module defines the [`Color`] trait, the hub-and-spoke model every color type converts
//! through, along with [`RGBColor`], the hub itself, and [`ColorError`], the one thing that can go
//! wrong when building a color.
//!
//! Every color in this crate is an 8-bit-per-channel value: there are no floats, no alpha, and no
//! wide gamut. That makes conversions lossy in both directions, and the exact places where they
//! truncate are part of the contract. See [`HSLColor`] and [`HSVColor`] for the details.
//!
//! [`HSLColor`]: ../colors/hslcolor/struct.HSLColor.html
//! [`HSVColor`]: ../colors/hsvcolor/struct.HSVColor.html

use std::convert::TryFrom;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::colors::{HSLColor, HSVColor};
use crate::hue::HueRounding;
use crate::notation::{parse_functional, parse_hex_code, ColorParseError};

/// The error for a color component outside its allowed range. Only the hue of HSL and HSV colors
/// can be out of range, because every other component already has a type that covers exactly its
/// range.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum ColorError {
    /// A hue greater than 360 degrees was given. Holds the rejected hue.
    InvalidArgument(u16),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorError::InvalidArgument(h) => {
                write!(f, "hue must not be greater than 360, got {}", h)
            }
        }
    }
}

impl Error for ColorError {}

/// A trait for anything that converts to and from RGB. RGB is the hub: HSL and HSV are both defined
/// as transformations of it, so converting between any two color types goes through RGB.
///
/// # Example
/// ```
/// # use hexcone::prelude::*;
/// let teal = HSVColor::new(180, 255, 128).unwrap();
/// let same_teal: HSLColor = teal.convert();
/// assert_eq!(same_teal, HSLColor::new(180, 255, 64).unwrap());
/// ```
pub trait Color: Copy {
    /// Converts from RGB into this color type.
    fn from_rgb(rgb: RGBColor) -> Self;
    /// Converts this color into RGB.
    fn into_rgb(self) -> RGBColor;
    /// Converts this color into any other color type, through RGB.
    fn convert<T: Color>(self) -> T {
        T::from_rgb(self.into_rgb())
    }
}

/// A color with 8-bit red, green, and blue channels. Every combination of channels is a valid
/// color, so construction can't fail. The default is black.
///
/// # Example
/// ```
/// # use hexcone::prelude::*;
/// let orange = RGBColor::new(255, 128, 0);
/// assert_eq!(orange.to_hsl(), HSLColor::new(30, 255, 127).unwrap());
/// assert_eq!(orange.to_hsv(), HSVColor::new(30, 255, 255).unwrap());
/// assert_eq!(orange.to_string(), "#FF8000");
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    r: u8,
    g: u8,
    b: u8,
}

impl RGBColor {
    /// Creates a color from its red, green, and blue channels.
    pub const fn new(r: u8, g: u8, b: u8) -> RGBColor {
        RGBColor { r, g, b }
    }

    /// The red channel.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// The green channel.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// The blue channel.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Converts to HSL, rounding the hue half-up. See [`HSLColor`] for the exact rules.
    ///
    /// [`HSLColor`]: ../colors/hslcolor/struct.HSLColor.html
    pub fn to_hsl(self) -> HSLColor {
        self.to_hsl_with(HueRounding::default())
    }

    /// Converts to HSL with the given hue rounding policy.
    pub fn to_hsl_with(self, rounding: HueRounding) -> HSLColor {
        HSLColor::from_rgb_with(self, rounding)
    }

    /// Converts to HSV, rounding the hue half-up. See [`HSVColor`] for the exact rules.
    ///
    /// [`HSVColor`]: ../colors/hsvcolor/struct.HSVColor.html
    pub fn to_hsv(self) -> HSVColor {
        self.to_hsv_with(HueRounding::default())
    }

    /// Converts to HSV with the given hue rounding policy.
    pub fn to_hsv_with(self, rounding: HueRounding) -> HSVColor {
        HSVColor::from_rgb_with(self, rounding)
    }

    /// Linearly interpolates each channel between `self` (at `t = 0`) and `other` (at `t = 1`),
    /// truncating the result. `t` is expected to be between 0 and 1.
    ///
    /// # Example
    /// ```
    /// # use hexcone::prelude::*;
    /// let red = RGBColor::new(255, 0, 0);
    /// let green = RGBColor::new(0, 255, 0);
    /// // 127.5 truncates to 127
    /// assert_eq!(red.lerp(green, 0.5), RGBColor::new(127, 127, 0));
    /// ```
    pub fn lerp(self, other: RGBColor, t: f64) -> RGBColor {
        let one_minus_t = 1.0 - t;
        let blend = |a: u8, b: u8| (f64::from(a) * one_minus_t + f64::from(b) * t) as u8;
        RGBColor {
            r: blend(self.r, other.r),
            g: blend(self.g, other.g),
            b: blend(self.b, other.b),
        }
    }

    /// Parses a hex code, `#RRGGBB` or the shorthand `#RGB`, in either case. Unlike parsing with
    /// `str::parse`, functional notation isn't accepted here.
    ///
    /// # Example
    /// ```
    /// # use hexcone::prelude::*;
    /// assert_eq!(RGBColor::from_hex_code("#1a2b3c"), Ok(RGBColor::new(26, 43, 60)));
    /// assert_eq!(RGBColor::from_hex_code("#F80"), Ok(RGBColor::new(255, 136, 0)));
    /// assert!(RGBColor::from_hex_code("rgb(1, 2, 3)").is_err());
    /// ```
    pub fn from_hex_code(code: &str) -> Result<RGBColor, ColorParseError> {
        parse_hex_code(code).map(RGBColor::from)
    }
}

impl Color for RGBColor {
    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }
    fn into_rgb(self) -> RGBColor {
        self
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from((r, g, b): (u8, u8, u8)) -> RGBColor {
        RGBColor { r, g, b }
    }
}

impl From<RGBColor> for (u8, u8, u8) {
    fn from(rgb: RGBColor) -> (u8, u8, u8) {
        (rgb.r, rgb.g, rgb.b)
    }
}

/// Formats as an uppercase hex code, like `#FF8000`.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = ColorParseError;

    /// Parses a hex code or `rgb(r, g, b)`.
    fn from_str(s: &str) -> Result<RGBColor, ColorParseError> {
        if s.trim_start().starts_with('#') {
            return RGBColor::from_hex_code(s);
        }
        let (r, g, b) = parse_functional(s, "rgb")?;
        let r = u8::try_from(r).map_err(|_| ColorParseError::ComponentOutOfRange)?;
        Ok(RGBColor { r, g, b })
    }
}
