//! The hexagon shared by HSL and HSV. Tilt the RGB cube onto its black-white diagonal and project it
//! flat, and you get a hexagon: the angle around it is the hue, and the "radius" is just the largest
//! component minus the smallest one. Adding the same amount to every channel only slides a color up
//! and down the diagonal, so it doesn't change either of those. HSL and HSV only disagree on what the
//! third component is and how chroma is scaled into saturation, so everything that touches the
//! hexagon itself lives here and both color types call into it.
//!
//! Everything works on 8-bit channels and whole degrees, so the exact places where the math
//! truncates or rounds matter: they decide which colors survive a round trip unchanged.

use crate::color::RGBColor;

/// How the real-valued hue angle computed from an RGB color is turned into whole degrees.
///
/// # Example
/// A red leaning very slightly towards blue sits at 359.76°: rounding pushes it all the way to 360,
/// truncation keeps it at 359.
///
/// ```
/// # use hexcone::prelude::*;
/// let almost_red = RGBColor::new(255, 0, 1);
/// assert_eq!(almost_red.to_hsv_with(HueRounding::HalfUp).h(), 360);
/// assert_eq!(almost_red.to_hsv_with(HueRounding::Truncate).h(), 359);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HueRounding {
    /// Add one half, then truncate. This is what [`RGBColor::to_hsl`] and [`RGBColor::to_hsv`] use.
    /// Note that it can produce a hue of 360, which is a distinct value from 0.
    HalfUp,
    /// Truncate towards zero. Never produces 360.
    Truncate,
}

impl Default for HueRounding {
    fn default() -> HueRounding {
        HueRounding::HalfUp
    }
}

impl HueRounding {
    /// Rounds a hue angle in [0, 360) to whole degrees.
    fn apply(self, degrees: f64) -> u16 {
        match self {
            HueRounding::HalfUp => (degrees + 0.5) as u16,
            HueRounding::Truncate => degrees as u16,
        }
    }
}

/// Returns the largest channel, the smallest channel, and the chroma (their difference).
pub(crate) fn extremes(rgb: RGBColor) -> (u8, u8, u8) {
    let max = rgb.r().max(rgb.g()).max(rgb.b());
    let min = rgb.r().min(rgb.g()).min(rgb.b());
    (max, min, max - min)
}

/// Computes the hue of an RGB color in whole degrees, between 0 and 360 inclusive. Gray has no real
/// hue, and gets 0.
pub(crate) fn hue_from_rgb(rgb: RGBColor, rounding: HueRounding) -> u16 {
    let (max, _, chroma) = extremes(rgb);
    let (r, g, b) = (f64::from(rgb.r()), f64::from(rgb.g()), f64::from(rgb.b()));

    // hue_prime is the position on the hexagon in sixths, in [0, 6)
    // ties go to red first, then green: the order of the checks matters
    let hue_prime = if chroma == 0 {
        0.0
    } else if max == rgb.r() {
        // g - b can be negative, so push it up by a full turn before wrapping
        ((g - b) / f64::from(chroma) + 6.0) % 6.0
    } else if max == rgb.g() {
        (b - r) / f64::from(chroma) + 2.0
    } else {
        (r - g) / f64::from(chroma) + 4.0
    };

    rounding.apply(60.0 * hue_prime)
}

/// Goes back around the hexagon: given a hue, the chroma, and the offset that every channel gets
/// (how far up the gray diagonal the color sits), rebuilds the RGB color. The second-largest channel
/// is computed in floating point and truncated once the offset is added.
///
/// A hue of exactly 360 falls outside the six sectors and comes back as the gray `(m, m, m)`, unlike
/// a hue of 0. This is deliberate: callers who want 360 treated as 0 normalize the hue first.
pub(crate) fn sector_to_rgb(hue: u16, chroma: u8, offset: u8) -> RGBColor {
    let hue_prime = f64::from(hue) / 60.0;
    let x = f64::from(chroma) * (1.0 - (hue_prime % 2.0 - 1.0).abs());

    let m = offset;
    let c = chroma + offset;
    let x = (x + f64::from(offset)) as u8;

    let (r, g, b) = match hue_prime as u32 {
        0 => (c, x, m),
        1 => (x, c, m),
        2 => (m, c, x),
        3 => (m, x, c),
        4 => (x, m, c),
        5 => (c, m, x),
        _ => (m, m, m),
    };
    RGBColor::new(r, g, b)
}
