//! Hexcone is a small library for 8-bit RGB, HSL, and HSV colors, and for gradient palettes built
//! out of them. HSL and HSV are both ways of laying the RGB cube out as a cone over a hexagon of
//! hues, which is where the name comes from.
//!
//! The focus is on doing the integer math *exactly* and predictably. Every channel is 8 bits and
//! hue is a whole number of degrees, so every conversion rounds somewhere, and this crate pins down
//! precisely where: RGB → HSL/HSV rounds the hue half-up and truncates everything else, and the way
//! back truncates as well. A round trip therefore usually lands a step or two away from where it
//! started rather than exactly on it. There are no floating-point colors, no alpha, and no
//! perceptual spaces here.
//!
//! ```
//! use hexcone::prelude::*;
//!
//! let rgb = RGBColor::new(200, 100, 50);
//! let hsl = rgb.to_hsl();
//! assert_eq!(hsl, HSLColor::new(20, 153, 125).unwrap());
//! assert_eq!(hsl.to_rgb(), RGBColor::new(200, 99, 50));
//!
//! let palette = Palette::linear(rgb, RGBColor::new(0, 0, 0));
//! assert_eq!(palette.get(0.5), RGBColor::new(100, 50, 25));
//! ```

#![doc(html_root_url = "https://docs.rs/hexcone/0.1.0")]
#![deny(missing_docs)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
#[macro_use]
extern crate float_cmp;
#[cfg(test)]
#[macro_use]
extern crate maplit;

pub mod color;
pub mod colormap;
pub mod colors;
pub mod hue;
mod notation;
pub mod prelude;

pub use crate::notation::ColorParseError;
