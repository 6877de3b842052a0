//! This module brings the most common functionality under a single namespace, to prevent excessive
//! imports: every trait, all three color types, the palette, the hue rounding policy, and both
//! error types.

pub use crate::color::{Color, ColorError, RGBColor};
pub use crate::colormap::{ColorMap, Palette};
pub use crate::colors::{HSLColor, HSVColor};
pub use crate::hue::HueRounding;
pub use crate::notation::ColorParseError;
