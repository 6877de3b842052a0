//! This module contains the cylindrical color types, one file each. Both are built on the same hue
//! hexagon and convert to and from [`RGBColor`]. For convenience, each type is imported into this
//! module's namespace directly.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
pub mod hslcolor;
pub mod hsvcolor;

pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
