//! The text forms of colors. RGB colors are written as hex codes like `#FF8000`, and HSL and HSV
//! colors in a functional notation modeled on CSS: `hsl(30, 255, 127)`. Unlike CSS, every component
//! is a plain integer in its native range: hue in degrees from 0 to 360, everything else from 0 to
//! 255. There are no percentages and no fractional values, because none of the color types could
//! hold them. RGB also accepts `rgb(r, g, b)` and the three-digit hex shorthand `#F80`.
//!
//! The `Display` and `FromStr` impls themselves live next to each type; this module only does the
//! string crunching.

use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

use regex::Regex;

use crate::color::ColorError;

lazy_static! {
    static ref HEX_CODE: Regex =
        Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex code pattern");
    // [0-9] and not \d: \d would also match non-ASCII digits that integer parsing rejects
    static ref FUNCTIONAL: Regex = Regex::new(
        r"^([a-z]+)\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)$"
    ).expect("functional notation pattern");
}

/// An error from parsing a color out of a string.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string isn't a hex code or functional notation of the right kind, for example mismatched
    /// parentheses, a wrong number of components, or `hsv(...)` where HSL was expected.
    InvalidColorSyntax,
    /// A component is a well-formed integer but doesn't fit its type, like a saturation of 256.
    ComponentOutOfRange,
    /// The hue fits in 16 bits but is greater than 360, which the color constructor rejected.
    InvalidArgument(ColorError),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorParseError::InvalidColorSyntax => write!(f, "invalid color syntax"),
            ColorParseError::ComponentOutOfRange => write!(f, "color component out of range"),
            ColorParseError::InvalidArgument(e) => write!(f, "invalid color: {}", e),
        }
    }
}

impl Error for ColorParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ColorParseError::InvalidArgument(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColorError> for ColorParseError {
    fn from(e: ColorError) -> ColorParseError {
        ColorParseError::InvalidArgument(e)
    }
}

/// Parses `#RRGGBB` or `#RGB`, in either case, into its three channels.
pub(crate) fn parse_hex_code(code: &str) -> Result<(u8, u8, u8), ColorParseError> {
    let code = code.trim();
    if !HEX_CODE.is_match(code) {
        tracing::debug!(input = code, "rejected hex code");
        return Err(ColorParseError::InvalidColorSyntax);
    }
    let digits = &code[1..];
    // the regex only lets hex digits through, so these can't fail
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidColorSyntax);
    if digits.len() == 3 {
        // shorthand: each digit is doubled, so F becomes FF, i.e., multiplied by 17
        let r = channel(&digits[0..1])?;
        let g = channel(&digits[1..2])?;
        let b = channel(&digits[2..3])?;
        Ok((r * 17, g * 17, b * 17))
    } else {
        Ok((
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ))
    }
}

/// Parses functional notation such as `hsl(120, 255, 127)` whose name must be `name`. The first
/// component is returned as a `u16` so it can hold a hue; callers narrow it further if they need
/// to. Whitespace is allowed around the whole string and around each component.
pub(crate) fn parse_functional(s: &str, name: &str) -> Result<(u16, u8, u8), ColorParseError> {
    let caps = match FUNCTIONAL.captures(s.trim()) {
        Some(caps) if &caps[1] == name => caps,
        _ => {
            tracing::debug!(input = s, expected = name, "rejected functional notation");
            return Err(ColorParseError::InvalidColorSyntax);
        }
    };
    // all digits, so parsing only fails on overflow
    let component = |i: usize| {
        caps[i]
            .parse::<u32>()
            .map_err(|_| ColorParseError::ComponentOutOfRange)
    };
    let first = u16::try_from(component(2)?).map_err(|_| ColorParseError::ComponentOutOfRange)?;
    let second = u8::try_from(component(3)?).map_err(|_| ColorParseError::ComponentOutOfRange)?;
    let third = u8::try_from(component(4)?).map_err(|_| ColorParseError::ComponentOutOfRange)?;
    Ok((first, second, third))
}
