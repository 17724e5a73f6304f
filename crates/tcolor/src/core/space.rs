#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::FormatCodeError;

/// The enumeration of supported color spaces.
///
/// All three are different coordinate systems for the same sRGB cube:
///
///   * RGB uses the red, green, and blue coordinates directly. Users write
///     them with range `0..=255`.
///   * HSL uses hue, saturation, and lightness. It arranges the cube as a
///     double cone with white and black at the tips.
///   * HSV uses hue, saturation, and value. It arranges the cube as a single
///     cone with black at the tip.
///
/// Hue is written in degrees `0..360`, saturation, lightness, and value are
/// written as percentages `0..=100`. Internally, all coordinates have unit
/// range.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "tcolor")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Hsl,
    Hsv,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine the largest user-facing values for the three coordinates.
    pub const fn maxima(&self) -> [crate::Float; 3] {
        match *self {
            Self::Rgb => [255.0, 255.0, 255.0],
            Self::Hsl | Self::Hsv => [360.0, 100.0, 100.0],
        }
    }

    /// Determine the format used for colors created in this color space.
    pub const fn format(&self) -> Format {
        match *self {
            Self::Rgb => Format::Rgb,
            Self::Hsl => Format::Hsl,
            Self::Hsv => Format::Hsv,
        }
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl core::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match *self {
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Hsv => "HSV",
        })
    }
}

// ====================================================================================================================

/// The notation a color is formatted in.
///
/// Every color remembers the format it was created from and uses it again when
/// formatted, unless another format is requested. Since neither hex nor names
/// can express alpha, formatting a translucent color may fall back onto
/// another notation:
///
/// | Format | Opaque      | Translucent           | Transparent   |
/// | ------ | ----------- | --------------------- | ------------- |
/// | `hex`  | `#rrggbb`   | `rgba(r,g,b,a)`       | `rgba(…,0)`   |
/// | `rgb`  | `rgb(r,g,b)`| `rgba(r,g,b,a)`       | `rgba(…,0)`   |
/// | `hsl`  | `hsl(h,s%,l%)` | `hsla(h,s%,l%,a)`  | `hsla(…,0)`   |
/// | `hsv`  | `hsv(h,s%,v%)` | `hsva(h,s%,v%,a)`  | `hsva(…,0)`   |
/// | `name` | name or `#rrggbb` | `rgba(r,g,b,a)` | `transparent` |
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "tcolor")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Hashed hexadecimal notation such as `#ff8000`.
    #[default]
    Hex,
    /// The `rgb()` and `rgba()` functions.
    Rgb,
    /// The `hsl()` and `hsla()` functions.
    Hsl,
    /// The `hsv()` and `hsva()` functions.
    Hsv,
    /// CSS color names such as `orange`.
    Name,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Format {
    /// Get this format's code.
    pub const fn code(&self) -> &'static str {
        match *self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Name => "name",
        }
    }

    /// Parse a format code. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(code: &str) -> Result<Format, FormatCodeError> {
        use core::str::FromStr;

        Format::from_str(code)
    }

    /// Create a human-readable representation for this format. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl core::str::FromStr for Format {
    type Err = FormatCodeError;

    /// Parse a format code.
    ///
    /// The code is case-insensitive and may have surrounding white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        match code.as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            "hsv" => Ok(Self::Hsv),
            "name" => Ok(Self::Name),
            _ => Err(FormatCodeError::new(s)),
        }
    }
}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}
