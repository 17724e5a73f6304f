//! Utility module with tcolor's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// Only the fallible entry points, i.e., [`Color::parse`](crate::Color::parse)
/// and the `FromStr`/`TryFrom` implementations, report this error. The
/// infallible constructors fall back onto opaque black instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that matches none of the grammar's rules. It neither is
    /// a known color name nor starts with `#` or a known function name such as
    /// `rgb` or `hsla`.
    UnknownFormat,

    /// A color format starting with `#` that does not have exactly three or six
    /// hexadecimal digits. For example, `#12` is missing a digit and `#efg`
    /// contains an invalid digit.
    MalformedHex,

    /// A color format starting with a function name that does not have the
    /// expected number of numeric arguments. For example, `rgb(1, 2)` is
    /// missing an argument and `hsla(1 2 3)` is missing the alpha argument.
    MalformedFunction,

    /// A number that is malformed. Numbers are decimals with an optional sign,
    /// an optional fractional part, and an optional percent sign. For example,
    /// `1e3` and `12.%` are malformed.
    MalformedNumber,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnknownFormat => f.write_str(
                "color format should be a color name or start with `#`, `rgb`, `rgba`, `hsl`, `hsla`, `hsv`, or `hsva`",
            ),
            MalformedHex => {
                f.write_str("color format should have 3 or 6 hexadecimal digits but does not")
            }
            MalformedFunction => f.write_str(
                "color function should have 3 numeric arguments (4 with alpha) but does not",
            ),
            MalformedNumber => f.write_str(
                "color coordinate should be a decimal number with optional `%` but is not",
            ),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An unknown format code.
///
/// [`Format`](crate::Format) recognizes the codes `hex`, `rgb`, `hsl`, `hsv`,
/// and `name`. This error carries the code that is none of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatCodeError {
    code: String,
}

impl FormatCodeError {
    /// Create a new format code error.
    pub fn new<S: Into<String>>(code: S) -> Self {
        Self { code: code.into() }
    }

    /// Get the unrecognized code.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl core::fmt::Display for FormatCodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "format code should be `hex`, `rgb`, `hsl`, `hsv`, or `name` but is `{}`",
            self.code
        ))
    }
}

impl std::error::Error for FormatCodeError {}

#[cfg(feature = "pyffi")]
impl From<FormatCodeError> for PyErr {
    fn from(value: FormatCodeError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
