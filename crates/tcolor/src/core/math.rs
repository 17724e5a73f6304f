use crate::error::ColorFormatError;
use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// --------------------------------------------------------------------------------------------------------------------

/// A color coordinate before normalization.
///
/// Coordinates arrive either as plain numbers in their native range, e.g.,
/// `0..=255` for red, `0..=360` for hue, or `0..=1` for alpha, or as
/// percentages. Only the latter ignore the native range and always are divided
/// by 100.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Component {
    /// A plain number in the coordinate's native range.
    Number(Float),
    /// A percentage. Only its integral part counts, i.e., `12.7%` is treated
    /// as `12%`.
    Percent(Float),
}

impl Component {
    /// Create a new percentage.
    pub const fn percent(value: Float) -> Self {
        Self::Percent(value)
    }

    /// Normalize this component to unit range.
    ///
    /// See [`to_unit`] for details.
    #[inline]
    pub fn to_unit(self, divisor: Option<Float>) -> Float {
        to_unit(self, divisor)
    }
}

impl From<Float> for Component {
    fn from(value: Float) -> Self {
        Self::Number(value)
    }
}

impl From<u8> for Component {
    fn from(value: u8) -> Self {
        Self::Number(Float::from(value))
    }
}

impl From<u16> for Component {
    fn from(value: u16) -> Self {
        Self::Number(Float::from(value))
    }
}

impl From<i32> for Component {
    fn from(value: i32) -> Self {
        Self::Number(value as Float)
    }
}

impl core::str::FromStr for Component {
    type Err = ColorFormatError;

    /// Parse a component.
    ///
    /// The string must be a decimal number with an optional leading sign, an
    /// optional fractional part, and an optional trailing `%`. Leading and
    /// trailing white space is ignored. Exponents, infinities, and
    /// not-a-numbers are not.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::Component;
    /// # use tcolor::error::ColorFormatError;
    /// assert_eq!(" 50% ".parse::<Component>()?, Component::Percent(50.0));
    /// assert_eq!("-.25".parse::<Component>()?, Component::Number(-0.25));
    /// assert!("1e3".parse::<Component>().is_err());
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if number_length(s) != Some(s.len()) {
            return Err(ColorFormatError::MalformedNumber);
        }

        let (digits, is_percent) = s
            .strip_suffix('%')
            .map_or((s, false), |digits| (digits, true));
        let value = digits
            .parse::<Float>()
            .map_err(|_| ColorFormatError::MalformedNumber)?;

        Ok(if is_percent {
            Self::Percent(value)
        } else {
            Self::Number(value)
        })
    }
}

impl core::fmt::Display for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Number(value) => f.write_fmt(format_args!("{}", value)),
            Self::Percent(value) => f.write_fmt(format_args!("{}%", value)),
        }
    }
}

/// Determine the length of the number at the start of the string.
///
/// A number has an optional sign, followed by digits with an optional
/// fractional part or just a fractional part, followed by an optional `%`. If
/// the string does not start with a number, this function returns `None`. A
/// trailing period without digits is not part of the number.
pub(crate) fn number_length(s: &str) -> Option<usize> {
    fn count_digits(bytes: &[u8]) -> usize {
        bytes.iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let bytes = s.as_bytes();
    let mut index = usize::from(matches!(bytes.first(), Some(&(b'+' | b'-'))));

    let integral = bytes.get(index..).map_or(0, count_digits);
    index += integral;

    let mut fractional = 0;
    if bytes.get(index) == Some(&b'.') {
        fractional = bytes.get(index + 1..).map_or(0, count_digits);
        if 0 < fractional {
            index += 1 + fractional;
        }
    }

    if integral == 0 && fractional == 0 {
        return None;
    }
    if bytes.get(index) == Some(&b'%') {
        index += 1;
    }

    Some(index)
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the component to unit range.
///
/// A percentage is truncated to its integral part and divided by 100, no
/// matter the divisor. A number is divided by the divisor, if there is one.
/// Either way, the result is clamped to `0..=1`. Not-a-number becomes zero.
///
/// The divisor is 255 for red, green, and blue, 360 for hue, and 100 for
/// saturation, lightness, and value. Alpha has no divisor, since it already
/// has unit range.
pub(crate) fn to_unit(component: Component, divisor: Option<Float>) -> Float {
    let value = match component {
        Component::Percent(value) => value.trunc() / 100.0,
        Component::Number(value) => divisor.map_or(value, |divisor| value / divisor),
    };

    if value.is_nan() {
        0.0
    } else {
        // Too much negativity!
        let value = value.clamp(0.0, 1.0);
        if value == -0.0 {
            0.0
        } else {
            value
        }
    }
}

/// Expand the unit-range value to range `0..=max`.
///
/// This function multiplies the value by the maximum, rounds the result to
/// the nearest integer if requested, and clamps it to `0..=max`. It is the
/// inverse of [`to_unit`] for numbers.
pub(crate) fn from_unit(value: Float, max: Float, round: bool) -> Float {
    let mut value = value * max;
    if round {
        value = value.round();
    }

    if value.is_nan() || value == -0.0 {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// Wrap the hue into `0..360`.
///
/// This function tolerates any number of full rotations in either direction.
/// Infinities and not-a-number become zero.
pub(crate) fn wrap_hue(hue: Float) -> Float {
    if !hue.is_finite() {
        return 0.0;
    }

    let hue = hue.rem_euclid(360.0);
    if hue < 360.0 {
        hue
    } else {
        // Tiny negative hues round up to 360.
        0.0
    }
}
