use alloc::borrow::Cow;
use core::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clamp, convert, format, from_24bit, from_unit, parse, rgb_to_ryb_hue, ryb_to_rgb_hue,
    to_24bit, to_eq_channels, to_unit, wrap_hue, ColorSpace, Component, Format, Notation,
};
use crate::error::ColorFormatError;
use crate::Float;

/// The red, green, and blue coordinates of a color plus alpha.
///
/// Red, green, and blue range `0..=255`, alpha ranges `0..=1`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, module = "tcolor")
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: Float,
    pub g: Float,
    pub b: Float,
    pub a: Float,
}

/// The hue, saturation, and lightness of a color plus alpha.
///
/// Hue ranges `0..=360`, saturation and lightness range `0..=100`, alpha ranges
/// `0..=1`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, module = "tcolor")
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsla {
    pub h: Float,
    pub s: Float,
    pub l: Float,
    pub a: Float,
}

/// The hue, saturation, and value of a color plus alpha.
///
/// Hue ranges `0..=360`, saturation and value range `0..=100`, alpha ranges
/// `0..=1`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, get_all, module = "tcolor")
)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsva {
    pub h: Float,
    pub s: Float,
    pub v: Float,
    pub a: Float,
}

// ====================================================================================================================

/// The components of a color, before normalization.
///
/// A record of components has a color space, three coordinates, and optionally
/// alpha and a format. The coordinates are [`Component`]s in the color space's
/// native ranges, i.e., `0..=255` for red, green, and blue, `0..=360` for hue,
/// and `0..=100` for saturation, lightness, and value. Alpha has range
/// `0..=1`. Alternatively, any of them may be a percentage.
///
/// Without a format, a color created from the components uses the color space's
/// format, i.e., `rgb`, `hsl`, or `hsv`. Without alpha, the color is fully
/// opaque.
///
/// # Examples
///
/// ```
/// # use tcolor::{Color, Component, Components, Format};
/// let orange = Color::from(Components::hsl(30, 100, 50));
/// assert_eq!(orange.to_string(), "hsl(30,100%,50%)");
///
/// let also_orange = Color::from(
///     Components::rgb(Component::percent(100.0), 128.into(), 0.into())
///         .with_alpha(0.5)
///         .with_format(Format::Hex)
/// );
/// assert_eq!(also_orange.to_string(), "rgba(255,128,0,0.5)");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Components {
    space: ColorSpace,
    coordinates: [Component; 3],
    alpha: Option<Component>,
    format: Option<Format>,
}

impl Components {
    /// Create new components with the given color space and coordinates.
    pub const fn new(space: ColorSpace, coordinates: [Component; 3]) -> Self {
        Self {
            space,
            coordinates,
            alpha: None,
            format: None,
        }
    }

    /// Create new red, green, and blue components.
    pub fn rgb<C: Into<Component>>(r: C, g: C, b: C) -> Self {
        Self::new(ColorSpace::Rgb, [r.into(), g.into(), b.into()])
    }

    /// Create new hue, saturation, and lightness components.
    pub fn hsl<C: Into<Component>>(h: C, s: C, l: C) -> Self {
        Self::new(ColorSpace::Hsl, [h.into(), s.into(), l.into()])
    }

    /// Create new hue, saturation, and value components.
    pub fn hsv<C: Into<Component>>(h: C, s: C, v: C) -> Self {
        Self::new(ColorSpace::Hsv, [h.into(), s.into(), v.into()])
    }

    /// Update these components with the given alpha.
    #[must_use = "method returns new components and does not mutate original value"]
    pub fn with_alpha<C: Into<Component>>(self, alpha: C) -> Self {
        Self {
            alpha: Some(alpha.into()),
            ..self
        }
    }

    /// Update these components with the given format.
    #[must_use = "method returns new components and does not mutate original value"]
    pub fn with_format(self, format: Format) -> Self {
        Self {
            format: Some(format),
            ..self
        }
    }

    /// Access the color space.
    pub const fn space(&self) -> ColorSpace {
        self.space
    }

    /// Access the coordinates.
    pub const fn coordinates(&self) -> &[Component; 3] {
        &self.coordinates
    }

    /// Access alpha.
    pub const fn alpha(&self) -> Option<Component> {
        self.alpha
    }

    /// Access the format.
    pub const fn format(&self) -> Option<Format> {
        self.format
    }

    /// Normalize these components to RGB coordinates in unit range and alpha.
    fn to_rgb_alpha(self) -> ([Float; 3], Float) {
        let [c1, c2, c3] = self.coordinates;
        let [m1, m2, m3] = self.space.maxima();
        let coordinates = [
            to_unit(c1, Some(m1)),
            to_unit(c2, Some(m2)),
            to_unit(c3, Some(m3)),
        ];

        let rgb = convert(self.space, ColorSpace::Rgb, &coordinates);
        let alpha = self.alpha.map_or(1.0, |alpha| to_unit(alpha, None));
        (clamp(&rgb), alpha)
    }
}

impl From<Rgba> for Components {
    fn from(value: Rgba) -> Self {
        Self::rgb(value.r, value.g, value.b).with_alpha(value.a)
    }
}

impl From<Hsla> for Components {
    fn from(value: Hsla) -> Self {
        Self::hsl(value.h, value.s, value.l).with_alpha(value.a)
    }
}

impl From<Hsva> for Components {
    fn from(value: Hsva) -> Self {
        Self::hsv(value.h, value.s, value.v).with_alpha(value.a)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Options for creating a color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// The format, which takes precedence over any format implied by the
    /// input.
    pub format: Option<Format>,
}

impl Options {
    /// Create new options with the given format.
    pub const fn with_format(format: Format) -> Self {
        Self {
            format: Some(format),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Everything a color can be created from.
///
/// Thanks to the `From` implementations, [`Color::new`], [`color`], and
/// [`Color::mix`] accept colors, string slices, strings, and [`Components`]
/// as well as [`Rgba`], [`Hsla`], and [`Hsva`] records.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorInput<'a> {
    /// An existing color, which is used as is.
    Color(Color),
    /// A color in textual notation.
    Text(Cow<'a, str>),
    /// A record of color components.
    Components(Components),
}

impl From<Color> for ColorInput<'_> {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<&Color> for ColorInput<'_> {
    fn from(value: &Color) -> Self {
        Self::Color(*value)
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for ColorInput<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<Components> for ColorInput<'_> {
    fn from(value: Components) -> Self {
        Self::Components(value)
    }
}

impl From<Rgba> for ColorInput<'_> {
    fn from(value: Rgba) -> Self {
        Self::Components(value.into())
    }
}

impl From<Hsla> for ColorInput<'_> {
    fn from(value: Hsla) -> Self {
        Self::Components(value.into())
    }
}

impl From<Hsva> for ColorInput<'_> {
    fn from(value: Hsva) -> Self {
        Self::Components(value.into())
    }
}

// ====================================================================================================================

/// Create a new color.
///
/// This function is the same as [`Color::new`] with default options. If the
/// input already is a color, this function returns that color.
///
/// # Examples
///
/// ```
/// # use tcolor::{color, Format};
/// let red = color("red");
/// assert_eq!(red.format(), Format::Name);
/// assert_eq!(red.to_hex_format(), "#ff0000");
/// assert_eq!(color(red), red);
/// ```
pub fn color<'a, I: Into<ColorInput<'a>>>(input: I) -> Color {
    Color::new(input, Options::default())
}

/// An immutable color value.
///
/// Every color has red, green, and blue coordinates and alpha, all in unit
/// range, as well as the [`Format`] it was created from. HSL and HSV are
/// derived from the RGB coordinates on demand. All transforms return new
/// colors, which keep this color's format.
///
/// # Equality Testing and Hashing
///
/// Two colors are equal if they have the same format and their coordinates
/// and alpha are close enough. To make that work with hashing, both operations
/// replace not-a-numbers with zero, reduce resolution, and drop the sign of
/// negative zero before comparing or hashing the resulting bit strings.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "tcolor"))]
#[derive(Copy, Clone)]
pub struct Color {
    rgb: [Float; 3],
    alpha: Float,
    format: Format,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    /// The default weight for mixing colors.
    #[cfg(not(feature = "pyffi"))]
    pub const DEFAULT_MIX_WEIGHT: Float = 0.5;

    /// The default weight for mixing colors.
    #[cfg(feature = "pyffi")]
    #[classattr]
    pub const DEFAULT_MIX_WEIGHT: Float = 0.5;

    /// Create a new color from its textual notation. <i
    /// class=python-only>Python only!</i>
    ///
    /// Like [`Color::new`], this constructor falls back onto opaque black if it
    /// cannot make sense of the string.
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (input, format=None))]
    pub fn py_new(input: &str, format: Option<Format>) -> Self {
        Self::new(input, Options { format })
    }

    /// Parse a color from its textual notation.
    ///
    /// Unlike [`Color::new`] and [`color`], this method reports input it
    /// cannot make sense of as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::{Color, Format};
    /// # use tcolor::error::ColorFormatError;
    /// let cyan = Color::parse("hsl(180, 100%, 50%)")?;
    /// assert_eq!(cyan.format(), Format::Hsl);
    /// assert_eq!(cyan.to_hex_format(), "#00ffff");
    ///
    /// assert_eq!(Color::parse("#12"), Err(ColorFormatError::MalformedHex));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        Self::from_str(s)
    }

    /// Parse a color from its textual notation.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        Self::from_str(s)
    }

    /// Create a new color from 24-bit RGB coordinates. Its format is `hex`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::Color;
    /// let tomato = Color::from_24bit(0xff, 0x63, 0x47);
    /// assert_eq!(tomato.to_string(), "#ff6347");
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::from_parts(from_24bit(r, g, b), 1.0, Format::Hex)
    }

    /// Create a new color from 24-bit RGB coordinates. Its format is `hex`.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::from_parts(from_24bit(r, g, b), 1.0, Format::Hex)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access this color's format.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Create a copy of this color with the given format.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_format(&self, format: Format) -> Self {
        Self { format, ..*self }
    }

    /// Access this color's alpha.
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Create a copy of this color with the given alpha.
    ///
    /// Alpha is clamped to `0..=1`. The copy keeps this color's format.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::color;
    /// let red = color("#f00");
    /// assert_eq!(red.with_alpha(0.5).to_string(), "rgba(255,0,0,0.5)");
    /// assert_eq!(red.with_alpha(7.0).to_string(), "#ff0000");
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self {
            alpha: to_unit(Component::Number(alpha), None),
            ..*self
        }
    }

    /// Get this color's red, green, and blue coordinates in range `0..=255`
    /// plus alpha, optionally rounded to integers. Alpha is never rounded.
    pub fn rgb(&self, round: bool) -> Rgba {
        let [r, g, b] = self.rgb;
        Rgba {
            r: from_unit(r, 255.0, round),
            g: from_unit(g, 255.0, round),
            b: from_unit(b, 255.0, round),
            a: self.alpha,
        }
    }

    /// Get this color's hue in range `0..=360` as well as saturation and
    /// lightness in range `0..=100` plus alpha, optionally rounded to
    /// integers. Alpha is never rounded.
    pub fn hsl(&self, round: bool) -> Hsla {
        let [h, s, l] = convert(ColorSpace::Rgb, ColorSpace::Hsl, &self.rgb);
        Hsla {
            h: from_unit(h, 360.0, round),
            s: from_unit(s, 100.0, round),
            l: from_unit(l, 100.0, round),
            a: self.alpha,
        }
    }

    /// Get this color's hue in range `0..=360` as well as saturation and
    /// value in range `0..=100` plus alpha, optionally rounded to integers.
    /// Alpha is never rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::{color, Hsva};
    /// let coral = color("coral");
    /// assert_eq!(
    ///     coral.hsv(true),
    ///     Hsva { h: 16.0, s: 69.0, v: 100.0, a: 1.0 }
    /// );
    /// ```
    pub fn hsv(&self, round: bool) -> Hsva {
        let [h, s, v] = convert(ColorSpace::Rgb, ColorSpace::Hsv, &self.rgb);
        Hsva {
            h: from_unit(h, 360.0, round),
            s: from_unit(s, 100.0, round),
            v: from_unit(v, 100.0, round),
            a: self.alpha,
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Lighten this color by the given amount.
    ///
    /// This method adds the amount to the color's HSL lightness, which ranges
    /// `0..=100`. The result is clamped.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten(&self, amount: Float) -> Self {
        let mut hsl = self.hsl(false);
        hsl.l += amount;
        self.with_hsl(hsl)
    }

    /// Darken this color by the given amount.
    ///
    /// This method subtracts the amount from the color's HSL lightness, which
    /// ranges `0..=100`. The result is clamped.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken(&self, amount: Float) -> Self {
        self.lighten(-amount)
    }

    /// Saturate this color by the given amount.
    ///
    /// This method adds the amount to the color's HSL saturation, which ranges
    /// `0..=100`. The result is clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::color;
    /// let blue = color("#336699");
    /// assert_eq!(blue.saturate(20.0).to_string(), "#1f66ad");
    /// assert_eq!(blue.saturate(80.0).hsl(true).s, 100.0);
    /// assert_eq!(blue.desaturate(100.0).to_string(), "#666666");
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn saturate(&self, amount: Float) -> Self {
        let mut hsl = self.hsl(false);
        hsl.s += amount;
        self.with_hsl(hsl)
    }

    /// Desaturate this color by the given amount.
    ///
    /// This method subtracts the amount from the color's HSL saturation, which
    /// ranges `0..=100`. The result is clamped.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn desaturate(&self, amount: Float) -> Self {
        self.saturate(-amount)
    }

    /// Rotate this color's hue by the given degrees.
    ///
    /// If `ryb` is `true`, this method rotates the hue on the red-yellow-blue
    /// artist's wheel instead of the red-green-blue wheel. The resulting hue
    /// wraps around, no matter how many full turns the rotation makes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::color;
    /// let red = color("red");
    /// assert_eq!(red.rotate(-20.0, false).hsl(true).h, 340.0);
    /// assert_eq!(red.rotate(120.0, false).to_string(), "lime");
    /// assert_eq!(red.rotate(120.0, true).to_string(), "yellow");
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn rotate(&self, degrees: Float, ryb: bool) -> Self {
        let mut hsl = self.hsl(false);

        let hue = if ryb { rgb_to_ryb_hue(hsl.h) } else { hsl.h };
        let hue = hue + degrees;
        let hue = if ryb { ryb_to_rgb_hue(hue) } else { hue };

        hsl.h = wrap_hue(hue);
        self.with_hsl(hsl)
    }

    /// Determine this color's complement, i.e., rotate its hue by 180
    /// degrees, optionally on the red-yellow-blue wheel.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn complement(&self, ryb: bool) -> Self {
        self.rotate(180.0, ryb)
    }

    /// Mix this color with the other color. <i class=python-only>Python
    /// only!</i>
    ///
    /// See [`Color::mix`].
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "mix", signature = (other, weight=Color::DEFAULT_MIX_WEIGHT))]
    pub fn py_mix(&self, other: &Self, weight: Float) -> Self {
        self.mix(other, weight)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit RGB representation.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.rgb)
    }

    /// Format this color in familiar `#123abc` hashed hexadecimal notation.
    ///
    /// Unlike [`Color::to_format_string`] with [`Format::Hex`], this method
    /// ignores alpha.
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Format this color with the given format code.
    ///
    /// The codes `hex`, `rgb`, `hsl`, `hsv`, and `name` work just like the
    /// corresponding [`Format`] does with [`Color::to_format_string`]. In
    /// addition, the codes `rgba`, `hsla`, and `hsva` force the corresponding
    /// notation with alpha. An empty code selects this color's own format. All
    /// other codes produce `rgba()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::color;
    /// let orange = color("#ff8000");
    /// assert_eq!(orange.to_string_with("hsv"), "hsv(30,100%,100%)");
    /// assert_eq!(orange.to_string_with("hsla"), "hsla(30,100%,50%,1)");
    /// assert_eq!(orange.to_string_with("cmyk"), "rgba(255,128,0,1)");
    /// assert_eq!(orange.to_string_with(""), "#ff8000");
    /// ```
    pub fn to_string_with(&self, code: &str) -> String {
        if code.trim().is_empty() {
            return self.to_format_string(None);
        }

        self.display(Notation::from_code(code, self.alpha))
            .to_string()
    }

    /// Format this color with the given format. <i class=python-only>Python
    /// only!</i>
    ///
    /// See [`Color::to_format_string`].
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "to_format_string", signature = (format=None))]
    pub fn py_to_format_string(&self, format: Option<Format>) -> String {
        self.to_format_string(format)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its string representation in its own format. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Use separate block, so that methods are not exposed to Python.
impl Color {
    /// Create a new color.
    ///
    /// If the input already is a color, this method returns that color,
    /// ignoring the options. Otherwise, it parses the text or normalizes the
    /// components. If the input is text that none of the grammar's rules
    /// recognize, this method falls back onto opaque black.
    ///
    /// The new color's format is the format given by the options, or else the
    /// format implied by the input, i.e., `name` for color names and
    /// `transparent`, `hex` for hexadecimal notation, the function's color
    /// space for `rgb()`, `hsl()`, `hsv()` and their alpha versions, and the
    /// format or color space for components. If there is none, the format is
    /// `hex`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::{Color, Components, Format, Options};
    /// let pink = Color::new("rgb(255, 192, 203)", Options::with_format(Format::Name));
    /// assert_eq!(pink.to_string(), "pink");
    ///
    /// let gray = Color::new(Components::hsv(0, 0, 50), Options::default());
    /// assert_eq!(gray.to_string(), "hsv(0,0%,50%)");
    ///
    /// let black = Color::new("cornflower", Options::default());
    /// assert_eq!(black.to_string(), "#000000");
    /// ```
    pub fn new<'a, I: Into<ColorInput<'a>>>(input: I, options: Options) -> Self {
        match input.into() {
            ColorInput::Color(color) => color,
            ColorInput::Text(text) => parse(&text).map_or_else(
                |error| {
                    log::debug!("falling back onto black for color {:?}: {}", text, error);
                    Self::from_parts([0.0; 3], 1.0, options.format.unwrap_or_default())
                },
                |components| Self::from_components(components, options.format),
            ),
            ColorInput::Components(components) => {
                Self::from_components(components, options.format)
            }
        }
    }

    /// Rebuild a color from the HSL record, keeping this color's format.
    fn with_hsl(&self, hsl: Hsla) -> Self {
        Self::new(Components::from(hsl), Options::with_format(self.format))
    }

    /// Create a new color from the components and an overriding format.
    fn from_components(components: Components, format: Option<Format>) -> Self {
        let (rgb, alpha) = components.to_rgb_alpha();
        let format = format
            .or(components.format)
            .unwrap_or_else(|| components.space.format());
        Self::from_parts(rgb, alpha, format)
    }

    /// Create a new color from its parts, clamping coordinates and alpha.
    fn from_parts(rgb: [Float; 3], alpha: Float, format: Format) -> Self {
        Self {
            rgb: clamp(&rgb),
            alpha: to_unit(Component::Number(alpha), None),
            format,
        }
    }

    /// Mix this color with the other color.
    ///
    /// The weight determines the other color's share and is clamped to
    /// `0..=1`. With weight 0, the result is this color, with weight 1, the
    /// result is the other color, and with [`Color::DEFAULT_MIX_WEIGHT`], the
    /// result is halfway between the two. When the two colors have different
    /// alpha, the more opaque color contributes more to the result's
    /// coordinates. The result keeps this color's format.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::{color, Color};
    /// let black = color("#000000");
    /// assert_eq!(black.mix("#ffffff", Color::DEFAULT_MIX_WEIGHT).to_string(), "#808080");
    /// assert_eq!(color("red").mix("blue", 0.25).to_string(), "#bf0040");
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn mix<'a, I: Into<ColorInput<'a>>>(&self, other: I, weight: Float) -> Self {
        let other = color(other);

        let weight = 1.0 - to_unit(Component::Number(weight), None);
        let t = weight.mul_add(2.0, -1.0);
        let d = self.alpha - other.alpha;
        let w1 = if t * d == -1.0 {
            t
        } else {
            (t + d) / t.mul_add(d, 1.0)
        };
        let w1 = (w1 + 1.0) / 2.0;
        let w2 = 1.0 - w1;

        let [r1, g1, b1] = self.rgb;
        let [r2, g2, b2] = other.rgb;
        Self::from_parts(
            [
                r1.mul_add(w1, r2 * w2),
                g1.mul_add(w1, g2 * w2),
                b1.mul_add(w1, b2 * w2),
            ],
            self.alpha.mul_add(weight, other.alpha * (1.0 - weight)),
            self.format,
        )
    }

    /// Format this color.
    ///
    /// Without a format, this method uses the color's own format. Since
    /// neither hexadecimal notation nor names can express alpha, this method
    /// uses the `rgba()` function for colors that are not fully opaque, except
    /// that fully transparent colors in `name` format are `transparent`. For
    /// `rgb`, `hsl`, and `hsv`, it uses the function with alpha argument.
    /// Names fall back onto hexadecimal notation for colors without a name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::{color, Format};
    /// let red = color("#ff0000");
    /// assert_eq!(red.to_format_string(None), "#ff0000");
    /// assert_eq!(red.to_format_string(Some(Format::Name)), "red");
    /// assert_eq!(red.to_format_string(Some(Format::Hsl)), "hsl(0,100%,50%)");
    ///
    /// let faded = red.with_alpha(0.25);
    /// assert_eq!(faded.to_format_string(Some(Format::Hsv)), "hsva(0,100%,100%,0.25)");
    /// assert_eq!(faded.to_format_string(Some(Format::Name)), "rgba(255,0,0,0.25)");
    /// assert_eq!(color("transparent").to_format_string(None), "transparent");
    /// ```
    pub fn to_format_string(&self, format: Option<Format>) -> String {
        let notation = Notation::select(format.unwrap_or(self.format), self.alpha);
        self.display(notation).to_string()
    }

    /// Display this color in the given notation.
    fn display(&self, notation: Notation) -> Formatted<'_> {
        Formatted {
            color: self,
            notation,
        }
    }
}

/// A color bound to a notation, ready for display.
struct Formatted<'a> {
    color: &'a Color,
    notation: Notation,
}

impl core::fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format(&self.color.rgb, self.color.alpha, self.notation, f)
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl Default for Color {
    /// Create an instance of the default color, which is opaque black in `hex`
    /// format.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::{Color, Format};
    /// let black = Color::default();
    /// assert_eq!(black.format(), Format::Hex);
    /// assert_eq!(black.to_string(), "#000000");
    /// ```
    fn default() -> Self {
        Self::from_parts([0.0; 3], 1.0, Format::Hex)
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its textual notation.
    ///
    /// This method recognizes the same notations as [`Color::new`] but
    /// reports an error instead of falling back onto black.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|components| Self::from_components(components, None))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        let [r, g, b] = value;
        Color::from_24bit(r, g, b)
    }
}

impl From<Components> for Color {
    fn from(value: Components) -> Self {
        Color::from_components(value, None)
    }
}

impl core::hash::Hash for Color {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.format.hash(state);
        to_eq_channels(&self.rgb, self.alpha).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Both colors must have the same format. Their coordinates and alpha are
    /// compared after normalization, which allows for floating point error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tcolor::{color, Format};
    /// assert_eq!(color("rgb(255, 0, 0)"), color("rgb(100%, 0%, 0%)"));
    /// assert_ne!(color("rgb(255, 0, 0)"), color("red"));
    /// assert_eq!(color("rgb(255, 0, 0)").with_format(Format::Name), color("red"));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        self.format == other.format
            && to_eq_channels(&self.rgb, self.alpha) == to_eq_channels(&other.rgb, other.alpha)
    }
}

impl Eq for Color {}

impl core::fmt::Debug for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = self.rgb;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}, {}])",
            self.format, r, g, b, self.alpha
        ))
    }
}

impl core::fmt::Display for Color {
    /// Format this color in its own format.
    ///
    /// This is the same as [`Color::to_format_string`] without format.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.display(Notation::select(self.format, self.alpha)), f)
    }
}

#[cfg(test)]
mod test {
    use super::{color, Color, ColorInput, Components, Hsla, Options, Rgba};
    use crate::error::ColorFormatError;
    use crate::{assert_close_enough, assert_same_color, Component, Float, Format};

    #[test]
    fn test_formats_preserved() -> Result<(), ColorFormatError> {
        for (input, format) in [
            ("#ff0000", Format::Hex),
            ("f00", Format::Hex),
            ("rgb(255,0,0)", Format::Rgb),
            ("rgba(255,0,0,1)", Format::Rgb),
            ("hsl(0,100%,50%)", Format::Hsl),
            ("hsv(0,100%,100%)", Format::Hsv),
            ("red", Format::Name),
        ] {
            let red = Color::parse(input)?;
            assert_eq!(red.format(), format);
            assert_eq!(red.to_24bit(), [255, 0, 0]);
        }

        assert_eq!(color("#ff0000").to_string(), "#ff0000");
        assert_eq!(color("rgb(255,0,0)").to_string(), "rgb(255,0,0)");
        assert_eq!(color("RED").to_string(), "red");
        assert_eq!(color("#0f0").to_string(), "#00ff00");
        Ok(())
    }

    #[test]
    fn test_format_resolution() {
        let options = Options::with_format(Format::Hsl);
        assert_eq!(Color::new("red", options).format(), Format::Hsl);
        assert_eq!(
            Color::new(Components::rgb(0, 0, 255), Options::default()).format(),
            Format::Rgb
        );
        assert_eq!(
            Color::new(
                Components::rgb(0, 0, 255).with_format(Format::Name),
                Options::default()
            )
            .to_string(),
            "blue"
        );
        assert_eq!(
            Color::new(Components::rgb(0, 0, 255).with_format(Format::Name), options).format(),
            Format::Hsl
        );
        assert_eq!(Color::new("nonsense", options).format(), Format::Hsl);
    }

    #[test]
    fn test_identity() {
        let original = color("hsla(120, 50%, 50%, 0.5)");
        let same = Color::new(original, Options::with_format(Format::Hex));
        assert_eq!(same, original);
        assert_eq!(same.format(), Format::Hsl);
        assert_eq!(Color::new(&original, Options::default()), original);
        assert_eq!(ColorInput::from(original), ColorInput::Color(original));
    }

    #[test]
    fn test_fallback() {
        for input in ["", "   ", "#12", "#efg", "rgb(1, 2)", "cmyk(0 0 0 0)", "rebeccapurple"] {
            let black = color(input);
            assert_eq!(black, Color::default(), "{:?}", input);
            assert_eq!(black.alpha(), 1.0);
        }

        assert_eq!(color(String::from("navy")).to_hex_format(), "#000080");
        assert_eq!(Color::try_from("cornflower"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            Color::try_from(String::from("rgb(1 2)")),
            Err(ColorFormatError::MalformedFunction)
        );
        assert_eq!("#ab".parse::<Color>(), Err(ColorFormatError::MalformedHex));
    }

    #[test]
    fn test_alpha() {
        let red = color("#ff0000").with_alpha(0.5);
        assert_eq!(red.format(), Format::Hex);
        assert_eq!(red.to_string(), "rgba(255,0,0,0.5)");
        assert_eq!(red.to_hex_format(), "#ff0000");

        let clear = color("red").with_alpha(0.0);
        assert_eq!(clear.to_string(), "transparent");
        assert_eq!(clear.to_format_string(Some(Format::Hex)), "rgba(255,0,0,0)");
        assert_eq!(clear.to_format_string(Some(Format::Hsl)), "hsla(0,100%,50%,0)");

        assert_eq!(color("red").with_alpha(-3.0).alpha(), 0.0);
        assert_eq!(color("red").with_alpha(Float::NAN).alpha(), 0.0);

        let transparent = color("transparent");
        assert_eq!(transparent.alpha(), 0.0);
        assert_eq!(transparent.format(), Format::Name);
        assert_eq!(transparent.to_24bit(), [0, 0, 0]);
        assert_eq!(transparent.to_string(), "transparent");

        let translucent = color("rgba(10, 20, 30, 50%)");
        assert_eq!(translucent.alpha(), 0.5);
        assert_eq!(translucent.to_string(), "rgba(10,20,30,0.5)");
    }

    #[test]
    fn test_accessors() {
        let coral = color("#ff7f50");
        assert_eq!(
            coral.rgb(true),
            Rgba {
                r: 255.0,
                g: 127.0,
                b: 80.0,
                a: 1.0
            }
        );
        assert_eq!(
            coral.hsl(true),
            Hsla {
                h: 16.0,
                s: 100.0,
                l: 66.0,
                a: 1.0
            }
        );

        let hsl = coral.hsl(false);
        assert_close_enough!(hsl.h, 16.114285714285714);
        assert_close_enough!(hsl.l, 65.68627450980392);
        assert_close_enough!(coral.rgb(false).g, 127.0);
    }

    #[test]
    fn test_lighten_darken() {
        let coral = color("#ff7f50");
        assert_eq!(coral.darken(20.0).to_string(), "#e93f00");
        assert_eq!(coral.darken(20.0).hsl(true).l, 46.0);
        assert_eq!(coral.lighten(100.0).to_string(), "#ffffff");
        assert_eq!(coral.darken(100.0).to_string(), "#000000");

        let hsl = color("hsl(210, 50%, 40%)").lighten(15.0);
        assert_eq!(hsl.format(), Format::Hsl);
        assert_eq!(hsl.to_string(), "hsl(210,50%,55%)");
    }

    #[test]
    fn test_saturate() {
        let blue = color("#336699");
        assert_eq!(blue.saturate(20.0).to_string(), "#1f66ad");
        assert_eq!(blue.saturate(80.0).to_string(), "#0066cc");
        assert_eq!(blue.saturate(80.0).hsl(true).s, 100.0);
        assert_eq!(blue.desaturate(100.0).to_string(), "#666666");
        assert_eq!(blue.desaturate(200.0).hsl(true).s, 0.0);
    }

    #[test]
    fn test_rotate() {
        let red = color("red");
        assert_eq!(red.rotate(-20.0, false).hsl(true).h, 340.0);
        assert_eq!(red.rotate(-380.0, false).hsl(true).h, 340.0);
        assert_eq!(red.rotate(-20.0, false).to_hex_format(), "#ff0055");
        assert_eq!(red.rotate(720.0, false), red);
        assert_eq!(color("#336699").rotate(-20.0, false).to_string(), "#338899");

        assert_eq!(red.rotate(120.0, true).to_string(), "yellow");
        assert_eq!(red.complement(false).to_string(), "cyan");
        assert_eq!(red.complement(true).hsl(true).h, 138.0);
        assert_eq!(color("blue").complement(true).to_hex_format(), "#ffd500");

        // Achromatic colors have no hue to rotate.
        let gray = color("#808080");
        assert_eq!(gray.rotate(90.0, true), gray);
    }

    #[test]
    fn test_mix() {
        let black = color("#000000");
        let white = color("#ffffff");
        assert_eq!(black.mix(white, Color::DEFAULT_MIX_WEIGHT).to_string(), "#808080");
        assert_same_color!(black.mix(white, 0.0), black);
        assert_eq!(black.mix(white, 1.0).to_string(), "#ffffff");
        assert_eq!(black.mix(white, 5.0).to_string(), "#ffffff");

        let red = color("red");
        assert_eq!(red.mix("blue", 0.5).to_string(), "purple");
        assert_eq!(red.mix("blue", 0.25).to_hex_format(), "#bf0040");

        let faded = color("rgba(255, 0, 0, 0.5)");
        let mixed = faded.mix("blue", 0.5);
        assert_eq!(mixed.format(), Format::Rgb);
        assert_eq!(mixed.to_24bit(), [64, 0, 191]);
        assert_close_enough!(mixed.alpha(), 0.75);
        assert_eq!(mixed.to_string(), "rgba(64,0,191,0.75)");
    }

    #[test]
    fn test_mix_opposite_alphas() {
        // Weight and alpha difference cancel out the denominator.
        let red = color("red");
        let clear = color("transparent");

        for mixed in [red.mix(clear, 1.0), clear.mix(red, 0.0)] {
            let Rgba { r, g, b, a } = mixed.rgb(false);
            for value in [r, g, b, a] {
                assert!(!value.is_nan());
            }
            assert_eq!(mixed.to_24bit(), [0, 0, 0]);
            assert_eq!(a, 0.0);
            assert_eq!(mixed.format(), Format::Name);
            assert_eq!(mixed.to_string(), "transparent");
        }

        let half = red.mix(clear, 0.5);
        assert_eq!(half.to_24bit(), [255, 0, 0]);
        assert_close_enough!(half.alpha(), 0.5);
    }

    #[test]
    fn test_to_string_with() {
        let teal = color("teal");
        assert_eq!(teal.to_string_with("name"), "teal");
        assert_eq!(teal.to_string_with("HEX"), "#008080");
        assert_eq!(teal.to_string_with("rgb"), "rgb(0,128,128)");
        assert_eq!(teal.to_string_with("rgba"), "rgba(0,128,128,1)");
        assert_eq!(teal.to_string_with("hsl"), "hsl(180,100%,25%)");
        assert_eq!(teal.to_string_with("hsva"), "hsva(180,100%,50%,1)");
        assert_eq!(teal.to_string_with("lab"), "rgba(0,128,128,1)");
        assert_eq!(teal.to_string_with(""), "teal");
        assert_eq!(teal.to_string_with("  "), "teal");
        assert_eq!(teal.with_alpha(0.5).to_string_with(""), "rgba(0,128,128,0.5)");
    }

    #[test]
    fn test_components() {
        let rgba = Rgba {
            r: 300.0,
            g: -5.0,
            b: 127.5,
            a: 2.0,
        };
        let c = Color::from(Components::from(rgba));
        assert_eq!(c.to_24bit(), [255, 0, 128]);
        assert_eq!(c.alpha(), 1.0);

        let hsl = Color::from(Components::hsl(
            Component::Number(480.0),
            Component::percent(100.0),
            Component::percent(50.0),
        ));
        assert_eq!(hsl.to_string(), "hsl(0,100%,50%)");

        let hsv = Color::from(Components::hsv(240, 100, 100).with_alpha(Component::percent(50.0)));
        assert_eq!(hsv.to_string(), "hsva(240,100%,100%,0.5)");

        // Percentages drop their fractional part.
        let truncated = Color::from(Components::rgb(
            Component::percent(50.9),
            Component::percent(0.0),
            Component::percent(0.0),
        ));
        assert_eq!(truncated.rgb(true).r, 128.0);
    }

    #[test]
    fn test_equality_and_hash() {
        use std::collections::HashSet;

        let colors: HashSet<Color> = [
            color("rgb(255,0,0)"),
            color("rgb(100%,0%,0%)"),
            Color::from([255, 0, 0]),
            color("#f00"),
            color("red"),
        ]
        .into_iter()
        .collect();

        assert_eq!(colors.len(), 3);
        assert_eq!(
            format!("{:?}", Color::default()),
            "Color(Hex, [0, 0, 0, 1])"
        );
    }
}
