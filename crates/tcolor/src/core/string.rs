use core::fmt::Write;

use super::{convert, from_unit, number_length, ColorSpace, Component, Format};
use crate::error::ColorFormatError;
use crate::{names, Components, Float};

/// Match a color in hashed hexadecimal format. The hash is optional. If
/// successful, this function returns the three coordinates as unsigned bytes.
/// It transparently handles single-digit coordinates.
fn match_hex(s: &str) -> Option<[u8; 3]> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let factor = match digits.len() {
        3 => 1,
        6 => 2,
        _ => return None,
    };

    let parse_coordinate = |index: usize| -> Option<u8> {
        let t = digits.get(factor * index..factor * (index + 1))?;
        let n = u8::from_str_radix(t, 16).ok()?;
        Some(if factor == 1 { 16 * n + n } else { n })
    };

    Some([parse_coordinate(0)?, parse_coordinate(1)?, parse_coordinate(2)?])
}

// --------------------------------------------------------------------------------------------------------------------

/// The color functions in the order they are tried, with their color spaces
/// and whether they take an alpha argument.
const FUNCTIONS: [(&str, ColorSpace, bool); 6] = [
    ("rgb", ColorSpace::Rgb, false),
    ("rgba", ColorSpace::Rgb, true),
    ("hsl", ColorSpace::Hsl, false),
    ("hsla", ColorSpace::Hsl, true),
    ("hsv", ColorSpace::Hsv, false),
    ("hsva", ColorSpace::Hsv, true),
];

/// Skip one or more leading characters matching the predicate. If there are
/// none, this function returns `None`.
fn skip_one_or_more<P: Fn(char) -> bool>(s: &str, predicate: P) -> Option<&str> {
    let rest = s.trim_start_matches(predicate);
    if rest.len() < s.len() {
        Some(rest)
    } else {
        None
    }
}

/// Match a color function's arguments.
///
/// The arguments start with white space or an opening parenthesis and are
/// separated by commas or white space. Vertical bars count as both. A closing
/// parenthesis is optional and anything after the last argument is ignored.
fn match_arguments(s: &str, with_alpha: bool) -> Option<([Component; 3], Option<Component>)> {
    let count = if with_alpha { 4 } else { 3 };
    let mut arguments = [Component::Number(0.0); 4];
    let mut rest = s;

    for (index, argument) in arguments.iter_mut().take(count).enumerate() {
        rest = if index == 0 {
            skip_one_or_more(rest, |c| c.is_whitespace() || c == '(' || c == '|')?
        } else {
            skip_one_or_more(rest, |c| c.is_whitespace() || c == ',' || c == '|')?
        };

        let length = number_length(rest)?;
        *argument = rest.get(..length)?.parse().ok()?;
        rest = rest.get(length..)?;
    }

    let [c1, c2, c3, alpha] = arguments;
    Some(([c1, c2, c3], with_alpha.then_some(alpha)))
}

/// Match the color function with the given name.
///
/// Just like an unanchored regular expression, this function looks for the
/// name anywhere in the string and tries every occurrence in turn.
fn match_function(
    s: &str,
    name: &str,
    with_alpha: bool,
) -> Option<([Component; 3], Option<Component>)> {
    s.match_indices(name).find_map(|(index, _)| {
        s.get(index + name.len()..)
            .and_then(|rest| match_arguments(rest, with_alpha))
    })
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into color components.
///
/// This function trims leading and trailing white space and converts ASCII
/// letters to lowercase before trying, in order, color names including
/// `transparent`, the `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`, and
/// `hsva()` functions, and six or three digit hexadecimal notation. The first
/// match wins. The resulting components are not yet normalized.
pub(crate) fn parse(s: &str) -> Result<Components, ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let mut s = lowercase.as_str();

    let mut format = Format::Hex;
    if let Some(hex) = names::lookup(s) {
        log::trace!("color name {:?} is {}", s, hex);
        s = hex;
        format = Format::Name;
    } else if s == "transparent" {
        log::trace!("color {:?} is transparent", s);
        return Ok(Components::rgb(0, 0, 0)
            .with_alpha(0)
            .with_format(Format::Name));
    }

    for (name, space, with_alpha) in FUNCTIONS {
        if let Some((coordinates, alpha)) = match_function(s, name, with_alpha) {
            log::trace!("color {:?} matches {}() function", s, name);
            let components = Components::new(space, coordinates).with_format(space.format());
            return Ok(alpha.map_or(components, |alpha| components.with_alpha(alpha)));
        }
    }

    if let Some([r, g, b]) = match_hex(s) {
        log::trace!("color {:?} is in hexadecimal notation", s);
        return Ok(Components::rgb(r, g, b).with_format(format));
    }

    Err(if s.starts_with('#') {
        ColorFormatError::MalformedHex
    } else if FUNCTIONS.iter().any(|&(name, _, _)| s.starts_with(name)) {
        ColorFormatError::MalformedFunction
    } else {
        ColorFormatError::UnknownFormat
    })
}

// ====================================================================================================================

/// The concrete notation for formatting a color.
///
/// Unlike [`Format`], a notation distinguishes between functions with and
/// without alpha argument. It also covers the `transparent` keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Notation {
    Transparent,
    Name,
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hsv,
    Hsva,
}

impl Notation {
    /// Select the notation for a color with the given format and alpha.
    ///
    /// Since neither hexadecimal notation nor names can express alpha, colors
    /// that are not fully opaque use functions with alpha argument instead.
    /// Fully transparent colors in name format are `transparent`.
    pub fn select(format: Format, alpha: Float) -> Self {
        if alpha == 1.0 {
            return match format {
                Format::Hex => Self::Hex,
                Format::Name => Self::Name,
                Format::Rgb => Self::Rgb,
                Format::Hsl => Self::Hsl,
                Format::Hsv => Self::Hsv,
            };
        }

        match format {
            Format::Name if alpha == 0.0 => Self::Transparent,
            Format::Hex | Format::Name | Format::Rgb => Self::Rgba,
            Format::Hsl => Self::Hsla,
            Format::Hsv => Self::Hsva,
        }
    }

    /// Determine the notation for the given code.
    ///
    /// Format codes select the notation as [`Notation::select`] does. The
    /// codes `rgba`, `hsla`, and `hsva` select the eponymous notation, even
    /// for fully opaque colors. All other codes select `rgba`.
    pub fn from_code(code: &str, alpha: Float) -> Self {
        match code.parse::<Format>() {
            Ok(format) => Self::select(format, alpha),
            Err(_) => match code.trim().to_ascii_lowercase().as_str() {
                "hsla" => Self::Hsla,
                "hsva" => Self::Hsva,
                _ => Self::Rgba,
            },
        }
    }
}

/// Format the color in the given notation.
///
/// The coordinates are RGB coordinates in unit range. All coordinates are
/// rounded to integers, with red, green, and blue ranging `0..=255`, hue
/// ranging `0..=360`, and saturation, lightness, and value ranging `0..=100`.
/// Alpha is written as is.
pub(crate) fn format<W: Write>(
    rgb: &[Float; 3],
    alpha: Float,
    notation: Notation,
    out: &mut W,
) -> core::fmt::Result {
    let [r, g, b] = [
        from_unit(rgb[0], 255.0, true) as u8,
        from_unit(rgb[1], 255.0, true) as u8,
        from_unit(rgb[2], 255.0, true) as u8,
    ];

    let polar = |space: ColorSpace| -> [u16; 3] {
        let [h, s, x] = convert(ColorSpace::Rgb, space, rgb);
        [
            from_unit(h, 360.0, true) as u16,
            from_unit(s, 100.0, true) as u16,
            from_unit(x, 100.0, true) as u16,
        ]
    };

    match notation {
        Notation::Transparent => out.write_str("transparent"),
        Notation::Name => {
            let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
            out.write_str(names::name_of(&hex).unwrap_or(hex.as_str()))
        }
        Notation::Hex => write!(out, "#{:02x}{:02x}{:02x}", r, g, b),
        Notation::Rgb => write!(out, "rgb({},{},{})", r, g, b),
        Notation::Rgba => write!(out, "rgba({},{},{},{})", r, g, b, alpha),
        Notation::Hsl => {
            let [h, s, l] = polar(ColorSpace::Hsl);
            write!(out, "hsl({},{}%,{}%)", h, s, l)
        }
        Notation::Hsla => {
            let [h, s, l] = polar(ColorSpace::Hsl);
            write!(out, "hsla({},{}%,{}%,{})", h, s, l, alpha)
        }
        Notation::Hsv => {
            let [h, s, v] = polar(ColorSpace::Hsv);
            write!(out, "hsv({},{}%,{}%)", h, s, v)
        }
        Notation::Hsva => {
            let [h, s, v] = polar(ColorSpace::Hsv);
            write!(out, "hsva({},{}%,{}%,{})", h, s, v, alpha)
        }
    }
}
