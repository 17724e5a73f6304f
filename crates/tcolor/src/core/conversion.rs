use super::ColorSpace;
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [
        Float::from(r) / 255.0,
        Float::from(g) / 255.0,
        Float::from(b) / 255.0,
    ]
}

/// Convert the RGB coordinates to 24-bit representation.
///
/// This function assumes that the coordinates range `0..=1`. Even if that is
/// not the case, the conversion automatically clamps coordinates to the range
/// `0x00..=0xff`.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = clamp(coordinates);
    [
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ]
}

/// Clamp the coordinates to unit range, replacing not-a-numbers with zero.
#[inline]
pub(crate) fn clamp(coordinates: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn clamp1(value: Float) -> Float {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }

    [
        clamp1(coordinates[0]),
        clamp1(coordinates[1]),
        clamp1(coordinates[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the hue of the RGB coordinates, given their maximum and chroma.
///
/// The hue is in unit range. Whichever channel holds the maximum determines
/// the sector, with red taking precedence over green and green over blue.
#[inline]
fn hue_of(r: Float, g: Float, b: Float, max: Float, chroma: Float) -> Float {
    let hue = if max == r {
        (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    hue / 6.0
}

/// Convert coordinates for RGB to HSV. Achromatic colors have zero hue.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let saturation = if max == 0.0 { 0.0 } else { chroma / max };
    let hue = if chroma == 0.0 {
        0.0
    } else {
        hue_of(r, g, b, max, chroma)
    };

    [hue, saturation, max]
}

/// Convert coordinates for HSV to RGB.
///
/// A hue of one lands in the same sector as a hue of zero.
pub(crate) fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let h = h * 6.0;
    let i = h.floor();
    let f = h - i;

    let p = v * (1.0 - s);
    let q = v * f.mul_add(-s, 1.0);
    let t = v * (1.0 - f).mul_add(-s, 1.0);

    let rgb = match (i as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    clamp(&rgb)
}

/// Convert coordinates for RGB to HSL. Achromatic colors have zero hue and
/// saturation.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    let chroma = max - min;
    if chroma == 0.0 {
        return [0.0, 0.0, lightness];
    }

    let saturation = if 0.5 < lightness {
        chroma / (2.0 - max - min)
    } else {
        chroma / (max + min)
    };

    [hue_of(r, g, b, max, chroma), saturation, lightness]
}

/// Convert coordinates for HSL to RGB.
///
/// The hue is wrapped into unit range and then scaled to sixths, so that the
/// red, green, and blue offsets of one third become exact integers.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn fold(p: Float, q: Float, t: Float) -> Float {
        let mut t = t;
        if t < 0.0 {
            t += 6.0;
        }
        if 6.0 < t {
            t -= 6.0;
        }

        if t < 1.0 {
            (q - p).mul_add(t, p)
        } else if t < 3.0 {
            q
        } else if t < 4.0 {
            (q - p).mul_add(4.0 - t, p)
        } else {
            p
        }
    }

    let [h, s, l] = *value;
    if s == 0.0 {
        return clamp(&[l, l, l]);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l.mul_add(-s, l + s)
    };
    let p = l.mul_add(2.0, -q);
    let h = 6.0 * h.rem_euclid(1.0);

    clamp(&[fold(p, q, h + 2.0), fold(p, q, h), fold(p, q, h - 2.0)])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// This function converts HSL to HSV and vice versa by way of RGB. If both
/// color spaces are the same, it returns the coordinates unchanged.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    match (from_space, to_space) {
        (Rgb, Rgb) | (Hsl, Hsl) | (Hsv, Hsv) => *coordinates,
        (Rgb, Hsl) => rgb_to_hsl(coordinates),
        (Rgb, Hsv) => rgb_to_hsv(coordinates),
        (Hsl, Rgb) => hsl_to_rgb(coordinates),
        (Hsv, Rgb) => hsv_to_rgb(coordinates),
        (Hsl, Hsv) => rgb_to_hsv(&hsl_to_rgb(coordinates)),
        (Hsv, Hsl) => rgb_to_hsl(&hsv_to_rgb(coordinates)),
    }
}
