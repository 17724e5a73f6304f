use super::wrap_hue;
use crate::Float;

/// The correspondence between hues on the red-yellow-blue artist's wheel and
/// hues on the red-green-blue wheel, in degrees.
///
/// The first column holds the RYB hue, the second column the RGB hue. Both
/// columns increase monotonically from 0 to 360. The RYB wheel spreads the
/// RGB wheel's first 60 degrees, i.e., red to yellow, across 120 degrees.
#[rustfmt::skip]
const RYB_RGB_HUES: [[Float; 2]; 25] = [
    [  0.0,   0.0], [ 15.0,   8.0], [ 30.0,  17.0], [ 45.0,  26.0], [ 60.0,  34.0],
    [ 75.0,  41.0], [ 90.0,  48.0], [105.0,  54.0], [120.0,  60.0], [135.0,  81.0],
    [150.0, 103.0], [165.0, 123.0], [180.0, 138.0], [195.0, 155.0], [210.0, 171.0],
    [225.0, 187.0], [240.0, 204.0], [255.0, 219.0], [270.0, 234.0], [285.0, 251.0],
    [300.0, 267.0], [315.0, 282.0], [330.0, 298.0], [345.0, 329.0], [360.0, 360.0],
];

const RYB: usize = 0;
const RGB: usize = 1;

/// Look up the hue in the `from` column and map it onto the `to` column.
///
/// Hues outside `0..=360` are wrapped first. Exact hits return the table entry,
/// everything else interpolates linearly between the bracketing rows.
fn remap(hue: Float, from: usize, to: usize) -> Float {
    let hue = if (0.0..=360.0).contains(&hue) {
        hue
    } else {
        wrap_hue(hue)
    };

    let mut previous = [0.0, 0.0];
    for row in RYB_RGB_HUES.iter() {
        if row[from] == hue {
            return row[to];
        } else if hue < row[from] {
            let fraction = (hue - previous[from]) / (row[from] - previous[from]);
            return fraction.mul_add(row[to] - previous[to], previous[to]);
        }
        previous = *row;
    }

    // The last row covers 360.
    0.0
}

/// Convert the RGB hue to the RYB hue. Both are in degrees.
pub(crate) fn rgb_to_ryb_hue(hue: Float) -> Float {
    remap(hue, RGB, RYB)
}

/// Convert the RYB hue to the RGB hue. Both are in degrees.
pub(crate) fn ryb_to_rgb_hue(hue: Float) -> Float {
    remap(hue, RYB, RGB)
}

#[cfg(test)]
mod test {
    use super::{rgb_to_ryb_hue, ryb_to_rgb_hue, RYB_RGB_HUES};
    use crate::{assert_close_enough, Float};

    #[test]
    fn test_exact_hits() {
        for [ryb, rgb] in RYB_RGB_HUES {
            assert_eq!(ryb_to_rgb_hue(ryb), rgb);
            assert_eq!(rgb_to_ryb_hue(rgb), ryb);
        }

        // Red is red, yellow is far away on the RYB wheel.
        assert_eq!(rgb_to_ryb_hue(0.0), 0.0);
        assert_eq!(rgb_to_ryb_hue(60.0), 120.0);
        assert_eq!(ryb_to_rgb_hue(120.0), 60.0);
    }

    #[test]
    fn test_interpolation() {
        assert_close_enough!(rgb_to_ryb_hue(30.0), 52.5);
        assert_close_enough!(ryb_to_rgb_hue(52.5), 30.0);
        assert_close_enough!(ryb_to_rgb_hue(350.0), 329.0 + 31.0 / 3.0);
        assert_close_enough!(ryb_to_rgb_hue(7.5), 4.0);
    }

    #[test]
    fn test_wrapping() {
        assert_close_enough!(ryb_to_rgb_hue(480.0), 60.0);
        assert_close_enough!(ryb_to_rgb_hue(-240.0), 60.0);
        assert_close_enough!(rgb_to_ryb_hue(-330.0), 52.5);
        assert_eq!(ryb_to_rgb_hue(Float::NAN), 0.0);
    }
}
