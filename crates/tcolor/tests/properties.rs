use rand::Rng;

use tcolor::error::ColorFormatError;
use tcolor::{color, Color, Components, Format, Options, Rgba};

/// Determine whether the two 24-bit colors are within one unit per channel.
fn within_one_unit(c1: [u8; 3], c2: [u8; 3]) -> bool {
    c1.iter().zip(c2.iter()).all(|(a, b)| a.abs_diff(*b) <= 1)
}

fn check_round_trips(r: u8, g: u8, b: u8) {
    for alpha in [0.0, 0.5, 1.0] {
        let original = Color::new(
            Components::rgb(r, g, b).with_alpha(alpha),
            Options::default(),
        );
        assert_eq!(original.to_24bit(), [r, g, b]);

        let hsv = original.hsv(false);
        let via_hsv = Color::new(
            Components::hsv(hsv.h, hsv.s, hsv.v).with_alpha(hsv.a),
            Options::default(),
        );
        assert!(
            within_one_unit(via_hsv.to_24bit(), [r, g, b]),
            "rgb({}, {}, {}) via {:?} became {:?}",
            r,
            g,
            b,
            hsv,
            via_hsv
        );
        assert_eq!(via_hsv.alpha(), alpha);

        let hsl = original.hsl(false);
        let via_hsl = Color::new(
            Components::hsl(hsl.h, hsl.s, hsl.l).with_alpha(hsl.a),
            Options::default(),
        );
        assert!(
            within_one_unit(via_hsl.to_24bit(), [r, g, b]),
            "rgb({}, {}, {}) via {:?} became {:?}",
            r,
            g,
            b,
            hsl,
            via_hsl
        );
        assert_eq!(via_hsl.alpha(), alpha);
    }
}

#[test]
fn test_round_trips_on_grid() {
    for r in (0..=255).step_by(15) {
        for g in (0..=255).step_by(17) {
            for b in (0..=255).step_by(51) {
                check_round_trips(r, g, b);
            }
        }
    }
}

#[test]
fn test_round_trips_at_random() {
    let mut rng = rand::rng();
    for _ in 0..2_000 {
        check_round_trips(rng.random(), rng.random(), rng.random());
    }
}

#[test]
fn test_hex_strings_at_random() -> Result<(), ColorFormatError> {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let rgb: [u8; 3] = [rng.random(), rng.random(), rng.random()];
        let hex = Color::from(rgb).to_string();
        let color = Color::parse(&hex)?;
        assert_eq!(color.to_24bit(), rgb);
        assert_eq!(color.to_string(), hex);
    }
    Ok(())
}

#[test]
fn test_format_preservation() {
    assert_eq!(color("#ff0000").to_string(), "#ff0000");
    assert_eq!(color("rgb(255,0,0)").to_string(), "rgb(255,0,0)");
    assert_eq!(color("hsl(0, 100%, 50%)").to_string(), "hsl(0,100%,50%)");
    assert_eq!(color("hsv(0 100% 100%)").to_string(), "hsv(0,100%,100%)");
}

#[test]
fn test_alpha_promotion() {
    let faded = Color::new(
        Components::rgb(255, 0, 0).with_alpha(0.5),
        Options::with_format(Format::Hex),
    );
    assert_eq!(faded.format(), Format::Hex);
    assert!(faded.to_string().starts_with("rgba("));
    assert_eq!(faded.to_string(), "rgba(255,0,0,0.5)");
}

#[test]
fn test_named_lookup() {
    assert_eq!(color("red").to_string(), "red");
    assert_eq!(color("#ff0000").to_string_with("name"), "red");
    assert_eq!(color("#ff0001").to_string_with("name"), "#ff0001");
}

#[test]
fn test_transparent() {
    let transparent = color("transparent");
    assert_eq!(transparent.to_string(), "transparent");
    assert_eq!(transparent.alpha(), 0.0);
    assert_eq!(transparent.format(), Format::Name);
}

#[test]
fn test_identity() {
    let original = color("hsva(200, 40%, 60%, 0.75)");
    let wrapped = color(original);
    assert_eq!(wrapped, original);
    assert_eq!(wrapped.format(), original.format());
    assert_eq!(wrapped.rgb(false), original.rgb(false));
}

#[test]
fn test_hue_wrap() {
    let hue = color("hsl(10,50%,50%)").rotate(-30.0, false).hsl(true).h;
    assert_eq!(hue, 340.0);
}

#[test]
fn test_saturation_clamp() {
    let saturation = color("hsl(0,90%,50%)").saturate(50.0).hsl(true).s;
    assert_eq!(saturation, 100.0);
}

#[test]
fn test_mix_midpoint() {
    let gray = color("#000000").mix("#ffffff", 0.5);
    assert_eq!(gray.to_string(), "#808080");
}

#[test]
fn test_hex_shorthand() {
    assert_eq!(
        color("#0f0").rgb(true),
        Rgba {
            r: 0.0,
            g: 255.0,
            b: 0.0,
            a: 1.0
        }
    );
}
