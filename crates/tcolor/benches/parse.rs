use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tcolor::{color, Color, Format};

const INPUTS: [&str; 8] = [
    "#ff8000",
    "f80",
    "cornflower",
    "coral",
    "rgb(255, 128, 0)",
    "rgba(255 128 0 0.5)",
    "hsl(30, 100%, 50%)",
    "hsva(30 100% 100% 0.5)",
];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for input in INPUTS {
        group.bench_function(input, |b| b.iter(|| color(black_box(input))));
    }
    group.finish();

    let orange = Color::from_24bit(255, 128, 0).with_alpha(0.5);
    let mut group = c.benchmark_group("format");
    for format in [Format::Hex, Format::Rgb, Format::Hsl, Format::Hsv, Format::Name] {
        group.bench_function(format.code(), |b| {
            b.iter(|| black_box(&orange).to_format_string(Some(format)))
        });
    }
    group.finish();

    let (red, blue) = (color("red"), color("blue"));
    c.bench_function("rotate-ryb", |b| {
        b.iter(|| black_box(&red).rotate(black_box(150.0), true))
    });
    c.bench_function("mix", |b| {
        b.iter(|| black_box(&red).mix(&blue, black_box(0.25)))
    });
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
