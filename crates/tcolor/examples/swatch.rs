use tcolor::{color, Format};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if args.is_empty() {
        vec![String::from("coral")]
    } else {
        args
    };

    for input in &inputs {
        let base = color(input);
        println!("\n    {}", input);
        for (label, variant) in [
            ("base", base),
            ("lighter", base.lighten(20.0)),
            ("darker", base.darken(20.0)),
            ("muted", base.desaturate(40.0)),
            ("complement", base.complement(false)),
            ("ryb complement", base.complement(true)),
            ("triad", base.rotate(120.0, true)),
        ] {
            let [r, g, b] = variant.to_24bit();
            println!(
                "    \x1b[48;2;{};{};{}m      \x1b[m {:<15} {:<8} {:<22} {}",
                r,
                g,
                b,
                label,
                variant.to_hex_format(),
                variant.to_format_string(Some(Format::Hsl)),
                variant.to_format_string(Some(Format::Name)),
            );
        }
    }
    println!();
}
