//! Generates one value in every mode with a fixed seed.
//!
//! Run with `cargo run -p randforge-core --example generate_values`.

use randforge_core::{ColorFormat, GenerationRequest, Mode, generate, seeded_rng};

fn main() {
    let mut rng = seeded_rng(Some(42));
    let modes = vec![
        Mode::Number {
            min: 1,
            max: 100,
            exclude: vec![13],
        },
        Mode::Float {
            min: 0.0,
            max: 1.0,
            decimals: 2,
        },
        Mode::Color {
            format: ColorFormat::Hsl,
        },
        Mode::String {
            length: 10,
            pattern: "alphanumeric".to_string(),
            exclude_chars: vec![],
        },
        Mode::Custom {
            template: "{u}{u}{u}-{d}{d}{d}".to_string(),
        },
        Mode::List {
            items: vec!["red".to_string(), "green".to_string(), "blue".to_string()],
            unique: false,
        },
    ];

    for mode in modes {
        let name = mode.name();
        let request = GenerationRequest { mode, count: 1 };
        match generate(&request, &mut rng) {
            Ok(values) => println!("{name}: {}", values.join(", ")),
            Err(err) => eprintln!("{name}: error: {err}"),
        }
    }
}
