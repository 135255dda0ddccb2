//! Random color values in hex, `rgb()` and `hsl()` notation.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Output notation for generated colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

/// One random color in the requested notation. Exclusions do not apply.
pub fn generate_color(format: ColorFormat, rng: &mut impl Rng) -> String {
    match format {
        ColorFormat::Hex => {
            let (r, g, b): (u8, u8, u8) = (rng.random(), rng.random(), rng.random());
            format!("#{r:02x}{g:02x}{b:02x}")
        }
        ColorFormat::Rgb => {
            let (r, g, b): (u8, u8, u8) = (rng.random(), rng.random(), rng.random());
            format!("rgb({r}, {g}, {b})")
        }
        ColorFormat::Hsl => {
            let hue = rng.random_range(0..360);
            let saturation = rng.random_range(0..=100);
            let lightness = rng.random_range(0..=100);
            format!("hsl({hue}, {saturation}%, {lightness}%)")
        }
    }
}
