//! Dispatcher: validated requests in, display-ready values out.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::color::generate_color;
use crate::errors::GenerateError;
use crate::list::sample_list;
use crate::numeric::{format_float, generate_floats, generate_integers};
use crate::request::{GenerationRequest, Mode};
use crate::strings::generate_strings;
use crate::template::{Template, generate_custom};

/// Runs one request against the supplied randomness source.
///
/// Success returns exactly `request.count` display-ready strings; any failure
/// returns before a single value is produced.
pub fn generate(
    request: &GenerationRequest,
    rng: &mut impl Rng,
) -> Result<Vec<String>, GenerateError> {
    let count = request.count;
    debug!(mode = request.mode.name(), count, "generating values");
    let values: Vec<String> = match &request.mode {
        Mode::Number { min, max, exclude } => generate_integers(*min, *max, exclude, count, rng)?
            .into_iter()
            .map(|value| value.to_string())
            .collect(),
        Mode::Float { min, max, decimals } => generate_floats(*min, *max, count, rng)?
            .into_iter()
            .map(|value| format_float(value, *decimals))
            .collect(),
        Mode::Color { format } => (0..count).map(|_| generate_color(*format, rng)).collect(),
        Mode::String {
            length,
            pattern,
            exclude_chars,
        } => {
            let exclude: HashSet<char> = exclude_chars.iter().copied().collect();
            generate_strings(*length, pattern, &exclude, count, rng)?
        }
        Mode::Custom { template } => {
            let template = Template::parse(template);
            generate_custom(&template, count, rng)
        }
        Mode::List { items, unique } => sample_list(items, count, *unique, rng)?,
    };
    debug!(mode = request.mode.name(), produced = values.len(), "request finished");
    Ok(values)
}

/// Process-wide randomness source: deterministic for a fixed seed, OS entropy
/// otherwise.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    }
}
