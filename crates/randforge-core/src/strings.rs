//! Fixed-length strings sampled from a named character class.

use std::collections::HashSet;

use rand::Rng;

use crate::charset::effective_class;
use crate::errors::GenerateError;

/// Builds `count` strings of exactly `length` characters, each drawn with
/// replacement from the effective class. `length == 0` yields empty strings.
pub fn generate_strings(
    length: usize,
    pattern: &str,
    exclude_chars: &HashSet<char>,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<String>, GenerateError> {
    let chars = effective_class(pattern, exclude_chars)?;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let mut value = String::with_capacity(length);
        for _ in 0..length {
            value.push(chars[rng.random_range(0..chars.len())]);
        }
        out.push(value);
    }
    Ok(out)
}
