//! Integer and float generation over bounded ranges.

use rand::Rng;

use crate::domain::IntDomain;
use crate::errors::GenerateError;

/// Draws `count` integers from `[min, max]` minus the exclusion set.
///
/// Draws are independent (duplicates allowed). Availability is checked before
/// the first draw, so the call either terminates with `count` values or fails
/// without producing any.
pub fn generate_integers(
    min: i64,
    max: i64,
    exclude: &[i64],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<i64>, GenerateError> {
    let domain = IntDomain::new(min, max, exclude)?;
    domain.require(count)?;
    if domain.mostly_excluded() {
        let pool = domain.enumerate();
        return Ok((0..count)
            .map(|_| pool[rng.random_range(0..pool.len())])
            .collect());
    }
    Ok((0..count).map(|_| domain.sample(rng)).collect())
}

/// Draws `count` floats uniformly from `[min, max]`.
///
/// Exclusions do not apply to the continuous domain; rounding happens at
/// display time via [`format_float`].
pub fn generate_floats(
    min: f64,
    max: f64,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, GenerateError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(GenerateError::invalid_range(min, max));
    }
    Ok((0..count).map(|_| rng.random_range(min..=max)).collect())
}

/// Fixed-point rendering with exactly `decimals` fractional digits; trailing
/// zeros are kept.
pub fn format_float(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
