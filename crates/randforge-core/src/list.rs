//! Uniform selection from caller-supplied item lists.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::errors::GenerateError;

/// Draws `count` items from `items`.
///
/// With `unique` set the result is `count` distinct items in uniform random
/// order; otherwise each draw is independent and duplicates are expected.
pub fn sample_list(
    items: &[String],
    count: usize,
    unique: bool,
    rng: &mut impl Rng,
) -> Result<Vec<String>, GenerateError> {
    if items.is_empty() && count > 0 {
        return Err(GenerateError::EmptyList);
    }
    if unique {
        if count > items.len() {
            return Err(GenerateError::InsufficientDomain {
                needed: count as u64,
                available: items.len() as u64,
            });
        }
        let mut indices: Vec<usize> = (0..items.len()).collect();
        let (picked, _) = indices.partial_shuffle(rng, count);
        return Ok(picked.iter().map(|&index| items[index].clone()).collect());
    }
    Ok((0..count)
        .map(|_| items.choose(rng).cloned().unwrap_or_default())
        .collect())
}
