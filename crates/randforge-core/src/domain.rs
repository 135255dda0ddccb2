//! Effective-domain computation: exclusions applied to character classes and
//! numeric ranges.

use std::collections::HashSet;

use rand::Rng;

use crate::errors::GenerateError;

/// Set difference that preserves the order of the surviving elements.
pub fn effective_chars(
    full: impl IntoIterator<Item = char>,
    exclude: &HashSet<char>,
) -> Vec<char> {
    full.into_iter().filter(|ch| !exclude.contains(ch)).collect()
}

/// Integer range with exclusions, kept unmaterialized.
///
/// Exclusions are compared by exact equality and clipped to `[min, max]` on
/// construction.
#[derive(Debug, Clone)]
pub struct IntDomain {
    min: i64,
    max: i64,
    excluded: HashSet<i64>,
}

impl IntDomain {
    pub fn new(min: i64, max: i64, exclude: &[i64]) -> Result<Self, GenerateError> {
        if min > max {
            return Err(GenerateError::invalid_range(min, max));
        }
        let excluded = exclude
            .iter()
            .copied()
            .filter(|value| (min..=max).contains(value))
            .collect();
        Ok(Self { min, max, excluded })
    }

    fn width(&self) -> u128 {
        (self.max as i128 - self.min as i128 + 1) as u128
    }

    /// Count of values in `[min, max]` surviving the exclusions.
    pub fn available(&self) -> u128 {
        self.width() - self.excluded.len() as u128
    }

    /// Hard precondition check performed before any sampling starts.
    pub fn require(&self, count: usize) -> Result<(), GenerateError> {
        let available = self.available();
        if count as u128 > available {
            return Err(GenerateError::InsufficientDomain {
                needed: count as u64,
                available: available.min(u64::MAX as u128) as u64,
            });
        }
        Ok(())
    }

    /// Rejection sampling stays cheap while exclusions cover less than half
    /// the range width.
    pub fn mostly_excluded(&self) -> bool {
        self.excluded.len() as u128 * 2 >= self.width()
    }

    /// Materializes the surviving values in ascending order. Only bounded by
    /// the exclusion set size when `mostly_excluded` holds.
    pub fn enumerate(&self) -> Vec<i64> {
        (self.min..=self.max)
            .filter(|value| !self.excluded.contains(value))
            .collect()
    }

    /// One independent draw, redrawing on excluded values.
    pub fn sample(&self, rng: &mut impl Rng) -> i64 {
        loop {
            let draw = rng.random_range(self.min..=self.max);
            if !self.excluded.contains(&draw) {
                return draw;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn effective_chars_preserves_order() {
        let exclude: HashSet<char> = ['b', 'd'].into_iter().collect();
        let chars = effective_chars("abcde".chars(), &exclude);
        assert_eq!(chars, vec!['a', 'c', 'e']);
    }

    #[test]
    fn available_ignores_exclusions_outside_the_range() {
        let domain = IntDomain::new(1, 10, &[0, 5, 11, 200]).unwrap();
        assert_eq!(domain.available(), 9);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(matches!(
            IntDomain::new(10, 1, &[]),
            Err(GenerateError::InvalidRange { .. })
        ));
    }

    #[test]
    fn require_reports_the_available_count() {
        let domain = IntDomain::new(1, 5, &[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(
            domain.require(10),
            Err(GenerateError::InsufficientDomain {
                needed: 10,
                available: 0
            })
        );
    }

    #[test]
    fn sample_never_returns_excluded_values() {
        let domain = IntDomain::new(1, 6, &[2, 4]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let value = domain.sample(&mut rng);
            assert!((1..=6).contains(&value));
            assert!(value != 2 && value != 4);
        }
    }

    #[test]
    fn enumerate_lists_survivors_in_order() {
        let domain = IntDomain::new(1, 6, &[2, 4]).unwrap();
        assert_eq!(domain.enumerate(), vec![1, 3, 5, 6]);
        assert!(!domain.mostly_excluded());
        let heavy = IntDomain::new(1, 4, &[1, 2]).unwrap();
        assert!(heavy.mostly_excluded());
    }
}
