//! Probability-gated selection.
//!
//! Every pick draws the probability check first and the index second,
//! even for guaranteed picks, so the number of values consumed from the
//! stream does not depend on the probability passed in.

use crate::generator::GeneratorError;
use crate::random::RandomSource;

/// Returns `true` with probability `probability / 100`.
///
/// `0` (or below) never succeeds and `100` (or above) always does.
pub fn chance<R: RandomSource + ?Sized>(
    rng: &mut R,
    probability: i32,
) -> Result<bool, GeneratorError> {
    Ok(rng.next_int(100)? < probability)
}

/// Pick a uniformly random element.
pub fn pick<'a, T, R: RandomSource + ?Sized>(
    rng: &mut R,
    items: &'a [T],
) -> Result<&'a T, GeneratorError> {
    pick_named(rng, items, "items")
}

/// Pick a random element with `probability` percent chance, `None` otherwise.
pub fn pick_with_probability<'a, T, R: RandomSource + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    probability: i32,
) -> Result<Option<&'a T>, GeneratorError> {
    pick_named_with_probability(rng, items, probability, "items")
}

/// Pick a random element with `probability` percent chance, `default` otherwise.
pub fn pick_or<T: Clone, R: RandomSource + ?Sized>(
    rng: &mut R,
    items: &[T],
    probability: i32,
    default: T,
) -> Result<T, GeneratorError> {
    Ok(pick_with_probability(rng, items, probability)?
        .cloned()
        .unwrap_or(default))
}

/// [`pick`] reporting `table` when the slice is empty.
pub(crate) fn pick_named<'a, T, R: RandomSource + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    table: &'static str,
) -> Result<&'a T, GeneratorError> {
    pick_named_with_probability(rng, items, 100, table)?
        .ok_or(GeneratorError::EmptyCollection(table))
}

pub(crate) fn pick_named_with_probability<'a, T, R: RandomSource + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    probability: i32,
    table: &'static str,
) -> Result<Option<&'a T>, GeneratorError> {
    if items.is_empty() {
        return Err(GeneratorError::EmptyCollection(table));
    }

    if !chance(rng, probability)? {
        return Ok(None);
    }

    let index = rng.next_int(bound_for(items.len()))? as usize;
    Ok(Some(&items[index]))
}

/// Bound for an index draw; slices longer than `i32::MAX` only expose their prefix.
pub(crate) fn bound_for(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
