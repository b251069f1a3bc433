//! Person name generators.

use crate::choice::{pick_named, pick_named_with_probability};
use crate::generator::GeneratorError;
use crate::random::RandomSource;
use datafactory_core::NameValues;

pub fn first_name<R: RandomSource + ?Sized>(
    rng: &mut R,
    values: &dyn NameValues,
) -> Result<String, GeneratorError> {
    Ok(pick_named(rng, values.first_names(), "first_names")?.clone())
}

pub fn last_name<R: RandomSource + ?Sized>(
    rng: &mut R,
    values: &dyn NameValues,
) -> Result<String, GeneratorError> {
    Ok(pick_named(rng, values.last_names(), "last_names")?.clone())
}

/// First and last name separated by a space.
pub fn full_name<R: RandomSource + ?Sized>(
    rng: &mut R,
    values: &dyn NameValues,
) -> Result<String, GeneratorError> {
    let first = first_name(rng, values)?;
    let last = last_name(rng, values)?;
    Ok(format!("{first} {last}"))
}

/// A prefix such as `Dr` with `chance` percent probability.
pub fn prefix<R: RandomSource + ?Sized>(
    rng: &mut R,
    values: &dyn NameValues,
    chance: i32,
) -> Result<Option<String>, GeneratorError> {
    Ok(pick_named_with_probability(rng, values.prefixes(), chance, "prefixes")?.cloned())
}

/// A suffix such as `Jr` with `chance` percent probability.
pub fn suffix<R: RandomSource + ?Sized>(
    rng: &mut R,
    values: &dyn NameValues,
    chance: i32,
) -> Result<Option<String>, GeneratorError> {
    Ok(pick_named_with_probability(rng, values.suffixes(), chance, "suffixes")?.cloned())
}
