//! Numeric value generators.

use crate::generator::GeneratorError;
use crate::random::RandomSource;

/// A random integer over the whole `i32` range.
pub fn number<R: RandomSource + ?Sized>(rng: &mut R) -> i32 {
    rng.next_i32()
}

/// A random integer in `[0, max)`, or `0` when `max == 0`.
pub fn number_up_to<R: RandomSource + ?Sized>(
    rng: &mut R,
    max: i32,
) -> Result<i32, GeneratorError> {
    number_between(rng, 0, max)
}

/// A random integer in `[min, max)`.
///
/// `min == max` is not an error and returns `min`.
pub fn number_between<R: RandomSource + ?Sized>(
    rng: &mut R,
    min: i32,
    max: i32,
) -> Result<i32, GeneratorError> {
    if max < min {
        return Err(GeneratorError::InvalidRange {
            min: min.into(),
            max: max.into(),
        });
    }
    if max == min {
        return Ok(min);
    }

    let offset = draw_offset(rng, i64::from(max) - i64::from(min))?;
    Ok((i64::from(min) + offset) as i32)
}

/// A random integer in `[min, max]`.
pub fn number_between_inclusive<R: RandomSource + ?Sized>(
    rng: &mut R,
    min: i32,
    max: i32,
) -> Result<i32, GeneratorError> {
    if max < min {
        return Err(GeneratorError::InvalidRange {
            min: min.into(),
            max: max.into(),
        });
    }

    let offset = draw_offset(rng, i64::from(max) - i64::from(min) + 1)?;
    Ok((i64::from(min) + offset) as i32)
}

/// Uniform offset in `[0, span)` for `1 <= span <= 2^32`.
fn draw_offset<R: RandomSource + ?Sized>(rng: &mut R, span: i64) -> Result<i64, GeneratorError> {
    match i32::try_from(span) {
        Ok(bound) => Ok(i64::from(rng.next_int(bound)?)),
        // Too wide for a single bounded draw
        Err(_) => Ok(((rng.next_double() * span as f64) as i64).min(span - 1)),
    }
}

/// `digits` random decimal digits; leading zeros are kept.
pub fn number_text<R: RandomSource + ?Sized>(
    rng: &mut R,
    digits: usize,
) -> Result<String, GeneratorError> {
    (0..digits)
        .map(|_| rng.next_int(10).map(|digit| char::from(b'0' + digit as u8)))
        .collect()
}
