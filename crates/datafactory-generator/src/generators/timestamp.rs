//! Date and timestamp generators.

use super::numeric::number_between_inclusive;
use crate::generator::GeneratorError;
use crate::random::RandomSource;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Birth dates fall within this many days either side of 1970-01-01.
const BIRTH_DATE_SPREAD_DAYS: i32 = 15 * 365;

/// Build a date from calendar parts (`month` is 1-12).
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, GeneratorError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(GeneratorError::InvalidDate { year, month, day })
}

/// A date between `base + min_days` and `base + max_days` inclusive.
pub fn date_from<R: RandomSource + ?Sized>(
    rng: &mut R,
    base: NaiveDate,
    min_days: i32,
    max_days: i32,
) -> Result<NaiveDate, GeneratorError> {
    let offset = number_between_inclusive(rng, min_days, max_days)?;
    TimeDelta::try_days(offset.into())
        .and_then(|delta| base.checked_add_signed(delta))
        .ok_or(GeneratorError::DateOutOfRange)
}

/// A birth date within fifteen years of 1970-01-01.
pub fn birth_date<R: RandomSource + ?Sized>(rng: &mut R) -> Result<NaiveDate, GeneratorError> {
    // NaiveDate::default() is 1970-01-01
    date_from(
        rng,
        NaiveDate::default(),
        -BIRTH_DATE_SPREAD_DAYS,
        BIRTH_DATE_SPREAD_DAYS,
    )
}

/// A uniformly random instant in `[min, max)` at millisecond resolution.
///
/// Returns `min` when both bounds are equal.
pub fn date_between<R: RandomSource + ?Sized>(
    rng: &mut R,
    min: DateTime<Utc>,
    max: DateTime<Utc>,
) -> Result<DateTime<Utc>, GeneratorError> {
    if max < min {
        return Err(GeneratorError::InvalidRange {
            min: min.timestamp_millis(),
            max: max.timestamp_millis(),
        });
    }

    let span = (max - min).num_milliseconds();
    let offset = ((rng.next_double() * span as f64) as i64).min((span - 1).max(0));
    TimeDelta::try_milliseconds(offset)
        .and_then(|delta| min.checked_add_signed(delta))
        .ok_or(GeneratorError::DateOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::JavaRandom;
    use chrono::Datelike;

    #[test]
    fn test_date_from_parts() {
        let d = date(2024, 2, 29).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 2, 29));

        assert_eq!(
            date(2023, 2, 29),
            Err(GeneratorError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(date(2024, 13, 1).is_err());
    }

    #[test]
    fn test_birth_date_range() {
        let mut rng = JavaRandom::new(42);
        let earliest = date(1955, 1, 1).unwrap();
        let latest = date(1985, 1, 1).unwrap();

        for _ in 0..1000 {
            let d = birth_date(&mut rng).unwrap();
            assert!(d >= earliest && d <= latest, "birth date {d}");
        }
    }

    #[test]
    fn test_date_from_offsets() {
        let mut rng = JavaRandom::new(42);
        let base = date(2000, 6, 15).unwrap();

        for _ in 0..200 {
            let d = date_from(&mut rng, base, -3, 3).unwrap();
            let days = (d - base).num_days();
            assert!((-3..=3).contains(&days));
        }

        assert_eq!(date_from(&mut rng, base, 5, 5).unwrap(), date(2000, 6, 20).unwrap());
        assert!(date_from(&mut rng, base, 3, -3).is_err());
    }

    #[test]
    fn test_date_between() {
        let mut rng = JavaRandom::new(42);
        let min = DateTime::parse_from_rfc3339("2020-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let max = DateTime::parse_from_rfc3339("2024-12-31T23:59:59Z")
            .unwrap()
            .with_timezone(&Utc);

        for _ in 0..1000 {
            let dt = date_between(&mut rng, min, max).unwrap();
            assert!(dt >= min && dt < max);
        }

        assert_eq!(date_between(&mut rng, min, min).unwrap(), min);
        assert!(matches!(
            date_between(&mut rng, max, min),
            Err(GeneratorError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = JavaRandom::new(42);
        let mut rng2 = JavaRandom::new(42);

        assert_eq!(birth_date(&mut rng1).unwrap(), birth_date(&mut rng2).unwrap());
    }
}
