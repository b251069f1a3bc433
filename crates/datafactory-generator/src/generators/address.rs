//! Street address generators.

use crate::choice::{chance, pick_named};
use crate::generator::GeneratorError;
use crate::random::RandomSource;
use datafactory_core::AddressValues;

const HOUSE_NUMBER_BASE: i32 = 404;
const HOUSE_NUMBER_SPAN: i32 = 1400;
const UNIT_NUMBER_BASE: i32 = 100;
const UNIT_NUMBER_SPAN: i32 = 1000;

pub fn street_name<R: RandomSource + ?Sized>(
    rng: &mut R,
    values: &dyn AddressValues,
) -> Result<String, GeneratorError> {
    Ok(pick_named(rng, values.street_names(), "street_names")?.clone())
}

pub fn street_suffix<R: RandomSource + ?Sized>(
    rng: &mut R,
    values: &dyn AddressValues,
) -> Result<String, GeneratorError> {
    Ok(pick_named(rng, values.street_suffixes(), "street_suffixes")?.clone())
}

pub fn city<R: RandomSource + ?Sized>(
    rng: &mut R,
    values: &dyn AddressValues,
) -> Result<String, GeneratorError> {
    Ok(pick_named(rng, values.cities(), "cities")?.clone())
}

/// House number, street name and suffix, e.g. `543 Larkhill Road`.
pub fn street_address<R: RandomSource + ?Sized>(
    rng: &mut R,
    values: &dyn AddressValues,
) -> Result<String, GeneratorError> {
    let number = HOUSE_NUMBER_BASE + rng.next_int(HOUSE_NUMBER_SPAN)?;
    let street = street_name(rng, values)?;
    let suffix = street_suffix(rng, values)?;
    Ok(format!("{number} {street} {suffix}"))
}

/// Second address line, `Apt #N` or `Suite #N` with equal odds.
pub fn address_line2<R: RandomSource + ?Sized>(rng: &mut R) -> Result<String, GeneratorError> {
    let unit = if rng.next_int(100)? < 50 {
        "Apt"
    } else {
        "Suite"
    };
    let number = UNIT_NUMBER_BASE + rng.next_int(UNIT_NUMBER_SPAN)?;
    Ok(format!("{unit} #{number}"))
}

/// [`address_line2`] with `probability` percent chance, `None` otherwise.
pub fn address_line2_with_probability<R: RandomSource + ?Sized>(
    rng: &mut R,
    probability: i32,
) -> Result<Option<String>, GeneratorError> {
    if chance(rng, probability)? {
        address_line2(rng).map(Some)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::JavaRandom;
    use datafactory_core::AddressTable;

    #[test]
    fn test_street_address_format() {
        let mut rng = JavaRandom::new(42);
        let table = AddressTable::default();

        for _ in 0..200 {
            let address = street_address(&mut rng, &table).unwrap();
            let mut parts = address.splitn(3, ' ');
            let number: i32 = parts.next().unwrap().parse().unwrap();
            assert!((404..1804).contains(&number), "address = {address}");
            let street = parts.next().unwrap();
            let suffix = parts.next().unwrap();
            assert!(table.street_names.iter().any(|s| s == street), "address = {address}");
            assert!(table.street_suffixes.iter().any(|s| s == suffix), "address = {address}");
        }
    }

    #[test]
    fn test_address_line2_format() {
        let mut rng = JavaRandom::new(42);
        let mut seen_apt = false;
        let mut seen_suite = false;

        for _ in 0..200 {
            let line = address_line2(&mut rng).unwrap();
            let (unit, number) = line.split_once(" #").unwrap();
            let number: i32 = number.parse().unwrap();
            assert!((100..1100).contains(&number));
            match unit {
                "Apt" => seen_apt = true,
                "Suite" => seen_suite = true,
                other => panic!("unexpected unit {other}"),
            }
        }

        assert!(seen_apt && seen_suite);
    }

    #[test]
    fn test_address_line2_probability() {
        let mut rng = JavaRandom::new(42);

        for _ in 0..100 {
            assert_eq!(address_line2_with_probability(&mut rng, 0).unwrap(), None);
            assert!(address_line2_with_probability(&mut rng, 100)
                .unwrap()
                .is_some());
        }
    }

    #[test]
    fn test_empty_cities() {
        let mut rng = JavaRandom::new(42);
        let table = AddressTable {
            cities: Vec::new(),
            ..AddressTable::default()
        };

        assert_eq!(
            city(&mut rng, &table),
            Err(GeneratorError::EmptyCollection("cities"))
        );
    }
}
