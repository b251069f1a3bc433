//! Business names and email addresses.

use super::address::city;
use super::names::{first_name, last_name};
use crate::choice::{chance, pick_named};
use crate::generator::GeneratorError;
use crate::random::RandomSource;
use datafactory_core::{AddressValues, ContentValues, NameValues};

/// Percent chance that an email local part gets a numeric suffix.
const EMAIL_SUFFIX_CHANCE: i32 = 20;

/// A city followed by a business type, e.g. `Springfield Bakery`.
pub fn business_name<R: RandomSource + ?Sized>(
    rng: &mut R,
    address: &dyn AddressValues,
    content: &dyn ContentValues,
) -> Result<String, GeneratorError> {
    let city = city(rng, address)?;
    let kind = pick_named(rng, content.business_types(), "business_types")?;
    Ok(format!("{city} {kind}"))
}

/// A lower-cased email address.
///
/// The local part is either a first initial plus last name or two corpus
/// words, optionally followed by a number below 100.
pub fn email_address<R: RandomSource + ?Sized>(
    rng: &mut R,
    names: &dyn NameValues,
    content: &dyn ContentValues,
) -> Result<String, GeneratorError> {
    let mut local = if rng.next_int(100)? < 50 {
        let first = first_name(rng, names)?;
        let initial: String = first.chars().take(1).collect();
        initial + &last_name(rng, names)?
    } else {
        let one = pick_named(rng, content.words(), "words")?;
        let two = pick_named(rng, content.words(), "words")?;
        format!("{one}{two}")
    };

    if chance(rng, EMAIL_SUFFIX_CHANCE)? {
        local.push_str(&rng.next_int(100)?.to_string());
    }

    let host = pick_named(rng, content.email_hosts(), "email_hosts")?;
    let tld = pick_named(rng, content.tlds(), "tlds")?;
    Ok(format!("{local}@{host}.{tld}").to_lowercase())
}
