//! The `DataFactory` facade.

use crate::choice;
use crate::generators::{address, content, names, numeric, timestamp};
use crate::random::{JavaRandom, RandomSource, SharedRandom, DEFAULT_SEED};
use crate::text;
use chrono::{DateTime, NaiveDate, Utc};
use datafactory_core::{
    AddressTable, AddressValues, ContentTable, ContentValues, NameTable, NameValues, ValueTables,
};
use std::sync::Arc;

/// Error type for generator operations.
///
/// All variants are caller errors detected before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// Lower bound above upper bound, or a range too wide to draw from
    #[error("Invalid range: min={min}, max={max}")]
    InvalidRange { min: i64, max: i64 },

    /// Non-positive bound passed to a bounded integer draw
    #[error("Bound must be positive, got {0}")]
    InvalidBound(i32),

    /// A value table with nothing to choose from
    #[error("Cannot choose from empty table: {0}")]
    EmptyCollection(&'static str),

    /// Calendar parts that do not form a date
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Date arithmetic left the representable range
    #[error("Date out of range")]
    DateOutOfRange,
}

impl GeneratorError {
    pub(crate) fn invalid_range(min: usize, max: usize) -> Self {
        Self::InvalidRange {
            min: i64::try_from(min).unwrap_or(i64::MAX),
            max: i64::try_from(max).unwrap_or(i64::MAX),
        }
    }
}

/// Seeded generator of test data.
///
/// A `DataFactory` owns its random stream and draws from three swappable
/// value tables. Issuing the same calls against two factories with the same
/// seed yields the same values.
///
/// The stream is plain mutable state. Use one factory per thread, or guard a
/// shared one with a mutex. Tables are immutable and are shared by `Arc`, so
/// handing the same tables to many factories is cheap.
pub struct DataFactory<R = JavaRandom> {
    random: R,
    names: Arc<dyn NameValues>,
    address: Arc<dyn AddressValues>,
    content: Arc<dyn ContentValues>,
}

impl DataFactory<JavaRandom> {
    /// Create a factory seeded with [`DEFAULT_SEED`].
    pub fn create() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Create a factory with its own stream seeded from `seed`.
    pub fn with_seed(seed: i64) -> Self {
        Self::with_random(JavaRandom::new(seed))
    }

    /// Create a factory seeded from the thread-local entropy source.
    ///
    /// Output is not reproducible across runs.
    pub fn from_entropy() -> Self {
        let seed: i64 = rand::random();
        tracing::debug!(seed, "Seeding data factory from entropy");
        Self::with_seed(seed)
    }
}

impl Default for DataFactory<JavaRandom> {
    fn default() -> Self {
        Self::create()
    }
}

impl DataFactory<SharedRandom> {
    /// Create a factory on the process-wide shared stream.
    ///
    /// Every factory created this way advances the same stream, so the
    /// values any one of them returns depend on calls made through all the
    /// others. Calling [`DataFactory::randomize`] reseeds that stream for
    /// everyone.
    pub fn create_with_shared_default_source() -> Self {
        Self::with_random(SharedRandom::process_default())
    }
}

impl<R: RandomSource> DataFactory<R> {
    /// Create a factory driven by `random` with the default tables.
    pub fn with_random(random: R) -> Self {
        Self {
            random,
            names: Arc::new(NameTable::default()),
            address: Arc::new(AddressTable::default()),
            content: Arc::new(ContentTable::default()),
        }
    }

    /// Replace all tables.
    pub fn with_tables(self, tables: ValueTables) -> Self {
        self.with_name_values(Arc::new(tables.names))
            .with_address_values(Arc::new(tables.address))
            .with_content_values(Arc::new(tables.content))
    }

    pub fn with_name_values(mut self, values: Arc<dyn NameValues>) -> Self {
        self.set_name_values(values);
        self
    }

    pub fn with_address_values(mut self, values: Arc<dyn AddressValues>) -> Self {
        self.set_address_values(values);
        self
    }

    pub fn with_content_values(mut self, values: Arc<dyn ContentValues>) -> Self {
        self.set_content_values(values);
        self
    }

    /// Swap the name table. An empty table is reported when first drawn from.
    pub fn set_name_values(&mut self, values: Arc<dyn NameValues>) {
        tracing::debug!("Replacing name values");
        self.names = values;
    }

    /// Swap the address table. An empty table is reported when first drawn from.
    pub fn set_address_values(&mut self, values: Arc<dyn AddressValues>) {
        tracing::debug!("Replacing address values");
        self.address = values;
    }

    /// Swap the content table. An empty table is reported when first drawn from.
    pub fn set_content_values(&mut self, values: Arc<dyn ContentValues>) {
        tracing::debug!("Replacing content values");
        self.content = values;
    }

    pub fn name_values(&self) -> &Arc<dyn NameValues> {
        &self.names
    }

    pub fn address_values(&self) -> &Arc<dyn AddressValues> {
        &self.address
    }

    pub fn content_values(&self) -> &Arc<dyn ContentValues> {
        &self.content
    }

    /// Reseed the stream. The same seed followed by the same calls
    /// reproduces the same values.
    pub fn randomize(&mut self, seed: i64) {
        tracing::debug!(seed, "Reseeding random stream");
        self.random.reseed(seed);
    }

    /// Direct access to the underlying stream.
    pub fn random_mut(&mut self) -> &mut R {
        &mut self.random
    }

    // ========================================================================
    // Weighted choice
    // ========================================================================

    /// `true` with `probability` percent chance.
    pub fn chance(&mut self, probability: i32) -> Result<bool, GeneratorError> {
        choice::chance(&mut self.random, probability)
    }

    /// A random element of `items`.
    pub fn item<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, GeneratorError> {
        choice::pick(&mut self.random, items)
    }

    /// A random element of `items` with `probability` percent chance.
    pub fn item_with_probability<'a, T>(
        &mut self,
        items: &'a [T],
        probability: i32,
    ) -> Result<Option<&'a T>, GeneratorError> {
        choice::pick_with_probability(&mut self.random, items, probability)
    }

    /// A random element of `items` with `probability` percent chance, else `default`.
    pub fn item_or<T: Clone>(
        &mut self,
        items: &[T],
        probability: i32,
        default: T,
    ) -> Result<T, GeneratorError> {
        choice::pick_or(&mut self.random, items, probability, default)
    }

    // ========================================================================
    // Names
    // ========================================================================

    pub fn first_name(&mut self) -> Result<String, GeneratorError> {
        names::first_name(&mut self.random, self.names.as_ref())
    }

    pub fn last_name(&mut self) -> Result<String, GeneratorError> {
        names::last_name(&mut self.random, self.names.as_ref())
    }

    /// First and last name, e.g. `Ada Lovelace`.
    pub fn name(&mut self) -> Result<String, GeneratorError> {
        names::full_name(&mut self.random, self.names.as_ref())
    }

    pub fn prefix(&mut self, chance: i32) -> Result<Option<String>, GeneratorError> {
        names::prefix(&mut self.random, self.names.as_ref(), chance)
    }

    pub fn suffix(&mut self, chance: i32) -> Result<Option<String>, GeneratorError> {
        names::suffix(&mut self.random, self.names.as_ref(), chance)
    }

    // ========================================================================
    // Addresses
    // ========================================================================

    pub fn street_name(&mut self) -> Result<String, GeneratorError> {
        address::street_name(&mut self.random, self.address.as_ref())
    }

    pub fn street_suffix(&mut self) -> Result<String, GeneratorError> {
        address::street_suffix(&mut self.random, self.address.as_ref())
    }

    pub fn city(&mut self) -> Result<String, GeneratorError> {
        address::city(&mut self.random, self.address.as_ref())
    }

    /// House number, street name and suffix.
    pub fn address(&mut self) -> Result<String, GeneratorError> {
        address::street_address(&mut self.random, self.address.as_ref())
    }

    pub fn address_line2(&mut self) -> Result<String, GeneratorError> {
        address::address_line2(&mut self.random)
    }

    pub fn address_line2_with_probability(
        &mut self,
        probability: i32,
    ) -> Result<Option<String>, GeneratorError> {
        address::address_line2_with_probability(&mut self.random, probability)
    }

    /// Second address line with `probability` percent chance, else `default`.
    pub fn address_line2_or(
        &mut self,
        probability: i32,
        default: &str,
    ) -> Result<String, GeneratorError> {
        Ok(self
            .address_line2_with_probability(probability)?
            .unwrap_or_else(|| default.to_string()))
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    pub fn number(&mut self) -> i32 {
        numeric::number(&mut self.random)
    }

    pub fn number_up_to(&mut self, max: i32) -> Result<i32, GeneratorError> {
        numeric::number_up_to(&mut self.random, max)
    }

    /// A number in `[min, max)`; `min == max` returns `min`.
    pub fn number_between(&mut self, min: i32, max: i32) -> Result<i32, GeneratorError> {
        numeric::number_between(&mut self.random, min, max)
    }

    pub fn number_text(&mut self, digits: usize) -> Result<String, GeneratorError> {
        numeric::number_text(&mut self.random, digits)
    }

    // ========================================================================
    // Dates
    // ========================================================================

    pub fn date(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, GeneratorError> {
        timestamp::date(year, month, day)
    }

    pub fn date_from(
        &mut self,
        base: NaiveDate,
        min_days: i32,
        max_days: i32,
    ) -> Result<NaiveDate, GeneratorError> {
        timestamp::date_from(&mut self.random, base, min_days, max_days)
    }

    pub fn birth_date(&mut self) -> Result<NaiveDate, GeneratorError> {
        timestamp::birth_date(&mut self.random)
    }

    pub fn date_between(
        &mut self,
        min: DateTime<Utc>,
        max: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, GeneratorError> {
        timestamp::date_between(&mut self.random, min, max)
    }

    // ========================================================================
    // Characters, words and text
    // ========================================================================

    pub fn random_char(&mut self) -> Result<char, GeneratorError> {
        text::random_char(&mut self.random)
    }

    pub fn chars(&mut self, length: usize) -> Result<String, GeneratorError> {
        text::chars(&mut self.random, length)
    }

    pub fn chars_between(&mut self, min: usize, max: usize) -> Result<String, GeneratorError> {
        text::chars_between(&mut self.random, min, max)
    }

    /// Any word from the corpus.
    pub fn word(&mut self) -> Result<String, GeneratorError> {
        text::word(&mut self.random, self.content.words())
    }

    pub fn word_of_length(&mut self, length: usize) -> Result<String, GeneratorError> {
        text::word_of_length(&mut self.random, self.content.words(), length)
    }

    pub fn word_with_length(
        &mut self,
        length: usize,
        exact: bool,
    ) -> Result<String, GeneratorError> {
        text::word_with_length(&mut self.random, self.content.words(), length, exact)
    }

    pub fn word_between(&mut self, min: usize, max: usize) -> Result<String, GeneratorError> {
        text::word_between(&mut self.random, self.content.words(), min, max)
    }

    pub fn text(&mut self, length: usize) -> Result<String, GeneratorError> {
        text::text(&mut self.random, self.content.words(), length)
    }

    pub fn text_between(&mut self, min: usize, max: usize) -> Result<String, GeneratorError> {
        text::text_between(&mut self.random, self.content.words(), min, max)
    }

    // ========================================================================
    // Business and contact
    // ========================================================================

    pub fn business_name(&mut self) -> Result<String, GeneratorError> {
        content::business_name(
            &mut self.random,
            self.address.as_ref(),
            self.content.as_ref(),
        )
    }

    pub fn email_address(&mut self) -> Result<String, GeneratorError> {
        content::email_address(&mut self.random, self.names.as_ref(), self.content.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample<R: RandomSource>(factory: &mut DataFactory<R>) -> Vec<String> {
        vec![
            factory.name().unwrap(),
            factory.address().unwrap(),
            factory.address_line2().unwrap(),
            factory.city().unwrap(),
            factory.business_name().unwrap(),
            factory.email_address().unwrap(),
            factory.birth_date().unwrap().to_string(),
            factory.number_between(-50, 50).unwrap().to_string(),
            factory.word_between(2, 8).unwrap(),
            factory.text_between(20, 60).unwrap(),
            factory.chars(5).unwrap(),
        ]
    }

    #[test]
    fn test_same_seed_same_values() {
        let mut first = DataFactory::with_seed(42);
        let mut second = DataFactory::with_seed(42);

        assert_eq!(sample(&mut first), sample(&mut second));
    }

    #[test]
    fn test_randomize_restarts_stream() {
        let mut factory = DataFactory::create();
        factory.randomize(73438);
        let first = sample(&mut factory);

        sample(&mut factory);
        factory.randomize(73438);
        assert_eq!(sample(&mut factory), first);
    }

    #[test]
    fn test_create_uses_default_seed() {
        let mut created = DataFactory::create();
        let mut seeded = DataFactory::with_seed(DEFAULT_SEED);

        assert_eq!(created.number(), seeded.number());
    }

    #[test]
    fn test_factories_with_shared_source_interleave() {
        let shared = SharedRandom::new(42);
        let mut first = DataFactory::with_random(shared.clone());
        let mut second = DataFactory::with_random(shared);

        let mut reference = JavaRandom::new(42);
        assert_eq!(first.number(), reference.next_i32());
        assert_eq!(second.number(), reference.next_i32());
        assert_eq!(first.number(), reference.next_i32());
    }

    #[test]
    fn test_shared_default_source_is_process_wide() {
        let mut first = DataFactory::create_with_shared_default_source();
        let second = DataFactory::create_with_shared_default_source();

        assert!(first.random_mut().same_stream(&second.random));
    }

    #[test]
    fn test_swapped_tables_are_used() {
        let tables = ValueTables::from_yaml(
            r#"
names:
  first_names: [Ada]
  last_names: [Lovelace]
address:
  cities: [Springfield]
"#,
        )
        .unwrap();
        let mut factory = DataFactory::with_seed(1).with_tables(tables);

        assert_eq!(factory.name().unwrap(), "Ada Lovelace");
        assert_eq!(factory.city().unwrap(), "Springfield");
    }

    #[test]
    fn test_tables_are_shared_between_factories() {
        let content: Arc<dyn ContentValues> = Arc::new(ContentTable::with_words(["shared"]));
        let mut first = DataFactory::with_seed(1).with_content_values(content.clone());
        let mut second = DataFactory::with_seed(2).with_content_values(content.clone());

        assert_eq!(first.word().unwrap(), "shared");
        assert_eq!(second.word().unwrap(), "shared");
        assert_eq!(Arc::strong_count(&content), 3);
    }

    #[test]
    fn test_empty_table_fails_lazily() {
        let mut factory = DataFactory::with_seed(1);
        factory.set_content_values(Arc::new(ContentTable::with_words(Vec::<String>::new())));

        // Tables that are still populated keep working
        assert!(factory.name().is_ok());
        assert_eq!(
            factory.word_between(2, 6),
            Err(GeneratorError::EmptyCollection("words"))
        );
    }

    #[test]
    fn test_address_line2_or_default() {
        let mut factory = DataFactory::with_seed(1);

        assert_eq!(factory.address_line2_or(0, "none").unwrap(), "none");
        assert_ne!(factory.address_line2_or(100, "none").unwrap(), "none");
    }

    #[test]
    fn test_item_helpers() {
        let mut factory = DataFactory::with_seed(1);
        let items = ["red", "green", "blue"];

        assert!(items.contains(factory.item(&items).unwrap()));
        assert_eq!(factory.item_with_probability(&items, 0).unwrap(), None);
        assert_eq!(factory.item_or(&items, 0, "none").unwrap(), "none");

        let empty: Vec<&str> = Vec::new();
        assert_eq!(
            factory.item(&empty),
            Err(GeneratorError::EmptyCollection("items"))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GeneratorError::InvalidRange { min: 10, max: 2 }.to_string(),
            "Invalid range: min=10, max=2"
        );
        assert_eq!(
            GeneratorError::EmptyCollection("cities").to_string(),
            "Cannot choose from empty table: cities"
        );
    }
}
