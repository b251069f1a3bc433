//! Seeded test data generator.
//!
//! This crate provides the [`DataFactory`] which produces plausible
//! synthetic values (names, addresses, words, text, numbers, dates and
//! emails) from a seeded random stream. The same seed and the same call
//! sequence always produce the same values.
//!
//! # Architecture
//!
//! ```text
//!   ValueTables (datafactory-core)
//!          │
//!          ▼
//! ┌──────────────────────┐
//! │     DataFactory      │
//! │                      │
//! │  - random (R)        │──── RandomSource: JavaRandom | SharedRandom
//! │  - names / address / │
//! │    content tables    │
//! └──────────┬───────────┘
//!            │
//!            ├── choice      (chance, pick)
//!            ├── text        (chars, word, text)
//!            └── generators  (names, address, numeric, timestamp, content)
//! ```
//!
//! # Example
//!
//! ```rust
//! use datafactory_generator::DataFactory;
//!
//! let mut factory = DataFactory::with_seed(73438);
//!
//! let text = factory.text(40).unwrap();
//! assert_eq!(text.chars().count(), 40);
//!
//! let word = factory.word_with_length(6, false).unwrap();
//! assert!(word.chars().count() <= 6);
//!
//! let email = factory.email_address().unwrap();
//! assert!(email.contains('@'));
//! ```
//!
//! # Sharing a stream
//!
//! Factories normally own their stream. To make several factories draw
//! from one stream, hand each a clone of a [`SharedRandom`]:
//!
//! ```rust
//! use datafactory_generator::{DataFactory, SharedRandom};
//!
//! let shared = SharedRandom::new(42);
//! let mut a = DataFactory::with_random(shared.clone());
//! let mut b = DataFactory::with_random(shared);
//!
//! // Draws through `a` move the stream that `b` sees
//! let _ = a.number();
//! let _ = b.number();
//! ```
//!
//! This is not a cryptographic generator.

pub mod choice;
pub mod generator;
pub mod generators;
pub mod random;
pub mod text;

// Re-exports for convenience
pub use generator::{DataFactory, GeneratorError};
pub use random::{JavaRandom, RandomSource, SharedRandom, DEFAULT_SEED};
