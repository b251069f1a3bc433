//! Composite generators.
//!
//! Each generator is a short composition of weighted choice over a value
//! table, the text engine, and the random stream. They take the stream and
//! the tables explicitly so they can be driven by any [`RandomSource`].
//!
//! [`RandomSource`]: crate::random::RandomSource

pub mod address;
pub mod content;
pub mod names;
pub mod numeric;
pub mod timestamp;
