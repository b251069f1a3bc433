//! Word and text synthesis.
//!
//! Words come from a corpus (see [`ContentValues::words`]). Lengths are
//! counted in `char`s and every length range is inclusive.
//!
//! [`ContentValues::words`]: datafactory_core::ContentValues::words

use crate::choice::{bound_for, chance, pick_named};
use crate::generator::GeneratorError;
use crate::random::RandomSource;

/// Gaussian draws are scaled by this factor to pick word lengths in text.
const WORD_LENGTH_SPREAD: f64 = 6.0;

pub(crate) fn check_range(min: usize, max: usize) -> Result<(), GeneratorError> {
    if min > max {
        return Err(GeneratorError::invalid_range(min, max));
    }
    Ok(())
}

/// Uniform length in `[min, max]`.
fn pick_length<R: RandomSource + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
) -> Result<usize, GeneratorError> {
    if min == max {
        return Ok(min);
    }

    let span = i32::try_from(max - min)
        .ok()
        .and_then(|span| span.checked_add(1))
        .ok_or_else(|| GeneratorError::invalid_range(min, max))?;
    Ok(min + rng.next_int(span)? as usize)
}

/// A random lowercase ASCII letter.
pub fn random_char<R: RandomSource + ?Sized>(rng: &mut R) -> Result<char, GeneratorError> {
    Ok(char::from(b'a' + rng.next_int(26)? as u8))
}

/// `length` random lowercase letters.
pub fn chars<R: RandomSource + ?Sized>(rng: &mut R, length: usize) -> Result<String, GeneratorError> {
    chars_between(rng, length, length)
}

/// Between `min` and `max` random lowercase letters.
pub fn chars_between<R: RandomSource + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
) -> Result<String, GeneratorError> {
    check_range(min, max)?;
    let length = pick_length(rng, min, max)?;
    (0..length).map(|_| random_char(rng)).collect()
}

/// Any word from the corpus.
pub fn word<R: RandomSource + ?Sized>(
    rng: &mut R,
    corpus: &[String],
) -> Result<String, GeneratorError> {
    Ok(pick_named(rng, corpus, "words")?.clone())
}

/// A word of exactly `length` characters.
pub fn word_of_length<R: RandomSource + ?Sized>(
    rng: &mut R,
    corpus: &[String],
    length: usize,
) -> Result<String, GeneratorError> {
    word_between(rng, corpus, length, length)
}

/// A word of exactly `length` characters when `exact`, otherwise at most `length`.
pub fn word_with_length<R: RandomSource + ?Sized>(
    rng: &mut R,
    corpus: &[String],
    length: usize,
    exact: bool,
) -> Result<String, GeneratorError> {
    if exact {
        word_between(rng, corpus, length, length)
    } else {
        word_between(rng, corpus, 0, length)
    }
}

/// A word whose length lies in `[min, max]`.
///
/// A one-character maximum always yields `"a"` or `"I"`. Otherwise the
/// corpus is scanned circularly from a random start and the first word that
/// fits is returned. When nothing in the corpus fits, random letters are
/// generated instead, so the result always satisfies the bounds.
pub fn word_between<R: RandomSource + ?Sized>(
    rng: &mut R,
    corpus: &[String],
    min: usize,
    max: usize,
) -> Result<String, GeneratorError> {
    check_range(min, max)?;

    if max == 1 {
        let word = if chance(rng, 50)? { "a" } else { "I" };
        return Ok(word.to_string());
    }

    match scan_corpus(rng, corpus, |length| (min..=max).contains(&length))? {
        Some(word) => Ok(word),
        None => {
            tracing::trace!(min, max, "No corpus word fits, generating letters");
            chars_between(rng, min, max)
        }
    }
}

/// First corpus word whose length satisfies `fits`, scanning circularly
/// from a random start.
fn scan_corpus<R, F>(rng: &mut R, corpus: &[String], fits: F) -> Result<Option<String>, GeneratorError>
where
    R: RandomSource + ?Sized,
    F: Fn(usize) -> bool,
{
    if corpus.is_empty() {
        return Err(GeneratorError::EmptyCollection("words"));
    }

    let start = rng.next_int(bound_for(corpus.len()))? as usize;
    Ok((0..corpus.len())
        .map(|i| &corpus[(start + i) % corpus.len()])
        .find(|word| fits(word.chars().count()))
        .cloned())
}

/// A word that does not strand a single character of budget.
///
/// Either the word fills `remaining` exactly or it leaves at least two
/// characters, room for a separator and one more word.
fn closing_word<R: RandomSource + ?Sized>(
    rng: &mut R,
    corpus: &[String],
    remaining: usize,
) -> Result<String, GeneratorError> {
    let shorter = 1..=remaining.saturating_sub(2);
    let fits = |length: usize| length == remaining || shorter.contains(&length);

    match scan_corpus(rng, corpus, fits)? {
        Some(word) => Ok(word),
        None => {
            tracing::trace!(remaining, "No corpus word closes the text, generating letters");
            chars(rng, remaining)
        }
    }
}

/// Text of exactly `length` characters.
pub fn text<R: RandomSource + ?Sized>(
    rng: &mut R,
    corpus: &[String],
    length: usize,
) -> Result<String, GeneratorError> {
    text_between(rng, corpus, length, length)
}

/// Space separated words with a total length in `[min, max]`.
///
/// Word lengths follow `1 + |N(0, 1)| * 6`, capped at the remaining
/// budget, so most words are short with the occasional long one. Each word
/// is drawn from the corpus with at most the capped length. When the cap
/// would allow a word leaving exactly one character of budget (too little
/// for a separator and another word), the word must either fill the budget
/// or leave at least two characters. The result never has a leading,
/// trailing or doubled separator.
pub fn text_between<R: RandomSource + ?Sized>(
    rng: &mut R,
    corpus: &[String],
    min: usize,
    max: usize,
) -> Result<String, GeneratorError> {
    check_range(min, max)?;
    let target = pick_length(rng, min, max)?;

    let mut text = String::with_capacity(target);
    let mut remaining = target;

    while remaining > 0 {
        if !text.is_empty() {
            text.push(' ');
            remaining -= 1;
        }

        let desired = (1.0 + rng.next_gaussian().abs() * WORD_LENGTH_SPREAD) as usize;
        let cap = desired.min(remaining);
        let word = if remaining >= 2 && remaining - 1 <= cap {
            closing_word(rng, corpus, remaining)?
        } else {
            word_between(rng, corpus, 1, cap)?
        };

        remaining -= word.chars().count();
        text.push_str(&word);
    }

    Ok(text)
}
