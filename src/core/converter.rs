// File: src/core/converter.rs
use crate::core::alphabet::{self, MAX_HEBREW_VALUE};
use crate::error::{GematriaError, Result};
use unicode_general_category::{get_general_category, GeneralCategory};

pub const SEQUENCE_SEPARATOR: &str = ".";

/// Latin letters cover values 1..=26 (A..=Z).
const MAX_LATIN_VALUE: u32 = 26;

/// Converts words to dot-separated numeric sequences and back.
///
/// Encoding is letter-set agnostic: Hebrew letters take their alphabet value,
/// any other letter takes `uppercase - 'A' + 1`, everything else is dropped.
/// Decoding resolves each number Hebrew-first, see [`SequenceConverter::decode_value`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceConverter;

impl SequenceConverter {
    pub fn new() -> Self {
        Self
    }

    /// Encodes a word as `v1.v2.v3`. A word with no encodable letters yields `""`.
    pub fn encode(&self, word: &str) -> Result<String> {
        let values = self.encode_values(word)?;
        let parts: Vec<String> = values.iter().map(u32::to_string).collect();
        Ok(parts.join(SEQUENCE_SEPARATOR))
    }

    /// Per-letter values of a word, in original order.
    pub fn encode_values(&self, word: &str) -> Result<Vec<u32>> {
        let mut values = Vec::new();
        for c in word.trim().chars() {
            if let Some(value) = self.letter_value(c)? {
                values.push(value);
            }
        }
        Ok(values)
    }

    /// Value of a single character, or `None` if the encoder skips it.
    pub fn letter_value(&self, c: char) -> Result<Option<u32>> {
        if let Some(value) = alphabet::hebrew_value(c) {
            return Ok(Some(value));
        }
        if is_encodable_letter(c) {
            return self.latin_value(c).map(Some);
        }
        Ok(None)
    }

    /// `uppercase(c) - 'A' + 1`, so `a`/`A` is 1 and `z`/`Z` is 26.
    ///
    /// Letters outside A..Z follow the same formula on their code point.
    /// Fails when the uppercase form is more than one character.
    pub fn latin_value(&self, c: char) -> Result<u32> {
        let mut upper = c.to_uppercase();
        let first = upper.next().ok_or(GematriaError::UnencodableLetter(c))?;
        if upper.next().is_some() || first < 'A' {
            return Err(GematriaError::UnencodableLetter(c));
        }
        Ok(first as u32 - 'A' as u32 + 1)
    }

    /// Decodes a dot-separated sequence. Tokens that are not decimal numbers,
    /// or fall outside 1..=26, are skipped.
    pub fn decode(&self, sequence: &str) -> String {
        sequence
            .split(SEQUENCE_SEPARATOR)
            .filter_map(parse_token)
            .filter_map(|value| self.decode_value(value))
            .collect()
    }

    /// Maps one number back to a letter.
    ///
    /// The Hebrew range 1..=22 takes priority over the Latin range 1..=26, so
    /// only 23..=26 ever decode to Latin (`W`, `X`, `Y`, `Z`). Final forms are
    /// never produced.
    pub fn decode_value(&self, value: u32) -> Option<char> {
        if (1..=MAX_HEBREW_VALUE).contains(&value) {
            alphabet::canonical_letter(value)
        } else if (1..=MAX_LATIN_VALUE).contains(&value) {
            char::from_u32(value + 'A' as u32 - 1)
        } else {
            None
        }
    }
}

/// True when the input looks like an encoded sequence: at least one
/// separator, and every token a non-empty run of ASCII digits.
pub fn is_encoded_sequence(input: &str) -> bool {
    input.contains(SEQUENCE_SEPARATOR) && input.split(SEQUENCE_SEPARATOR).all(is_decimal_token)
}

fn is_decimal_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn parse_token(token: &str) -> Option<u32> {
    if !is_decimal_token(token) {
        return None;
    }
    // Anything too large for u32 is out of range anyway.
    token.parse().ok()
}

/// Letters in the Unicode sense: general category L*. Combining marks
/// (niqqud, Indic vowel signs), symbols such as `Ⓐ` and letter-like
/// numerals such as `Ⅻ` are not letters even when Alphabetic.
fn is_encodable_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
