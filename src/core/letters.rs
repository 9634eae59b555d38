// File: src/core/letters.rs
//! Hebrew-only views of a word: gematria sum, palindrome check, letter sets.
//!
//! Unlike the encoder, everything here ignores Latin letters entirely.

use crate::core::alphabet;

/// The Hebrew letters of a word in original order, final forms kept as is.
pub fn hebrew_letters(word: &str) -> impl Iterator<Item = char> + '_ {
    word.chars().filter(|&c| alphabet::is_hebrew_letter(c))
}

/// Sum of the Hebrew letter values. Non-Hebrew characters contribute 0.
pub fn gematria_sum(word: &str) -> i64 {
    hebrew_letters(word)
        .filter_map(alphabet::hebrew_value)
        .map(i64::from)
        .sum()
}

/// True if the Hebrew letters read the same backwards. A word without
/// Hebrew letters is trivially a palindrome.
pub fn is_palindrome(word: &str) -> bool {
    let letters: Vec<char> = hebrew_letters(word).collect();
    letters.iter().eq(letters.iter().rev())
}

pub fn letter_count(word: &str) -> usize {
    hebrew_letters(word).count()
}

/// Distinct Hebrew letters sorted by value. A final form and its base letter
/// are distinct characters; the base form sorts first.
pub fn unique_letters(word: &str) -> String {
    let mut letters: Vec<char> = hebrew_letters(word).collect();
    letters.sort_by_key(|&c| (alphabet::hebrew_value(c), alphabet::is_final_form(c)));
    letters.dedup();
    letters.into_iter().collect()
}
