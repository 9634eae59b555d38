// File: src/core/alphabet.rs
//! The Hebrew alphabet as a bidirectional letter/number table.
//!
//! Letters map to their ordinal position 1..=22. The five final forms
//! (sofit) share the value of their base letter, so the reverse direction
//! only ever yields the base form: `ם` encodes as 13 and 13 decodes as `מ`.

/// The 22 base letters in value order; index `i` holds the letter worth `i + 1`.
pub const BASE_LETTERS: [char; 22] = [
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ',
    'ק', 'ר', 'ש', 'ת',
];

/// Final forms paired with the base letter they stand in for.
pub const FINAL_FORMS: [(char, char); 5] = [
    ('ך', 'כ'),
    ('ם', 'מ'),
    ('ן', 'נ'),
    ('ף', 'פ'),
    ('ץ', 'צ'),
];

/// Highest value a Hebrew letter can take.
pub const MAX_HEBREW_VALUE: u32 = BASE_LETTERS.len() as u32;

/// Returns the numeric value of a Hebrew letter, final forms included.
pub fn hebrew_value(letter: char) -> Option<u32> {
    let base = base_form(letter);
    BASE_LETTERS
        .iter()
        .position(|&c| c == base)
        .map(|idx| idx as u32 + 1)
}

/// Returns the canonical (non-final) letter for a value in 1..=22.
pub fn canonical_letter(value: u32) -> Option<char> {
    if value == 0 {
        return None;
    }
    BASE_LETTERS.get(value as usize - 1).copied()
}

pub fn is_hebrew_letter(c: char) -> bool {
    hebrew_value(c).is_some()
}

pub fn is_final_form(c: char) -> bool {
    FINAL_FORMS.iter().any(|&(f, _)| f == c)
}

/// Maps a final form to its base letter; any other character is returned as is.
pub fn base_form(c: char) -> char {
    FINAL_FORMS
        .iter()
        .find(|&&(f, _)| f == c)
        .map(|&(_, base)| base)
        .unwrap_or(c)
}

/// Base letters with their values, in value order.
pub fn base_letters() -> impl Iterator<Item = (char, u32)> {
    BASE_LETTERS
        .iter()
        .enumerate()
        .map(|(idx, &c)| (c, idx as u32 + 1))
}

/// Final forms with their (shared) values.
pub fn final_forms() -> impl Iterator<Item = (char, u32)> {
    FINAL_FORMS
        .iter()
        .filter_map(|&(f, _)| hebrew_value(f).map(|v| (f, v)))
}

/// Transliterated name of a Hebrew letter.
pub fn letter_name(letter: char) -> Option<&'static str> {
    match letter {
        'א' => Some("Aleph"), 'ב' => Some("Bet"), 'ג' => Some("Gimel"),
        'ד' => Some("Dalet"), 'ה' => Some("He"), 'ו' => Some("Vav"),
        'ז' => Some("Zayin"), 'ח' => Some("Chet"), 'ט' => Some("Tet"),
        'י' => Some("Yod"), 'כ' => Some("Kaf"), 'ל' => Some("Lamed"),
        'מ' => Some("Mem"), 'נ' => Some("Nun"), 'ס' => Some("Samech"),
        'ע' => Some("Ayin"), 'פ' => Some("Pe"), 'צ' => Some("Tsadi"),
        'ק' => Some("Kof"), 'ר' => Some("Resh"), 'ש' => Some("Shin"),
        'ת' => Some("Tav"),
        'ך' => Some("Kaf Sofit"), 'ם' => Some("Mem Sofit"), 'ן' => Some("Nun Sofit"),
        'ף' => Some("Pe Sofit"), 'ץ' => Some("Tsadi Sofit"),
        _ => None,
    }
}
