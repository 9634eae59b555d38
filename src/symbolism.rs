// File: src/symbolism.rs
//! Traditional symbolic readings of well-known gematria values.

pub const GENERAL_MEANING: &str = "מספר כללי (General number)";

/// The symbolic meaning of a value: the 22 letters, the Tetragrammaton (26),
/// the 32 paths, the 42-letter Name and the 72 Names. Anything else gets
/// [`GENERAL_MEANING`].
pub fn meaning(n: i64) -> &'static str {
    match n {
        1 => "א - אחדות, אלוהים (Unity, God)",
        2 => "ב - ברכה, בית (Blessing, House)",
        3 => "ג - גמול, גדולה (Reward, Greatness)",
        4 => "ד - דעת, דלת (Knowledge, Door)",
        5 => "ה - הארה, חיים (Illumination, Life)",
        6 => "ו - וודאות, חיבור (Certainty, Connection)",
        7 => "ז - זוהר, מזל (Radiance, Fortune)",
        8 => "ח - חיים, חסד (Life, Grace)",
        9 => "ט - טוב, טהרה (Goodness, Purity)",
        10 => "י - יד, יסוד (Hand, Foundation)",
        11 => "כ - כוח, כבוד (Strength, Honor)",
        12 => "ל - לימוד, לב (Study, Heart)",
        13 => "מ - מים, מצוות (Water, Commandments)",
        14 => "נ - נשמה, נצח (Soul, Eternity)",
        15 => "ס - סוד, סגולה (Secret, Virtue)",
        16 => "ע - עין, עולם (Eye, World)",
        17 => "פ - פה, פלא (Mouth, Wonder)",
        18 => "צ - צדק, צמח (Justice, Growth)",
        19 => "ק - קודש, קומה (Holiness, Stature)",
        20 => "ר - רוח, רחמים (Spirit, Mercy)",
        21 => "ש - שלום, שמים (Peace, Heavens)",
        22 => "ת - תורה, תשובה (Torah, Repentance)",
        26 => "יהוה - The Name of God",
        32 => "32 paths of wisdom",
        42 => "42-letter Divine Name",
        72 => "72 names of God",
        _ => GENERAL_MEANING,
    }
}
