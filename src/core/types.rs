// src/core/types.rs
use crate::digest::Digests;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn label(&self) -> &'static str {
        match self {
            Parity::Even => "זוגי (Even)",
            Parity::Odd => "אי-זוגי (Odd)",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrimeStatus {
    Prime,
    /// Everything that is not prime, including 0, 1 and negatives.
    Composite,
}

impl PrimeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PrimeStatus::Prime => "ראשוני (Prime)",
            PrimeStatus::Composite => "מרוכב (Composite)",
        }
    }
}

impl fmt::Display for PrimeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived properties of a single integer.
#[derive(Debug, Clone, Serialize)]
pub struct NumberAnalysis {
    pub decimal: i64,
    /// Uppercase, no prefix.
    pub hexadecimal: String,
    pub binary: String,
    pub octal: String,
    pub parity: Parity,
    pub factors: Vec<i64>,
    pub prime_status: PrimeStatus,
    pub digit_sum: u32,
    /// Length of the decimal rendering, sign included.
    pub digit_count: usize,
    pub square: i128,
    pub cube: i128,
    /// NaN for negative input.
    pub square_root: f64,
    #[serde(flatten)]
    pub digests: Digests,
    pub gematria_value: i64,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GematriaDetail {
    pub simple: i64,
    /// Full-spelling (milui) value. Only the basic variant is computed, so
    /// this currently equals `simple`.
    pub milui: i64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterKind {
    Hebrew { name: &'static str },
    Latin,
}

/// One encodable character of the original word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterDetail {
    /// 1-based position among all characters of the word.
    pub position: usize,
    pub letter: char,
    pub value: u32,
    pub kind: LetterKind,
}

/// Everything computed for one input word. Serializes as a flat field map.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub word: String,
    /// Length in characters.
    pub length: usize,
    pub sequence: String,
    pub value: i64,
    /// The sequence decoded again, for display only.
    pub decoded: String,
    pub is_palindrome: bool,
    pub letter_count: usize,
    pub unique_letters: String,
    pub gematria: GematriaDetail,
    pub letters: Vec<LetterDetail>,
    #[serde(flatten)]
    pub number: NumberAnalysis,
}
