use crate::core::converter::{is_encoded_sequence, SequenceConverter};
use crate::core::types::{Analysis, GematriaDetail, LetterDetail, LetterKind};
use crate::core::{alphabet, letters};
use crate::error::Result;
use crate::numeric::analyze_number;
use tracing::{debug, info};

/// The outcome of analysing one command-line input.
#[derive(Debug, Clone)]
pub struct InputAnalysis {
    /// The numeric sequence the word was decoded from, if the input was one.
    pub decoded_from: Option<String>,
    pub analysis: Analysis,
}

/// Runs the encode -> sum -> analyse pipeline for a word.
#[derive(Debug, Default)]
pub struct GematriaEngine {
    converter: SequenceConverter,
}

impl GematriaEngine {
    pub fn new() -> Self {
        Self {
            converter: SequenceConverter::new(),
        }
    }

    /// Analyses raw input: a dot-separated numeric sequence is decoded first,
    /// anything else is taken as the word itself.
    pub fn analyze_input(&self, input: &str) -> Result<InputAnalysis> {
        let input = input.trim();
        if is_encoded_sequence(input) {
            let word = self.converter.decode(input);
            info!(sequence = input, word = %word, "decoded numeric sequence");
            let analysis = self.analyze_word(&word)?;
            return Ok(InputAnalysis {
                decoded_from: Some(input.to_string()),
                analysis,
            });
        }
        info!(word = input, "analysing word");
        Ok(InputAnalysis {
            decoded_from: None,
            analysis: self.analyze_word(input)?,
        })
    }

    pub fn analyze_word(&self, word: &str) -> Result<Analysis> {
        let sequence = self.converter.encode(word)?;
        let value = letters::gematria_sum(word);
        debug!(sequence = %sequence, value, "encoded word");

        // Only a display aid; Latin letters and final forms do not survive it.
        let decoded = self.converter.decode(&sequence);

        Ok(Analysis {
            word: word.to_string(),
            length: word.chars().count(),
            sequence,
            value,
            decoded,
            is_palindrome: letters::is_palindrome(word),
            letter_count: letters::letter_count(word),
            unique_letters: letters::unique_letters(word),
            gematria: self.gematria_detail(word),
            letters: self.letter_details(word)?,
            number: analyze_number(value)?,
        })
    }

    pub fn gematria_detail(&self, word: &str) -> GematriaDetail {
        let simple = letters::gematria_sum(word);
        GematriaDetail {
            simple,
            milui: simple,
            description: format!("Gematria: {}", simple),
        }
    }

    /// Per-character breakdown. Positions count every character of the word,
    /// skipped ones included, so they line up with what the user typed.
    pub fn letter_details(&self, word: &str) -> Result<Vec<LetterDetail>> {
        let mut details = Vec::new();
        for (idx, c) in word.chars().enumerate() {
            let Some(value) = self.converter.letter_value(c)? else {
                continue;
            };
            let kind = match alphabet::letter_name(c) {
                Some(name) => LetterKind::Hebrew { name },
                None => LetterKind::Latin,
            };
            details.push(LetterDetail {
                position: idx + 1,
                letter: c,
                value,
                kind,
            });
        }
        Ok(details)
    }
}
