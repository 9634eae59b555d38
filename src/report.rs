// File: src/report.rs
//! Human-readable rendering of an [`Analysis`].
//!
//! All functions build a `String`; the binary decides where it goes.

use crate::core::alphabet;
use crate::core::types::{Analysis, LetterKind};
use crossterm::style::{style, Stylize};
use std::fmt::{self, Write};

const SQRT_PRECISION: usize = 4;
const REPORT_RULE_WIDTH: usize = 80;
const TABLE_RULE_WIDTH: usize = 70;
const TABLE_ROW_LEN: usize = 5;

pub const USAGE: &str = "\
שימוש: gematria <מילה_עברית>
Usage: gematria <hebrew_word>
דוגמה: gematria שלום
דוגמה: gematria \"21.12.6.13\" (לפענוח)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Style headings and labels with terminal colors.
    pub color: bool,
    /// Append the alphabet correspondence table.
    pub show_alphabet_table: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            color: true,
            show_alphabet_table: true,
        }
    }
}

struct Painter {
    color: bool,
}

impl Painter {
    fn heading(&self, text: &str) -> String {
        if self.color {
            style(text).bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn title(&self, text: &str) -> String {
        if self.color {
            style(text).bold().yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, text: &str) -> String {
        if self.color {
            style(text).green().to_string()
        } else {
            text.to_string()
        }
    }
}

/// The full report for one analysis, alphabet table included unless disabled.
pub fn render(analysis: &Analysis, options: &ReportOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, analysis, options);
    if options.show_alphabet_table {
        out.push_str(&render_alphabet_table(options));
    }
    out
}

/// Line announcing that the input was a sequence and what it decoded to.
pub fn render_decoded_banner(sequence: &str, word: &str) -> String {
    format!("🔓 רצף מפוענח : {} → {}", sequence, word)
}

pub fn render_error(err: &dyn fmt::Display) -> String {
    format!("❌ שגיאה (Error) : {}", err)
}

/// Base letters five to a row in value order, then the final forms.
pub fn render_alphabet_table(options: &ReportOptions) -> String {
    let painter = Painter { color: options.color };
    let mut out = String::new();
    let _ = write_alphabet_table(&mut out, &painter);
    out
}

fn write_report(out: &mut String, analysis: &Analysis, options: &ReportOptions) -> fmt::Result {
    let p = Painter { color: options.color };
    let number = &analysis.number;
    let rule = "=".repeat(REPORT_RULE_WIDTH);

    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", p.title(&format!("ניתוח מלא של המילה העברית: '{}'", analysis.word)))?;
    writeln!(out, "{}", p.title(&format!("COMPLETE ANALYSIS OF HEBREW WORD: '{}'", analysis.word)))?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "\n{}", p.heading("מידע כללי (General Information)"))?;
    field(out, &p, "המילה המקורית", &analysis.word)?;
    field(out, &p, "אורך המילה", &format!("{} תווים", analysis.length))?;
    let palindrome = if analysis.is_palindrome { "כן (Yes)" } else { "לא (No)" };
    field(out, &p, "האם פלינדרום?", &palindrome)?;

    writeln!(out, "\n{}", p.heading("קידוד עברי (Hebrew Encoding)"))?;
    field(out, &p, "רצף מספרי", &analysis.sequence)?;
    field(out, &p, "מילה מפוענחת (לאימות)", &analysis.decoded)?;
    field(out, &p, "ערך מספרי כולל", &analysis.value)?;

    writeln!(out, "\n{}", p.heading("גימטריה (Gematria)"))?;
    field(out, &p, "ערך גימטריה", &analysis.gematria.simple)?;
    field(out, &p, "משמעות", &number.meaning)?;

    writeln!(out, "\n{}", p.heading("ניתוח מספרי של הערך הכולל (Numeric Analysis)"))?;
    field(out, &p, "עשרוני", &number.decimal)?;
    field(out, &p, "hexadecimal", &number.hexadecimal)?;
    field(out, &p, "בינארי", &number.binary)?;
    field(out, &p, "octal", &number.octal)?;

    writeln!(out)?;
    field(out, &p, "זוגיות", &number.parity)?;
    let factors: Vec<String> = number.factors.iter().map(|f| f.to_string()).collect();
    field(out, &p, "גורמים", &factors.join(", "))?;
    field(out, &p, "ראשוני או מרוכב", &number.prime_status)?;
    field(out, &p, "סכום ספרות", &number.digit_sum)?;

    writeln!(out)?;
    field(out, &p, "ריבוע", &number.square)?;
    field(out, &p, "קובייה", &number.cube)?;
    if !number.square_root.is_nan() {
        let root = format!("{:.*}", SQRT_PRECISION, number.square_root);
        field(out, &p, "שורש ריבועי", &root)?;
    }

    writeln!(out, "\n{}", p.heading("הצפנה וחתימות (Encryption & Hashing)"))?;
    field(out, &p, "MD5", &number.digests.md5)?;
    field(out, &p, "SHA-256", &number.digests.sha256)?;
    field(out, &p, "Base64", &number.digests.base64)?;

    writeln!(out, "\n{}", p.heading("פירוט קידוד אות-אות (Encoding Details Letter by Letter)"))?;
    for detail in &analysis.letters {
        let name = match detail.kind {
            LetterKind::Hebrew { name } => name,
            LetterKind::Latin => "לטיני/latin",
        };
        writeln!(
            out,
            "    {:2}. {} ({}) = {:2}",
            detail.position, detail.letter, name, detail.value
        )?;
    }
    Ok(())
}

fn field(out: &mut String, p: &Painter, label: &str, value: &dyn fmt::Display) -> fmt::Result {
    writeln!(out, "    {} : {}", p.label(label), value)
}

fn write_alphabet_table(out: &mut String, p: &Painter) -> fmt::Result {
    let rule = "=".repeat(TABLE_RULE_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "{}", p.title("טבלת התאמות אלפבית עברי מלאה"))?;
    writeln!(out, "{}", p.title("Complete Hebrew Alphabet Correspondence Table"))?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "{}", p.heading("אלפבית בסיסי (Basic Alphabet):"))?;
    let letters: Vec<(char, u32)> = alphabet::base_letters().collect();
    for row in letters.chunks(TABLE_ROW_LEN) {
        write_table_row(out, row)?;
    }

    writeln!(out, "\n{}", p.heading("צורות סופיות (Final Forms):"))?;
    let finals: Vec<(char, u32)> = alphabet::final_forms().collect();
    write_table_row(out, &finals)
}

fn write_table_row(out: &mut String, row: &[(char, u32)]) -> fmt::Result {
    for (letter, value) in row {
        write!(out, "{}={:2}  ", letter, value)?;
    }
    writeln!(out)
}
