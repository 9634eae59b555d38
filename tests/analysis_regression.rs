//! End-to-end regression tests over the public API.
//!
//! Expected values are frozen: any change in output is a regression.

use gematria_core::core::converter::SequenceConverter;
use gematria_core::core::letters;
use gematria_core::numeric::{factorize, is_prime, square_root};
use gematria_core::report::{self, ReportOptions};
use gematria_core::{GematriaEngine, GematriaError};

// ═══════════════════════════════════════════════════════════════════════
// Encode / decode
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn shalom_encodes_and_decodes_to_base_forms() {
    let converter = SequenceConverter::new();
    assert_eq!(converter.encode("שלום").unwrap(), "21.12.6.13");
    assert_eq!(converter.decode("21.12.6.13"), "שלומ");
}

#[test]
fn hebrew_only_words_roundtrip() {
    let converter = SequenceConverter::new();
    for word in ["אבגדהוזחטיכלמנסעפצקרשת", "תורה", "אמת", "חיים"] {
        let encoded = converter.encode(word).unwrap();
        assert_eq!(converter.decode(&encoded), word, "roundtrip of {}", word);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Gematria and number theory
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn shalom_gematria_and_factors() {
    assert_eq!(letters::gematria_sum("שלום"), 52);
    assert!(!is_prime(52));
    assert_eq!(factorize(52), vec![2, 2, 13]);
}

#[test]
fn zero_edge_cases() {
    assert_eq!(factorize(0), vec![0]);
    assert!(!is_prime(0));
    assert_eq!(square_root(0), 0.0);
}

#[test]
fn double_aleph_is_palindrome() {
    assert!(letters::is_palindrome("אא"));
}

#[test]
fn chai_is_eighteen() {
    let analysis = GematriaEngine::new().analyze_word("חי").unwrap();
    assert_eq!(analysis.value, 18);
    assert_eq!(analysis.number.meaning, "צ - צדק, צמח (Justice, Growth)");
    assert_eq!(analysis.number.binary, "10010");
}

#[test]
fn tetragrammaton_is_twenty_six() {
    let analysis = GematriaEngine::new().analyze_word("יהוה").unwrap();
    assert_eq!(analysis.value, 26);
    assert_eq!(analysis.number.meaning, "יהוה - The Name of God");
    assert!(!analysis.is_palindrome);
    assert_eq!(analysis.unique_letters, "הוי");
}

// ═══════════════════════════════════════════════════════════════════════
// Digests
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn digests_are_of_the_decimal_text() {
    let analysis = GematriaEngine::new().analyze_word("שלום").unwrap();
    let digests = &analysis.number.digests;
    assert_eq!(digests.md5, "9a1158154dfa42caddbd0694a4e9bdc8");
    assert_eq!(
        digests.sha256,
        "41cfc0d1f2d127b04555b7246d84019b4d27710a3f3aff6e7764375b1e06e05d"
    );
    assert_eq!(digests.base64, "NTI=");
}

// ═══════════════════════════════════════════════════════════════════════
// Analysis result shape
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn analysis_serializes_as_flat_mapping() {
    let analysis = GematriaEngine::new().analyze_word("שלום").unwrap();
    let value = serde_json::to_value(&analysis).unwrap();
    let map = value.as_object().unwrap();

    for key in [
        "word",
        "length",
        "sequence",
        "value",
        "decoded",
        "is_palindrome",
        "letter_count",
        "unique_letters",
        "gematria",
        "letters",
        "decimal",
        "hexadecimal",
        "binary",
        "octal",
        "parity",
        "factors",
        "prime_status",
        "digit_sum",
        "digit_count",
        "square",
        "cube",
        "square_root",
        "md5",
        "sha256",
        "base64",
        "gematria_value",
        "meaning",
    ] {
        assert!(map.contains_key(key), "missing field {}", key);
    }
    assert!(!map.contains_key("number"));
    assert!(!map.contains_key("digests"));
    assert_eq!(map["sequence"], "21.12.6.13");
    assert_eq!(map["factors"], serde_json::json!([2, 2, 13]));
    assert_eq!(map["gematria"]["description"], "Gematria: 52");
}

// ═══════════════════════════════════════════════════════════════════════
// Input handling and errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn sequence_input_is_decoded_before_analysis() {
    let result = GematriaEngine::new().analyze_input("1.13.22").unwrap();
    assert_eq!(result.decoded_from.as_deref(), Some("1.13.22"));
    assert_eq!(result.analysis.word, "אמת");
    assert_eq!(result.analysis.value, 36);
}

#[test]
fn unencodable_letter_is_an_error() {
    let err = GematriaEngine::new().analyze_input("ß").unwrap_err();
    assert_eq!(err, GematriaError::UnencodableLetter('ß'));
    assert_eq!(
        report::render_error(&err),
        "❌ שגיאה (Error) : cannot encode letter 'ß': its uppercase form is not a single character"
    );
}

#[test]
fn full_plain_report_ends_with_table() {
    let analysis = GematriaEngine::new().analyze_word("שלום").unwrap();
    let options = ReportOptions {
        color: false,
        show_alphabet_table: true,
    };
    let text = report::render(&analysis, &options);
    assert!(text.starts_with(&"=".repeat(80)));
    assert!(text.trim_end().ends_with("ך=11  ם=13  ן=14  ף=17  ץ=18"));
}
