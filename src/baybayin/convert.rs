use tracing::debug_span;

use super::encode::encode_with;
use super::normalize::normalize_with;
use super::table::GlyphTable;
use super::tokenize::tokenize_with;

/// Convert Latin-script Tagalog text to Baybayin.
///
/// Normalizes, splits on whitespace runs, transliterates each word
/// independently and rejoins with single ASCII spaces. Syllables within a
/// word stay contiguous, matching the script's convention. Total over any
/// input; empty input yields empty output.
pub fn transliterate(text: &str) -> String {
    transliterate_with(GlyphTable::global(), text)
}

pub(super) fn transliterate_with(table: &GlyphTable, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let _span = debug_span!("transliterate", len = text.len()).entered();

    let normalized = normalize_with(table, text);
    let words: Vec<String> = normalized
        .split_whitespace()
        .map(|word| transliterate_word(table, word))
        .collect();
    words.join(" ")
}

pub(super) fn transliterate_word(table: &GlyphTable, word: &str) -> String {
    tokenize_with(table, word)
        .iter()
        .map(|token| encode_with(table, token))
        .collect()
}
