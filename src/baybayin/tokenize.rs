use serde::Serialize;

use super::table::GlyphTable;

/// Shape class of a tokenized span, in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenShape {
    /// Consonant unit followed by one vowel (open syllable).
    ConsonantVowel,
    /// Standalone vowel.
    Vowel,
    /// Bare consonant unit, rendered with the virama.
    Consonant,
    /// Character outside the native inventory, passed through untouched.
    Literal,
}

impl TokenShape {
    pub fn label(&self) -> &'static str {
        match self {
            TokenShape::ConsonantVowel => "CV",
            TokenShape::Vowel => "V",
            TokenShape::Consonant => "C",
            TokenShape::Literal => "lit",
        }
    }
}

/// One syllable-shaped span of a normalized word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableToken {
    pub text: String,
    pub shape: TokenShape,
}

impl SyllableToken {
    fn new(chars: &[char], shape: TokenShape) -> Self {
        SyllableToken {
            text: chars.iter().collect(),
            shape,
        }
    }
}

/// Split a whitespace-free word into syllable-shaped spans.
///
/// Scans left to right, committing to the first shape that matches at each
/// position: consonant-plus-vowel, then vowel, then bare consonant. The
/// digraph "ng" is probed as one unit before "n" alone. First-match-wins is
/// deliberate: it splits consonant clusters into bare-consonant units
/// ("sta" becomes "s" + "ta") instead of failing on them. Unrecognized
/// characters become single-char literal tokens, so every word decomposes
/// completely: the token texts concatenate back to the input.
pub fn tokenize(word: &str) -> Vec<SyllableToken> {
    tokenize_with(GlyphTable::global(), word)
}

pub(super) fn tokenize_with(table: &GlyphTable, word: &str) -> Vec<SyllableToken> {
    let chars: Vec<char> = word.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if let Some(len) = match_consonant_vowel(table, &chars, pos) {
            tokens.push(SyllableToken::new(
                &chars[pos..pos + len],
                TokenShape::ConsonantVowel,
            ));
            pos += len;
        } else if table.is_vowel(chars[pos]) {
            tokens.push(SyllableToken::new(&chars[pos..pos + 1], TokenShape::Vowel));
            pos += 1;
        } else if let Some(len) = match_consonant(table, &chars, pos) {
            tokens.push(SyllableToken::new(
                &chars[pos..pos + len],
                TokenShape::Consonant,
            ));
            pos += len;
        } else {
            tokens.push(SyllableToken::new(
                &chars[pos..pos + 1],
                TokenShape::Literal,
            ));
            pos += 1;
        }
    }

    tokens
}

/// Consonant unit at `pos`: digraph first, then a single letter.
fn match_consonant(table: &GlyphTable, chars: &[char], pos: usize) -> Option<usize> {
    if let Some(len) = table.digraph_len_at(chars, pos) {
        return Some(len);
    }
    table.is_consonant_letter(chars[pos]).then_some(1)
}

/// Consonant unit plus exactly one vowel. Falls back from the digraph to the
/// single letter when only the shorter unit is vowel-followed ("nga" matches
/// as one span, "na" still matches inside "nag").
fn match_consonant_vowel(table: &GlyphTable, chars: &[char], pos: usize) -> Option<usize> {
    if let Some(len) = table.digraph_len_at(chars, pos) {
        if chars.get(pos + len).is_some_and(|&c| table.is_vowel(c)) {
            return Some(len + 1);
        }
    }
    if table.is_consonant_letter(chars[pos]) && chars.get(pos + 1).is_some_and(|&c| table.is_vowel(c))
    {
        return Some(2);
    }
    None
}
