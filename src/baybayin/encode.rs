use super::table::GlyphTable;
use super::tokenize::{SyllableToken, TokenShape};

/// Render one syllable token as Baybayin code points.
///
/// Vowel tokens map to the standalone vowel glyph; bare consonants get the
/// virama; consonant-vowel spans get the base glyph with the kudlit the
/// vowel calls for (`a` is inherent, no mark). Anything the tables cannot
/// place (literal tokens, or a leading unit missing from the consonant
/// table) comes back unchanged. Never errors.
pub fn encode(token: &SyllableToken) -> String {
    encode_with(GlyphTable::global(), token)
}

pub(super) fn encode_with(table: &GlyphTable, token: &SyllableToken) -> String {
    match token.shape {
        TokenShape::Vowel => match token.text.chars().next().and_then(|c| table.vowel(c)) {
            Some(glyph) => glyph.to_string(),
            None => token.text.clone(),
        },
        TokenShape::Consonant => match table.consonant(&token.text) {
            Some(base) => {
                let mut out = String::with_capacity(8);
                out.push(base);
                out.push(table.virama());
                out
            }
            None => token.text.clone(),
        },
        TokenShape::ConsonantVowel => {
            let Some((base, rest)) = table.split_consonant_prefix(&token.text) else {
                return token.text.clone();
            };
            let mut out = String::with_capacity(8);
            out.push(base);
            if let Some(mark) = rest.chars().next().and_then(|v| table.kudlit_for(v)) {
                out.push(mark);
            }
            out
        }
        TokenShape::Literal => token.text.clone(),
    }
}
