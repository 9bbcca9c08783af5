/// Character-level Unicode classification for Baybayin text.

pub fn is_baybayin(c: char) -> bool {
    ('\u{1700}'..='\u{171F}').contains(&c)
}

/// Kudlit and virama combining marks.
pub fn is_baybayin_mark(c: char) -> bool {
    ('\u{1712}'..='\u{1714}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a string is rendered Baybayin: glyphs from the block separated
/// by ASCII spaces, nothing else.
pub fn is_baybayin_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_baybayin(c) || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_baybayin_text() {
        assert!(is_baybayin_text("ᜀᜃᜓ"));
        assert!(is_baybayin_text("ᜋᜑᜍ᜔ ᜃᜒᜆ"));
        assert!(!is_baybayin_text("ako"));
        assert!(!is_baybayin_text("ᜀᜃᜓ!"));
        assert!(!is_baybayin_text(""));
    }

    #[test]
    fn test_char_classification() {
        assert!(is_baybayin('ᜀ'));
        assert!(is_baybayin('᜔'));
        assert!(!is_baybayin('a'));
        assert!(is_baybayin_mark('ᜒ'));
        assert!(is_baybayin_mark('᜔'));
        assert!(!is_baybayin_mark('ᜀ'));
        assert!(is_latin('a'));
        assert!(!is_latin('ᜀ'));
    }
}
