use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GlyphConfig {
    pub vowels: BTreeMap<String, String>,
    pub consonants: BTreeMap<String, String>,
    pub marks: MarksConfig,
    #[serde(default)]
    pub foreign: Vec<ForeignRule>,
}

#[derive(Debug, Deserialize)]
pub struct MarksConfig {
    pub kudlit_i: String,
    pub kudlit_o: String,
    pub virama: String,
}

#[derive(Debug, Deserialize)]
pub struct ForeignRule {
    pub from: String,
    pub to: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GlyphConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[vowels] is missing letter: {0}")]
    MissingVowel(char),
    #[error("[vowels] has a non-vowel key: {0}")]
    UnknownVowel(String),
    #[error("[consonants] table is empty")]
    Empty,
    #[error("consonant key must be one or two lowercase ASCII letters: {0}")]
    BadConsonantKey(String),
    #[error("value for {0} must be a single code point")]
    NotASingleGlyph(String),
    #[error("bad foreign rule for {from}: {reason}")]
    BadForeignRule { from: String, reason: String },
    #[error("glyph table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a validated glyph configuration.
pub fn parse_glyph_toml(toml_str: &str) -> Result<GlyphConfig, GlyphConfigError> {
    let config: GlyphConfig =
        toml::from_str(toml_str).map_err(|e| GlyphConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn check_single_glyph(field: &str, value: &str) -> Result<(), GlyphConfigError> {
    if value.chars().count() != 1 {
        return Err(GlyphConfigError::NotASingleGlyph(field.to_string()));
    }
    Ok(())
}

fn bad_rule(from: &str, reason: &str) -> GlyphConfigError {
    GlyphConfigError::BadForeignRule {
        from: from.to_string(),
        reason: reason.to_string(),
    }
}

fn validate(config: &GlyphConfig) -> Result<(), GlyphConfigError> {
    for v in ['a', 'e', 'i', 'o', 'u'] {
        if !config.vowels.contains_key(v.to_string().as_str()) {
            return Err(GlyphConfigError::MissingVowel(v));
        }
    }
    for (key, value) in &config.vowels {
        if key.chars().count() != 1 || !"aeiou".contains(key.as_str()) {
            return Err(GlyphConfigError::UnknownVowel(key.clone()));
        }
        check_single_glyph(&format!("vowels.{key}"), value)?;
    }

    if config.consonants.is_empty() {
        return Err(GlyphConfigError::Empty);
    }
    for (key, value) in &config.consonants {
        let len = key.chars().count();
        if !(1..=2).contains(&len) || !key.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(GlyphConfigError::BadConsonantKey(key.clone()));
        }
        check_single_glyph(&format!("consonants.{key}"), value)?;
    }

    check_single_glyph("marks.kudlit_i", &config.marks.kudlit_i)?;
    check_single_glyph("marks.kudlit_o", &config.marks.kudlit_o)?;
    check_single_glyph("marks.virama", &config.marks.virama)?;

    let mut seen = HashSet::new();
    for rule in &config.foreign {
        let mut from_chars = rule.from.chars();
        let (Some(from), None) = (from_chars.next(), from_chars.next()) else {
            return Err(bad_rule(&rule.from, "source must be a single character"));
        };
        if config.vowels.contains_key(rule.from.as_str())
            || config.consonants.contains_key(rule.from.as_str())
        {
            return Err(bad_rule(&rule.from, "source is already a native letter"));
        }
        if !seen.insert(from) {
            return Err(bad_rule(&rule.from, "duplicate source"));
        }
        if rule.to.is_empty() {
            return Err(bad_rule(&rule.from, "replacement is empty"));
        }
        // Replacements must land on native letters so normalization stays
        // idempotent: a second pass finds nothing left to rewrite.
        for c in rule.to.chars() {
            let s = c.to_string();
            if !config.vowels.contains_key(s.as_str())
                && !config.consonants.contains_key(s.as_str())
            {
                return Err(bad_rule(&rule.from, "replacement contains a non-native letter"));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baybayin::table::DEFAULT_GLYPHS_TOML;

    #[test]
    fn parse_default_toml() {
        let config = parse_glyph_toml(DEFAULT_GLYPHS_TOML).unwrap();
        assert_eq!(config.vowels.len(), 5);
        assert_eq!(config.consonants.len(), 15);
        assert_eq!(config.foreign.len(), 8);
        assert_eq!(config.marks.virama, "\u{1714}");
    }

    #[test]
    fn parse_minimal_toml() {
        let toml = r#"
[vowels]
a = "ᜀ"
e = "ᜁ"
i = "ᜁ"
o = "ᜂ"
u = "ᜂ"

[consonants]
k = "ᜃ"

[marks]
kudlit_i = "ᜒ"
kudlit_o = "ᜓ"
virama = "᜔"
"#;
        let config = parse_glyph_toml(toml).unwrap();
        assert_eq!(config.consonants.len(), 1);
        assert!(config.foreign.is_empty());
    }

    #[test]
    fn error_missing_vowel() {
        let toml = r#"
[vowels]
a = "ᜀ"

[consonants]
k = "ᜃ"

[marks]
kudlit_i = "ᜒ"
kudlit_o = "ᜓ"
virama = "᜔"
"#;
        let err = parse_glyph_toml(toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::MissingVowel('e')));
    }

    #[test]
    fn error_non_vowel_key() {
        let toml = r#"
[vowels]
a = "ᜀ"
e = "ᜁ"
i = "ᜁ"
o = "ᜂ"
u = "ᜂ"
w = "ᜏ"

[consonants]
k = "ᜃ"

[marks]
kudlit_i = "ᜒ"
kudlit_o = "ᜓ"
virama = "᜔"
"#;
        let err = parse_glyph_toml(toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::UnknownVowel(ref k) if k == "w"));
    }

    #[test]
    fn error_empty_consonants() {
        let toml = r#"
[vowels]
a = "ᜀ"
e = "ᜁ"
i = "ᜁ"
o = "ᜂ"
u = "ᜂ"

[consonants]

[marks]
kudlit_i = "ᜒ"
kudlit_o = "ᜓ"
virama = "᜔"
"#;
        let err = parse_glyph_toml(toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::Empty));
    }

    #[test]
    fn error_multi_char_glyph() {
        let toml = r#"
[vowels]
a = "ᜀᜀ"
e = "ᜁ"
i = "ᜁ"
o = "ᜂ"
u = "ᜂ"

[consonants]
k = "ᜃ"

[marks]
kudlit_i = "ᜒ"
kudlit_o = "ᜓ"
virama = "᜔"
"#;
        let err = parse_glyph_toml(toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::NotASingleGlyph(ref f) if f == "vowels.a"));
    }

    #[test]
    fn error_long_consonant_key() {
        let toml = r#"
[vowels]
a = "ᜀ"
e = "ᜁ"
i = "ᜁ"
o = "ᜂ"
u = "ᜂ"

[consonants]
ngg = "ᜅ"

[marks]
kudlit_i = "ᜒ"
kudlit_o = "ᜓ"
virama = "᜔"
"#;
        let err = parse_glyph_toml(toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::BadConsonantKey(ref k) if k == "ngg"));
    }

    #[test]
    fn error_foreign_rule_native_source() {
        let toml = r#"
[vowels]
a = "ᜀ"
e = "ᜁ"
i = "ᜁ"
o = "ᜂ"
u = "ᜂ"

[consonants]
k = "ᜃ"

[marks]
kudlit_i = "ᜒ"
kudlit_o = "ᜓ"
virama = "᜔"

[[foreign]]
from = "k"
to = "k"
"#;
        let err = parse_glyph_toml(toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::BadForeignRule { ref from, .. } if from == "k"));
    }

    #[test]
    fn error_foreign_rule_non_native_target() {
        let toml = r#"
[vowels]
a = "ᜀ"
e = "ᜁ"
i = "ᜁ"
o = "ᜂ"
u = "ᜂ"

[consonants]
k = "ᜃ"

[marks]
kudlit_i = "ᜒ"
kudlit_o = "ᜓ"
virama = "᜔"

[[foreign]]
from = "c"
to = "qa"
"#;
        let err = parse_glyph_toml(toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::BadForeignRule { ref from, .. } if from == "c"));
    }

    #[test]
    fn error_duplicate_foreign_source() {
        let toml = r#"
[vowels]
a = "ᜀ"
e = "ᜁ"
i = "ᜁ"
o = "ᜂ"
u = "ᜂ"

[consonants]
k = "ᜃ"

[marks]
kudlit_i = "ᜒ"
kudlit_o = "ᜓ"
virama = "᜔"

[[foreign]]
from = "c"
to = "k"

[[foreign]]
from = "c"
to = "k"
"#;
        let err = parse_glyph_toml(toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::BadForeignRule { ref reason, .. } if reason == "duplicate source"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_glyph_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, GlyphConfigError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[vowels]
a = "ᜀ"
e = "ᜁ"
i = "ᜁ"
o = "ᜂ"
u = "ᜂ"
"#;
        let err = parse_glyph_toml(toml).unwrap_err();
        assert!(matches!(err, GlyphConfigError::Parse(_)));
    }
}
