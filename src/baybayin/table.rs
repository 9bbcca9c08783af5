use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_glyph_toml, GlyphConfig, GlyphConfigError};

pub const DEFAULT_GLYPHS_TOML: &str = include_str!("default_glyphs.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Immutable glyph inventory: vowels, base consonants, kudlit marks and
/// foreign-letter substitutions. Built once from TOML and shared globally.
pub struct GlyphTable {
    vowels: HashMap<char, char>,
    consonants: HashMap<String, char>,
    single_consonants: HashMap<char, char>,
    /// Multi-letter consonant spellings, longest first. Probed before
    /// single letters so "ng" never decomposes into "n" + "g".
    digraphs: Vec<String>,
    kudlit_i: char,
    kudlit_o: char,
    virama: char,
    foreign: Vec<(char, String)>,
}

impl GlyphTable {
    /// Set custom TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), GlyphConfigError> {
        // Validate eagerly
        parse_glyph_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| GlyphConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static GlyphTable {
        static INSTANCE: OnceLock<GlyphTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_GLYPHS_TOML);
            let config = parse_glyph_toml(toml_str).expect("glyph TOML must be valid");
            GlyphTable::from_config(config)
        })
    }

    fn from_config(config: GlyphConfig) -> Self {
        fn glyph(s: &str) -> char {
            s.chars().next().expect("validated as a single code point")
        }

        let vowels = config
            .vowels
            .iter()
            .map(|(k, v)| (glyph(k), glyph(v)))
            .collect();

        let mut consonants = HashMap::new();
        let mut single_consonants = HashMap::new();
        let mut digraphs = Vec::new();
        for (key, value) in &config.consonants {
            if key.chars().count() == 1 {
                single_consonants.insert(glyph(key), glyph(value));
            } else {
                digraphs.push(key.clone());
            }
            consonants.insert(key.clone(), glyph(value));
        }
        digraphs.sort_by(|a, b| b.len().cmp(&a.len()));

        let foreign = config
            .foreign
            .iter()
            .map(|rule| (glyph(&rule.from), rule.to.clone()))
            .collect();

        GlyphTable {
            vowels,
            consonants,
            single_consonants,
            digraphs,
            kudlit_i: glyph(&config.marks.kudlit_i),
            kudlit_o: glyph(&config.marks.kudlit_o),
            virama: glyph(&config.marks.virama),
            foreign,
        }
    }

    pub fn vowel(&self, c: char) -> Option<char> {
        self.vowels.get(&c).copied()
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains_key(&c)
    }

    /// Base glyph for a consonant spelling ("k", "ng", ...).
    pub fn consonant(&self, unit: &str) -> Option<char> {
        self.consonants.get(unit).copied()
    }

    pub fn is_consonant_letter(&self, c: char) -> bool {
        self.single_consonants.contains_key(&c)
    }

    /// All consonant spellings with their base glyphs.
    pub fn consonant_spellings(&self) -> impl Iterator<Item = (&str, char)> {
        self.consonants.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Length of the digraph starting at `chars[pos]`, if any.
    pub(super) fn digraph_len_at(&self, chars: &[char], pos: usize) -> Option<usize> {
        self.digraphs.iter().find_map(|d| {
            let n = d.chars().count();
            let fits = chars.len() - pos >= n;
            (fits && d.chars().eq(chars[pos..pos + n].iter().copied())).then_some(n)
        })
    }

    /// Split a span into its leading consonant unit's glyph and the rest,
    /// trying digraphs before single letters.
    pub(super) fn split_consonant_prefix<'a>(&self, s: &'a str) -> Option<(char, &'a str)> {
        for d in &self.digraphs {
            if let Some(rest) = s.strip_prefix(d.as_str()) {
                if let Some(&base) = self.consonants.get(d) {
                    return Some((base, rest));
                }
            }
        }
        let mut chars = s.chars();
        let first = chars.next()?;
        let base = self.single_consonants.get(&first).copied()?;
        Some((base, chars.as_str()))
    }

    /// The kudlit altering a base consonant's inherent vowel; `None` keeps
    /// the inherent `a`.
    pub fn kudlit_for(&self, vowel: char) -> Option<char> {
        match vowel {
            'i' | 'e' => Some(self.kudlit_i),
            'o' | 'u' => Some(self.kudlit_o),
            _ => None,
        }
    }

    pub fn virama(&self) -> char {
        self.virama
    }

    /// Ordered foreign-letter substitutions applied during normalization.
    pub fn foreign_substitutions(&self) -> &[(char, String)] {
        &self.foreign
    }
}
