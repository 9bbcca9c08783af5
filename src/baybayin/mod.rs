//! Latin-Tagalog to Baybayin conversion engine.
//!
//! Rewrites non-native letters to native approximations, splits each word
//! into syllable-shaped spans with an ordered-choice scan, and maps every
//! span onto the Baybayin block (U+1700..U+1714) using kudlit and virama
//! marks. The glyph inventory is loaded from embedded TOML and can be
//! overridden once at startup via [`GlyphTable::init_custom`].

mod config;
mod convert;
mod encode;
mod explain;
mod normalize;
mod table;
mod tokenize;

#[cfg(test)]
mod tests;

pub use config::GlyphConfigError;
pub use convert::transliterate;
pub use encode::encode;
pub use explain::{explain, format_text, ExplainResult, ExplainToken, ExplainWord};
pub use normalize::normalize;
pub use table::{GlyphTable, DEFAULT_GLYPHS_TOML};
pub use tokenize::{tokenize, SyllableToken, TokenShape};
