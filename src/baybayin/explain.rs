//! Diagnostic breakdown of the transliteration pipeline.
//!
//! Used by `baytool explain` to show how a phrase was normalized, which
//! syllable spans the tokenizer produced, and the glyphs each span maps to.

use std::fmt::Write as _;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::encode::encode_with;
use super::normalize::normalize_with;
use super::table::GlyphTable;
use super::tokenize::{tokenize_with, TokenShape};

/// One tokenized span with the glyphs it produced.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainToken {
    pub text: String,
    pub shape: TokenShape,
    pub glyphs: String,
}

/// One word of the normalized input, fully broken down.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainWord {
    pub word: String,
    pub tokens: Vec<ExplainToken>,
    pub baybayin: String,
}

/// Full explanation of a transliteration.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub normalized: String,
    pub words: Vec<ExplainWord>,
    pub baybayin: String,
}

/// Run the full pipeline, keeping the intermediate steps for display.
pub fn explain(text: &str) -> ExplainResult {
    let table = GlyphTable::global();
    let normalized = normalize_with(table, text);

    let words: Vec<ExplainWord> = normalized
        .split_whitespace()
        .map(|word| {
            let tokens: Vec<ExplainToken> = tokenize_with(table, word)
                .iter()
                .map(|token| ExplainToken {
                    text: token.text.clone(),
                    shape: token.shape,
                    glyphs: encode_with(table, token),
                })
                .collect();
            let baybayin = tokens.iter().map(|t| t.glyphs.as_str()).collect();
            ExplainWord {
                word: word.to_string(),
                tokens,
                baybayin,
            }
        })
        .collect();

    let baybayin = words
        .iter()
        .map(|w| w.baybayin.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    ExplainResult {
        input: text.to_string(),
        normalized,
        words,
        baybayin,
    }
}

/// Render an explanation as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "input:      {}", result.input);
    let _ = writeln!(out, "normalized: {}", result.normalized);
    let _ = writeln!(out, "baybayin:   {}", result.baybayin);

    for word in &result.words {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} -> {}", word.word, word.baybayin);
        // Pad by display width, not char count: kudlit and virama are
        // combining marks with zero columns.
        let text_width = word
            .tokens
            .iter()
            .map(|t| t.text.width())
            .max()
            .unwrap_or(0);
        for token in &word.tokens {
            let pad = text_width.saturating_sub(token.text.width());
            let _ = writeln!(
                out,
                "  {}{}  {:>3}  {}",
                token.text,
                " ".repeat(pad),
                token.shape.label(),
                token.glyphs
            );
        }
    }

    out
}
