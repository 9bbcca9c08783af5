use super::table::GlyphTable;

/// Lower-case and rewrite non-native letters to native approximations.
///
/// Substitution targets are native letters outside the foreign key set, so
/// applying the map once is idempotent: normalizing already-normalized text
/// is a no-op. Whitespace and punctuation pass through untouched.
pub fn normalize(text: &str) -> String {
    normalize_with(GlyphTable::global(), text)
}

pub(super) fn normalize_with(table: &GlyphTable, text: &str) -> String {
    let mut out = text.to_lowercase();
    for (from, to) in table.foreign_substitutions() {
        out = out.replace(*from, to);
    }
    out
}
