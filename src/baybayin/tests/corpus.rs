use crate::baybayin::transliterate;

/// Full-phrase conversions, pinned against hand-checked glyph sequences.
const PHRASE_CORPUS: &[(&str, &str)] = &[
    ("kamusta", "ᜃᜋᜓᜐ᜔ᜆ"),
    ("maganda", "ᜋᜄᜈ᜔ᜇ"),
    ("salamat", "ᜐᜍᜋᜆ᜔"),
    ("ako", "ᜀᜃᜓ"),
    ("ikaw", "ᜁᜃᜏ᜔"),
    ("pilipinas", "ᜉᜒᜍᜒᜉᜒᜈᜐ᜔"),
    ("tagalog", "ᜆᜄᜍᜓᜄ᜔"),
    ("baybayin", "ᜊᜌ᜔ᜊᜌᜒᜈ᜔"),
    ("ngayon", "ᜅᜌᜓᜈ᜔"),
    ("mahal kita", "ᜋᜑᜍ᜔ ᜃᜒᜆ"),
    ("magandang umaga", "ᜋᜄᜈ᜔ᜇᜅ᜔ ᜂᜋᜄ"),
    ("salamat po", "ᜐᜍᜋᜆ᜔ ᜉᜓ"),
];

/// Phrases that need foreign-letter normalization first.
const FOREIGN_CORPUS: &[(&str, &str)] = &[
    // c -> k, f -> p
    ("cafe", "ᜃᜉᜒ"),
    // j -> dy
    ("jeep", "ᜇ᜔ᜌᜒᜁᜉ᜔"),
    // z -> s
    ("pizza", "ᜉᜒᜐ᜔ᜐ"),
    // q -> k
    ("quezon", "ᜃᜓᜁᜐᜓᜈ᜔"),
    // ñ -> ny
    ("niño", "ᜈᜒᜈ᜔ᜌᜓ"),
    // x -> ks
    ("taxi", "ᜆᜃ᜔ᜐᜒ"),
];

#[test]
fn phrase_corpus() {
    for &(input, expected) in PHRASE_CORPUS {
        let result = transliterate(input);
        assert_eq!(
            result, expected,
            "conversion mismatch: input={input:?}, expected={expected:?}, got={result:?}"
        );
    }
}

#[test]
fn foreign_letter_corpus() {
    for &(input, expected) in FOREIGN_CORPUS {
        let result = transliterate(input);
        assert_eq!(
            result, expected,
            "conversion mismatch: input={input:?}, expected={expected:?}, got={result:?}"
        );
    }
}

#[test]
fn corpus_is_case_insensitive() {
    for &(input, expected) in PHRASE_CORPUS {
        let upper = input.to_uppercase();
        assert_eq!(transliterate(&upper), expected, "uppercase input={upper:?}");
    }
}
