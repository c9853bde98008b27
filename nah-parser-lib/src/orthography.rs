// Deterministic rewriting between the two Nahuatl spelling conventions.
//
// Both directions first strip diacritics (macrons, saltillo accents) via NFD
// decomposition, then apply an ordered chain of substring replacements. The
// chains are order-sensitive: multi-letter clusters must rewrite before the
// single letters they contain.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const MODERN_TO_CLASSICAL: &[(&str, &str)] = &[
    ("iwkin", "yuhquin"),
    ("kis", "quiz"),
    ("kch", "cch"),
    ("kwa", "cua"),
    ("kwi", "cui"),
    ("kwe", "cue"),
    ("stl", "ztl"),
    ("aso", "azo"),
    ("ts", "tz"),
    ("sa", "za"),
    ("se", "ce"),
    ("si", "ci"),
    ("kk", "cqu"),
    ("ka", "ca"),
    ("ki", "qui"),
    ("ke", "que"),
    ("ok", "oc"),
    ("k", "c"),
    ("wa", "hua"),
    ("we", "hue"),
    ("wi", "hui"),
    ("aw", "auh"),
    ("ew", "euh"),
    ("iw", "iuh"),
];

const CLASSICAL_TO_MODERN: &[(&str, &str)] = &[
    ("z", "s"),
    ("yuh", "iw"),
    ("cua", "kwa"),
    ("cue", "kwe"),
    ("cui", "kwi"),
    ("qui", "ki"),
    ("que", "ke"),
    ("qu", "k"),
    ("ce", "se"),
    ("ci", "si"),
    ("c", "k"),
    ("kh", "ch"),
    ("uh", "w"),
    ("hu", "w"),
];

fn strip_diacritics(word: &str) -> String {
    word.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

fn apply_chain(word: &str, chain: &[(&str, &str)]) -> String {
    let mut out = strip_diacritics(word);
    for (from, to) in chain {
        out = out.replace(from, to);
    }
    out
}

/// Convert a word from modern orthography to classical orthography.
pub fn modern_to_classical(word: &str) -> String {
    apply_chain(word, MODERN_TO_CLASSICAL)
}

/// Convert a morpheme from classical orthography to modern orthography.
pub fn classical_to_modern(morpheme: &str) -> String {
    apply_chain(morpheme, CLASSICAL_TO_MODERN)
}
