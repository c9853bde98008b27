// Output formatting for analysis results.

use crate::types::{MorphemeKind, Parsing};

/// Convert a parsing to bracketed {morpheme:category} component format.
///
/// Format:
///   Prefixes: `{no-:prefix}` (trailing dash)
///   Stems:    `{teco:noun_stem}` (no dash)
///   Suffixes: `{-tl:suffix}` (leading dash)
pub fn to_bracketed(parsing: &Parsing) -> String {
    parsing
        .morphemes
        .iter()
        .map(|m| {
            let name = match m.details.kind() {
                MorphemeKind::Prefix => format!("{}-", m.morpheme),
                MorphemeKind::Suffix => format!("-{}", m.morpheme),
                _ => m.morpheme.clone(),
            };
            format!("{{{name}:{}}}", kind_tag(m.details.kind()))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn kind_tag(kind: MorphemeKind) -> &'static str {
    match kind {
        MorphemeKind::Prefix => "prefix",
        MorphemeKind::Suffix => "suffix",
        MorphemeKind::NounStem => "noun_stem",
        MorphemeKind::VerbStem => "verb_stem",
        MorphemeKind::Particle => "particle",
        MorphemeKind::Interrogative => "interrogative",
        MorphemeKind::Adverb => "adverb",
        MorphemeKind::Adjective => "adjective",
        MorphemeKind::Interjection => "interjection",
        MorphemeKind::Numeral => "numeral",
        MorphemeKind::IrregularVerb => "irregular_verb",
    }
}
