// Hand-authored overrides for words whose correct readings the search cannot
// settle on its own. Exact-match lookup, checked before anything else.

use crate::lexicon::Lexicon;
use crate::types::{Morpheme, MorphemeKind, Number, ParsedMorpheme, Person, PrefixRole};

/// A surface word with its pre-authored alternative parses.
pub struct AmbiguousWord {
    pub word: String,
    pub parses: Vec<Vec<ParsedMorpheme>>,
}

/// Table of known ambiguous words, resolved against the lexicon.
pub struct AmbiguousTable {
    entries: Vec<AmbiguousWord>,
}

impl AmbiguousTable {
    pub fn new(lexicon: &Lexicon) -> Self {
        let parsed = |m: &Morpheme| ParsedMorpheme {
            morpheme: m.surface().to_string(),
            details: m.clone(),
        };
        let possessive = |surface: &str, person: Person, number: Number| {
            lexicon
                .find(|m| {
                    m.surface() == surface
                        && m.prefix_role() == Some(PrefixRole::Possessive)
                        && m.person() == Some(person)
                        && m.number() == Some(number)
                })
                .expect("possessive prefix missing from lexicon")
        };
        let noun = |surface: &str| {
            lexicon
                .find(|m| m.surface() == surface && m.kind() == MorphemeKind::NounStem)
                .expect("noun stem missing from lexicon")
        };
        let suffix = |surface: &str| {
            lexicon
                .find(|m| m.surface() == surface && m.kind() == MorphemeKind::Suffix)
                .expect("suffix missing from lexicon")
        };

        let entries = vec![
            // "his magueyes" vs. "their beans": the i/im boundary cannot be
            // decided from the surface alone.
            AmbiguousWord {
                word: "imeuh".to_string(),
                parses: vec![
                    vec![
                        parsed(possessive("i", Person::Third, Number::Singular)),
                        parsed(noun("me")),
                        parsed(suffix("uh")),
                    ],
                    vec![
                        parsed(possessive("im", Person::Third, Number::Plural)),
                        parsed(noun("e")),
                        parsed(suffix("uh")),
                    ],
                ],
            },
            // Possessed-only noun: "my lord".
            AmbiguousWord {
                word: "noteco".to_string(),
                parses: vec![vec![
                    parsed(possessive("no", Person::First, Number::Singular)),
                    parsed(noun("teco")),
                ]],
            },
        ];

        Self { entries }
    }

    pub fn lookup(&self, word: &str) -> Option<&AmbiguousWord> {
        self.entries.iter().find(|entry| entry.word == word)
    }
}
