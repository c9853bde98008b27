use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::types::{Morpheme, MorphemeKind, SuffixCategory};

const EMBEDDED_JSON: &[u8] = include_bytes!("../data/lexicon.json");

static GLOBAL: Lazy<Lexicon> = Lazy::new(Lexicon::load);

/// In-memory morpheme inventory loaded once from compile-time embedded data.
///
/// Entries are held sorted by surface length, descending, so every iterator
/// below yields the longest applicable morpheme first. The lexicon is
/// read-only after construction and safe to share across threads.
pub struct Lexicon {
    entries: Vec<Morpheme>,
    /// Surfaces of suffixes that mark plurality.
    plural_suffix_surfaces: HashSet<String>,
    /// Surfaces of suffixes that nominalize (including absolutives).
    nominalizing_suffix_surfaces: HashSet<String>,
}

impl Lexicon {
    /// The process-wide lexicon, built on first use.
    pub fn global() -> &'static Lexicon {
        &GLOBAL
    }

    /// Load the lexicon from embedded JSON data.
    fn load() -> Self {
        let mut entries: Vec<Morpheme> =
            serde_json::from_slice(EMBEDDED_JSON).expect("embedded lexicon JSON is invalid");
        entries.sort_by(|a, b| b.surface().len().cmp(&a.surface().len()));

        let plural_suffix_surfaces = entries
            .iter()
            .filter(|m| {
                matches!(
                    m.suffix_category(),
                    Some(SuffixCategory::Plural | SuffixCategory::PluralMarker)
                )
            })
            .map(|m| m.surface().to_string())
            .collect();

        let nominalizing_suffix_surfaces = entries
            .iter()
            .filter(|m| m.is_nominalizing())
            .map(|m| m.surface().to_string())
            .collect();

        Self {
            entries,
            plural_suffix_surfaces,
            nominalizing_suffix_surfaces,
        }
    }

    /// All entries, longest surface first.
    pub fn entries(&self) -> &[Morpheme] {
        &self.entries
    }

    pub fn suffixes(&self) -> impl Iterator<Item = &Morpheme> {
        self.entries
            .iter()
            .filter(|m| m.kind() == MorphemeKind::Suffix)
    }

    /// Noun and verb stems, longest first.
    pub fn stems(&self) -> impl Iterator<Item = &Morpheme> {
        self.entries.iter().filter(|m| m.is_stem())
    }

    pub fn noun_stems(&self) -> impl Iterator<Item = &Morpheme> {
        self.entries
            .iter()
            .filter(|m| m.kind() == MorphemeKind::NounStem)
    }

    pub fn verb_stems(&self) -> impl Iterator<Item = &Morpheme> {
        self.entries
            .iter()
            .filter(|m| m.kind() == MorphemeKind::VerbStem)
    }

    /// All prefixes, imperative markers included.
    pub fn prefixes(&self) -> impl Iterator<Item = &Morpheme> {
        self.entries
            .iter()
            .filter(|m| m.kind() == MorphemeKind::Prefix)
    }

    pub fn imperative_prefixes(&self) -> impl Iterator<Item = &Morpheme> {
        self.prefixes()
            .filter(|m| m.prefix_role() == Some(crate::types::PrefixRole::Imperative))
    }

    /// Entries that only ever occur as whole, uninflected words.
    pub fn invariables(&self) -> impl Iterator<Item = &Morpheme> {
        self.entries.iter().filter(|m| {
            matches!(
                m.kind(),
                MorphemeKind::Particle
                    | MorphemeKind::Interrogative
                    | MorphemeKind::Adverb
                    | MorphemeKind::Adjective
                    | MorphemeKind::Interjection
                    | MorphemeKind::Numeral
            )
        })
    }

    /// First (longest) entry matching a predicate.
    pub fn find<P>(&self, predicate: P) -> Option<&Morpheme>
    where
        P: FnMut(&&Morpheme) -> bool,
    {
        self.entries.iter().find(predicate)
    }

    pub fn is_plural_suffix_surface(&self, surface: &str) -> bool {
        self.plural_suffix_surfaces.contains(surface)
    }

    pub fn is_nominalizing_suffix_surface(&self, surface: &str) -> bool {
        self.nominalizing_suffix_surfaces.contains(surface)
    }
}
