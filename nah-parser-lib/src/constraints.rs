// Grammatical well-formedness rules applied to complete candidate parses.
//
// The search deliberately over-generates; every cross-cutting rule that
// cannot be checked incrementally (agreement, exclusivity, required
// co-occurrence) lives here, in one auditable place.

use crate::lexicon::Lexicon;
use crate::types::{Morpheme, Number, Person, PrefixRole, StemKind, SuffixCategory};
use crate::Parsing;

pub struct ConstraintValidator<'lx> {
    lexicon: &'lx Lexicon,
}

impl<'lx> ConstraintValidator<'lx> {
    pub fn new(lexicon: &'lx Lexicon) -> Self {
        Self { lexicon }
    }

    /// Keep only the grammatically well-formed parsings.
    pub fn filter_parsings(&self, parsings: Vec<Parsing>) -> Vec<Parsing> {
        parsings
            .into_iter()
            .filter(|p| {
                let morphemes: Vec<&Morpheme> = p.morphemes.iter().map(|m| &m.details).collect();
                self.is_grammatical(&morphemes)
            })
            .collect()
    }

    /// Check one complete morpheme sequence (prefixes, stems, suffixes in
    /// left-to-right order) against every rule.
    pub fn is_grammatical(&self, morphemes: &[&Morpheme]) -> bool {
        let prefixes: Vec<&Morpheme> = morphemes
            .iter()
            .filter(|m| matches!(m, Morpheme::Prefix { .. }))
            .copied()
            .collect();
        let stems: Vec<&Morpheme> = morphemes.iter().filter(|m| m.is_stem()).copied().collect();
        let suffixes: Vec<&Morpheme> = morphemes
            .iter()
            .filter(|m| matches!(m, Morpheme::Suffix { .. }))
            .copied()
            .collect();

        let primary_stem = stems.last().copied();

        self.check_stem_rules(primary_stem, &prefixes, &suffixes)
            && self.check_inanimate_noun_rules(primary_stem, &prefixes, &suffixes)
            && self.check_prefix_rules(morphemes, &prefixes)
            && self.check_suffix_rules(&suffixes)
            && self.check_context_rules(primary_stem, &prefixes, &suffixes)
    }

    /// A parse needs a stem; a verb-final parse cannot carry an absolutive
    /// suffix and a noun-final parse cannot carry an object prefix.
    fn check_stem_rules(
        &self,
        primary_stem: Option<&Morpheme>,
        prefixes: &[&Morpheme],
        suffixes: &[&Morpheme],
    ) -> bool {
        let primary = match primary_stem {
            Some(stem) => stem,
            None => return false,
        };

        if matches!(primary, Morpheme::VerbStem { .. }) {
            let has_absolutive = suffixes
                .iter()
                .any(|s| s.suffix_category() == Some(SuffixCategory::Absolutive));
            if has_absolutive {
                return false;
            }
        }

        if matches!(primary, Morpheme::NounStem { .. }) {
            let has_object = prefixes
                .iter()
                .any(|p| p.prefix_role() == Some(PrefixRole::Object));
            if has_object {
                return false;
            }
        }

        true
    }

    /// An inanimate noun never pluralizes, and with zero suffixes it is only
    /// valid when it takes no absolutive ending or is possessed.
    fn check_inanimate_noun_rules(
        &self,
        primary_stem: Option<&Morpheme>,
        prefixes: &[&Morpheme],
        suffixes: &[&Morpheme],
    ) -> bool {
        let (animate, absolutive_suffix) = match primary_stem {
            Some(Morpheme::NounStem {
                animate,
                absolutive_suffix,
                ..
            }) => (*animate, *absolutive_suffix),
            _ => return true,
        };
        if animate {
            return true;
        }

        let plural_count = suffixes
            .iter()
            .filter(|s| s.suffix_category() == Some(SuffixCategory::Plural))
            .count();
        if plural_count > 0 {
            return false;
        }

        let possessed = prefixes
            .iter()
            .any(|p| p.prefix_role() == Some(PrefixRole::Possessive));
        if suffixes.is_empty() && absolutive_suffix && !possessed {
            return false;
        }

        true
    }

    /// Role exclusivity and ordering across the prefix sequence.
    fn check_prefix_rules(&self, morphemes: &[&Morpheme], prefixes: &[&Morpheme]) -> bool {
        let has_role = |role: PrefixRole| prefixes.iter().any(|p| p.prefix_role() == Some(role));

        if has_role(PrefixRole::Reflexive) && has_role(PrefixRole::Object) {
            return false;
        }
        if has_role(PrefixRole::Subject) && has_role(PrefixRole::Possessive) {
            return false;
        }

        if has_role(PrefixRole::Subject) && has_role(PrefixRole::Object) {
            let position = |role: PrefixRole| {
                morphemes
                    .iter()
                    .position(|m| m.prefix_role() == Some(role))
            };
            if position(PrefixRole::Subject) > position(PrefixRole::Object) {
                return false;
            }
        }

        // The two unspecified-object prefixes cannot co-occur.
        let objects: Vec<&&Morpheme> = prefixes
            .iter()
            .filter(|p| p.prefix_role() == Some(PrefixRole::Object))
            .collect();
        if objects.iter().any(|p| p.surface() == "tla") && objects.iter().any(|p| p.surface() == "te")
        {
            return false;
        }

        true
    }

    fn check_suffix_rules(&self, suffixes: &[&Morpheme]) -> bool {
        let plural_count = suffixes
            .iter()
            .filter(|s| s.suffix_category() == Some(SuffixCategory::Plural))
            .count();
        plural_count <= 1
    }

    /// Rules that depend on the finished word type: `used_with` restrictions
    /// re-checked against the actual primary stem, reflexive agreement, and
    /// possessive-suffix licensing.
    fn check_context_rules(
        &self,
        primary_stem: Option<&Morpheme>,
        prefixes: &[&Morpheme],
        suffixes: &[&Morpheme],
    ) -> bool {
        let has_noun = matches!(primary_stem, Some(Morpheme::NounStem { .. }));
        let has_verb = matches!(primary_stem, Some(Morpheme::VerbStem { .. }));
        let has_nominalizing = suffixes.iter().any(|s| {
            s.is_nominalizing() || self.lexicon.is_nominalizing_suffix_surface(s.surface())
        });

        for prefix in prefixes {
            match prefix.used_with() {
                Some(StemKind::Noun) if !has_noun && !has_nominalizing => return false,
                Some(StemKind::Verb) if !has_verb || has_nominalizing => return false,
                _ => {}
            }
        }

        if !self.check_reflexive_agreement(prefixes) {
            return false;
        }

        let has_possessive_suffix = suffixes
            .iter()
            .any(|s| s.suffix_category() == Some(SuffixCategory::Possessive));
        let has_possessive_prefix = prefixes
            .iter()
            .any(|p| p.prefix_role() == Some(PrefixRole::Possessive));
        if has_possessive_suffix && !has_possessive_prefix {
            return false;
        }

        true
    }

    /// A reflexive prefix agrees in person and number with an explicit
    /// subject prefix; without one it must be third-person singular.
    fn check_reflexive_agreement(&self, prefixes: &[&Morpheme]) -> bool {
        let subjects: Vec<&&Morpheme> = prefixes
            .iter()
            .filter(|p| p.prefix_role() == Some(PrefixRole::Subject))
            .collect();

        for reflexive in prefixes
            .iter()
            .filter(|p| p.prefix_role() == Some(PrefixRole::Reflexive))
        {
            if subjects.is_empty() {
                if reflexive.person() != Some(Person::Third)
                    || reflexive.number() != Some(Number::Singular)
                {
                    return false;
                }
            } else {
                let agrees = subjects.iter().any(|s| {
                    s.person() == reflexive.person() && s.number() == reflexive.number()
                });
                if !agrees {
                    return false;
                }
            }
        }
        true
    }
}
