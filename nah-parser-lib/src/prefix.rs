// Admission rules for prefixes during left-remainder resolution.
//
// Most prefixes only need the ordering rule. A handful of surface forms map
// to more than one role/person/number reading; those are checked against the
// state built so far and the suffixes already chosen on this branch. When the
// word type cannot be determined yet the validator defers by accepting; the
// constraint validator has the final word once the parse is complete.

use crate::lexicon::Lexicon;
use crate::state::ParseState;
use crate::types::{Morpheme, Number, Person, PrefixRole, StemKind, SuffixCategory};

/// Surface forms with more than one grammatical reading.
const AMBIGUOUS_SURFACES: &[&str] = &["ti", "t", "no", "mo", "to", "m", "n"];

/// Absolutive surfaces recognized when deciding `n`-type prefix readings.
const ABSOLUTIVE_SURFACES: &[&str] = &["li", "tli", "tl", "tzintli"];

pub struct PrefixValidator<'lx> {
    lexicon: &'lx Lexicon,
}

impl<'lx> PrefixValidator<'lx> {
    pub fn new(lexicon: &'lx Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn is_ambiguous(surface: &str) -> bool {
        AMBIGUOUS_SURFACES.contains(&surface)
    }

    /// Ordering rule for unambiguous prefixes: subject before object, and no
    /// role attached twice.
    pub fn is_valid_order(&self, prefix: &Morpheme, state: &ParseState) -> bool {
        let role = match prefix.prefix_role() {
            Some(r) => r,
            None => return false,
        };
        let existing: Vec<PrefixRole> = state
            .prefixes()
            .iter()
            .filter_map(|p| p.prefix_role())
            .collect();

        if role == PrefixRole::Object && existing.contains(&PrefixRole::Subject) {
            return true;
        }
        if role == PrefixRole::Subject && existing.contains(&PrefixRole::Object) {
            return false;
        }
        !existing.contains(&role)
    }

    /// Context-sensitive check for an ambiguous-surface prefix.
    pub fn is_valid_ambiguous(
        &self,
        prefix: &Morpheme,
        state: &ParseState,
        suffixes: &[&Morpheme],
    ) -> bool {
        match prefix.surface() {
            "ti" | "t" => match prefix.prefix_role() {
                Some(PrefixRole::Subject) => {
                    self.is_valid_ti_subject(prefix, suffixes) && self.is_valid_order(prefix, state)
                }
                Some(PrefixRole::Possessive | PrefixRole::Reflexive) => {
                    self.is_valid_possessive_reflexive(prefix, state, suffixes)
                }
                _ => false,
            },
            "n" => self.is_valid_n_type(prefix, state, suffixes),
            "no" | "mo" | "to" | "m" => match prefix.prefix_role() {
                Some(PrefixRole::Possessive | PrefixRole::Reflexive) => {
                    self.is_valid_possessive_reflexive(prefix, state, suffixes)
                }
                Some(PrefixRole::Subject | PrefixRole::Object) => {
                    self.is_valid_order(prefix, state)
                }
                _ => false,
            },
            _ => true,
        }
    }

    /// `ti`/`t` as subject: plural suffix context forces the first-person
    /// plural reading, singular/nominalizing context forces second-person
    /// singular, otherwise both readings stay live.
    fn is_valid_ti_subject(&self, prefix: &Morpheme, suffixes: &[&Morpheme]) -> bool {
        let has_plural = suffixes
            .iter()
            .any(|s| self.lexicon.is_plural_suffix_surface(s.surface()));
        let has_singular = suffixes
            .iter()
            .any(|s| self.lexicon.is_nominalizing_suffix_surface(s.surface()));

        let person = prefix.person();
        let number = prefix.number();

        if has_plural {
            return person == Some(Person::First) && number == Some(Number::Plural);
        }
        if has_singular {
            return person == Some(Person::Second) && number == Some(Number::Singular);
        }
        (person == Some(Person::First) && number == Some(Number::Plural))
            || (person == Some(Person::Second) && number == Some(Number::Singular))
    }

    /// `n`-type surfaces, ambiguous between subject and possessive readings.
    fn is_valid_n_type(
        &self,
        prefix: &Morpheme,
        state: &ParseState,
        suffixes: &[&Morpheme],
    ) -> bool {
        let has_absolutive = suffixes.iter().any(|s| {
            s.suffix_category() == Some(SuffixCategory::Absolutive)
                || ABSOLUTIVE_SURFACES.contains(&s.surface())
        });
        let has_huan = suffixes.iter().any(|s| s.surface() == "huan");

        let primary = state.primary_stem();
        let has_noun = matches!(primary, Some(Morpheme::NounStem { .. }));
        let has_verb = matches!(primary, Some(Morpheme::VerbStem { .. }));
        let has_irregular_noun = matches!(
            primary,
            Some(Morpheme::NounStem {
                absolutive_suffix: false,
                ..
            })
        );

        match prefix.prefix_role() {
            Some(PrefixRole::Subject) => {
                let valid_for_noun =
                    (has_absolutive && has_noun) || (has_irregular_noun && !has_absolutive);
                let valid_for_verb = has_verb;
                (valid_for_noun || valid_for_verb) && self.is_valid_order(prefix, state)
            }
            Some(PrefixRole::Possessive) => {
                let licensed = has_noun
                    && (has_huan
                        || (!has_absolutive && !has_irregular_noun)
                        || (has_irregular_noun && !has_absolutive));
                licensed && self.is_valid_possessive_reflexive(prefix, state, suffixes)
            }
            _ => false,
        }
    }

    /// Possessive and reflexive readings: mutual exclusivity against the
    /// prefixes already chosen, `used_with` consistency, and person/number
    /// agreement for reflexives (third-singular by default when no subject
    /// prefix is present yet).
    fn is_valid_possessive_reflexive(
        &self,
        prefix: &Morpheme,
        state: &ParseState,
        suffixes: &[&Morpheme],
    ) -> bool {
        let role = match prefix.prefix_role() {
            Some(r @ (PrefixRole::Possessive | PrefixRole::Reflexive)) => r,
            _ => return false,
        };

        let has_role = |r: PrefixRole| state.prefixes().iter().any(|p| p.prefix_role() == Some(r));
        let has_subject = has_role(PrefixRole::Subject);
        let has_object = has_role(PrefixRole::Object);

        if has_role(role) {
            return false;
        }
        if has_object && role == PrefixRole::Reflexive {
            return false;
        }
        if has_subject && role == PrefixRole::Possessive {
            return false;
        }

        let primary = state.primary_stem();
        let has_noun = matches!(primary, Some(Morpheme::NounStem { .. }));
        let has_verb = matches!(primary, Some(Morpheme::VerbStem { .. }));
        let has_nominalizing = self.has_nominalizing_suffix(suffixes);

        match prefix.used_with() {
            Some(StemKind::Noun) if !has_noun && !has_nominalizing => return false,
            Some(StemKind::Verb) if !has_verb || has_nominalizing => return false,
            _ => {}
        }

        if has_noun || has_nominalizing {
            return role == PrefixRole::Possessive;
        }

        if has_verb && !has_nominalizing {
            if role != PrefixRole::Reflexive {
                return false;
            }
            let subject = state
                .prefixes()
                .iter()
                .find(|p| p.prefix_role() == Some(PrefixRole::Subject));
            return match subject {
                Some(subject) => {
                    prefix.person() == subject.person() && prefix.number() == subject.number()
                }
                None => {
                    prefix.person() == Some(Person::Third)
                        && prefix.number() == Some(Number::Singular)
                }
            };
        }

        // Word type undecidable at this point; defer to the constraint
        // validator on the complete parse.
        true
    }

    fn has_nominalizing_suffix(&self, suffixes: &[&Morpheme]) -> bool {
        suffixes.iter().any(|s| {
            s.is_nominalizing() || self.lexicon.is_nominalizing_suffix_surface(s.surface())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::types::MorphemeKind;

    fn prefix_entry<'lx>(
        lex: &'lx Lexicon,
        surface: &str,
        role: PrefixRole,
        number: Option<Number>,
    ) -> &'lx Morpheme {
        lex.find(|m| {
            m.surface() == surface
                && m.prefix_role() == Some(role)
                && (number.is_none() || m.number() == number)
        })
        .expect("prefix entry should exist")
    }

    fn suffix_entry<'lx>(lex: &'lx Lexicon, surface: &str) -> &'lx Morpheme {
        lex.find(|m| m.surface() == surface && m.kind() == MorphemeKind::Suffix)
            .expect("suffix entry should exist")
    }

    #[test]
    fn subject_after_object_is_rejected() {
        let lex = Lexicon::global();
        let validator = PrefixValidator::new(lex);
        let qui = prefix_entry(lex, "qui", PrefixRole::Object, None);
        let ni = prefix_entry(lex, "ni", PrefixRole::Subject, None);

        let state = ParseState::new(None, "niqui").with_prefix(qui);
        assert!(!validator.is_valid_order(ni, &state));
    }

    #[test]
    fn object_after_subject_is_accepted() {
        let lex = Lexicon::global();
        let validator = PrefixValidator::new(lex);
        let ni = prefix_entry(lex, "ni", PrefixRole::Subject, None);
        let qui = prefix_entry(lex, "qui", PrefixRole::Object, None);

        let state = ParseState::new(None, "niqui").with_prefix(ni);
        assert!(validator.is_valid_order(qui, &state));
    }

    #[test]
    fn ti_with_plural_suffix_must_be_first_plural() {
        let lex = Lexicon::global();
        let validator = PrefixValidator::new(lex);
        let ti_we = prefix_entry(lex, "ti", PrefixRole::Subject, Some(Number::Plural));
        let ti_you = prefix_entry(lex, "ti", PrefixRole::Subject, Some(Number::Singular));
        let h = suffix_entry(lex, "h");

        let state = ParseState::new(None, "ti");
        let suffixes = vec![h];
        assert!(validator.is_valid_ambiguous(ti_we, &state, &suffixes));
        assert!(!validator.is_valid_ambiguous(ti_you, &state, &suffixes));
    }

    #[test]
    fn ti_with_absolutive_suffix_must_be_second_singular() {
        let lex = Lexicon::global();
        let validator = PrefixValidator::new(lex);
        let ti_we = prefix_entry(lex, "ti", PrefixRole::Subject, Some(Number::Plural));
        let ti_you = prefix_entry(lex, "ti", PrefixRole::Subject, Some(Number::Singular));
        let tl = suffix_entry(lex, "tl");

        let state = ParseState::new(None, "ti");
        let suffixes = vec![tl];
        assert!(!validator.is_valid_ambiguous(ti_we, &state, &suffixes));
        assert!(validator.is_valid_ambiguous(ti_you, &state, &suffixes));
    }

    #[test]
    fn ti_without_context_keeps_both_readings() {
        let lex = Lexicon::global();
        let validator = PrefixValidator::new(lex);
        let ti_we = prefix_entry(lex, "ti", PrefixRole::Subject, Some(Number::Plural));
        let ti_you = prefix_entry(lex, "ti", PrefixRole::Subject, Some(Number::Singular));

        let state = ParseState::new(None, "ti");
        assert!(validator.is_valid_ambiguous(ti_we, &state, &[]));
        assert!(validator.is_valid_ambiguous(ti_you, &state, &[]));
    }

    #[test]
    fn reflexive_must_agree_with_subject() {
        let lex = Lexicon::global();
        let validator = PrefixValidator::new(lex);
        let itta = lex
            .find(|m| m.surface() == "itta" && m.kind() == MorphemeKind::VerbStem)
            .unwrap();
        let ti_we = prefix_entry(lex, "ti", PrefixRole::Subject, Some(Number::Plural));
        let to_refl = prefix_entry(lex, "to", PrefixRole::Reflexive, None);
        let no_refl = prefix_entry(lex, "no", PrefixRole::Reflexive, None);

        let state = ParseState::new(Some(itta), "tito").with_prefix(ti_we);
        assert!(validator.is_valid_ambiguous(to_refl, &state, &[]));
        assert!(!validator.is_valid_ambiguous(no_refl, &state, &[]));
    }

    #[test]
    fn bare_reflexive_defaults_to_third_singular() {
        let lex = Lexicon::global();
        let validator = PrefixValidator::new(lex);
        let itta = lex
            .find(|m| m.surface() == "itta" && m.kind() == MorphemeKind::VerbStem)
            .unwrap();
        let mo_third = prefix_entry(lex, "mo", PrefixRole::Reflexive, Some(Number::Singular));
        let no_first = prefix_entry(lex, "no", PrefixRole::Reflexive, None);

        let state = ParseState::new(Some(itta), "mo");
        // With no subject prefix only the third-singular reading is valid.
        let valid_mo = lex
            .entries()
            .iter()
            .filter(|m| m.surface() == "mo" && m.prefix_role() == Some(PrefixRole::Reflexive))
            .filter(|m| validator.is_valid_ambiguous(m, &state, &[]))
            .count();
        assert_eq!(valid_mo, 1);
        assert_eq!(mo_third.person(), Some(Person::Third));
        assert!(!validator.is_valid_ambiguous(no_first, &state, &[]));
    }

    #[test]
    fn possessive_rejected_on_verb_stem() {
        let lex = Lexicon::global();
        let validator = PrefixValidator::new(lex);
        let itta = lex
            .find(|m| m.surface() == "itta" && m.kind() == MorphemeKind::VerbStem)
            .unwrap();
        let no_poss = prefix_entry(lex, "no", PrefixRole::Possessive, None);

        let state = ParseState::new(Some(itta), "no");
        assert!(!validator.is_valid_ambiguous(no_poss, &state, &[]));
    }

    #[test]
    fn possessive_licensed_by_nominalizing_suffix() {
        let lex = Lexicon::global();
        let validator = PrefixValidator::new(lex);
        let cua = lex
            .find(|m| m.surface() == "cua" && m.kind() == MorphemeKind::VerbStem)
            .unwrap();
        let no_poss = prefix_entry(lex, "no", PrefixRole::Possessive, None);
        let lli = suffix_entry(lex, "lli");

        let state = ParseState::new(Some(cua), "no");
        let suffixes = vec![lli];
        assert!(validator.is_valid_ambiguous(no_poss, &state, &suffixes));
    }
}
