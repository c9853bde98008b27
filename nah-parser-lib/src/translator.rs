// Template-driven English gloss generation. One analysis pass over the
// morpheme sequence, a core-string builder keyed on the word type, and a
// finalizer that supplies subjects, copulas, and articles. Deterministic and
// side-effect free; the engine treats the gloss as opaque output.

use crate::lexicon::Lexicon;
use crate::types::{Morpheme, Number, ParsedMorpheme, Person, PrefixRole, SuffixCategory};

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

pub struct Translator<'lx> {
    lexicon: &'lx Lexicon,
}

/// Everything the builders need to know about one morpheme sequence.
struct GlossAnalysis<'m> {
    subject: Option<&'m Morpheme>,
    object: Option<&'m Morpheme>,
    possessive: Option<&'m Morpheme>,
    reflexive: Option<&'m Morpheme>,
    negation: bool,
    imperative: Option<&'m Morpheme>,
    main_verb: Option<&'m Morpheme>,
    noun_stems: Vec<&'m Morpheme>,
    imperfect: bool,
    lli_participle: bool,
    nominalized_by_other: bool,
    tic_adjective: bool,
    other_nominalizer: Option<&'m Morpheme>,
    rightmost_nominalized_verb: bool,
    tla_object: bool,
    te_object: bool,
    has_plural_suffix: bool,
    morphemes: &'m [ParsedMorpheme],
}

struct Core {
    text: String,
    requires_wrapper: bool,
}

impl<'lx> Translator<'lx> {
    pub fn new(lexicon: &'lx Lexicon) -> Self {
        Self { lexicon }
    }

    /// Render an ordered morpheme sequence into a single English gloss.
    pub fn translate(&self, morphemes: &[ParsedMorpheme]) -> String {
        let analysis = self.analyze_morphemes(morphemes);
        let core = self.build_core(&analysis);
        let text = self.finalize(&analysis, &core);
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn analyze_morphemes<'m>(&self, morphemes: &'m [ParsedMorpheme]) -> GlossAnalysis<'m> {
        let mut a = GlossAnalysis {
            subject: None,
            object: None,
            possessive: None,
            reflexive: None,
            negation: false,
            imperative: None,
            main_verb: None,
            noun_stems: Vec::new(),
            imperfect: false,
            lli_participle: false,
            nominalized_by_other: false,
            tic_adjective: false,
            other_nominalizer: None,
            rightmost_nominalized_verb: false,
            tla_object: false,
            te_object: false,
            has_plural_suffix: false,
            morphemes,
        };

        a.has_plural_suffix = morphemes.iter().any(|m| {
            matches!(m.details, Morpheme::Suffix { .. })
                && self.lexicon.is_plural_suffix_surface(m.details.surface())
        });

        for parsed in morphemes {
            let details = &parsed.details;
            match details {
                Morpheme::Prefix { .. } => self.analyze_prefix(details, &mut a),
                Morpheme::VerbStem { .. } => a.main_verb = Some(details),
                Morpheme::NounStem { .. } => a.noun_stems.push(details),
                Morpheme::Suffix { .. } => self.analyze_suffix(details, &mut a),
                _ => {}
            }
        }

        a
    }

    fn analyze_prefix<'m>(&self, details: &'m Morpheme, a: &mut GlossAnalysis<'m>) {
        let surface = details.surface();
        match details.prefix_role() {
            Some(PrefixRole::Subject) => a.subject = Some(details),
            Some(PrefixRole::Object) if surface == "tla" => a.tla_object = true,
            Some(PrefixRole::Object) if surface == "te" => a.te_object = true,
            Some(PrefixRole::Object) => a.object = Some(details),
            Some(PrefixRole::Possessive) => a.possessive = Some(details),
            Some(PrefixRole::Reflexive) => a.reflexive = Some(details),
            Some(PrefixRole::Negation) => a.negation = true,
            Some(PrefixRole::Imperative) => a.imperative = Some(details),
            None => {}
        }
    }

    fn analyze_suffix<'m>(&self, details: &'m Morpheme, a: &mut GlossAnalysis<'m>) {
        let surface = details.surface();

        if details.suffix_category() == Some(SuffixCategory::Imperfect) {
            a.imperfect = true;
        }

        if surface == "tic" {
            a.tic_adjective = true;
            return;
        }

        if details.is_nominalizing() {
            if surface == "lli" {
                a.lli_participle = true;
            }

            if surface == "ni" {
                a.nominalized_by_other = true;
                a.other_nominalizer = Some(details);
                if a.main_verb.is_some() {
                    a.rightmost_nominalized_verb = true;
                }
            } else if self.lexicon.is_nominalizing_suffix_surface(surface)
                && details.suffix_category() != Some(SuffixCategory::Absolutive)
            {
                a.nominalized_by_other = true;
                a.other_nominalizer = Some(details);
                if a.main_verb.is_some() {
                    a.rightmost_nominalized_verb = true;
                }
            }
        }
    }

    fn build_core(&self, a: &GlossAnalysis) -> Core {
        let mut possessive_pending = a.possessive;

        let agent_nominalizer = a.rightmost_nominalized_verb
            && a.other_nominalizer.map(|m| m.surface()) == Some("ni");

        let built = if a.tic_adjective {
            self.tic_adjective_string(a, possessive_pending)
        } else if a.lli_participle {
            let core = self.lli_participle_string(a, possessive_pending);
            possessive_pending = None;
            core
        } else if agent_nominalizer {
            self.agent_noun_string(a)
        } else if a.main_verb.is_some() && !a.nominalized_by_other {
            self.verb_string(a)
        } else if !a.noun_stems.is_empty() {
            self.noun_string(a)
        } else if a.rightmost_nominalized_verb && a.other_nominalizer.is_some() {
            self.other_nominalized_string(a)
        } else {
            self.fallback_string(a)
        };

        let mut text = String::new();
        if a.negation {
            text.push_str("not ");
        }
        if let Some(imperative) = a.imperative {
            text.push_str(imperative.english().unwrap_or(""));
            text.push(' ');
        }
        text.push_str(&built.text);
        let mut requires_wrapper = built.requires_wrapper;

        if !a.tic_adjective {
            if let Some(object) = a.object {
                text.push(' ');
                text.push_str(object.english().unwrap_or(""));
            }
            if let Some(possessive) = possessive_pending {
                let owner = possessive.english().unwrap_or("");
                text = if text.is_empty() {
                    owner.to_string()
                } else {
                    format!("{owner} {text}")
                };
                requires_wrapper = true;
            }
            if let Some(reflexive) = a.reflexive {
                text.push(' ');
                text.push_str(reflexive.english().unwrap_or(""));
            }
        }

        Core {
            text,
            requires_wrapper,
        }
    }

    fn tic_adjective_string(&self, a: &GlossAnalysis, possessive: Option<&Morpheme>) -> Core {
        let mut text = if !a.noun_stems.is_empty() {
            let parts: Vec<&str> = a
                .noun_stems
                .iter()
                .filter_map(|m| m.english())
                .collect();
            format!("{}-like", parts.join("-"))
        } else if let Some(verb) = a.main_verb {
            format!("{}-like", verb.english().unwrap_or(""))
        } else {
            let parts: Vec<&str> = a
                .morphemes
                .iter()
                .filter(|m| m.details.surface() != "tic")
                .filter_map(|m| m.details.english())
                .collect();
            if parts.is_empty() {
                "like".to_string()
            } else {
                format!("{}-like", parts.join("-"))
            }
        };

        if let Some(possessive) = possessive {
            text = format!("{} {text}", possessive.english().unwrap_or(""));
        }

        Core {
            text,
            requires_wrapper: true,
        }
    }

    fn lli_participle_string(&self, a: &GlossAnalysis, possessive: Option<&Morpheme>) -> Core {
        let owner = possessive.and_then(|p| p.english());
        let text = match a.main_verb {
            Some(verb) => {
                let participle = past_participle(verb);
                match (a.tla_object, owner) {
                    (true, Some(owner)) => format!("{owner} something {participle}"),
                    (true, None) => format!("something {participle}"),
                    (false, Some(owner)) => format!("{owner} {participle}"),
                    (false, None) => participle,
                }
            }
            None => match (a.tla_object, owner) {
                (true, Some(owner)) => format!("{owner} something"),
                (true, None) => "something".to_string(),
                (false, Some(owner)) => owner.to_string(),
                (false, None) => String::new(),
            },
        };

        Core {
            text,
            requires_wrapper: true,
        }
    }

    fn agent_noun_string(&self, a: &GlossAnalysis) -> Core {
        let text = match a.main_verb {
            Some(verb) => {
                let mut agent = agent_form(verb);
                if a.has_plural_suffix {
                    agent = pluralize(&agent);
                }
                if a.noun_stems.is_empty() {
                    agent
                } else {
                    let parts: Vec<&str> = a
                        .noun_stems
                        .iter()
                        .filter_map(|m| m.english())
                        .collect();
                    format!("{}-{agent}", parts.join("-"))
                }
            }
            None => String::new(),
        };

        Core {
            text,
            requires_wrapper: true,
        }
    }

    fn verb_string(&self, a: &GlossAnalysis) -> Core {
        let verb = match a.main_verb {
            Some(verb) => verb,
            None => return Core { text: String::new(), requires_wrapper: false },
        };

        let mut text = if a.imperfect {
            progressive_form(verb)
        } else {
            verb.english().unwrap_or("").to_string()
        };

        let third_singular = match a.subject {
            None => true,
            Some(subject) => {
                subject.person() == Some(Person::Third)
                    && subject.number() != Some(Number::Plural)
            }
        } && !a.has_plural_suffix
            && a.imperative.is_none();

        if third_singular && !a.imperfect && !a.lli_participle && !a.nominalized_by_other {
            if !text.ends_with('s') && text != "is" && text != "are" {
                text.push('s');
            }
        }

        if let Some(noun) = a.noun_stems.last() {
            // Incorporated noun reads as a comparison.
            let noun = noun.english().unwrap_or("");
            let article = article_for(noun);
            return Core {
                text: format!("{text} like {article} {noun}"),
                requires_wrapper: false,
            };
        }

        if a.tla_object {
            text.push_str(" something");
        }

        Core {
            text,
            requires_wrapper: false,
        }
    }

    fn noun_string(&self, a: &GlossAnalysis) -> Core {
        let text = if a.has_plural_suffix && a.noun_stems.len() == 1 {
            plural_noun(a.noun_stems[0])
        } else if a.noun_stems.len() > 1 {
            let last = a.noun_stems.len() - 1;
            a.noun_stems
                .iter()
                .enumerate()
                .map(|(i, details)| {
                    if a.has_plural_suffix && i == last {
                        plural_noun(details)
                    } else {
                        details.english().unwrap_or("").to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join("-")
        } else {
            a.noun_stems[0].english().unwrap_or("").to_string()
        };

        Core {
            text,
            requires_wrapper: true,
        }
    }

    fn other_nominalized_string(&self, a: &GlossAnalysis) -> Core {
        let base = a
            .main_verb
            .and_then(|m| m.english())
            .unwrap_or("")
            .to_string();
        let suffix = a
            .other_nominalizer
            .and_then(|m| match m {
                Morpheme::Suffix { english_suffix, .. } => english_suffix.as_deref(),
                _ => None,
            })
            .unwrap_or("");
        let mut text = format!("{base}{suffix}");
        if a.has_plural_suffix {
            text = pluralize(&text);
        }

        Core {
            text,
            requires_wrapper: true,
        }
    }

    fn fallback_string(&self, a: &GlossAnalysis) -> Core {
        let text = a
            .morphemes
            .iter()
            .map(|m| {
                m.details
                    .english()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| m.morpheme.clone())
            })
            .collect::<Vec<_>>()
            .join(" ");
        let requires_wrapper = a
            .morphemes
            .iter()
            .any(|m| matches!(m.details, Morpheme::NounStem { .. }));

        Core {
            text,
            requires_wrapper,
        }
    }

    fn finalize(&self, a: &GlossAnalysis, core: &Core) -> String {
        if a.subject.is_none() && a.imperative.is_none() {
            self.finalize_implicit_subject(a, core)
        } else if a.subject.is_some() {
            self.finalize_explicit_subject(a, core)
        } else {
            core.text.clone()
        }
    }

    fn finalize_implicit_subject(&self, a: &GlossAnalysis, core: &Core) -> String {
        if core.requires_wrapper {
            let (pronoun, copula) = if a.has_plural_suffix {
                ("they", "are")
            } else {
                ("it", "is")
            };

            if a.main_verb.is_none()
                || a.lli_participle
                || a.nominalized_by_other
                || a.possessive.is_some()
                || a.rightmost_nominalized_verb
            {
                let article = if self.should_add_article(a, false) {
                    let first = core.text.split_whitespace().next().unwrap_or("");
                    format!(" {}", article_for(first))
                } else {
                    String::new()
                };
                return format!("({pronoun} {copula}{article}) {}", core.text);
            }
            core.text.clone()
        } else if a.main_verb.is_some() {
            let subject = if a.has_plural_suffix {
                "they"
            } else {
                "he/she/it"
            };
            format!("{subject} {}", core.text)
        } else {
            core.text.clone()
        }
    }

    fn finalize_explicit_subject(&self, a: &GlossAnalysis, core: &Core) -> String {
        let subject = a
            .subject
            .and_then(|m| m.english())
            .unwrap_or("")
            .to_string();
        let has_noun_before_verb = !a.noun_stems.is_empty() && a.main_verb.is_some();

        if a.main_verb.is_some() && !a.lli_participle && !a.nominalized_by_other {
            format!("{subject} {}", core.text)
        } else if !a.noun_stems.is_empty() || a.lli_participle || a.nominalized_by_other {
            if has_noun_before_verb {
                format!("{subject} {}", core.text)
            } else {
                let copula = copula_for(a.subject);
                let article = if self.should_add_article(a, has_noun_before_verb) {
                    let first = core.text.split_whitespace().next().unwrap_or("");
                    format!(" {}", article_for(first))
                } else {
                    String::new()
                };
                format!("{subject} {copula}{article} {}", core.text)
            }
        } else {
            format!("{subject} {}", core.text)
        }
    }

    fn should_add_article(&self, a: &GlossAnalysis, has_noun_before_verb: bool) -> bool {
        let countable_noun = matches!(
            a.noun_stems.last(),
            Some(Morpheme::NounStem {
                countable: true,
                ..
            })
        );
        let countable_nominalizer = a.nominalized_by_other
            && matches!(
                a.other_nominalizer,
                Some(Morpheme::Suffix {
                    countable: true,
                    ..
                })
            );

        let mut should = (countable_noun && !a.has_plural_suffix && !has_noun_before_verb)
            || (countable_nominalizer && !a.has_plural_suffix);

        if a.tla_object || a.te_object || a.possessive.is_some() {
            should = false;
        }
        if a.lli_participle {
            should = false;
        }

        should
    }
}

fn past_participle(verb: &Morpheme) -> String {
    if let Morpheme::VerbStem {
        past_participle: Some(participle),
        ..
    } = verb
    {
        return participle.clone();
    }
    let english = verb.english().unwrap_or("");
    if english.ends_with('e') {
        format!("{english}d")
    } else {
        format!("{english}ed")
    }
}

fn agent_form(verb: &Morpheme) -> String {
    if let Morpheme::VerbStem {
        agent: Some(agent), ..
    } = verb
    {
        return agent.clone();
    }
    let english = verb.english().unwrap_or("");
    if english.ends_with('e') {
        format!("{english}r")
    } else {
        format!("{english}er")
    }
}

fn progressive_form(verb: &Morpheme) -> String {
    if let Morpheme::VerbStem {
        progressive: Some(progressive),
        ..
    } = verb
    {
        return progressive.clone();
    }
    let english = verb.english().unwrap_or("");
    if let Some(stripped) = english.strip_suffix('e') {
        format!("{stripped}ing")
    } else {
        format!("{english}ing")
    }
}

fn plural_noun(details: &Morpheme) -> String {
    if let Morpheme::NounStem {
        english_plural: Some(plural),
        ..
    } = details
    {
        return plural.clone();
    }
    pluralize(details.english().unwrap_or(""))
}

fn pluralize(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    if word.ends_with('y') && len >= 2 && !VOWELS.contains(&chars[len - 2]) {
        format!("{}ies", &word[..word.len() - 1])
    } else if word.ends_with('s')
        || word.ends_with("sh")
        || word.ends_with("ch")
        || word.ends_with('x')
        || word.ends_with('z')
    {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

fn article_for(word: &str) -> &'static str {
    if word.trim().starts_with(VOWELS) {
        "an"
    } else {
        "a"
    }
}

fn copula_for(subject: Option<&Morpheme>) -> &'static str {
    match subject.map(|s| (s.person(), s.number())) {
        Some((Some(Person::First), Some(Number::Singular))) => "am",
        Some((Some(Person::Third), Some(Number::Singular))) => "is",
        Some((Some(_), Some(_))) => "are",
        _ => "is",
    }
}
