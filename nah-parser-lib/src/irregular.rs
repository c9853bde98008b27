// Irregular verb paradigms that do not follow the regular morphology. Each
// surface form carries its pre-built analysis and a literal translation;
// lookup is exact-match and bypasses the search entirely.

use crate::types::{Morpheme, Number, ParsedMorpheme, Person, PrefixRole, SuffixCategory};

/// One irregular surface form with its fixed analysis.
pub struct IrregularForm {
    pub form: String,
    pub translation: String,
    pub morphemes: Vec<ParsedMorpheme>,
}

pub struct IrregularTable {
    forms: Vec<IrregularForm>,
}

fn subject(surface: &str, person: Person, number: Number, english: &str) -> ParsedMorpheme {
    ParsedMorpheme {
        morpheme: surface.to_string(),
        details: Morpheme::Prefix {
            morpheme: surface.to_string(),
            role: PrefixRole::Subject,
            person: Some(person),
            number: Some(number),
            used_with: None,
            english: english.to_string(),
        },
    }
}

fn stem(surface: &str, english: &str) -> ParsedMorpheme {
    ParsedMorpheme {
        morpheme: surface.to_string(),
        details: Morpheme::IrregularVerb {
            morpheme: surface.to_string(),
            english: english.to_string(),
        },
    }
}

fn plural(surface: &str) -> ParsedMorpheme {
    ParsedMorpheme {
        morpheme: surface.to_string(),
        details: Morpheme::Suffix {
            morpheme: surface.to_string(),
            category: Some(SuffixCategory::Plural),
            nominalizing: false,
            countable: false,
            english: Some("plural".to_string()),
            english_suffix: None,
        },
    }
}

impl IrregularTable {
    pub fn new() -> Self {
        let form = |form: &str, translation: &str, morphemes: Vec<ParsedMorpheme>| IrregularForm {
            form: form.to_string(),
            translation: translation.to_string(),
            morphemes,
        };

        let forms = vec![
            // cah "be (located)"
            form(
                "nicah",
                "I am (located)",
                vec![
                    subject("ni", Person::First, Number::Singular, "I"),
                    stem("cah", "be"),
                ],
            ),
            form(
                "ticah",
                "you (sg) are (located)",
                vec![
                    subject("ti", Person::Second, Number::Singular, "you (sg)"),
                    stem("cah", "be"),
                ],
            ),
            form("cah", "he/she/it is (located)", vec![stem("cah", "be")]),
            form(
                "ticateh",
                "we are (located)",
                vec![
                    subject("ti", Person::First, Number::Plural, "we"),
                    stem("ca", "be"),
                    plural("teh"),
                ],
            ),
            form(
                "ancateh",
                "you (pl) are (located)",
                vec![
                    subject("an", Person::Second, Number::Plural, "you (pl)"),
                    stem("ca", "be"),
                    plural("teh"),
                ],
            ),
            form(
                "cateh",
                "they are (located)",
                vec![stem("ca", "be"), plural("teh")],
            ),
            // yauh "go"
            form(
                "niyauh",
                "I go",
                vec![
                    subject("ni", Person::First, Number::Singular, "I"),
                    stem("yauh", "go"),
                ],
            ),
            form(
                "tiyauh",
                "you (sg) go",
                vec![
                    subject("ti", Person::Second, Number::Singular, "you (sg)"),
                    stem("yauh", "go"),
                ],
            ),
            form(
                "tiyaz",
                "you (sg) go",
                vec![
                    subject("ti", Person::Second, Number::Singular, "you (sg)"),
                    stem("yaz", "go"),
                ],
            ),
            form("yauh", "he/she/it goes", vec![stem("yauh", "go")]),
            form(
                "tihuih",
                "we go",
                vec![
                    subject("ti", Person::First, Number::Plural, "we"),
                    stem("huih", "go"),
                ],
            ),
            form(
                "anhuih",
                "you (pl) go",
                vec![
                    subject("an", Person::Second, Number::Plural, "you (pl)"),
                    stem("huih", "go"),
                ],
            ),
            form("huih", "they go", vec![stem("huih", "go")]),
            // huitz "come"
            form(
                "nihuitz",
                "I come",
                vec![
                    subject("ni", Person::First, Number::Singular, "I"),
                    stem("huitz", "come"),
                ],
            ),
            form(
                "tihuitz",
                "you (sg) come",
                vec![
                    subject("ti", Person::Second, Number::Singular, "you (sg)"),
                    stem("huitz", "come"),
                ],
            ),
            form("huitz", "he/she/it comes", vec![stem("huitz", "come")]),
            form(
                "tihuitzeh",
                "we come",
                vec![
                    subject("ti", Person::First, Number::Plural, "we"),
                    stem("huitz", "come"),
                    plural("eh"),
                ],
            ),
            form(
                "anhuitzeh",
                "you (pl) come",
                vec![
                    subject("an", Person::Second, Number::Plural, "you (pl)"),
                    stem("huitz", "come"),
                    plural("eh"),
                ],
            ),
            form(
                "huitzeh",
                "they come",
                vec![stem("huitz", "come"), plural("eh")],
            ),
        ];

        Self { forms }
    }

    pub fn lookup(&self, word: &str) -> Option<&IrregularForm> {
        self.forms.iter().find(|f| f.form == word)
    }
}

impl Default for IrregularTable {
    fn default() -> Self {
        Self::new()
    }
}
