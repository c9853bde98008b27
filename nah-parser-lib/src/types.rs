use serde::{Deserialize, Serialize};

/// Grammatical role of a prefix within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixRole {
    Subject,
    Object,
    Possessive,
    Reflexive,
    Negation,
    Imperative,
}

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

/// Stem type a prefix is restricted to attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemKind {
    Noun,
    Verb,
}

/// Sub-category of a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixCategory {
    Absolutive,
    Plural,
    PluralMarker,
    Possessive,
    Locative,
    Imperfect,
}

/// Category tag of a morpheme, used for instance keys and deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphemeKind {
    Prefix,
    Suffix,
    NounStem,
    VerbStem,
    Particle,
    Interrogative,
    Adverb,
    Adjective,
    Interjection,
    Numeral,
    IrregularVerb,
}

fn default_true() -> bool {
    true
}

/// A lexicon record. One variant per morpheme category, each carrying only
/// the fields that category can have; consumers match exhaustively so a new
/// category forces review of every rule that touches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Morpheme {
    Prefix {
        morpheme: String,
        role: PrefixRole,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        person: Option<Person>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        number: Option<Number>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        used_with: Option<StemKind>,
        english: String,
    },
    Suffix {
        morpheme: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<SuffixCategory>,
        #[serde(default)]
        nominalizing: bool,
        #[serde(default)]
        countable: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        english: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        english_suffix: Option<String>,
    },
    NounStem {
        morpheme: String,
        english: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        english_plural: Option<String>,
        #[serde(default)]
        animate: bool,
        #[serde(default)]
        countable: bool,
        /// False for nouns that never take an absolutive ending in citation
        /// form (e.g. "chichi").
        #[serde(default = "default_true")]
        absolutive_suffix: bool,
    },
    VerbStem {
        morpheme: String,
        english: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        past_participle: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        agent: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        progressive: Option<String>,
    },
    Particle {
        morpheme: String,
        english: String,
    },
    Interrogative {
        morpheme: String,
        english: String,
    },
    Adverb {
        morpheme: String,
        english: String,
    },
    Adjective {
        morpheme: String,
        english: String,
    },
    Interjection {
        morpheme: String,
        english: String,
    },
    Numeral {
        morpheme: String,
        english: String,
    },
    IrregularVerb {
        morpheme: String,
        english: String,
    },
}

impl Morpheme {
    /// The classical-orthography surface form of this record.
    pub fn surface(&self) -> &str {
        match self {
            Morpheme::Prefix { morpheme, .. }
            | Morpheme::Suffix { morpheme, .. }
            | Morpheme::NounStem { morpheme, .. }
            | Morpheme::VerbStem { morpheme, .. }
            | Morpheme::Particle { morpheme, .. }
            | Morpheme::Interrogative { morpheme, .. }
            | Morpheme::Adverb { morpheme, .. }
            | Morpheme::Adjective { morpheme, .. }
            | Morpheme::Interjection { morpheme, .. }
            | Morpheme::Numeral { morpheme, .. }
            | Morpheme::IrregularVerb { morpheme, .. } => morpheme,
        }
    }

    pub fn kind(&self) -> MorphemeKind {
        match self {
            Morpheme::Prefix { .. } => MorphemeKind::Prefix,
            Morpheme::Suffix { .. } => MorphemeKind::Suffix,
            Morpheme::NounStem { .. } => MorphemeKind::NounStem,
            Morpheme::VerbStem { .. } => MorphemeKind::VerbStem,
            Morpheme::Particle { .. } => MorphemeKind::Particle,
            Morpheme::Interrogative { .. } => MorphemeKind::Interrogative,
            Morpheme::Adverb { .. } => MorphemeKind::Adverb,
            Morpheme::Adjective { .. } => MorphemeKind::Adjective,
            Morpheme::Interjection { .. } => MorphemeKind::Interjection,
            Morpheme::Numeral { .. } => MorphemeKind::Numeral,
            Morpheme::IrregularVerb { .. } => MorphemeKind::IrregularVerb,
        }
    }

    pub fn is_stem(&self) -> bool {
        matches!(self, Morpheme::NounStem { .. } | Morpheme::VerbStem { .. })
    }

    pub fn prefix_role(&self) -> Option<PrefixRole> {
        match self {
            Morpheme::Prefix { role, .. } => Some(*role),
            _ => None,
        }
    }

    pub fn person(&self) -> Option<Person> {
        match self {
            Morpheme::Prefix { person, .. } => *person,
            _ => None,
        }
    }

    pub fn number(&self) -> Option<Number> {
        match self {
            Morpheme::Prefix { number, .. } => *number,
            _ => None,
        }
    }

    pub fn used_with(&self) -> Option<StemKind> {
        match self {
            Morpheme::Prefix { used_with, .. } => *used_with,
            _ => None,
        }
    }

    pub fn suffix_category(&self) -> Option<SuffixCategory> {
        match self {
            Morpheme::Suffix { category, .. } => *category,
            _ => None,
        }
    }

    pub fn is_nominalizing(&self) -> bool {
        matches!(self, Morpheme::Suffix { nominalizing: true, .. })
    }

    /// English gloss where the category carries one.
    pub fn english(&self) -> Option<&str> {
        match self {
            Morpheme::Prefix { english, .. }
            | Morpheme::NounStem { english, .. }
            | Morpheme::VerbStem { english, .. }
            | Morpheme::Particle { english, .. }
            | Morpheme::Interrogative { english, .. }
            | Morpheme::Adverb { english, .. }
            | Morpheme::Adjective { english, .. }
            | Morpheme::Interjection { english, .. }
            | Morpheme::Numeral { english, .. }
            | Morpheme::IrregularVerb { english, .. } => Some(english),
            Morpheme::Suffix { english, .. } => english.as_deref(),
        }
    }
}

/// One morpheme of a finished parsing: the surface form as it appears in the
/// requested orthography, plus the lexicon record it resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMorpheme {
    pub morpheme: String,
    pub details: Morpheme,
}

/// A validated decomposition of one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parsing {
    pub morphemes: Vec<ParsedMorpheme>,
    #[serde(rename = "englishTranslation")]
    pub english_translation: String,
}

/// Result envelope of a single `analyze` call. Failure is a normal value,
/// never a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub success: bool,
    pub parsings: Vec<Parsing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Spelling convention of the input word and of the returned surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orthography {
    #[default]
    Classical,
    Modern,
}
