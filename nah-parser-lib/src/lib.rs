pub mod ambiguous;
pub mod analyzer;
pub mod constraints;
pub mod irregular;
pub mod lexicon;
pub mod orthography;
pub mod output;
pub mod prefix;
pub mod search;
pub mod state;
pub mod translator;
pub mod types;

pub use analyzer::{AnalyzeError, Analyzer};
pub use lexicon::Lexicon;
pub use orthography::{classical_to_modern, modern_to_classical};
pub use types::{Analysis, Morpheme, Orthography, ParsedMorpheme, Parsing};
