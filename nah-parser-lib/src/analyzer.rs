// Orchestrates one `analyze` call: fast paths, the search-and-retry loop
// with its growing exclusion set, and finalization of surviving parses.

use std::collections::HashSet;

use tracing::debug;

use crate::ambiguous::AmbiguousTable;
use crate::constraints::ConstraintValidator;
use crate::irregular::IrregularTable;
use crate::lexicon::Lexicon;
use crate::orthography::{classical_to_modern, modern_to_classical};
use crate::search::{CandidateParse, ExclusionSet, InstanceKey, Search};
use crate::translator::Translator;
use crate::types::{Analysis, MorphemeKind, Orthography, ParsedMorpheme, Parsing};

/// Cap on search-and-retry iterations per call.
pub const MAX_ATTEMPTS: u32 = 20;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("failed to find a complete and valid morpheme parse for '{word}' after {attempts} attempts")]
    Exhausted { word: String, attempts: u32 },
}

/// Morphological analyzer over the process-wide lexicon. Each call is
/// independent; all mutable state is local to the call, so one `Analyzer`
/// can serve words from many threads.
pub struct Analyzer {
    lexicon: &'static Lexicon,
    ambiguous: AmbiguousTable,
    irregular: IrregularTable,
    max_attempts: u32,
}

impl Analyzer {
    pub fn new() -> Self {
        let lexicon = Lexicon::global();
        Self {
            lexicon,
            ambiguous: AmbiguousTable::new(lexicon),
            irregular: IrregularTable::new(),
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Analyze one word. Failure is reported in the envelope, never raised.
    pub fn analyze(&self, word: &str, orthography: Orthography) -> Analysis {
        match self.try_analyze(word, orthography) {
            Ok(parsings) => Analysis {
                success: true,
                parsings,
                error: None,
            },
            Err(err) => Analysis {
                success: false,
                parsings: Vec::new(),
                error: Some(err.to_string()),
            },
        }
    }

    pub fn try_analyze(
        &self,
        word: &str,
        orthography: Orthography,
    ) -> Result<Vec<Parsing>, AnalyzeError> {
        let mut processed = word.to_lowercase();
        if orthography == Orthography::Modern {
            processed = modern_to_classical(&processed);
        }

        if let Some(parsings) = self.ambiguous_word(&processed, orthography) {
            debug!(word = %processed, "ambiguous-word fast path");
            return Ok(parsings);
        }
        if let Some(parsings) = self.invariable_word(&processed, orthography) {
            debug!(word = %processed, "invariable fast path");
            return Ok(parsings);
        }
        if let Some(parsings) = self.irregular_verb(&processed, orthography) {
            debug!(word = %processed, "irregular-verb fast path");
            return Ok(parsings);
        }

        let imperative = self.is_imperative_context(&processed);
        let candidates = self.search_with_retries(&processed, imperative)?;
        let parsings = self.finalize(&candidates, orthography);
        if parsings.is_empty() {
            return Err(AnalyzeError::Exhausted {
                word: processed,
                attempts: self.max_attempts,
            });
        }
        Ok(parsings)
    }

    fn ambiguous_word(&self, word: &str, orthography: Orthography) -> Option<Vec<Parsing>> {
        let entry = self.ambiguous.lookup(word)?;
        let translator = Translator::new(self.lexicon);
        let parsings = entry
            .parses
            .iter()
            .map(|sequence| {
                let english_translation = translator.translate(sequence);
                let morphemes = sequence
                    .iter()
                    .map(|m| ParsedMorpheme {
                        morpheme: output_surface(&m.morpheme, orthography),
                        details: m.details.clone(),
                    })
                    .collect();
                Parsing {
                    morphemes,
                    english_translation,
                }
            })
            .collect();
        Some(parsings)
    }

    fn invariable_word(&self, word: &str, orthography: Orthography) -> Option<Vec<Parsing>> {
        let entry = self.lexicon.invariables().find(|m| m.surface() == word)?;
        let morphemes = vec![ParsedMorpheme {
            morpheme: output_surface(entry.surface(), orthography),
            details: entry.clone(),
        }];
        let translator = Translator::new(self.lexicon);
        let english_translation = translator.translate(&morphemes);
        Some(vec![Parsing {
            morphemes,
            english_translation,
        }])
    }

    fn irregular_verb(&self, word: &str, orthography: Orthography) -> Option<Vec<Parsing>> {
        let form = self.irregular.lookup(word)?;
        let morphemes = form
            .morphemes
            .iter()
            .map(|m| ParsedMorpheme {
                morpheme: output_surface(&m.morpheme, orthography),
                details: m.details.clone(),
            })
            .collect();
        Some(vec![Parsing {
            morphemes,
            english_translation: form.translation.clone(),
        }])
    }

    fn is_imperative_context(&self, word: &str) -> bool {
        self.lexicon
            .imperative_prefixes()
            .any(|m| word.starts_with(m.surface()))
    }

    /// Run the search, and on failure retry with one more morpheme instance
    /// excluded each time, until candidates survive validation or the
    /// exclusion budget is exhausted.
    fn search_with_retries(
        &self,
        word: &str,
        imperative: bool,
    ) -> Result<Vec<CandidateParse<'static>>, AnalyzeError> {
        let search = Search::new(self.lexicon);
        let validator = ConstraintValidator::new(self.lexicon);
        let mut excluded = ExclusionSet::new();
        let mut first_pass: Vec<InstanceKey> = Vec::new();
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let outcome = search.run(word, imperative, &excluded, attempts == 1);
            if attempts == 1 {
                first_pass = outcome.identified;
            }

            if !outcome.parses.is_empty() {
                let any_valid = outcome
                    .parses
                    .iter()
                    .any(|p| validator.is_grammatical(&p.ordered_morphemes()));
                if any_valid {
                    debug!(word, attempts, candidates = outcome.parses.len(), "search succeeded");
                    return Ok(outcome.parses);
                }
            }

            let next = match next_exclusion(&first_pass, &excluded) {
                Some(key) => key,
                None => {
                    return Err(AnalyzeError::Exhausted {
                        word: word.to_string(),
                        attempts,
                    })
                }
            };
            debug!(
                word,
                attempts,
                surface = %next.surface,
                position = next.position,
                "no valid parse, excluding instance and retrying"
            );
            excluded.insert(next);

            if excluded.len() >= first_pass.len() || attempts >= self.max_attempts {
                return Err(AnalyzeError::Exhausted {
                    word: word.to_string(),
                    attempts,
                });
            }
        }
    }

    /// Render candidates into ordered morpheme sequences with glosses,
    /// filter ungrammatical ones, and deduplicate by signature.
    fn finalize(&self, candidates: &[CandidateParse<'static>], orthography: Orthography) -> Vec<Parsing> {
        let translator = Translator::new(self.lexicon);
        let validator = ConstraintValidator::new(self.lexicon);

        let parsings: Vec<Parsing> = candidates
            .iter()
            .map(|parse| {
                let morphemes: Vec<ParsedMorpheme> = parse
                    .ordered_morphemes()
                    .into_iter()
                    .map(|m| ParsedMorpheme {
                        morpheme: output_surface(m.surface(), orthography),
                        details: m.clone(),
                    })
                    .collect();
                let english_translation = translator.translate(&morphemes);
                Parsing {
                    morphemes,
                    english_translation,
                }
            })
            .collect();

        deduplicate(validator.filter_parsings(parsings))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn output_surface(surface: &str, orthography: Orthography) -> String {
    match orthography {
        Orthography::Classical => surface.to_string(),
        Orthography::Modern => classical_to_modern(surface),
    }
}

/// Next instance to forbid: suffixes right-to-left, then stems right-to-left,
/// then prefixes left-to-right. A heuristic preserved for compatibility; it
/// is not guaranteed to reach every parse obtainable by excluding other
/// combinations.
fn next_exclusion(identified: &[InstanceKey], excluded: &ExclusionSet) -> Option<InstanceKey> {
    let mut rightmost_first: Vec<&InstanceKey> = identified.iter().collect();
    rightmost_first.sort_by(|a, b| b.position.cmp(&a.position));

    for key in &rightmost_first {
        if key.kind == MorphemeKind::Suffix && !excluded.contains(*key) {
            return Some((*key).clone());
        }
    }
    for key in &rightmost_first {
        if matches!(key.kind, MorphemeKind::NounStem | MorphemeKind::VerbStem)
            && !excluded.contains(*key)
        {
            return Some((*key).clone());
        }
    }

    let mut leftmost_first: Vec<&InstanceKey> = identified.iter().collect();
    leftmost_first.sort_by(|a, b| a.position.cmp(&b.position));
    for key in &leftmost_first {
        if key.kind == MorphemeKind::Prefix && !excluded.contains(*key) {
            return Some((*key).clone());
        }
    }

    None
}

/// Drop parsings whose full morpheme signature (surface, category, sub-tag,
/// role, person, number) duplicates an earlier one.
fn deduplicate(parsings: Vec<Parsing>) -> Vec<Parsing> {
    let mut seen = HashSet::new();
    parsings
        .into_iter()
        .filter(|parsing| {
            let key = parsing
                .morphemes
                .iter()
                .map(morpheme_signature)
                .collect::<Vec<_>>()
                .join("|");
            seen.insert(key)
        })
        .collect()
}

fn morpheme_signature(m: &ParsedMorpheme) -> String {
    format!(
        "{}:{:?}:{:?}:{:?}:{:?}:{:?}",
        m.morpheme,
        m.details.kind(),
        m.details.suffix_category(),
        m.details.prefix_role(),
        m.details.person(),
        m.details.number()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_table_takes_priority() {
        let analyzer = Analyzer::new();
        let result = analyzer.analyze("imeuh", Orthography::Classical);
        assert!(result.success);
        assert_eq!(result.parsings.len(), 2);
    }

    #[test]
    fn invariable_word_bypasses_search() {
        let analyzer = Analyzer::new();
        let result = analyzer.analyze("nican", Orthography::Classical);
        assert!(result.success);
        assert_eq!(result.parsings.len(), 1);
        let morphemes = &result.parsings[0].morphemes;
        assert_eq!(morphemes.len(), 1);
        assert_eq!(morphemes[0].details.kind(), MorphemeKind::Adverb);
    }

    #[test]
    fn irregular_verb_returns_literal_translation() {
        let analyzer = Analyzer::new();
        let result = analyzer.analyze("nicah", Orthography::Classical);
        assert!(result.success);
        assert_eq!(result.parsings[0].english_translation, "I am (located)");
    }

    #[test]
    fn unparseable_word_fails_gracefully() {
        let analyzer = Analyzer::new();
        let result = analyzer.analyze("xyzxyz", Orthography::Classical);
        assert!(!result.success);
        assert!(result.parsings.is_empty());
        let error = result.error.expect("failure should carry an error");
        assert!(error.contains("xyzxyz"));
    }

    #[test]
    fn attempts_are_capped() {
        let analyzer = Analyzer::new().with_max_attempts(2);
        // Candidates exist but none are grammatical, so the retry loop runs
        // until the attempt cap stops it.
        let result = analyzer.analyze("cihuahmeh", Orthography::Classical);
        assert!(!result.success);
    }

    #[test]
    fn uppercase_input_is_normalized() {
        let analyzer = Analyzer::new();
        let result = analyzer.analyze("Atl", Orthography::Classical);
        assert!(result.success);
        assert_eq!(result.parsings[0].morphemes[0].morpheme, "a");
    }
}
