// Lexicon-driven backtracking segmentation.
//
// Suffixes are peeled right-to-left, trying every match at every position
// rather than a single greedy cut; ambiguity is resolved later by the
// validators, not here. After each stripped suffix the remaining left segment
// is resolved three ways (verb-stem-ending, noun-stem-ending, and a general
// prefix/stem chain) and the search recurses on the shorter remainder. The
// whole segment is also tried directly so zero-suffix words are covered.
//
// Left-remainder resolution is a fixed-point iteration over parse states:
// stems are matched at the end of the remainder first, and only if no stem
// matches are prefixes tried at its start. Every match spawns a new state.
//
// The search is exponential in the worst case; the morpheme inventory is
// small and words are short, and a live-state cap bounds memory on
// pathological inputs.

use std::collections::HashSet;

use crate::lexicon::Lexicon;
use crate::prefix::PrefixValidator;
use crate::state::ParseState;
use crate::types::{Morpheme, MorphemeKind, StemKind, SuffixCategory};

/// Safety limit on concurrently live parse states.
pub const MAX_LIVE_STATES: usize = 4096;

/// Identity of one morpheme match site within a word: surface form, category,
/// and absolute byte position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceKey {
    pub surface: String,
    pub kind: MorphemeKind,
    pub position: usize,
}

impl InstanceKey {
    fn new(morpheme: &Morpheme, position: usize) -> Self {
        Self {
            surface: morpheme.surface().to_string(),
            kind: morpheme.kind(),
            position,
        }
    }
}

/// Morpheme instances forbidden from matching during a retry.
pub type ExclusionSet = HashSet<InstanceKey>;

/// A structurally complete decomposition, not yet grammar-checked.
/// All three sequences are in left-to-right surface order.
#[derive(Debug, Clone)]
pub struct CandidateParse<'lx> {
    pub prefixes: Vec<&'lx Morpheme>,
    pub stems: Vec<&'lx Morpheme>,
    pub suffixes: Vec<&'lx Morpheme>,
}

impl<'lx> CandidateParse<'lx> {
    /// Morphemes in prefixes, stems, suffixes order.
    pub fn ordered_morphemes(&self) -> Vec<&'lx Morpheme> {
        self.prefixes
            .iter()
            .chain(self.stems.iter())
            .chain(self.suffixes.iter())
            .copied()
            .collect()
    }
}

/// Result of one search invocation. `identified` is only populated on the
/// first pass and lists every morpheme instance matched anywhere.
pub struct SearchOutcome<'lx> {
    pub parses: Vec<CandidateParse<'lx>>,
    pub identified: Vec<InstanceKey>,
}

/// Collects first-pass morpheme instances, deduplicated by instance key.
struct Recorder {
    active: bool,
    seen: HashSet<InstanceKey>,
    identified: Vec<InstanceKey>,
}

impl Recorder {
    fn new(active: bool) -> Self {
        Self {
            active,
            seen: HashSet::new(),
            identified: Vec::new(),
        }
    }

    fn record(&mut self, morpheme: &Morpheme, position: usize) {
        if !self.active {
            return;
        }
        let key = InstanceKey::new(morpheme, position);
        if self.seen.insert(key.clone()) {
            self.identified.push(key);
        }
    }
}

pub struct Search<'lx> {
    lexicon: &'lx Lexicon,
    validator: PrefixValidator<'lx>,
}

impl<'lx> Search<'lx> {
    pub fn new(lexicon: &'lx Lexicon) -> Self {
        Self {
            lexicon,
            validator: PrefixValidator::new(lexicon),
        }
    }

    /// Explore every decomposition of `word` reachable without the excluded
    /// morpheme instances.
    pub fn run(
        &self,
        word: &str,
        imperative: bool,
        excluded: &ExclusionSet,
        first_pass: bool,
    ) -> SearchOutcome<'lx> {
        let mut recorder = Recorder::new(first_pass);
        let mut chosen = Vec::new();
        let parses = self.parse_suffixes(word, &mut chosen, imperative, excluded, &mut recorder);
        SearchOutcome {
            parses,
            identified: recorder.identified,
        }
    }

    fn parse_suffixes(
        &self,
        segment: &str,
        chosen: &mut Vec<&'lx Morpheme>,
        imperative: bool,
        excluded: &ExclusionSet,
        recorder: &mut Recorder,
    ) -> Vec<CandidateParse<'lx>> {
        if segment.is_empty() {
            let states = self.resolve_left(segment, chosen, None, excluded, recorder);
            return states
                .into_iter()
                .filter(|s| !s.has_remainder() && (s.has_stem() || s.has_prefix()))
                .map(|s| Self::to_candidate(s, chosen))
                .collect();
        }

        let mut parses = Vec::new();

        for suffix in self.lexicon.suffixes() {
            let surface = suffix.surface();
            if !segment.ends_with(surface) {
                continue;
            }
            let position = segment.len() - surface.len();
            if excluded.contains(&InstanceKey::new(suffix, position)) {
                continue;
            }
            recorder.record(suffix, position);

            let resolved = self.resolve_polymorphic(suffix, imperative);
            let remainder = &segment[..position];
            chosen.push(resolved);

            parses.extend(self.try_stem_ending(
                remainder,
                chosen,
                StemKind::Verb,
                excluded,
                recorder,
            ));
            parses.extend(self.try_stem_ending(
                remainder,
                chosen,
                StemKind::Noun,
                excluded,
                recorder,
            ));
            parses.extend(self.try_prefixes_and_stems(remainder, chosen, excluded, recorder));
            parses.extend(self.parse_suffixes(remainder, chosen, imperative, excluded, recorder));

            chosen.pop();
        }

        // The whole segment interpreted directly as a prefix/stem chain.
        parses.extend(self.try_prefixes_and_stems(segment, chosen, excluded, recorder));

        parses
    }

    /// One surface suffix form is polymorphic by category: in imperative
    /// context it is the plural command marker, otherwise the locative.
    fn resolve_polymorphic(&self, suffix: &'lx Morpheme, imperative: bool) -> &'lx Morpheme {
        if suffix.surface() != "can" {
            return suffix;
        }
        let wanted = if imperative {
            SuffixCategory::Plural
        } else {
            SuffixCategory::Locative
        };
        self.lexicon
            .find(|m| m.surface() == "can" && m.suffix_category() == Some(wanted))
            .unwrap_or(suffix)
    }

    /// Resolve `segment` as [prefixes]+[stem] with the longest non-excluded
    /// stem of the given kind forced at the end.
    fn try_stem_ending(
        &self,
        segment: &str,
        chosen: &mut Vec<&'lx Morpheme>,
        kind: StemKind,
        excluded: &ExclusionSet,
        recorder: &mut Recorder,
    ) -> Vec<CandidateParse<'lx>> {
        let wanted = match kind {
            StemKind::Verb => MorphemeKind::VerbStem,
            StemKind::Noun => MorphemeKind::NounStem,
        };
        let stem = self.lexicon.stems().filter(|m| m.kind() == wanted).find(|m| {
            segment.ends_with(m.surface())
                && !excluded.contains(&InstanceKey::new(
                    m,
                    segment.len() - m.surface().len(),
                ))
        });
        let stem = match stem {
            Some(stem) => stem,
            None => return Vec::new(),
        };
        recorder.record(stem, segment.len() - stem.surface().len());

        let remainder = &segment[..segment.len() - stem.surface().len()];
        let states = self.resolve_left(remainder, chosen, Some(stem), excluded, recorder);
        states
            .into_iter()
            .filter(|s| !s.has_remainder())
            .map(|s| Self::to_candidate(s, chosen))
            .collect()
    }

    fn try_prefixes_and_stems(
        &self,
        segment: &str,
        chosen: &mut Vec<&'lx Morpheme>,
        excluded: &ExclusionSet,
        recorder: &mut Recorder,
    ) -> Vec<CandidateParse<'lx>> {
        let states = self.resolve_left(segment, chosen, None, excluded, recorder);
        states
            .into_iter()
            .filter(|s| !s.has_remainder() && (s.has_stem() || s.has_prefix()))
            .map(|s| Self::to_candidate(s, chosen))
            .collect()
    }

    /// Fixed-point iteration over parse states. Each round, every live state
    /// with a remainder tries stems at its end; only when no stem matches are
    /// prefixes tried at its start. The loop ends when a round produces no
    /// new matches.
    fn resolve_left(
        &self,
        segment: &str,
        chosen: &[&'lx Morpheme],
        initial_stem: Option<&'lx Morpheme>,
        excluded: &ExclusionSet,
        recorder: &mut Recorder,
    ) -> Vec<ParseState<'lx>> {
        let mut states = vec![ParseState::new(initial_stem, segment)];

        let mut matched = true;
        while matched {
            matched = false;
            let mut next = Vec::new();

            for state in &states {
                if !state.has_remainder() {
                    next.push(state.clone());
                    continue;
                }

                let stem_states = self.stem_matches(state, excluded, recorder);
                if !stem_states.is_empty() {
                    matched = true;
                    next.extend(stem_states);
                    continue;
                }

                let prefix_states = self.prefix_matches(state, chosen, excluded, recorder);
                if !prefix_states.is_empty() {
                    matched = true;
                    next.extend(prefix_states);
                    continue;
                }

                next.push(state.clone());
            }

            if next.len() > MAX_LIVE_STATES {
                next.truncate(MAX_LIVE_STATES);
            }
            states = next;
        }

        states
            .into_iter()
            .filter(|s| s.has_stem() || s.has_prefix())
            .collect()
    }

    fn stem_matches(
        &self,
        state: &ParseState<'lx>,
        excluded: &ExclusionSet,
        recorder: &mut Recorder,
    ) -> Vec<ParseState<'lx>> {
        let mut matches = Vec::new();
        for stem in self.lexicon.stems() {
            if !state.remainder().ends_with(stem.surface()) {
                continue;
            }
            let position = state.offset() + state.remainder().len() - stem.surface().len();
            if excluded.contains(&InstanceKey::new(stem, position)) {
                continue;
            }
            recorder.record(stem, position);
            matches.push(state.with_stem(stem));
        }
        matches
    }

    fn prefix_matches(
        &self,
        state: &ParseState<'lx>,
        chosen: &[&'lx Morpheme],
        excluded: &ExclusionSet,
        recorder: &mut Recorder,
    ) -> Vec<ParseState<'lx>> {
        let mut matches = Vec::new();
        for prefix in self.lexicon.prefixes() {
            if !state.remainder().starts_with(prefix.surface()) {
                continue;
            }
            let valid = if PrefixValidator::is_ambiguous(prefix.surface()) {
                self.validator.is_valid_ambiguous(prefix, state, chosen)
            } else {
                self.validator.is_valid_order(prefix, state)
            };
            if !valid {
                continue;
            }
            let position = state.offset();
            if excluded.contains(&InstanceKey::new(prefix, position)) {
                continue;
            }
            recorder.record(prefix, position);
            matches.push(state.with_prefix(prefix));
        }
        matches
    }

    fn to_candidate(state: ParseState<'lx>, chosen: &[&'lx Morpheme]) -> CandidateParse<'lx> {
        let suffixes = chosen.iter().rev().copied().collect();
        let (prefixes, stems) = state.into_parts();
        CandidateParse {
            prefixes,
            stems,
            suffixes,
        }
    }
}
