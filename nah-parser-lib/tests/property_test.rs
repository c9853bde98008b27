// Property tests for the analyze contract: determinism, orthography
// round-trips, signature uniqueness, and constraint soundness.

use proptest::prelude::*;

use nah_parser_lib::types::{Morpheme, MorphemeKind, PrefixRole, SuffixCategory};
use nah_parser_lib::{classical_to_modern, Analyzer, Orthography, Parsing};

/// Classical-orthography words whose spelling survives a full
/// classical -> modern -> classical conversion cycle.
fn vocabulary() -> Vec<&'static str> {
    vec![
        "atl",
        "calli",
        "cihuah",
        "cihuameh",
        "nitlacatl",
        "titlacatl",
        "titlacah",
        "quicahua",
        "ninoitta",
        "titoitta",
        "tlacua",
        "nomol",
        "nomolhuan",
        "mocihuauh",
        "cacahuacomitl",
        "michin",
        "chichi",
        "nican",
        "nicah",
        "noteco",
        "imeuh",
        "xichocacan",
        "cuani",
        "oquichtin",
        "tamalli",
    ]
}

fn signature(parsing: &Parsing) -> Vec<String> {
    parsing
        .morphemes
        .iter()
        .map(|m| {
            format!(
                "{}:{:?}:{:?}:{:?}:{:?}:{:?}",
                m.morpheme,
                m.details.kind(),
                m.details.suffix_category(),
                m.details.prefix_role(),
                m.details.person(),
                m.details.number()
            )
        })
        .collect()
}

fn category_shape(parsing: &Parsing) -> Vec<(MorphemeKind, Option<PrefixRole>)> {
    parsing
        .morphemes
        .iter()
        .map(|m| (m.details.kind(), m.details.prefix_role()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn analysis_is_deterministic(word in "[a-z]{0,8}") {
        let analyzer = Analyzer::new();
        let first = analyzer.analyze(&word, Orthography::Classical);
        let second = analyzer.analyze(&word, Orthography::Classical);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn exclusions_do_not_leak_across_calls(word in proptest::sample::select(vocabulary())) {
        let analyzer = Analyzer::new();
        // A failing word in between must not change a later analysis.
        let before = analyzer.analyze(word, Orthography::Classical);
        let _ = analyzer.analyze("xyzxyz", Orthography::Classical);
        let after = analyzer.analyze(word, Orthography::Classical);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn no_duplicate_parsing_signatures(word in proptest::sample::select(vocabulary())) {
        let analyzer = Analyzer::new();
        let result = analyzer.analyze(word, Orthography::Classical);
        prop_assert!(result.success);

        let signatures: Vec<Vec<String>> =
            result.parsings.iter().map(signature).collect();
        for (i, a) in signatures.iter().enumerate() {
            for b in signatures.iter().skip(i + 1) {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn returned_parsings_satisfy_the_constraints(word in "[a-z]{0,8}") {
        let analyzer = Analyzer::new();
        let result = analyzer.analyze(&word, Orthography::Classical);
        for parsing in &result.parsings {
            let details: Vec<&Morpheme> =
                parsing.morphemes.iter().map(|m| &m.details).collect();

            let primary: Option<&Morpheme> =
                details.iter().filter(|m| m.is_stem()).last().copied();

            // No inanimate noun stem carries a plural suffix.
            if let Some(Morpheme::NounStem { animate: false, .. }) = primary {
                let plural = details
                    .iter()
                    .any(|m| m.suffix_category() == Some(SuffixCategory::Plural));
                prop_assert!(!plural, "inanimate noun with plural suffix in '{}'", word);
            }

            // Reflexive and object prefixes never co-occur.
            let has_role = |role: PrefixRole| {
                details.iter().any(|m| m.prefix_role() == Some(role))
            };
            prop_assert!(
                !(has_role(PrefixRole::Reflexive) && has_role(PrefixRole::Object))
            );

            // Subject precedes object whenever both are present.
            let position = |role: PrefixRole| {
                details.iter().position(|m| m.prefix_role() == Some(role))
            };
            if let (Some(subject), Some(object)) =
                (position(PrefixRole::Subject), position(PrefixRole::Object))
            {
                prop_assert!(subject < object);
            }
        }
    }

    #[test]
    fn orthography_round_trip_preserves_categories(word in proptest::sample::select(vocabulary())) {
        let analyzer = Analyzer::new();
        let classical = analyzer.analyze(word, Orthography::Classical);
        let modern = analyzer.analyze(&classical_to_modern(word), Orthography::Modern);

        prop_assert!(classical.success);
        prop_assert!(modern.success);

        let mut classical_shapes: Vec<_> =
            classical.parsings.iter().map(category_shape).collect();
        let mut modern_shapes: Vec<_> = modern.parsings.iter().map(category_shape).collect();
        classical_shapes.sort();
        modern_shapes.sort();
        prop_assert_eq!(classical_shapes, modern_shapes);
    }
}
