// Regression tests for known words and edge cases.

use nah_parser_lib::types::{MorphemeKind, Number, Person, PrefixRole, SuffixCategory};
use nah_parser_lib::{Analysis, Analyzer, Orthography};

fn analyzer() -> Analyzer {
    Analyzer::new()
}

fn analyze(word: &str) -> Analysis {
    analyzer().analyze(word, Orthography::Classical)
}

fn surfaces(analysis: &Analysis, index: usize) -> Vec<String> {
    analysis.parsings[index]
        .morphemes
        .iter()
        .map(|m| m.morpheme.clone())
        .collect()
}

#[test]
fn atl_is_water() {
    let result = analyze("atl");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1, "atl should have a single parsing");
    assert_eq!(surfaces(&result, 0), vec!["a", "tl"]);

    let stem = &result.parsings[0].morphemes[0].details;
    assert_eq!(stem.kind(), MorphemeKind::NounStem);
    assert_eq!(stem.english(), Some("water"));
    assert_eq!(result.parsings[0].english_translation, "(it is) water");
}

#[test]
fn noteco_is_possessed_lord() {
    let result = analyze("noteco");
    assert!(result.success);
    let morphemes = &result.parsings[0].morphemes;
    assert_eq!(
        morphemes[0].details.prefix_role(),
        Some(PrefixRole::Possessive)
    );
    assert_eq!(morphemes[1].details.kind(), MorphemeKind::NounStem);
}

#[test]
fn nicah_uses_the_irregular_fast_path() {
    let result = analyze("nicah");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    assert_eq!(result.parsings[0].english_translation, "I am (located)");
    assert_eq!(
        result.parsings[0].morphemes[1].details.kind(),
        MorphemeKind::IrregularVerb
    );
}

#[test]
fn nican_uses_the_invariable_fast_path() {
    let result = analyze("nican");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    let morphemes = &result.parsings[0].morphemes;
    assert_eq!(morphemes.len(), 1);
    assert_eq!(morphemes[0].details.kind(), MorphemeKind::Adverb);
    assert_eq!(morphemes[0].details.english(), Some("here"));
}

#[test]
fn nonsense_fails_with_structured_error() {
    let result = analyze("xyzxyz");
    assert!(!result.success);
    assert!(result.parsings.is_empty());
    let error = result.error.expect("failure should carry an error string");
    assert!(error.contains("xyzxyz"));
}

#[test]
fn imeuh_keeps_both_curated_readings() {
    let result = analyze("imeuh");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 2);
    assert_eq!(surfaces(&result, 0), vec!["i", "me", "uh"]);
    assert_eq!(surfaces(&result, 1), vec!["im", "e", "uh"]);
}

#[test]
fn cihuah_is_plural_women() {
    let result = analyze("cihuah");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    assert_eq!(surfaces(&result, 0), vec!["cihua", "h"]);
    assert_eq!(
        result.parsings[0].morphemes[1].details.suffix_category(),
        Some(SuffixCategory::Plural)
    );
    assert_eq!(result.parsings[0].english_translation, "(they are) women");
}

#[test]
fn titlacatl_forces_second_singular_subject() {
    let result = analyze("titlacatl");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    let subject = &result.parsings[0].morphemes[0].details;
    assert_eq!(subject.prefix_role(), Some(PrefixRole::Subject));
    assert_eq!(subject.person(), Some(Person::Second));
    assert_eq!(subject.number(), Some(Number::Singular));
    assert_eq!(
        result.parsings[0].english_translation,
        "you (sg) are a person"
    );
}

#[test]
fn titlacah_forces_first_plural_subject() {
    let result = analyze("titlacah");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    let subject = &result.parsings[0].morphemes[0].details;
    assert_eq!(subject.person(), Some(Person::First));
    assert_eq!(subject.number(), Some(Number::Plural));
    assert_eq!(result.parsings[0].english_translation, "we are people");
}

#[test]
fn niccahua_orders_subject_before_object() {
    let result = analyze("niccahua");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    let morphemes = &result.parsings[0].morphemes;
    assert_eq!(morphemes[0].details.prefix_role(), Some(PrefixRole::Subject));
    assert_eq!(morphemes[1].details.prefix_role(), Some(PrefixRole::Object));
    assert_eq!(morphemes[2].details.kind(), MorphemeKind::VerbStem);
    assert_eq!(
        result.parsings[0].english_translation,
        "I leave him/her/it"
    );
}

#[test]
fn ninoitta_is_first_singular_reflexive() {
    let result = analyze("ninoitta");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    let reflexive = &result.parsings[0].morphemes[1].details;
    assert_eq!(reflexive.prefix_role(), Some(PrefixRole::Reflexive));
    assert_eq!(reflexive.person(), Some(Person::First));
    assert_eq!(result.parsings[0].english_translation, "I see myself");
}

#[test]
fn titoitta_agrees_reflexive_with_plural_subject() {
    let result = analyze("titoitta");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    let morphemes = &result.parsings[0].morphemes;
    assert_eq!(morphemes[0].details.number(), Some(Number::Plural));
    assert_eq!(
        morphemes[1].details.prefix_role(),
        Some(PrefixRole::Reflexive)
    );
    assert_eq!(result.parsings[0].english_translation, "we see ourselves");
}

#[test]
fn xichocacan_resolves_can_as_plural_command() {
    let result = analyze("xichocacan");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    let morphemes = &result.parsings[0].morphemes;
    assert_eq!(
        morphemes[0].details.prefix_role(),
        Some(PrefixRole::Imperative)
    );
    assert_eq!(
        morphemes[2].details.suffix_category(),
        Some(SuffixCategory::Plural)
    );
}

#[test]
fn acan_resolves_can_as_locative() {
    let result = analyze("acan");
    assert!(result.success);
    let morphemes = &result.parsings[0].morphemes;
    assert_eq!(
        morphemes[1].details.suffix_category(),
        Some(SuffixCategory::Locative)
    );
}

#[test]
fn tlacua_reads_unspecified_object() {
    let result = analyze("tlacua");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    assert_eq!(
        result.parsings[0].english_translation,
        "he/she/it eats something"
    );
}

#[test]
fn nomol_is_a_possessed_inanimate_noun() {
    let result = analyze("nomol");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    assert_eq!(surfaces(&result, 0), vec!["no", "mol"]);
    assert_eq!(result.parsings[0].english_translation, "(it is) my sauce");
}

#[test]
fn nomolhuan_carries_the_plural_possessive_suffix() {
    let result = analyze("nomolhuan");
    assert!(result.success);
    assert_eq!(surfaces(&result, 0), vec!["no", "mol", "huan"]);
    assert_eq!(
        result.parsings[0].morphemes[2].details.suffix_category(),
        Some(SuffixCategory::Possessive)
    );
}

#[test]
fn cacahuacomitl_is_a_compound_noun() {
    let result = analyze("cacahuacomitl");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 1);
    assert_eq!(surfaces(&result, 0), vec!["cacahua", "comi", "tl"]);
    assert_eq!(
        result.parsings[0].english_translation,
        "(it is a) cacao-pot"
    );
}

#[test]
fn bare_inanimate_noun_stem_fails() {
    // "cal" with the implied absolutive missing is invalid unless possessed.
    let result = analyze("cal");
    assert!(!result.success);
}

#[test]
fn possessive_suffix_without_prefix_fails() {
    let result = analyze("meuh");
    assert!(!result.success);
    assert!(result.error.is_some());
}

#[test]
fn double_plural_fails() {
    let result = analyze("cihuahmeh");
    assert!(!result.success);
}

#[test]
fn chichi_is_valid_without_absolutive() {
    let result = analyze("chichi");
    assert!(result.success);
    assert_eq!(surfaces(&result, 0), vec!["chichi"]);
}

#[test]
fn michin_takes_the_in_absolutive() {
    let result = analyze("michin");
    assert!(result.success);
    assert_eq!(surfaces(&result, 0), vec!["mich", "in"]);
}

#[test]
fn tinechitta_keeps_both_subject_readings() {
    // With no disambiguating suffix, ti- stays ambiguous between
    // second-singular and first-plural; both survive validation.
    let result = analyze("tinechitta");
    assert!(result.success);
    assert_eq!(result.parsings.len(), 2);
    let numbers: Vec<Option<Number>> = result
        .parsings
        .iter()
        .map(|p| p.morphemes[0].details.number())
        .collect();
    assert!(numbers.contains(&Some(Number::Singular)));
    assert!(numbers.contains(&Some(Number::Plural)));
}

#[test]
fn modern_orthography_round_trips_surfaces() {
    let analyzer = analyzer();
    let result = analyzer.analyze("siwah", Orthography::Modern);
    assert!(result.success);
    let morphemes = &result.parsings[0].morphemes;
    assert_eq!(morphemes[0].morpheme, "siwa");
    assert_eq!(morphemes[0].details.english(), Some("woman"));
    assert_eq!(morphemes[1].details.suffix_category(), Some(SuffixCategory::Plural));
}

#[test]
fn modern_kalli_matches_classical_calli() {
    let analyzer = analyzer();
    let modern = analyzer.analyze("kalli", Orthography::Modern);
    let classical = analyzer.analyze("calli", Orthography::Classical);
    assert!(modern.success);
    assert!(classical.success);

    let kinds = |a: &Analysis| -> Vec<MorphemeKind> {
        a.parsings[0]
            .morphemes
            .iter()
            .map(|m| m.details.kind())
            .collect()
    };
    assert_eq!(kinds(&modern), kinds(&classical));
}
