//! End-to-end queries against a realistic catalogue.
//!
//! Each test is a query a user actually types: another case ending, a typo,
//! a stray preposition. The expected ranking is what they'd want to see.

use super::common::{door_catalogue, make_entries, names};
use diskfind::{explain, score, search, similarity, MatchPath, SearchOptions};

// ============================================================================
// WORD SIMILARITY
// ============================================================================

#[test]
fn test_inflected_forms_are_near_identical() {
    assert!(similarity("двери", "дверь") >= 0.95);
    assert!(similarity("распашные", "распашная") >= 0.8);
}

#[test]
fn test_unrelated_words_are_dissimilar() {
    assert_eq!(similarity("стол", "дверь"), 0.0);
}

// ============================================================================
// SCORING
// ============================================================================

#[test]
fn test_multi_word_query_with_inflections() {
    let s = score("Распашные двери ALTA", "ALTA_Распашная_дверь_инструкция.pdf");
    assert!(s > 50.0, "got {}", s);
}

#[test]
fn test_unrelated_query_scores_zero() {
    assert_eq!(score("инструкция установки", "Каталог_2024.pdf"), 0.0);
}

#[test]
fn test_case_and_separators_ignored() {
    assert_eq!(score("КАТАЛОГ 2024", "каталог_2024.pdf"), 100.0);
}

#[test]
fn test_explain_agrees_with_score() {
    for name in door_catalogue().iter().map(|e| e.name.as_str()) {
        for query in ["двери", "инструкуия", "каталог 2024", "для у о", "фасады дома"] {
            assert_eq!(explain(query, name).score, score(query, name));
        }
    }
}

#[test]
fn test_explain_reports_token_partners() {
    let breakdown = explain("Распашные двери", "ALTA_Распашная_дверь_инструкция.pdf");
    assert_eq!(breakdown.path, MatchPath::Tokens);
    assert_eq!(breakdown.matched(), 2);
    assert_eq!(breakdown.tokens[1].query_token, "двери");
    assert_eq!(breakdown.tokens[1].best_entry_token.as_deref(), Some("дверь"));
}

// ============================================================================
// SEARCH
// ============================================================================

#[test]
fn test_door_query_finds_both_door_files() {
    let corpus = make_entries(&["двери1.pdf", "дверь.pdf", "стол.pdf"]);
    let results = search("двери", &corpus, &SearchOptions::default());
    assert_eq!(names(&results), vec!["двери1.pdf", "дверь.pdf"]);
}

#[test]
fn test_stop_word_query_returns_nothing() {
    let corpus = door_catalogue();
    assert!(search("для у о", &corpus, &SearchOptions::default()).is_empty());
}

#[test]
fn test_empty_query_returns_nothing() {
    let corpus = door_catalogue();
    assert!(search("", &corpus, &SearchOptions::default()).is_empty());
    assert!(search("?!", &corpus, &SearchOptions::default()).is_empty());
}

#[test]
fn test_catalogue_best_match_first() {
    let corpus = door_catalogue();
    let results = search("распашные двери alta", &corpus, &SearchOptions::default());
    assert_eq!(results[0].entry.name, "ALTA_Распашная_дверь_инструкция.pdf");
    assert_eq!(results[0].relevance, 100.0);
}

#[test]
fn test_containment_hits_keep_corpus_order() {
    let corpus = door_catalogue();
    let results = search("инструкция", &corpus, &SearchOptions::default());
    assert_eq!(
        names(&results)[..2],
        ["ALTA_Распашная_дверь_инструкция.pdf", "Инструкция по монтажу.docx"]
    );
    assert!(results[..2].iter().all(|r| r.relevance == 100.0));
}

#[test]
fn test_typo_still_found() {
    // "инструкуия" vs "инструкция": ratio 0.9, tier weight 0.8 → 84.
    // vs "инструкция.pdf": ratio 0.75, tier weight 0.6 → 68.
    let corpus = door_catalogue();
    let results = search("инструкуия", &corpus, &SearchOptions::default());
    assert_eq!(
        names(&results)[..2],
        ["Инструкция по монтажу.docx", "ALTA_Распашная_дверь_инструкция.pdf"]
    );
    assert!((results[0].relevance - 84.0).abs() < 1e-9);
    assert!((results[1].relevance - 68.0).abs() < 1e-9);
}

#[test]
fn test_query_with_preposition() {
    // "по" is dropped from the query but the phrase still matches verbatim.
    let corpus = door_catalogue();
    let results = search("Инструкция по монтажу", &corpus, &SearchOptions::default());
    assert_eq!(results[0].entry.name, "Инструкция по монтажу.docx");
    assert_eq!(results[0].relevance, 100.0);
}
