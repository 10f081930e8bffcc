//! The opt-in substring pass in front of the fuzzy scorer.

use super::common::{catalogue, door_catalogue, make_entries, names};
use diskfind::{score, search, SearchOptions};

fn with_prefilter() -> SearchOptions {
    SearchOptions::default().with_prefilter(true)
}

#[test]
fn test_prefilter_never_adds_results() {
    let corpus = door_catalogue();
    for query in ["двери", "инструкуия", "каталог", "фасады", "распашные двери alta"] {
        let full = search(query, &corpus, &SearchOptions::default());
        let narrowed = search(query, &corpus, &with_prefilter());
        for hit in &narrowed {
            assert!(
                full.iter().any(|r| r.entry == hit.entry && r.relevance == hit.relevance),
                "{} added {} under prefilter",
                query,
                hit.entry.name
            );
        }
    }
}

#[test]
fn test_prefilter_keeps_containment_hits() {
    let corpus = catalogue(400);
    let full = search("каталог", &corpus, &SearchOptions::default().with_limit(400));
    let narrowed = search("каталог", &corpus, &with_prefilter().with_limit(400));

    let full_exact: Vec<&str> = full
        .iter()
        .filter(|r| r.relevance == 100.0)
        .map(|r| r.entry.name.as_str())
        .collect();
    assert!(!full_exact.is_empty());
    assert_eq!(names(&narrowed)[..full_exact.len()], full_exact[..]);
}

#[test]
fn test_prefilter_drops_typo_only_matches() {
    let corpus = door_catalogue();
    assert!(!search("инструкуия", &corpus, &SearchOptions::default()).is_empty());
    assert!(search("инструкуия", &corpus, &with_prefilter()).is_empty());
}

#[test]
fn test_prefilter_drops_shorter_stem_matches() {
    // "двер" (from the name) sits inside "дверям" (from the query), but no
    // query form is a substring of the name.
    let corpus = make_entries(&["дверь инструкция.pdf"]);
    assert_eq!(score("дверями", "дверь инструкция.pdf"), 68.0);
    assert_eq!(search("дверями", &corpus, &SearchOptions::default()).len(), 1);
    assert!(search("дверями", &corpus, &with_prefilter()).is_empty());
}
