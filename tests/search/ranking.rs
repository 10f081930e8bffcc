//! Ordering, thresholds and limits.

use super::common::{catalogue, make_entries, names};
use diskfind::{rank, score, search, SearchOptions};

// ============================================================================
// LIMITS AND THRESHOLDS
// ============================================================================

#[test]
fn test_limit_one_returns_top_entry() {
    let corpus = make_entries(&[
        "двери.pdf",
        "дверь a.pdf",
        "дверь b.pdf",
        "дверь c.pdf",
        "дверь d.pdf",
    ]);
    // All five qualify; "двери.pdf" only through containment (68).
    assert_eq!(rank("дверь", &corpus, 5.0, 100).len(), 5);

    let top = rank("дверь", &corpus, 5.0, 1);
    assert_eq!(names(&top), vec!["дверь a.pdf"]);
    assert_eq!(top[0].relevance, 100.0);
}

#[test]
fn test_limit_zero_returns_nothing() {
    let corpus = make_entries(&["дверь.pdf"]);
    assert!(rank("дверь", &corpus, 5.0, 0).is_empty());
}

#[test]
fn test_api_preset_is_stricter() {
    // One of five query tokens matches at weight 0.6: 0.6 / 5 * 80 = 9.6.
    let query = "двери стекло алюминий профиль ручка";
    let corpus = make_entries(&["дверь.pdf"]);
    let relevance = score(query, "дверь.pdf");
    assert!(relevance > 5.0 && relevance < 10.0, "got {}", relevance);

    assert_eq!(search(query, &corpus, &SearchOptions::default()).len(), 1);
    assert!(search(query, &corpus, &SearchOptions::api()).is_empty());
}

#[test]
fn test_zero_scores_never_returned() {
    let corpus = make_entries(&["стол.pdf", "окно.pdf"]);
    assert!(rank("дверь", &corpus, 0.0, 100).is_empty());
}

// ============================================================================
// ORDER
// ============================================================================

#[test]
fn test_sorted_by_relevance_descending() {
    let corpus = make_entries(&["двери.pdf", "стол.pdf", "дверь.pdf", "дверь и окно.pdf"]);
    let results = rank("дверь", &corpus, 5.0, 100);
    assert!(results
        .windows(2)
        .all(|pair| pair[0].relevance >= pair[1].relevance));
    assert_eq!(names(&results)[..2], ["дверь.pdf", "дверь и окно.pdf"]);
}

#[test]
fn test_ties_keep_corpus_order() {
    let corpus = make_entries(&["c дверь.pdf", "a дверь.pdf", "b дверь.pdf"]);
    let results = rank("дверь", &corpus, 5.0, 100);
    assert_eq!(
        names(&results),
        vec!["c дверь.pdf", "a дверь.pdf", "b дверь.pdf"]
    );
}

#[test]
fn test_rank_is_deterministic() {
    let corpus = catalogue(500);
    let first = rank("распашная дверь alta", &corpus, 5.0, 100);
    for _ in 0..3 {
        assert_eq!(rank("распашная дверь alta", &corpus, 5.0, 100), first);
    }
}

#[test]
fn test_large_corpus_matches_sequential_scoring() {
    // Above the parallel cutoff; order must equal a plain sequential sort.
    let corpus = catalogue(1_000);
    let query = "инструкция установке";
    let results = rank(query, &corpus, 5.0, 1_000);

    let mut expected: Vec<(usize, f64)> = corpus
        .iter()
        .enumerate()
        .map(|(i, entry)| (i, score(query, &entry.name)))
        .filter(|(_, s)| *s > 5.0)
        .collect();
    expected.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

    assert_eq!(results.len(), expected.len());
    for (result, (i, relevance)) in results.iter().zip(&expected) {
        assert_eq!(result.entry, &corpus[*i]);
        assert_eq!(result.relevance, *relevance);
    }
}
