use std::sync::Arc;

use phraserank::{
    EmbeddingTable, QueryError, SearchEngine, SimilarityError, VectorizeError,
};

/// Small hand-built table with known geometry: "occasion" points the same
/// way as "happy", "sad"/"farewell" sit at cosine ~0.53 from "happy", and
/// "wooden"/"chair" sit at cosine ~-0.01.
fn demo_table() -> EmbeddingTable {
    EmbeddingTable::from_pairs(
        3,
        vec![
            ("happy", vec![1.0, 0.0, 0.0]),
            ("occasion", vec![2.0, 0.0, 0.0]),
            ("sad", vec![0.53, 0.848, 0.0]),
            ("farewell", vec![0.53, 0.848, 0.0]),
            ("wooden", vec![-0.01, 0.0, 1.0]),
            ("chair", vec![-0.01, 0.0, 1.0]),
        ],
    )
    .unwrap()
}

fn demo_engine() -> SearchEngine {
    SearchEngine::build(
        Arc::new(demo_table()),
        ["happy occasion", "sad farewell", "wooden chair"],
    )
}

#[test]
fn ranks_by_semantic_similarity() {
    let engine = demo_engine();

    let results = engine.search("happy", 2).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].phrase, "happy occasion");
    assert_eq!(results[1].phrase, "sad farewell");
    assert!(results[0].score > results[1].score);
    assert!((results[0].score - 1.0).abs() < 1e-5);
    assert!((results[1].score - 0.53).abs() < 0.01);

    let all = engine.search("happy", 3).unwrap();
    assert_eq!(all[2].phrase, "wooden chair");
    assert!((all[2].score - (-0.01)).abs() < 0.01);
}

#[test]
fn repeated_queries_return_identical_sequences() {
    let engine = demo_engine();
    let first = engine.search("sad farewell", 3).unwrap();
    let second = engine.search("sad farewell", 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scores_come_back_descending() {
    let engine = demo_engine();
    let results = engine.search("wooden", 3).unwrap();
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn result_count_is_min_of_n_and_index_size() {
    let engine = demo_engine();
    assert_eq!(engine.search("happy", 1).unwrap().len(), 1);
    assert_eq!(engine.search("happy", 3).unwrap().len(), 3);
    assert_eq!(engine.search("happy", 50).unwrap().len(), 3);
}

#[test]
fn all_unknown_phrase_is_never_indexed_or_returned() {
    let engine = SearchEngine::build(
        Arc::new(demo_table()),
        [
            "happy occasion",
            "xyzzy plugh", // no token in vocabulary
            "wooden chair",
        ],
    );

    assert_eq!(engine.index().len(), 2);
    for n in 1..=5 {
        let results = engine.search("happy", n).unwrap();
        assert!(results.iter().all(|r| r.phrase != "xyzzy plugh"));
    }
}

#[test]
fn empty_phrases_are_dropped_at_build() {
    let engine = SearchEngine::build(
        Arc::new(demo_table()),
        ["happy occasion", "", "   ", "sad farewell"],
    );
    assert_eq!(engine.index().len(), 2);
}

#[test]
fn empty_query_surfaces_an_error() {
    let engine = demo_engine();
    let err = engine.search("  ", 2).unwrap_err();
    assert_eq!(err, QueryError::Vectorize(VectorizeError::EmptyInput));
}

#[test]
fn out_of_vocabulary_query_surfaces_an_error() {
    let engine = demo_engine();
    let err = engine.search("xyzzy", 2).unwrap_err();
    assert_eq!(
        err,
        QueryError::Similarity(SimilarityError::DegenerateVector)
    );
}

#[test]
fn zero_result_count_is_caller_misuse() {
    let engine = demo_engine();
    let err = engine.search("happy", 0).unwrap_err();
    assert_eq!(err, QueryError::InvalidResultCount);
}

#[test]
fn mixed_vocabulary_query_still_ranks() {
    let engine = demo_engine();
    // "xyzzy" dilutes the mean toward zero but "happy" keeps the
    // direction, so ranking matches the pure "happy" query.
    let diluted = engine.search("happy xyzzy", 3).unwrap();
    let pure = engine.search("happy", 3).unwrap();
    let diluted_order: Vec<&str> = diluted.iter().map(|r| r.phrase.as_str()).collect();
    let pure_order: Vec<&str> = pure.iter().map(|r| r.phrase.as_str()).collect();
    assert_eq!(diluted_order, pure_order);
}
