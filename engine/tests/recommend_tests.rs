use engine::loader::load_catalog;
use engine::{Catalog, EngineConfig, EngineError, RecommendationIndex, TfWeighting};
use std::fs;
use tempfile::tempdir;

fn tiny_catalog() -> Catalog {
    Catalog::from_records([
        ("Alpha", "Action", "A hero saves the city"),
        ("Beta", "Action", "A hero saves the world"),
        ("Gamma", "Romance", "Two people fall in love"),
    ])
}

fn movie_catalog() -> Catalog {
    Catalog::from_records([
        ("Dark Storm", "Action Thriller", "An elite warrior embarks on a dangerous mission to stop a global threat."),
        ("Red Legacy", "Action", "A hero must save the world from imminent destruction using their extraordinary skills."),
        ("Dil Pyar", "Romance Drama", "Two strangers find love in the most unexpected circumstances."),
        ("Lost Echo", "Horror", "A spine-chilling tale of supernatural forces and dark secrets."),
        ("Ishq", "Romance", "A passionate love story that transcends all boundaries and obstacles."),
        ("Final Quest", "Adventure", "An epic journey to discover hidden treasures and ancient secrets."),
        ("Of The", "", ""),
        ("Twin A", "Comedy", "laughter friends"),
        ("Twin B", "Comedy", "laughter friends"),
    ])
}

fn load(catalog: Catalog) -> RecommendationIndex {
    RecommendationIndex::load(catalog, &EngineConfig::default()).unwrap()
}

#[test]
fn shared_vocabulary_ranks_higher() {
    let idx = load(tiny_catalog());
    let recs = idx.recommend("Alpha", 2).unwrap();
    let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Beta", "Gamma"]);
    assert!(recs[0].similarity_score > recs[1].similarity_score);
    assert_eq!(recs[1].similarity_score, 0.0);
    assert_eq!(recs[0].genre, "Action");
}

#[test]
fn never_returns_the_query_itself() {
    let idx = load(movie_catalog());
    for entry in idx.catalog().iter() {
        let recs = idx.recommend(&entry.title, 100).unwrap();
        assert!(recs.iter().all(|r| r.id != entry.id));
        assert_eq!(recs.len(), idx.len() - 1);
    }
}

#[test]
fn returns_at_most_k() {
    let idx = load(movie_catalog());
    assert_eq!(idx.recommend("Dark Storm", 3).unwrap().len(), 3);
    assert_eq!(idx.recommend("dark storm", 1).unwrap().len(), 1);
    // short catalog is not an error
    assert_eq!(load(tiny_catalog()).recommend("Gamma", 10).unwrap().len(), 2);
}

#[test]
fn sorted_descending_with_index_tie_break() {
    let idx = load(movie_catalog());
    let recs = idx.recommend("Of The", 20).unwrap();
    // a degenerate query scores 0 against everything: pure index order
    let ids: Vec<u32> = recs.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 7, 8]);

    let recs = idx.recommend("Ishq", 20).unwrap();
    for w in recs.windows(2) {
        assert!(w[0].similarity_score >= w[1].similarity_score);
        if w[0].similarity_score == w[1].similarity_score {
            assert!(w[0].id < w[1].id);
        }
    }
}

#[test]
fn zero_scores_keep_index_order() {
    let idx = load(movie_catalog());
    let recs = idx.recommend("Lost Echo", 20).unwrap();
    let zero_tail: Vec<u32> = recs.iter().filter(|r| r.similarity_score == 0.0).map(|r| r.id).collect();
    let mut sorted = zero_tail.clone();
    sorted.sort();
    assert_eq!(zero_tail, sorted);
}

#[test]
fn unknown_title_is_not_found_with_original_query() {
    let idx = load(tiny_catalog());
    match idx.recommend("  Delta ", 3) {
        Err(EngineError::NotFound { query }) => assert_eq!(query, "  Delta "),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn non_positive_k_is_invalid_even_for_unknown_titles() {
    let idx = load(tiny_catalog());
    assert!(matches!(idx.recommend("Alpha", 0), Err(EngineError::InvalidArgument(_))));
    assert!(matches!(idx.recommend("Alpha", -3), Err(EngineError::InvalidArgument(_))));
    assert!(matches!(idx.recommend("Nope", 0), Err(EngineError::InvalidArgument(_))));
    // index still usable afterwards
    assert_eq!(idx.recommend("Alpha", 1).unwrap()[0].title, "Beta");
}

#[test]
fn similarity_matrix_invariants() {
    let idx = load(movie_catalog());
    let sim = idx.similarity();
    let degenerate = &idx.stats().degenerate_entries;
    assert_eq!(degenerate, &vec![6]);
    for i in 0..idx.len() {
        let expected = if degenerate.contains(&(i as u32)) { 0.0 } else { 1.0 };
        assert_eq!(sim.get(i, i), expected);
        for j in 0..idx.len() {
            assert_eq!(sim.get(i, j).to_bits(), sim.get(j, i).to_bits());
            assert!((0.0..=1.0).contains(&sim.get(i, j)));
        }
    }
}

#[test]
fn repeated_queries_and_rebuilds_are_identical() {
    let a = load(movie_catalog());
    let b = load(movie_catalog());
    assert_eq!(a.recommend("Dark Storm", 5).unwrap(), a.recommend("Dark Storm", 5).unwrap());
    for entry in a.catalog().iter() {
        assert_eq!(a.similarity().row(entry.id as usize), b.similarity().row(entry.id as usize));
        assert_eq!(a.recommend(&entry.title, 4).unwrap(), b.recommend(&entry.title, 4).unwrap());
    }
}

#[test]
fn on_demand_and_parallel_paths_rank_identically() {
    let base = load(movie_catalog());
    let cfg = EngineConfig { parallel_threshold: 0, max_materialized: 2, ..EngineConfig::default() };
    let lazy = RecommendationIndex::load(movie_catalog(), &cfg).unwrap();
    assert!(!lazy.stats().materialized);
    let cfg = EngineConfig { parallel_threshold: 0, ..EngineConfig::default() };
    let parallel = RecommendationIndex::load(movie_catalog(), &cfg).unwrap();
    for entry in base.catalog().iter() {
        let expected = base.recommend(&entry.title, 8).unwrap();
        assert_eq!(lazy.recommend(&entry.title, 8).unwrap(), expected);
        assert_eq!(parallel.recommend(&entry.title, 8).unwrap(), expected);
    }
}

#[test]
fn duplicate_titles_resolve_to_first_occurrence() {
    let idx = load(Catalog::from_records([
        ("Echo", "Horror", "dark secrets"),
        ("Other", "Horror", "dark secrets"),
        ("ECHO", "Romance", "love story"),
    ]));
    assert_eq!(idx.lookup("echo").map(|e| e.id), Some(0));
    assert_eq!(idx.stats().duplicate_titles, 1);
    assert_eq!(idx.titles().len(), 2);
    let recs = idx.recommend("Echo", 2).unwrap();
    assert_eq!(recs[0].title, "Other");
    // the shadowed duplicate is still a candidate
    assert_eq!(recs[1].id, 2);
}

#[test]
fn loads_csv_directory_in_sorted_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.csv"), "title,genre,overview\nBeta,Action,A hero saves the world\n").unwrap();
    fs::write(dir.path().join("a.csv"), "Title,Genre,Overview\nAlpha,Action,A hero saves the city\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
    let catalog = load_catalog(dir.path()).unwrap();
    let titles: Vec<&str> = catalog.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta"]);

    let idx = load(catalog);
    assert_eq!(idx.recommend("beta", 1).unwrap()[0].title, "Alpha");
}

#[test]
fn missing_dataset_is_an_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(load_catalog(dir.path().join("nope.csv")), Err(EngineError::Io { .. })));
    assert!(matches!(load_catalog(dir.path()), Err(EngineError::EmptySource(_))));
}

#[test]
fn stats_report_the_fitted_model() {
    let cfg = EngineConfig { tf_weighting: TfWeighting::Sublinear, ..EngineConfig::default() };
    let idx = RecommendationIndex::load(tiny_catalog(), &cfg).unwrap();
    let stats = idx.stats();
    assert_eq!(stats.tf_weighting, TfWeighting::Sublinear);
    assert_eq!(stats.vocabulary_len, idx.model().vocabulary_len());
    assert_eq!(idx.model().weighting(), TfWeighting::Sublinear);
    assert_eq!(idx.model().document_frequency("hero"), Some(2));
    assert_eq!(stats.entries, 3);
    assert!(stats.materialized);
}
