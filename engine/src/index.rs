use crate::catalog::{Catalog, CatalogEntry};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::similarity::SimilarityIndex;
use crate::vectorizer::{TfWeighting, TfidfModel};
use crate::EntryId;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

/// Trimmed, lowercased title -> row. The first occurrence of a title wins.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    rows: HashMap<String, EntryId>,
    duplicates: usize,
}

impl TitleIndex {
    pub fn normalize(title: &str) -> String { title.trim().to_lowercase() }

    pub fn build(catalog: &Catalog) -> Self {
        let mut index = Self::default();
        for entry in catalog.iter() {
            let key = Self::normalize(&entry.title);
            if let Some(&kept) = index.rows.get(&key) {
                tracing::debug!(title = %entry.title, kept, shadowed = entry.id, "duplicate title; keeping first occurrence");
                index.duplicates += 1;
                continue;
            }
            index.rows.insert(key, entry.id);
        }
        index
    }

    pub fn get(&self, title: &str) -> Option<EntryId> { self.rows.get(&Self::normalize(title)).copied() }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Number of entries whose title was already taken by an earlier entry.
    pub fn duplicates(&self) -> usize { self.duplicates }
}

#[derive(Debug, Clone, Serialize)]
pub struct FitStats {
    pub entries: usize,
    pub vocabulary_len: usize,
    pub tf_weighting: TfWeighting,
    /// Entries whose combined text has no surviving tokens.
    pub degenerate_entries: Vec<EntryId>,
    pub duplicate_titles: usize,
    pub materialized: bool,
    pub elapsed_ms: u128,
}

/// Immutable snapshot produced by one fitting pass over a catalog.
#[derive(Debug)]
pub struct RecommendationIndex {
    pub(crate) catalog: Catalog,
    pub(crate) model: TfidfModel,
    pub(crate) similarity: SimilarityIndex,
    pub(crate) titles: TitleIndex,
    pub(crate) stats: FitStats,
}

impl RecommendationIndex {
    /// Fit the weighting model, encode every entry, compute pairwise similarity
    /// and index titles. Any error aborts the whole load.
    pub fn load(catalog: Catalog, config: &EngineConfig) -> Result<Self> {
        let start = Instant::now();
        let corpus = catalog.combined_texts();
        let (model, vectors) = TfidfModel::fit_transform(&corpus, config.tf_weighting)?;

        let mut degenerate_entries = Vec::new();
        for (entry, vector) in catalog.iter().zip(vectors.iter()) {
            if vector.is_zero() {
                tracing::warn!(id = entry.id, title = %entry.title, "entry has no indexable terms; similarity to every entry is 0");
                degenerate_entries.push(entry.id);
            }
        }

        let parallel = catalog.len() >= config.parallel_threshold;
        let similarity = SimilarityIndex::build(vectors, parallel, config.max_materialized);
        let titles = TitleIndex::build(&catalog);

        let stats = FitStats {
            entries: catalog.len(),
            vocabulary_len: model.vocabulary_len(),
            tf_weighting: model.weighting(),
            degenerate_entries,
            duplicate_titles: titles.duplicates(),
            materialized: similarity.is_materialized(),
            elapsed_ms: start.elapsed().as_millis(),
        };
        tracing::info!(
            entries = stats.entries,
            vocabulary_len = stats.vocabulary_len,
            degenerate = stats.degenerate_entries.len(),
            duplicate_titles = stats.duplicate_titles,
            materialized = stats.materialized,
            elapsed_ms = stats.elapsed_ms as u64,
            "recommendation index built"
        );

        Ok(Self { catalog, model, similarity, titles, stats })
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }

    pub fn model(&self) -> &TfidfModel { &self.model }

    pub fn similarity(&self) -> &SimilarityIndex { &self.similarity }

    pub fn titles(&self) -> &TitleIndex { &self.titles }

    pub fn stats(&self) -> &FitStats { &self.stats }

    pub fn entry(&self, id: EntryId) -> Option<&CatalogEntry> { self.catalog.get(id) }

    pub fn lookup(&self, title: &str) -> Option<&CatalogEntry> {
        self.titles.get(title).and_then(|id| self.catalog.get(id))
    }

    pub fn len(&self) -> usize { self.catalog.len() }

    pub fn is_empty(&self) -> bool { self.catalog.is_empty() }
}
