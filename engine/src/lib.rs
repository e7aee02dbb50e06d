pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod recommend;
pub mod similarity;
pub mod tokenizer;
pub mod vectorizer;

pub type TermId = u32;
pub type EntryId = u32;

pub use catalog::{Catalog, CatalogEntry, EntryMeta};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use index::{FitStats, RecommendationIndex, TitleIndex};
pub use recommend::Recommendation;
pub use similarity::{SimilarityIndex, SimilarityMatrix, SparseVector};
pub use vectorizer::{TfWeighting, TfidfModel};
