use crate::error::{EngineError, Result};
use crate::vectorizer::TfWeighting;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub tf_weighting: TfWeighting,
    /// Catalogs at least this large build the similarity matrix across rayon workers.
    pub parallel_threshold: usize,
    /// Catalogs larger than this compute similarity rows on demand instead of
    /// materializing the full matrix.
    pub max_materialized: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { tf_weighting: TfWeighting::Raw, parallel_threshold: 512, max_materialized: 8192 }
    }
}

impl EngineConfig {
    /// Defaults overlaid with ENGINE_SUBLINEAR_TF, ENGINE_PARALLEL_THRESHOLD and
    /// ENGINE_MAX_MATERIALIZED.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(v) = lookup("ENGINE_SUBLINEAR_TF") {
            cfg.tf_weighting = match v.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => TfWeighting::Sublinear,
                "0" | "false" | "no" | "" => TfWeighting::Raw,
                other => return Err(EngineError::Config(format!("ENGINE_SUBLINEAR_TF: unrecognized value '{other}'"))),
            };
        }
        if let Some(v) = lookup("ENGINE_PARALLEL_THRESHOLD") {
            cfg.parallel_threshold = parse_usize("ENGINE_PARALLEL_THRESHOLD", &v)?;
        }
        if let Some(v) = lookup("ENGINE_MAX_MATERIALIZED") {
            cfg.max_materialized = parse_usize("ENGINE_MAX_MATERIALIZED", &v)?;
        }
        Ok(cfg)
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| EngineError::Config(format!("{key}: expected a non-negative integer, got '{value}'")))
}
