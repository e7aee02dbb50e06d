use crate::error::{EngineError, Result};
use crate::index::RecommendationIndex;
use crate::EntryId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: EntryId,
    pub title: String,
    pub genre: String,
    /// Cosine similarity rounded to 4 decimal places.
    pub similarity_score: f64,
}

fn round4(score: f32) -> f64 {
    (score as f64 * 10_000.0).round() / 10_000.0
}

impl RecommendationIndex {
    /// Up to `k` entries most similar to `query_title`, best first.
    ///
    /// Ties on score resolve by ascending catalog index. The query entry itself
    /// never appears. A catalog with fewer than `k` other entries returns all of them.
    pub fn recommend(&self, query_title: &str, k: i64) -> Result<Vec<Recommendation>> {
        if k < 1 {
            return Err(EngineError::InvalidArgument(format!(
                "number of recommendations must be at least 1, got {k}"
            )));
        }
        let target = self
            .titles
            .get(query_title)
            .ok_or_else(|| EngineError::NotFound { query: query_title.to_string() })?;

        let row = self.similarity.row(target as usize);
        let mut scored: Vec<(usize, f32)> =
            row.into_iter().enumerate().filter(|(idx, _)| *idx != target as usize).collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let k = usize::try_from(k).unwrap_or(usize::MAX);
        let results = scored
            .into_iter()
            .take(k)
            .filter_map(|(idx, score)| {
                self.catalog.get(idx as EntryId).map(|entry| Recommendation {
                    id: entry.id,
                    title: entry.title.clone(),
                    genre: entry.genre.clone(),
                    similarity_score: round4(score),
                })
            })
            .collect();
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_to_four_places() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(1.0), 1.0);
        assert_eq!(round4(0.0), 0.0);
    }

    #[test]
    fn ordering_breaks_ties_by_index() {
        let mut v = vec![(3usize, 0.5f32), (1, 0.5), (2, 0.9), (0, 0.1)];
        v.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        let order: Vec<usize> = v.iter().map(|x| x.0).collect();
        assert_eq!(order, vec![2, 1, 3, 0]);
    }
}
