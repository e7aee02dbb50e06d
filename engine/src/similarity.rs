use crate::TermId;
use rayon::prelude::*;

/// Sparse TF-IDF vector: (term id, weight) pairs sorted by term id, plus its L2 norm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(TermId, f32)>,
    norm: f32,
}

impl SparseVector {
    pub fn from_pairs<I: IntoIterator<Item = (TermId, f32)>>(pairs: I) -> Self {
        let mut entries: Vec<(TermId, f32)> = pairs.into_iter().filter(|(_, w)| *w != 0.0).collect();
        entries.sort_by_key(|(t, _)| *t);
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        Self { entries, norm }
    }

    pub fn entries(&self) -> &[(TermId, f32)] { &self.entries }

    pub fn norm(&self) -> f32 { self.norm }

    pub fn is_zero(&self) -> bool { self.norm == 0.0 }

    /// Merge-join over sorted ids. Products are summed in ascending term order
    /// whichever side is `self`, so `u.dot(v)` and `v.dot(u)` are bit-identical.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Cosine similarity clamped into [0, 1]; 0 when either vector has zero norm.
pub fn cosine(u: &SparseVector, v: &SparseVector) -> f32 {
    if u.is_zero() || v.is_zero() {
        return 0.0;
    }
    (u.dot(v) / (u.norm * v.norm)).clamp(0.0, 1.0)
}

/// Similarity of rows `i` and `j`. The diagonal is exactly 1.0 for non-degenerate rows.
fn pair_score(vectors: &[SparseVector], i: usize, j: usize) -> f32 {
    if i == j {
        return if vectors[i].is_zero() { 0.0 } else { 1.0 };
    }
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    cosine(&vectors[lo], &vectors[hi])
}

/// Symmetric N×N matrix stored as its packed upper triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    upper: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute every pair once (upper triangle). Rows are split across rayon
    /// workers when `parallel` is set; the values do not depend on it.
    pub fn build(vectors: &[SparseVector], parallel: bool) -> Self {
        let n = vectors.len();
        let upper_row = |i: usize| -> Vec<f32> { (i..n).map(|j| pair_score(vectors, i, j)).collect() };
        let rows: Vec<Vec<f32>> = if parallel {
            (0..n).into_par_iter().map(upper_row).collect()
        } else {
            (0..n).map(upper_row).collect()
        };
        let mut upper = Vec::with_capacity(n * (n + 1) / 2);
        for row in rows {
            upper.extend(row);
        }
        Self { n, upper }
    }

    pub fn len(&self) -> usize { self.n }

    pub fn is_empty(&self) -> bool { self.n == 0 }

    fn offset(&self, i: usize, j: usize) -> usize {
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        lo * (2 * self.n - lo + 1) / 2 + (hi - lo)
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.upper[self.offset(i, j)]
    }

    pub fn row(&self, i: usize) -> Vec<f32> {
        (0..self.n).map(|j| self.get(i, j)).collect()
    }
}

/// Pairwise similarity lookups, either precomputed or derived per row from
/// the encoded vectors. Both variants return identical values.
#[derive(Debug, Clone)]
pub enum SimilarityIndex {
    Materialized(SimilarityMatrix),
    OnDemand(Vec<SparseVector>),
}

impl SimilarityIndex {
    pub fn build(vectors: Vec<SparseVector>, parallel: bool, max_materialized: usize) -> Self {
        if vectors.len() > max_materialized {
            tracing::info!(entries = vectors.len(), max_materialized, "similarity rows will be computed on demand");
            SimilarityIndex::OnDemand(vectors)
        } else {
            SimilarityIndex::Materialized(SimilarityMatrix::build(&vectors, parallel))
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SimilarityIndex::Materialized(m) => m.len(),
            SimilarityIndex::OnDemand(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn is_materialized(&self) -> bool { matches!(self, SimilarityIndex::Materialized(_)) }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        match self {
            SimilarityIndex::Materialized(m) => m.get(i, j),
            SimilarityIndex::OnDemand(v) => pair_score(v, i, j),
        }
    }

    pub fn row(&self, i: usize) -> Vec<f32> {
        match self {
            SimilarityIndex::Materialized(m) => m.row(i),
            SimilarityIndex::OnDemand(v) => (0..v.len()).map(|j| pair_score(v, i, j)).collect(),
        }
    }
}
