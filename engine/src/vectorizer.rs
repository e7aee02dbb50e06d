use crate::error::{EngineError, Result};
use crate::similarity::SparseVector;
use crate::tokenizer::tokenize;
use crate::TermId;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// How raw term counts turn into the TF factor. Applied uniformly per model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TfWeighting {
    /// tf = raw count
    #[default]
    Raw,
    /// tf = 1 + ln(count)
    Sublinear,
}

impl TfWeighting {
    fn apply(self, count: u32) -> f32 {
        match self {
            TfWeighting::Raw => count as f32,
            TfWeighting::Sublinear if count > 0 => 1.0 + (count as f32).ln(),
            TfWeighting::Sublinear => 0.0,
        }
    }
}

/// Vocabulary plus smoothed IDF weights learned from a corpus.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    dictionary: HashMap<String, TermId>,
    terms: Vec<String>,
    df: Vec<u32>,
    idf: Vec<f32>,
    weighting: TfWeighting,
}

impl TfidfModel {
    /// Learn the vocabulary and document frequencies of `corpus`.
    ///
    /// Term ids follow first appearance while scanning documents in order, so a
    /// fixed corpus always yields the same columns.
    pub fn fit<S: AsRef<str>>(corpus: &[S], weighting: TfWeighting) -> Result<Self> {
        if corpus.is_empty() {
            return Err(EngineError::InvalidCorpus);
        }
        let mut dictionary: HashMap<String, TermId> = HashMap::new();
        let mut terms: Vec<String> = Vec::new();
        let mut df: Vec<u32> = Vec::new();

        for doc in corpus {
            let mut seen_in_doc: HashSet<TermId> = HashSet::new();
            for (term, _pos) in tokenize(doc.as_ref()) {
                let tid = match dictionary.get(&term) {
                    Some(&tid) => tid,
                    None => {
                        let id = terms.len() as TermId;
                        dictionary.insert(term.clone(), id);
                        terms.push(term);
                        df.push(0);
                        id
                    }
                };
                if seen_in_doc.insert(tid) {
                    df[tid as usize] += 1;
                }
            }
        }

        let n = corpus.len() as f32;
        // idf = ln((1 + N) / (1 + df)) + 1
        let idf = df.iter().map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0).collect();
        tracing::debug!(num_docs = corpus.len(), num_terms = terms.len(), "fitted tf-idf model");

        Ok(Self { dictionary, terms, df, idf, weighting })
    }

    /// Encode `doc` over the fitted vocabulary. Unknown terms contribute nothing.
    /// The result is not normalized.
    pub fn transform(&self, doc: &str) -> SparseVector {
        let mut tf_raw: HashMap<TermId, u32> = HashMap::new();
        for (term, _pos) in tokenize(doc) {
            if let Some(&tid) = self.dictionary.get(&term) {
                *tf_raw.entry(tid).or_insert(0) += 1;
            }
        }
        SparseVector::from_pairs(
            tf_raw
                .into_iter()
                .map(|(tid, count)| (tid, self.weighting.apply(count) * self.idf[tid as usize])),
        )
    }

    pub fn fit_transform<S: AsRef<str>>(corpus: &[S], weighting: TfWeighting) -> Result<(Self, Vec<SparseVector>)> {
        let model = Self::fit(corpus, weighting)?;
        let vectors = corpus.iter().map(|d| model.transform(d.as_ref())).collect();
        Ok((model, vectors))
    }

    pub fn vocabulary_len(&self) -> usize { self.terms.len() }

    pub fn weighting(&self) -> TfWeighting { self.weighting }

    pub fn term_id(&self, term: &str) -> Option<TermId> { self.dictionary.get(term).copied() }

    pub fn document_frequency(&self, term: &str) -> Option<u32> {
        self.term_id(term).map(|t| self.df[t as usize])
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.term_id(term).map(|t| self.idf[t as usize])
    }
}
