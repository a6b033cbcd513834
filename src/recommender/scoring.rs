//! Cosine-similarity ranking over the TF-IDF weight table.

use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::recommender::document::Document;
use crate::recommender::tokenizer::tokenize;
use crate::recommender::weights::WeightEngine;
use crate::recommender::Recommender;

/// A ranked query result: a cosine-similarity score and a reference to the
/// matched document. Created fresh per query, never cached.
///
/// Scores lie in `[0, 1]` when both vectors are non-degenerate; a
/// degenerate (all-zero) vector on either side scores 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub score: f64,
    pub document: Arc<Document>,
}

/// Euclidean norm of a sparse weight vector, accumulated over every term.
fn norm(weights: &IndexMap<String, f64>) -> f64 {
    weights.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine similarity between a query vector and a document vector: the dot
/// product over shared terms divided by the product of the full Euclidean
/// norms. If either norm is 0 the similarity is defined as 0.
fn cosine_similarity(
    query: &IndexMap<String, f64>,
    query_norm: f64,
    doc: &IndexMap<String, f64>,
) -> f64 {
    let doc_norm = norm(doc);
    if query_norm == 0.0 || doc_norm == 0.0 {
        return 0.0;
    }
    let dot: f64 = query
        .iter()
        .filter_map(|(term, &weight)| doc.get(term).map(|&d| weight * d))
        .sum();
    dot / (query_norm * doc_norm)
}

impl<E> Recommender<E>
where
    E: WeightEngine + Send + Sync,
{
    /// Rank the corpus by similarity to an existing document.
    ///
    /// Computes cosine similarity between document `id`'s TF-IDF vector and
    /// every document in the corpus (itself included), sorted descending by
    /// score with ties kept in insertion order. `limit` is clamped to the
    /// corpus size.
    ///
    /// Fails with [`Error::NotInitialized`](crate::error::Error::NotInitialized)
    /// before initialization and
    /// [`Error::UnknownDocument`](crate::error::Error::UnknownDocument) when
    /// `id` is not in the corpus.
    pub fn recommend(&self, id: u64, limit: usize) -> Result<Vec<ScoredDocument>> {
        self.require_initialized()?;
        let query = self
            .term_weights(id)
            .ok_or(crate::error::Error::UnknownDocument { id })?;
        Ok(self.rank(query, limit))
    }

    /// Rank the corpus against an ad-hoc keyword query.
    ///
    /// The query text runs through the same tokenizer as documents, its TF
    /// is weighted by the corpus IDF, and terms absent from the corpus
    /// vocabulary are silently dropped (no IDF exists for them, so they
    /// cannot contribute). A query with no known terms scores 0 for every
    /// document.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<ScoredDocument>> {
        self.require_initialized()?;
        let tokens = tokenize(query);
        let query_weights: IndexMap<String, f64> = E::term_frequency(&tokens)
            .into_iter()
            .filter_map(|(term, tf)| self.idf(&term).map(|idf| (term, tf * idf)))
            .collect();
        Ok(self.rank(&query_weights, limit))
    }

    /// Score every document against the query vector, in parallel, then
    /// stable-sort descending. Scores are never NaN (degenerate vectors
    /// score exactly 0), so `total_cmp` gives a plain descending order and
    /// the stable sort keeps insertion order for ties.
    fn rank(&self, query: &IndexMap<String, f64>, limit: usize) -> Vec<ScoredDocument> {
        let query_norm = norm(query);
        let mut hits: Vec<ScoredDocument> = self
            .entries()
            .par_iter()
            .map(|entry| {
                let document = Arc::clone(entry.document());
                let score = self
                    .term_weights(document.id)
                    .map(|weights| cosine_similarity(query, query_norm, weights))
                    .unwrap_or(0.0);
                ScoredDocument { score, document }
            })
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(limit);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_of(pairs: &[(&str, f64)]) -> IndexMap<String, f64> {
        pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
    }

    #[test]
    fn identical_vectors_score_one() {
        let v = vec_of(&[("red", 0.5), ("car", 1.0)]);
        let sim = cosine_similarity(&v, norm(&v), &v);
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn disjoint_vectors_score_zero() {
        let a = vec_of(&[("red", 0.5)]);
        let b = vec_of(&[("blue", 1.0)]);
        assert_eq!(cosine_similarity(&a, norm(&a), &b), 0.0);
    }

    #[test]
    fn zero_vector_scores_zero_not_nan() {
        let a = vec_of(&[]);
        let b = vec_of(&[("red", 1.0)]);
        assert_eq!(cosine_similarity(&a, norm(&a), &b), 0.0);
        assert_eq!(cosine_similarity(&b, norm(&b), &a), 0.0);
    }

    #[test]
    fn norm_accumulates_over_all_terms() {
        // The norm must be a true Euclidean sum over every term of the
        // vector, not just the last one visited.
        let v = vec_of(&[("a", 3.0), ("b", 4.0)]);
        assert!((norm(&v) - 5.0).abs() < 1e-12);

        // A one-shared-term pair where a last-term-only norm would give a
        // visibly different score: sim = 0.5 / (sqrt(1.25) * 1.0).
        let a = vec_of(&[("x", 0.5), ("y", 1.0)]);
        let b = vec_of(&[("x", 1.0)]);
        let expected = 0.5 / (1.25_f64.sqrt() * 1.0);
        let sim = cosine_similarity(&a, norm(&a), &b);
        assert!((sim - expected).abs() < 1e-12);
    }
}
