//! TF and IDF computation.

use indexmap::IndexMap;

use crate::recommender::document::DocumentEntry;

/// Term-weight calculation engine.
///
/// Implementing this trait plugs a different weighting scheme into
/// [`Recommender<E>`](crate::recommender::Recommender). The default
/// implementation, [`DefaultWeightEngine`], uses raw count/length TF and a
/// simplified non-logarithmic IDF.
pub trait WeightEngine {
    /// Per-document TF over a duplicate-preserving token sequence.
    fn term_frequency(terms: &[String]) -> IndexMap<String, f64>;

    /// Corpus-wide IDF, one entry per distinct term across all documents.
    fn inverse_document_frequency(entries: &[DocumentEntry]) -> IndexMap<String, f64>;
}

/// The default weighting scheme of this engine:
///
/// - TF(term) = count of term in the document / total token count
/// - IDF(term) = number of documents / number of documents containing term
///
/// The IDF is deliberately not log-scaled and not smoothed. This is the
/// intended weighting of the engine, not an approximation of classic
/// log-IDF: it favors rare terms more aggressively, which suits short
/// title+keyword documents where vocabularies barely overlap.
#[derive(Debug, Clone, Copy)]
pub struct DefaultWeightEngine;

impl WeightEngine for DefaultWeightEngine {
    fn term_frequency(terms: &[String]) -> IndexMap<String, f64> {
        // An empty document yields an empty mapping, not a 0/0.
        if terms.is_empty() {
            return IndexMap::new();
        }
        let total = terms.len() as f64;
        let mut counts: IndexMap<&str, u64> = IndexMap::new();
        for term in terms {
            *counts.entry(term.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(term, count)| (term.to_string(), count as f64 / total))
            .collect()
    }

    fn inverse_document_frequency(entries: &[DocumentEntry]) -> IndexMap<String, f64> {
        let mut doc_freq: IndexMap<String, u64> = IndexMap::new();
        for entry in entries {
            for term in entry.unique_terms() {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }
        let doc_num = entries.len() as f64;
        doc_freq
            .into_iter()
            .map(|(term, freq)| (term, doc_num / freq as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::recommender::document::Document;

    fn entries(docs: &[(&str, &[&str])]) -> Vec<DocumentEntry> {
        docs.iter()
            .enumerate()
            .map(|(i, (title, keywords))| {
                let doc = Document::new(
                    i as u64,
                    *title,
                    keywords.iter().map(|k| k.to_string()).collect(),
                );
                DocumentEntry::new(Arc::new(doc))
            })
            .collect()
    }

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn tf_is_count_over_length() {
        let tf = DefaultWeightEngine::term_frequency(&terms(&["red", "red", "car"]));
        assert_eq!(tf["red"], 2.0 / 3.0);
        assert_eq!(tf["car"], 1.0 / 3.0);
    }

    #[test]
    fn tf_recovers_raw_counts() {
        // sum over terms of TF * length equals the document length
        let tokens = terms(&["a", "b", "a", "c", "a"]);
        let tf = DefaultWeightEngine::term_frequency(&tokens);
        let recovered: f64 = tf.values().map(|f| f * tokens.len() as f64).sum();
        assert!((recovered - tokens.len() as f64).abs() < 1e-9);
    }

    #[test]
    fn tf_of_empty_document_is_empty() {
        assert!(DefaultWeightEngine::term_frequency(&[]).is_empty());
    }

    #[test]
    fn idf_is_corpus_size_over_doc_freq() {
        let corpus = entries(&[("red car", &[]), ("red bike", &[]), ("blue boat", &[])]);
        let idf = DefaultWeightEngine::inverse_document_frequency(&corpus);
        // "red" appears in 2 of 3 documents, "car" in 1 of 3.
        assert_eq!(idf["red"], 1.5);
        assert_eq!(idf["car"], 3.0);
        // not log-scaled: a term in every document weighs exactly 1.0
        let everywhere = entries(&[("red", &[]), ("red", &[])]);
        let idf = DefaultWeightEngine::inverse_document_frequency(&everywhere);
        assert_eq!(idf["red"], 1.0);
    }

    #[test]
    fn idf_rarer_term_weighs_at_least_as_much() {
        let corpus = entries(&[
            ("red car fast", &[]),
            ("red bike slow", &[]),
            ("red boat slow", &[]),
        ]);
        let idf = DefaultWeightEngine::inverse_document_frequency(&corpus);
        assert!(idf["fast"] >= idf["slow"]);
        assert!(idf["slow"] >= idf["red"]);
    }

    #[test]
    fn idf_counts_each_document_once() {
        // duplicate occurrences within one document must not inflate df
        let corpus = entries(&[("red red red", &[]), ("blue", &[])]);
        let idf = DefaultWeightEngine::inverse_document_frequency(&corpus);
        assert_eq!(idf["red"], 2.0);
    }
}
