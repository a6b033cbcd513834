use std::sync::{Arc, OnceLock};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::BoxError;
use crate::recommender::tokenizer::tokenize;
use crate::recommender::weights::WeightEngine;

/// A short text document: a title plus an ordered list of keyword tags.
///
/// The id is caller-assigned and must be unique within a corpus. Documents
/// are immutable once created; the recommender holds them behind `Arc` and
/// hands references back in results instead of copying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub title: String,
    pub keywords: Vec<String>,
}

impl Document {
    pub fn new(id: u64, title: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            keywords,
        }
    }
}

/// External collaborator that supplies the initial document list when the
/// corpus is configured to load externally.
///
/// The contract is a single call returning all documents with unique ids.
/// A failure surfaces as an initialization error, never a partial corpus.
pub trait DocumentProvider {
    fn fetch_all(&self) -> Result<Vec<Document>, BoxError>;
}

/// Derived token data for one document, computed in a single pass.
#[derive(Debug)]
struct Tokens {
    /// Unique terms in first-seen order.
    unique: IndexSet<String>,
    /// Full sequence with repeats, needed for frequency counting.
    with_duplicates: Vec<String>,
}

/// A document plus its memoized derived data (tokens and term frequency).
///
/// The derived fields are computed lazily on first access and cached for
/// the entry's lifetime behind `OnceLock`, so a built corpus can be read
/// from multiple threads. They are never recomputed; an entry is discarded
/// and rebuilt wholesale if the corpus changes.
#[derive(Debug)]
pub struct DocumentEntry {
    document: Arc<Document>,
    tokens: OnceLock<Tokens>,
    term_frequency: OnceLock<IndexMap<String, f64>>,
}

impl DocumentEntry {
    pub(crate) fn new(document: Arc<Document>) -> Self {
        Self {
            document,
            tokens: OnceLock::new(),
            term_frequency: OnceLock::new(),
        }
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    fn tokens(&self) -> &Tokens {
        self.tokens.get_or_init(|| {
            let mut text = self.document.title.clone();
            for keyword in &self.document.keywords {
                text.push(' ');
                text.push_str(keyword);
            }
            let with_duplicates = tokenize(&text);
            let unique = with_duplicates.iter().cloned().collect();
            Tokens {
                unique,
                with_duplicates,
            }
        })
    }

    /// Unique normalized terms of this document, in first-seen order.
    pub fn unique_terms(&self) -> &IndexSet<String> {
        &self.tokens().unique
    }

    /// The duplicate-preserving token sequence.
    pub fn all_terms(&self) -> &[String] {
        &self.tokens().with_duplicates
    }

    /// Term frequency of this document, computed once by the engine.
    pub(crate) fn term_frequency<E: WeightEngine>(&self) -> &IndexMap<String, f64> {
        self.term_frequency
            .get_or_init(|| E::term_frequency(self.all_terms()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::weights::DefaultWeightEngine;

    fn entry(title: &str, keywords: &[&str]) -> DocumentEntry {
        let doc = Document::new(1, title, keywords.iter().map(|k| k.to_string()).collect());
        DocumentEntry::new(Arc::new(doc))
    }

    #[test]
    fn joins_title_and_keywords() {
        let e = entry("Red Car", &["fast", "red"]);
        assert_eq!(e.all_terms(), ["red", "car", "fast", "red"]);
        let unique: Vec<&str> = e.unique_terms().iter().map(String::as_str).collect();
        assert_eq!(unique, ["red", "car", "fast"]);
    }

    #[test]
    fn empty_document_has_no_terms() {
        let e = entry("", &[]);
        assert!(e.all_terms().is_empty());
        assert!(e.unique_terms().is_empty());
        assert!(e.term_frequency::<DefaultWeightEngine>().is_empty());
    }

    #[test]
    fn memoized_tokens_are_stable() {
        let e = entry("blue boat", &[]);
        let first = e.all_terms().as_ptr();
        let second = e.all_terms().as_ptr();
        assert_eq!(first, second);
    }
}
