pub mod document;
pub mod scoring;
pub mod tokenizer;
pub mod weights;

use std::marker::PhantomData;
use std::sync::Arc;

use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};
use crate::recommender::document::{Document, DocumentEntry, DocumentProvider};
use crate::recommender::weights::{DefaultWeightEngine, WeightEngine};

/// The corpus index: owns the document set, builds the combined TF-IDF
/// weight table, and answers similarity queries.
///
/// A `Recommender` starts empty and unqueryable. [`init`](Self::init) (or
/// [`init_from_provider`](Self::init_from_provider)) wraps every document
/// in an entry, builds the full weight table, and marks the corpus
/// initialized; every query before that fails with
/// [`Error::NotInitialized`]. There is no per-document update or delete
/// path: if the contents change, the corpus is rebuilt wholesale.
///
/// Once initialized, all tables are immutable, so a `&Recommender` can be
/// shared across threads for concurrent queries.
#[derive(Debug)]
pub struct Recommender<E = DefaultWeightEngine>
where
    E: WeightEngine + Send + Sync,
{
    /// Document entries in insertion order. Insertion order doubles as the
    /// stable iteration order of the weight table and the tie-break order
    /// for ranking.
    entries: Vec<DocumentEntry>,
    /// Document id -> term -> TF-IDF weight. Sparse: terms absent from a
    /// document have no entry.
    term_weights: IndexMap<u64, IndexMap<String, f64>>,
    /// Term -> IDF, one entry per distinct corpus term. Built together
    /// with `term_weights` and mutually consistent with it.
    idf: IndexMap<String, f64>,
    initialized: bool,
    _marker: PhantomData<E>,
}

impl<E> Default for Recommender<E>
where
    E: WeightEngine + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Recommender<E>
where
    E: WeightEngine + Send + Sync,
{
    /// Create an empty, uninitialized recommender.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            term_weights: IndexMap::new(),
            idf: IndexMap::new(),
            initialized: false,
            _marker: PhantomData,
        }
    }

    /// Initialize the corpus from an explicit document list.
    ///
    /// Wraps every document in an entry, builds the full TF-IDF table, and
    /// marks the corpus queryable. Duplicate document ids are rejected with
    /// [`Error::DuplicateDocument`] and leave the corpus uninitialized.
    pub fn init(&mut self, documents: Vec<Document>) -> Result<()> {
        let mut entries = Vec::with_capacity(documents.len());
        let mut seen = std::collections::HashSet::with_capacity(documents.len());
        for document in documents {
            if !seen.insert(document.id) {
                return Err(Error::DuplicateDocument { id: document.id });
            }
            entries.push(DocumentEntry::new(Arc::new(document)));
        }
        self.entries = entries;
        self.build_weights();
        self.initialized = true;
        debug!(
            "corpus initialized: {} documents, {} distinct terms",
            self.entries.len(),
            self.idf.len()
        );
        Ok(())
    }

    /// Initialize the corpus from the external document provider.
    ///
    /// A provider failure surfaces as [`Error::Provider`] and the corpus
    /// stays uninitialized; a partial corpus is never built.
    pub fn init_from_provider(&mut self, provider: &dyn DocumentProvider) -> Result<()> {
        let documents = provider.fetch_all().map_err(Error::Provider)?;
        self.init(documents)
    }

    /// Whether `id` belongs to an initialized corpus.
    pub fn exists(&self, id: u64) -> bool {
        self.initialized && self.term_weights.contains_key(&id)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The IDF of a corpus term, if the term occurs anywhere in the corpus.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// The TF-IDF weight vector of a document.
    pub fn term_weights(&self, id: u64) -> Option<&IndexMap<String, f64>> {
        self.term_weights.get(&id)
    }

    pub(crate) fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    pub(crate) fn require_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Build the IDF table and the per-document TF-IDF table in one pass.
    /// Every term in any document's weight map gets a matching IDF entry.
    fn build_weights(&mut self) {
        self.idf = E::inverse_document_frequency(&self.entries);
        let mut term_weights = IndexMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            let weights: IndexMap<String, f64> = entry
                .term_frequency::<E>()
                .iter()
                .map(|(term, &tf)| {
                    let idf = self.idf.get(term).copied().unwrap_or(0.0);
                    (term.clone(), tf * idf)
                })
                .collect();
            term_weights.insert(entry.document().id, weights);
        }
        self.term_weights = term_weights;
    }
}
