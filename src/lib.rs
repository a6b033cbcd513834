//! A content-based document recommendation engine built on TF-IDF
//! weighting and cosine-similarity ranking.
//!
//! Given a fixed corpus of short documents (title + keyword tags), the
//! engine answers two questions: which documents are most similar to a
//! given document, and which documents best match an ad-hoc keyword query.
//!
//! ```
//! use tfidf_recommender::{Document, Recommender};
//!
//! let mut recommender: Recommender = Recommender::default();
//! recommender
//!     .init(vec![
//!         Document::new(1, "red car", vec!["fast".into()]),
//!         Document::new(2, "red bike", vec!["slow".into()]),
//!         Document::new(3, "blue boat", vec!["slow".into()]),
//!     ])
//!     .unwrap();
//!
//! let hits = recommender.recommend(1, 2).unwrap();
//! assert_eq!(hits[0].document.id, 1); // self-similarity is maximal
//! assert_eq!(hits[1].document.id, 2); // shares "red" with document 1
//! ```
pub mod error;
pub mod recommender;

/// TF-IDF Recommender
/// The top-level struct of this crate. It owns the document corpus, builds
/// the combined TF-IDF weight table at initialization, and answers ranked
/// similarity queries over it.
///
/// `Recommender<E>` takes a weight engine type `E`
/// (default [`DefaultWeightEngine`]) that defines the TF and IDF formulas.
///
/// The corpus is fixed once initialized: there is no per-document update or
/// delete, and the weight tables are immutable after construction, so a
/// shared reference can be queried from multiple threads.
pub use recommender::Recommender;

/// A corpus document: caller-assigned unique id, title, keyword tags.
/// Immutable once created; the engine references documents via `Arc`
/// instead of copying them.
pub use recommender::document::Document;

/// External document source used by
/// [`Recommender::init_from_provider`](recommender::Recommender::init_from_provider).
/// One call returns the whole corpus; a failure aborts initialization.
pub use recommender::document::DocumentProvider;

/// Weight Engine Trait
/// Defines the TF and IDF formulas used to build the weight table. The
/// default implementation, `DefaultWeightEngine`, uses count/length TF and
/// a simplified non-logarithmic IDF (corpus size / document frequency).
pub use recommender::weights::{DefaultWeightEngine, WeightEngine};

/// A single ranked result: cosine-similarity score plus a reference to the
/// matched document.
pub use recommender::scoring::ScoredDocument;

/// Error taxonomy of the engine. All failures are synchronous logic/state
/// errors; nothing is retryable.
pub use error::{BoxError, Error};
