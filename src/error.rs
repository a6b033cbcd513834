use thiserror::Error;

/// Boxed error type returned by external collaborators such as
/// [`DocumentProvider`](crate::recommender::document::DocumentProvider).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by the recommender.
///
/// All failures are pure state/logic errors returned synchronously to the
/// caller. Nothing here is transient, so retrying never helps.
#[derive(Debug, Error)]
pub enum Error {
    /// A query was issued before the corpus finished initializing.
    #[error("recommender is not initialized")]
    NotInitialized,

    /// `recommend` was called with a document id that is not in the corpus.
    #[error("unknown document id {id}")]
    UnknownDocument { id: u64 },

    /// Two documents with the same id were passed at initialization.
    /// Document ids must be unique within a corpus.
    #[error("duplicate document id {id}")]
    DuplicateDocument { id: u64 },

    /// The external document provider failed. The corpus stays
    /// uninitialized; a partial corpus is never built.
    #[error("document provider failed: {0}")]
    Provider(#[source] BoxError),
}

pub type Result<T> = std::result::Result<T, Error>;
