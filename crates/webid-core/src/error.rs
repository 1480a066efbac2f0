//! Error types for `webid-core`.

use thiserror::Error;

/// Extraction-level failure. Field-level absence is never an error; the only
/// way extraction fails is when the graph itself cannot be queried.
#[derive(Debug, Error)]
pub enum Error {
  #[error("graph unreadable: {0}")]
  GraphUnreadable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error surfaced by a [`GraphStore`](crate::graph::GraphStore)
  /// lookup.
  pub fn unreadable<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::GraphUnreadable(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
