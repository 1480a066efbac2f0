//! Error type for `webid-store-oxigraph`.

use oxigraph::store::{LoaderError, StorageError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("storage error: {0}")]
  Storage(#[from] StorageError),

  #[error("failed to load turtle: {0}")]
  Load(#[from] LoaderError),

  #[error("invalid IRI {iri:?}: {reason}")]
  InvalidIri { iri: String, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
