//! Oxigraph backend for WebID profile graphs.
//!
//! Parses a Turtle document into an in-memory [`oxigraph`] store and answers
//! [`webid_core::GraphStore`] lookups against its default graph.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::OxigraphGraph;
