//! Core types and extraction rules for WebID profiles.
//!
//! Turns a parsed RDF graph and a WebID into a flat [`Profile`]. The crate
//! knows nothing about HTTP or Turtle; graph backends implement
//! [`GraphStore`] and hand it in fully populated.
//!
//! ```
//! use webid_core::{extract, memory::MemoryGraph};
//! use webid_core::graph::{Node, Term};
//!
//! let me = "https://alice.example/profile/card#me";
//! let mut graph = MemoryGraph::new();
//! graph.insert(
//!   Node::iri(me),
//!   "http://www.w3.org/2006/vcard/ns#fn",
//!   Term::literal("Alice"),
//! );
//!
//! let profile = extract(&graph, me).unwrap();
//! assert_eq!(profile.name.as_deref(), Some("Alice"));
//! ```

pub mod derive;
pub mod error;
pub mod extract;
pub mod graph;
pub mod memory;
pub mod profile;
pub mod resolve;
pub mod social;
pub mod vocab;

pub use error::{Error, Result};
pub use extract::{extract, extract_at};
pub use graph::GraphStore;
pub use profile::{AccountKind, Colors, Profile, Pronouns, SocialAccount};

/// The failure [`extract`] reports when the graph cannot be queried.
pub type ExtractionError = Error;
