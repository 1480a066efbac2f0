//! A plain in-memory [`GraphStore`] that enumerates triples in insertion
//! order. Handy for callers that build graphs programmatically and for tests.

use std::convert::Infallible;

use crate::{
  graph::{GraphStore, Node, Term},
  vocab::RDF_TYPE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
  pub subject:   Node,
  pub predicate: String,
  pub object:    Term,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
  triples: Vec<Triple>,
}

impl MemoryGraph {
  pub fn new() -> Self { Self::default() }

  pub fn insert(
    &mut self,
    subject: Node,
    predicate: impl Into<String>,
    object: Term,
  ) {
    self.triples.push(Triple {
      subject,
      predicate: predicate.into(),
      object,
    });
  }

  /// Shorthand for `(subject, rdf:type, class)`.
  pub fn insert_type(&mut self, subject: Node, class: impl Into<String>) {
    self.insert(subject, RDF_TYPE, Term::iri(class));
  }

  pub fn len(&self) -> usize { self.triples.len() }

  pub fn is_empty(&self) -> bool { self.triples.is_empty() }

  fn matching<'a>(
    &'a self,
    subject: &'a Node,
    predicate: &'a str,
  ) -> impl Iterator<Item = &'a Triple> + 'a {
    self
      .triples
      .iter()
      .filter(move |t| &t.subject == subject && t.predicate == predicate)
  }
}

impl FromIterator<Triple> for MemoryGraph {
  fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
    Self {
      triples: iter.into_iter().collect(),
    }
  }
}

impl GraphStore for MemoryGraph {
  type Error = Infallible;

  fn any(
    &self,
    subject: &Node,
    predicate: &str,
  ) -> Result<Option<Term>, Self::Error> {
    Ok(self.matching(subject, predicate).next().map(|t| t.object.clone()))
  }

  fn each(
    &self,
    subject: &Node,
    predicate: &str,
  ) -> Result<Vec<Term>, Self::Error> {
    Ok(
      self
        .matching(subject, predicate)
        .map(|t| t.object.clone())
        .collect(),
    )
  }

  fn match_by_type(&self, class: &str) -> Result<Vec<Node>, Self::Error> {
    Ok(
      self
        .triples
        .iter()
        .filter(|t| {
          t.predicate == RDF_TYPE
            && t.object.is_resource()
            && t.object.value == class
        })
        .map(|t| t.subject.clone())
        .collect(),
    )
  }
}
