//! Single-value and multi-value lookups over a [`GraphStore`].

use tracing::trace;

use crate::{
  Error, Result,
  graph::{GraphStore, Node, Term},
  vocab::Field,
};

/// Borrowing wrapper that answers [`Field`] lookups against one graph.
pub struct FieldResolver<'g, G: GraphStore> {
  graph: &'g G,
}

impl<'g, G: GraphStore> FieldResolver<'g, G> {
  pub fn new(graph: &'g G) -> Self { Self { graph } }

  pub fn graph(&self) -> &'g G { self.graph }

  /// Try each candidate predicate in order and return the object of the first
  /// one with a matching triple.
  ///
  /// A candidate whose object is an empty literal still counts as a match;
  /// later candidates are not consulted.
  pub fn resolve_one(&self, subject: &Node, field: &Field) -> Result<Option<Term>> {
    for predicate in field.candidates {
      let found = self
        .graph
        .any(subject, predicate)
        .map_err(Error::unreadable)?;
      if let Some(term) = found {
        trace!(field = field.name, predicate, value = %term.value, "resolved");
        return Ok(Some(term));
      }
    }
    trace!(field = field.name, subject = subject.as_str(), "no match");
    Ok(None)
  }

  /// [`Self::resolve_one`], keeping only the lexical value.
  pub fn resolve_value(
    &self,
    subject: &Node,
    field: &Field,
  ) -> Result<Option<String>> {
    Ok(self.resolve_one(subject, field)?.map(Term::into_value))
  }

  /// Every object of every candidate predicate, candidates in declared order
  /// and objects in the graph's own order. No deduplication.
  pub fn resolve_all(&self, subject: &Node, field: &Field) -> Result<Vec<Term>> {
    let mut terms = Vec::new();
    for predicate in field.candidates {
      let found = self
        .graph
        .each(subject, predicate)
        .map_err(Error::unreadable)?;
      terms.extend(found);
    }
    trace!(field = field.name, count = terms.len(), "collected");
    Ok(terms)
  }

  /// [`Self::resolve_all`], keeping only the lexical values.
  pub fn resolve_values(
    &self,
    subject: &Node,
    field: &Field,
  ) -> Result<Vec<String>> {
    Ok(
      self
        .resolve_all(subject, field)?
        .into_iter()
        .map(Term::into_value)
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{memory::MemoryGraph, vocab};

  fn me() -> Node { Node::iri("https://alice.example/card#me") }

  #[test]
  fn first_candidate_wins() {
    let account = Node::blank("acct");
    let mut g = MemoryGraph::new();
    g.insert(
      account.clone(),
      "http://schema.org/url",
      Term::iri("https://schema.example/"),
    );
    g.insert(
      account.clone(),
      "http://xmlns.com/foaf/0.1/accountServiceHomepage",
      Term::iri("https://home.example/"),
    );

    let r = FieldResolver::new(&g);
    let url = r.resolve_value(&account, &vocab::ACCOUNT_URL).unwrap();
    assert_eq!(url.as_deref(), Some("https://home.example/"));
  }

  #[test]
  fn falls_through_to_later_candidates() {
    let account = Node::blank("acct");
    let mut g = MemoryGraph::new();
    g.insert(
      account.clone(),
      "http://schema.org/url",
      Term::iri("https://schema.example/"),
    );

    let r = FieldResolver::new(&g);
    let url = r.resolve_value(&account, &vocab::ACCOUNT_URL).unwrap();
    assert_eq!(url.as_deref(), Some("https://schema.example/"));
  }

  #[test]
  fn empty_literal_is_a_match() {
    let mut g = MemoryGraph::new();
    g.insert(me(), vocab::NAME.primary(), Term::literal(""));

    let r = FieldResolver::new(&g);
    assert_eq!(
      r.resolve_value(&me(), &vocab::NAME).unwrap(),
      Some(String::new())
    );
    assert_eq!(r.resolve_value(&me(), &vocab::NICKNAME).unwrap(), None);
  }

  #[test]
  fn resolve_all_keeps_order_and_duplicates() {
    let mut g = MemoryGraph::new();
    for friend in ["https://b.example/#me", "https://a.example/#me", "https://b.example/#me"] {
      g.insert(me(), vocab::FRIENDS.primary(), Term::iri(friend));
    }

    let r = FieldResolver::new(&g);
    assert_eq!(r.resolve_values(&me(), &vocab::FRIENDS).unwrap(), [
      "https://b.example/#me",
      "https://a.example/#me",
      "https://b.example/#me",
    ]);
  }

  #[test]
  fn resolve_all_empty() {
    let g = MemoryGraph::new();
    let r = FieldResolver::new(&g);
    assert!(r.resolve_all(&me(), &vocab::STORAGE).unwrap().is_empty());
  }
}
