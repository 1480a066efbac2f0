//! `OxigraphGraph` — implements [`GraphStore`] over an in-memory oxigraph
//! [`Store`].

use oxigraph::{
  io::GraphFormat,
  model::{
    BlankNodeRef, GraphNameRef, NamedNodeRef, Quad, Subject, SubjectRef,
    Term as OxTerm, TermRef, vocab::rdf,
  },
  store::{QuadIter, Store},
};
use tracing::debug;
use webid_core::{
  GraphStore,
  graph::{Node, Term},
};

use crate::{Error, Result};

// ─── Term conversion ─────────────────────────────────────────────────────────

fn named_node(iri: &str) -> Result<NamedNodeRef<'_>> {
  NamedNodeRef::new(iri).map_err(|e| Error::InvalidIri {
    iri:    iri.to_string(),
    reason: e.to_string(),
  })
}

fn subject_ref(node: &Node) -> Result<SubjectRef<'_>> {
  Ok(match node {
    Node::Iri(iri) => named_node(iri)?.into(),
    Node::Blank(label) => BlankNodeRef::new_unchecked(label).into(),
  })
}

/// Quoted triples (RDF-star) have no place in a profile and are skipped.
fn from_term(term: OxTerm) -> Option<Term> {
  match term {
    OxTerm::NamedNode(n) => Some(Term::iri(n.as_str())),
    OxTerm::BlankNode(b) => Some(Term::blank(b.as_str())),
    OxTerm::Literal(l) => Some(Term::literal(l.value())),
    #[allow(unreachable_patterns)]
    _ => None,
  }
}

fn from_subject(subject: Subject) -> Option<Node> {
  match subject {
    Subject::NamedNode(n) => Some(Node::iri(n.as_str())),
    Subject::BlankNode(b) => Some(Node::blank(b.as_str())),
    #[allow(unreachable_patterns)]
    _ => None,
  }
}

// ─── OxigraphGraph ───────────────────────────────────────────────────────────

/// One parsed profile document. Only the default graph is consulted.
pub struct OxigraphGraph {
  store: Store,
}

impl OxigraphGraph {
  /// Parse `turtle` with `base_iri` resolving relative IRIs such as `<#me>`.
  pub fn from_turtle(turtle: &str, base_iri: &str) -> Result<Self> {
    let store = Store::new()?;
    store.load_graph(
      turtle.as_bytes(),
      GraphFormat::Turtle,
      GraphNameRef::DefaultGraph,
      Some(base_iri),
    )?;
    let graph = Self { store };
    debug!(base_iri, triples = graph.len()?, "turtle document loaded");
    Ok(graph)
  }

  /// Number of triples held.
  pub fn len(&self) -> Result<usize> { Ok(self.store.len()?) }

  pub fn is_empty(&self) -> Result<bool> { Ok(self.store.is_empty()?) }

  fn quads(&self, subject: &Node, predicate: &str) -> Result<QuadIter> {
    Ok(self.store.quads_for_pattern(
      Some(subject_ref(subject)?),
      Some(named_node(predicate)?),
      None,
      Some(GraphNameRef::DefaultGraph),
    ))
  }
}

impl GraphStore for OxigraphGraph {
  type Error = Error;

  fn any(&self, subject: &Node, predicate: &str) -> Result<Option<Term>> {
    for quad in self.quads(subject, predicate)? {
      let Quad { object, .. } = quad?;
      if let Some(term) = from_term(object) {
        return Ok(Some(term));
      }
    }
    Ok(None)
  }

  fn each(&self, subject: &Node, predicate: &str) -> Result<Vec<Term>> {
    let mut terms = Vec::new();
    for quad in self.quads(subject, predicate)? {
      let Quad { object, .. } = quad?;
      terms.extend(from_term(object));
    }
    Ok(terms)
  }

  fn match_by_type(&self, class: &str) -> Result<Vec<Node>> {
    let class = TermRef::from(named_node(class)?);
    let quads = self.store.quads_for_pattern(
      None,
      Some(rdf::TYPE),
      Some(class),
      Some(GraphNameRef::DefaultGraph),
    );
    let mut nodes = Vec::new();
    for quad in quads {
      let Quad { subject, .. } = quad?;
      nodes.extend(from_subject(subject));
    }
    Ok(nodes)
  }
}
