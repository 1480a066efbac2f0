//! The `GraphStore` trait and the term types it speaks.
//!
//! The trait is implemented by graph backends (e.g. `webid-store-oxigraph`,
//! or [`crate::memory::MemoryGraph`] in tests). The extractor depends on this
//! abstraction, never on a concrete backend.

// ─── Terms ───────────────────────────────────────────────────────────────────

/// A term that can stand in subject position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
  Iri(String),
  /// A blank node, identified by its document-local label.
  Blank(String),
}

impl Node {
  pub fn iri(iri: impl Into<String>) -> Self { Self::Iri(iri.into()) }

  pub fn blank(label: impl Into<String>) -> Self { Self::Blank(label.into()) }

  pub fn as_str(&self) -> &str {
    match self {
      Self::Iri(s) | Self::Blank(s) => s,
    }
  }
}

/// What kind of term an object value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
  Iri,
  Blank,
  Literal,
}

/// The object of a triple: its lexical value plus whether it is a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
  pub value: String,
  pub kind:  TermKind,
}

impl Term {
  pub fn iri(value: impl Into<String>) -> Self {
    Self { value: value.into(), kind: TermKind::Iri }
  }

  pub fn blank(label: impl Into<String>) -> Self {
    Self { value: label.into(), kind: TermKind::Blank }
  }

  pub fn literal(value: impl Into<String>) -> Self {
    Self { value: value.into(), kind: TermKind::Literal }
  }

  /// `true` for IRIs and blank nodes.
  pub fn is_resource(&self) -> bool { self.kind != TermKind::Literal }

  /// Reinterpret a resource object as a subject for a follow-up lookup.
  /// Literals cannot be subjects and yield `None`.
  pub fn to_node(&self) -> Option<Node> {
    match self.kind {
      TermKind::Iri => Some(Node::Iri(self.value.clone())),
      TermKind::Blank => Some(Node::Blank(self.value.clone())),
      TermKind::Literal => None,
    }
  }

  pub fn into_value(self) -> String { self.value }
}

impl From<Node> for Term {
  fn from(node: Node) -> Self {
    match node {
      Node::Iri(s) => Self::iri(s),
      Node::Blank(s) => Self::blank(s),
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Read-only view over the triples of one parsed document.
///
/// Every lookup is fallible: a backend that cannot answer (corrupt storage,
/// a half-populated graph) reports it through `Self::Error`, which aborts the
/// whole extraction.
pub trait GraphStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The object of the first `(subject, predicate, *)` triple, if any.
  fn any(
    &self,
    subject: &Node,
    predicate: &str,
  ) -> Result<Option<Term>, Self::Error>;

  /// Every object of `(subject, predicate, *)`, in the backend's enumeration
  /// order.
  fn each(&self, subject: &Node, predicate: &str)
  -> Result<Vec<Term>, Self::Error>;

  /// Every subject `s` with `(s, rdf:type, class)`, in the backend's
  /// enumeration order.
  fn match_by_type(&self, class: &str) -> Result<Vec<Node>, Self::Error>;
}
