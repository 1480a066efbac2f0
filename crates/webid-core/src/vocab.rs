//! The fixed vocabulary a profile is read with.
//!
//! Each logical field maps to an ordered list of candidate predicates; the
//! first candidate that resolves wins. Extending the vocabulary is a data
//! change here, never a code change in the resolvers.

use crate::profile::AccountKind;

macro_rules! iri {
  (rdf: $local:literal) => {
    concat!("http://www.w3.org/1999/02/22-rdf-syntax-ns#", $local)
  };
  (vcard: $local:literal) => {
    concat!("http://www.w3.org/2006/vcard/ns#", $local)
  };
  (foaf: $local:literal) => {
    concat!("http://xmlns.com/foaf/0.1/", $local)
  };
  (solid: $local:literal) => {
    concat!("http://www.w3.org/ns/solid/terms#", $local)
  };
  (space: $local:literal) => {
    concat!("http://www.w3.org/ns/pim/space#", $local)
  };
  (ldp: $local:literal) => {
    concat!("http://www.w3.org/ns/ldp#", $local)
  };
  (schema: $local:literal) => {
    concat!("http://schema.org/", $local)
  };
  (soc: $local:literal) => {
    concat!(
      "https://solidos.github.io/profile-pane/src/ontology/socialMedia.ttl#",
      $local
    )
  };
}

pub const RDF_TYPE: &str = iri!(rdf: "type");

/// Highlight colour used when a profile sets a background but no highlight.
pub const DEFAULT_HIGHLIGHT: &str = "#341bee";

// ─── Field table ─────────────────────────────────────────────────────────────

/// A logical profile field and the predicates that may carry it, in
/// precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
///
/// Only constructed by the table below, which never leaves `candidates`
/// empty.
pub struct Field {
  pub(crate) name:       &'static str,
  pub(crate) candidates: &'static [&'static str],
}

impl Field {
  pub fn name(&self) -> &'static str { self.name }

  pub fn candidates(&self) -> &'static [&'static str] { self.candidates }

  /// The highest-precedence predicate.
  pub fn primary(&self) -> &'static str { self.candidates[0] }
}

macro_rules! field {
  (
    $(#[$meta:meta])*
    $const:ident, $name:literal, [$($ns:ident : $local:literal),+ $(,)?]
  ) => {
    $(#[$meta])*
    pub const $const: Field = Field {
      name:       $name,
      candidates: &[$(iri!($ns: $local)),+],
    };
  };
}

// ── Identity ──────────────────────────────────────────────────────────────
field!(NAME, "name", [vcard: "fn"]);
field!(NICKNAME, "nickname", [foaf: "nick"]);
field!(IMAGE, "image", [vcard: "hasPhoto"]);
field!(BIRTHDAY, "birthday", [vcard: "bday"]);
field!(ORGANIZATION, "organization", [vcard: "organization-name"]);
field!(ROLE, "role", [vcard: "role"]);
field!(BIO, "bio", [vcard: "note"]);

// ── Contact ───────────────────────────────────────────────────────────────
field!(
  /// Points at the email container node, not at the address itself.
  EMAIL, "email", [vcard: "hasEmail"]
);
field!(
  /// Read on the email container node.
  EMAIL_VALUE, "email_value", [vcard: "value"]
);
field!(HOMEPAGE, "homepage", [vcard: "url"]);

// ── Pronouns ──────────────────────────────────────────────────────────────
field!(PRONOUN_SUBJECT, "pronoun_subject", [solid: "preferredSubjectPronoun"]);
field!(PRONOUN_OBJECT, "pronoun_object", [solid: "preferredObjectPronoun"]);
field!(
  PRONOUN_POSSESSIVE,
  "pronoun_possessive",
  [solid: "preferredRelativePronoun"]
);

// ── Appearance ────────────────────────────────────────────────────────────
field!(COLOR_BACKGROUND, "color_background", [solid: "profileBackgroundColor"]);
field!(COLOR_HIGHLIGHT, "color_highlight", [solid: "profileHighlightColor"]);

// ── Storage and social graph ──────────────────────────────────────────────
field!(STORAGE, "storage", [space: "storage"]);
field!(INBOX, "inbox", [ldp: "inbox"]);
field!(FRIENDS, "friends", [foaf: "knows"]);

// ── Social accounts ───────────────────────────────────────────────────────
field!(
  /// Read on each account node; an account without one is not emitted.
  ACCOUNT_HANDLE, "account_handle", [foaf: "accountName"]
);
field!(
  ACCOUNT_URL,
  "account_url",
  [foaf: "accountServiceHomepage", vcard: "url", schema: "url"]
);

/// Account classes in scan order.
pub const ACCOUNT_CLASSES: [(AccountKind, &str); 4] = [
  (AccountKind::Mastodon, iri!(soc: "MastodonAccount")),
  (AccountKind::Orcid, iri!(soc: "OrcidAccount")),
  (AccountKind::BlueSky, iri!(soc: "BlueSkyAccount")),
  (AccountKind::Matrix, iri!(soc: "MatrixAccount")),
];

/// The RDF class an account of `kind` is typed with.
pub fn account_class(kind: AccountKind) -> Option<&'static str> {
  ACCOUNT_CLASSES
    .iter()
    .find_map(|(k, class)| (*k == kind).then_some(*class))
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn every_account_kind_has_a_class() {
    for kind in AccountKind::iter() {
      assert!(account_class(kind).is_some(), "{kind} has no RDF class");
    }
  }

  #[test]
  fn account_url_precedence() {
    assert_eq!(ACCOUNT_URL.candidates, &[
      "http://xmlns.com/foaf/0.1/accountServiceHomepage",
      "http://www.w3.org/2006/vcard/ns#url",
      "http://schema.org/url",
    ]);
  }

  #[test]
  fn every_field_has_a_candidate() {
    for field in [
      NAME, NICKNAME, IMAGE, BIRTHDAY, ORGANIZATION, ROLE, BIO, EMAIL,
      EMAIL_VALUE, HOMEPAGE, PRONOUN_SUBJECT, PRONOUN_OBJECT,
      PRONOUN_POSSESSIVE, COLOR_BACKGROUND, COLOR_HIGHLIGHT, STORAGE, INBOX,
      FRIENDS, ACCOUNT_HANDLE, ACCOUNT_URL,
    ] {
      assert!(!field.candidates().is_empty(), "{} is empty", field.name());
      assert_eq!(field.primary(), field.candidates()[0]);
    }
  }

  #[test]
  fn labels() {
    let labels: Vec<String> =
      ACCOUNT_CLASSES.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(labels, ["Mastodon", "ORCID", "BlueSky", "Matrix"]);
  }
}
