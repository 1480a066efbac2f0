//! Profile — the flat, display-ready record extracted from a WebID document.
//!
//! A profile is a pure value: built once per (WebID, graph) pair, never
//! mutated afterwards. Optional fields are `None` when the graph has nothing
//! for them; sequences are empty, never absent.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

// ─── Social accounts ─────────────────────────────────────────────────────────

/// The platform a social account belongs to. The `Display` form is the fixed
/// human-readable label.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
)]
pub enum AccountKind {
  Mastodon,
  #[serde(rename = "ORCID")]
  #[strum(serialize = "ORCID")]
  Orcid,
  BlueSky,
  Matrix,
}

/// An account on some external platform, discovered by its RDF class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccount {
  #[serde(rename = "type")]
  pub kind:   AccountKind,
  pub handle: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url:    Option<String>,
}

// ─── Appearance and identity sub-types ───────────────────────────────────────

/// Preferred pronouns. Only `subject` is guaranteed to come from the graph;
/// the other two slots are empty strings when unstated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronouns {
  pub subject:    String,
  pub object:     String,
  pub possessive: String,
}

/// Profile colour scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
  pub background: String,
  pub highlight:  String,
}

// ─── Profile ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  /// The subject identifier the profile was extracted for, verbatim.
  pub webid: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub nickname:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image:        Option<String>,
  /// Mailbox with the `mailto:` scheme removed.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email:        Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub homepage:     Option<String>,
  /// The birth date exactly as the graph states it.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub birthday:     Option<String>,
  /// Whole years elapsed since `birthday`; absent when `birthday` is absent
  /// or cannot be read as a date.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub age:          Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub organization: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub role:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bio:          Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pronouns:     Option<Pronouns>,

  #[serde(default)]
  pub social_accounts: Vec<SocialAccount>,

  #[serde(default)]
  pub storage: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub inbox:   Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub colors:    Option<Colors>,
  /// Never populated: no predicate is bound to spoken languages yet.
  #[serde(default)]
  pub languages: Vec<String>,
  #[serde(default)]
  pub friends:   Vec<String>,
}
