//! Profile extraction: one stateless pass from a parsed graph to a
//! [`Profile`].

use chrono::{NaiveDate, Utc};
use tracing::{debug, instrument};

use crate::{
  Result, derive,
  graph::{GraphStore, Node, Term},
  profile::Profile,
  resolve::FieldResolver,
  social::resolve_accounts,
  vocab,
};

/// Extract the profile of `webid`, computing its age as of today (UTC).
pub fn extract<G: GraphStore>(graph: &G, webid: &str) -> Result<Profile> {
  extract_at(graph, webid, Utc::now().date_naive())
}

/// Extract the profile of `webid`, computing its age as of `today`.
///
/// Fails only when the graph cannot be queried; missing data just leaves the
/// corresponding field empty.
#[instrument(skip(graph), level = "debug")]
pub fn extract_at<G: GraphStore>(
  graph: &G,
  webid: &str,
  today: NaiveDate,
) -> Result<Profile> {
  let r = FieldResolver::new(graph);
  let me = Node::iri(webid);

  let birthday = r.resolve_value(&me, &vocab::BIRTHDAY)?;
  let age = birthday.as_deref().and_then(|b| {
    let age = derive::age_from_literal(b, today);
    if age.is_none() {
      debug!(birthday = b, "birthday is not a date; age omitted");
    }
    age
  });

  // hasEmail points at a container node whose vcard:value is the mailbox.
  let container = r
    .resolve_one(&me, &vocab::EMAIL)?
    .as_ref()
    .and_then(Term::to_node);
  let email = match container {
    Some(container) => r
      .resolve_value(&container, &vocab::EMAIL_VALUE)?
      .and_then(|v| derive::mailbox(&v)),
    None => None,
  };

  let pronouns = derive::pronouns(
    r.resolve_value(&me, &vocab::PRONOUN_SUBJECT)?,
    r.resolve_value(&me, &vocab::PRONOUN_OBJECT)?,
    r.resolve_value(&me, &vocab::PRONOUN_POSSESSIVE)?,
  );

  let colors = derive::colors(
    r.resolve_value(&me, &vocab::COLOR_BACKGROUND)?,
    r.resolve_value(&me, &vocab::COLOR_HIGHLIGHT)?,
  );

  let profile = Profile {
    webid: webid.to_string(),
    name: r.resolve_value(&me, &vocab::NAME)?,
    nickname: r.resolve_value(&me, &vocab::NICKNAME)?,
    image: r.resolve_value(&me, &vocab::IMAGE)?,
    email,
    homepage: r.resolve_value(&me, &vocab::HOMEPAGE)?,
    birthday,
    age,
    organization: r.resolve_value(&me, &vocab::ORGANIZATION)?,
    role: r.resolve_value(&me, &vocab::ROLE)?,
    bio: r
      .resolve_value(&me, &vocab::BIO)?
      .map(|b| b.trim().to_string()),
    pronouns,
    social_accounts: resolve_accounts(&r)?,
    storage: r.resolve_values(&me, &vocab::STORAGE)?,
    inbox: r.resolve_value(&me, &vocab::INBOX)?,
    colors,
    languages: Vec::new(),
    friends: r.resolve_values(&me, &vocab::FRIENDS)?,
  };

  debug!(
    accounts = profile.social_accounts.len(),
    friends = profile.friends.len(),
    "profile extracted"
  );
  Ok(profile)
}
