//! Social account discovery.
//!
//! Accounts are found by RDF class, not by a link from the WebID: every node
//! typed with one of the known account classes is a candidate, and a
//! candidate only becomes a [`SocialAccount`] if it carries a handle.

use tracing::debug;

use crate::{
  Error, Result,
  graph::GraphStore,
  profile::SocialAccount,
  resolve::FieldResolver,
  vocab::{ACCOUNT_CLASSES, ACCOUNT_HANDLE, ACCOUNT_URL},
};

/// All accounts in the graph, in class scan order, then graph order within a
/// class. A node typed with several account classes yields one account per
/// class.
pub fn resolve_accounts<G: GraphStore>(
  resolver: &FieldResolver<'_, G>,
) -> Result<Vec<SocialAccount>> {
  let mut accounts = Vec::new();

  for (kind, class) in ACCOUNT_CLASSES {
    let nodes = resolver
      .graph()
      .match_by_type(class)
      .map_err(Error::unreadable)?;

    for node in nodes {
      let Some(handle) = resolver.resolve_value(&node, &ACCOUNT_HANDLE)? else {
        debug!(%kind, node = node.as_str(), "account without handle skipped");
        continue;
      };
      let url = resolver.resolve_value(&node, &ACCOUNT_URL)?;
      accounts.push(SocialAccount { kind, handle, url });
    }
  }

  Ok(accounts)
}
