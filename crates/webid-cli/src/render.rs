//! Plain-text rendering of a [`Profile`].

use std::fmt::Write as _;

use webid_core::Profile;

/// Label column width.
const LABEL: usize = 14;

fn row(out: &mut String, label: &str, value: &str) {
  let _ = writeln!(out, "{:<LABEL$}{value}", format!("{label}:"));
}

fn list(out: &mut String, title: &str, items: &[String]) {
  if items.is_empty() {
    return;
  }
  let _ = writeln!(out, "\n{title}");
  for item in items {
    let _ = writeln!(out, "  {item}");
  }
}

/// Render every present field, one per line, grouped into sections.
pub fn text(profile: &Profile) -> String {
  let mut out = String::new();

  let heading = profile.name.as_deref().unwrap_or(&profile.webid);
  let _ = writeln!(out, "{heading}");
  let _ = writeln!(out, "{}", "─".repeat(heading.chars().count()));

  row(&mut out, "WebID", &profile.webid);
  let scalars = [
    ("Nickname", &profile.nickname),
    ("Email", &profile.email),
    ("Homepage", &profile.homepage),
    ("Image", &profile.image),
    ("Organization", &profile.organization),
    ("Role", &profile.role),
    ("Inbox", &profile.inbox),
  ];
  for (label, value) in scalars {
    if let Some(value) = value {
      row(&mut out, label, value);
    }
  }

  if let Some(birthday) = &profile.birthday {
    let value = match profile.age {
      Some(age) => format!("{birthday} ({age} years old)"),
      None => birthday.clone(),
    };
    row(&mut out, "Birthday", &value);
  }

  if let Some(p) = &profile.pronouns {
    let value = [p.subject.as_str(), &p.object, &p.possessive]
      .into_iter()
      .filter(|s| !s.is_empty())
      .collect::<Vec<_>>()
      .join("/");
    row(&mut out, "Pronouns", &value);
  }

  if let Some(c) = &profile.colors {
    row(&mut out, "Colors", &format!("{} / {}", c.background, c.highlight));
  }

  if let Some(bio) = &profile.bio {
    let _ = writeln!(out, "\n{bio}");
  }

  if !profile.social_accounts.is_empty() {
    let _ = writeln!(out, "\nAccounts");
    for account in &profile.social_accounts {
      let _ = write!(out, "  {:<10}{}", account.kind.to_string(), account.handle);
      if let Some(url) = &account.url {
        let _ = write!(out, "  <{url}>");
      }
      out.push('\n');
    }
  }

  list(&mut out, "Storage", &profile.storage);
  list(&mut out, "Friends", &profile.friends);

  out
}
