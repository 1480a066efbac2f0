//! Values computed from resolved fields rather than read from the graph.
//!
//! Nothing here touches a [`GraphStore`](crate::graph::GraphStore).

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::{
  profile::{Colors, Pronouns},
  vocab::DEFAULT_HIGHLIGHT,
};

/// Read a birth-date literal. Accepts `YYYY-MM-DD`, `YYYYMMDD`, RFC 3339
/// date-times and zone-less `YYYY-MM-DDTHH:MM:SS`; an `xsd:date` timezone
/// suffix (`2000-03-15Z`, `2000-03-15+02:00`) is ignored.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
  let value = value.trim();
  if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
    return Some(d);
  }
  if let Ok(d) = NaiveDate::parse_from_str(value, "%Y%m%d") {
    return Some(d);
  }
  if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
    return Some(dt.date_naive());
  }
  if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
    return Some(dt.date());
  }
  // xsd:date with a timezone
  let (date, zone) = value.split_at_checked(10)?;
  let zone_ok = zone == "Z"
    || (zone.len() == 6 && (zone.starts_with('+') || zone.starts_with('-')));
  if zone_ok {
    return NaiveDate::parse_from_str(date, "%Y-%m-%d").ok();
  }
  None
}

/// Whole calendar years between `born` and `today`. A birthday that has not
/// yet come round this year does not count.
pub fn age_on(born: NaiveDate, today: NaiveDate) -> i32 {
  let mut age = today.year() - born.year();
  if (today.month(), today.day()) < (born.month(), born.day()) {
    age -= 1;
  }
  age
}

/// Age for a birthday literal, or `None` if the literal is not a date.
pub fn age_from_literal(birthday: &str, today: NaiveDate) -> Option<i32> {
  parse_birth_date(birthday).map(|born| age_on(born, today))
}

/// Pronouns exist only when the subject pronoun does. The object and
/// possessive slots fall back to empty strings independently.
pub fn pronouns(
  subject: Option<String>,
  object: Option<String>,
  possessive: Option<String>,
) -> Option<Pronouns> {
  subject.map(|subject| Pronouns {
    subject,
    object: object.unwrap_or_default(),
    possessive: possessive.unwrap_or_default(),
  })
}

/// A colour scheme exists only when a background is set; a lone highlight is
/// discarded. An empty highlight is treated as unset.
pub fn colors(
  background: Option<String>,
  highlight: Option<String>,
) -> Option<Colors> {
  background.map(|background| Colors {
    background,
    highlight: highlight
      .filter(|h| !h.is_empty())
      .unwrap_or_else(|| DEFAULT_HIGHLIGHT.to_string()),
  })
}

/// Drop the first `mailto:` from a mailbox value. Empty results are absent.
pub fn mailbox(value: &str) -> Option<String> {
  let address = value.replacen("mailto:", "", 1);
  (!address.is_empty()).then_some(address)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn age_day_before_birthday() {
    assert_eq!(age_on(date(2000, 3, 15), date(2024, 3, 14)), 23);
  }

  #[test]
  fn age_on_and_after_birthday() {
    assert_eq!(age_on(date(2000, 3, 15), date(2024, 3, 15)), 24);
    assert_eq!(age_on(date(2000, 3, 15), date(2024, 12, 1)), 24);
  }

  #[test]
  fn age_earlier_month() {
    assert_eq!(age_on(date(2000, 11, 2), date(2024, 3, 20)), 23);
  }

  #[test]
  fn future_birthday_gives_negative_age() {
    assert_eq!(age_on(date(2030, 1, 1), date(2024, 6, 1)), -6);
  }

  #[test]
  fn leap_day_birthday() {
    assert_eq!(age_on(date(2000, 2, 29), date(2023, 2, 28)), 22);
    assert_eq!(age_on(date(2000, 2, 29), date(2023, 3, 1)), 23);
  }

  #[test]
  fn birth_date_formats() {
    let want = Some(date(1990, 7, 4));
    assert_eq!(parse_birth_date("1990-07-04"), want);
    assert_eq!(parse_birth_date(" 1990-07-04\n"), want);
    assert_eq!(parse_birth_date("19900704"), want);
    assert_eq!(parse_birth_date("1990-07-04T10:30:00Z"), want);
    assert_eq!(parse_birth_date("1990-07-04T10:30:00"), want);
    assert_eq!(parse_birth_date("1990-07-04Z"), want);
    assert_eq!(parse_birth_date("1990-07-04+02:00"), want);
  }

  #[test]
  fn unparsable_birthday_has_no_age() {
    let today = date(2024, 1, 1);
    assert_eq!(age_from_literal("sometime in the nineties", today), None);
    assert_eq!(age_from_literal("--07-04", today), None);
    assert_eq!(age_from_literal("", today), None);
    assert_eq!(age_from_literal("1990-13-40", today), None);
  }

  #[test]
  fn pronouns_need_subject() {
    assert_eq!(pronouns(None, Some("her".into()), Some("hers".into())), None);

    let p = pronouns(Some("they".into()), None, Some("theirs".into())).unwrap();
    assert_eq!(p.subject, "they");
    assert_eq!(p.object, "");
    assert_eq!(p.possessive, "theirs");
  }

  #[test]
  fn highlight_defaults() {
    let c = colors(Some("#ffffff".into()), None).unwrap();
    assert_eq!(c.highlight, DEFAULT_HIGHLIGHT);

    let c = colors(Some("#ffffff".into()), Some(String::new())).unwrap();
    assert_eq!(c.highlight, DEFAULT_HIGHLIGHT);

    let c = colors(Some("#ffffff".into()), Some("#000000".into())).unwrap();
    assert_eq!(c.highlight, "#000000");
  }

  #[test]
  fn highlight_alone_is_discarded() {
    assert_eq!(colors(None, Some("#000000".into())), None);
  }

  #[test]
  fn mailbox_strips_scheme() {
    assert_eq!(mailbox("mailto:a@example.org").as_deref(), Some("a@example.org"));
    assert_eq!(mailbox("a@example.org").as_deref(), Some("a@example.org"));
    assert_eq!(mailbox("mailto:"), None);
  }

  #[test]
  fn mailbox_strips_scheme_once() {
    assert_eq!(mailbox("mailto:mailto:x").as_deref(), Some("mailto:x"));
  }
}
