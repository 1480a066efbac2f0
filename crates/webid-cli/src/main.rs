//! `webid` — resolve a WebID into a readable profile.
//!
//! # Usage
//!
//! ```
//! webid https://alice.example/profile/card#me
//! webid --format json https://alice.example/profile/card#me
//! webid --file card.ttl https://alice.example/profile/card#me
//! ```

mod fetch;
mod render;

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use fetch::ProfileFetcher;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use webid_core::Profile;
use webid_store_oxigraph::OxigraphGraph;

const DEFAULT_WEBID: &str = "https://timbl.solidcommunity.net/profile/card#me";
const DEFAULT_CONFIG: &str = "~/.config/webid/config.toml";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "webid", version, about = "Resolve a WebID into a profile")]
struct Args {
  /// The WebID to resolve (default: from config, else a well-known profile).
  webid: Option<String>,

  /// Path to a TOML config file (webid, timeout_secs, format).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Read the Turtle document from disk instead of fetching it.
  #[arg(short, long, value_name = "PATH")]
  file: Option<PathBuf>,

  /// Output format.
  #[arg(long, value_enum)]
  format: Option<OutputFormat>,

  /// Compute age as of this date (YYYY-MM-DD) instead of today.
  #[arg(long, value_name = "DATE")]
  today: Option<NaiveDate>,
}

#[derive(ValueEnum, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum OutputFormat {
  Text,
  Json,
}

// ─── Config ───────────────────────────────────────────────────────────────────

/// Settings layered from defaults, the config file and `WEBID_*` variables.
#[derive(Deserialize, Debug, Clone)]
struct Settings {
  webid:        String,
  timeout_secs: u64,
  format:       OutputFormat,
}

fn load_settings(path: &Path) -> Result<Settings> {
  let settings = config::Config::builder()
    .set_default("webid", DEFAULT_WEBID)?
    .set_default("timeout_secs", 30)?
    .set_default("format", "text")?
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("WEBID"))
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise settings")
}

/// CLI flags override config file, which overrides defaults.
fn merge(args: &Args, settings: Settings) -> (String, OutputFormat) {
  let webid = args.webid.clone().unwrap_or(settings.webid);
  let format = args.format.unwrap_or(settings.format);
  (webid, format)
}

// ─── Extraction ───────────────────────────────────────────────────────────────

/// Parse `turtle` as the document of `webid` and extract its profile.
fn profile_from_turtle(
  turtle: &str,
  webid: &str,
  today: Option<NaiveDate>,
) -> Result<Profile> {
  let graph = OxigraphGraph::from_turtle(turtle, webid)
    .with_context(|| format!("parsing profile document for {webid}"))?;

  match today {
    Some(today) => webid_core::extract_at(&graph, webid, today),
    None => webid_core::extract(&graph, webid),
  }
  .with_context(|| format!("extracting profile for {webid}"))
}

/// The `--file` path: read a Turtle document from disk.
fn profile_from_file(
  path: &Path,
  webid: &str,
  today: Option<NaiveDate>,
) -> Result<Profile> {
  let turtle = std::fs::read_to_string(path)
    .with_context(|| format!("reading {}", path.display()))?;
  profile_from_turtle(&turtle, webid, today)
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  // Logs go to stderr so stdout carries only the profile.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let config_path = expand_tilde(
    args
      .config
      .as_deref()
      .unwrap_or_else(|| Path::new(DEFAULT_CONFIG)),
  );
  let settings = load_settings(&config_path)?;

  let (webid, format) = merge(&args, settings.clone());

  let profile = match &args.file {
    Some(path) => profile_from_file(path, &webid, args.today)?,
    None => {
      let turtle =
        ProfileFetcher::new(Duration::from_secs(settings.timeout_secs))?
          .fetch(&webid)
          .await?;
      profile_from_turtle(&turtle, &webid, args.today)?
    }
  };

  match format {
    OutputFormat::Json => {
      let json = serde_json::to_string_pretty(&profile)
        .context("serialising profile")?;
      println!("{json}");
    }
    OutputFormat::Text => print!("{}", render::text(&profile)),
  }

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;

  const FIXTURE: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/card.ttl");
  const FIXTURE_WEBID: &str = "https://alice.example/profile/card#me";

  fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
      .suffix(".toml")
      .tempfile()
      .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
  }

  #[test]
  fn config_file_overrides_defaults() {
    let file = config_file("format = \"json\"\ntimeout_secs = 5\n");
    let settings = load_settings(file.path()).unwrap();
    assert_eq!(settings.format, OutputFormat::Json);
    assert_eq!(settings.timeout_secs, 5);
    assert_eq!(settings.webid, DEFAULT_WEBID);
  }

  #[test]
  fn flags_override_config_file() {
    let file = config_file(
      "format = \"json\"\nwebid = \"https://bob.example/card#me\"\n",
    );
    let settings = load_settings(file.path()).unwrap();

    let args = Args::parse_from(["webid", "--format", "text"]);
    let (webid, format) = merge(&args, settings.clone());
    assert_eq!(format, OutputFormat::Text);
    assert_eq!(webid, "https://bob.example/card#me");

    let args = Args::parse_from(["webid", "https://carol.example/card#me"]);
    let (webid, format) = merge(&args, settings);
    assert_eq!(format, OutputFormat::Json);
    assert_eq!(webid, "https://carol.example/card#me");
  }

  #[test]
  fn profile_from_file_on_disk() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 14);
    let profile =
      profile_from_file(Path::new(FIXTURE), FIXTURE_WEBID, today).unwrap();

    assert_eq!(profile.webid, FIXTURE_WEBID);
    assert_eq!(profile.name.as_deref(), Some("Alice Liddell"));
    assert_eq!(profile.email.as_deref(), Some("alice@example.org"));
    assert_eq!(profile.age, Some(23));
    assert_eq!(profile.inbox.as_deref(), Some("https://alice.example/inbox/"));
    assert_eq!(profile.social_accounts.len(), 1);
    assert_eq!(profile.social_accounts[0].handle, "@alice@social.example");
  }

  #[test]
  fn missing_file_is_an_error() {
    let err = profile_from_file(
      Path::new("/nonexistent/card.ttl"),
      FIXTURE_WEBID,
      None,
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("reading /nonexistent/card.ttl"));
  }

  #[test]
  fn malformed_turtle_is_an_error() {
    let err =
      profile_from_turtle("<#me> vcard:fn", FIXTURE_WEBID, None).unwrap_err();
    assert!(err.to_string().contains("parsing profile document"));
  }

  #[test]
  fn defaults_apply_without_config_file() {
    let settings =
      load_settings(Path::new("/nonexistent/webid/config.toml")).unwrap();
    assert_eq!(settings.timeout_secs, 30);
    assert_eq!(settings.format, OutputFormat::Text);
  }

  #[test]
  fn absolute_paths_are_untouched() {
    let p = Path::new("/etc/webid.toml");
    assert_eq!(expand_tilde(p), p);
  }

  #[test]
  fn args_parse() {
    let args = Args::parse_from([
      "webid",
      "--format",
      "json",
      "--today",
      "2024-03-15",
      "https://alice.example/card#me",
    ]);
    assert_eq!(args.webid.as_deref(), Some("https://alice.example/card#me"));
    assert_eq!(args.format, Some(OutputFormat::Json));
    assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 3, 15));
  }
}
