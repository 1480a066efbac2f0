//! Retrieves WebID profile documents over HTTP.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, header::ACCEPT};
use tracing::{debug, info};

/// HTTP client that asks for Turtle.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ProfileFetcher {
  client: Client,
}

impl ProfileFetcher {
  pub fn new(timeout: Duration) -> Result<Self> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client })
  }

  /// `GET <document>` with `Accept: text/turtle`, returning the body.
  pub async fn fetch(&self, webid: &str) -> Result<String> {
    let url = document_url(webid);
    info!(%url, "fetching profile document");

    let resp = self
      .client
      .get(url)
      .header(ACCEPT, "text/turtle")
      .send()
      .await
      .with_context(|| format!("GET {url} failed"))?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET {url} returned {}", resp.status()));
    }
    debug!(
      content_type = ?resp.headers().get(reqwest::header::CONTENT_TYPE),
      "profile document received"
    );
    resp.text().await.context("reading profile document body")
  }
}

/// The document a WebID lives in: the WebID with its fragment removed.
pub fn document_url(webid: &str) -> &str {
  webid.split_once('#').map_or(webid, |(doc, _)| doc)
}
