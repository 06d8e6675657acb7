//! HTTP transport seam for the console client.
//!
//! The console exposes no programmatic API, so every operation is either a
//! page fetch or a form replay over an already-authenticated channel.
//! [`Transport`] is the minimal capability the rest of the crate consumes;
//! [`HttpTransport`] is the production implementation over reqwest with a
//! cookie store carrying the operator session.

use crate::error::{ConsoleLinkError, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;
use scraper::Html;
use std::time::Instant;

/// A fetched console page.
///
/// Carries the raw response body; [`Document::parse`] materializes the HTML
/// tree on demand. Parsed trees are kept inside synchronous scopes by the
/// callers so client futures stay `Send`.
#[derive(Debug, Clone)]
pub struct Document {
    path: String,
    body: String,
}

impl Document {
    /// Wrap a fetched page body.
    pub fn new(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
        }
    }

    /// The console path this document was fetched from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The raw HTML body.
    pub fn raw(&self) -> &str {
        &self.body
    }

    /// Parse the body into an HTML tree.
    pub fn parse(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Capability required from the authenticated channel.
///
/// Cookie/session state and the login flow live behind this seam; the client
/// only ever fetches documents and replays forms through it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one authenticated GET for the given console path.
    async fn fetch_document(&self, path: &str) -> Result<Document>;

    /// Replay a form submission to the given console path.
    ///
    /// Returns the response status unconditionally; interpreting it is the
    /// caller's contract (boolean for delete/note, error for create/edit).
    async fn post_form(&self, path: &str, fields: &[(String, String)]) -> Result<StatusCode>;
}

/// Production transport over reqwest.
pub struct HttpTransport {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub(crate) fn new(base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            base_url,
            http_client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_document(&self, path: &str) -> Result<Document> {
        let url = self.url(path);
        debug!("[HTTP] Sending GET to {}", url);

        let start = Instant::now();
        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        debug!(
            "[HTTP] Response received: status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            warn!("[HTTP] Fetch failed: status={} path={}", status, path);
            return Err(ConsoleLinkError::remote(status.as_u16(), path));
        }

        let body = response.text().await?;
        Ok(Document::new(path, body))
    }

    async fn post_form(&self, path: &str, fields: &[(String, String)]) -> Result<StatusCode> {
        let url = self.url(path);
        debug!("[HTTP] Sending POST to {} ({} fields)", url, fields.len());

        let start = Instant::now();
        let response = self.http_client.post(&url).form(fields).send().await?;
        let status = response.status();
        debug!(
            "[HTTP] Response received: status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );

        Ok(status)
    }
}
