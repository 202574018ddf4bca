//! Wikipedia API client
//!
//! Thin wrapper over the MediaWiki action API: one call resolves a
//! random main-namespace title, another fetches that title's content
//! as an intro extract or fully rendered HTML. Both calls are
//! read-only and idempotent.
//!
//! Response decoding is factored into pure `parse_*` functions over
//! the body string so it can be tested against fixtures without a
//! network.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ClientError, ConfigError, Result};
use crate::types::ContentMode;

/// Page id the API reports for a title that does not exist, after
/// redirect resolution.
const MISSING_PAGE_ID: &str = "-1";

pub struct WikiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl WikiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(ConfigError::InvalidBaseUrl)?;

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Resolve one random article title in the main content namespace.
    ///
    /// # Errors
    ///
    /// `ClientError::Transport` when the call fails or returns a
    /// non-success status; `ClientError::NoTitle` when the response
    /// parses but contains no title.
    pub async fn random_title(&self) -> std::result::Result<String, ClientError> {
        let body = self
            .get(&[
                ("action", "query"),
                ("list", "random"),
                ("rnnamespace", "0"),
                ("rnlimit", "1"),
                ("format", "json"),
                ("origin", "*"),
            ])
            .await?;

        parse_random_title(&body)
    }

    /// Fetch the content for an exact title, following redirects.
    ///
    /// An empty string is a valid result, distinct from failure: the
    /// page exists but has no summary text.
    ///
    /// # Errors
    ///
    /// `ClientError::Api` when the remote reports an error object;
    /// `ClientError::NotFound` when the page is missing;
    /// `ClientError::Transport` on network failure.
    pub async fn fetch_content(
        &self,
        title: &str,
        mode: ContentMode,
    ) -> std::result::Result<String, ClientError> {
        match mode {
            ContentMode::Full => {
                let body = self
                    .get(&[
                        ("action", "parse"),
                        ("page", title),
                        ("prop", "text"),
                        ("redirects", "1"),
                        ("formatversion", "2"),
                        ("format", "json"),
                        ("origin", "*"),
                    ])
                    .await?;
                parse_rendered_text(&body, title)
            }
            ContentMode::Summary => {
                let body = self
                    .get(&[
                        ("action", "query"),
                        ("prop", "extracts"),
                        ("exintro", "1"),
                        ("explaintext", "1"),
                        ("redirects", "1"),
                        ("titles", title),
                        ("format", "json"),
                        ("origin", "*"),
                    ])
                    .await?;
                parse_extract(&body, title)
            }
        }
    }

    // Query values are percent-encoded by reqwest's query
    // serialization, so exact titles round-trip unmodified.
    async fn get(&self, params: &[(&str, &str)]) -> std::result::Result<String, ClientError> {
        tracing::debug!(url = %self.base_url, ?params, "wikipedia api request");

        let response = self
            .http
            .get(self.base_url.clone())
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Transport(format!(
                "unexpected status {status}"
            )));
        }

        Ok(response.text().await?)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    info: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RandomResponse {
    query: Option<RandomQuery>,
}

#[derive(Debug, Deserialize)]
struct RandomQuery {
    random: Option<Vec<RandomPage>>,
}

#[derive(Debug, Deserialize)]
struct RandomPage {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParseBody>,
}

#[derive(Debug, Deserialize)]
struct ParseBody {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    pages: Option<HashMap<String, ExtractPage>>,
}

#[derive(Debug, Default, Deserialize)]
struct ExtractPage {
    extract: Option<String>,
    missing: Option<serde_json::Value>,
}

/// Reject bodies carrying the `{"error": {"info": ...}}` envelope.
fn check_error_envelope(body: &str, title: &str) -> std::result::Result<(), ClientError> {
    let envelope: ErrorEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        // Not even JSON; let the caller's typed parse report it.
        Err(_) => return Ok(()),
    };

    if let Some(error) = envelope.error {
        if error.code.as_deref() == Some("missingtitle") {
            return Err(ClientError::NotFound(title.to_string()));
        }
        let info = error
            .info
            .or(error.code)
            .unwrap_or_else(|| "unknown API error".to_string());
        return Err(ClientError::Api(info));
    }

    Ok(())
}

/// Extract `query.random[0].title` from a random-list response.
pub fn parse_random_title(body: &str) -> std::result::Result<String, ClientError> {
    check_error_envelope(body, "")?;

    let parsed: RandomResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    parsed
        .query
        .and_then(|q| q.random)
        .and_then(|mut pages| {
            if pages.is_empty() {
                None
            } else {
                pages.remove(0).title
            }
        })
        .filter(|title| !title.is_empty())
        .ok_or(ClientError::NoTitle)
}

/// Extract `parse.text` (formatversion 2) from a parse response.
pub fn parse_rendered_text(body: &str, title: &str) -> std::result::Result<String, ClientError> {
    check_error_envelope(body, title)?;

    let parsed: ParseResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    parsed
        .parse
        .and_then(|p| p.text)
        .ok_or_else(|| ClientError::Decode("parse response without text".to_string()))
}

/// Extract `query.pages.<id>.extract` from an extracts response.
///
/// Pages are keyed by page-id string; id `"-1"` or an explicit
/// `missing` marker signals not-found after redirect resolution. An
/// absent extract on an existing page is an empty summary, not an
/// error.
pub fn parse_extract(body: &str, title: &str) -> std::result::Result<String, ClientError> {
    check_error_envelope(body, title)?;

    let parsed: ExtractResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    let pages = parsed
        .query
        .and_then(|q| q.pages)
        .ok_or_else(|| ClientError::Decode("extract response without pages".to_string()))?;

    let (id, page) = pages
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::Decode("extract response with empty pages".to_string()))?;

    if id == MISSING_PAGE_ID || page.missing.is_some() {
        return Err(ClientError::NotFound(title.to_string()));
    }

    Ok(page.extract.unwrap_or_default())
}
