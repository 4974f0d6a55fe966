//! HTTP utilities for anchnet API calls

use super::error::Result;
use super::signature::SIGNATURE_HEADER;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
pub(crate) fn sanitize_for_log(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let truncated = if text.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &text[..end], body.len())
    } else {
        text.into_owned()
    };

    truncated.replace(|c: char| c.is_control(), "")
}

/// HTTP client wrapper for anchnet API calls
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct AnchnetHttpClient {
    client: Client,
}

impl AnchnetHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("anchnet-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// POST a signed JSON body and return the raw response body
    ///
    /// All anchnet requests use POST. The HTTP status is not interpreted;
    /// anchnet reports failures in the body's `code` field.
    pub async fn post(&self, url: &str, body: Vec<u8>, signature: &str) -> Result<Vec<u8>> {
        tracing::debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            tracing::debug!("HTTP {} - {}", status, sanitize_for_log(&bytes));
        } else {
            tracing::trace!("HTTP {} - {}", status, sanitize_for_log(&bytes));
        }

        Ok(bytes.to_vec())
    }
}
