//! HTTP utilities for Secure Workload REST API calls

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde_json::Value;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

const USER_AGENT: &str = concat!("secureworkload-provider/", env!("CARGO_PKG_VERSION"));

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        // Back off to a char boundary so multibyte bodies cannot panic the
        // error path
        let cut = (0..=MAX_LOG_BODY_LENGTH)
            .rev()
            .find(|&i| body.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for Secure Workload API calls
///
/// Carries the API key/secret as default headers so every request is
/// authenticated without per-call plumbing.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given credentials
    pub fn new(api_key: &str, api_secret: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-API-Key",
            HeaderValue::from_str(api_key).map_err(|_| Error::InvalidCredentials)?,
        );
        let mut secret =
            HeaderValue::from_str(api_secret).map_err(|_| Error::InvalidCredentials)?;
        secret.set_sensitive(true);
        headers.insert("X-API-Secret", secret);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request against the API
    pub async fn get(&self, url: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        Self::into_json(response).await
    }

    /// Make a POST request with a JSON body against the API
    pub async fn post<B>(&self, url: &str, body: &B) -> Result<Value>
    where
        B: serde::Serialize + ?Sized,
    {
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        Self::into_json(response).await
    }

    /// Make a DELETE request against the API, with an optional JSON body
    /// (tag deletion addresses the binding in the body, not the path)
    pub async fn delete(&self, url: &str, body: Option<&Value>) -> Result<Value> {
        tracing::debug!("DELETE {}", url);

        let mut request = self.client.delete(url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::into_json(response).await
    }

    async fn into_json(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Security: only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(Error::Api { status, body });
        }

        // Deletes and some upserts answer with an empty body
        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(Error::Decode)
    }
}
