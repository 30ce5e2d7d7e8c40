//! Authenticated request execution against a groupald endpoint.

use crate::error::GroupaldError;
use serde_json::Value;
use std::time::Duration;

/// One query or form field. Parameters are kept as ordered pairs, never as
/// a map: the API allows repeated keys and the service sees them in the
/// order the caller gave them.
pub type Param<'a> = (&'a str, &'a str);

/// Executes one authenticated HTTP exchange per call and parses the answer.
///
/// Composes `base_url + path (+ query)`, attaches the bearer credential,
/// performs a blocking GET or form-encoded POST, and parses the response
/// body into a generic JSON document.
pub struct RequestExecutor {
    base_url: String,
    bearer: String,
    http: reqwest::blocking::Client,
}

impl RequestExecutor {
    /// Create an executor. `timeout: None` leaves the transport's default
    /// in place (no request timeout).
    pub fn new(base_url: &str, bearer: &str, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer: bearer.to_string(),
            http: builder.build().unwrap_or_default(),
        }
    }

    /// `GET {base_url}{path}?{query}` → parsed JSON document.
    pub fn get(&self, path: &str, query: &[Param]) -> Result<Value, GroupaldError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET groupald");
        let response = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&self.bearer)
            .send()
            .map_err(transport_error)?;
        self.parse_response(url, response)
    }

    /// `POST {base_url}{path}?{query}` with `body` form-encoded
    /// (`application/x-www-form-urlencoded`, repeated keys allowed) →
    /// parsed JSON document.
    pub fn post(&self, path: &str, query: &[Param], body: &[Param]) -> Result<Value, GroupaldError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST groupald");
        let response = self
            .http
            .post(&url)
            .query(query)
            .bearer_auth(&self.bearer)
            .form(body)
            .send()
            .map_err(transport_error)?;
        self.parse_response(url, response)
    }

    fn parse_response(
        &self,
        url: String,
        response: reqwest::blocking::Response,
    ) -> Result<Value, GroupaldError> {
        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "groupald answered");
        if !status.is_success() {
            return Err(GroupaldError::Status {
                status: status.as_u16(),
                url,
            });
        }
        let body = response
            .text()
            .map_err(|e| GroupaldError::RequestFailed(format!("reading response body: {e}")))?;
        serde_json::from_str(&body)
            .map_err(|e| GroupaldError::InvalidPayload(format!("{e} in {body:?}")))
    }
}

/// Classify a transport-level failure the way the service's callers care
/// about it: unreachable endpoint vs any other request failure.
fn transport_error(e: reqwest::Error) -> GroupaldError {
    if e.is_timeout() {
        GroupaldError::Unreachable(format!("request timed out: {e}"))
    } else if e.is_connect() {
        GroupaldError::Unreachable(format!("connection failed: {e}"))
    } else {
        GroupaldError::RequestFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let executor = RequestExecutor::new("https://groupald.example.org/", "token", None);
        assert_eq!(executor.base_url, "https://groupald.example.org");
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let executor = RequestExecutor::new("https://apps.example.org/groupald", "token", None);
        assert_eq!(executor.base_url, "https://apps.example.org/groupald");
    }

    #[test]
    fn test_executor_with_timeout_creation() {
        let executor = RequestExecutor::new(
            "https://groupald.example.org",
            "token",
            Some(Duration::from_secs(5)),
        );
        drop(executor);
    }
}
