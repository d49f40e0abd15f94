//! Injectable HTTP capability.
//!
//! The bot performs exactly two network calls per run (one GET, one POST),
//! both behind this trait so tests can substitute canned responses instead
//! of live HTTP.

use std::time::Duration;

use ureq::Agent;

use crate::error::BotError;

/// A fully-read HTTP response: status code plus body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two operations the bot needs from an HTTP client.
pub trait Transport {
    fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, BotError>;

    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<HttpResponse, BotError>;
}

/// Production transport backed by a ureq agent.
///
/// Non-2xx statuses are returned as ordinary responses rather than errors,
/// so callers can surface the upstream status code and body verbatim.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self { agent }
    }

    fn read(response: ureq::http::Response<ureq::Body>) -> Result<HttpResponse, BotError> {
        let status = response.status().as_u16();
        let mut body_reader = response.into_body();
        let body = body_reader
            .read_to_string()
            .map_err(|e| BotError::network(format!("failed to read response body: {}", e)))?;
        Ok(HttpResponse { status, body })
    }
}

impl Transport for UreqTransport {
    fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, BotError> {
        let mut request = self.agent.get(url);
        for (name, value) in query {
            request = request.query(*name, *value);
        }
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request
            .call()
            .map_err(|e| BotError::network(format!("GET {} failed: {}", url, e)))?;
        Self::read(response)
    }

    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<HttpResponse, BotError> {
        let mut request = self.agent.post(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request
            .send_json(body)
            .map_err(|e| BotError::network(format!("POST {} failed: {}", url, e)))?;
        Self::read(response)
    }
}
