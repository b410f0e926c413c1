//! HTTP transport backed by a blocking `ureq` agent.

use std::time::Duration;

use serde_json::Value;
use ureq::Agent;

use crate::client::{ApiError, ApiResult, Transport};
use crate::models::config::ServerConfig;

/// Production [`Transport`]: one agent, one base URL, one bearer token.
///
/// The token is handed in at construction and attached to every request.
/// Token lifecycle (issuing, refresh) belongs to the session provider.
pub struct HttpTransport {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.api_base_url.clone(),
            config.api_token.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/{path}", self.base_url)
        } else {
            format!("{}/{path}?{query}", self.base_url)
        }
    }

    fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str, query: &str) -> ApiResult<Value> {
        let url = self.url(path, query);
        let mut request = self.agent.get(url.as_str());
        if let Some(auth) = self.bearer() {
            request = request.header("Authorization", auth);
        }
        let mut response = request.call()?;
        let body = response.body_mut().read_to_string()?;
        serde_json::from_str(&body).map_err(ApiError::decode)
    }

    fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        let url = self.url(path, "");
        let mut request = self.agent.post(url.as_str());
        if let Some(auth) = self.bearer() {
            request = request.header("Authorization", auth);
        }
        let mut response = request.send_json(body)?;
        let body = response.body_mut().read_to_string()?;
        serde_json::from_str(&body).map_err(ApiError::decode)
    }

    fn put(&self, path: &str, body: Value) -> ApiResult<Value> {
        let url = self.url(path, "");
        let mut request = self.agent.put(url.as_str());
        if let Some(auth) = self.bearer() {
            request = request.header("Authorization", auth);
        }
        let mut response = request.send_json(body)?;
        let body = response.body_mut().read_to_string()?;
        serde_json::from_str(&body).map_err(ApiError::decode)
    }

    fn delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path, "");
        let mut request = self.agent.delete(url.as_str());
        if let Some(auth) = self.bearer() {
            request = request.header("Authorization", auth);
        }
        request.call()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> HttpTransport {
        HttpTransport::new(base, None, Duration::from_secs(5))
    }

    #[test]
    fn url_joins_base_path_and_query() {
        let t = transport("http://localhost:5000/api");
        assert_eq!(
            t.url("Products", "PageIndex=1&PageSize=10"),
            "http://localhost:5000/api/Products?PageIndex=1&PageSize=10"
        );
        assert_eq!(t.url("Products/3", ""), "http://localhost:5000/api/Products/3");
    }

    #[test]
    fn trailing_slash_on_base_url_is_trimmed() {
        let t = transport("http://localhost:5000/api/");
        assert_eq!(t.url("Taxes", ""), "http://localhost:5000/api/Taxes");
    }

    #[test]
    fn bearer_header_reflects_the_token() {
        let t = HttpTransport::new("http://x", Some("s3cret".into()), Duration::from_secs(5));
        assert_eq!(t.bearer().as_deref(), Some("Bearer s3cret"));
        assert!(transport("http://x").bearer().is_none());
    }
}
