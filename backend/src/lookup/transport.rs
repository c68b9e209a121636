use crate::lookup::LookupError;
use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "es-PE,es;q=0.9,en;q=0.8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl LookupRequest {
    pub fn get(url: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self { method: Method::Get, url: url.into(), query, body: None }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self { method: Method::Post, url: url.into(), query: Vec::new(), body: Some(body) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request to the registry and hands back status and raw body.
/// Status interpretation is left to the client.
#[async_trait]
pub trait LookupTransport: Send + Sync {
    async fn send(&self, request: LookupRequest) -> Result<LookupResponse, LookupError>;
}

pub struct ReqwestTransport {
    client: Client,
    token: Option<String>,
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ReqwestTransport {
    pub fn new(token: Option<String>, timeout: Duration) -> Result<Self, LookupError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("*/*"));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|error| LookupError::Transport(format!("cliente HTTP inválido: {error}")))?;

        Ok(Self { client, token })
    }
}

#[async_trait]
impl LookupTransport for ReqwestTransport {
    async fn send(&self, request: LookupRequest) -> Result<LookupResponse, LookupError> {
        let token = self.token.as_deref().ok_or(LookupError::MissingToken)?;

        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .bearer_auth(token)
            .send()
            .await
            .map_err(|error| LookupError::Transport(error.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|error| LookupError::Transport(error.to_string()))?;

        Ok(LookupResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_the_token() {
        let transport =
            ReqwestTransport::new(Some("super-secret".into()), Duration::from_secs(1)).unwrap();
        let debug = format!("{transport:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[actix_web::test]
    async fn missing_token_fails_before_any_request() {
        let transport = ReqwestTransport::new(None, Duration::from_secs(1)).unwrap();
        let error = transport
            .send(LookupRequest::get("http://127.0.0.1:9/never", Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(error, LookupError::MissingToken));
    }
}
