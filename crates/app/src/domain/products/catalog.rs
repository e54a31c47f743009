//! Catalog transport.
//!
//! Requests and responses are plain data so the products service can be
//! exercised without a network. [`HttpCatalogTransport`] is the only piece
//! that talks HTTP.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Method, Response, header::CONTENT_TYPE};
use tracing::debug;

use crate::domain::products::errors::CatalogError;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Configuration for reaching the upstream catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog base address, e.g. `"https://fakestoreapi.com"`.
    pub base_url: String,

    /// Client-level timeout applied to every call.
    pub timeout: Duration,
}

/// HTTP verbs the catalog is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl From<CatalogMethod> for Method {
    fn from(method: CatalogMethod) -> Self {
        match method {
            CatalogMethod::Get => Method::GET,
            CatalogMethod::Post => Method::POST,
            CatalogMethod::Put => Method::PUT,
            CatalogMethod::Delete => Method::DELETE,
        }
    }
}

/// A catalog call described as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// HTTP verb.
    pub method: CatalogMethod,

    /// Path relative to the base URL, starting with `/`.
    pub path: String,

    /// JSON payload, sent with a JSON content type when present.
    pub body: Option<Vec<u8>>,

    /// Maximum number of body bytes read back; the rest is discarded.
    pub read_limit: usize,
}

/// A catalog answer described as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogResponse {
    /// HTTP status code.
    pub status: u16,

    /// Body bytes, truncated at the request's read limit.
    pub body: Vec<u8>,
}

/// Sends catalog calls; swapped for a mock in tests.
#[automock]
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Executes one catalog call. No retries.
    async fn send(&self, request: CatalogRequest) -> Result<CatalogResponse, CatalogError>;
}

/// `reqwest`-backed catalog transport.
#[derive(Debug, Clone)]
pub struct HttpCatalogTransport {
    base_url: String,
    http: Client,
}

impl HttpCatalogTransport {
    /// Create a transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl CatalogTransport for HttpCatalogTransport {
    async fn send(&self, request: CatalogRequest) -> Result<CatalogResponse, CatalogError> {
        let mut builder = self
            .http
            .request(request.method.into(), self.url(&request.path));

        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
        }

        let mut response = builder.send().await?;
        let status = response.status().as_u16();
        let body = read_capped(&mut response, request.read_limit).await?;

        debug!(
            method = ?request.method,
            path = %request.path,
            status,
            body_len = body.len(),
            "catalog responded"
        );

        Ok(CatalogResponse { status, body })
    }
}

async fn read_capped(response: &mut Response, limit: usize) -> Result<Vec<u8>, reqwest::Error> {
    let mut body = Vec::new();

    while body.len() < limit {
        let Some(chunk) = response.chunk().await? else {
            break;
        };

        let take = (limit - body.len()).min(chunk.len());

        body.extend_from_slice(chunk.get(..take).unwrap_or_default());
    }

    Ok(body)
}
