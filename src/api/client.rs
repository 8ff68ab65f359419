//! REST client for communicating with the TimberGuard backend
//!
//! All routes live under `/api` on the configured base URL. Requests and
//! responses are JSON; no authentication headers are sent.

use super::error::ApiError;
use super::traits::SiteApi;
use crate::state::{GalleryItem, Service, Testimonial};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Backend routes the client knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Quotes,
    Bookings,
    Contact,
    Services,
    Testimonials,
    Gallery,
}

impl Endpoint {
    /// Path relative to the backend base URL
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Quotes => "/api/quotes",
            Endpoint::Bookings => "/api/bookings",
            Endpoint::Contact => "/api/contact",
            Endpoint::Services => "/api/services",
            Endpoint::Testimonials => "/api/testimonials",
            Endpoint::Gallery => "/api/gallery",
        }
    }
}

/// Client for the site backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Shared connection pool
    http: reqwest::Client,
    /// Base URL without a trailing slash
    base_url: String,
}

impl ApiClient {
    /// Create a new client for `base_url`.
    ///
    /// `timeout` of `None` keeps reqwest's default (no overall timeout).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|source| ApiError::Transport { path: "/", source })?;

        Ok(Self { http, base_url })
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// GET a JSON array and decode it, preserving server order
    async fn get_list<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<Vec<T>, ApiError> {
        let path = endpoint.path();
        let response = self
            .http
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|source| ApiError::Transport { path, source })?;

        let body = read_success_body(path, response).await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            path,
            reason: e.to_string(),
        })
    }
}

/// Reject non-2xx responses and return the raw body of the rest
async fn read_success_body(
    path: &'static str,
    response: reqwest::Response,
) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            path,
            status: status.as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| ApiError::Transport { path, source })?;
    Ok(bytes.to_vec())
}

#[async_trait]
impl SiteApi for ApiClient {
    async fn post_json(&self, endpoint: Endpoint, body: Value) -> Result<Value, ApiError> {
        let path = endpoint.path();
        tracing::debug!(path, "POST");

        let response = self
            .http
            .post(self.url(endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { path, source })?;

        let bytes = read_success_body(path, response).await?;
        // 204 and friends carry no body
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            path,
            reason: e.to_string(),
        })
    }

    async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_list(Endpoint::Services).await
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        self.get_list(Endpoint::Testimonials).await
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ApiError> {
        self.get_list(Endpoint::Gallery).await
    }
}
