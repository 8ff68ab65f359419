//! Trait abstraction for the site backend to enable mocking in tests

use super::client::Endpoint;
use super::error::ApiError;
use crate::state::{GalleryItem, Service, Testimonial};
use async_trait::async_trait;
use serde_json::Value;

/// Trait for backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteApi: Send + Sync {
    /// POST a JSON body to a create endpoint, returning the created record
    async fn post_json(&self, endpoint: Endpoint, body: Value) -> Result<Value, ApiError>;

    /// List the services offered, in server order
    async fn list_services(&self) -> Result<Vec<Service>, ApiError>;

    /// List customer testimonials, in server order
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ApiError>;

    /// List gallery items, in server order
    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ApiError>;
}
