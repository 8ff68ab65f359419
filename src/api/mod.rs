//! Site backend module for REST communication

mod client;
mod error;
mod payloads;
mod submission;
mod traits;

pub use client::{ApiClient, Endpoint};
pub use error::ApiError;
pub use payloads::{BookingRequest, ContactMessage, QuoteRequest};
pub use submission::{submit, SubmissionRequest, SubmissionResult};
pub use traits::SiteApi;

#[cfg(test)]
pub use traits::MockSiteApi;
