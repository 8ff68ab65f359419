//! Submission client: one POST per submit, outcome folded into a tagged result

use super::client::Endpoint;
use super::traits::SiteApi;
use serde_json::Value;
use uuid::Uuid;

/// Immutable snapshot of a form, ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    endpoint: Endpoint,
    body: Value,
}

impl SubmissionRequest {
    pub fn new(endpoint: Endpoint, body: Value) -> Self {
        Self { endpoint, body }
    }

    #[cfg(test)]
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    #[cfg(test)]
    pub fn body(&self) -> &Value {
        &self.body
    }
}

/// Outcome of a create-resource call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    /// Operator-facing reason; never shown to the end user
    Failure(String),
}

impl SubmissionResult {
    #[cfg(test)]
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success)
    }
}

/// Send `request` and report how it went.
///
/// Makes exactly one attempt. Every error is captured, logged with a
/// per-attempt id, and returned as [`SubmissionResult::Failure`].
pub async fn submit(api: &dyn SiteApi, request: SubmissionRequest) -> SubmissionResult {
    let attempt = Uuid::new_v4();
    let path = request.endpoint.path();
    tracing::debug!(%attempt, path, "submitting form");

    match api.post_json(request.endpoint, request.body).await {
        Ok(created) => {
            let record_id = created.get("id").and_then(Value::as_str).unwrap_or("-");
            tracing::info!(%attempt, path, record_id, "submission accepted");
            SubmissionResult::Success
        }
        Err(err) => {
            tracing::warn!(%attempt, path, error = %err, "submission failed");
            SubmissionResult::Failure(err.to_string())
        }
    }
}
