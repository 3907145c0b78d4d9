//! HTTP submission endpoint client
//!
//! Posts the lead payload as JSON and triages the outcome into the shared
//! failure taxonomy. A 2xx status with a parseable receipt is the only
//! acceptance signal; everything else is a failure variant.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use shared::{LeadAccepted, LeadSubmission, SubmitFailure};

use crate::error::{ControllerError, ControllerResult};
use crate::traits::SubmissionEndpoint;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Real submission endpoint client
pub struct RealSubmissionEndpoint {
    client: reqwest::Client,
    endpoint_url: String,
}

impl RealSubmissionEndpoint {
    /// Create a client with the default request timeout
    pub fn new(endpoint_url: impl Into<String>) -> ControllerResult<Self> {
        Self::with_timeout(endpoint_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint_url: impl Into<String>,
        timeout: Duration,
    ) -> ControllerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ControllerError::EndpointError {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.into(),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

#[async_trait]
impl SubmissionEndpoint for RealSubmissionEndpoint {
    async fn submit(&self, lead: LeadSubmission) -> Result<LeadAccepted, SubmitFailure> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .header("Content-Type", "application/json")
            .json(&lead)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmitFailure::Timeout
                } else {
                    SubmitFailure::NetworkError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(SubmitFailure::Rejected {
                status: response.status().as_u16(),
            });
        }

        let receipt: LeadAccepted = response
            .json()
            .await
            .map_err(|e| SubmitFailure::MalformedResponse(e.to_string()))?;

        debug!(lead_id = %receipt.lead_id, "endpoint accepted lead");
        Ok(receipt)
    }
}
