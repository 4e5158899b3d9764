use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::models::OnboardingForm;

/// Errors a submission backend may report
///
/// The mock gateway never fails; the variants reserve the failure path a
/// real backend would populate, in the same per-field shape the wizard
/// already surfaces.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission service unavailable")]
    Unavailable,
}

/// Acknowledgement returned by a submission backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    #[serde(rename = "submissionId")]
    pub submission_id: Uuid,
    #[serde(rename = "receivedAt")]
    pub received_at: DateTime<Utc>,
    pub message: String,
}

/// Port through which the wizard hands off a finished profile
///
/// The surrounding application owns the real implementation; the wizard
/// only sees this single injected call.
pub trait SubmissionGateway {
    fn submit(
        &self,
        form: OnboardingForm,
    ) -> impl Future<Output = Result<SubmissionReceipt, SubmitError>> + Send;
}

/// Gateway stand-in that sleeps for a configurable delay and always accepts
///
/// The delay reproduces the simulated network latency of the original
/// intake flow; [`MockSubmissionGateway::instant`] skips it for tests.
#[derive(Debug, Clone)]
pub struct MockSubmissionGateway {
    delay: Duration,
}

impl MockSubmissionGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for MockSubmissionGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

impl SubmissionGateway for MockSubmissionGateway {
    fn submit(
        &self,
        form: OnboardingForm,
    ) -> impl Future<Output = Result<SubmissionReceipt, SubmitError>> + Send {
        let delay = self.delay;
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let receipt = SubmissionReceipt {
                submission_id: Uuid::new_v4(),
                received_at: Utc::now(),
                message: "Your artist profile has been submitted for review. \
                          We'll contact you within 2-3 business days."
                    .to_string(),
            };

            info!(
                artist = %form.name,
                submission = %receipt.submission_id,
                "onboarding profile received"
            );

            Ok(receipt)
        }
    }
}
