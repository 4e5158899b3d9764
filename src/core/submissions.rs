use thiserror::Error;
use tracing::info;

use crate::core::filters::matches_submission;
use crate::models::{StatusNotice, Submission, SubmissionFilter, SubmissionStatus};

/// Errors from submission review actions, all recoverable
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    #[error("no submission with id {0}")]
    UnknownSubmission(String),
    #[error("submission {id} was already {status}")]
    AlreadyDecided { id: String, status: SubmissionStatus },
    #[error("a submission cannot be moved back to pending")]
    InvalidTarget,
}

/// In-memory queue of artist submissions backing the manager dashboard
///
/// Filtering mirrors the directory engine in a simplified single-struct
/// form; status changes go through [`SubmissionQueue::update_status`] and
/// are never durable (no persistence layer in this system).
#[derive(Debug, Clone)]
pub struct SubmissionQueue {
    submissions: Vec<Submission>,
}

impl SubmissionQueue {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self { submissions }
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Visible table rows for the current filter, input order kept
    pub fn filter(&self, filter: &SubmissionFilter) -> Vec<&Submission> {
        self.submissions
            .iter()
            .filter(|submission| matches_submission(submission, filter))
            .collect()
    }

    /// Count of submissions currently in the given status
    pub fn count_by_status(&self, status: SubmissionStatus) -> usize {
        self.submissions.iter().filter(|s| s.status == status).count()
    }

    /// Decide a pending submission
    ///
    /// Only `Pending -> Approved | Rejected` is a legal transition; the
    /// returned notice carries the toast copy for the caller. The change is
    /// applied to the in-memory record only.
    pub fn update_status(
        &mut self,
        id: &str,
        decision: SubmissionStatus,
    ) -> Result<StatusNotice, ReviewError> {
        if decision == SubmissionStatus::Pending {
            return Err(ReviewError::InvalidTarget);
        }

        let submission = self
            .submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ReviewError::UnknownSubmission(id.to_string()))?;

        if submission.status != SubmissionStatus::Pending {
            return Err(ReviewError::AlreadyDecided {
                id: id.to_string(),
                status: submission.status,
            });
        }

        submission.status = decision;
        info!(submission = %id, status = %decision, "submission status updated");

        Ok(StatusNotice {
            submission_id: id.to_string(),
            status: decision,
            message: format!("Artist submission has been {}.", decision),
        })
    }
}
