//! Submission pipeline
//!
//! Orchestrates the submit boundary: defensive re-validation, attachment
//! encoding, one write call, and the resulting status transition. Failures
//! always leave the form editable and resubmittable; no retries are made and
//! no idempotency key exists, so resubmitting after a failure can create a
//! duplicate record in the store.

use crate::api::{ApiError, ApplicationPayload, ApplyApi};
use crate::state::{encode, validate_step, ApplicationForm, EncodedResume};

/// Shown when the resume cannot be read at submit time
pub const FILE_PROCESSING_MESSAGE: &str = "Error processing resume file. Please try again.";

/// Shown when the endpoint is unreachable or gives no usable message
pub const SUBMIT_FALLBACK_MESSAGE: &str =
    "Failed to submit application. Please check your internet connection and try again.";

/// Drives a form through one submission attempt against the write endpoint
pub struct SubmissionPipeline<A: ApplyApi> {
    api: A,
}

impl<A: ApplyApi> SubmissionPipeline<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Submit the form. The outcome lands in the form's submission status;
    /// the caller only needs to redraw.
    pub async fn submit(&self, form: &mut ApplicationForm) {
        // Single-flight per form instance
        if form.is_submitting() || form.is_submitted() {
            return;
        }

        // Re-validate at the boundary in case an invalid state slipped past
        // the step gates
        let errors = validate_step(form.step(), form.fields());
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "submit blocked by validation");
            form.report_errors(errors);
            return;
        }

        form.start_submitting();

        let resume: Option<EncodedResume> = match form.attachment() {
            Some(file) => match encode(file).await {
                Ok(encoded) => Some(encoded),
                Err(err) => {
                    tracing::warn!(error = %err, "resume encoding failed");
                    form.mark_failed(FILE_PROCESSING_MESSAGE);
                    return;
                }
            },
            None => None,
        };

        let payload = ApplicationPayload::new(form.fields(), resume.as_ref());

        match self.api.submit_application(payload).await {
            Ok(()) => form.mark_submitted(),
            Err(ApiError::Server(message)) => {
                let message = if message.trim().is_empty() {
                    SUBMIT_FALLBACK_MESSAGE.to_string()
                } else {
                    message
                };
                form.mark_failed(message);
            }
            Err(err @ ApiError::Network(_)) => {
                tracing::warn!(error = %err, "write endpoint unreachable");
                form.mark_failed(SUBMIT_FALLBACK_MESSAGE);
            }
        }
    }
}
