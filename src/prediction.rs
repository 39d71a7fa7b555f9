//! Prediction Panel
//!
//! Request lifecycle and result display state of the prediction view:
//! form, busy flag, last result, modal and explanation toggles, and the
//! failure banner.

use crate::dto::PredictRequest;
use crate::error::{ClientError, PREDICTION_FAILED_MESSAGE};
use crate::form::{FieldName, PredictionForm};
use crate::report::PredictionResult;

/// State behind the prediction view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionPanel {
    pub form: PredictionForm,
    busy: bool,
    result: Option<PredictionResult>,
    modal_open: bool,
    explanation_shown: bool,
    error: Option<String>,
}

impl PredictionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a keystroke to the form
    pub fn edit(&mut self, field: FieldName, raw: impl Into<String>) {
        self.form.set(field, raw);
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Submit control state: valid form and no request in flight
    pub fn can_submit(&self) -> bool {
        !self.busy && self.form.is_valid()
    }

    /// Start a submission.
    ///
    /// Returns the request body to send, or `None` if the form is invalid
    /// or a request is already outstanding.
    pub fn begin_submit(&mut self) -> Option<PredictRequest> {
        if self.busy {
            return None;
        }
        let request = self.form.to_request()?;

        self.busy = true;
        self.result = None;
        self.error = None;
        Some(request)
    }

    /// Record the outcome of the outstanding request
    pub fn finish(&mut self, outcome: Result<PredictionResult, ClientError>) {
        self.busy = false;

        match outcome {
            Ok(result) => {
                tracing::debug!(prediction = %result.prediction, "Prediction received");
                self.result = Some(result);
                self.modal_open = true;
                self.explanation_shown = false;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error making prediction");
                self.error = Some(PREDICTION_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    /// Result to render in the modal, only while the modal is open
    pub fn visible_result(&self) -> Option<&PredictionResult> {
        self.result.as_ref().filter(|_| self.modal_open)
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_explanation_shown(&self) -> bool {
        self.explanation_shown
    }

    /// Expand the explanation section; it stays expanded until dismissal
    pub fn reveal_explanation(&mut self) {
        if self.modal_open {
            self.explanation_shown = true;
        }
    }

    /// Dismiss the results modal
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.explanation_shown = false;
    }

    /// Failure banner text, if the last request failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
