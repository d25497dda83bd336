use crate::error::{ServiceError, ValidationError};
use crate::filters::Category;
use crate::score::{BOULDER_COUNT, BoulderScore, NewScore, SubmitReceipt, total_of};

/// Editable scorecard fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionForm {
    pub player_name: String,
    pub category: Category,
    pub scores: [BoulderScore; BOULDER_COUNT],
}

impl SubmissionForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Out-of-range indexes are ignored.
    pub fn set_score(&mut self, index: usize, score: BoulderScore) {
        if let Some(slot) = self.scores.get_mut(index) {
            *slot = score;
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        total_of(&self.scores)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyPlayerName`] for a blank name.
    pub fn to_submission(&self) -> Result<NewScore, ValidationError> {
        NewScore::new(&self.player_name, self.category, self.scores)
    }
}

/// Submission view state: the form plus in-flight and feedback flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionState {
    pub form: SubmissionForm,
    submitting: bool,
    error: Option<String>,
    confirmation: Option<String>,
}

impl SubmissionState {
    pub const CONFIRMATION: &'static str = "Scores submitted successfully!";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    /// Validate the form and mark the submission in flight.
    ///
    /// Returns `None` when validation fails (the error is recorded) or a
    /// submission is already running.
    pub fn begin_submit(&mut self) -> Option<NewScore> {
        if self.submitting {
            return None;
        }
        self.confirmation = None;
        match self.form.to_submission() {
            Ok(score) => {
                self.submitting = true;
                self.error = None;
                Some(score)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// On success reset every field; on failure keep the form so the user can
    /// retry, and show the service message as-is.
    pub fn finish_submit(&mut self, result: Result<SubmitReceipt, ServiceError>) {
        self.submitting = false;
        match result {
            Ok(receipt) => {
                if let Some(record) = receipt.record.as_ref() {
                    log::debug!("score {} stored for {}", record.id, record.player_name);
                }
                self.form = SubmissionForm::default();
                self.error = None;
                self.confirmation = Some(Self::CONFIRMATION.to_string());
            }
            Err(err) => {
                log::error!("score submission failed: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Explicit reset; no request is made.
    pub fn reset(&mut self) {
        self.form = SubmissionForm::default();
        self.error = None;
        self.confirmation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmissionState {
        let mut state = SubmissionState::new();
        state.form.player_name = "Ana".into();
        state.form.category = Category::B;
        for (idx, pts) in [5, 10, 15, 20].into_iter().enumerate() {
            state.form.set_score(idx, BoulderScore::new(pts).unwrap());
        }
        state
    }

    #[test]
    fn total_is_sum_of_boulders() {
        let state = filled();
        assert_eq!(state.form.total(), 50);
        let score = state.form.to_submission().unwrap();
        assert_eq!(score.total_score, 50);
    }

    #[test]
    fn success_resets_to_defaults() {
        let mut state = filled();
        assert!(state.begin_submit().is_some());
        assert!(state.is_submitting());
        state.finish_submit(Ok(SubmitReceipt::default()));
        assert_eq!(state.form.scores, [BoulderScore::ZERO; BOULDER_COUNT]);
        assert_eq!(state.form.category, Category::E);
        assert!(state.form.player_name.is_empty());
        assert_eq!(state.confirmation(), Some(SubmissionState::CONFIRMATION));
    }

    #[test]
    fn failure_keeps_form_and_service_message() {
        let mut state = filled();
        let before = state.form.clone();
        state.begin_submit();
        state.finish_submit(Err(ServiceError::from_status(
            400,
            r#"{"message":"Invalid category"}"#,
        )));
        assert_eq!(state.form, before);
        assert_eq!(state.error(), Some("Invalid category"));
        assert!(!state.is_submitting());
    }

    #[test]
    fn empty_name_is_rejected_before_sending() {
        let mut state = SubmissionState::new();
        assert!(state.begin_submit().is_none());
        assert_eq!(state.error(), Some("Player name is required"));
        assert!(!state.is_submitting());
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut state = filled();
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn reset_restores_defaults_without_request() {
        let mut state = filled();
        state.reset();
        assert_eq!(state.form, SubmissionForm::default());
        assert!(state.error().is_none());
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut form = SubmissionForm::new();
        form.set_score(BOULDER_COUNT, BoulderScore::OPTIONS[5]);
        assert_eq!(form.total(), 0);
    }
}
