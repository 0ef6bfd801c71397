//! The application form state machine
//!
//! Three sequential steps, a resume attachment slot, wholesale validation
//! errors, and a submission status. Every transition is total: calls that do
//! not apply in the current state are no-ops rather than panics.

use super::attachment::{ResumeFile, SelectError, MAX_RESUME_BYTES, RESUME_MIME};
use super::field::{FieldId, FieldValues};
use super::validate::validate_step;

/// One of the three pages of the application form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Basics,
    Motivation,
    Commitment,
}

impl Step {
    pub const COUNT: usize = 3;

    /// 1-based step number shown in the progress indicator
    pub fn number(self) -> usize {
        match self {
            Step::Basics => 1,
            Step::Motivation => 2,
            Step::Commitment => 3,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Basics => Some(Step::Motivation),
            Step::Motivation => Some(Step::Commitment),
            Step::Commitment => None,
        }
    }

    pub fn prev(self) -> Option<Step> {
        match self {
            Step::Basics => None,
            Step::Motivation => Some(Step::Basics),
            Step::Commitment => Some(Step::Motivation),
        }
    }

    /// Fields shown on this step, in display and validation order
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            Step::Basics => &[
                FieldId::FullName,
                FieldId::Email,
                FieldId::Phone,
                FieldId::Linkedin,
                FieldId::CurrentCourse,
                FieldId::CurrentYear,
            ],
            Step::Motivation => &[
                FieldId::StudyAbroadPlans,
                FieldId::Excitement,
                FieldId::PersonalQualities,
                FieldId::CollegeActivities,
                FieldId::ExpectedGains,
                FieldId::PromotionStrategy,
            ],
            Step::Commitment => &[FieldId::Availability],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Basics => "Basic & Academic Details",
            Step::Motivation => "Study Abroad & Motivation",
            Step::Commitment => "Availability & Final Details",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Step::Basics => "Let's start with your basic information and current studies",
            Step::Motivation => "Tell us about your aspirations and what drives you",
            Step::Commitment => "Complete your application with commitment details",
        }
    }
}

/// Where the submission stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Terminal state
    Submitted,
    /// Editable again; the message is shown to the user
    Failed(String),
}

/// In-memory state of one in-progress application
///
/// Created fresh per form session and discarded once submitted; nothing is
/// persisted across runs.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    step: Step,
    fields: FieldValues,
    attachment: Option<ResumeFile>,
    validation_errors: Vec<String>,
    status: SubmissionStatus,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    pub fn attachment(&self) -> Option<&ResumeFile> {
        self.attachment.as_ref()
    }

    pub fn validation_errors(&self) -> &[String] {
        &self.validation_errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitted)
    }

    /// Replace a field's value. Clears validation errors and any prior
    /// submit failure; validation itself is deferred to `next` and submit.
    pub fn edit(&mut self, id: FieldId, value: String) {
        self.fields.set(id, value);
        self.clear_feedback();
    }

    /// Append a character to a field (interactive typing)
    pub fn input_char(&mut self, id: FieldId, c: char) {
        self.fields.get_mut(id).push(c);
        self.clear_feedback();
    }

    /// Remove the last character of a field
    pub fn backspace(&mut self, id: FieldId) {
        self.fields.get_mut(id).pop();
        self.clear_feedback();
    }

    /// Cycle a choice field to its next option (first option if unset or
    /// free text). No-op for fields without fixed options.
    pub fn cycle_choice(&mut self, id: FieldId) {
        let Some(options) = id.options() else {
            return;
        };
        let current = self.fields.get(id);
        let next = match options.iter().position(|o| o.value == current) {
            Some(i) => options[(i + 1) % options.len()].value,
            None => options[0].value,
        };
        self.fields.set(id, next.to_string());
        self.clear_feedback();
    }

    /// Validate the current step and advance on success. Returns `true` when
    /// the step was valid; on failure the step is unchanged and the errors
    /// are left for the UI to surface.
    pub fn next(&mut self) -> bool {
        let errors = validate_step(self.step, &self.fields);
        if !errors.is_empty() {
            self.validation_errors = errors;
            return false;
        }
        self.validation_errors.clear();
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        true
    }

    /// Go back one step, clearing errors and any submit failure. No-op on
    /// the first step.
    pub fn prev(&mut self) {
        self.clear_feedback();
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Accept or reject a picked resume. Rejection leaves any existing
    /// attachment untouched.
    pub fn select_file(&mut self, file: ResumeFile) -> Result<(), SelectError> {
        if file.mime_type != RESUME_MIME {
            return Err(SelectError::NotPdf);
        }
        if file.size > MAX_RESUME_BYTES {
            return Err(SelectError::TooLarge);
        }
        self.attachment = Some(file);
        Ok(())
    }

    pub fn remove_file(&mut self) {
        self.attachment = None;
    }

    /// Submit-boundary re-validation failed; stay editable and show the list
    pub fn report_errors(&mut self, errors: Vec<String>) {
        self.validation_errors = errors;
    }

    pub fn start_submitting(&mut self) {
        self.validation_errors.clear();
        self.status = SubmissionStatus::Submitting;
    }

    pub fn mark_submitted(&mut self) {
        self.status = SubmissionStatus::Submitted;
    }

    /// Return to an editable, resubmittable state with a user-visible message
    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.status = SubmissionStatus::Failed(message.into());
    }

    fn clear_feedback(&mut self) {
        self.validation_errors.clear();
        if matches!(self.status, SubmissionStatus::Failed(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn pdf_file(size: u64) -> ResumeFile {
        ResumeFile {
            path: PathBuf::from("/tmp/resume.pdf"),
            file_name: "resume.pdf".to_string(),
            mime_type: RESUME_MIME.to_string(),
            size,
        }
    }

    fn fill_step_one(form: &mut ApplicationForm) {
        form.edit(FieldId::FullName, "Asha Rao".to_string());
        form.edit(FieldId::Email, "asha@x.com".to_string());
        form.edit(FieldId::Phone, "+91 9876543210".to_string());
        form.edit(FieldId::CurrentCourse, "B.Tech CSE".to_string());
        form.edit(FieldId::CurrentYear, "final".to_string());
    }

    #[test]
    fn test_fresh_form_defaults() {
        let form = ApplicationForm::new();
        assert_eq!(form.step(), Step::Basics);
        assert!(form.attachment().is_none());
        assert!(form.validation_errors().is_empty());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_next_advances_on_valid_step() {
        let mut form = ApplicationForm::new();
        fill_step_one(&mut form);
        assert!(form.next());
        assert_eq!(form.step(), Step::Motivation);
        assert!(form.validation_errors().is_empty());
    }

    #[test]
    fn test_next_stays_and_surfaces_errors_on_invalid_step() {
        let mut form = ApplicationForm::new();
        fill_step_one(&mut form);
        form.edit(FieldId::Email, String::new());
        assert!(!form.next());
        assert_eq!(form.step(), Step::Basics);
        assert!(form
            .validation_errors()
            .iter()
            .any(|e| e.contains("Email")));
    }

    #[test]
    fn test_next_is_noop_past_last_step() {
        let mut form = ApplicationForm::new();
        form.edit(FieldId::Availability, "yes".to_string());
        // Force onto the last step
        fill_step_one(&mut form);
        assert!(form.next());
        form.edit(FieldId::StudyAbroadPlans, "yes-masters".to_string());
        form.edit(FieldId::Excitement, "9".to_string());
        form.edit(FieldId::PersonalQualities, "grit".to_string());
        form.edit(FieldId::CollegeActivities, "club lead".to_string());
        form.edit(FieldId::ExpectedGains, "network".to_string());
        form.edit(FieldId::PromotionStrategy, "events".to_string());
        assert!(form.next());
        assert_eq!(form.step(), Step::Commitment);
        assert!(form.next());
        assert_eq!(form.step(), Step::Commitment);
    }

    #[test]
    fn test_prev_never_goes_below_first_step() {
        let mut form = ApplicationForm::new();
        form.prev();
        assert_eq!(form.step(), Step::Basics);
    }

    #[test]
    fn test_prev_clears_errors_and_failure() {
        let mut form = ApplicationForm::new();
        fill_step_one(&mut form);
        assert!(form.next());
        form.report_errors(vec!["some error".to_string()]);
        form.mark_failed("db down");
        form.prev();
        assert_eq!(form.step(), Step::Basics);
        assert!(form.validation_errors().is_empty());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_edit_clears_errors_and_failure() {
        let mut form = ApplicationForm::new();
        form.report_errors(vec!["Full Name is required".to_string()]);
        form.mark_failed("db down");
        form.edit(FieldId::FullName, "A".to_string());
        assert!(form.validation_errors().is_empty());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_input_char_and_backspace() {
        let mut form = ApplicationForm::new();
        form.input_char(FieldId::FullName, 'A');
        form.input_char(FieldId::FullName, 'b');
        assert_eq!(form.fields().get(FieldId::FullName), "Ab");
        form.backspace(FieldId::FullName);
        assert_eq!(form.fields().get(FieldId::FullName), "A");
        // Backspace on an empty field is a no-op
        form.backspace(FieldId::Email);
        assert_eq!(form.fields().get(FieldId::Email), "");
    }

    #[test]
    fn test_cycle_choice_walks_the_options() {
        let mut form = ApplicationForm::new();
        form.cycle_choice(FieldId::CurrentYear);
        assert_eq!(form.fields().get(FieldId::CurrentYear), "pre-final");
        form.cycle_choice(FieldId::CurrentYear);
        assert_eq!(form.fields().get(FieldId::CurrentYear), "final");
        form.cycle_choice(FieldId::CurrentYear);
        assert_eq!(form.fields().get(FieldId::CurrentYear), "pre-final");
        // Free-text fields are untouched
        form.edit(FieldId::FullName, "Asha".to_string());
        form.cycle_choice(FieldId::FullName);
        assert_eq!(form.fields().get(FieldId::FullName), "Asha");
    }

    #[test]
    fn test_select_file_accepts_pdf_within_limit() {
        let mut form = ApplicationForm::new();
        assert!(form.select_file(pdf_file(MAX_RESUME_BYTES)).is_ok());
        assert!(form.attachment().is_some());
    }

    #[test]
    fn test_select_file_rejects_wrong_mime() {
        let mut form = ApplicationForm::new();
        let mut file = pdf_file(1024);
        file.mime_type = "image/png".to_string();
        assert_eq!(form.select_file(file), Err(SelectError::NotPdf));
        assert!(form.attachment().is_none());
    }

    #[test]
    fn test_select_file_rejects_oversize() {
        let mut form = ApplicationForm::new();
        assert_eq!(
            form.select_file(pdf_file(MAX_RESUME_BYTES + 1)),
            Err(SelectError::TooLarge)
        );
        assert!(form.attachment().is_none());
    }

    #[test]
    fn test_rejected_file_keeps_previous_attachment() {
        let mut form = ApplicationForm::new();
        assert!(form.select_file(pdf_file(1024)).is_ok());
        assert!(form.select_file(pdf_file(6 * 1024 * 1024)).is_err());
        assert_eq!(form.attachment().map(|f| f.size), Some(1024));
    }

    #[test]
    fn test_remove_file_is_unconditional() {
        let mut form = ApplicationForm::new();
        form.remove_file();
        assert!(form.attachment().is_none());
        assert!(form.select_file(pdf_file(1)).is_ok());
        form.remove_file();
        assert!(form.attachment().is_none());
    }

    #[test]
    fn test_submission_status_flow() {
        let mut form = ApplicationForm::new();
        form.start_submitting();
        assert!(form.is_submitting());
        form.mark_failed("db down");
        assert_eq!(
            form.status(),
            &SubmissionStatus::Failed("db down".to_string())
        );
        // Failure is recoverable
        form.start_submitting();
        form.mark_submitted();
        assert!(form.is_submitted());
    }

    #[test]
    fn test_step_numbers_and_field_partition() {
        assert_eq!(Step::Basics.number(), 1);
        assert_eq!(Step::Motivation.number(), 2);
        assert_eq!(Step::Commitment.number(), 3);

        // The three steps cover all fields exactly once
        let mut seen = Vec::new();
        for step in [Step::Basics, Step::Motivation, Step::Commitment] {
            seen.extend_from_slice(step.fields());
        }
        assert_eq!(seen.len(), FieldId::ALL.len());
        for id in FieldId::ALL {
            assert!(seen.contains(&id));
        }
    }
}
