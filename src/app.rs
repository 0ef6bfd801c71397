//! Application state and core logic

use crate::api::ApplyClient;
use crate::config::AppConfig;
use crate::legacy;
use crate::pipeline::SubmissionPipeline;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{ApplicationForm, FieldId, ResumeFile, Step};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;

/// Legacy Drive folder the automation archived resumes under; shown in
/// post-submit diagnostics only
const LEGACY_FOLDER_ROOT: &str = "Campus Ambassador Applications";

/// Main application struct
pub struct App {
    /// The application form state machine
    pub form: ApplicationForm,
    /// Submission pipeline bound to the configured write endpoint
    pipeline: SubmissionPipeline<ApplyClient>,
    /// Index of the focused row on the current step (fields, then the
    /// attachment row on the last step)
    pub active_field: usize,
    /// Path being typed for the resume attachment, when the prompt is open
    pub file_prompt: Option<String>,
    /// Transient feedback line (file rejection, hints)
    pub status_message: Option<String>,
    /// Endpoint address, shown in the status bar
    pub endpoint: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from resolved configuration
    pub fn new(config: &AppConfig) -> Self {
        let client = ApplyClient::new(config.api_url());
        let endpoint = client.endpoint().to_string();
        Self {
            form: ApplicationForm::new(),
            pipeline: SubmissionPipeline::new(client),
            active_field: 0,
            file_prompt: None,
            status_message: None,
            endpoint,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Focusable rows on a step: its fields, plus the attachment row on the
    /// final step
    pub fn row_count(step: Step) -> usize {
        step.fields().len() + usize::from(step == Step::Commitment)
    }

    /// Whether the focused row is the attachment row
    pub fn on_attachment_row(&self) -> bool {
        self.form.step() == Step::Commitment
            && self.active_field == self.form.step().fields().len()
    }

    /// Field under focus, `None` on the attachment row
    pub fn active_field_id(&self) -> Option<FieldId> {
        self.form.step().fields().get(self.active_field).copied()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The network call runs to completion; ignore input meanwhile
        if self.form.is_submitting() {
            return Ok(());
        }

        if self.form.is_submitted() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                self.quit = true;
            }
            return Ok(());
        }

        if self.file_prompt.is_some() {
            self.handle_file_prompt_key(key);
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::PageDown => self.next_step(),
            KeyCode::PageUp => self.prev_step(),
            KeyCode::Char('n') if key.modifiers.contains(SHORTCUT_MODIFIER) => self.next_step(),
            KeyCode::Char('p') if key.modifiers.contains(SHORTCUT_MODIFIER) => self.prev_step(),
            KeyCode::Char('s') if key.modifiers.contains(SHORTCUT_MODIFIER) => {
                self.submit().await;
            }
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Delete if self.on_attachment_row() => {
                self.form.remove_file();
                self.status_message = Some("Resume removed".to_string());
            }
            KeyCode::Backspace => {
                if let Some(id) = self.active_field_id() {
                    if id.options().is_none() {
                        self.form.backspace(id);
                    }
                }
            }
            KeyCode::Char(' ') => match self.active_field_id() {
                Some(id) if id.options().is_some() => self.form.cycle_choice(id),
                Some(id) => self.form.input_char(id, ' '),
                None => {}
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(id) = self.active_field_id() {
                    if id.options().is_none() {
                        self.form.input_char(id, c);
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_enter(&mut self) {
        if self.on_attachment_row() {
            if self.form.attachment().is_none() {
                self.file_prompt = Some(String::new());
                self.status_message = None;
            }
            return;
        }
        match self.active_field_id() {
            Some(id) if id.options().is_some() => self.form.cycle_choice(id),
            Some(id) if id.is_multiline() => self.form.input_char(id, '\n'),
            Some(_) => self.focus_next(),
            None => {}
        }
    }

    fn handle_file_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.file_prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.file_prompt = None;
            }
            KeyCode::Backspace => {
                prompt.pop();
            }
            KeyCode::Enter => {
                let path = prompt.trim().to_string();
                self.file_prompt = None;
                if path.is_empty() {
                    return;
                }
                self.attach_file(Path::new(&path));
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt.push(c);
            }
            _ => {}
        }
    }

    /// Describe the picked file and run it through the selection rules
    fn attach_file(&mut self, path: &Path) {
        match ResumeFile::describe(path) {
            Ok(file) => match self.form.select_file(file) {
                Ok(()) => {
                    self.status_message = Some("Resume attached".to_string());
                }
                Err(rejection) => {
                    tracing::debug!(path = %path.display(), %rejection, "resume rejected");
                    self.status_message = Some(rejection.to_string());
                }
            },
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "cannot read picked file");
                self.status_message = Some(format!("Cannot read file: {err}"));
            }
        }
    }

    fn focus_next(&mut self) {
        let count = Self::row_count(self.form.step());
        self.active_field = (self.active_field + 1) % count;
    }

    fn focus_prev(&mut self) {
        let count = Self::row_count(self.form.step());
        self.active_field = if self.active_field == 0 {
            count - 1
        } else {
            self.active_field - 1
        };
    }

    fn next_step(&mut self) {
        if self.form.next() {
            self.active_field = 0;
            self.status_message = None;
        }
    }

    fn prev_step(&mut self) {
        self.form.prev();
        self.active_field = 0;
        self.status_message = None;
    }

    /// Run the submission pipeline (final step only)
    async fn submit(&mut self) {
        if self.form.step() != Step::Commitment {
            return;
        }
        let attachment_name = self.form.attachment().map(|f| f.file_name.clone());
        self.pipeline.submit(&mut self.form).await;

        if self.form.is_submitted() {
            if attachment_name.is_some() {
                let archive = legacy::resume_archive_path(
                    LEGACY_FOLDER_ROOT,
                    self.form.fields().get(FieldId::FullName),
                    chrono::Utc::now(),
                );
                tracing::info!(%archive, "application submitted; legacy archive slot for the resume");
            } else {
                tracing::info!("application submitted");
            }
        }
    }
}
