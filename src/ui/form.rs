//! Step page rendering: fields, validation errors, attachment row

use super::field_renderer::draw_field_with_value;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{format_file_size, FieldId, Step, SubmissionStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the current step of the application form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.form.step();
    let errors = visible_errors(app);
    let error_height = if errors.is_empty() {
        0
    } else {
        errors.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title and subtitle
            Constraint::Length(error_height), // Validation / submit errors
            Constraint::Min(6),               // Fields
            Constraint::Length(1),            // Help text
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            step.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            step.subtitle(),
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    if !errors.is_empty() {
        draw_error_panel(frame, chunks[1], app, &errors);
    }

    draw_fields(frame, chunks[2], app);
    draw_help(frame, chunks[3], step);
}

/// Submit failures replace the field-level list, as on the original page
fn visible_errors(app: &App) -> Vec<String> {
    if let SubmissionStatus::Failed(reason) = app.form.status() {
        return vec![reason.clone()];
    }
    app.form.validation_errors().to_vec()
}

fn draw_error_panel(frame: &mut Frame, area: Rect, app: &App, errors: &[String]) {
    let is_submit_error = matches!(app.form.status(), SubmissionStatus::Failed(_));
    let title = if is_submit_error {
        " Submission Error "
    } else {
        " Please fix the following errors "
    };

    let lines: Vec<Line> = errors
        .iter()
        .map(|e| {
            Line::from(Span::styled(
                format!("• {e}"),
                Style::default().fg(Color::Red),
            ))
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(panel, area);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.form.step();
    let mut constraints: Vec<Constraint> = step
        .fields()
        .iter()
        .map(|f| {
            if f.is_multiline() {
                Constraint::Length(4)
            } else {
                Constraint::Length(3)
            }
        })
        .collect();
    if step == Step::Commitment {
        constraints.push(Constraint::Length(3)); // Attachment row
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, id) in step.fields().iter().enumerate() {
        let value = app.form.fields().display_value(*id);
        draw_field_with_value(
            frame,
            chunks[index],
            id.label(),
            value,
            app.active_field == index && app.file_prompt.is_none(),
            id.is_multiline(),
            field_has_error(app, *id),
        );
    }

    if step == Step::Commitment {
        draw_attachment_row(frame, chunks[step.fields().len()], app);
    }
}

/// Mirror the original page's per-field highlight: a field turns red when an
/// error entry names it
fn field_has_error(app: &App, id: FieldId) -> bool {
    let needle = match id {
        FieldId::FullName => "full name",
        FieldId::Email => "email",
        FieldId::Phone => "phone",
        FieldId::Linkedin => return false,
        FieldId::CurrentCourse => "current course",
        FieldId::CurrentYear => "current year",
        FieldId::StudyAbroadPlans => "study abroad",
        FieldId::Excitement => "excitement",
        FieldId::PersonalQualities => "personal qualities",
        FieldId::CollegeActivities => "college activities",
        FieldId::ExpectedGains => "expected gains",
        FieldId::PromotionStrategy => "promotion strategy",
        FieldId::Availability => "availability",
    };
    app.form
        .validation_errors()
        .iter()
        .any(|e| e.to_lowercase().contains(needle))
}

fn draw_attachment_row(frame: &mut Frame, area: Rect, app: &App) {
    let label = "Resume (optional, PDF up to 5MB)";
    let is_active = app.on_attachment_row();

    if let Some(prompt) = &app.file_prompt {
        draw_field_with_value(frame, area, "Resume path", prompt, true, false, false);
        return;
    }

    let value = match app.form.attachment() {
        Some(file) => format!(
            "{} ({})  Del: remove",
            file.file_name,
            format_file_size(file.size)
        ),
        None => {
            if is_active {
                "Enter: pick a PDF file".to_string()
            } else {
                String::new()
            }
        }
    };
    draw_field_with_value(frame, area, label, &value, is_active, false, false);
}

fn draw_help(frame: &mut Frame, area: Rect, step: Step) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
    ];
    if step.prev().is_some() {
        spans.push(Span::styled("PgUp", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(": previous  "));
    }
    if step.next().is_some() {
        spans.push(Span::styled("PgDn", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(": continue  "));
    } else {
        spans.push(Span::styled(
            SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(": submit  "));
    }
    spans.push(Span::styled("Esc", Style::default().fg(Color::Cyan)));
    spans.push(Span::raw(": quit"));

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
