//! Chrome shared by every view: progress header and status bar

use crate::app::App;
use crate::state::{Step, SubmissionStatus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the step progress indicator, e.g. `(1)──(2)──(3)  Step 2 of 3`
pub fn draw_progress(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.form.step().number();
    let mut spans: Vec<Span> = vec![Span::styled(
        " Campus Ambassador Application  ",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];

    for step in 1..=Step::COUNT {
        let style = if step <= current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("({step})"), style));
        if step < Step::COUNT {
            let connector_style = if step < current {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled("──", connector_style));
        }
    }
    spans.push(Span::styled(
        format!("  Step {current} of {}", Step::COUNT),
        Style::default().fg(Color::Gray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the bottom status bar: transient feedback, submission state, and the
/// endpoint this session writes to
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (message, color) = match app.form.status() {
        SubmissionStatus::Submitting => ("Submitting...".to_string(), Color::Yellow),
        SubmissionStatus::Failed(reason) => (reason.clone(), Color::Red),
        _ => match &app.status_message {
            Some(message) => (message.clone(), Color::Gray),
            None => (format!("→ {}", app.endpoint), Color::DarkGray),
        },
    };

    let bar = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Left);
    frame.render_widget(bar, area);
}
