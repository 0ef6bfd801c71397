//! UI module for rendering the TUI

mod field_renderer;
mod form;
mod layout;
mod submitted;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.form.is_submitted() {
        submitted::draw(frame, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress header
            Constraint::Min(10),   // Current step
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    layout::draw_progress(frame, chunks[0], app);
    form::draw(frame, chunks[1], app);
    layout::draw_status_bar(frame, chunks[2], app);
}
