//! Screen rendering and input handling.

mod dashboard;
mod shipments;

pub use dashboard::DashboardScreen;
pub use shipments::ShipmentsScreen;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::view;

/// Draw the loading placeholder.
fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new(Line::from(Span::styled(
        view::LOADING,
        Style::default().fg(Color::Cyan),
    )))
    .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(loading, area);
}

/// Draw the error placeholder.
fn render_error(frame: &mut Frame, area: Rect) {
    let error = Paragraph::new(Line::from(Span::styled(
        view::ERROR,
        Style::default().fg(Color::Red),
    )))
    .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(error, area);
}
