//! Shipments screen: every fetched shipment in a flat table.

use crossterm::event::KeyCode;
use jiff::tz::TimeZone;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Row, Table, TableState};

use crate::model::FetchResult;
use crate::table::{COLUMNS, rows};
use crate::view::{Presentation, present};

/// Column widths, matching [`COLUMNS`].
const WIDTHS: [Constraint; 8] = [
    Constraint::Length(12),
    Constraint::Length(16),
    Constraint::Min(14),
    Constraint::Min(14),
    Constraint::Length(6),
    Constraint::Length(19),
    Constraint::Length(19),
    Constraint::Length(14),
];

pub struct ShipmentsScreen {
    tz: TimeZone,
    state: TableState,
}

impl ShipmentsScreen {
    pub fn new(tz: TimeZone) -> Self {
        Self {
            tz,
            state: TableState::default().with_selected(Some(0)),
        }
    }

    pub fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Home => self.state.select_first(),
            KeyCode::End => self.state.select_last(),
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame, result: &FetchResult) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // title
            Constraint::Min(0),    // table
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("Docket", highlight),
            Span::styled("  All shipments", muted),
        ]))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        match present(result, |shipments| rows(shipments, &self.tz)) {
            Presentation::Loading => super::render_loading(frame, chunks[1]),
            Presentation::Error => super::render_error(frame, chunks[1]),
            Presentation::Ready(rows) => {
                let table = Table::new(
                    rows.into_iter().map(|r| Row::new(r).style(normal)),
                    WIDTHS,
                )
                .header(Row::new(COLUMNS).style(highlight))
                .row_highlight_style(highlight)
                .highlight_symbol("› ")
                .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
                frame.render_stateful_widget(table, chunks[1], &mut self.state);
            }
        }

        let help = Paragraph::new(Line::from(vec![Span::styled(
            " ↑↓ select  tab dashboard  q quit",
            muted,
        )]));
        frame.render_widget(help, chunks[2]);
    }
}
