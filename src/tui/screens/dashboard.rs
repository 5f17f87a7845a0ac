//! Dashboard screen: upcoming shipments bucketed by arrival day.

use crossterm::event::KeyCode;
use jiff::tz::TimeZone;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::clock::Clock;
use crate::model::{DayBucket, FetchResult, Shipment, WindowSpec};
use crate::navigation::{NavAction, Navigator};
use crate::schedule::{build_schedule, label};
use crate::view::{NO_SHIPMENTS, Presentation, present};

pub struct DashboardScreen {
    clock: Clock,
    nav: Navigator,
    scroll: u16,
}

impl DashboardScreen {
    /// Opens on the anchored week starting today.
    pub fn new(clock: Clock) -> Self {
        let nav = Navigator::anchored(clock.now().date());
        Self {
            clock,
            nav,
            scroll: 0,
        }
    }

    pub fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.navigate(NavAction::PageBack),
            KeyCode::Right | KeyCode::Char('l') => self.navigate(NavAction::PageForward),
            KeyCode::Char('+' | 'e') => self.navigate(NavAction::ExpandRange),
            KeyCode::Char('m') => {
                self.nav.toggle_mode(self.clock.now().date());
                self.scroll = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            _ => {}
        }
    }

    fn navigate(&mut self, action: NavAction) {
        self.nav.apply(action);
        self.scroll = 0;
    }

    /// Buckets for the current window, as of the clock's current reading.
    fn schedule(&self, shipments: &[Shipment]) -> Vec<DayBucket> {
        build_schedule(shipments, self.nav.window(), &self.clock.now())
    }

    pub fn render(&self, frame: &mut Frame, result: &FetchResult) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // header
            Constraint::Length(1), // separator
            Constraint::Min(0),    // schedule
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        // Header: which window is showing.
        let window = self.nav.window();
        let header = Paragraph::new(Line::from(vec![
            Span::styled("Docket", highlight),
            Span::styled(format!("  {}", describe_window(window)), muted),
        ]))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(header, chunks[0]);

        // Thin separator.
        let sep = Paragraph::new(Line::from(vec![Span::styled(
            "─".repeat(area.width.saturating_sub(4) as usize),
            muted,
        )]))
        .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(sep, chunks[1]);

        match present(result, |shipments| self.schedule(shipments)) {
            Presentation::Loading => super::render_loading(frame, chunks[2]),
            Presentation::Error => super::render_error(frame, chunks[2]),
            Presentation::Ready(buckets) => {
                let body = Paragraph::new(schedule_lines(&buckets, self.clock.time_zone()))
                    .scroll((self.scroll, 0))
                    .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
                frame.render_widget(body, chunks[2]);
            }
        }

        // Help line.
        let keys = match window {
            WindowSpec::Growing { .. } => " + expand  m anchored  ↑↓ scroll  tab shipments  q quit",
            WindowSpec::Fixed | WindowSpec::Anchored { .. } => {
                " ←→ week  m growing  ↑↓ scroll  tab shipments  q quit"
            }
        };
        let help = Paragraph::new(Line::from(vec![Span::styled(keys, muted)]));
        frame.render_widget(help, chunks[3]);
    }
}

/// One bold label line per day, its shipments (or the empty marker), then a blank line.
fn schedule_lines(buckets: &[DayBucket], tz: &TimeZone) -> Vec<Line<'static>> {
    let day = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let normal = Style::default().fg(Color::Gray);
    let muted = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::new();
    for bucket in buckets {
        lines.push(Line::from(Span::styled(bucket.label.clone(), day)));

        if bucket.shipments.is_empty() {
            lines.push(Line::from(Span::styled(format!("  {NO_SHIPMENTS}"), muted)));
        }

        for s in &bucket.shipments {
            let time = tz.to_datetime(s.estimated_arrival).strftime("%H:%M").to_string();
            lines.push(Line::from(vec![
                Span::styled(format!("  {time}  "), muted),
                Span::styled(s.house_bill_number.clone(), normal),
                Span::styled(
                    format!("  {}  {} → {}  {}", s.client, s.origin, s.destination, s.mode),
                    normal,
                ),
                Span::styled(format!("  [{}]", s.status), muted),
            ]));
        }

        lines.push(Line::default());
    }
    lines
}

/// Short description of the visible window for the header.
fn describe_window(window: WindowSpec) -> String {
    match window {
        WindowSpec::Fixed => "Next 7 days".to_string(),
        WindowSpec::Growing { weeks } if weeks.get() == 1 => "Next week".to_string(),
        WindowSpec::Growing { weeks } => format!("Next {weeks} weeks"),
        WindowSpec::Anchored { anchor } => format!("Week of {}", label(anchor)),
    }
}
