//! Application loop and screen routing.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::clock::Clock;
use crate::fetch::{self, FetchGate, Source};

use super::screens::{DashboardScreen, ShipmentsScreen};

/// How long to wait for input before checking the fetch again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Dashboard,
    Shipments,
}

impl Screen {
    fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Shipments,
            Self::Shipments => Self::Dashboard,
        }
    }
}

/// Starts the fetch and runs the TUI event loop until the user quits.
///
/// Quitting before the fetch resolves discards its result.
pub fn run(source: Source, clock: Clock) -> io::Result<()> {
    let gate = FetchGate::spawn(move || fetch::fetch(&source));

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, gate, clock);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut gate: FetchGate, clock: Clock) -> io::Result<()> {
    let mut shipments = ShipmentsScreen::new(clock.time_zone().clone());
    let mut dashboard = DashboardScreen::new(clock);
    let mut screen = Screen::Dashboard;

    loop {
        let result = gate.poll();
        terminal.draw(|frame| match screen {
            Screen::Dashboard => dashboard.render(frame, result),
            Screen::Shipments => shipments.render(frame, result),
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('q') => {
                    tracing::debug!(resolved = gate.result().is_resolved(), "quitting");
                    return Ok(());
                }
                KeyCode::Tab | KeyCode::BackTab => screen = screen.next(),
                code => match screen {
                    Screen::Dashboard => dashboard.on_key(code),
                    Screen::Shipments => shipments.on_key(code),
                },
            }
        }
    }
}
