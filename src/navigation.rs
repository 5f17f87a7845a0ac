//! Window navigation: the user-driven state machine over [`WindowSpec`].

use jiff::ToSpan;
use jiff::civil::Date;

use crate::model::WindowSpec;

/// A user action on the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Grow the range by one week.
    ExpandRange,

    /// Move the anchored week seven days earlier.
    PageBack,

    /// Move the anchored week seven days later.
    PageForward,
}

/// Owns the current window and moves it in response to [`NavAction`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    window: WindowSpec,
}

impl Navigator {
    /// Growing-range mode, starting at one week.
    pub fn growing() -> Self {
        Self {
            window: WindowSpec::one_week(),
        }
    }

    /// Anchored-week mode, starting at `today`.
    pub fn anchored(today: Date) -> Self {
        Self {
            window: WindowSpec::Anchored { anchor: today },
        }
    }

    /// The current window.
    pub fn window(&self) -> WindowSpec {
        self.window
    }

    /// Apply an action. Actions that don't fit the current mode do nothing.
    pub fn apply(&mut self, action: NavAction) {
        self.window = match (self.window, action) {
            (WindowSpec::Growing { weeks }, NavAction::ExpandRange) => WindowSpec::Growing {
                weeks: weeks.saturating_add(1),
            },
            (WindowSpec::Anchored { anchor }, NavAction::PageBack) => WindowSpec::Anchored {
                anchor: shift(anchor, -7),
            },
            (WindowSpec::Anchored { anchor }, NavAction::PageForward) => WindowSpec::Anchored {
                anchor: shift(anchor, 7),
            },
            (window, action) => {
                tracing::debug!(?window, ?action, "navigation action ignored in this mode");
                window
            }
        };
    }

    /// Switch between anchored and growing mode, resetting to the initial state.
    ///
    /// A fixed window switches to anchored.
    pub fn toggle_mode(&mut self, today: Date) {
        *self = match self.window {
            WindowSpec::Growing { .. } => Self::anchored(today),
            WindowSpec::Fixed | WindowSpec::Anchored { .. } => Self::growing(),
        };
    }
}

/// Move `anchor` by `days`, staying put if that leaves the calendar.
fn shift(anchor: Date, days: i32) -> Date {
    match anchor.checked_add(days.days()) {
        Ok(moved) => moved,
        Err(e) => {
            tracing::warn!(%anchor, days, error = %e, "anchor cannot move further");
            anchor
        }
    }
}
