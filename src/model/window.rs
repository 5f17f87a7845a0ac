//! Window specification: which calendar days are visible.

use std::num::NonZeroU32;

use jiff::ToSpan;
use jiff::civil::Date;

/// Days in one schedule week.
pub const DAYS_PER_WEEK: usize = 7;

/// The visible time range, as a closed set of shapes.
///
/// Every shape is a contiguous run of calendar days; only where it starts
/// and how many days it spans differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSpec {
    /// The seven days starting today.
    Fixed,

    /// `7 * weeks` days starting today.
    Growing { weeks: NonZeroU32 },

    /// The seven days starting at `anchor`.
    Anchored { anchor: Date },
}

impl WindowSpec {
    /// A growing window of a single week.
    pub fn one_week() -> Self {
        Self::Growing {
            weeks: NonZeroU32::MIN,
        }
    }

    /// First visible date, given today's date.
    pub fn start(self, today: Date) -> Date {
        match self {
            Self::Fixed | Self::Growing { .. } => today,
            Self::Anchored { anchor } => anchor,
        }
    }

    /// Number of calendar days the window spans.
    pub fn day_count(self) -> usize {
        match self {
            Self::Fixed | Self::Anchored { .. } => DAYS_PER_WEEK,
            Self::Growing { weeks } => usize::try_from(weeks.get())
                .unwrap_or(usize::MAX)
                .saturating_mul(DAYS_PER_WEEK),
        }
    }

    /// Every visible date in ascending order, both ends included.
    ///
    /// Dates beyond the last representable civil date are omitted.
    pub fn dates(self, today: Date) -> Vec<Date> {
        self.start(today)
            .series(1.day())
            .take(self.day_count())
            .collect()
    }
}
