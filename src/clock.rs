//! Reference time for the schedule.

use jiff::Zoned;
use jiff::tz::TimeZone;

/// Where "now" comes from.
///
/// A live clock is read again on every call, so a long-running view keeps
/// dropping shipments as they arrive. A pinned clock always returns the
/// same instant (`--now`).
#[derive(Debug, Clone)]
pub enum Clock {
    Live(TimeZone),
    Pinned(Zoned),
}

impl Clock {
    /// The current reference instant.
    pub fn now(&self) -> Zoned {
        match self {
            Self::Live(tz) => Zoned::now().with_time_zone(tz.clone()),
            Self::Pinned(now) => now.clone(),
        }
    }

    /// The zone that defines calendar days.
    pub fn time_zone(&self) -> &TimeZone {
        match self {
            Self::Live(tz) => tz,
            Self::Pinned(now) => now.time_zone(),
        }
    }
}
