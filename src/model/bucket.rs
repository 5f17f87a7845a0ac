//! Day buckets: the render-ready unit of a schedule.

use jiff::civil::Date;
use serde::Serialize;

use super::Shipment;

/// One calendar day of the visible window and the shipments arriving on it.
///
/// An empty `shipments` list is a real day with nothing arriving,
/// distinct from a date outside the window (which has no bucket at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub date: Date,
    pub label: String,
    pub shipments: Vec<Shipment>,
}
