//! The flat shipments table: every fetched record, unfiltered.

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::model::Shipment;

/// Column headers, in display order.
pub const COLUMNS: [&str; 8] = [
    "House Bill",
    "Shipper",
    "Origin",
    "Destination",
    "Mode",
    "Estimated Departure",
    "Estimated Arrival",
    "Status",
];

/// One display row per shipment, in input order.
///
/// Timestamps are shown in `tz`.
pub fn rows(shipments: &[Shipment], tz: &TimeZone) -> Vec<[String; 8]> {
    shipments
        .iter()
        .map(|s| {
            [
                s.house_bill_number.clone(),
                s.client.clone(),
                s.origin.clone(),
                s.destination.clone(),
                s.mode.clone(),
                format_timestamp(s.estimated_departure, tz),
                format_timestamp(s.estimated_arrival, tz),
                s.status.clone(),
            ]
        })
        .collect()
}

/// `YYYY-MM-DD HH:MM` in the given zone.
pub fn format_timestamp(ts: Timestamp, tz: &TimeZone) -> String {
    tz.to_datetime(ts).strftime("%Y-%m-%d %H:%M").to_string()
}
