//! Shipment records as delivered by the fetch provider.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A single tracked consignment.
///
/// Created by the fetch provider and never mutated afterwards.
/// `estimated_arrival` is the only field the schedule looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub house_bill_number: String,
    pub client: String,
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub estimated_departure: Timestamp,
    pub estimated_arrival: Timestamp,
    pub status: String,
}
