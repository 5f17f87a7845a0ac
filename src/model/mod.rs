//! Core data model for Docket.
//!
//! These types carry the schedule view-model: shipments as fetched,
//! the tri-state fetch result, the visible window, and the day buckets
//! derived from them.

mod bucket;
mod fetch;
mod shipment;
mod window;

pub use bucket::DayBucket;
pub use fetch::FetchResult;
pub use shipment::Shipment;
pub use window::WindowSpec;
