//! Shipment fetching: the provider behind the schedule.
//!
//! The provider reads the full shipment list from a configured [`Source`].
//! The [`FetchGate`] runs it off the UI thread and exposes the outcome
//! as a [`FetchResult`](crate::model::FetchResult).

mod gate;
mod source;

pub use gate::FetchGate;
pub use source::{FetchError, Source, fetch};
