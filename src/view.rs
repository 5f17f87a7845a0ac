//! Presentation gate: what the renderer gets for each fetch state.

use crate::model::{FetchResult, Shipment};

/// Shown while the fetch is in flight.
pub const LOADING: &str = "Loading shipments…";

/// Shown when the fetch failed.
pub const ERROR: &str = "Error: shipments could not be loaded.";

/// Shown for a day with nothing arriving.
pub const NO_SHIPMENTS: &str = "No shipments";

/// What to draw for the current fetch state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation<T> {
    Loading,
    Error,
    Ready(T),
}

/// Map a fetch result to a presentation, building content only on success.
///
/// `build` is not called for `Loading` or `Error`.
pub fn present<T>(result: &FetchResult, build: impl FnOnce(&[Shipment]) -> T) -> Presentation<T> {
    match result {
        FetchResult::Loading => Presentation::Loading,
        FetchResult::Error => Presentation::Error,
        FetchResult::Success(shipments) => Presentation::Ready(build(shipments)),
    }
}
