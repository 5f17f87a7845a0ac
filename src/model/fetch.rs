//! The tri-state result of the shipment fetch.

use super::Shipment;

/// What the fetch provider has produced so far.
///
/// Starts as `Loading` and resolves once to either `Success` or `Error`.
/// Error detail stays with the provider; the view only sees the tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchResult {
    #[default]
    Loading,

    Error,

    Success(Vec<Shipment>),
}

impl FetchResult {
    /// Whether the fetch has resolved, successfully or not.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}
