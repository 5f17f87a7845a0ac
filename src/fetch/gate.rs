//! The fetch result gate.
//!
//! Runs the provider once on a worker thread. The owner polls the gate from
//! its event loop; the first delivered outcome fixes the result for good.
//! Dropping the gate while the fetch is in flight discards the outcome.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::model::{FetchResult, Shipment};

use super::FetchError;

type Outcome = Result<Vec<Shipment>, FetchError>;

/// A single in-flight (or finished) shipment fetch.
pub struct FetchGate {
    result: FetchResult,
    pending: Option<Receiver<Outcome>>,
}

impl FetchGate {
    /// Start fetching with `provider` on a worker thread.
    pub fn spawn<F>(provider: F) -> Self
    where
        F: FnOnce() -> Outcome + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let outcome = provider();
            if tx.send(outcome).is_err() {
                tracing::debug!("view closed before fetch resolved, result discarded");
            }
        });

        Self {
            result: FetchResult::Loading,
            pending: Some(rx),
        }
    }

    /// The current result, without checking for new outcomes.
    pub fn result(&self) -> &FetchResult {
        &self.result
    }

    /// Pick up the outcome if it has arrived. Never blocks.
    pub fn poll(&mut self) -> &FetchResult {
        let outcome = match self.pending.as_ref().map(Receiver::try_recv) {
            Some(Ok(outcome)) => outcome,
            Some(Err(TryRecvError::Disconnected)) => Err(FetchError::Disconnected),
            Some(Err(TryRecvError::Empty)) | None => return &self.result,
        };
        self.resolve(outcome);
        &self.result
    }

    /// Block until the fetch resolves and return the result.
    pub fn wait(mut self) -> FetchResult {
        if let Some(rx) = self.pending.take() {
            let outcome = rx.recv().unwrap_or(Err(FetchError::Disconnected));
            self.resolve(outcome);
        }
        self.result
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.pending = None;
        self.result = match outcome {
            Ok(shipments) => {
                tracing::info!(count = shipments.len(), "shipments fetched");
                FetchResult::Success(shipments)
            }
            Err(e) => {
                tracing::error!(error = %e, "shipment fetch failed");
                FetchResult::Error
            }
        };
    }
}
