//! Holds the most recently loaded [`Dataset`].
//!
//! Loads may overlap: a request for a new source location can be made while
//! an earlier one is still in flight. Every request takes a [`LoadTicket`]
//! and only the ticket of the latest request is allowed to install its
//! result, so a slow, earlier load never overwrites a newer dataset.

use std::fmt::Display;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use chrono::DateTime;
use chrono::Utc;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::dataset::Dataset;

/// Identifies where the CSV data is loaded from, such as a file path or URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation(Arc<str>);

impl SourceLocation {
    pub fn new(location: &str) -> SourceLocation {
        Self(Arc::from(location))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceLocation {
    fn from(location: &str) -> Self {
        SourceLocation::new(location)
    }
}

/// What is currently displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// No dataset has been installed yet.
    #[default]
    Idle,

    Loaded {
        location: SourceLocation,
        dataset: Arc<Dataset>,
        loaded_at: DateTime<Utc>,
    },

    /// The most recently requested load failed.
    Failed {
        location: SourceLocation,
        message: String,
        failed_at: DateTime<Utc>,
    },
}

impl LoadState {
    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        match self {
            LoadState::Loaded { dataset, .. } => Some(dataset),
            LoadState::Idle | LoadState::Failed { .. } => None,
        }
    }
}

/// A claim on the slot taken when a load is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    location: SourceLocation,
}

impl LoadTicket {
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// The outcome of completing a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result replaced the current state.
    Installed,

    /// A newer load was requested in the meantime; the result was discarded.
    Stale,
}

#[derive(Debug, Default)]
struct SlotState {
    generation: u64,
    pending: bool,
    state: LoadState,
}

/// Single-writer, multi-reader holder of the latest load state.
#[derive(Debug, Default)]
pub struct DatasetSlot {
    inner: Mutex<SlotState>,
}

impl DatasetSlot {
    pub fn new() -> DatasetSlot {
        Self::default()
    }

    /// Registers a load request for `location`.
    ///
    /// The displayed state does not change until the returned ticket is
    /// completed; any previously installed dataset stays current.
    pub fn request(&self, location: SourceLocation) -> LoadTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.pending = true;

        debug!(%location, generation = inner.generation, "load requested");

        LoadTicket {
            generation: inner.generation,
            location,
        }
    }

    /// Completes the load identified by `ticket`.
    ///
    /// Only the ticket of the latest request installs its result. A ticket
    /// cannot be completed twice.
    pub fn complete(&self, ticket: LoadTicket, result: Result<Dataset, String>) -> Completion {
        let mut inner = self.lock();

        if ticket.generation != inner.generation || !inner.pending {
            warn!(
                location = %ticket.location,
                generation = ticket.generation,
                latest = inner.generation,
                "discarding the result of a superseded load"
            );
            return Completion::Stale;
        }

        inner.pending = false;
        inner.state = match result {
            Ok(dataset) => {
                info!(location = %ticket.location, records = dataset.len(), "dataset installed");

                LoadState::Loaded {
                    location: ticket.location,
                    dataset: Arc::new(dataset),
                    loaded_at: Utc::now(),
                }
            }
            Err(message) => {
                warn!(location = %ticket.location, %message, "load failed");

                LoadState::Failed {
                    location: ticket.location,
                    message,
                    failed_at: Utc::now(),
                }
            }
        };

        Completion::Installed
    }

    /// A snapshot of the current state.
    pub fn current(&self) -> LoadState {
        self.lock().state.clone()
    }

    /// Whether the latest request has not been completed yet.
    pub fn is_pending(&self) -> bool {
        self.lock().pending
    }

    // The state is swapped as a whole under the lock, so a panic in another
    // holder cannot leave it half written.
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn dataset(pm2_5: f64) -> Dataset {
        Dataset::new(vec![Record::new(Some(pm2_5), None, None, None, None)])
    }

    fn installed_pm2_5(slot: &DatasetSlot) -> Option<f64> {
        slot.current().dataset().and_then(|dataset| dataset[0].pm2_5)
    }

    #[test]
    fn starts_idle() {
        let slot = DatasetSlot::new();

        assert_eq!(LoadState::Idle, slot.current());
        assert!(!slot.is_pending());
    }

    #[test]
    fn request_keeps_the_current_state() {
        let slot = DatasetSlot::new();
        let ticket = slot.request("a.csv".into());
        slot.complete(ticket, Ok(dataset(1.0)));

        slot.request("b.csv".into());

        assert!(slot.is_pending());
        assert_eq!(Some(1.0), installed_pm2_5(&slot));
    }

    #[test]
    fn completion_installs_the_dataset() {
        let slot = DatasetSlot::new();
        let ticket = slot.request("a.csv".into());

        assert_eq!(Completion::Installed, slot.complete(ticket, Ok(dataset(1.0))));

        match slot.current() {
            LoadState::Loaded { location, dataset, .. } => {
                assert_eq!("a.csv", location.as_str());
                assert_eq!(1, dataset.len());
            }
            state => panic!("unexpected state: {state:?}"),
        }
        assert!(!slot.is_pending());
    }

    #[test]
    fn empty_dataset_is_loaded_not_idle() {
        let slot = DatasetSlot::new();
        let ticket = slot.request("empty.csv".into());
        slot.complete(ticket, Ok(Dataset::default()));

        assert!(matches!(slot.current(), LoadState::Loaded { ref dataset, .. } if dataset.is_empty()));
    }

    #[test]
    fn last_requested_wins() {
        let slot = DatasetSlot::new();
        let first = slot.request("slow.csv".into());
        let second = slot.request("fast.csv".into());

        assert_eq!(Completion::Installed, slot.complete(second, Ok(dataset(2.0))));
        assert_eq!(Completion::Stale, slot.complete(first, Ok(dataset(1.0))));

        assert_eq!(Some(2.0), installed_pm2_5(&slot));
    }

    #[test]
    fn earlier_request_resolving_first_is_discarded() {
        let slot = DatasetSlot::new();
        let first = slot.request("a.csv".into());
        let second = slot.request("b.csv".into());

        assert_eq!(Completion::Stale, slot.complete(first, Ok(dataset(1.0))));
        assert_eq!(LoadState::Idle, slot.current());
        assert!(slot.is_pending());

        assert_eq!(Completion::Installed, slot.complete(second, Ok(dataset(2.0))));
        assert_eq!(Some(2.0), installed_pm2_5(&slot));
    }

    #[test]
    fn failure_replaces_the_dataset() {
        let slot = DatasetSlot::new();
        let ticket = slot.request("a.csv".into());
        slot.complete(ticket, Ok(dataset(1.0)));

        let ticket = slot.request("missing.csv".into());
        slot.complete(ticket, Err(String::from("not found")));

        match slot.current() {
            LoadState::Failed { location, message, .. } => {
                assert_eq!("missing.csv", location.as_str());
                assert_eq!("not found", message);
            }
            state => panic!("unexpected state: {state:?}"),
        }
    }

    #[test]
    fn stale_failure_is_discarded() {
        let slot = DatasetSlot::new();
        let first = slot.request("a.csv".into());
        let second = slot.request("b.csv".into());
        slot.complete(second, Ok(dataset(2.0)));

        assert_eq!(Completion::Stale, slot.complete(first, Err(String::from("timeout"))));
        assert_eq!(Some(2.0), installed_pm2_5(&slot));
    }

    #[test]
    fn ticket_cannot_complete_twice() {
        let slot = DatasetSlot::new();
        let ticket = slot.request("a.csv".into());

        assert_eq!(Completion::Installed, slot.complete(ticket.clone(), Ok(dataset(1.0))));
        assert_eq!(Completion::Stale, slot.complete(ticket, Ok(dataset(9.0))));
        assert_eq!(Some(1.0), installed_pm2_5(&slot));
    }
}
