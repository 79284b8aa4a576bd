// src/domain/feed.rs

use crate::domain::criteria::FilterCriteria;
use crate::domain::listing::ListingRecord;
use crate::domain::projection::FilteredView;
use std::sync::{Arc, Mutex, MutexGuard};

/// Issued when a fetch starts; handed back when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Default)]
struct FeedState {
    issued: u64,
    applied: u64,
    records: Option<Arc<Vec<ListingRecord>>>,
}

/// Filtered records of one kind, with the unfiltered total.
/// Both are `None` until the first fetch completes.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedView {
    pub total: Option<usize>,
    pub records: Option<Vec<ListingRecord>>,
}

/// Latest fetched records for one listing kind, shared by all workers.
///
/// Every fetch takes a ticket from a generation counter. A completed fetch is
/// applied only if no newer fetch has already been applied, so a slow stale
/// response never overwrites fresher data.
///
/// The feed also keeps the last projection. An export or another worker
/// asking for the same criteria over the same snapshot reuses it.
#[derive(Default)]
pub struct ListingFeed {
    state: Mutex<FeedState>,
    view: Mutex<FilteredView>,
}

impl ListingFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&self) -> FetchTicket {
        let mut state = self.lock();
        state.issued += 1;
        FetchTicket(state.issued)
    }

    /// Store the result of a fetch. Returns false when the result was stale
    /// and discarded.
    pub fn complete(&self, ticket: FetchTicket, records: Vec<ListingRecord>) -> bool {
        let mut state = self.lock();
        if ticket.0 <= state.applied {
            tracing::debug!(
                ticket = ticket.0,
                applied = state.applied,
                "discarding stale listing fetch"
            );
            return false;
        }
        state.applied = ticket.0;
        state.records = Some(Arc::new(records));
        true
    }

    /// Current records; `None` until the first fetch completes.
    pub fn snapshot(&self) -> Option<Arc<Vec<ListingRecord>>> {
        self.lock().records.clone()
    }

    /// Current records filtered by `criteria`.
    pub fn filtered(&self, criteria: &FilterCriteria) -> FeedView {
        let records = self.snapshot();
        let mut view = self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        view.set_records(records);
        view.set_criteria(criteria);
        let records = view.filtered().map(<[ListingRecord]>::to_vec);
        tracing::trace!(computed = view.recompute_count(), "listing projection served");
        FeedView {
            total: view.total(),
            records,
        }
    }

    #[cfg(test)]
    fn recompute_count(&self) -> u64 {
        self.view.lock().map(|v| v.recompute_count()).unwrap_or(0)
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        // A panic while holding the lock can't leave FeedState half-written.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
