// src/domain/projection.rs

use crate::domain::criteria::FilterCriteria;
use crate::domain::filter::filter_records;
use crate::domain::listing::ListingRecord;
use std::sync::Arc;

/// Filter a loaded collection. `None` (not loaded yet) stays `None`, which
/// is different from `Some(vec![])` (loaded, nothing matched).
pub fn project(
    all: Option<&[ListingRecord]>,
    criteria: &FilterCriteria,
) -> Option<Vec<ListingRecord>> {
    all.map(|records| filter_records(records, criteria).into_iter().cloned().collect())
}

struct Memo {
    records: Option<Arc<Vec<ListingRecord>>>,
    criteria: FilterCriteria,
    output: Option<Vec<ListingRecord>>,
}

/// The records a view was handed, its criteria, and the last computed
/// projection.
///
/// The projection is recomputed only when the records are replaced or the
/// criteria differ from the ones the memo was built with.
#[derive(Default)]
pub struct FilteredView {
    records: Option<Arc<Vec<ListingRecord>>>,
    criteria: FilterCriteria,
    memo: Option<Memo>,
    recomputed: u64,
}

impl FilteredView {
    /// Replace the source collection (a fresh fetch, or `None` for "not loaded").
    pub fn set_records(&mut self, records: Option<Arc<Vec<ListingRecord>>>) {
        self.records = records;
    }

    pub fn set_criteria(&mut self, criteria: &FilterCriteria) {
        if self.criteria != *criteria {
            self.criteria = criteria.clone();
        }
    }

    /// Total records before filtering, if loaded.
    pub fn total(&self) -> Option<usize> {
        self.records.as_ref().map(|r| r.len())
    }

    pub fn filtered(&mut self) -> Option<&[ListingRecord]> {
        let fresh = match &self.memo {
            Some(memo) => {
                same_records(&memo.records, &self.records) && memo.criteria == self.criteria
            }
            None => false,
        };

        if !fresh {
            let output = project(self.records.as_deref().map(Vec::as_slice), &self.criteria);
            self.recomputed += 1;
            self.memo = Some(Memo {
                records: self.records.clone(),
                criteria: self.criteria.clone(),
                output,
            });
        }

        self.memo.as_ref().and_then(|m| m.output.as_deref())
    }

    /// How many times the projection has actually been computed.
    pub fn recompute_count(&self) -> u64 {
        self.recomputed
    }
}

fn same_records(a: &Option<Arc<Vec<ListingRecord>>>, b: &Option<Arc<Vec<ListingRecord>>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}
