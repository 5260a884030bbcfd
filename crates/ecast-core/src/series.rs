use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;

use crate::diagnostics::diagnose_records;
use crate::error::{EcastError, EcastResult};
use crate::field::Field;
use crate::record::EnergyRecord;

/// Ordered, immutable yearly records for one country.
///
/// Invariants enforced at construction: at least one record, years strictly
/// increasing and contiguous, every value finite. Records are shared behind an [`Arc`] so clones
/// are cheap and never mutate the underlying data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HistoricalSeries {
    records: Arc<[EnergyRecord]>,
}

impl HistoricalSeries {
    pub fn new(records: Vec<EnergyRecord>) -> EcastResult<Self> {
        let diag = diagnose_records(&records);
        if diag.has_errors() {
            let reasons: Vec<String> = diag.errors().map(ToString::to_string).collect();
            return Err(EcastError::Validation(reasons.join("; ")));
        }
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn records(&self) -> &[EnergyRecord] {
        &self.records
    }

    /// Most recent record.
    pub fn last(&self) -> &EnergyRecord {
        // non-empty by construction
        &self.records[self.records.len() - 1]
    }

    pub fn first_year(&self) -> i32 {
        self.records[0].year
    }

    pub fn last_year(&self) -> i32 {
        self.last().year
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for `year`, if it falls inside the series.
    pub fn get(&self, year: i32) -> Option<&EnergyRecord> {
        let offset = year.checked_sub(self.first_year())?;
        usize::try_from(offset)
            .ok()
            .and_then(|idx| self.records.get(idx))
    }

    /// Values of one field in year order.
    pub fn values(&self, field: Field) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |r| r.get(field))
    }
}

/// Resolves a country identifier to its historical series.
///
/// The forecast engine reads series through this seam and never owns or
/// mutates them.
pub trait SeriesSource {
    fn series(&self, country: &str) -> Option<&HistoricalSeries>;

    /// Key under which predictions for `country` are cached.
    ///
    /// Sources that resolve identifiers loosely must map every spelling they
    /// accept for one series to the same key.
    fn canonical_id<'a>(&self, country: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(country)
    }
}

impl<T: SeriesSource + ?Sized> SeriesSource for &T {
    fn series(&self, country: &str) -> Option<&HistoricalSeries> {
        (**self).series(country)
    }

    fn canonical_id<'a>(&self, country: &'a str) -> Cow<'a, str> {
        (**self).canonical_id(country)
    }
}

impl<T: SeriesSource + ?Sized> SeriesSource for Box<T> {
    fn series(&self, country: &str) -> Option<&HistoricalSeries> {
        (**self).series(country)
    }

    fn canonical_id<'a>(&self, country: &'a str) -> Cow<'a, str> {
        (**self).canonical_id(country)
    }
}

impl<T: SeriesSource + ?Sized> SeriesSource for Arc<T> {
    fn series(&self, country: &str) -> Option<&HistoricalSeries> {
        (**self).series(country)
    }

    fn canonical_id<'a>(&self, country: &'a str) -> Cow<'a, str> {
        (**self).canonical_id(country)
    }
}

impl SeriesSource for HashMap<String, HistoricalSeries> {
    fn series(&self, country: &str) -> Option<&HistoricalSeries> {
        self.get(country)
    }
}

impl SeriesSource for BTreeMap<String, HistoricalSeries> {
    fn series(&self, country: &str) -> Option<&HistoricalSeries> {
        self.get(country)
    }
}
