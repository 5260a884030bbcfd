//! The forecast engine: series resolution, prediction runs and memoization.

use std::sync::Arc;

use ecast_core::{EnergyRecord, Field, HistoricalSeries, SeriesSource};
use tracing::{debug, info, warn};

use crate::cache::{PredictionCache, Predictions};
use crate::strategy::predict_field;

/// Years projected by [`ForecastEngine::predictions`] unless configured otherwise.
pub const DEFAULT_HORIZON: u32 = 10;

/// Project every field of `series` for `years_ahead` consecutive years.
///
/// Record `i` (1-based) carries `year = last_year + i`; values are rounded to
/// two decimals. A zero horizon yields an empty sequence.
pub fn generate_predictions(series: &HistoricalSeries, years_ahead: u32) -> Vec<EnergyRecord> {
    let last_year = series.last_year();
    (1..=years_ahead)
        .map(|ahead| {
            let year = last_year.saturating_add(i32::try_from(ahead).unwrap_or(i32::MAX));
            Field::ALL
                .into_iter()
                .fold(EnergyRecord::new(year), |record, field| {
                    record.with(field, round2(predict_field(series, field, ahead)))
                })
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    let scaled = (value * 100.0).round() / 100.0;
    // extreme magnitudes overflow when scaled; they have no fractional part anyway
    if scaled.is_finite() {
        scaled
    } else {
        value
    }
}

/// Deterministic forecast engine with a per-country prediction cache.
///
/// Historical data is read through a [`SeriesSource`]; the engine owns only
/// its cache. All methods take `&self`, so an engine can be shared between
/// threads when the source is `Sync`.
///
/// ```rust
/// use std::collections::HashMap;
/// use ecast_core::{EnergyRecord, Field, HistoricalSeries};
/// use ecast_ts::ForecastEngine;
///
/// let mut data = HashMap::new();
/// data.insert(
///     "tunisia".to_string(),
///     HistoricalSeries::new(vec![EnergyRecord::new(2025).with(Field::RenewableShare, 15.0)])
///         .unwrap(),
/// );
///
/// let engine = ForecastEngine::new(data);
/// let predictions = engine.predictions("tunisia");
/// assert_eq!(predictions.len(), 10);
/// assert_eq!(predictions[0].year, 2026);
/// assert!(engine.predictions("atlantis").is_empty());
/// ```
#[derive(Debug)]
pub struct ForecastEngine<S> {
    source: S,
    cache: PredictionCache,
    horizon: u32,
}

impl<S: SeriesSource> ForecastEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: PredictionCache::new(),
            horizon: DEFAULT_HORIZON,
        }
    }

    /// Set the number of years produced by cached prediction runs.
    ///
    /// Changing the horizon drops previously cached runs.
    pub fn with_horizon(mut self, horizon: u32) -> Self {
        self.horizon = horizon;
        self.cache.clear();
        self
    }

    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the historical data.
    ///
    /// Cached predictions are left in place; call [`refresh`](Self::refresh)
    /// for every country whose series changed.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn cache(&self) -> &PredictionCache {
        &self.cache
    }

    pub fn series(&self, country: &str) -> Option<&HistoricalSeries> {
        self.source.series(country)
    }

    /// Cached predictions for `country`, computed on first request.
    ///
    /// Entries are keyed by the source's canonical id, so every spelling the
    /// source accepts shares one entry. Unknown countries yield an empty
    /// sequence and are not cached.
    pub fn predictions(&self, country: &str) -> Predictions {
        let key = self.source.canonical_id(country);
        if let Some(hit) = self.cache.get(&key) {
            debug!(country = %key, "prediction cache hit");
            return hit;
        }
        self.cache
            .get_or_compute(&key, || self.compute(&key))
            .unwrap_or_else(empty)
    }

    /// Replace any cached entry for `country` with a fresh computation.
    pub fn refresh(&self, country: &str) -> Predictions {
        let key = self.source.canonical_id(country);
        debug!(country = %key, "refreshing predictions");
        self.cache
            .recompute(&key, || self.compute(&key))
            .unwrap_or_else(empty)
    }

    /// Uncached prediction run for an arbitrary horizon.
    pub fn generate(&self, country: &str, years_ahead: u32) -> Vec<EnergyRecord> {
        match self.source.series(country) {
            Some(series) => generate_predictions(series, years_ahead),
            None => {
                warn!(country, "no historical series registered");
                Vec::new()
            }
        }
    }

    fn compute(&self, country: &str) -> Option<Predictions> {
        let Some(series) = self.source.series(country) else {
            warn!(country, "no historical series registered");
            return None;
        };
        let records = generate_predictions(series, self.horizon);
        info!(
            country,
            years = records.len(),
            from = series.last_year() + 1,
            "computed predictions"
        );
        Some(Arc::from(records))
    }
}

fn empty() -> Predictions {
    Arc::from(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn source() -> BTreeMap<String, HistoricalSeries> {
        let records = (2021..=2025)
            .map(|year| {
                let t = f64::from(year - 2021);
                EnergyRecord::new(year)
                    .with(Field::Population, 12.0 + 0.1 * t)
                    .with(Field::Gdp, 46.0 + 1.5 * t)
                    .with(Field::RenewableShare, 6.0 + 2.0 * t)
                    .with(Field::OilProduction, 1.2 - 0.05 * t)
                    .with(Field::OilReserves, 320.0 - 5.0 * t)
                    .with(Field::Co2Emissions, 17.0 + 0.3 * t)
            })
            .collect();
        let mut map = BTreeMap::new();
        map.insert("tunisia".to_string(), HistoricalSeries::new(records).unwrap());
        map
    }

    #[test]
    fn horizon_starts_after_last_year() {
        let engine = ForecastEngine::new(source());
        let years: Vec<i32> = engine.predictions("tunisia").iter().map(|r| r.year).collect();
        assert_eq!(years, (2026..=2035).collect::<Vec<_>>());
    }

    #[test]
    fn values_are_rounded_to_cents() {
        let engine = ForecastEngine::new(source());
        for record in engine.predictions("tunisia").iter() {
            for field in Field::ALL {
                let v = record.get(field);
                assert!(((v * 100.0).round() / 100.0 - v).abs() < 1e-9, "{field}: {v}");
            }
        }
    }

    #[test]
    fn cached_runs_share_allocation() {
        let engine = ForecastEngine::new(source());
        let first = engine.predictions("tunisia");
        let second = engine.predictions("tunisia");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(engine.cache().len(), 1);
    }

    #[test]
    fn refresh_is_fresh_but_identical() {
        let engine = ForecastEngine::new(source());
        let first = engine.predictions("tunisia");
        let refreshed = engine.refresh("tunisia");
        assert!(!Arc::ptr_eq(&first, &refreshed));
        assert_eq!(&*first, &*refreshed);
        assert!(Arc::ptr_eq(&refreshed, &engine.predictions("tunisia")));
    }

    #[test]
    fn unknown_country_is_empty_and_uncached() {
        let engine = ForecastEngine::new(source());
        assert!(engine.predictions("atlantis").is_empty());
        assert!(engine.refresh("atlantis").is_empty());
        assert!(engine.generate("atlantis", 3).is_empty());
        assert!(engine.cache().is_empty());
    }

    #[test]
    fn zero_horizon_is_empty() {
        let engine = ForecastEngine::new(source()).with_horizon(0);
        assert!(engine.predictions("tunisia").is_empty());
        assert!(engine.generate("tunisia", 0).is_empty());
    }

    #[test]
    fn generate_honours_custom_horizon() {
        let engine = ForecastEngine::new(source());
        let records = engine.generate("tunisia", 3);
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].year, 2028);
        assert_eq!(&records[..], &engine.predictions("tunisia")[..3]);
    }

    #[test]
    fn source_updates_apply_after_refresh() {
        let mut engine = ForecastEngine::new(source());
        let before = engine.predictions("tunisia");

        let extended: Vec<EnergyRecord> = engine
            .series("tunisia")
            .unwrap()
            .records()
            .iter()
            .copied()
            .chain(std::iter::once(EnergyRecord::new(2026)))
            .collect();
        engine
            .source_mut()
            .insert("tunisia".to_string(), HistoricalSeries::new(extended).unwrap());

        assert_eq!(engine.predictions("tunisia")[0].year, before[0].year);
        assert_eq!(engine.refresh("tunisia")[0].year, 2027);
    }
}
