//! Year and metric lookups spanning historical and predicted records.
//!
//! Display layers ask for "the record for 2031" or "the range of CO2 values"
//! without caring whether a year is observed or projected. These helpers
//! stitch the historical series and the cached predictions into one timeline.

use ecast_core::{EnergyRecord, Field, SeriesSource};
use serde::Serialize;

use crate::engine::ForecastEngine;

/// Where a record on the timeline comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Historical,
    Predicted,
}

impl Provenance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Provenance::Historical => "historical",
            Provenance::Predicted => "predicted",
        }
    }
}

/// A record tagged with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearView {
    #[serde(flatten)]
    pub record: EnergyRecord,
    pub provenance: Provenance,
}

/// Direction of change relative to the previous year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn between(previous: f64, current: f64) -> Trend {
        if current > previous {
            Trend::Up
        } else if current < previous {
            Trend::Down
        } else {
            Trend::Stable
        }
    }

    pub const fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
            Trend::Stable => "→",
        }
    }
}

/// Closed value range of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    /// Range covering `values`; `None` when there are no finite values.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some(MetricRange { min: v, max: v }),
                Some(MetricRange { min, max }) => Some(MetricRange {
                    min: min.min(v),
                    max: max.max(v),
                }),
            })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` inside the range, clamped to [0, 1].
    /// A flat range maps everything to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 || !span.is_finite() {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// One country's entry in a cross-country comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub country: String,
    pub value: f64,
    /// Value normalized against the country's own range, in [0, 1].
    pub normalized: f64,
    pub range: MetricRange,
    pub provenance: Provenance,
}

impl<S: SeriesSource> ForecastEngine<S> {
    /// Historical records followed by the cached predictions.
    pub fn timeline(&self, country: &str) -> Vec<YearView> {
        let Some(series) = self.series(country) else {
            return Vec::new();
        };
        let historical = series.records().iter().map(|&record| YearView {
            record,
            provenance: Provenance::Historical,
        });
        let predicted = self.predictions(country);
        historical
            .chain(predicted.iter().map(|&record| YearView {
                record,
                provenance: Provenance::Predicted,
            }))
            .collect()
    }

    /// Historical record for `year` when observed, otherwise the prediction.
    pub fn record_for_year(&self, country: &str, year: i32) -> Option<YearView> {
        let series = self.series(country)?;
        if let Some(&record) = series.get(year) {
            return Some(YearView {
                record,
                provenance: Provenance::Historical,
            });
        }
        if year <= series.last_year() {
            return None;
        }
        self.predictions(country)
            .iter()
            .find(|r| r.year == year)
            .map(|&record| YearView {
                record,
                provenance: Provenance::Predicted,
            })
    }

    /// Range of `field` over the whole timeline of `country`.
    pub fn metric_range(&self, country: &str, field: Field) -> Option<MetricRange> {
        MetricRange::from_values(self.timeline(country).iter().map(|v| v.record.get(field)))
    }

    /// Change of `field` in `year` relative to the year before.
    pub fn trend(&self, country: &str, year: i32, field: Field) -> Option<Trend> {
        let current = self.record_for_year(country, year)?;
        let previous = self.record_for_year(country, year.checked_sub(1)?)?;
        Some(Trend::between(
            previous.record.get(field),
            current.record.get(field),
        ))
    }

    /// Per-country value of `field` in `year`, normalized against each
    /// country's own timeline. Countries without data for `year` are skipped.
    pub fn compare<I, C>(&self, countries: I, year: i32, field: Field) -> Vec<ComparisonEntry>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<str>,
    {
        countries
            .into_iter()
            .filter_map(|country| {
                let country = country.as_ref();
                let view = self.record_for_year(country, year)?;
                let range = self.metric_range(country, field)?;
                let value = view.record.get(field);
                Some(ComparisonEntry {
                    country: country.to_string(),
                    value,
                    normalized: range.normalize(value),
                    range,
                    provenance: view.provenance,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecast_core::HistoricalSeries;
    use std::collections::HashMap;

    fn engine() -> ForecastEngine<HashMap<String, HistoricalSeries>> {
        let mut map = HashMap::new();
        let tunisia = (2023..=2025)
            .map(|year| {
                EnergyRecord::new(year)
                    .with(Field::Investment, 300.0 + 50.0 * f64::from(year - 2023))
                    .with(Field::RenewableShare, 15.0)
            })
            .collect();
        map.insert("tunisia".to_string(), HistoricalSeries::new(tunisia).unwrap());
        let flat = vec![EnergyRecord::new(2025).with(Field::Investment, 10.0)];
        map.insert("libya".to_string(), HistoricalSeries::new(flat).unwrap());
        ForecastEngine::new(map).with_horizon(2)
    }

    #[test]
    fn timeline_appends_predictions() {
        let timeline = engine().timeline("tunisia");
        assert_eq!(timeline.len(), 5);
        assert_eq!(timeline[2].provenance, Provenance::Historical);
        assert_eq!(timeline[3].provenance, Provenance::Predicted);
        assert_eq!(timeline[3].record.year, 2026);
        assert!(engine().timeline("atlantis").is_empty());
    }

    #[test]
    fn record_lookup_prefers_history() {
        let engine = engine();
        let hist = engine.record_for_year("tunisia", 2024).unwrap();
        assert_eq!(hist.provenance, Provenance::Historical);
        assert_eq!(hist.record.investment, 350.0);

        let pred = engine.record_for_year("tunisia", 2027).unwrap();
        assert_eq!(pred.provenance, Provenance::Predicted);

        assert!(engine.record_for_year("tunisia", 2022).is_none());
        assert!(engine.record_for_year("tunisia", 2028).is_none());
    }

    #[test]
    fn range_spans_history_and_predictions() {
        let engine = engine();
        let range = engine.metric_range("tunisia", Field::Investment).unwrap();
        assert_eq!(range.min, 300.0);
        let last_predicted = engine.predictions("tunisia")[1].investment;
        assert_eq!(range.max, last_predicted);
        assert!(range.max > 400.0);
    }

    #[test]
    fn normalize_clamps_and_handles_flat_ranges() {
        let range = MetricRange { min: 10.0, max: 20.0 };
        assert_eq!(range.normalize(15.0), 0.5);
        assert_eq!(range.normalize(5.0), 0.0);
        assert_eq!(range.normalize(25.0), 1.0);

        let flat = MetricRange { min: 3.0, max: 3.0 };
        assert_eq!(flat.normalize(3.0), 0.0);
        assert!(MetricRange::from_values(Vec::new()).is_none());
        assert!(MetricRange::from_values([f64::NAN]).is_none());
    }

    #[test]
    fn trend_crosses_into_predictions() {
        let engine = engine();
        assert_eq!(engine.trend("tunisia", 2024, Field::Investment), Some(Trend::Up));
        assert_eq!(engine.trend("tunisia", 2026, Field::Investment), Some(Trend::Up));
        assert_eq!(
            engine.trend("tunisia", 2025, Field::RenewableShare),
            Some(Trend::Stable)
        );
        assert_eq!(engine.trend("tunisia", 2023, Field::Investment), None);
        assert_eq!(Trend::between(2.0, 1.0), Trend::Down);
    }

    #[test]
    fn compare_skips_missing_countries() {
        let engine = engine();
        let entries = engine.compare(["tunisia", "atlantis", "libya"], 2024, Field::Investment);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].country, "tunisia");
        assert!((entries[0].normalized - 50.0 / entries[0].range.span()).abs() < 1e-12);

        let future = engine.compare(["tunisia", "libya"], 2026, Field::Investment);
        assert_eq!(future.len(), 2);
        assert!(future.iter().all(|e| e.provenance == Provenance::Predicted));
    }

    #[test]
    fn year_view_serializes_flat() {
        let view = engine().record_for_year("tunisia", 2025).unwrap();
        let json = serde_json::to_value(view).unwrap();
        assert_eq!(json["year"], 2025);
        assert_eq!(json["renewableShare"], 15.0);
        assert_eq!(json["provenance"], "historical");
    }
}
