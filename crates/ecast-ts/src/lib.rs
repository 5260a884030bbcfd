//! # ecast-ts: Deterministic Energy Forecasting
//!
//! Projects yearly macro/energy indicators past the end of a historical
//! series. Every indicator has its own extrapolation model (see
//! [`Strategy`]); there is no randomness anywhere, so the same series always
//! produces bit-identical predictions.
//!
//! - [`ForecastEngine`] - resolves countries, memoizes runs, answers lookups
//! - [`generate_predictions`] / [`predict_field`] - the uncached core
//! - [`stats`] - regression and growth primitives
//! - [`PredictionCache`] - the engine's lock-guarded memo table

pub mod cache;
pub mod engine;
pub mod lookup;
pub mod stats;
pub mod strategy;

pub use cache::{PredictionCache, Predictions};
pub use engine::{generate_predictions, ForecastEngine, DEFAULT_HORIZON};
pub use lookup::{ComparisonEntry, MetricRange, Provenance, Trend, YearView};
pub use stats::{growth_rate, linear_regression, Regression, DEFAULT_GROWTH_WINDOW};
pub use strategy::{predict_field, Strategy};
