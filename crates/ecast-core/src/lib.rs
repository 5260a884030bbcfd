//! # ecast-core: Energy Series Model
//!
//! Data structures shared by the ecast forecast toolkit.
//!
//! ## Data Model
//!
//! - [`Field`] - closed set of the thirteen tracked indicators
//! - [`EnergyRecord`] - one country-year of observations (historical or predicted)
//! - [`HistoricalSeries`] - validated, gapless, immutable yearly records
//! - [`SeriesSource`] - resolves a country identifier to its series
//!
//! ## Quick Start
//!
//! ```rust
//! use ecast_core::{EnergyRecord, Field, HistoricalSeries};
//!
//! let series = HistoricalSeries::new(vec![
//!     EnergyRecord::new(2024).with(Field::RenewableShare, 12.0),
//!     EnergyRecord::new(2025).with(Field::RenewableShare, 15.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(series.last_year(), 2025);
//! assert_eq!(series.last().get(Field::RenewableShare), 15.0);
//! ```
//!
//! ## Modules
//!
//! - [`diagnostics`] - dataset checks reported as warnings and errors
//! - [`error`] - the unified [`EcastError`] type

pub mod diagnostics;
pub mod error;
pub mod field;
pub mod record;
pub mod series;

pub use diagnostics::{diagnose_records, DiagnosticIssue, Diagnostics, Severity};
pub use error::{EcastError, EcastResult};
pub use field::Field;
pub use record::EnergyRecord;
pub use series::{HistoricalSeries, SeriesSource};
